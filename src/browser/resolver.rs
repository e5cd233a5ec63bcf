//! Platform-specific Chrome/Chromium executable resolution
//!
//! The launcher needs a browser binary. Where one lives differs per
//! platform, so resolution is a single capability behind [`ChromeLocator`]
//! with an OS-specific strategy picked at runtime by [`platform_locator`].

use crate::error::{ExtractorError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides all platform resolution
pub const CHROME_ENV: &str = "NEXT_EXTRACT_CHROME";

/// Strategy for locating a runnable Chrome/Chromium executable
pub trait ChromeLocator {
    /// Return the path to a browser binary, or [`ExtractorError::BrowserNotFound`]
    fn locate(&self) -> Result<PathBuf>;
}

/// Windows strategy: scan the standard per-machine and per-user install
/// directories.
pub struct WindowsLocator;

impl WindowsLocator {
    const INSTALL_SUBPATH: &'static str = r"Google\Chrome\Application\chrome.exe";

    fn install_roots() -> Vec<PathBuf> {
        ["ProgramFiles", "ProgramFiles(x86)", "LocalAppData"]
            .iter()
            .filter_map(env::var_os)
            .map(PathBuf::from)
            .collect()
    }
}

impl ChromeLocator for WindowsLocator {
    fn locate(&self) -> Result<PathBuf> {
        for root in Self::install_roots() {
            let candidate = root.join(Self::INSTALL_SUBPATH);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
        Err(ExtractorError::BrowserNotFound(
            "Chrome is not installed under the standard Windows directories".to_string(),
        ))
    }
}

/// Non-Windows strategy: scan `$PATH` for the usual binary names, then a
/// handful of well-known absolute locations.
pub struct PathLocator;

impl PathLocator {
    const BINARY_NAMES: &'static [&'static str] = &[
        "google-chrome",
        "google-chrome-stable",
        "chromium",
        "chromium-browser",
        "chrome",
    ];

    const FALLBACK_PATHS: &'static [&'static str] = &[
        "/usr/bin/google-chrome",
        "/usr/bin/chromium",
        "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
        "/Applications/Chromium.app/Contents/MacOS/Chromium",
    ];

    fn search(dirs: &[PathBuf]) -> Option<PathBuf> {
        for dir in dirs {
            for name in Self::BINARY_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
        None
    }
}

impl ChromeLocator for PathLocator {
    fn locate(&self) -> Result<PathBuf> {
        let dirs: Vec<PathBuf> = env::var_os("PATH")
            .map(|path| env::split_paths(&path).collect())
            .unwrap_or_default();

        if let Some(found) = Self::search(&dirs) {
            return Ok(found);
        }

        for fallback in Self::FALLBACK_PATHS {
            let candidate = Path::new(fallback);
            if candidate.is_file() {
                return Ok(candidate.to_path_buf());
            }
        }

        Err(ExtractorError::BrowserNotFound(
            "no Chrome/Chromium binary on PATH".to_string(),
        ))
    }
}

/// Pick the locator strategy for the current operating system
pub fn platform_locator() -> Box<dyn ChromeLocator> {
    match env::consts::OS {
        "windows" => Box::new(WindowsLocator),
        _ => Box::new(PathLocator),
    }
}

/// Resolve a browser binary: `NEXT_EXTRACT_CHROME` wins, otherwise the
/// platform strategy runs.
pub fn resolve_chrome() -> Result<PathBuf> {
    if let Some(path) = env::var_os(CHROME_ENV) {
        return Ok(PathBuf::from(path));
    }
    platform_locator().locate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_search_finds_named_binary() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("chromium"), "").unwrap();

        let found = PathLocator::search(&[dir.path().to_path_buf()]);
        assert_eq!(found, Some(dir.path().join("chromium")));
    }

    #[test]
    fn test_search_prefers_earlier_directories() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("google-chrome"), "").unwrap();
        fs::write(second.path().join("google-chrome"), "").unwrap();

        let dirs = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(PathLocator::search(&dirs), Some(first.path().join("google-chrome")));
    }

    #[test]
    fn test_search_misses_empty_directories() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(PathLocator::search(&[dir.path().to_path_buf()]), None);
    }

    #[test]
    fn test_search_ignores_directories_named_like_binaries() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("chrome")).unwrap();
        assert_eq!(PathLocator::search(&[dir.path().to_path_buf()]), None);
    }

    #[test]
    fn test_platform_locator_selects_a_strategy() {
        // Smoke check: selection is keyed on the runtime OS and never panics.
        let _ = platform_locator();
    }
}
