//! Run configuration loaded from a JSON file
//!
//! The file names the site to extract from:
//!
//! ```json
//! {
//!   "homepage_url": "https://example.com",
//!   "page_url": "https://example.com/products/42",
//!   "headless": true,
//!   "blocked_domains": ["google-analytics.com"],
//!   "output_dir": "data"
//! }
//! ```
//!
//! Only the two URLs are required.

use crate::browser::LaunchOptions;
use crate::error::{ExtractorError, Result};
use crate::output::DEFAULT_OUTPUT_DIR;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

fn default_headless() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// One extraction run: where to establish session state, which page to
/// extract, and how to run the browser
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Homepage visited first so first-load cookies exist
    pub homepage_url: String,

    /// Page the payload is extracted from
    pub page_url: String,

    /// Run the browser without a visible window (default: true)
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Hosts to suppress during page load. `None` keeps the built-in list.
    #[serde(default)]
    pub blocked_domains: Option<Vec<String>>,

    /// Directory artifacts are written to (default: `data`)
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl RunConfig {
    /// Load a run configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ExtractorError::ConfigFailed {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&text).map_err(|e| ExtractorError::ConfigFailed {
            path: path.to_owned(),
            reason: e.to_string(),
        })
    }

    /// Browser launch options this configuration implies
    pub fn launch_options(&self) -> LaunchOptions {
        let mut options = LaunchOptions::new().headless(self.headless);
        if let Some(domains) = &self.blocked_domains {
            options = options.blocked_domains(domains.clone());
        }
        options
    }
}
