use crate::browser::config::LaunchOptions;
use crate::browser::resolver;
use crate::error::{ExtractorError, Result};
use headless_chrome::{Browser, Tab};
use std::ffi::{OsStr, OsString};
use std::sync::Arc;
use std::time::{Duration, Instant};

const READY_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Browser session that manages a Chrome/Chromium instance and one tab.
///
/// The session is a scoped resource: dropping it kills the underlying
/// browser process, so release is guaranteed on every exit path.
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// The tab all operations run against
    tab: Arc<Tab>,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        // Owned argument strings; headless_chrome borrows them for the spawn.
        let mut args: Vec<OsString> = vec![
            OsString::from("--disable-blink-features=AutomationControlled"),
            OsString::from("--disable-extensions"),
            OsString::from("--disable-popup-blocking"),
            OsString::from("--disable-infobars"),
            OsString::from("--disable-notifications"),
            OsString::from("--disable-dev-shm-usage"),
            OsString::from("--disable-gpu"),
            OsString::from(format!("--user-agent={}", options.user_agent)),
            OsString::from(format!("--lang={}", options.accept_language)),
        ];

        // Suppress analytics/tracking requests so they cannot stall the load
        if !options.blocked_domains.is_empty() {
            args.push(OsString::from(format!(
                "--host-blocking-patterns={}",
                options.blocked_domains.join(",")
            )));
        }

        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Ignore default arguments to prevent detection by anti-bot services
        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args = args.iter().map(OsString::as_os_str).collect();

        launch_opts.headless = options.headless;
        launch_opts.sandbox = options.sandbox;
        launch_opts.window_size = Some((options.window_width, options.window_height));

        // Keep the idle timeout well above the longest extraction pipeline;
        // the headless_chrome default of 30s can tear the session down mid-wait.
        launch_opts.idle_browser_timeout = Duration::from_secs(300);

        let chrome = match &options.chrome_path {
            Some(path) => path.clone(),
            None => resolver::resolve_chrome()?,
        };
        log::debug!("launching {}", chrome.display());
        launch_opts.path = Some(chrome);

        if let Some(dir) = &options.user_data_dir {
            launch_opts.user_data_dir = Some(dir.clone());
        }

        let browser = Browser::new(launch_opts).map_err(|e| ExtractorError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| ExtractorError::LaunchFailed(format!("failed to create tab: {}", e)))?;
        tab.set_default_timeout(options.page_load_timeout);

        Ok(Self { browser, tab })
    }

    /// Launch a browser with default options
    pub fn new() -> Result<Self> {
        Self::launch(LaunchOptions::default())
    }

    /// Get the session's tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Navigate to a URL
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| ExtractorError::NavigationFailed(format!("failed to navigate to {}: {}", url, e)))?;

        Ok(())
    }

    /// Wait for navigation to complete
    pub fn wait_for_navigation(&self) -> Result<()> {
        self.tab
            .wait_until_navigated()
            .map_err(|e| ExtractorError::NavigationFailed(format!("navigation timeout: {}", e)))?;

        Ok(())
    }

    /// Poll `document.readyState` until the page reports `complete` or the
    /// timeout elapses
    pub fn wait_until_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;

        loop {
            let ready = self
                .evaluate("document.readyState")?
                .and_then(|state| state.as_str().map(|s| s == "complete"))
                .unwrap_or(false);

            if ready {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(ExtractorError::LoadTimeout(timeout));
            }

            std::thread::sleep(READY_POLL_INTERVAL);
        }
    }

    /// Evaluate a JavaScript expression in the page and return its value,
    /// if it produced one
    pub fn evaluate(&self, expression: &str) -> Result<Option<serde_json::Value>> {
        let object = self
            .tab
            .evaluate(expression, false)
            .map_err(|e| ExtractorError::EvaluationFailed(e.to_string()))?;

        Ok(object.value)
    }

    /// Scroll the page vertically, triggering any lazy-loaded content
    pub fn scroll_by(&self, delta_y: i64) -> Result<()> {
        self.evaluate(&format!("window.scrollBy(0, {});", delta_y))?;
        Ok(())
    }

    /// Close the browser
    pub fn close(self) -> Result<()> {
        // headless_chrome has no public shutdown; dropping the Browser kills
        // the process. Closing tabs first lets Chrome exit cleanly.
        let tabs = self
            .browser
            .get_tabs()
            .lock()
            .map_err(|e| ExtractorError::TabOperationFailed(format!("failed to list tabs: {}", e)))?
            .clone();

        for tab in tabs {
            let _ = tab.close(false); // Ignore errors on individual tab closes
        }

        Ok(())
    }
}
