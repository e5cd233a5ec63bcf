//! Browser launch configuration

use std::path::PathBuf;
use std::time::Duration;

/// Analytics and tracking hosts blocked by default so their requests cannot
/// stall page load.
pub const DEFAULT_BLOCKED_DOMAINS: &[&str] = &[
    "plausible.io",
    "google-analytics.com",
    "analytics.google.com",
    "googletagmanager.com",
    "hotjar.com",
    "mixpanel.com",
    "segment.io",
    "segment.com",
    "matomo.cloud",
    "matomo.org",
    "clarity.ms",
    "facebook.net",
    "facebook.com",
    "linkedin.com",
    "twitter.com",
    "amplitude.com",
    "heap.io",
    "fullstory.com",
    "logrocket.com",
    "mouseflow.com",
    "doubleclick.net",
    "quantserve.com",
    "scorecardresearch.com",
    "chartbeat.com",
    "kissmetrics.com",
    "clicky.com",
    "newrelic.com",
    "adobe.com",
    "crazyegg.com",
];

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

const DEFAULT_ACCEPT_LANGUAGE: &str = "nl-NL,nl;q=0.9,en-US;q=0.8,en;q=0.7";

/// Options for launching a browser instance
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Run the browser without a visible window (default: true)
    pub headless: bool,

    /// Browser window width in pixels
    pub window_width: u32,

    /// Browser window height in pixels
    pub window_height: u32,

    /// Explicit path to the Chrome/Chromium binary. When `None`, the
    /// platform locator resolves one.
    pub chrome_path: Option<PathBuf>,

    /// Custom user data directory
    pub user_data_dir: Option<PathBuf>,

    /// Whether to run Chrome with its sandbox enabled
    pub sandbox: bool,

    /// User agent reported to pages
    pub user_agent: String,

    /// Accept-Language preference string passed to Chrome
    pub accept_language: String,

    /// Hosts whose requests are suppressed during page load
    pub blocked_domains: Vec<String>,

    /// How long to wait for `document.readyState` to report `complete`
    pub page_load_timeout: Duration,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            chrome_path: None,
            user_data_dir: None,
            sandbox: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            blocked_domains: DEFAULT_BLOCKED_DOMAINS.iter().map(|d| d.to_string()).collect(),
            page_load_timeout: Duration::from_secs(30),
        }
    }
}

impl LaunchOptions {
    /// Create launch options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set headless mode
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set window size
    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Set an explicit Chrome binary path, bypassing platform resolution
    pub fn chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Set the user data directory
    pub fn user_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_data_dir = Some(dir.into());
        self
    }

    /// Set sandbox mode
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Set the user agent string
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the Accept-Language preference string
    pub fn accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = accept_language.into();
        self
    }

    /// Replace the blocked-domain list. An empty list disables host blocking.
    pub fn blocked_domains(mut self, domains: Vec<String>) -> Self {
        self.blocked_domains = domains;
        self
    }

    /// Set the page-load timeout
    pub fn page_load_timeout(mut self, timeout: Duration) -> Self {
        self.page_load_timeout = timeout;
        self
    }
}
