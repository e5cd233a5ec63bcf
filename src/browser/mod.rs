//! Browser session management and configuration
//!
//! This module provides everything needed to put a ready browser on screen
//! (or off it):
//! - LaunchOptions: headless mode, window size, anti-detection knobs
//! - ChromeLocator: platform-specific executable resolution
//! - BrowserSession: a scoped Chrome instance with navigation and
//!   evaluation helpers

pub mod config;
pub mod resolver;
pub mod session;

pub use config::{DEFAULT_BLOCKED_DOMAINS, LaunchOptions};
pub use resolver::{CHROME_ENV, ChromeLocator, PathLocator, WindowsLocator, platform_locator, resolve_chrome};
pub use session::BrowserSession;
