//! # next-extract
//!
//! A Rust tool for extracting the `pageProps` payload from server-rendered
//! Next.js pages, driving a real Chrome/Chromium instance via the Chrome
//! DevTools Protocol (CDP).
//!
//! Next.js serializes the data a page was rendered with into a
//! `<script id="__NEXT_DATA__" type="application/json">` element for
//! client-side hydration. This crate loads the page in a browser (so any
//! session state the site expects is present), reads that script, and
//! persists the `props.pageProps` subtree as a pretty-printed JSON file.
//!
//! ## Features
//!
//! - **Browser Session Management**: launch Chrome/Chromium with
//!   anti-automation-detection arguments and host blocking for noisy
//!   analytics domains
//! - **Homepage-first visits**: first-load cookies exist before the target
//!   page is fetched
//! - **Two-tier outcomes**: pages without the payload are a normal
//!   `Ok(None)`, not an error; browser failures are typed errors
//! - **Deterministic artifacts**: filenames derive from the source URL, so
//!   re-extraction overwrites rather than duplicates
//!
//! ## CLI
//!
//! ```bash
//! # website_details.json holds homepage_url + page_url
//! cargo run -- website_details.json
//!
//! # Watch the browser while debugging a page that yields nothing
//! RUST_LOG=debug cargo run -- website_details.json --headed
//! ```
//!
//! ## Library Usage
//!
//! ### Basic extraction
//!
//! ```rust,no_run
//! use next_extract::{JsonStore, NextDataExtractor};
//!
//! # fn main() -> next_extract::Result<()> {
//! let extractor = NextDataExtractor::new("https://example.com");
//!
//! match extractor.extract_page_props("https://example.com/products/42")? {
//!     Some(props) => {
//!         let store = JsonStore::default();
//!         let path = store.save(&props, "https://example.com/products/42")?;
//!         println!("saved to {}", path.display());
//!     }
//!     None => println!("page carries no pageProps payload"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Tuning the browser
//!
//! ```rust,no_run
//! use next_extract::{LaunchOptions, NextDataExtractor};
//! use std::time::Duration;
//!
//! # fn main() -> next_extract::Result<()> {
//! let options = LaunchOptions::new()
//!     .headless(false)
//!     .blocked_domains(vec!["ads.example.com".to_string()])
//!     .page_load_timeout(Duration::from_secs(60));
//!
//! let extractor = NextDataExtractor::with_options("https://example.com", options);
//! let props = extractor.extract_page_props("https://example.com/products/42")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: browser session management, launch configuration, and
//!   platform-specific Chrome resolution
//! - [`extract`]: locating and parsing the `__NEXT_DATA__` payload
//! - [`output`]: JSON artifact persistence with deterministic naming
//! - [`config`]: run configuration loaded from a JSON file
//! - [`error`]: error types and result alias

pub mod browser;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;

pub use browser::{BrowserSession, ChromeLocator, LaunchOptions};
pub use config::RunConfig;
pub use error::{ExtractorError, Result};
pub use extract::{NEXT_DATA_SCRIPT_ID, NextDataExtractor, PayloadMissing, extract_next_data};
pub use output::JsonStore;
