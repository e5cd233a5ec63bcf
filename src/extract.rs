//! pageProps extraction from server-rendered Next.js pages
//!
//! Next.js embeds the data a page was rendered with in a
//! `<script id="__NEXT_DATA__" type="application/json">` element for
//! client-side hydration. Reading that script is far more robust than
//! scraping the rendered markup: it is the exact payload the page's
//! components consumed, nested under `props.pageProps`.
//!
//! Pages that do not follow this convention are a normal outcome, not an
//! error: extraction returns `Ok(None)` and logs why.

use crate::browser::{BrowserSession, LaunchOptions};
use crate::error::Result;
use crate::output::JsonStore;
use rand::Rng;
use serde_json::Value;
use std::ops::Range;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Id of the script element Next.js embeds its payload in
pub const NEXT_DATA_SCRIPT_ID: &str = "__NEXT_DATA__";

/// Distance scrolled after navigation to trigger lazy-loaded content
const LAZY_LOAD_SCROLL_PX: i64 = 300;

const NEXT_DATA_JS: &str = r#"
    (function() {
        var el = document.getElementById('__NEXT_DATA__');
        if (el) return el.textContent;
        return null;
    })()
"#;

/// Why a loaded page yielded no payload. Diagnostic only: callers of
/// [`NextDataExtractor::extract_page_props`] see all of these collapsed
/// into `Ok(None)`.
#[derive(Debug, Error)]
pub enum PayloadMissing {
    /// The page has no `__NEXT_DATA__` script element
    #[error("no script element with id \"__NEXT_DATA__\" on the page")]
    ScriptAbsent,

    /// The script element exists but holds no text
    #[error("the __NEXT_DATA__ script element is empty")]
    EmptyScript,

    /// The script text is not valid JSON
    #[error("__NEXT_DATA__ is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The parsed document has no top-level `props` key
    #[error("parsed document has no \"props\" key")]
    NoProps,

    /// `props` exists but has no `pageProps` key
    #[error("\"props\" has no \"pageProps\" key")]
    NoPageProps,
}

/// Extractor for the `pageProps` payload of Next.js pages.
///
/// Each extraction call launches a scoped [`BrowserSession`], visits the
/// homepage first so first-load session state (cookies) exists, then
/// navigates to the target page and reads the embedded payload. The
/// session is released on every exit path.
pub struct NextDataExtractor {
    homepage_url: String,
    options: LaunchOptions,
}

impl NextDataExtractor {
    /// Create an extractor with default launch options
    pub fn new(homepage_url: impl Into<String>) -> Self {
        Self::with_options(homepage_url, LaunchOptions::default())
    }

    /// Create an extractor with explicit launch options
    pub fn with_options(homepage_url: impl Into<String>, options: LaunchOptions) -> Self {
        Self { homepage_url: homepage_url.into(), options }
    }

    /// The homepage visited before each target page
    pub fn homepage_url(&self) -> &str {
        &self.homepage_url
    }

    /// Extract the `pageProps` payload from a page.
    ///
    /// Returns `Ok(Some(value))` on success and `Ok(None)` when the page
    /// loaded but carried no usable payload (missing script element,
    /// invalid JSON, or missing `props.pageProps`). Browser and navigation
    /// failures surface as `Err`.
    pub fn extract_page_props(&self, page_url: &str) -> Result<Option<Value>> {
        let session = BrowserSession::launch(self.options.clone())?;

        // Run the pipeline before tearing the session down, whatever the outcome
        let outcome = self.run(&session, page_url);
        if let Err(e) = session.close() {
            log::debug!("browser teardown reported: {}", e);
        }

        outcome
    }

    fn run(&self, session: &BrowserSession, page_url: &str) -> Result<Option<Value>> {
        log::info!("visiting homepage {} to establish session state", self.homepage_url);
        session.navigate(&self.homepage_url)?;
        session.wait_for_navigation()?;
        pause(2.0..4.0);

        log::info!("navigating to {}", page_url);
        session.navigate(page_url)?;
        session.wait_for_navigation()?;
        pause(3.0..5.0);

        session.scroll_by(LAZY_LOAD_SCROLL_PX)?;
        pause(1.0..2.0);

        session.wait_until_ready(self.options.page_load_timeout)?;
        pause(2.0..3.0);

        let script_text = session
            .evaluate(NEXT_DATA_JS)?
            .and_then(|value| value.as_str().map(str::to_owned));

        match page_props_from_script(script_text.as_deref()) {
            Ok(props) => Ok(Some(props)),
            Err(reason) => {
                log::warn!("no pageProps payload at {}: {}", page_url, reason);
                Ok(None)
            }
        }
    }

    /// Extract the payload and persist it through `store`.
    ///
    /// Returns the written path, or `Ok(None)` when the page carried no
    /// payload (nothing is written in that case).
    pub fn extract_and_save(&self, page_url: &str, store: &JsonStore) -> Result<Option<PathBuf>> {
        match self.extract_page_props(page_url)? {
            Some(props) => store.save(&props, page_url).map(Some),
            None => Ok(None),
        }
    }

    /// Page-load timeout currently in effect
    pub fn page_load_timeout(&self) -> Duration {
        self.options.page_load_timeout
    }
}

/// One-shot convenience: extract from `page_url` and persist through `store`
pub fn extract_next_data(
    homepage_url: &str,
    page_url: &str,
    options: LaunchOptions,
    store: &JsonStore,
) -> Result<Option<PathBuf>> {
    NextDataExtractor::with_options(homepage_url, options).extract_and_save(page_url, store)
}

/// Parse the text content of a `__NEXT_DATA__` script element down to its
/// `props.pageProps` value. `None` means the element was absent.
pub fn page_props_from_script(text: Option<&str>) -> std::result::Result<Value, PayloadMissing> {
    let text = text.ok_or(PayloadMissing::ScriptAbsent)?;
    if text.trim().is_empty() {
        return Err(PayloadMissing::EmptyScript);
    }

    log::debug!("__NEXT_DATA__ script found with length {}", text.len());
    if log::log_enabled!(log::Level::Debug) && text.len() > 100 {
        let sample: String = text.chars().take(100).collect();
        log::debug!("payload sample: {}...", sample);
    }

    let document: Value = serde_json::from_str(text)?;
    page_props_from_document(&document)
}

fn page_props_from_document(document: &Value) -> std::result::Result<Value, PayloadMissing> {
    let props = document.get("props").ok_or(PayloadMissing::NoProps)?;
    props.get("pageProps").cloned().ok_or(PayloadMissing::NoPageProps)
}

/// Sleep for a uniformly random duration, simulating human pacing
fn pause(seconds: Range<f64>) {
    let secs = rand::thread_rng().gen_range(seconds);
    std::thread::sleep(Duration::from_secs_f64(secs));
}
