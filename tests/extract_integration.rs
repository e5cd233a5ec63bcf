use next_extract::{JsonStore, LaunchOptions, NextDataExtractor};
use serde_json::json;

fn data_url(html: &str) -> String {
    format!("data:text/html,{}", urlencoding::encode(html))
}

fn test_options() -> LaunchOptions {
    // data: pages load nothing external, so the blocklist argument is noise here
    LaunchOptions::new().headless(true).blocked_domains(Vec::new())
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_extracts_page_props_end_to_end() {
    let html = r#"<html><head><script id="__NEXT_DATA__" type="application/json">{"props":{"pageProps":{"a":1}}}</script></head><body></body></html>"#;

    let extractor = NextDataExtractor::with_options("about:blank", test_options());
    let props = extractor
        .extract_page_props(&data_url(html))
        .expect("extraction failed");

    assert_eq!(props, Some(json!({"a": 1})));
}

#[test]
#[ignore]
fn test_page_without_script_yields_none() {
    let html = "<html><body><p>No embedded payload here</p></body></html>";

    let extractor = NextDataExtractor::with_options("about:blank", test_options());
    let props = extractor
        .extract_page_props(&data_url(html))
        .expect("extraction failed");

    assert_eq!(props, None);
}

#[test]
#[ignore]
fn test_invalid_payload_yields_none() {
    let html = r#"<html><head><script id="__NEXT_DATA__">not valid json</script></head></html>"#;

    let extractor = NextDataExtractor::with_options("about:blank", test_options());
    let props = extractor
        .extract_page_props(&data_url(html))
        .expect("extraction failed");

    assert_eq!(props, None);
}

#[test]
#[ignore]
fn test_document_without_page_props_yields_none() {
    let html = r#"<html><head><script id="__NEXT_DATA__">{"props":{"other":true}}</script></head></html>"#;

    let extractor = NextDataExtractor::with_options("about:blank", test_options());
    let props = extractor
        .extract_page_props(&data_url(html))
        .expect("extraction failed");

    assert_eq!(props, None);
}

#[test]
#[ignore]
fn test_extract_and_save_writes_artifact() {
    let html = r#"<html><head><script id="__NEXT_DATA__">{"props":{"pageProps":{"title":"Test Page"}}}</script></head></html>"#;
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path());

    let extractor = NextDataExtractor::with_options("about:blank", test_options());
    let page_url = data_url(html);
    let path = extractor
        .extract_and_save(&page_url, &store)
        .expect("extraction failed")
        .expect("payload should be present");

    assert!(path.exists());
    assert_eq!(store.load(&page_url).unwrap(), json!({"title": "Test Page"}));
}
