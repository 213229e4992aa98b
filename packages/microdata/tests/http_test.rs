//! Document download tests against a mock HTTP server.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use microdata_extractor::{extract_microdata, MicrodataError, SourceConfig, Syntax};

const PERSON: &str = r#"<html><body>
    <div itemscope itemtype="http://schema.org/Person">
        <span itemprop="name">Jane Doe</span>
    </div>
</body></html>"#;

/// The blocking client must not run on the async runtime's worker threads.
async fn extract_blocking(
    config: SourceConfig,
) -> microdata_extractor::Result<microdata_extractor::Microdata> {
    tokio::task::spawn_blocking(move || extract_microdata(&config))
        .await
        .expect("blocking task")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_extract_from_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/person.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PERSON))
        .mount(&mock_server)
        .await;

    let config = SourceConfig::from_url(format!("{}/person.html", mock_server.uri()));
    let data = extract_blocking(config).await.expect("extraction");

    assert_eq!(data.items.len(), 1);
    assert_eq!(data.items[0].text("name"), Some("Jane Doe"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_extract_xhtml_from_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/person.xhtml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><div itemscope=""><span itemprop="name">Jane Doe</span></div></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let config = SourceConfig::from_url(format!("{}/person.xhtml", mock_server.uri()))
        .with_syntax(Syntax::Xhtml);
    let data = extract_blocking(config).await.expect("extraction");

    assert_eq!(data.items[0].text("name"), Some("Jane Doe"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_is_a_download_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let url = format!("{}/missing.html", mock_server.uri());
    let err = extract_blocking(SourceConfig::from_url(url.clone()))
        .await
        .expect_err("should fail");

    match err {
        MicrodataError::Download { url: failed, .. } => assert_eq!(failed, url),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_errors_exhaust_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = SourceConfig::from_url(format!("{}/flaky.html", mock_server.uri()));
    let err = extract_blocking(config).await.expect_err("should fail");

    assert!(matches!(
        err,
        MicrodataError::RetriesExhausted { attempts: 3, .. }
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_oversized_response_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PERSON))
        .mount(&mock_server)
        .await;

    let config =
        SourceConfig::from_url(format!("{}/big.html", mock_server.uri())).with_max_size(16);
    let err = extract_blocking(config).await.expect_err("should fail");

    assert!(matches!(
        err,
        MicrodataError::ResponseTooLarge { limit: 16, .. }
    ));
}
