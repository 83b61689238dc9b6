use head_meta::config::UserAgentConfig;
use head_meta::{fetch_and_extract, ExtractOptions, Fetcher};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>Article</title>
    <link rel="icon" href="favicon.ico">
    <link rel="apple-touch-icon" href="/apple-touch-icon.png">
    <meta property="og:title" content="An Article">
    <meta property="og:image" content="https://cdn.example.org/cover.png">
    <meta name="twitter:card" content="summary_large_image">
</head>
<body><p>Body</p></body>
</html>"#;

async fn mount_article(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/blog/post"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(ARTICLE_HTML)
                .insert_header("content-type", "text/html"),
        )
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_fetch_resolves_icons_against_fetched_url() {
    let mock_server = MockServer::start().await;
    mount_article(&mock_server).await;

    let url = format!("{}/blog/post", mock_server.uri());
    let metadata = fetch_and_extract(&url, &ExtractOptions::default())
        .await
        .expect("fetch should succeed");

    assert_eq!(metadata.get("lang"), Some("en"));
    assert_eq!(metadata.get("title"), Some("Article"));
    assert_eq!(
        metadata.get("favicon"),
        Some(format!("{}/blog/favicon.ico", mock_server.uri()).as_str())
    );
    assert_eq!(
        metadata.get("apple-touch-icon"),
        Some(format!("{}/apple-touch-icon.png", mock_server.uri()).as_str())
    );
    assert_eq!(metadata.get("og:title"), Some("An Article"));
    assert_eq!(metadata.get("twitter:card"), Some("summary_large_image"));
}

#[tokio::test]
async fn test_fetch_prefers_caller_base_url() {
    let mock_server = MockServer::start().await;
    mount_article(&mock_server).await;

    let url = format!("{}/blog/post", mock_server.uri());
    let options = ExtractOptions::new().with_base_url("https://example.com");
    let metadata = fetch_and_extract(&url, &options).await.unwrap();

    assert_eq!(metadata.get("favicon"), Some("https://example.com/favicon.ico"));
}

#[tokio::test]
async fn test_fetch_applies_meta_tag_filter() {
    let mock_server = MockServer::start().await;
    mount_article(&mock_server).await;

    let url = format!("{}/blog/post", mock_server.uri());
    let options = ExtractOptions::new().with_meta_tags(["og:image", "og:description"]);
    let metadata = fetch_and_extract(&url, &options).await.unwrap();

    let entries: Vec<_> = metadata.iter().collect();
    assert_eq!(entries, vec![("og:image", "https://cdn.example.org/cover.png")]);
}

#[tokio::test]
async fn test_fetch_not_found_yields_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(ARTICLE_HTML))
        .mount(&mock_server)
        .await;

    let url = format!("{}/missing", mock_server.uri());
    assert!(fetch_and_extract(&url, &ExtractOptions::default())
        .await
        .is_none());
}

#[tokio::test]
async fn test_fetch_server_error_yields_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    assert!(fetch_and_extract(&url, &ExtractOptions::default())
        .await
        .is_none());
}

#[tokio::test]
async fn test_fetch_timeout_yields_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(ARTICLE_HTML)
                .set_delay(Duration::from_millis(2000)),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/slow", mock_server.uri());
    let options = ExtractOptions::new().with_timeout(Duration::from_millis(100));

    let started = std::time::Instant::now();
    let result = fetch_and_extract(&url, &options).await;

    assert!(result.is_none());
    assert!(started.elapsed() < Duration::from_millis(1500));
}

#[tokio::test]
async fn test_fetch_within_timeout_succeeds() {
    let mock_server = MockServer::start().await;
    mount_article(&mock_server).await;

    let url = format!("{}/blog/post", mock_server.uri());
    let options = ExtractOptions::new().with_timeout(Duration::from_secs(5));

    assert!(fetch_and_extract(&url, &options).await.is_some());
}

#[tokio::test]
async fn test_invalid_url_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ARTICLE_HTML))
        .expect(0)
        .mount(&mock_server)
        .await;

    // Host and port without a scheme is not an absolute URL
    let address = mock_server.address();
    let url = format!("{}:{}/blog/post", address.ip(), address.port());

    assert!(fetch_and_extract(&url, &ExtractOptions::default())
        .await
        .is_none());
    assert!(fetch_and_extract("", &ExtractOptions::default())
        .await
        .is_none());
}

#[tokio::test]
async fn test_connection_refused_yields_none() {
    // Bind then drop a listener to get a port nothing is listening on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let url = format!("http://127.0.0.1:{}/", port);
    assert!(fetch_and_extract(&url, &ExtractOptions::default())
        .await
        .is_none());
}

#[tokio::test]
async fn test_fetcher_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header(
            "user-agent",
            "IntegrationBot/2.0 (+https://example.com/bot)",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>UA</title>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(&UserAgentConfig {
        crawler_name: "IntegrationBot".to_string(),
        crawler_version: "2.0".to_string(),
        contact_url: "https://example.com/bot".to_string(),
    })
    .unwrap();

    let metadata = fetcher
        .fetch_and_extract(&format!("{}/", mock_server.uri()), &ExtractOptions::default())
        .await
        .unwrap();

    assert_eq!(metadata.get("title"), Some("UA"));
}

#[tokio::test]
async fn test_fetcher_with_custom_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/custom"))
        .and(header("user-agent", "CustomClient/0.1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<html lang="nl"><head><link rel="icon" href="/f.ico"></head></html>"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::builder()
        .user_agent("CustomClient/0.1")
        .build()
        .unwrap();
    let fetcher = Fetcher::with_client(client);

    let url = format!("{}/custom", mock_server.uri());
    let metadata = fetcher
        .fetch_and_extract(&url, &ExtractOptions::default())
        .await
        .unwrap();

    assert_eq!(metadata.get("lang"), Some("nl"));
    assert_eq!(
        metadata.get("favicon"),
        Some(format!("{}/f.ico", mock_server.uri()).as_str())
    );
}
