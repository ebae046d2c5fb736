/// HTTP retrieval tests against a local mock server
use std::time::Duration;

use movie_log::MovieLog;
use movie_log::source::{DocumentSource, HttpSource, load_document, open_source};

const BODY: &str = "## 2024\n- [x] Dune: Part Two – 9/10\n- [ ] Furiosa\n";

#[test]
fn test_http_source_fetches_document() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/data/movies.txt")
        .with_status(200)
        .with_header("content-type", "text/plain; charset=utf-8")
        .with_body(BODY)
        .create();

    let url = format!("{}/data/movies.txt", server.url());
    let source = HttpSource::new(&url, Duration::from_secs(5)).unwrap();
    let text = source.fetch().unwrap();

    mock.assert();
    assert_eq!(text, BODY);
    assert_eq!(MovieLog::parse(&text).entries.len(), 2);
}

#[test]
fn test_http_source_rejects_error_status() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/data/movies.txt").with_status(404).create();

    let url = format!("{}/data/movies.txt", server.url());
    let source = HttpSource::new(&url, Duration::from_secs(5)).unwrap();

    let err = source.fetch().unwrap_err();
    assert!(err.to_string().contains("HTTP 404"));
}

#[test]
fn test_http_failure_degrades_to_empty_document() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/data/movies.txt").with_status(500).create();

    let url = format!("{}/data/movies.txt", server.url());
    let source = open_source(&url, Duration::from_secs(5)).unwrap();

    assert_eq!(load_document(source.as_ref()), "");
}

#[test]
fn test_http_source_unreachable_host() {
    // Port 9 (discard) on localhost is almost never listening
    let source = HttpSource::new("http://127.0.0.1:9/movies.txt", Duration::from_secs(2)).unwrap();
    let err = source.fetch().unwrap_err();
    assert!(err.to_string().contains("Failed to fetch movie log"));
}
