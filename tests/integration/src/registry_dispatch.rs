//! End-to-end registry and dispatch scenarios

use std::sync::Arc;

use pretty_assertions::assert_eq;
use shortl_core::providers::IsGd;
use shortl_core::{Error, FnProvider, Registration, Shortener};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn fresh_registry_lists_exactly_the_default_builtins() {
    let shortener = Shortener::new().unwrap();
    assert_eq!(shortener.list_builtins(), vec!["isgd", "tinyurl"]);
    assert_eq!(shortener.list_custom(), Vec::<String>::new());
}

#[tokio::test]
async fn source_registration_round_trip() {
    let shortener = Shortener::new().unwrap();
    let name = shortener
        .register_custom(
            Registration::Source("fn f(url) { \"x-\" + url }".to_string()),
            None,
        )
        .unwrap();
    assert_eq!(name, "f");
    assert_eq!(shortener.shorten("abc", "f").await.unwrap(), "x-abc");
}

#[tokio::test]
async fn callable_registration_round_trip_returns_result_unchanged() {
    let shortener = Shortener::new().unwrap();
    let provider = FnProvider::named("echo", |url| Ok(url.to_string()));
    shortener
        .register_custom(Registration::Callable(Arc::new(provider)), None)
        .unwrap();
    // identity round-trip: whatever the provider returns comes back verbatim
    assert_eq!(
        shortener.shorten("https://example.com/very/long", "echo").await.unwrap(),
        "https://example.com/very/long"
    );
}

#[tokio::test]
async fn not_found_error_lists_the_current_union_of_names() {
    let shortener = Shortener::new().unwrap();
    shortener
        .register_custom(Registration::Source("fn mine(url) { url }".to_string()), None)
        .unwrap();

    let err = shortener.shorten("abc", "doesnotexist").await.unwrap_err();
    match err {
        Error::NotFound { name, available } => {
            assert_eq!(name, "doesnotexist");
            let mut expected = shortener.list_builtins();
            expected.extend(shortener.list_custom());
            assert_eq!(available, expected);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn builtin_names_are_protected_from_customs() {
    let shortener = Shortener::new().unwrap();

    // with an empty custom table
    let err = shortener
        .register_custom(Registration::Source("fn isgd(url) { url }".to_string()), None)
        .unwrap_err();
    assert!(matches!(err, Error::BuiltinOverwrite(name) if name == "isgd"));

    // and with entries present
    shortener
        .register_custom(Registration::Source("fn other(url) { url }".to_string()), None)
        .unwrap();
    let err = shortener
        .register_custom(
            Registration::Source("fn f(url) { url }".to_string()),
            Some("tinyurl"),
        )
        .unwrap_err();
    assert!(matches!(err, Error::BuiltinOverwrite(name) if name == "tinyurl"));
}

#[tokio::test]
async fn delete_lifecycle() {
    let shortener = Shortener::new().unwrap();

    // deleting a built-in is a policy violation
    let err = shortener.delete_custom("isgd").unwrap_err();
    assert!(matches!(err, Error::BuiltinDelete(name) if name == "isgd"));

    // deleting a never-registered name reports false
    assert!(!shortener.delete_custom("neverthere").unwrap());

    // deleting a just-registered name reports true, and dispatch then misses
    shortener
        .register_custom(Registration::Source("fn gone(url) { url }".to_string()), None)
        .unwrap();
    assert!(shortener.delete_custom("gone").unwrap());
    let err = shortener.shorten("abc", "gone").await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn builtin_dispatch_through_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/create.php"))
        .and(query_param("format", "simple"))
        .and(query_param("url", "https://example.com/long"))
        .respond_with(ResponseTemplate::new(200).set_body_string("https://is.gd/abc\n"))
        .mount(&server)
        .await;

    let isgd = IsGd::with_endpoint(
        reqwest::Client::new(),
        format!("{}/create.php", server.uri()),
    );
    let shortener = Shortener::builder()
        .builtins(vec![("isgd".to_string(), Arc::new(isgd) as _)])
        .build()
        .unwrap();

    let short = shortener
        .shorten("https://example.com/long", "isgd")
        .await
        .unwrap();
    assert_eq!(short, "https://is.gd/abc");
}
