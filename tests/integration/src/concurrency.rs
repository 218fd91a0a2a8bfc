//! Concurrent dispatch against slow upstreams
//!
//! A slow built-in call must not hold the registry lock: parallel shortens
//! through the same provider complete, and listing/registration proceed
//! while the upstream is still stalling.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use shortl_core::providers::IsGd;
use shortl_core::{Registration, Shortener};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn slow_isgd_shortener(delay: Duration) -> (MockServer, Shortener) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/create.php"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("https://is.gd/slow")
                .set_delay(delay),
        )
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
    (server, shortener)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_shortens_do_not_deadlock() {
    let (_server, shortener) = slow_isgd_shortener(Duration::from_millis(300)).await;
    let shortener = Arc::new(shortener);

    let a = tokio::spawn({
        let s = shortener.clone();
        async move { s.shorten("https://example.com/a", "isgd").await }
    });
    let b = tokio::spawn({
        let s = shortener.clone();
        async move { s.shorten("https://example.com/b", "isgd").await }
    });

    let results = tokio::time::timeout(Duration::from_secs(5), async {
        (a.await.unwrap(), b.await.unwrap())
    })
    .await
    .expect("concurrent shortens deadlocked");

    assert_eq!(results.0.unwrap(), "https://is.gd/slow");
    assert_eq!(results.1.unwrap(), "https://is.gd/slow");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn registry_stays_usable_while_upstream_stalls() {
    let (_server, shortener) = slow_isgd_shortener(Duration::from_millis(500)).await;
    let shortener = Arc::new(shortener);

    let slow = tokio::spawn({
        let s = shortener.clone();
        async move { s.shorten("https://example.com", "isgd").await }
    });

    // give the slow call time to resolve and start its request
    tokio::time::sleep(Duration::from_millis(50)).await;

    // listing and registration must complete long before the upstream does
    let registry_ops = tokio::time::timeout(Duration::from_millis(200), async {
        assert_eq!(shortener.list_builtins(), vec!["isgd"]);
        shortener
            .register_custom(
                Registration::Source("fn quick(url) { \"q-\" + url }".to_string()),
                None,
            )
            .unwrap();
        shortener.shorten("abc", "quick").await.unwrap()
    })
    .await
    .expect("registry operations blocked behind a slow upstream call");
    assert_eq!(registry_ops, "q-abc");

    assert_eq!(slow.await.unwrap().unwrap(), "https://is.gd/slow");
}
