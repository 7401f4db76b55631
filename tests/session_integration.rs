//! Integration tests for the session lifecycle: open/close idempotence,
//! scoped acquisition, and lazy opening.

use std::time::Duration;

use amethyste::prelude::*;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AmethysteClient {
    AmethysteClient::builder()
        .api_key("test-key")
        .base_url(&server.uri())
        .build()
        .unwrap()
}

async fn mount_crush(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/generate/crush"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![7u8, 7, 7], "image/png"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_open_twice_yields_one_session() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    client.open().await.unwrap();
    client.open().await.unwrap();

    assert!(client.is_open().await);
    assert_eq!(client.http().sessions().sessions_created(), 1);
}

#[tokio::test]
async fn test_close_twice_is_noop() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    client.open().await.unwrap();
    client.close().await;
    client.close().await;

    assert!(!client.is_open().await);
}

#[tokio::test]
async fn test_use_after_close_fails() {
    let server = MockServer::start().await;
    mount_crush(&server).await;
    let client = client_for(&server);

    client.open().await.unwrap();
    assert!(client.generate().crush("http://x/a.png").await.is_ok());
    client.close().await;

    let err = client.generate().crush("http://x/a.png").await.unwrap_err();
    assert!(matches!(err, SdkError::Usage(UsageError::NoSession)));
}

#[tokio::test]
async fn test_scoped_closes_after_success() {
    let server = MockServer::start().await;
    mount_crush(&server).await;
    let client = client_for(&server);

    let data = client
        .scoped(|c| async move { c.generate().crush("http://x/a.png").await })
        .await
        .unwrap();

    assert_eq!(data, vec![7, 7, 7]);
    assert!(!client.is_open().await);
}

#[tokio::test]
async fn test_scoped_closes_after_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({"message": "boom"})))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client
        .scoped(|c| async move { c.generate().crush("http://x/a.png").await })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(HttpErrorKind::InternalServerError));
    assert!(!client.is_open().await);
}

#[tokio::test]
async fn test_scoped_closes_after_panic() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let inner = client.clone();
    let joined = tokio::spawn(async move {
        inner
            .scoped(|_c| async move {
                let fail = true;
                if fail {
                    panic!("body panicked");
                }
                Ok::<(), SdkError>(())
            })
            .await
    })
    .await;

    assert!(joined.unwrap_err().is_panic());
    assert!(!client.is_open().await);
}

#[tokio::test]
async fn test_scoped_closes_when_cancelled() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let result = tokio::time::timeout(
        Duration::from_millis(50),
        client.scoped(|_c| async move {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<(), SdkError>(())
        }),
    )
    .await;

    assert!(result.is_err());
    assert!(!client.is_open().await);
}

#[tokio::test]
async fn test_auto_open_creates_session_on_first_use() {
    let server = MockServer::start().await;
    mount_crush(&server).await;
    let client = AmethysteClient::builder()
        .api_key("test-key")
        .base_url(&server.uri())
        .auto_open(true)
        .build()
        .unwrap();

    assert!(!client.is_open().await);
    client.generate().crush("http://x/a.png").await.unwrap();
    assert!(client.is_open().await);

    client.close().await;
    client.generate().crush("http://x/a.png").await.unwrap();
    assert_eq!(client.http().sessions().sessions_created(), 2);
}
