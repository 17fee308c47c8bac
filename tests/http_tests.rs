//! End-to-end tests of `SsoClient` over `ReqwestTransport` against a mock server.

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sso_admin_client::{
    ClientConfig, ConfigStatus, Error, ReqwestTransport, SsoClient, SsoConfigPatch,
};

/// Helper: client pointed at the mock server with a session token.
fn client_for(server: &MockServer) -> SsoClient<ReqwestTransport> {
    let config = ClientConfig {
        base_url: server.uri(),
        token: Some("session-token".into()),
        timeout_secs: 5,
    };
    SsoClient::new(ReqwestTransport::new(&config).unwrap())
}

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"code": 0, "msg": "OK", "data": data}))
}

#[tokio::test]
async fn list_providers_unwraps_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/system/sso/providers"))
        .respond_with(ok(json!([
            {"provider": "github", "name": "GitHub"},
            {"provider": "google", "name": "Google"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let providers = client_for(&server).list_providers().await.unwrap();
    assert_eq!(providers.len(), 2);
    assert_eq!(providers[1].provider, "google");
}

#[tokio::test]
async fn session_token_header_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/system/sso/getUserBindings"))
        .and(header("token", "session-token"))
        .respond_with(ok(json!([
            {"provider": "github", "providerUid": "583231", "createdAt": "2024-05-01T10:00:00Z"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let bindings = client_for(&server).list_user_bindings().await.unwrap();
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].provider_uid, "583231");
    assert!(bindings[0].created_at_time().is_ok());
}

#[tokio::test]
async fn unbind_posts_provider_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/system/sso/unbind"))
        .and(body_json(json!({"provider": "google"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "msg": "OK"})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).unbind("google").await.unwrap();
}

#[tokio::test]
async fn save_posts_partial_config() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/system/ssoConfig/save"))
        .and(body_json(json!({
            "provider": "oidc",
            "enabled": 1,
            "issuerUrl": "https://id.example.com"
        })))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    let patch = SsoConfigPatch::for_provider("oidc")
        .enabled(ConfigStatus::Enabled)
        .issuer_url("https://id.example.com");
    client_for(&server).save_sso_config(&patch).await.unwrap();
}

#[tokio::test]
async fn save_then_list_reflects_the_write() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/system/ssoConfig/save"))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/system/ssoConfig/getList"))
        .respond_with(ok(json!([{"provider": "github", "enabled": 1, "name": "GitHub"}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .save_sso_config(&SsoConfigPatch::for_provider("github").enabled(ConfigStatus::Enabled))
        .await
        .unwrap();
    let configs = client.list_sso_configs().await.unwrap();
    assert!(configs[0].enabled.is_enabled());
    assert_eq!(configs[0].client_id, "");
}

#[tokio::test]
async fn non_zero_code_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/system/ssoConfig/save"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 1400, "msg": "provider is required"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .save_sso_config(&SsoConfigPatch::default())
        .await
        .unwrap_err();
    assert_eq!(err.api_code(), Some(1400));
    assert!(err.to_string().contains("provider is required"));
}

#[tokio::test]
async fn error_status_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/system/ssoConfig/getList"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database is locked"))
        .expect(1)
        .mount(&server)
        .await;

    match client_for(&server).list_sso_configs().await {
        Err(Error::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "database is locked");
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/system/sso/providers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    assert!(matches!(
        client_for(&server).list_providers().await,
        Err(Error::Decode(_))
    ));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let config = ClientConfig {
        base_url: "http://127.0.0.1:9".into(),
        token: None,
        timeout_secs: 2,
    };
    let client = SsoClient::new(ReqwestTransport::new(&config).unwrap());

    let err = client.list_providers().await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn concurrent_requests_resolve_independently() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/system/sso/providers"))
        .respond_with(
            ok(json!([{"provider": "github", "name": "GitHub"}]))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/system/sso/unbind"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (providers, unbind) = tokio::join!(client.list_providers(), client.unbind("github"));

    assert_eq!(providers.unwrap().len(), 1);
    assert_eq!(unbind.unwrap_err().status(), Some(500));
}
