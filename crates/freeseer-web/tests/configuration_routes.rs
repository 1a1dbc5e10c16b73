//! HTTP tests for the `/configuration` routes, driven through the router
//! without binding a socket.

use axum::{
    body::{
        to_bytes,
        Body,
    },
    http::{
        header,
        Method,
        Request,
        StatusCode,
    },
    response::Response,
    Router,
};
use freeseer_core::{
    ConfigurationContext,
    ProfileManager,
};
use freeseer_plugin_api::PluginCategory;
use freeseer_web::state::AppState;
use serde_json::{
    json,
    Value,
};
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    _profiles_dir: TempDir,
}

impl TestApp {
    fn new() -> Self {
        let profiles_dir = TempDir::new().unwrap();
        let profiles = ProfileManager::new(profiles_dir.path());
        let context = ConfigurationContext::initialize(&profiles, None).unwrap();

        Self {
            router: freeseer_web::app(AppState::new(context), true),
            _profiles_dir: profiles_dir,
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Body) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str) -> Response {
        self.send(Method::GET, uri, Body::empty()).await
    }

    async fn put(&self, uri: &str, body: impl Into<Body>) -> Response {
        self.send(Method::PUT, uri, body.into()).await
    }
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn test_get_general_configuration_is_empty_object() {
    let app = TestApp::new();

    for _ in 0..2 {
        let response = app.get("/configuration/general").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({}));
    }
}

#[tokio::test]
async fn test_get_recording_configuration_is_empty_object() {
    let app = TestApp::new();

    let response = app.get("/configuration/recording").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({}));
}

#[tokio::test]
async fn test_get_plugins_for_every_category() {
    let app = TestApp::new();

    for category in PluginCategory::ALL {
        let response = app
            .get(&format!("/configuration/recording/{}", category.key()))
            .await;
        assert_eq!(response.status(), StatusCode::OK, "{}", category);

        let body = body_json(response).await;
        let plugins = body["plugins"].as_array().unwrap();
        assert!(!plugins.is_empty(), "{} has no plugins", category);
        assert!(plugins.iter().all(Value::is_string));
    }
}

#[tokio::test]
async fn test_get_plugins_lists_names() {
    let app = TestApp::new();

    let response = app.get("/configuration/recording/videomixer").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "plugins": ["Picture-In-Picture", "Video Passthrough"] })
    );
}

#[tokio::test]
async fn test_unknown_category_is_not_found() {
    let app = TestApp::new();

    for uri in [
        "/configuration/recording/bogus",
        "/configuration/recording/AudioInput",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);

        let body = body_json(response).await;
        assert_eq!(body["code"], "NOT_FOUND");
        assert!(body.get("plugins").is_none());
    }
}

#[tokio::test]
async fn test_unknown_category_rejected_on_nested_routes() {
    let app = TestApp::new();

    let response = app.put("/configuration/recording/bogus", "{}").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.get("/configuration/recording/bogus/anything").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.put("/configuration/recording/bogus/anything", "{}").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_plugin_configuration_is_empty_object() {
    let app = TestApp::new();

    let response = app
        .get("/configuration/recording/output/Ogg%20Output")
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({}));
}

#[tokio::test]
async fn test_put_endpoints_return_ok_with_empty_body() {
    let app = TestApp::new();

    let uris = [
        "/configuration/general",
        "/configuration/recording",
        "/configuration/recording/audioinput",
        "/configuration/recording/output/Ogg%20Output",
    ];

    for uri in uris {
        for body in ["", "{}", r#"{"record_to_stream": true}"#, "not json at all"] {
            let response = app.put(uri, body).await;
            assert_eq!(response.status(), StatusCode::OK, "PUT {} {:?}", uri, body);
            assert!(body_bytes(response).await.is_empty());
        }
    }
}

#[tokio::test]
async fn test_unsupported_method() {
    let app = TestApp::new();

    let response = app
        .send(Method::POST, "/configuration/general", Body::empty())
        .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_concurrent_requests_share_one_context() {
    let profiles_dir = TempDir::new().unwrap();
    let profiles = ProfileManager::new(profiles_dir.path());
    let state = AppState::new(ConfigurationContext::initialize(&profiles, None).unwrap());
    let router = freeseer_web::app(state.clone(), true);

    let mut handles = Vec::new();
    for category in PluginCategory::ALL {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            let request = Request::builder()
                .uri(format!("/configuration/recording/{}", category.key()))
                .body(Body::empty())
                .unwrap();
            router.oneshot(request).await.unwrap().status()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    // The router holds clones of `state`; all of them point at the single
    // context built above.
    assert!(std::sync::Arc::strong_count(&state.context) >= 2);
    let clone = state.clone();
    assert!(std::sync::Arc::ptr_eq(&clone.context, &state.context));
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["profile"], "default");
    assert!(body["plugin_count"].as_u64().unwrap() > 0);
}
