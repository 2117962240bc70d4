//! Tests driving an axum router through the gateway adapter.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::AppendHeaders;
use axum::routing::get;
use axum::{Json, Router};
use gateway_transcoder::config::TranscoderConfig;
use gateway_transcoder::gateway::GatewayLayer;
use gateway_transcoder::{ApiGatewayProxyResponse, GatewayService, ResponseTranscoder};
use serde_json::json;
use tower::{Layer, ServiceExt};

fn app() -> Router {
    Router::new()
        .route(
            "/login",
            get(|| async {
                (
                    AppendHeaders([
                        (header::SET_COOKIE, "session=abc; HttpOnly"),
                        (header::SET_COOKIE, "theme=dark"),
                    ]),
                    Json(json!({ "user": "ada" })),
                )
            }),
        )
        .route(
            "/logo.png",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "image/png")],
                    vec![0x89u8, b'P', b'N', b'G'],
                )
            }),
        )
        .route(
            "/feed.xml",
            get(|| async { ([(header::CONTENT_TYPE, "application/xml")], "<feed/>") }),
        )
}

fn get_request(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_router_json_with_cookies() {
    let out: ApiGatewayProxyResponse = GatewayService::new(app())
        .oneshot(get_request("/login"))
        .await
        .unwrap();

    assert_eq!(out.status_code, 200);
    assert_eq!(out.body.as_deref(), Some("{\"user\":\"ada\"}"));
    assert_eq!(out.is_base64_encoded, None);
    assert_eq!(
        out.multi_value_headers.unwrap()["set-cookie"],
        vec!["session=abc; HttpOnly", "theme=dark"]
    );
    assert_eq!(out.headers.unwrap()["content-type"], "application/json");
}

#[tokio::test]
async fn test_router_binary() {
    let out: ApiGatewayProxyResponse = GatewayService::new(app())
        .oneshot(get_request("/logo.png"))
        .await
        .unwrap();

    assert_eq!(out.body.as_deref(), Some("iVBORw=="));
    assert_eq!(out.is_base64_encoded, Some(true));
}

#[tokio::test]
async fn test_router_not_found() {
    let out: ApiGatewayProxyResponse = GatewayService::new(app())
        .oneshot(get_request("/missing"))
        .await
        .unwrap();

    assert_eq!(out.status_code, StatusCode::NOT_FOUND.as_u16());
    assert_eq!(out.body.as_deref(), Some(""));
}

#[tokio::test]
async fn test_layer_with_configured_transcoder() {
    let mut config = TranscoderConfig::default();
    config.media_types.extra_textual = vec!["application/xml".into()];
    let transcoder = ResponseTranscoder::from_config(&config).unwrap();

    let service = GatewayLayer::<ApiGatewayProxyResponse>::new(transcoder).layer(app());
    let out = service.oneshot(get_request("/feed.xml")).await.unwrap();

    assert_eq!(out.body.as_deref(), Some("<feed/>"));
    assert_eq!(out.is_base64_encoded, None);
}
