// pearl-client/tests/http_contract.rs
// HTTP client contract tests against an in-process mock backend

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use pearl_client::{ClientConfig, ClientError, FetchState, RemoteResource};
use rust_decimal::Decimal;
use serde_json::json;

const STAFF_TOKEN: &str = "staff-token";

/// Serve a router on an ephemeral port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn menu_options(Path(menu_item_id): Path<i64>, headers: HeaderMap) -> Response {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let expected = format!("Bearer {}", STAFF_TOKEN);
    if bearer != Some(expected.as_str()) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    if menu_item_id != 42 {
        return Json(json!([])).into_response();
    }

    Json(json!([{
        "id": 1,
        "name": "Size",
        "maxSelections": 1,
        "isRequired": true,
        "options": [
            {"id": 10, "name": "Small", "price": 0},
            {"id": 11, "name": "Large", "price": 20}
        ]
    }]))
    .into_response()
}

async fn active_promotions() -> Json<serde_json::Value> {
    Json(json!([{
        "id": 3,
        "name": "Family Deal",
        "description": null,
        "startDate": "2026-08-01T00:00:00Z",
        "endDate": "2026-09-01T00:00:00Z",
        "price": 30,
        "items": [
            {"menuItem": {"name": "Pizza"}, "quantity": 2},
            {"menuItem": {"name": "Salad"}, "quantity": 1}
        ]
    }]))
}

fn backend() -> Router {
    Router::new()
        .route("/menu/options/{menu_item_id}", get(menu_options))
        .route("/promotions/Active", get(active_promotions))
}

#[tokio::test]
async fn test_menu_options_sends_bearer_and_decodes() {
    let base = serve(backend()).await;
    let client = ClientConfig::new(base)
        .with_token(STAFF_TOKEN)
        .build_http_client();

    let groups = client.menu_option_groups(42).await.unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "Size");
    assert_eq!(groups[0].max_selections, 1);
    assert!(groups[0].is_required);
    assert_eq!(groups[0].options.len(), 2);
    assert_eq!(groups[0].options[1].price, Decimal::from(20));
}

#[tokio::test]
async fn test_missing_token_maps_to_unauthorized() {
    let base = serve(backend()).await;
    let client = ClientConfig::new(base).build_http_client();

    let err = client.menu_option_groups(42).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn test_active_promotions_decodes_without_auth() {
    let base = serve(backend()).await;
    let client = ClientConfig::new(base).build_http_client();

    let promotions = client.active_promotions().await.unwrap();

    assert_eq!(promotions.len(), 1);
    assert_eq!(promotions[0].items.len(), 2);
    assert_eq!(promotions[0].items[0].menu_item.name, "Pizza");
    assert!(promotions[0].description.is_none());
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let app = Router::new().route(
        "/promotions/Active",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = serve(app).await;
    let client = ClientConfig::new(base).build_http_client();

    let err = client.active_promotions().await.unwrap_err();
    match err {
        ClientError::Status { status, detail } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(detail, "boom");
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_promotions_server_error_surfaces_failed_state() {
    let app = Router::new().route(
        "/promotions/Active",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = serve(app).await;
    let client = ClientConfig::new(base).build_http_client();

    let mut resource = RemoteResource::new("promotions", move |_key: ()| {
        let client = client.clone();
        async move { client.active_promotions().await }
    });
    let mut rx = resource.subscribe();
    resource.set_key(Some(()));

    let state = tokio::time::timeout(std::time::Duration::from_secs(2), async {
        loop {
            {
                let state = rx.borrow_and_update();
                match &*state {
                    FetchState::Loaded(_) | FetchState::Failed(_) => return state.clone(),
                    _ => {}
                }
            }
            rx.changed().await.unwrap();
        }
    })
    .await
    .expect("resource did not settle in time");

    match state {
        FetchState::Failed(message) => assert_eq!(message, "Failed to fetch promotions"),
        other => panic!("expected Failed state, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_decode() {
    let app = Router::new().route(
        "/promotions/Active",
        get(|| async { Json(json!({"not": "a list"})) }),
    );
    let base = serve(app).await;
    let client = ClientConfig::new(base).build_http_client();

    let err = client.active_promotions().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}
