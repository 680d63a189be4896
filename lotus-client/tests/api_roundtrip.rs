// lotus-client/tests/api_roundtrip.rs
// Integration tests against an in-process fixture server

use std::collections::HashMap;

use axum::{
    Form, Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use lotus_client::{ClientConfig, ClientError, HttpClient};
use serde_json::{Value, json};
use shared::models::{LoginRequest, Period, ProductPayload, SyncAction};

/// Bind the fixture router on an ephemeral port and return its base URL.
async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client_for(base: &str) -> HttpClient {
    ClientConfig::new(base)
        .with_catalog_url(base)
        .with_auth_url(base)
        .build()
}

#[tokio::test]
async fn test_metric_conversions() {
    let app = Router::new()
        .route(
            "/main-dashboard/avg-automation-rate",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                // echo the requested period back so the test can see it
                Json(json!({
                    "period": params.get("period"),
                    "start_date": "2026-08-01T00:00:00Z",
                    "end_date": "2026-08-02T00:00:00Z",
                    "avg_automation_rate": 0.42
                }))
            }),
        )
        .route(
            "/main-dashboard/new-customers",
            get(|| async {
                Json(json!({
                    "period": "day",
                    "start_date": "2026-08-01T00:00:00Z",
                    "end_date": "2026-08-02T00:00:00Z",
                    "count": 7
                }))
            }),
        )
        .route(
            "/main-dashboard/agent-avg-response-time",
            get(|| async {
                // no data in the window: average field absent
                Json(json!({
                    "period": "day",
                    "start_date": "2026-08-01T00:00:00Z",
                    "end_date": "2026-08-02T00:00:00Z"
                }))
            }),
        );

    let base = spawn_server(app).await;
    let client = client_for(&base);

    let rate = client.avg_automation_rate(Period::Day).await.unwrap();
    assert!((rate - 42.0).abs() < 1e-9, "fraction converted to percent");

    assert_eq!(client.new_customers(Period::Day).await.unwrap(), 7);

    let agent = client.agent_avg_response_time(Period::Day).await.unwrap();
    assert_eq!(agent, 0.0, "absent average maps to zero");
}

#[tokio::test]
async fn test_unauthorized_is_split_out() {
    let app = Router::new().route(
        "/main-dashboard/new-customers",
        get(|| async { (StatusCode::UNAUTHORIZED, "token expired").into_response() }),
    );

    let base = spawn_server(app).await;
    let client = client_for(&base);

    let err = client.new_customers(Period::Hour).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn test_html_on_success_is_rejected() {
    let app = Router::new().route(
        "/customer/all",
        get(|| async {
            (
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                "<html>tunnel warning page</html>",
            )
        }),
    );

    let base = spawn_server(app).await;
    let client = client_for(&base);

    let err = client.all_customers().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_error_body_is_trimmed() {
    let app = Router::new().route(
        "/customer/all",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "e".repeat(5000)) }),
    );

    let base = spawn_server(app).await;
    let client = client_for(&base);

    match client.all_customers().await.unwrap_err() {
        ClientError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body.len(), 300);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_product_list_query_parameters() {
    let app = Router::new().route(
        "/api/products",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            // fixture echoes the search query as the product name
            let q = params.get("q").cloned().unwrap_or_default();
            let page: u32 = params.get("page").and_then(|v| v.parse().ok()).unwrap_or(0);
            let limit: u32 = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(0);
            Json(json!({
                "data": [{"name": q}],
                "pagination": {"page": page, "limit": limit, "total": 31}
            }))
        }),
    );

    let base = spawn_server(app).await;
    let client = client_for(&base);

    let resp = client.list_products(2, 10, "lotus tea").await.unwrap();
    assert_eq!(resp.data[0].name, "lotus tea", "query survives URL encoding");
    assert_eq!(resp.pagination.page, 2);
    assert_eq!(resp.pagination.total_pages(), 4);
}

#[tokio::test]
async fn test_process_product_posts_action_tags() {
    let app = Router::new().route(
        "/api/products/process",
        post(|Json(body): Json<Value>| async move {
            // fixture answers with the aggregate the edit would produce
            Json(json!({
                "id": 9,
                "name": body["name"],
                "has_variants": body["has_variants"],
                "action_seen": body["action"]
            }))
        }),
    );

    let base = spawn_server(app).await;
    let client = client_for(&base);

    let payload = ProductPayload {
        action: SyncAction::Create,
        id: None,
        name: "Herbal Mask".into(),
        brand: None,
        short_description: None,
        description: None,
        has_variants: false,
        general_attributes: vec![],
        variant_options: vec![],
        images: vec![],
        variances: vec![],
    };

    let product = client.process_product(&payload).await.unwrap();
    assert_eq!(product.id, Some(9));
    assert_eq!(product.name, "Herbal Mask");
}

#[tokio::test]
async fn test_login_and_validate_flow() {
    let app = Router::new()
        .route(
            "/auth/login",
            post(|Form(req): Form<LoginRequest>| async move {
                if req.username == "admin" && req.password == "secret" {
                    Json(json!({"access_token": "tok-1"})).into_response()
                } else {
                    (StatusCode::UNAUTHORIZED, "bad credentials").into_response()
                }
            }),
        )
        .route(
            "/auth/validate",
            get(|headers: HeaderMap| async move {
                let auth = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok());
                match auth {
                    Some("Bearer tok-1") => Json(json!({"username": "admin"})).into_response(),
                    _ => (StatusCode::UNAUTHORIZED, "missing token").into_response(),
                }
            }),
        );

    let base = spawn_server(app).await;
    let mut client = client_for(&base);

    // wrong password surfaces as Unauthorized
    let err = client.login("admin", "nope").await.unwrap_err();
    assert!(err.is_unauthorized());

    // without a token, validation fails
    assert!(client.validate_token().await.is_err());

    let resp = client.login("admin", "secret").await.unwrap();
    client.set_token(resp.access_token);

    let user = client.validate_token().await.unwrap();
    assert_eq!(user.username, "admin");

    // logout is client-side: clearing the token de-authenticates
    client.clear_token();
    assert!(client.validate_token().await.unwrap_err().is_unauthorized());
}

#[tokio::test]
async fn test_upload_returns_hosted_url() {
    let app = Router::new().route(
        "/api/upload",
        post(|headers: HeaderMap| async move {
            if headers.get(header::AUTHORIZATION).is_none() {
                return (StatusCode::UNAUTHORIZED, "missing token").into_response();
            }
            Json(json!({"url": "https://cdn.local/img/1.png"})).into_response()
        }),
    );

    let base = spawn_server(app).await;
    let mut client = client_for(&base);

    // unauthenticated upload is refused
    assert!(
        client
            .upload_image("photo.png", vec![1, 2, 3])
            .await
            .unwrap_err()
            .is_unauthorized()
    );

    client.set_token("tok-1");
    let url = client.upload_image("photo.png", vec![1, 2, 3]).await.unwrap();
    assert_eq!(url, "https://cdn.local/img/1.png");
}
