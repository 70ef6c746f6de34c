use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use ldforge::adapters::api_handler::ApiState;
use chrono::FixedOffset;
use ldforge_core::{BuilderOptions, FieldCatalog, SessionConfig};
use serde_json::{json, Value};
use tower::util::ServiceExt;

fn app() -> Router {
    ldforge::create_app(ApiState::new(FieldCatalog::builtin(), BuilderOptions::default()))
}

async fn body_json(response: axum::response::Response) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = app();

    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["schema_types"], 9);

    let response = app.oneshot(get("/health/live")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_schema_types() {
    let response = app().oneshot(get("/api/schema-types")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    let types = body["data"].as_array().unwrap();
    assert_eq!(types.len(), 9);
    assert_eq!(
        types[6],
        json!({ "key": "localBusiness", "label": "Local Business", "schema_type": "LocalBusiness" })
    );
}

#[tokio::test]
async fn test_catalog_reflects_configured_types() {
    let mut catalog = FieldCatalog::builtin();
    let mut recipe = catalog.resolve("product").clone();
    recipe.key = "recipe".to_string();
    recipe.label = "Recipe".to_string();
    catalog.extend(vec![recipe]).unwrap();
    catalog.set_default("product").unwrap();
    let options = BuilderOptions {
        utc_offset: FixedOffset::east_opt(3600).unwrap(),
    };
    let app = ldforge::create_app(ApiState::new(catalog, options));

    let response = app.oneshot(get("/api/catalog")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["default_type"], "product");
    assert_eq!(body["data"]["utc_offset_seconds"], 3600);
    assert_eq!(body["data"]["types"].as_array().unwrap().len(), 10);

    let config: SessionConfig = serde_json::from_value(body["data"].clone()).unwrap();
    let (restored, _) = config.into_parts().unwrap();
    assert_eq!(restored.get("recipe").unwrap().label, "Recipe");
}

#[tokio::test]
async fn test_form_surface() {
    let response = app().oneshot(get("/api/schema-types/profilePage/form")).await.unwrap();
    let body = body_json(response).await;

    let controls = body["data"]["controls"].as_array().unwrap();
    let follow = controls.iter().find(|c| c["id"] == "followCount").unwrap();
    assert_eq!(follow["input_type"], "number");
    assert_eq!(follow["value"], "1");

    let same_as = controls.iter().find(|c| c["id"] == "sameAs").unwrap();
    assert_eq!(same_as["multiline"], true);
}

#[tokio::test]
async fn test_form_surface_unknown_type_falls_back() {
    let response = app().oneshot(get("/api/schema-types/recipe/form")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["schema_type"], "organization");
}

#[tokio::test]
async fn test_preview() {
    let request = post_json(
        "/api/preview",
        json!({ "schema_type": "product", "values": { "name": "Widget" } }),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let data = &body["data"];
    assert_eq!(data["schema_type"], "product");
    assert!(data["warnings"].as_array().unwrap().is_empty());

    let doc: Value = serde_json::from_str(data["text"].as_str().unwrap()).unwrap();
    assert_eq!(doc["name"], "Widget");
    assert_eq!(doc["brand"]["name"], "Brand Name");

    let html = data["html"].as_str().unwrap();
    assert!(html.contains(r#"<span class="json-string">"Widget"</span>"#));
}

#[tokio::test]
async fn test_preview_reports_fallbacks() {
    let request = post_json(
        "/api/preview",
        json!({ "schema_type": "newsArticle", "values": { "authors": "[{" } }),
    );
    let body = body_json(app().oneshot(request).await.unwrap()).await;

    let warnings = body["data"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["field"], "authors");

    let doc: Value = serde_json::from_str(body["data"]["text"].as_str().unwrap()).unwrap();
    assert_eq!(doc["author"][0]["name"], "Jane Doe");
}

#[tokio::test]
async fn test_unreadable_body_uses_error_envelope() {
    for uri in ["/api/preview", "/api/download"] {
        let request = post_json(
            uri,
            json!({ "schema_type": "profilePage", "values": { "followCount": 5 } }),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("Failed to deserialize"));
        assert!(body.get("data").is_none());
    }
}

#[tokio::test]
async fn test_missing_content_type_uses_error_envelope() {
    let request = Request::builder()
        .uri("/api/preview")
        .method("POST")
        .body(Body::from(json!({ "schema_type": "product" }).to_string()))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_download() {
    let request = post_json("/api/download", json!({ "schema_type": "organization" }));
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE].to_str().unwrap(),
        "application/json"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap(),
        "attachment; filename=\"schema.json\""
    );

    let doc = body_json(response).await;
    assert_eq!(doc["@type"], "Organization");
    assert_eq!(doc["name"], "Your Organization Name");
}

#[tokio::test]
async fn test_guide_and_validator() {
    let app = app();

    let body = body_json(app.clone().oneshot(get("/api/guide")).await.unwrap()).await;
    let sections = body["data"].as_array().unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0]["title"], "JSON-LD Implementation");

    let body = body_json(app.oneshot(get("/api/validator")).await.unwrap()).await;
    assert_eq!(body["data"]["url"], "https://search.google.com/test/rich-results");
}

#[tokio::test]
async fn test_ui_fallback() {
    let response = app().oneshot(get("/some/client/route")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
}
