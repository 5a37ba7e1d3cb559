pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::resume::{forms, handlers as api};
use crate::state::AppState;
use crate::views::handlers as pages;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_home))
        .route("/home", get(pages::handle_home))
        .route("/projects", get(pages::handle_projects))
        .route("/resume", get(pages::handle_builder))
        .route("/assets/site.css", get(pages::handle_stylesheet))
        // Export
        .route("/resume/print", get(export::handle_print))
        .route("/resume/export", get(export::handle_export))
        // Editor forms
        .route("/resume/header", post(forms::handle_header))
        .route("/resume/summary", post(forms::handle_summary))
        .route("/resume/strengths", post(forms::handle_add_strength))
        .route(
            "/resume/strengths/:index/remove",
            post(forms::handle_remove_strength),
        )
        .route("/resume/roles", post(forms::handle_add_role))
        .route("/resume/roles/:index", post(forms::handle_patch_role))
        .route("/resume/roles/:index/remove", post(forms::handle_remove_role))
        .route("/resume/roles/:index/bullets", post(forms::handle_add_bullet))
        .route(
            "/resume/roles/:index/bullets/:bullet",
            post(forms::handle_update_bullet),
        )
        .route(
            "/resume/roles/:index/bullets/:bullet/remove",
            post(forms::handle_remove_bullet),
        )
        .route("/resume/schools", post(forms::handle_add_school))
        .route("/resume/schools/:index", post(forms::handle_patch_school))
        .route(
            "/resume/schools/:index/remove",
            post(forms::handle_remove_school),
        )
        .route("/resume/skills", post(forms::handle_skills))
        .route("/resume/reset", post(forms::handle_reset))
        // Resume API
        .route(
            "/api/v1/resume",
            get(api::handle_get_resume).put(api::handle_put_resume),
        )
        .route("/api/v1/resume/edits", post(api::handle_apply_edits))
        .route("/api/v1/resume/preview", get(api::handle_get_preview))
        .route("/api/v1/projects", get(api::handle_list_projects))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{
            header::{CONTENT_DISPOSITION, CONTENT_TYPE, LOCATION},
            Request, StatusCode,
        },
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::{Config, ExportFormat};

    fn state() -> AppState {
        AppState::new(Config::default()).unwrap()
    }

    async fn send(state: &AppState, request: Request<Body>) -> Response {
        build_router(state.clone()).oneshot(request).await.unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(&state(), get("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["service"], "devfolio");
    }

    #[tokio::test]
    async fn test_pages_render() {
        let state = state();
        for uri in ["/", "/home", "/projects", "/resume", "/resume/print"] {
            let response = send(&state, get(uri)).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert!(body_text(response).await.contains("Your Name"), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_stylesheet_is_css() {
        let response = send(&state(), get("/assets/site.css")).await;
        assert_eq!(response.headers()[CONTENT_TYPE], "text/css; charset=utf-8");
    }

    #[tokio::test]
    async fn test_header_form_redirects_and_updates() {
        let state = state();
        let response = send(&state, form("/resume/header", "name=Jane+Doe&phone=")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/resume");

        let doc = state.store.current();
        assert_eq!(doc.header.name, "Jane Doe");
        assert_eq!(doc.header.phone.as_deref(), Some(""));
        assert_eq!(doc.header.email.as_deref(), Some("you@example.com"));

        let page = body_text(send(&state, get("/resume")).await).await;
        assert!(page.contains("<h1>Jane Doe</h1>"));
    }

    #[tokio::test]
    async fn test_bullet_forms_edit_the_right_role() {
        let state = state();
        send(&state, form("/resume/roles", "")).await;
        send(&state, form("/resume/roles/1/bullets/0", "value=Led+migration")).await;
        send(&state, form("/resume/roles/1/bullets", "")).await;

        let doc = state.store.current();
        assert_eq!(doc.experience.len(), 2);
        assert_eq!(doc.experience[0].bullets, vec![""]);
        assert_eq!(doc.experience[1].bullets, vec!["Led migration", ""]);

        send(&state, form("/resume/roles/1/bullets/0/remove", "")).await;
        assert_eq!(state.store.current().experience[1].bullets, vec![""]);
    }

    #[tokio::test]
    async fn test_stale_index_form_is_ignored() {
        let state = state();
        let before = state.store.current();
        let response = send(&state, form("/resume/schools/9/remove", "")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(*state.store.current(), *before);
    }

    #[tokio::test]
    async fn test_reset_restores_sample() {
        let state = state();
        send(&state, form("/resume/strengths/0/remove", "")).await;
        assert_eq!(state.store.current().strengths.len(), 3);
        send(&state, form("/resume/reset", "")).await;
        assert_eq!(state.store.current().strengths.len(), 4);
    }

    #[tokio::test]
    async fn test_edit_batch_stops_at_missing_index() {
        let state = state();
        let body = json!([
            { "op": "add_strength", "value": "Rust" },
            { "op": "remove_role", "index": 5 },
            { "op": "add_strength", "value": "never applied" }
        ]);
        let response = send(&state, json_request("POST", "/api/v1/resume/edits", body)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let err: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(err["error"]["code"], "NOT_FOUND");

        let strengths = &state.store.current().strengths;
        assert_eq!(strengths.last().map(String::as_str), Some("Rust"));
        assert!(!strengths.iter().any(|s| s == "never applied"));
    }

    #[tokio::test]
    async fn test_single_edit_returns_document() {
        let state = state();
        let body = json!({ "op": "set_summary", "summary": "Builds things." });
        let response = send(&state, json_request("POST", "/api/v1/resume/edits", body)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let doc: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(doc["summary"], "Builds things.");
    }

    #[tokio::test]
    async fn test_malformed_edit_is_validation_error() {
        let body = json!({ "op": "teleport" });
        let response = send(&state(), json_request("POST", "/api/v1/resume/edits", body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let err: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(err["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_put_replaces_document() {
        let state = state();
        let body = json!({ "header": { "name": "Jane Doe" } });
        let response = send(&state, json_request("PUT", "/api/v1/resume", body)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let preview = body_text(send(&state, get("/api/v1/resume/preview")).await).await;
        let preview: Value = serde_json::from_str(&preview).unwrap();
        assert_eq!(preview["name"], "Jane Doe");
        assert_eq!(preview["contact_line"], "");
        assert_eq!(preview["experience"], json!([]));
    }

    #[tokio::test]
    async fn test_projects_api_resolves_links() {
        let body = body_text(send(&state(), get("/api/v1/projects")).await).await;
        let projects: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(projects[0]["link"], json!({ "kind": "internal", "target": "/resume" }));
    }

    #[tokio::test]
    async fn test_export_downloads_pdf() {
        let response = send(&state(), get("/resume/export")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/pdf");
        let disposition = response.headers()[CONTENT_DISPOSITION].to_str().unwrap();
        assert!(disposition.starts_with("attachment; filename=\"Your Name - Resume.pdf\""));
        assert_eq!(response.headers()["x-page-count"], "1");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_export_html_backend() {
        let config = Config {
            export_format: ExportFormat::Html,
            ..Config::default()
        };
        let state = AppState::new(config).unwrap();
        let builder = body_text(send(&state, get("/resume")).await).await;
        assert!(builder.contains(">Download</a>"));

        let response = send(&state, get("/resume/export")).await;
        assert_eq!(response.headers()[CONTENT_TYPE], "text/html; charset=utf-8");
        assert!(response.headers().get("x-page-count").is_none());
        assert!(body_text(response).await.contains("<title>Your Name - Resume</title>"));
    }
}
