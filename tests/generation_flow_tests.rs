//! End-to-end tests of the generation flow against the HTTP surface,
//! using a scripted generator in place of the external service.

mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::json;

use common::MockGenerator;
use smartdocs_server::ai::GenerationError;
use smartdocs_server::document::handlers;
use smartdocs_server::document::models::GeneratedDocument;
use smartdocs_server::document::prompt::PAGE_BREAK;
use smartdocs_server::session::AppState;

const DEMO_DOCUMENT: &str = "# Demo\n\n--- PAGE BREAK ---\n\nBody";

fn state_with(generator: Arc<MockGenerator>) -> web::Data<AppState> {
    web::Data::new(AppState::new(generator))
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .service(web::scope("/api").configure(handlers::config)),
        )
        .await
    };
}

async fn fill_required_fields<S>(app: &S)
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::put()
        .uri("/api/request")
        .set_json(json!({
            "title": "Acme",
            "description": "Automate intercompany billing"
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

async fn phase<S>(app: &S) -> String
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::get().uri("/api/status").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(app, req).await;
    body["phase"].as_str().unwrap().to_string()
}

#[actix_web::test]
async fn successful_generation_stores_the_document() {
    let generator = MockGenerator::with_response(DEMO_DOCUMENT);
    let state = state_with(generator.clone());
    let app = test_app!(state);

    assert_eq!(phase(&app).await, "idle");
    fill_required_fields(&app).await;

    let req = test::TestRequest::post().uri("/api/generate").to_request();
    let document: GeneratedDocument = test::call_and_read_body_json(&app, req).await;
    assert_eq!(document.content, DEMO_DOCUMENT);

    assert_eq!(phase(&app).await, "ready");
    assert_eq!(generator.call_count(), 1);

    let req = test::TestRequest::get().uri("/api/document").to_request();
    let stored: GeneratedDocument = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored.content, DEMO_DOCUMENT);
    assert_eq!(stored.id, document.id);
}

#[actix_web::test]
async fn generator_receives_the_built_prompt() {
    let generator = MockGenerator::with_response(DEMO_DOCUMENT);
    let state = state_with(generator.clone());
    let app = test_app!(state);

    fill_required_fields(&app).await;
    let req = test::TestRequest::post().uri("/api/generate").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains(PAGE_BREAK));
    assert!(prompts[0].contains("Acme"));
    assert!(prompts[0].contains("Automate intercompany billing"));
}

#[actix_web::test]
async fn blank_title_never_reaches_the_generator() {
    let generator = MockGenerator::with_response(DEMO_DOCUMENT);
    let state = state_with(generator.clone());
    let app = test_app!(state);

    let req = test::TestRequest::put()
        .uri("/api/request")
        .set_json(json!({ "description": "valid description" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post().uri("/api/generate").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(generator.call_count(), 0);
    assert_eq!(phase(&app).await, "idle");
}

#[actix_web::test]
async fn blank_description_never_reaches_the_generator() {
    let generator = MockGenerator::with_response(DEMO_DOCUMENT);
    let state = state_with(generator.clone());
    let app = test_app!(state);

    let req = test::TestRequest::put()
        .uri("/api/request")
        .set_json(json!({ "title": "Acme" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post().uri("/api/generate").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(generator.call_count(), 0);
}

#[actix_web::test]
async fn failed_generation_returns_to_idle_without_a_document() {
    let generator = MockGenerator::failing();
    let state = state_with(generator.clone());
    let app = test_app!(state);

    fill_required_fields(&app).await;
    let req = test::TestRequest::post().uri("/api/generate").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(phase(&app).await, "idle");

    let req = test::TestRequest::get().uri("/api/document").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn failed_generation_preserves_the_prior_document() {
    let generator = MockGenerator::with_responses(vec![
        Ok("first document".to_string()),
        Err(GenerationError::UnusableResponse),
    ]);
    let state = state_with(generator.clone());
    let app = test_app!(state);

    fill_required_fields(&app).await;

    let req = test::TestRequest::post().uri("/api/generate").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post().uri("/api/generate").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let req = test::TestRequest::get().uri("/api/document").to_request();
    let stored: GeneratedDocument = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored.content, "first document");
    assert_eq!(phase(&app).await, "ready");
}

#[actix_web::test]
async fn concurrent_submission_is_refused_while_loading() {
    let generator = MockGenerator::with_response(DEMO_DOCUMENT);
    let state = state_with(generator.clone());
    let app = test_app!(state);

    fill_required_fields(&app).await;

    // Claim the loading flag as an in-flight call would.
    assert!(state.begin_generation());

    let req = test::TestRequest::post().uri("/api/generate").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(generator.call_count(), 0);

    state.finish_generation();
}

#[actix_web::test]
async fn request_edits_apply_to_the_next_submission() {
    let generator =
        MockGenerator::with_responses(vec![Ok("one".to_string()), Ok("two".to_string())]);
    let state = state_with(generator.clone());
    let app = test_app!(state);

    fill_required_fields(&app).await;
    let req = test::TestRequest::post().uri("/api/generate").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::put()
        .uri("/api/request")
        .set_json(json!({ "title": "Renamed Project" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post().uri("/api/generate").to_request();
    test::call_service(&app, req).await;

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(!prompts[0].contains("Renamed Project"));
    assert!(prompts[1].contains("Renamed Project"));
}
