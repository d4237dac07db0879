use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::document::models::{DocumentRequest, GeneratedDocument, UpdateDocumentRequest};
use crate::document::prompt::build_prompt;
use crate::render::{export_filename, render_html};
use crate::session::{AppState, SessionPhase};
use crate::ErrorResponse;

/// Session phase as reported by `GET /api/status`.
#[derive(Serialize, ToSchema)]
pub struct SessionStatus {
    pub phase: SessionPhase,
}

#[utoipa::path(
    get,
    path = "/api/request",
    tag = "Document Request",
    responses(
        (status = 200, description = "Current document request", body = DocumentRequest)
    )
)]
pub async fn get_request(state: web::Data<AppState>) -> impl Responder {
    let request = state.request.read().clone();
    HttpResponse::Ok().json(request)
}

#[utoipa::path(
    put,
    path = "/api/request",
    tag = "Document Request",
    request_body = UpdateDocumentRequest,
    responses(
        (status = 200, description = "Updated document request", body = DocumentRequest)
    )
)]
pub async fn update_request(
    update: web::Json<UpdateDocumentRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let mut request = state.request.write();
    update.apply_to(&mut request);
    HttpResponse::Ok().json(request.clone())
}

#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Generation",
    responses(
        (status = 200, description = "Current session phase", body = SessionStatus)
    )
)]
pub async fn get_status(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(SessionStatus {
        phase: state.phase(),
    })
}

#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "Generation",
    responses(
        (status = 200, description = "Document generated", body = GeneratedDocument),
        (status = 400, description = "Required fields missing", body = ErrorResponse),
        (status = 409, description = "A generation is already in flight", body = ErrorResponse),
        (status = 502, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_document(state: web::Data<AppState>) -> impl Responder {
    // Snapshot of the request; edits made while the call is outstanding
    // apply to the next submission only.
    let request = state.request.read().clone();

    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::bad_request(&errors.to_message()));
    }

    if !state.begin_generation() {
        return HttpResponse::Conflict().json(ErrorResponse::new(
            "Conflict",
            "A document generation is already in progress",
        ));
    }

    let prompt = build_prompt(&request);
    let result = state.generator.generate(&prompt).await;

    match result {
        Ok(content) => {
            let document = state.complete_generation(content);
            log::info!(
                "Generated document {} ({} bytes)",
                document.id,
                document.content.len()
            );
            HttpResponse::Ok().json(document)
        }
        Err(e) => {
            state.finish_generation();
            log::error!("Document generation failed: {e}");
            HttpResponse::BadGateway().json(ErrorResponse::new(
                "BadGateway",
                "Failed to generate document",
            ))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/document",
    tag = "Generation",
    responses(
        (status = 200, description = "Last generated document", body = GeneratedDocument),
        (status = 404, description = "No document generated yet", body = ErrorResponse)
    )
)]
pub async fn get_document(state: web::Data<AppState>) -> impl Responder {
    match state.document.read().clone() {
        Some(document) => HttpResponse::Ok().json(document),
        None => HttpResponse::NotFound().json(ErrorResponse::not_found("No document generated yet")),
    }
}

#[utoipa::path(
    get,
    path = "/api/document/html",
    tag = "Export",
    responses(
        (status = 200, description = "Rendered preview HTML", content_type = "text/html"),
        (status = 404, description = "No document generated yet", body = ErrorResponse)
    )
)]
pub async fn preview_document(state: web::Data<AppState>) -> impl Responder {
    let content = state
        .document
        .read()
        .as_ref()
        .map(|document| document.content.clone());

    match content {
        Some(markdown) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(render_html(&markdown)),
        None => HttpResponse::NotFound().json(ErrorResponse::not_found("No document generated yet")),
    }
}

#[utoipa::path(
    get,
    path = "/api/document/export",
    tag = "Export",
    responses(
        (status = 200, description = "Plain-text download of the document", content_type = "text/plain"),
        (status = 404, description = "No document generated yet", body = ErrorResponse)
    )
)]
pub async fn export_document(state: web::Data<AppState>) -> impl Responder {
    let content = state
        .document
        .read()
        .as_ref()
        .map(|document| document.content.clone());

    let Some(content) = content else {
        return HttpResponse::NotFound()
            .json(ErrorResponse::not_found("No document generated yet"));
    };

    let filename = export_filename(&state.request.read().title);

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(content)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/request")
            .route(web::get().to(get_request))
            .route(web::put().to(update_request)),
    )
    .service(web::resource("/status").route(web::get().to(get_status)))
    .service(web::resource("/generate").route(web::post().to(generate_document)))
    .service(web::resource("/document").route(web::get().to(get_document)))
    .service(web::resource("/document/html").route(web::get().to(preview_document)))
    .service(web::resource("/document/export").route(web::get().to(export_document)));
}
