use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod ai;
pub mod config;
pub mod document;
pub mod render;
pub mod session;

use crate::ai::{GeminiClient, TextGenerator};
use crate::config::GeminiConfig;
use crate::session::AppState;

/// JSON body for every non-success response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

pub async fn run() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::document::handlers::get_request,
            crate::document::handlers::update_request,
            crate::document::handlers::get_status,
            crate::document::handlers::generate_document,
            crate::document::handlers::get_document,
            crate::document::handlers::preview_document,
            crate::document::handlers::export_document,
        ),
        components(
            schemas(
                document::models::DocumentType,
                document::models::SapModule,
                document::models::DocumentRequest,
                document::models::UpdateDocumentRequest,
                document::models::GeneratedDocument,
                document::handlers::SessionStatus,
                session::SessionPhase,
                ErrorResponse,
            )
        ),
        tags(
            (name = "Document Request", description = "Session request editing."),
            (name = "Generation", description = "Document generation and status."),
            (name = "Export", description = "Preview and export endpoints.")
        )
    )]
    struct ApiDoc;

    dotenvy::dotenv().ok();

    let gemini_config = GeminiConfig::from_env();
    let generator: Arc<dyn TextGenerator> = match GeminiClient::new(gemini_config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            log::error!("Failed to build the HTTP client for the generation service: {e}");
            return Err(std::io::Error::other(e));
        }
    };

    let app_state = web::Data::new(AppState::new(generator));

    let prometheus = PrometheusMetricsBuilder::new("smartdocs_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    let bind_addr = config::bind_addr();
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let prometheus = prometheus.clone();
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state)
            .service(web::scope("/api").configure(document::handlers::config))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .service(actix_files::Files::new("/", "./static").index_file("index.html"))
    })
    .bind(bind_addr)?
    .run()
    .await
}
