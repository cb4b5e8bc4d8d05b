//! `/api` scope.
//!
//! The REST API is a separate service; this binary only hosts the bundle.
//! Anything under `/api` is answered with a JSON 404 so the SPA fallback
//! never hands `index.html` to a client expecting JSON.

use actix_web::{web, HttpRequest, HttpResponse};
use log::debug;
use serde_json::json;

const API_PATH: &str = "/api";

/// Configures and returns the Actix `Scope` for everything under `/api`.
pub fn configure_routes() -> actix_web::Scope {
    web::scope(API_PATH).default_service(web::route().to(not_served))
}

async fn not_served(req: HttpRequest) -> HttpResponse {
    debug!("{} {} is not served by the static host", req.method(), req.path());
    HttpResponse::NotFound().json(json!({
        "error": "not_found",
        "message": format!("{} is not served by this host", req.path()),
    }))
}
