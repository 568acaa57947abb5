use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Portfolio CMS API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Catch-all for unmatched routes.
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "Not found",
        "message": "The requested route does not exist"
    }))
}
