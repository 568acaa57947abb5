use actix_web::{web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use humantime::format_duration;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::time::Duration;

use crate::{use_cases::extractors::AdminClaims, AppState};

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    database: String,
    version: String,
}

pub async fn admin_health_check(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> impl Responder {
    let now = Utc::now();
    let uptime_duration = now.signed_duration_since(*START_TIME);
    let human_uptime =
        format_duration(Duration::from_secs(uptime_duration.num_seconds().max(0) as u64));

    let database = match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => "OK",
        Err(_) => "Unavailable",
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now.to_rfc3339(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
