use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

/// GET /health — 200 when the database answers a ping, 503 otherwise.
pub async fn health(db: web::Data<DatabaseConnection>) -> impl Responder {
    match db.ping().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })),
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unavailable",
                "error": format!("Database unreachable: {e}"),
            }))
        }
    }
}
