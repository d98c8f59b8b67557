use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde_json::json;

use super::stats_aggregators::compute_stats;
use crate::error::AppError;
use crate::model::{ScoreCardCreate, ScoreCardStore, ScoreCardUpdate, format_uptime};

/// Timestamp captured once in `main`, injected so `/health` can report uptime.
#[derive(Clone)]
pub struct ServerStart(pub DateTime<Utc>);

pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": crate::WELCOME_MESSAGE }))
}

pub async fn health(started: Data<ServerStart>) -> impl Responder {
    let started_at = started.get_ref().0;
    let uptime = Utc::now() - started_at;
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "started_at": started_at.to_rfc3339(),
        "uptime": format_uptime(uptime),
    }))
}

pub async fn create_scorecard(
    store: Data<ScoreCardStore>,
    body: web::Json<ScoreCardCreate>,
) -> impl Responder {
    let created = store.create(body.into_inner()).await;
    tracing::info!(
        "created scorecard {} for {}",
        created.id,
        created.course_name
    );
    HttpResponse::Ok().json(created)
}

pub async fn list_scorecards(store: Data<ScoreCardStore>) -> impl Responder {
    HttpResponse::Ok().json(store.list_all().await)
}

pub async fn get_scorecard(
    store: Data<ScoreCardStore>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    match store.get(&id).await {
        Ok(scorecard) => HttpResponse::Ok().json(scorecard),
        Err(e) => HttpResponse::NotFound().json(json!({"error": e.to_string()})),
    }
}

pub async fn update_scorecard(
    store: Data<ScoreCardStore>,
    path: web::Path<String>,
    body: web::Json<ScoreCardUpdate>,
) -> impl Responder {
    let id = path.into_inner();
    match store.update(&id, body.into_inner()).await {
        Ok(scorecard) => HttpResponse::Ok().json(scorecard),
        Err(e) => HttpResponse::NotFound().json(json!({"error": e.to_string()})),
    }
}

pub async fn delete_scorecard(
    store: Data<ScoreCardStore>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    match store.delete(&id).await {
        Ok(()) => HttpResponse::Ok().json(json!({"message": "Scorecard deleted successfully"})),
        Err(e) => HttpResponse::NotFound().json(json!({"error": e.to_string()})),
    }
}

pub async fn scorecard_stats(store: Data<ScoreCardStore>) -> impl Responder {
    let scorecards = store.list_all().await;
    HttpResponse::Ok().json(compute_stats(&scorecards))
}

/// Rejects malformed bodies at the extractor boundary, before any handler
/// runs, with the same `{"error": ...}` shape the rest of the service uses.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let validation = AppError::Validation(err.to_string());
    let response = HttpResponse::BadRequest().json(json!({"error": validation.to_string()}));
    actix_web::error::InternalError::from_response(err, response).into()
}
