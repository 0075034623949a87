use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use super::domain::{Offer, ScoreResult};
use super::service::LeadScoringService;
use super::store::WorkspaceStore;
use crate::error::AppError;

const UPLOAD_FIELD: &str = "file";

/// Router builder exposing offer ingestion, lead upload, scoring, and export.
pub fn scoring_router<S>(service: Arc<LeadScoringService<S>>) -> Router
where
    S: WorkspaceStore + 'static,
{
    Router::new()
        .route("/api/offer", post(save_offer_handler::<S>))
        .route("/api/leads/upload", post(upload_leads_handler::<S>))
        .route("/api/score", post(score_handler::<S>))
        .route("/api/score/export", get(export_handler::<S>))
        .with_state(service)
}

pub(crate) async fn save_offer_handler<S>(
    State(service): State<Arc<LeadScoringService<S>>>,
    Json(offer): Json<Offer>,
) -> Result<&'static str, AppError>
where
    S: WorkspaceStore + 'static,
{
    service.save_offer(offer)?;
    Ok("Offer saved!")
}

pub(crate) async fn upload_leads_handler<S>(
    State(service): State<Arc<LeadScoringService<S>>>,
    mut multipart: Multipart,
) -> Result<String, AppError>
where
    S: WorkspaceStore + 'static,
{
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::Input(format!("invalid multipart body: {err}")))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|err| AppError::Input(format!("failed to read upload: {err}")))?;
            upload = Some(bytes);
        }
    }

    let bytes = upload
        .ok_or_else(|| AppError::Input(format!("missing multipart field '{UPLOAD_FIELD}'")))?;
    let count = service.upload_leads(Cursor::new(bytes))?;
    Ok(format!("{count} leads uploaded!"))
}

pub(crate) async fn score_handler<S>(
    State(service): State<Arc<LeadScoringService<S>>>,
) -> Result<Json<Vec<ScoreResult>>, AppError>
where
    S: WorkspaceStore + 'static,
{
    Ok(Json(service.score().await?))
}

pub(crate) async fn export_handler<S>(
    State(service): State<Arc<LeadScoringService<S>>>,
) -> Result<impl IntoResponse, AppError>
where
    S: WorkspaceStore + 'static,
{
    let csv = service.export_csv().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, "attachment; filename=results.csv"),
        ],
        csv,
    ))
}
