use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    application_service::video_service::{CreateVideoCommand, UpdateVideoCommand},
    domain::{Video, VideoId},
};

use super::{error::ApiError, AppState};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    pub title: Option<Value>,
    pub author: Option<Value>,
    pub available_resolutions: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoRequest {
    pub title: Option<Value>,
    pub author: Option<Value>,
    pub can_be_downloaded: Option<Value>,
    pub min_age_restriction: Option<Value>,
    pub publication_date: Option<Value>,
    pub available_resolutions: Option<Value>,
}

impl From<CreateVideoRequest> for CreateVideoCommand {
    fn from(req: CreateVideoRequest) -> Self {
        Self {
            title: req.title,
            author: req.author,
            available_resolutions: req.available_resolutions,
        }
    }
}

impl UpdateVideoRequest {
    fn into_command(self, id: VideoId) -> UpdateVideoCommand {
        UpdateVideoCommand {
            id,
            title: self.title,
            author: self.author,
            can_be_downloaded: self.can_be_downloaded,
            min_age_restriction: self.min_age_restriction,
            publication_date: self.publication_date,
            available_resolutions: self.available_resolutions,
        }
    }
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/videos", get(list_videos).post(create_video))
        .route(
            "/videos/{id}",
            get(get_video).put(update_video).delete(delete_video),
        )
}

/// A missing or unreadable body is validated as `{}`.
fn body_or_default<T: Default>(body: Result<Json<T>, JsonRejection>) -> T {
    match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable request body, validating as empty");
            T::default()
        }
    }
}

fn parse_id(raw: &str) -> Result<VideoId, ApiError> {
    VideoId::parse(raw).ok_or(ApiError::NotFound)
}

async fn list_videos(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Video>>, ApiError> {
    Ok(Json(state.video_service.list()?))
}

async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Video>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.video_service.get(id)?))
}

async fn create_video(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateVideoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Video>), ApiError> {
    let req = body_or_default(body);
    let video = state.video_service.create(req.into())?;
    Ok((StatusCode::CREATED, Json(video)))
}

async fn update_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateVideoRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let req = body_or_default(body);
    state.video_service.update(req.into_command(id))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.video_service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
