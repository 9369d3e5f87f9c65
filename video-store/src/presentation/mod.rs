use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::application_service::video_service::VideoService;
use crate::config::ServiceConfig;
use crate::infrastructure::{clock::SystemClock, repository::InMemoryVideoRepository, seed};

pub mod error;
pub mod testing;
pub mod video;

pub type AppVideoService = VideoService<InMemoryVideoRepository, SystemClock>;

/// Application state shared across handlers.
pub struct AppState {
    pub video_service: AppVideoService,
}

impl AppState {
    pub fn new(config: &ServiceConfig) -> Self {
        let repository = if config.seed_demo_data {
            InMemoryVideoRepository::with_videos(seed::demo_videos())
        } else {
            InMemoryVideoRepository::default()
        };

        Self {
            video_service: VideoService::new(repository, SystemClock),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&ServiceConfig::default())
    }
}

async fn health() -> &'static str {
    "ok"
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(video::routes())
        .merge(testing::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
