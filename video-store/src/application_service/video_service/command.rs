use serde_json::Value;

use crate::domain::VideoId;

/// Input of the create use case.
///
/// Fields stay untyped until validation so that a wrong JSON type is
/// reported as a failed field, not as a malformed request.
#[derive(Debug, Clone, Default)]
pub struct CreateVideoCommand {
    pub title: Option<Value>,
    pub author: Option<Value>,
    pub available_resolutions: Option<Value>,
}

/// Input of the update use case. Every mutable field is replaced.
#[derive(Debug, Clone)]
pub struct UpdateVideoCommand {
    pub id: VideoId,
    pub title: Option<Value>,
    pub author: Option<Value>,
    pub can_be_downloaded: Option<Value>,
    pub min_age_restriction: Option<Value>,
    pub publication_date: Option<Value>,
    pub available_resolutions: Option<Value>,
}
