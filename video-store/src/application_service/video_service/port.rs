use chrono::{DateTime, Utc};

use crate::domain::{Video, VideoId};

/// Ordered collection of videos. Insertion order is listing order.
///
/// Implementations must make each call atomic with respect to the others:
/// `append` assigns the id and inserts under one critical section.
///
/// Ids are not guaranteed unique: after a delete, `len + 1` can repeat an id
/// that is still stored. Lookups by id act on the earliest stored match.
pub trait VideoRepository: Send + Sync {
    fn list(&self) -> Result<Vec<Video>, VideoRepositoryError>;

    fn find_by_id(&self, id: VideoId) -> Result<Option<Video>, VideoRepositoryError>;

    /// Appends the video built for the next id (`len + 1`).
    fn append<F>(&self, build: F) -> Result<Video, VideoRepositoryError>
    where
        F: FnOnce(VideoId) -> Video;

    /// Runs `apply` on the stored video. Returns `false` if `id` is unknown.
    fn update<F>(&self, id: VideoId, apply: F) -> Result<bool, VideoRepositoryError>
    where
        F: FnOnce(&mut Video);

    /// Removes the video. Returns `false` if `id` is unknown.
    fn remove(&self, id: VideoId) -> Result<bool, VideoRepositoryError>;

    fn clear(&self) -> Result<(), VideoRepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VideoRepositoryError {
    #[error("storage error: {0}")]
    Storage(String),
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
