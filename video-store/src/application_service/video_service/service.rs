use crate::domain::{
    validation::{self, ValidationErrors},
    NewVideo, Video, VideoChanges, VideoId,
};

use super::{Clock, CreateVideoCommand, UpdateVideoCommand, VideoRepository, VideoRepositoryError};

/// Application service for the video use cases.
pub struct VideoService<R, C> {
    pub video_repository: R,
    pub clock: C,
}

impl<R, C> VideoService<R, C>
where
    R: VideoRepository,
    C: Clock,
{
    pub fn new(video_repository: R, clock: C) -> Self {
        Self {
            video_repository,
            clock,
        }
    }

    pub fn list(&self) -> Result<Vec<Video>, VideoServiceError> {
        self.video_repository
            .list()
            .map_err(VideoServiceError::Repository)
    }

    pub fn get(&self, id: VideoId) -> Result<Video, VideoServiceError> {
        self.video_repository
            .find_by_id(id)
            .map_err(VideoServiceError::Repository)?
            .ok_or(VideoServiceError::NotFound)
    }

    pub fn create(&self, cmd: CreateVideoCommand) -> Result<Video, VideoServiceError> {
        let new_video = validate_create(&cmd).map_err(|errors| {
            tracing::debug!(fields = ?errors.fields(), "create rejected");
            VideoServiceError::Validation(errors)
        })?;

        let now = self.clock.now();
        let video = self
            .video_repository
            .append(|id| Video::publish(id, new_video, now))
            .map_err(VideoServiceError::Repository)?;

        tracing::info!(id = %video.id(), title = video.title(), "video created");
        Ok(video)
    }

    /// Existence is checked before the body is validated, so an unknown id
    /// wins over a bad body.
    pub fn update(&self, cmd: UpdateVideoCommand) -> Result<(), VideoServiceError> {
        self.get(cmd.id)?;

        let changes = validate_update(&cmd).map_err(|errors| {
            tracing::debug!(id = %cmd.id, fields = ?errors.fields(), "update rejected");
            VideoServiceError::Validation(errors)
        })?;

        // the video may have been removed since the lookup above
        let updated = self
            .video_repository
            .update(cmd.id, |video| video.apply(changes))
            .map_err(VideoServiceError::Repository)?;
        if !updated {
            return Err(VideoServiceError::NotFound);
        }

        tracing::info!(id = %cmd.id, "video updated");
        Ok(())
    }

    pub fn delete(&self, id: VideoId) -> Result<(), VideoServiceError> {
        let removed = self
            .video_repository
            .remove(id)
            .map_err(VideoServiceError::Repository)?;
        if !removed {
            return Err(VideoServiceError::NotFound);
        }

        tracing::info!(id = %id, "video deleted");
        Ok(())
    }

    /// Drops every stored video. Used by test orchestration.
    pub fn clear(&self) -> Result<(), VideoServiceError> {
        self.video_repository
            .clear()
            .map_err(VideoServiceError::Repository)?;

        tracing::info!("all videos cleared");
        Ok(())
    }
}

fn validate_create(cmd: &CreateVideoCommand) -> Result<NewVideo, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let title = errors.collect(validation::title(cmd.title.as_ref()));
    let author = errors.collect(validation::author(cmd.author.as_ref()));
    let available_resolutions = errors.collect(validation::available_resolutions(
        cmd.available_resolutions.as_ref(),
    ));

    match (title, author, available_resolutions) {
        (Some(title), Some(author), Some(available_resolutions)) => Ok(NewVideo {
            title,
            author,
            available_resolutions,
        }),
        _ => Err(errors),
    }
}

fn validate_update(cmd: &UpdateVideoCommand) -> Result<VideoChanges, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let title = errors.collect(validation::title(cmd.title.as_ref()));
    let author = errors.collect(validation::author(cmd.author.as_ref()));
    let available_resolutions = errors.collect(validation::available_resolutions(
        cmd.available_resolutions.as_ref(),
    ));
    let can_be_downloaded =
        errors.collect(validation::can_be_downloaded(cmd.can_be_downloaded.as_ref()));
    let min_age_restriction = errors.collect(validation::min_age_restriction(
        cmd.min_age_restriction.as_ref(),
    ));
    let publication_date =
        errors.collect(validation::publication_date(cmd.publication_date.as_ref()));

    match (
        title,
        author,
        available_resolutions,
        can_be_downloaded,
        min_age_restriction,
        publication_date,
    ) {
        (
            Some(title),
            Some(author),
            Some(available_resolutions),
            Some(can_be_downloaded),
            Some(min_age_restriction),
            Some(publication_date),
        ) => Ok(VideoChanges {
            title,
            author,
            can_be_downloaded,
            min_age_restriction,
            publication_date,
            available_resolutions,
        }),
        _ => Err(errors),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VideoServiceError {
    #[error("video not found")]
    NotFound,
    #[error("validation error: {0}")]
    Validation(ValidationErrors),
    #[error("repository error: {0}")]
    Repository(VideoRepositoryError),
}
