use std::sync::{Arc, Mutex, MutexGuard};

use crate::application_service::video_service::{VideoRepository, VideoRepositoryError};
use crate::domain::{Video, VideoId};

/// In-process video store backed by a `Vec`.
/// Nothing is persisted; the contents live as long as the process.
#[derive(Clone, Default)]
pub struct InMemoryVideoRepository {
    inner: Arc<Mutex<Vec<Video>>>,
}

impl InMemoryVideoRepository {
    pub fn with_videos(videos: Vec<Video>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(videos)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Video>>, VideoRepositoryError> {
        self.inner
            .lock()
            .map_err(|e| VideoRepositoryError::Storage(e.to_string()))
    }
}

impl VideoRepository for InMemoryVideoRepository {
    fn list(&self) -> Result<Vec<Video>, VideoRepositoryError> {
        Ok(self.lock()?.clone())
    }

    fn find_by_id(&self, id: VideoId) -> Result<Option<Video>, VideoRepositoryError> {
        let guard = self.lock()?;
        Ok(guard.iter().find(|v| v.id() == id).cloned())
    }

    fn append<F>(&self, build: F) -> Result<Video, VideoRepositoryError>
    where
        F: FnOnce(VideoId) -> Video,
    {
        let mut guard = self.lock()?;

        let id = VideoId::new(guard.len() as u64 + 1);
        let video = build(id);
        guard.push(video.clone());
        Ok(video)
    }

    fn update<F>(&self, id: VideoId, apply: F) -> Result<bool, VideoRepositoryError>
    where
        F: FnOnce(&mut Video),
    {
        let mut guard = self.lock()?;

        match guard.iter_mut().find(|v| v.id() == id) {
            Some(video) => {
                apply(video);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&self, id: VideoId) -> Result<bool, VideoRepositoryError> {
        let mut guard = self.lock()?;

        match guard.iter().position(|v| v.id() == id) {
            Some(index) => {
                guard.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn clear(&self) -> Result<(), VideoRepositoryError> {
        self.lock()?.clear();
        Ok(())
    }
}
