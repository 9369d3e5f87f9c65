mod command;
mod port;
mod service;

pub use command::{CreateVideoCommand, UpdateVideoCommand};
pub use port::{Clock, VideoRepository, VideoRepositoryError};
pub use service::{VideoService, VideoServiceError};
