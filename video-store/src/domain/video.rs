use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::resolution::Resolution;
use crate::domain::timestamp::iso8601;

/// Identifier assigned by the store when a video is created.
///
/// Ids are unique among the videos currently stored, not over the lifetime
/// of the store: a new video takes `len + 1`, so deleting and creating can
/// hand out an id again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(u64);

impl VideoId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parses a path segment. Surrounding whitespace is ignored and a leading
    /// `+` is accepted. Anything else that is not a non-negative decimal
    /// integer yields `None`, which callers treat as "no such video".
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u64>().ok().map(Self)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields accepted when a video is created. Everything else is defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVideo {
    pub title: String,
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
}

/// Full replacement of the mutable fields of a stored video.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoChanges {
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<u8>,
    pub publication_date: DateTime<Utc>,
    pub available_resolutions: Vec<Resolution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    id: VideoId,
    title: String,
    author: String,
    can_be_downloaded: bool,
    min_age_restriction: Option<u8>,
    #[serde(with = "iso8601")]
    created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    publication_date: DateTime<Utc>,
    available_resolutions: Vec<Resolution>,
}

impl Video {
    /// Time between creation and the default publication date.
    pub fn publication_delay() -> Duration {
        Duration::hours(24)
    }

    /// Builds a freshly created video: not downloadable, no age
    /// restriction, published one day after `now`.
    pub fn publish(id: VideoId, new_video: NewVideo, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new_video.title,
            author: new_video.author,
            can_be_downloaded: false,
            min_age_restriction: None,
            created_at: now,
            publication_date: now + Self::publication_delay(),
            available_resolutions: new_video.available_resolutions,
        }
    }

    /// Sets the download terms of a record built with [`Video::publish`].
    pub fn with_terms(mut self, can_be_downloaded: bool, min_age_restriction: Option<u8>) -> Self {
        self.can_be_downloaded = can_be_downloaded;
        self.min_age_restriction = min_age_restriction;
        self
    }

    /// Overwrites every mutable field. `id` and `created_at` never change.
    pub fn apply(&mut self, changes: VideoChanges) {
        self.title = changes.title;
        self.author = changes.author;
        self.can_be_downloaded = changes.can_be_downloaded;
        self.min_age_restriction = changes.min_age_restriction;
        self.publication_date = changes.publication_date;
        self.available_resolutions = changes.available_resolutions;
    }

    pub fn id(&self) -> VideoId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn can_be_downloaded(&self) -> bool {
        self.can_be_downloaded
    }

    pub fn min_age_restriction(&self) -> Option<u8> {
        self.min_age_restriction
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn publication_date(&self) -> DateTime<Utc> {
        self.publication_date
    }

    pub fn available_resolutions(&self) -> &[Resolution] {
        &self.available_resolutions
    }
}
