//! Demo records loaded with `--seed-demo-data`.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{NewVideo, Resolution, Video, VideoId};

/// 2023-10-05T14:30:00Z
const TYPESCRIPT_CREATED_AT_MS: i64 = 1_696_516_200_000;
/// 2023-10-04T10:00:00Z
const JAVASCRIPT_CREATED_AT_MS: i64 = 1_696_413_600_000;

pub fn demo_videos() -> Vec<Video> {
    let typescript = Video::publish(
        VideoId::new(1),
        NewVideo {
            title: "Introduction to TypeScript".to_string(),
            author: "Alice".to_string(),
            available_resolutions: vec![Resolution::P144, Resolution::P720],
        },
        at(TYPESCRIPT_CREATED_AT_MS),
    );

    let javascript = Video::publish(
        VideoId::new(2),
        NewVideo {
            title: "Advanced JavaScript".to_string(),
            author: "Bob".to_string(),
            available_resolutions: vec![Resolution::P1080, Resolution::P2160],
        },
        at(JAVASCRIPT_CREATED_AT_MS),
    )
    .with_terms(true, Some(16));

    vec![typescript, javascript]
}

fn at(unix_ms: i64) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(unix_ms)
}
