pub mod resolution;
pub mod timestamp;
pub mod validation;
pub mod video;

pub use resolution::Resolution;
pub use validation::{Field, FieldError, ValidationErrors};
pub use video::{NewVideo, Video, VideoChanges, VideoId};
