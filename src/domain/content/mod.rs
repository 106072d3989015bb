pub mod error;
pub mod layout;
pub mod model;

pub use error::ContentError;
pub use layout::{ContentLayout, AUDIO_EXTENSION, TEXT_EXTENSION};
pub use model::{validate_segment, ContentUnit, Tenant};
