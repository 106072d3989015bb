#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("{field} must not be empty")]
    EmptySegment { field: &'static str },
    #[error("{field} '{value}' is not a valid path segment")]
    InvalidSegment { field: &'static str, value: String },
}
