pub mod batch;
pub mod content;
pub mod synthesis;
