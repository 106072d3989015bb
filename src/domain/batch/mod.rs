pub mod error;
pub mod model;
pub mod pacing;
pub mod service;

pub use error::BatchError;
pub use model::{BatchEntry, BatchSummary, GenerationJob, JobOutcome, RunOutcome};
pub use pacing::{FixedDelay, InteractivePrompt, NoPause, Pacer};
pub use service::BatchOrchestrator;
