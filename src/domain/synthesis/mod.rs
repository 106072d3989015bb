pub mod dto;
pub mod error;
pub mod service;
pub mod source;

pub use dto::{SynthesisRequest, VoiceSettings};
pub use error::SynthesisError;
pub use service::{SynthesisReport, SynthesisService};
pub use source::{SynthesisInvocation, TextSource};
