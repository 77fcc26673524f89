pub mod calculator;
pub mod engine;
pub mod formatter;
pub mod verifier;

pub use crate::domain::model::{Sequence, SequenceReport, SequenceRequest, VerificationReport};
pub use crate::utils::error::Result;
