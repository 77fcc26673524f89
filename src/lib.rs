pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, OutputFormat};
pub use core::{
    calculator::calculate, engine::SequenceEngine, formatter::format_sequence, verifier::verify,
};
pub use domain::model::{Sequence, SequenceReport, SequenceRequest, VerificationReport};
pub use utils::error::{Result, SequenceError};
