use crate::domain::model::SequenceRequest;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

const EXAMPLES: &str = "\
Examples:
  arith-seq -n 5 -s 25 -d 2
    Creates a sequence of 5 numbers with sum 25 and common difference 2
    Result: 1, 3, 5, 7, 9

  arith-seq -n 4 -s 10 -d 1
    Creates a sequence of 4 numbers with sum 10 and common difference 1
    Result: 1, 2, 3, 4";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "arith-seq", version)]
#[command(
    about = "Create an arithmetic sequence given the number of elements, sum, and common difference."
)]
#[command(after_help = EXAMPLES)]
pub struct CliConfig {
    /// Number of elements in the sequence
    #[arg(short = 'n', long = "num-elements", allow_negative_numbers = true)]
    pub num_elements: i64,

    /// Sum of all elements in the sequence
    #[arg(short, long, allow_negative_numbers = true)]
    pub sum: f64,

    /// Common difference between consecutive elements
    #[arg(short, long, allow_negative_numbers = true)]
    pub diff: f64,

    /// Verify that the generated sequence meets the requirements
    #[arg(short, long)]
    pub verify: bool,

    /// Report format written to standard output
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON on stderr")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn request(&self) -> SequenceRequest {
        SequenceRequest::new(self.num_elements, self.sum, self.diff)
    }
}
