use serde::{Deserialize, Serialize};

/// One invocation's worth of input: how many terms, what they add up to, and the step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequenceRequest {
    pub count: i64,
    pub sum: f64,
    pub common_difference: f64,
}

impl SequenceRequest {
    pub fn new(count: i64, sum: f64, common_difference: f64) -> Self {
        Self {
            count,
            sum,
            common_difference,
        }
    }
}

/// Terms of an arithmetic sequence, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    values: Vec<f64>,
}

impl Sequence {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Left-to-right sum of all terms.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// `values[i + 1] - values[i]` for every adjacent pair.
    pub fn differences(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.windows(2).map(|pair| pair[1] - pair[0])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub actual_sum: f64,
    pub expected_sum: f64,
    pub expected_difference: f64,
    pub valid: bool,
}

/// Everything the driver prints for a successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceReport {
    pub count: i64,
    pub sum: f64,
    pub common_difference: f64,
    pub sequence: Sequence,
    pub formatted: String,
    pub verification: Option<VerificationReport>,
}
