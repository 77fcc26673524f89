use crate::config::{CliConfig, OutputFormat};
use crate::core::formatter::{format_fixed, format_requested, format_sequence};
use crate::core::verifier::verification_report;
use crate::core::{Result, SequenceReport, SequenceRequest, VerificationReport};
use crate::utils::error::SequenceError;
use std::io::Write;

/// Runs one request through calculate → format → (optionally) verify and
/// writes the report.
pub struct SequenceEngine {
    request: SequenceRequest,
    verify: bool,
    output: OutputFormat,
}

impl SequenceEngine {
    pub fn new(request: SequenceRequest) -> Self {
        Self {
            request,
            verify: false,
            output: OutputFormat::Text,
        }
    }

    pub fn from_config(config: &CliConfig) -> Self {
        Self::new(config.request())
            .with_verification(config.verify)
            .with_output(config.output)
    }

    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Builds the report without writing anything.
    pub fn report(&self) -> Result<SequenceReport> {
        let request = self.request;

        let sequence = request.calculate()?;
        tracing::debug!(terms = sequence.len(), "calculated sequence");

        let formatted = format_sequence(&sequence);

        let verification = if self.verify {
            Some(verification_report(
                &sequence,
                request.sum,
                request.common_difference,
            ))
        } else {
            None
        };

        Ok(SequenceReport {
            count: request.count,
            sum: request.sum,
            common_difference: request.common_difference,
            sequence,
            formatted,
            verification,
        })
    }

    /// Writes the report to `out`. Nothing is written when the request is
    /// rejected.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<SequenceReport> {
        let report = self.report()?;

        match self.output {
            OutputFormat::Text => write_text(out, &report)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
        out.flush()?;

        Ok(report)
    }

    /// Driver entry point: writes the report, or `Error: <message>` when the
    /// request is rejected, and returns the process exit status.
    pub fn run_cli<W: Write>(&self, out: &mut W) -> i32 {
        match self.run(out) {
            Ok(report) => {
                tracing::info!(
                    count = report.count,
                    verified = ?report.verification.as_ref().map(|v| v.valid),
                    "sequence written"
                );
                0
            }
            Err(e @ SequenceError::InvalidArgument { .. }) => {
                tracing::debug!("❌ {}", e);
                tracing::debug!("💡 Suggestion: {}", e.recovery_suggestion());

                let written = writeln!(out, "Error: {}", e).and_then(|_| out.flush());
                if let Err(write_err) = written {
                    tracing::error!("❌ Failed to write error message: {}", write_err);
                }
                e.exit_code()
            }
            Err(e) => {
                tracing::error!("❌ Failed to write sequence report: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                e.exit_code()
            }
        }
    }
}

fn write_text<W: Write>(out: &mut W, report: &SequenceReport) -> Result<()> {
    writeln!(out, "Arithmetic Sequence ({} elements):", report.count)?;
    writeln!(out, "{}", report.formatted)?;

    if let Some(verification) = &report.verification {
        write_verification(out, verification)?;
    }
    Ok(())
}

fn write_verification<W: Write>(out: &mut W, verification: &VerificationReport) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Verification:")?;
    writeln!(
        out,
        "  Sum: {} (expected: {})",
        format_fixed(verification.actual_sum),
        format_requested(verification.expected_sum)
    )?;
    writeln!(
        out,
        "  Common difference: {}",
        format_requested(verification.expected_difference)
    )?;
    writeln!(
        out,
        "  Valid: {}",
        if verification.valid { "✓" } else { "✗" }
    )?;
    Ok(())
}
