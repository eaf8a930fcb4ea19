//! Entry points.
//!
//! [`measure`] is the quick path: default configuration, total only.
//! [`measure_with`] takes [`Options`] and writes the trace to the
//! configured sink once the traversal completes.

use std::fmt;

use crate::error::MeasureError;
use crate::options::{Config, Options};
use crate::probe::{Probe, Visited};
use crate::report::{to_pretty_json, Breakdown, ReportFormat};
use crate::shape::Inspect;

/// The outcome of measuring one value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Measurement {
    total: usize,
    breakdown: Option<Breakdown>,
    trace: String,
    format: ReportFormat,
}

impl Measurement {
    /// Estimated footprint in bytes.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The tree breakdown; present only for verbose tree-format runs.
    pub fn breakdown(&self) -> Option<&Breakdown> {
        self.breakdown.as_ref()
    }

    /// The textual trace: the text breakdown in verbose text-format runs,
    /// plus one `Skipping:` line per unsupported value in any mode.
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// The breakdown as 4-space indented JSON with sorted keys, or `null`.
    pub fn to_json(&self) -> Result<String, MeasureError> {
        to_pretty_json(&self.breakdown).map_err(MeasureError::from)
    }

    /// The report in the configured format.
    pub fn render(&self) -> Result<String, MeasureError> {
        match self.format {
            ReportFormat::Tree => self.to_json(),
            ReportFormat::Text => Ok(self.trace.clone()),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.total)
    }
}

/// Estimate the footprint of `value` with the default configuration.
///
/// ```
/// assert_eq!(memprobe::measure(&"dddd").total(), 16);
/// assert_eq!(memprobe::measure(&true).total(), 1);
/// ```
pub fn measure(value: &dyn Inspect) -> Measurement {
    run(value, &Config::default())
}

/// Estimate the footprint of `value` under `options`.
///
/// The traversal itself cannot fail; the error cases are writing the trace
/// to the output sink.
///
/// # Errors
///
/// Returns [`MeasureError::Sink`] if writing or flushing the sink fails.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(
        verbose = options.config().verbose,
        sequence_limit = options.config().sequence_limit,
        format = %options.config().format,
        dedup = options.config().dedup_shared,
    )
)]
pub fn measure_with(
    value: &dyn Inspect,
    options: Options<'_>,
) -> Result<Measurement, MeasureError> {
    let (config, sink) = options.into_parts();
    let measurement = run(value, &config);
    tracing::debug!(total = measurement.total, "measured");

    if let Some(sink) = sink {
        sink.write_all(measurement.trace.as_bytes())?;
        sink.flush()?;
    }
    Ok(measurement)
}

fn run(value: &dyn Inspect, config: &Config) -> Measurement {
    let mut visited = config.dedup_shared.then(Visited::default);
    let mut probe = Probe::root(config, visited.as_mut());
    probe.size_of(value);
    let folded = probe.finish();

    Measurement {
        total: folded.total,
        breakdown: folded.breakdown,
        trace: folded.trace,
        format: config.format,
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
