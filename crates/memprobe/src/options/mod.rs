//! Measurement configuration.
//!
//! [`Options`] is what callers build; it is resolved once into a [`Config`]
//! that every probe in the traversal shares by reference. The output sink
//! stays with the root call and is written after the traversal completes.

use std::fmt;
use std::io::Write;

use crate::error::ConfigError;
use crate::report::ReportFormat;

/// Default cap on how many elements of a sequence are measured.
pub const DEFAULT_SEQUENCE_LIMIT: usize = 10_000;

/// Environment variable enabling verbose breakdowns.
pub const ENV_VERBOSE: &str = "MEMPROBE_VERBOSE";
/// Environment variable setting the sequence limit.
pub const ENV_SEQUENCE_LIMIT: &str = "MEMPROBE_SEQUENCE_LIMIT";
/// Environment variable selecting the report format.
pub const ENV_FORMAT: &str = "MEMPROBE_FORMAT";

/// Resolved, immutable traversal configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Populate a breakdown (tree or text) alongside the total.
    pub verbose: bool,
    /// Measure at most this many elements per sequence; 0 means unlimited.
    pub sequence_limit: usize,
    pub format: ReportFormat,
    /// Count each shared pointee once, keyed by address.
    pub dedup_shared: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose: false,
            sequence_limit: DEFAULT_SEQUENCE_LIMIT,
            format: ReportFormat::default(),
            dedup_shared: false,
        }
    }
}

impl Config {
    /// The active report format, or `None` when not verbose.
    pub(crate) fn report(&self) -> Option<ReportFormat> {
        self.verbose.then_some(self.format)
    }

    /// How many elements of a sequence to measure.
    pub(crate) fn element_budget(&self) -> usize {
        if self.sequence_limit == 0 {
            usize::MAX
        } else {
            self.sequence_limit
        }
    }
}

/// Options for [`measure_with`](crate::measure_with).
///
/// ```
/// let mut trace: Vec<u8> = Vec::new();
/// let options = memprobe::Options::new()
///     .verbose(true)
///     .sequence_limit(100)
///     .report_format(memprobe::ReportFormat::Text)
///     .output_sink(&mut trace);
///
/// let measurement = memprobe::measure_with(&vec![1u32, 2, 3], options)?;
/// assert_eq!(measurement.total(), memprobe::native::SEQUENCE + 3 * 4);
/// # Ok::<(), memprobe::MeasureError>(())
/// ```
#[derive(Default)]
pub struct Options<'w> {
    config: Config,
    sink: Option<&'w mut dyn Write>,
}

impl<'w> Options<'w> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from `MEMPROBE_VERBOSE`, `MEMPROBE_SEQUENCE_LIMIT`, and
    /// `MEMPROBE_FORMAT`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut options = Self::new();

        if let Some(value) = lookup(ENV_VERBOSE) {
            options.config.verbose = parse_flag(ENV_VERBOSE, &value)?;
        }
        if let Some(value) = lookup(ENV_SEQUENCE_LIMIT) {
            options.config.sequence_limit = parse_limit(ENV_SEQUENCE_LIMIT, &value)?;
        }
        if let Some(value) = lookup(ENV_FORMAT) {
            options.config.format = value.parse().map_err(|_| ConfigError::InvalidFormat {
                var: ENV_FORMAT,
                value: value.clone(),
            })?;
        }

        Ok(options)
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Cap sequence traversal at `limit` elements; 0 removes the cap.
    #[must_use]
    pub fn sequence_limit(mut self, limit: usize) -> Self {
        self.config.sequence_limit = limit;
        self
    }

    #[must_use]
    pub fn report_format(mut self, format: ReportFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Write the textual trace to `sink` once the traversal completes.
    #[must_use]
    pub fn output_sink(mut self, sink: &'w mut dyn Write) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Count a pointee reached through several pointers only once.
    #[must_use]
    pub fn dedup_shared(mut self, dedup: bool) -> Self {
        self.config.dedup_shared = dedup;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn into_parts(self) -> (Config, Option<&'w mut dyn Write>) {
        (self.config, self.sink)
    }
}

impl fmt::Debug for Options<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("config", &self.config)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

fn parse_limit(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidLimit {
            var,
            value: value.to_string(),
        })
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}
