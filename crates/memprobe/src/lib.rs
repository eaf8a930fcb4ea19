//! Runtime estimation of the in-memory footprint of values.
//!
//! memprobe walks a value's structure through the [`Inspect`] trait and
//! sums a fixed handle size per container or reference kind plus the
//! recursively measured size of everything it holds. The result is an
//! estimate for diagnostics, not an allocator-exact figure.
//!
//! ```
//! use std::collections::HashMap;
//!
//! #[derive(memprobe::Inspect)]
//! struct Inner {
//!     dinner: String,
//! }
//!
//! #[derive(memprobe::Inspect)]
//! struct Flat {
//!     name: String,
//!     contacts: HashMap<String, u8>,
//!     inner: Option<Box<Inner>>,
//! }
//!
//! let flat = Flat {
//!     name: "dingeling".into(),
//!     contacts: HashMap::new(),
//!     inner: None,
//! };
//! let measurement = memprobe::measure(&flat);
//! assert_eq!(
//!     measurement.total(),
//!     std::mem::size_of::<Flat>() + 9 * memprobe::native::CHAR_UNIT + memprobe::native::MAP,
//! );
//! ```
//!
//! # Modules
//!
//! - [`Shape`], [`Kind`]: how a value describes itself
//! - [`native`]: the fixed handle sizes
//! - [`Options`], [`Config`]: verbosity, sequence limit, report format, sink
//! - [`Measurement`], [`Breakdown`]: the result and its verbose report
//!
//! # Tracing
//!
//! Aggregates emit `trace` events and skipped kinds emit `debug` events
//! under the `memprobe` target. Call [`init_tracing`] to see them.

// Lets `#[derive(Inspect)]` resolve `::memprobe` inside this crate's own tests.
#[cfg(test)]
extern crate self as memprobe;

mod error;
mod inspect;
mod measurement;
pub mod native;
mod options;
mod probe;
mod report;
mod shape;
mod tracing_setup;

pub use error::{ConfigError, MeasureError};
pub use inspect::Dynamic;
pub use measurement::{measure, measure_with, Measurement};
pub use memprobe_macros::Inspect;
pub use options::{
    Config, Options, DEFAULT_SEQUENCE_LIMIT, ENV_FORMAT, ENV_SEQUENCE_LIMIT, ENV_VERBOSE,
};
pub use report::{Breakdown, Entry, Members, ReportFormat, UnknownFormat};
pub use shape::{Elements, Entries, Field, Inspect, IntWidth, Kind, Shape, StructShape};
pub use tracing_setup::init_tracing;
