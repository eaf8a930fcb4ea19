//! The traversal: probes and the kind dispatcher.
//!
//! A [`Probe`] is the context for measuring one value. It owns a running
//! byte total plus, in verbose mode, the breakdown and trace of what it
//! measured. Nested members and elements are measured by child probes
//! that share the parent's [`Config`] but start with empty buffers; once
//! a child is done it is folded into its parent and discarded.
//!
//! # Traversal
//!
//! ```text
//! size_of(value)
//!     └─ resolve: value.shape() ──► one sizer per Kind
//!            ├─ pointer / interface ──► resolve(target)      (same probe)
//!            ├─ struct   ──► child probe per member          (folded: total, trace, breakdown)
//!            ├─ sequence ──► child probe per element          (folded: total)
//!            └─ map      ──► child probe per key and value    (folded: total)
//! ```
//!
//! # Cycles
//!
//! Nothing tracks which values have been visited unless `dedup_shared` is
//! set, so a value graph that reaches itself recurses without bound.

mod sizers;

use rustc_hash::FxHashSet;

use crate::options::Config;
use crate::report::Breakdown;
use crate::shape::{Inspect, Kind, Shape};

/// Pointees already counted, by address and type name.
pub(crate) type Visited = FxHashSet<(usize, &'static str)>;

/// Traversal context for one measured value.
pub(crate) struct Probe<'a> {
    config: &'a Config,
    /// Only present in dedup mode.
    visited: Option<&'a mut Visited>,
    depth: usize,
    total: usize,
    /// Kind of the first shape this probe resolved.
    kind: Option<Kind>,
    trace: String,
    breakdown: Option<Breakdown>,
}

/// What a finished probe hands back to its creator.
#[derive(Debug)]
pub(crate) struct Folded {
    pub total: usize,
    pub kind: Kind,
    pub trace: String,
    pub breakdown: Option<Breakdown>,
}

impl<'a> Probe<'a> {
    pub(crate) fn root(config: &'a Config, visited: Option<&'a mut Visited>) -> Self {
        Probe {
            config,
            visited,
            depth: 0,
            total: 0,
            kind: None,
            trace: String::new(),
            breakdown: None,
        }
    }

    /// A probe for one nested value, one indentation level deeper.
    fn child(&mut self) -> Probe<'_> {
        Probe {
            config: self.config,
            visited: self.visited.as_deref_mut(),
            depth: self.depth + 1,
            total: 0,
            kind: None,
            trace: String::new(),
            breakdown: None,
        }
    }

    /// Consume the probe, keeping only what its creator folds in.
    pub(crate) fn finish(self) -> Folded {
        Folded {
            total: self.total,
            kind: self.kind.unwrap_or(Kind::Invalid),
            trace: self.trace,
            breakdown: self.breakdown,
        }
    }

    /// Measure `value`, adding its bytes to this probe's total.
    pub(crate) fn size_of(&mut self, value: &dyn Inspect) -> usize {
        let bytes = self.resolve(value);
        self.total += bytes;
        bytes
    }

    /// Measure `value` in a fresh child probe and return the whole child.
    fn measure_child(&mut self, value: &dyn Inspect) -> Folded {
        let mut child = self.child();
        child.size_of(value);
        child.finish()
    }

    /// Dispatch on the value's shape.
    fn resolve(&mut self, value: &dyn Inspect) -> usize {
        let shape = value.shape();
        self.kind.get_or_insert(shape.kind());

        match shape {
            Shape::Pointer(target) => self.size_of_pointer(target),
            Shape::Bool => sizers::size_of_bool(),
            Shape::Int(width) => width.size(),
            Shape::Str(text) => sizers::size_of_str(text),
            Shape::Map(entries) => self.size_of_map(entries),
            Shape::Sequence(elements) => self.size_of_sequence(elements),
            Shape::Channel => sizers::size_of_channel(),
            Shape::Interface(held) => self.size_of_interface(held),
            Shape::Struct(aggregate) => self.size_of_struct(&aggregate),
            Shape::Func => sizers::size_of_func(),
            Shape::Invalid => 0,
            Shape::Unsupported(name) => self.skip(name),
        }
    }
}
