//! One sizing rule per kind.
//!
//! Every rule is a fixed handle size plus the recursively measured size of
//! whatever the value holds.

use std::fmt::Write;
use std::mem;

use super::Probe;
use crate::native;
use crate::report::{Breakdown, Entry, Indent, Members, ReportFormat};
use crate::shape::{Elements, Entries, Inspect, StructShape};

pub(super) fn size_of_bool() -> usize {
    native::BOOL
}

/// Strings are charged per character, without the string header.
pub(super) fn size_of_str(text: &str) -> usize {
    native::CHAR_UNIT * text.chars().count()
}

pub(super) fn size_of_channel() -> usize {
    native::CHANNEL
}

pub(super) fn size_of_func() -> usize {
    native::FUNC
}

/// Identity of a pointee, for shared-pointee deduplication.
fn identity_of(value: &dyn Inspect) -> (usize, &'static str) {
    let address = std::ptr::from_ref(value).cast::<()>() as usize;
    (address, value.type_name())
}

impl Probe<'_> {
    /// A nil pointer contributes nothing; otherwise the pointee is measured
    /// in place of the pointer.
    pub(super) fn size_of_pointer(&mut self, target: Option<&dyn Inspect>) -> usize {
        match target {
            Some(target) => self.follow(target),
            None => 0,
        }
    }

    /// A union holding a value measures as that value; an empty one is
    /// charged the empty-interface handle.
    pub(super) fn size_of_interface(&mut self, held: Option<&dyn Inspect>) -> usize {
        match held {
            Some(held) => self.follow(held),
            None => native::EMPTY_INTERFACE,
        }
    }

    fn follow(&mut self, target: &dyn Inspect) -> usize {
        if let Some(visited) = self.visited.as_deref_mut() {
            // Zero-sized pointees share dangling addresses.
            if mem::size_of_val(target) > 0 && !visited.insert(identity_of(target)) {
                tracing::trace!(kind = %target.shape().kind(), "pointee already counted");
                return 0;
            }
        }
        self.resolve(target)
    }

    pub(super) fn size_of_map(&mut self, entries: Entries<'_>) -> usize {
        let mut bytes = native::MAP;
        for (key, value) in entries {
            bytes += self.measure_child(key).total;
            bytes += self.measure_child(value).total;
        }
        bytes
    }

    /// Elements past the sequence limit are not measured at all.
    pub(super) fn size_of_sequence(&mut self, elements: Elements<'_>) -> usize {
        let mut bytes = native::SEQUENCE;
        for element in elements.take(self.config.element_budget()) {
            bytes += self.measure_child(element).total;
        }
        bytes
    }

    pub(super) fn size_of_struct(&mut self, aggregate: &StructShape<'_>) -> usize {
        tracing::trace!(
            name = aggregate.name(),
            fields = aggregate.fields().len(),
            "sizing aggregate"
        );

        let report = self.config.report();
        let indent = Indent(self.depth);
        let mut bytes = aggregate.size();
        let mut members = Members::new();

        if report == Some(ReportFormat::Text) {
            let _ = writeln!(
                self.trace,
                "{indent}({}::{}):",
                aggregate.namespace(),
                aggregate.name()
            );
        }

        for field in aggregate.fields() {
            let member = self.measure_child(field.value);
            bytes += member.total;

            if report == Some(ReportFormat::Text) {
                let _ = writeln!(
                    self.trace,
                    "{indent}\t{}: {} [{}]",
                    field.name, member.kind, member.total
                );
            }
            self.trace.push_str(&member.trace);

            if report == Some(ReportFormat::Tree) {
                let entry = match member.breakdown {
                    Some(node) => Entry::Node(node),
                    None => Entry::Leaf(member.total),
                };
                members.insert(field.name, entry);
            }
        }

        if report == Some(ReportFormat::Tree) {
            self.breakdown = Some(Breakdown::of(aggregate.name(), members));
        }
        bytes
    }

    /// No rule for this kind: contribute nothing and say so.
    pub(super) fn skip(&mut self, name: &'static str) -> usize {
        tracing::debug!(kind = name, "skipping unsupported kind");
        let _ = writeln!(self.trace, "{}Skipping: {name}", Indent(self.depth));
        0
    }
}
