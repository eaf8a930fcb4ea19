//! Breakdown reporting.
//!
//! Two presentations of the same traversal, selected by [`ReportFormat`]
//! and populated only in verbose mode:
//!
//! - **Tree**: a [`Breakdown`] mirroring the aggregate/member structure,
//!   rendered as JSON with sorted keys and 4-space indentation.
//! - **Text**: one `(<namespace>::<Type>):` header per aggregate and one
//!   `<member>: <kind> [<bytes>]` line per member, tab-indented by depth,
//!   in declaration order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// How the verbose breakdown is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    #[default]
    Tree,
    Text,
}

impl ReportFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            ReportFormat::Tree => "tree",
            ReportFormat::Text => "text",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`ReportFormat`] name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownFormat;

impl FromStr for ReportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" | "json" => Ok(ReportFormat::Tree),
            "text" => Ok(ReportFormat::Text),
            _ => Err(UnknownFormat),
        }
    }
}

/// Per-member byte contributions of one aggregate, keyed by member name.
pub type Members = BTreeMap<&'static str, Entry>;

/// One member's contribution.
///
/// A member whose own traversal produced no structure (a scalar, string,
/// sequence, or map) is a leaf byte count; a member that reached another
/// aggregate carries that aggregate's breakdown instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Leaf(usize),
    Node(Breakdown),
}

impl Entry {
    /// The byte count of a leaf entry.
    pub fn bytes(&self) -> Option<usize> {
        match self {
            Entry::Leaf(bytes) => Some(*bytes),
            Entry::Node(_) => None,
        }
    }

    /// The nested breakdown of a compound entry.
    pub fn node(&self) -> Option<&Breakdown> {
        match self {
            Entry::Leaf(_) => None,
            Entry::Node(node) => Some(node),
        }
    }
}

/// The verbose-mode record of an aggregate: type name to members.
///
/// Serializes as a plain JSON object, so keys come out alphabetically.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Breakdown {
    types: BTreeMap<&'static str, Members>,
}

impl Breakdown {
    pub(crate) fn of(type_name: &'static str, members: Members) -> Self {
        let mut types = BTreeMap::new();
        types.insert(type_name, members);
        Breakdown { types }
    }

    /// The members recorded under `type_name`.
    pub fn members(&self, type_name: &str) -> Option<&Members> {
        self.types.get(type_name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.keys().copied()
    }

    /// Follow a path of member names from the root aggregate.
    ///
    /// Each step descends through the single aggregate recorded at that
    /// level, so `lookup(&["inner", "dinner"])` finds `dinner` inside the
    /// aggregate held by `inner`.
    pub fn lookup(&self, path: &[&str]) -> Option<&Entry> {
        let (first, rest) = path.split_first()?;
        let entry = self.types.values().find_map(|members| members.get(*first))?;
        if rest.is_empty() {
            Some(entry)
        } else {
            entry.node()?.lookup(rest)
        }
    }
}

/// Serialize `value` as JSON with sorted keys and 4-space indentation.
pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Tab indentation for a nesting depth.
#[derive(Clone, Copy)]
pub(crate) struct Indent(pub usize);

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            f.write_str("\t")?;
        }
        Ok(())
    }
}
