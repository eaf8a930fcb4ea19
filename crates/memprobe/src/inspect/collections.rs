//! Sequences and associative containers.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use super::as_dyn;
use crate::shape::{Elements, Entries, Inspect, Shape};

impl<T: Inspect> Inspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Elements::new(self.iter().map(as_dyn)))
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Elements::new(self.iter().map(as_dyn)))
    }
}

impl<T: Inspect> Inspect for &[T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Elements::new(self.iter().map(as_dyn)))
    }
}

impl<T: Inspect> Inspect for Box<[T]> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Elements::new(self.iter().map(as_dyn)))
    }
}

// Sets have no associated values; they are measured as sequences of keys.

impl<T: Inspect, S> Inspect for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Elements::new(self.iter().map(as_dyn)))
    }
}

impl<T: Inspect> Inspect for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Elements::new(self.iter().map(as_dyn)))
    }
}

impl<K: Inspect, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(Entries::new(
            self.iter().map(|(key, value)| (as_dyn(key), as_dyn(value))),
        ))
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(Entries::new(
            self.iter().map(|(key, value)| (as_dyn(key), as_dyn(value))),
        ))
    }
}
