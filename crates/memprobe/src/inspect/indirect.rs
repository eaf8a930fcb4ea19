//! Pointers, references, and tagged unions.
//!
//! Sized pointees are reported as `Shape::Pointer`; trait objects behind a
//! pointer are reported as `Shape::Interface`, the Rust form of a value
//! whose concrete type is only known at runtime.

use std::rc::Rc;
use std::sync::Arc;

use super::as_dyn;
use crate::shape::{Inspect, Shape};

impl<T: Inspect> Inspect for &T {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(Some(as_dyn(*self)))
    }
}

impl<T: Inspect> Inspect for &mut T {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(Some(as_dyn(&**self)))
    }
}

impl<T: Inspect> Inspect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(Some(as_dyn(&**self)))
    }
}

impl<T: Inspect> Inspect for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(Some(as_dyn(&**self)))
    }
}

impl<T: Inspect> Inspect for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(Some(as_dyn(&**self)))
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(self.as_ref().map(as_dyn))
    }
}

impl<T: Inspect, E: Inspect> Inspect for Result<T, E> {
    fn shape(&self) -> Shape<'_> {
        let held = match self {
            Ok(value) => as_dyn(value),
            Err(error) => as_dyn(error),
        };
        Shape::Interface(Some(held))
    }
}

impl Inspect for &dyn Inspect {
    fn shape(&self) -> Shape<'_> {
        Shape::Interface(Some(*self))
    }
}

impl Inspect for Box<dyn Inspect> {
    fn shape(&self) -> Shape<'_> {
        Shape::Interface(Some(&**self))
    }
}

impl Inspect for Rc<dyn Inspect> {
    fn shape(&self) -> Shape<'_> {
        Shape::Interface(Some(&**self))
    }
}

impl Inspect for Arc<dyn Inspect> {
    fn shape(&self) -> Shape<'_> {
        Shape::Interface(Some(&**self))
    }
}

/// A slot that holds a value of any inspectable type, or nothing.
///
/// This is the measured counterpart of a field typed as "some value whose
/// type is decided at runtime". An empty slot is charged
/// [`EMPTY_INTERFACE`](crate::native::EMPTY_INTERFACE) bytes; a filled one
/// measures exactly like the value it holds.
#[derive(Default)]
pub struct Dynamic(Option<Box<dyn Inspect>>);

impl Dynamic {
    pub fn new(value: impl Inspect + 'static) -> Self {
        Dynamic(Some(Box::new(value)))
    }

    pub fn empty() -> Self {
        Dynamic(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Replace the held value, returning the previous one.
    pub fn replace(&mut self, value: impl Inspect + 'static) -> Option<Box<dyn Inspect>> {
        self.0.replace(Box::new(value))
    }

    pub fn take(&mut self) -> Option<Box<dyn Inspect>> {
        self.0.take()
    }
}

impl From<Box<dyn Inspect>> for Dynamic {
    fn from(value: Box<dyn Inspect>) -> Self {
        Dynamic(Some(value))
    }
}

impl Inspect for Dynamic {
    fn shape(&self) -> Shape<'_> {
        Shape::Interface(self.0.as_deref())
    }
}
