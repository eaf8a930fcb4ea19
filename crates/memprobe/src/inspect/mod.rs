//! `Inspect` implementations for std types.
//!
//! Each impl is a classification: it says which [`Kind`](crate::Kind) a
//! type belongs to and hands out borrows of whatever the traversal should
//! visit next. No impl computes a size itself.

mod collections;
mod handles;
mod indirect;

pub use indirect::Dynamic;

use std::borrow::Cow;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use crate::shape::{Inspect, IntWidth, Shape};

/// Erase a concrete value to the traversal's view of it.
pub(crate) fn as_dyn<T: Inspect>(value: &T) -> &dyn Inspect {
    value
}

// ── Scalars ─────────────────────────────────────────────────────

impl Inspect for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Bool
    }
}

macro_rules! impl_int {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Int(IntWidth::$width)
                }
            }
        )*
    };
}

impl_int! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
}

// ── Strings ─────────────────────────────────────────────────────

impl Inspect for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self.as_str())
    }
}

impl Inspect for &str {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

impl Inspect for Box<str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

impl Inspect for Rc<str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

impl Inspect for Arc<str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

impl Inspect for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

// ── Absent values ───────────────────────────────────────────────

impl Inspect for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Invalid
    }
}

impl<T: ?Sized> Inspect for PhantomData<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Invalid
    }
}

// ── Kinds without a sizing rule ─────────────────────────────────

macro_rules! impl_unsupported {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Unsupported(stringify!($ty))
                }
            }
        )*
    };
}

impl_unsupported!(f32, f64, char);

impl<T, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Unsupported("array")
    }
}

macro_rules! impl_unsupported_tuple {
    ($(($($param:ident),+)),* $(,)?) => {
        $(
            impl<$($param),+> Inspect for ($($param,)+) {
                fn shape(&self) -> Shape<'_> {
                    Shape::Unsupported("tuple")
                }
            }
        )*
    };
}

impl_unsupported_tuple!((A), (A, B), (A, B, C), (A, B, C, D));
