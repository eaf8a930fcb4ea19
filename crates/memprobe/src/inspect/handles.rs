//! Channels, locks, and callables.
//!
//! These are charged a fixed handle size and never traversed: a channel's
//! buffered messages and a closure's captures are not reachable through a
//! shared borrow, and a lock's contents can only be reached by taking the
//! lock.

use std::cell::{Cell, RefCell};
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::{Condvar, Mutex, RwLock};

use crate::shape::{Inspect, Shape};

macro_rules! impl_channel {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: ?Sized> Inspect for $ty<T> {
                fn shape(&self) -> Shape<'_> {
                    Shape::Channel
                }
            }
        )*
    };
}

impl_channel!(Mutex, RwLock);

impl<T> Inspect for Sender<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Channel
    }
}

impl<T> Inspect for SyncSender<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Channel
    }
}

impl<T> Inspect for Receiver<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Channel
    }
}

impl Inspect for Condvar {
    fn shape(&self) -> Shape<'_> {
        Shape::Channel
    }
}

impl<T: ?Sized> Inspect for parking_lot::Mutex<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Channel
    }
}

impl<T: ?Sized> Inspect for parking_lot::RwLock<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Channel
    }
}

// Interior mutability cells cannot lend their contents for the lifetime of
// a shape without a runtime borrow guard.

impl<T: ?Sized> Inspect for Cell<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Unsupported("Cell")
    }
}

impl<T: ?Sized> Inspect for RefCell<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Unsupported("RefCell")
    }
}

// ── Callables ───────────────────────────────────────────────────

macro_rules! impl_fn_pointer {
    ($(($($arg:ident),*)),* $(,)?) => {
        $(
            impl<$($arg,)* R> Inspect for fn($($arg),*) -> R {
                fn shape(&self) -> Shape<'_> {
                    Shape::Func
                }
            }
        )*
    };
}

impl_fn_pointer!((), (A), (A, B), (A, B, C), (A, B, C, D));

macro_rules! impl_boxed_fn {
    ($(($($arg:ident),*)),* $(,)?) => {
        $(
            impl<$($arg,)* R> Inspect for Box<dyn Fn($($arg),*) -> R> {
                fn shape(&self) -> Shape<'_> {
                    Shape::Func
                }
            }
        )*
    };
}

impl_boxed_fn!((), (A), (A, B));
