//! Platform size facts.
//!
//! Every container and reference kind carries a fixed bookkeeping overhead
//! independent of its contents. These constants are that overhead, read
//! from the compiler's own layout for a representative type.

use std::collections::HashMap;
use std::mem::size_of;
use std::sync::mpsc::Sender;

use crate::Dynamic;

/// Size of a `bool`.
pub const BOOL: usize = size_of::<bool>();

/// Size of one character unit; strings are charged per character.
pub const CHAR_UNIT: usize = size_of::<char>();

/// Handle size of an associative container.
pub const MAP: usize = size_of::<HashMap<usize, usize>>();

/// Handle size of a sequence: data pointer, capacity, length.
pub const SEQUENCE: usize = size_of::<Vec<usize>>();

/// Handle size of a channel or synchronization primitive.
pub const CHANNEL: usize = size_of::<Sender<()>>();

/// Size of a function pointer.
pub const FUNC: usize = size_of::<fn()>();

/// Size of a tagged union slot that holds nothing.
pub const EMPTY_INTERFACE: usize = size_of::<Dynamic>();
