//! Procedural macros for memprobe.
//!
//! This crate provides the `Inspect` derive, which lets user-defined
//! aggregates describe their shape to the memprobe traversal instead of
//! hand-writing an `Inspect` implementation.
//!
//! # Inspect Derive
//!
//! ```text
//! #[derive(Inspect)]
//! pub struct Flat {
//!     name: String,
//!     contacts: HashMap<String, Flat>,
//!     tags: Vec<String>,
//!     #[inspect(skip)]
//!     handle: RawHandle,
//!     #[inspect(rename = "nested")]
//!     inner: Inner,
//! }
//! ```
//!
//! Structs become `Shape::Struct`, carrying the type name, the declaring
//! module path, `size_of::<Self>()`, and one field per declared member.
//! Enums are tagged unions: a unit variant is an empty interface, a
//! single-field tuple variant unwraps to its payload, and every other
//! variant is reported as an aggregate named `Enum::Variant`.

mod inspect;
mod utils;

use proc_macro::TokenStream;

/// Derive macro implementing `memprobe::Inspect`.
///
/// # Attributes
///
/// ## Field-level
/// - `#[inspect(skip)]` - Do not traverse this member. Its bytes are still
///   charged through the aggregate's own `size_of`.
/// - `#[inspect(rename = "name")]` - Report the member under another name.
///   Not allowed on the payload of a single-field tuple variant, which is
///   reported as the payload itself.
///
/// Two members of one aggregate cannot share a report name.
///
/// Every type parameter of the deriving type gets an `Inspect` bound.
///
/// # Example
///
/// ```text
/// #[derive(Inspect)]
/// pub struct Inner {
///     dinner: String,
/// }
///
/// let size = memprobe::measure(&Inner { dinner: "chicken winner".into() });
/// ```
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    inspect::derive_inspect(input)
}

#[cfg(test)]
mod tests;
