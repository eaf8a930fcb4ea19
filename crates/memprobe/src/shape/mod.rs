//! Value shapes.
//!
//! [`Inspect`] is the single introspection seam of the crate: a value
//! describes itself as a [`Shape`], a closed set of variants, one per
//! [`Kind`]. The traversal never looks at concrete types, only at shapes,
//! so user aggregates participate by implementing (or deriving) `Inspect`.

use std::fmt;
use std::mem::size_of;

use smallvec::SmallVec;

/// A value that can describe its own shape to the traversal.
///
/// Implementations exist for the std scalars, strings, pointers,
/// collections, and synchronization handles; user types usually
/// `#[derive(Inspect)]`.
pub trait Inspect {
    /// The shape of this value as it currently stands.
    fn shape(&self) -> Shape<'_>;

    /// Name of the implementing type.
    ///
    /// A value and its first member can start at the same address, so
    /// shared-pointee deduplication identifies a pointee by address and
    /// type together.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// The dynamic shape of a value at one traversal step.
///
/// Nested values are borrowed as `&dyn Inspect`, so resolving a shape
/// never copies the value being measured.
pub enum Shape<'a> {
    /// A reference or owning pointer. `None` is a nil pointer.
    Pointer(Option<&'a dyn Inspect>),
    Bool,
    Int(IntWidth),
    Str(&'a str),
    /// An associative container, as its key/value pairs.
    Map(Entries<'a>),
    /// A variable-length sequence, as its elements in order.
    Sequence(Elements<'a>),
    /// A channel or synchronization handle; never traversed.
    Channel,
    /// A tagged union, as the value it currently holds.
    Interface(Option<&'a dyn Inspect>),
    Struct(StructShape<'a>),
    Func,
    /// An absent value.
    Invalid,
    /// A kind the traversal has no sizing rule for, by name.
    Unsupported(&'static str),
}

impl Shape<'_> {
    /// The payload-free classification of this shape.
    pub fn kind(&self) -> Kind {
        match self {
            Shape::Pointer(_) => Kind::Pointer,
            Shape::Bool => Kind::Bool,
            Shape::Int(width) => Kind::Int(*width),
            Shape::Str(_) => Kind::String,
            Shape::Map(_) => Kind::Map,
            Shape::Sequence(_) => Kind::Sequence,
            Shape::Channel => Kind::Channel,
            Shape::Interface(_) => Kind::Interface,
            Shape::Struct(_) => Kind::Struct,
            Shape::Func => Kind::Func,
            Shape::Invalid => Kind::Invalid,
            Shape::Unsupported(name) => Kind::Unsupported(name),
        }
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shape").field(&self.kind()).finish()
    }
}

/// Fixed-width integer variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
}

impl IntWidth {
    /// Native size of an integer of this exact width.
    pub const fn size(self) -> usize {
        match self {
            IntWidth::I8 => size_of::<i8>(),
            IntWidth::I16 => size_of::<i16>(),
            IntWidth::I32 => size_of::<i32>(),
            IntWidth::I64 => size_of::<i64>(),
            IntWidth::I128 => size_of::<i128>(),
            IntWidth::Isize => size_of::<isize>(),
            IntWidth::U8 => size_of::<u8>(),
            IntWidth::U16 => size_of::<u16>(),
            IntWidth::U32 => size_of::<u32>(),
            IntWidth::U64 => size_of::<u64>(),
            IntWidth::U128 => size_of::<u128>(),
            IntWidth::Usize => size_of::<usize>(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            IntWidth::I8 => "i8",
            IntWidth::I16 => "i16",
            IntWidth::I32 => "i32",
            IntWidth::I64 => "i64",
            IntWidth::I128 => "i128",
            IntWidth::Isize => "isize",
            IntWidth::U8 => "u8",
            IntWidth::U16 => "u16",
            IntWidth::U32 => "u32",
            IntWidth::U64 => "u64",
            IntWidth::U128 => "u128",
            IntWidth::Usize => "usize",
        }
    }
}

/// Classification of a value's shape, without the shape's payload.
///
/// The display name is what the textual report prints after a member name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Pointer,
    Bool,
    Int(IntWidth),
    String,
    Map,
    Sequence,
    Channel,
    Interface,
    Struct,
    Func,
    Invalid,
    Unsupported(&'static str),
}

impl Kind {
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Pointer => "pointer",
            Kind::Bool => "bool",
            Kind::Int(width) => width.name(),
            Kind::String => "string",
            Kind::Map => "map",
            Kind::Sequence => "sequence",
            Kind::Channel => "channel",
            Kind::Interface => "interface",
            Kind::Struct => "struct",
            Kind::Func => "func",
            Kind::Invalid => "invalid",
            Kind::Unsupported(name) => name,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named member of an aggregate.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: &'a dyn Inspect,
}

/// An aggregate with fixed, named members.
///
/// Built by the `Inspect` derive; hand-written implementations use the
/// same builder:
///
/// ```
/// use memprobe::{Inspect, Shape, StructShape};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Inspect for Point {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Struct(
///             StructShape::new("Point", module_path!(), std::mem::size_of::<Self>())
///                 .field("x", &self.x)
///                 .field("y", &self.y),
///         )
///     }
/// }
///
/// assert_eq!(memprobe::measure(&Point { x: 1, y: 2 }).total(), 16);
/// ```
pub struct StructShape<'a> {
    name: &'static str,
    module_path: &'static str,
    size: usize,
    fields: SmallVec<[Field<'a>; 8]>,
}

impl<'a> StructShape<'a> {
    /// Start an aggregate shape.
    ///
    /// `size` is the native size of the aggregate as a value
    /// (`size_of::<Self>()`), charged once on top of its members.
    pub fn new(name: &'static str, module_path: &'static str, size: usize) -> Self {
        StructShape {
            name,
            module_path,
            size,
            fields: SmallVec::new(),
        }
    }

    /// Append a member, in declaration order.
    #[must_use]
    pub fn field(mut self, name: &'static str, value: &'a dyn Inspect) -> Self {
        self.fields.push(Field { name, value });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn module_path(&self) -> &'static str {
        self.module_path
    }

    /// The last segment of the module path.
    pub fn namespace(&self) -> &'static str {
        self.module_path
            .rsplit("::")
            .next()
            .unwrap_or(self.module_path)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }
}

/// The elements of a sequence, in order.
pub struct Elements<'a> {
    iter: Box<dyn Iterator<Item = &'a dyn Inspect> + 'a>,
}

impl<'a> Elements<'a> {
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = &'a dyn Inspect>,
        I::IntoIter: 'a,
    {
        Elements {
            iter: Box::new(elements.into_iter()),
        }
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a dyn Inspect;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

/// The key/value pairs of an associative container.
pub struct Entries<'a> {
    iter: Box<dyn Iterator<Item = (&'a dyn Inspect, &'a dyn Inspect)> + 'a>,
}

impl<'a> Entries<'a> {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a dyn Inspect, &'a dyn Inspect)>,
        I::IntoIter: 'a,
    {
        Entries {
            iter: Box::new(entries.into_iter()),
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a dyn Inspect, &'a dyn Inspect);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}
