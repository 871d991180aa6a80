//! Argument kinds and their classification.
//!
//! Every [`crate::TypedArgument`] carries exactly one [`ArgumentKind`], which names the
//! representation that is active in its payload. The kinds are declared in a fixed order so that
//! every broad category (integers, reals, text pointers, pointers, vectors, ...) occupies one
//! contiguous range of discriminants. All classification predicates are range tests over that
//! ordering, which keeps them branch-light enough to be called for every placeholder of every
//! formatted string.
//!
//! # Ordering
//!
//! | Range                   | First          | Last             |
//! |-------------------------|----------------|------------------|
//! | numeric                 | `Int8`         | `Bool`           |
//! | integer                 | `Int8`         | `UInt64`         |
//! | signed integer          | `Int8`         | `Int64`          |
//! | unsigned integer        | `UInt8`        | `UInt64`         |
//! | real                    | `Float16`      | `Float64`        |
//! | vector value            | `Vector2`      | `Vector4Dbl`     |
//! | narrow text pointer     | `StringPtr`    | `UInt8Ptr`       |
//! | pointer                 | `StringPtr`    | `VoidPtr`        |
//! | vector pointer          | `Vector2Ptr`   | `Vector4DblPtr`  |
//!
//! The ordering and the names returned by [`ArgumentKind::type_name`] are part of the contract
//! with formatting engines and diagnostics, and must not change.

use std::{fmt, mem::size_of};

use bitflags::bitflags;
use strum::{EnumCount, EnumIter, FromRepr};

use crate::{Error, Result};

/// Identifies which payload representation of a [`crate::TypedArgument`] is active.
///
/// Discriminants start at 1; the value 0 is reserved so that zeroed memory never decodes to a
/// valid kind (see [`ArgumentKind::try_from`]).
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, EnumIter, EnumCount, FromRepr,
)]
#[repr(u8)]
pub enum ArgumentKind {
    /// Signed 1 byte integer
    Int8 = 1,
    /// Signed 2 byte integer
    Int16,
    /// Signed 4 byte integer
    Int32,
    /// Signed 8 byte integer
    Int64,
    /// Unsigned 1 byte integer
    UInt8,
    /// Unsigned 2 byte integer
    UInt16,
    /// Unsigned 4 byte integer
    UInt32,
    /// Unsigned 8 byte integer
    UInt64,
    /// 16-bit IEEE 754-2008 float (binary16), stored as raw bits
    Float16,
    /// 32-bit IEEE 754 float
    Float32,
    /// 64-bit IEEE 754 float
    Float64,
    /// Boolean
    Bool,
    /// 64-bit short vector
    Vector2,
    /// 128-bit vector, 4 floats
    Vector4,
    /// 128-bit vector, 4 32-bit integers
    Vector4Int,
    /// 128-bit vector, 2 doubles
    Vector4Dbl,
    /// Borrowed owned string (`String`)
    StringPtr,
    /// Narrow, zero terminated character string
    CharPtr,
    /// Pointer to signed bytes, read as a narrow string by text accessors
    Int8Ptr,
    /// Pointer to unsigned bytes, read as a narrow string by text accessors
    UInt8Ptr,
    /// Pointer to `i16`
    Int16Ptr,
    /// Pointer to `u16`, read as a UTF-16 string by text length queries
    UInt16Ptr,
    /// Pointer to `i32`
    Int32Ptr,
    /// Pointer to `u32`
    UInt32Ptr,
    /// Pointer to `i64`
    Int64Ptr,
    /// Pointer to `u64`
    UInt64Ptr,
    /// Pointer to `f32`
    Float32Ptr,
    /// Pointer to `f64`
    Float64Ptr,
    /// Pointer to `bool`
    BoolPtr,
    /// Pointer to a 64-bit short vector
    Vector2Ptr,
    /// Pointer to a 128-bit vector of 4 floats
    Vector4Ptr,
    /// Pointer to a 128-bit vector of 4 32-bit integers
    Vector4IntPtr,
    /// Pointer to a 128-bit vector of 2 doubles
    Vector4DblPtr,
    /// Untyped pointer, the catch-all for every pointer without a dedicated kind
    VoidPtr,
}

impl ArgumentKind {
    /// First integer kind
    pub const FIRST_INTEGER: Self = Self::Int8;
    /// Last integer kind
    pub const LAST_INTEGER: Self = Self::UInt64;
    /// First signed integer kind
    pub const FIRST_SIGNED: Self = Self::Int8;
    /// Last signed integer kind
    pub const LAST_SIGNED: Self = Self::Int64;
    /// First unsigned integer kind
    pub const FIRST_UNSIGNED: Self = Self::UInt8;
    /// Last unsigned integer kind
    pub const LAST_UNSIGNED: Self = Self::UInt64;
    /// First floating point kind
    pub const FIRST_REAL: Self = Self::Float16;
    /// Last floating point kind
    pub const LAST_REAL: Self = Self::Float64;
    /// First vector value kind
    pub const FIRST_SIMD: Self = Self::Vector2;
    /// Last vector value kind
    pub const LAST_SIMD: Self = Self::Vector4Dbl;
    /// First narrow text pointer kind
    pub const FIRST_TEXT: Self = Self::StringPtr;
    /// Last narrow text pointer kind
    pub const LAST_TEXT: Self = Self::UInt8Ptr;
    /// First pointer kind
    pub const FIRST_POINTER: Self = Self::StringPtr;
    /// Last pointer kind
    pub const LAST_POINTER: Self = Self::VoidPtr;
    /// First vector pointer kind
    pub const FIRST_SIMD_POINTER: Self = Self::Vector2Ptr;
    /// Last vector pointer kind
    pub const LAST_SIMD_POINTER: Self = Self::Vector4DblPtr;

    #[inline]
    const fn within(self, first: Self, last: Self) -> bool {
        (self as u8) >= (first as u8) && (self as u8) <= (last as u8)
    }

    /// Integers, reals and booleans
    #[must_use]
    #[inline]
    pub const fn is_numeric(self) -> bool {
        self.within(Self::Int8, Self::Bool)
    }

    /// Signed and unsigned integers of any width
    #[must_use]
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.within(Self::FIRST_INTEGER, Self::LAST_INTEGER)
    }

    /// Signed integers only, reals are not included
    #[must_use]
    #[inline]
    pub const fn is_signed(self) -> bool {
        self.within(Self::FIRST_SIGNED, Self::LAST_SIGNED)
    }

    /// Unsigned integers only
    #[must_use]
    #[inline]
    pub const fn is_unsigned(self) -> bool {
        self.within(Self::FIRST_UNSIGNED, Self::LAST_UNSIGNED)
    }

    /// A boolean, or a pointer to one
    #[must_use]
    #[inline]
    pub const fn is_boolean(self) -> bool {
        matches!(self, Self::Bool | Self::BoolPtr)
    }

    /// Half, single and double precision floats
    #[must_use]
    #[inline]
    pub const fn is_real(self) -> bool {
        self.within(Self::FIRST_REAL, Self::LAST_REAL)
    }

    /// Integers that can hold a single character code unit.
    ///
    /// Characters are 8, 16 or 32 bits wide, 64-bit integers are never characters.
    #[must_use]
    #[inline]
    pub const fn is_character(self) -> bool {
        self.within(Self::Int8, Self::UInt32) && !matches!(self, Self::Int64)
    }

    /// Pointers that text accessors read as a string.
    ///
    /// This is the narrow text range plus [`ArgumentKind::UInt16Ptr`], which is measured as UTF-16.
    #[must_use]
    #[inline]
    pub const fn is_text_pointer(self) -> bool {
        self.within(Self::FIRST_TEXT, Self::LAST_TEXT) || matches!(self, Self::UInt16Ptr)
    }

    /// Any pointer kind, including strings and vector pointers
    #[must_use]
    #[inline]
    pub const fn is_pointer(self) -> bool {
        self.within(Self::FIRST_POINTER, Self::LAST_POINTER)
    }

    /// The intrinsic data is exactly 8 bytes wide.
    ///
    /// Pointer kinds report `true` on 64-bit targets.
    #[must_use]
    #[inline]
    pub const fn is_64bit(self) -> bool {
        self.byte_width() == 8
    }

    /// Vector values (not pointers to vectors)
    #[must_use]
    #[inline]
    pub const fn is_simd(self) -> bool {
        self.within(Self::FIRST_SIMD, Self::LAST_SIMD)
    }

    /// Pointers to vectors
    #[must_use]
    #[inline]
    pub const fn is_simd_pointer(self) -> bool {
        self.within(Self::FIRST_SIMD_POINTER, Self::LAST_SIMD_POINTER)
    }

    /// Size in bytes of the intrinsic data of this kind.
    ///
    /// Pointer kinds report the width of a pointer on the target.
    #[must_use]
    pub const fn byte_width(self) -> usize {
        match self {
            Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 | Self::Float16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 => 4,
            Self::Int64 | Self::UInt64 | Self::Float64 | Self::Vector2 => 8,
            Self::Bool => size_of::<bool>(),
            Self::Vector4 | Self::Vector4Int | Self::Vector4Dbl => 16,
            Self::StringPtr
            | Self::CharPtr
            | Self::Int8Ptr
            | Self::UInt8Ptr
            | Self::Int16Ptr
            | Self::UInt16Ptr
            | Self::Int32Ptr
            | Self::UInt32Ptr
            | Self::Int64Ptr
            | Self::UInt64Ptr
            | Self::Float32Ptr
            | Self::Float64Ptr
            | Self::BoolPtr
            | Self::Vector2Ptr
            | Self::Vector4Ptr
            | Self::Vector4IntPtr
            | Self::Vector4DblPtr
            | Self::VoidPtr => size_of::<*const ()>(),
        }
    }

    /// Canonical, compiler independent spelling of this kind for diagnostics.
    ///
    /// ```rust
    /// use argtype::ArgumentKind;
    ///
    /// assert_eq!(ArgumentKind::Int8.type_name(), "int8_t");
    /// assert_eq!(ArgumentKind::UInt16Ptr.type_name(), "uint16_t *");
    /// assert_eq!(ArgumentKind::Float64.type_name(), "double");
    /// ```
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Int8 => "int8_t",
            Self::Int16 => "int16_t",
            Self::Int32 => "int32_t",
            Self::Int64 => "int64_t",
            Self::UInt8 => "uint8_t",
            Self::UInt16 => "uint16_t",
            Self::UInt32 => "uint32_t",
            Self::UInt64 => "uint64_t",
            Self::Float16 => "half",
            Self::Float32 => "float",
            Self::Float64 => "double",
            Self::Bool => "bool",
            Self::Vector2 => "__m64",
            Self::Vector4 => "__m128",
            Self::Vector4Int => "__m128i",
            Self::Vector4Dbl => "__m128d",
            Self::StringPtr => "String *",
            Self::CharPtr => "char *",
            Self::Int8Ptr => "int8_t *",
            Self::UInt8Ptr => "uint8_t *",
            Self::Int16Ptr => "int16_t *",
            Self::UInt16Ptr => "uint16_t *",
            Self::Int32Ptr => "int32_t *",
            Self::UInt32Ptr => "uint32_t *",
            Self::Int64Ptr => "int64_t *",
            Self::UInt64Ptr => "uint64_t *",
            Self::Float32Ptr => "float *",
            Self::Float64Ptr => "double *",
            Self::BoolPtr => "bool *",
            Self::Vector2Ptr => "__m64 *",
            Self::Vector4Ptr => "__m128 *",
            Self::Vector4IntPtr => "__m128i *",
            Self::Vector4DblPtr => "__m128d *",
            Self::VoidPtr => "void *",
        }
    }

    /// Resolve the kind of an intrinsic integer from its width and signedness.
    ///
    /// Only evaluated in constant context by the capture layer, so an unsupported width is a
    /// build failure rather than a runtime one.
    ///
    /// ## Arguments
    /// * `width`  - Size of the integer in bytes (1, 2, 4 or 8)
    /// * `signed` - Whether the integer type is signed
    #[must_use]
    pub const fn integer(width: usize, signed: bool) -> Self {
        match (width, signed) {
            (1, true) => Self::Int8,
            (2, true) => Self::Int16,
            (4, true) => Self::Int32,
            (8, true) => Self::Int64,
            (1, false) => Self::UInt8,
            (2, false) => Self::UInt16,
            (4, false) => Self::UInt32,
            (8, false) => Self::UInt64,
            _ => panic!("integer width has no argument kind"),
        }
    }

    /// Kind of a pointer to data of this kind.
    ///
    /// Resolution is one level deep: pointees without a dedicated pointer kind (half floats and
    /// pointers themselves) resolve to [`ArgumentKind::VoidPtr`].
    #[must_use]
    pub const fn pointer_to(self) -> Self {
        match self {
            Self::Int8 => Self::Int8Ptr,
            Self::Int16 => Self::Int16Ptr,
            Self::Int32 => Self::Int32Ptr,
            Self::Int64 => Self::Int64Ptr,
            Self::UInt8 => Self::UInt8Ptr,
            Self::UInt16 => Self::UInt16Ptr,
            Self::UInt32 => Self::UInt32Ptr,
            Self::UInt64 => Self::UInt64Ptr,
            Self::Float32 => Self::Float32Ptr,
            Self::Float64 => Self::Float64Ptr,
            Self::Bool => Self::BoolPtr,
            Self::Vector2 => Self::Vector2Ptr,
            Self::Vector4 => Self::Vector4Ptr,
            Self::Vector4Int => Self::Vector4IntPtr,
            Self::Vector4Dbl => Self::Vector4DblPtr,
            Self::Float16
            | Self::StringPtr
            | Self::CharPtr
            | Self::Int8Ptr
            | Self::UInt8Ptr
            | Self::Int16Ptr
            | Self::UInt16Ptr
            | Self::Int32Ptr
            | Self::UInt32Ptr
            | Self::Int64Ptr
            | Self::UInt64Ptr
            | Self::Float32Ptr
            | Self::Float64Ptr
            | Self::BoolPtr
            | Self::Vector2Ptr
            | Self::Vector4Ptr
            | Self::Vector4IntPtr
            | Self::Vector4DblPtr
            | Self::VoidPtr => Self::VoidPtr,
        }
    }

    /// Every classification of this kind folded into a single mask
    #[must_use]
    pub fn class(self) -> ArgumentClass {
        let mut class = ArgumentClass::empty();
        class.set(ArgumentClass::NUMERIC, self.is_numeric());
        class.set(ArgumentClass::INTEGER, self.is_integer());
        class.set(ArgumentClass::SIGNED, self.is_signed());
        class.set(ArgumentClass::UNSIGNED, self.is_unsigned());
        class.set(ArgumentClass::BOOLEAN, self.is_boolean());
        class.set(ArgumentClass::REAL, self.is_real());
        class.set(ArgumentClass::CHARACTER, self.is_character());
        class.set(ArgumentClass::TEXT_POINTER, self.is_text_pointer());
        class.set(ArgumentClass::POINTER, self.is_pointer());
        class.set(ArgumentClass::WIDE_64, self.is_64bit());
        class.set(ArgumentClass::SIMD, self.is_simd());
        class.set(ArgumentClass::SIMD_POINTER, self.is_simd_pointer());
        class
    }
}

impl TryFrom<u8> for ArgumentKind {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        ArgumentKind::from_repr(value).ok_or(Error::InvalidKind(value))
    }
}

impl From<ArgumentKind> for u8 {
    fn from(kind: ArgumentKind) -> Self {
        kind as u8
    }
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    /// Classification mask of an [`ArgumentKind`], one bit per predicate.
    ///
    /// A consumer declares which classes a conversion accepts and tests an argument against that
    /// mask with [`crate::TypedArgument::matches`].
    pub struct ArgumentClass : u16 {
        /// Integers, reals and booleans
        const NUMERIC = 0x0001;
        /// Integers of any width and sign
        const INTEGER = 0x0002;
        /// Signed integers
        const SIGNED = 0x0004;
        /// Unsigned integers
        const UNSIGNED = 0x0008;
        /// Booleans and pointers to booleans
        const BOOLEAN = 0x0010;
        /// Floating point values
        const REAL = 0x0020;
        /// 8, 16 and 32-bit integers
        const CHARACTER = 0x0040;
        /// Pointers readable as text
        const TEXT_POINTER = 0x0080;
        /// Any pointer
        const POINTER = 0x0100;
        /// 8 byte wide intrinsic data
        const WIDE_64 = 0x0200;
        /// Vector values
        const SIMD = 0x0400;
        /// Pointers to vectors
        const SIMD_POINTER = 0x0800;
    }
}
