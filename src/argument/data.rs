//! Payload storage of a typed argument.
//!
//! [`ArgumentData`] is a proper sum type: each variant owns exactly the representation its
//! [`ArgumentKind`] names, so there is never an inactive member to read by mistake. Pointer
//! variants are borrows. They never own, allocate or free what they point at, and the lifetime
//! `'a` ties the payload to the data it refers to.
//!
//! Pointers to intrinsics are held as slices. A capture of a single `&T` becomes a one element
//! slice, while text accessors may read as far as a borrowed slice reaches, but never beyond it.

use std::{ffi::c_void, mem::size_of_val, ptr};

use crate::argument::{
    half::Half,
    kind::ArgumentKind,
    simd::{Vector2, Vector4, Vector4Dbl, Vector4Int},
};

/// The single active representation of a [`crate::TypedArgument`].
///
/// `None` in a pointer variant is a null pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArgumentData<'a> {
    /// Signed 1 byte integer
    Int8(i8),
    /// Signed 2 byte integer
    Int16(i16),
    /// Signed 4 byte integer
    Int32(i32),
    /// Signed 8 byte integer
    Int64(i64),
    /// Unsigned 1 byte integer
    UInt8(u8),
    /// Unsigned 2 byte integer
    UInt16(u16),
    /// Unsigned 4 byte integer
    UInt32(u32),
    /// Unsigned 8 byte integer
    UInt64(u64),
    /// binary16 float bits
    Float16(Half),
    /// Single precision float
    Float32(f32),
    /// Double precision float
    Float64(f64),
    /// Boolean
    Bool(bool),
    /// 64-bit short vector
    Vector2(Vector2),
    /// 128-bit vector of floats
    Vector4(Vector4),
    /// 128-bit vector of integers
    Vector4Int(Vector4Int),
    /// 128-bit vector of doubles
    Vector4Dbl(Vector4Dbl),
    /// Borrowed owned string
    StringPtr(Option<&'a String>),
    /// Narrow character string, possibly zero terminated within the slice
    CharPtr(Option<&'a [u8]>),
    /// Signed bytes
    Int8Ptr(Option<&'a [i8]>),
    /// Unsigned bytes
    UInt8Ptr(Option<&'a [u8]>),
    /// `i16` data
    Int16Ptr(Option<&'a [i16]>),
    /// `u16` data, UTF-16 code units for text length queries
    UInt16Ptr(Option<&'a [u16]>),
    /// `i32` data
    Int32Ptr(Option<&'a [i32]>),
    /// `u32` data
    UInt32Ptr(Option<&'a [u32]>),
    /// `i64` data
    Int64Ptr(Option<&'a [i64]>),
    /// `u64` data
    UInt64Ptr(Option<&'a [u64]>),
    /// `f32` data
    Float32Ptr(Option<&'a [f32]>),
    /// `f64` data
    Float64Ptr(Option<&'a [f64]>),
    /// `bool` data
    BoolPtr(Option<&'a [bool]>),
    /// Short vectors
    Vector2Ptr(Option<&'a [Vector2]>),
    /// Vectors of floats
    Vector4Ptr(Option<&'a [Vector4]>),
    /// Vectors of integers
    Vector4IntPtr(Option<&'a [Vector4Int]>),
    /// Vectors of doubles
    Vector4DblPtr(Option<&'a [Vector4Dbl]>),
    /// Untyped address. Never dereferenced.
    VoidPtr(*const c_void),
}

// SAFETY: the only raw pointer is `VoidPtr`, which is never dereferenced, and every other variant
// is a plain value or a shared borrow of `Sync` data
unsafe impl Send for ArgumentData<'_> {}
// SAFETY: see `Send`, the payload is immutable after construction
unsafe impl Sync for ArgumentData<'_> {}

fn address_of<T>(slice: Option<&[T]>) -> *const c_void {
    slice.map_or(ptr::null(), |slice| slice.as_ptr().cast())
}

fn address<T>(value: &T) -> *const c_void {
    (value as *const T).cast()
}

impl ArgumentData<'_> {
    /// The kind naming this representation
    #[must_use]
    pub const fn kind(&self) -> ArgumentKind {
        match self {
            ArgumentData::Int8(_) => ArgumentKind::Int8,
            ArgumentData::Int16(_) => ArgumentKind::Int16,
            ArgumentData::Int32(_) => ArgumentKind::Int32,
            ArgumentData::Int64(_) => ArgumentKind::Int64,
            ArgumentData::UInt8(_) => ArgumentKind::UInt8,
            ArgumentData::UInt16(_) => ArgumentKind::UInt16,
            ArgumentData::UInt32(_) => ArgumentKind::UInt32,
            ArgumentData::UInt64(_) => ArgumentKind::UInt64,
            ArgumentData::Float16(_) => ArgumentKind::Float16,
            ArgumentData::Float32(_) => ArgumentKind::Float32,
            ArgumentData::Float64(_) => ArgumentKind::Float64,
            ArgumentData::Bool(_) => ArgumentKind::Bool,
            ArgumentData::Vector2(_) => ArgumentKind::Vector2,
            ArgumentData::Vector4(_) => ArgumentKind::Vector4,
            ArgumentData::Vector4Int(_) => ArgumentKind::Vector4Int,
            ArgumentData::Vector4Dbl(_) => ArgumentKind::Vector4Dbl,
            ArgumentData::StringPtr(_) => ArgumentKind::StringPtr,
            ArgumentData::CharPtr(_) => ArgumentKind::CharPtr,
            ArgumentData::Int8Ptr(_) => ArgumentKind::Int8Ptr,
            ArgumentData::UInt8Ptr(_) => ArgumentKind::UInt8Ptr,
            ArgumentData::Int16Ptr(_) => ArgumentKind::Int16Ptr,
            ArgumentData::UInt16Ptr(_) => ArgumentKind::UInt16Ptr,
            ArgumentData::Int32Ptr(_) => ArgumentKind::Int32Ptr,
            ArgumentData::UInt32Ptr(_) => ArgumentKind::UInt32Ptr,
            ArgumentData::Int64Ptr(_) => ArgumentKind::Int64Ptr,
            ArgumentData::UInt64Ptr(_) => ArgumentKind::UInt64Ptr,
            ArgumentData::Float32Ptr(_) => ArgumentKind::Float32Ptr,
            ArgumentData::Float64Ptr(_) => ArgumentKind::Float64Ptr,
            ArgumentData::BoolPtr(_) => ArgumentKind::BoolPtr,
            ArgumentData::Vector2Ptr(_) => ArgumentKind::Vector2Ptr,
            ArgumentData::Vector4Ptr(_) => ArgumentKind::Vector4Ptr,
            ArgumentData::Vector4IntPtr(_) => ArgumentKind::Vector4IntPtr,
            ArgumentData::Vector4DblPtr(_) => ArgumentKind::Vector4DblPtr,
            ArgumentData::VoidPtr(_) => ArgumentKind::VoidPtr,
        }
    }

    /// Address of the active representation.
    ///
    /// Value variants yield the address of the stored member itself, pointer variants yield the
    /// address they hold (null for `None`).
    #[must_use]
    pub fn address(&self) -> *const c_void {
        match self {
            ArgumentData::Int8(value) => address(value),
            ArgumentData::Int16(value) => address(value),
            ArgumentData::Int32(value) => address(value),
            ArgumentData::Int64(value) => address(value),
            ArgumentData::UInt8(value) => address(value),
            ArgumentData::UInt16(value) => address(value),
            ArgumentData::UInt32(value) => address(value),
            ArgumentData::UInt64(value) => address(value),
            ArgumentData::Float16(value) => address(value),
            ArgumentData::Float32(value) => address(value),
            ArgumentData::Float64(value) => address(value),
            ArgumentData::Bool(value) => address(value),
            ArgumentData::Vector2(value) => address(value),
            ArgumentData::Vector4(value) => address(value),
            ArgumentData::Vector4Int(value) => address(value),
            ArgumentData::Vector4Dbl(value) => address(value),
            ArgumentData::StringPtr(value) => value.map_or(ptr::null(), address),
            ArgumentData::CharPtr(value) => address_of(*value),
            ArgumentData::Int8Ptr(value) => address_of(*value),
            ArgumentData::UInt8Ptr(value) => address_of(*value),
            ArgumentData::Int16Ptr(value) => address_of(*value),
            ArgumentData::UInt16Ptr(value) => address_of(*value),
            ArgumentData::Int32Ptr(value) => address_of(*value),
            ArgumentData::UInt32Ptr(value) => address_of(*value),
            ArgumentData::Int64Ptr(value) => address_of(*value),
            ArgumentData::UInt64Ptr(value) => address_of(*value),
            ArgumentData::Float32Ptr(value) => address_of(*value),
            ArgumentData::Float64Ptr(value) => address_of(*value),
            ArgumentData::BoolPtr(value) => address_of(*value),
            ArgumentData::Vector2Ptr(value) => address_of(*value),
            ArgumentData::Vector4Ptr(value) => address_of(*value),
            ArgumentData::Vector4IntPtr(value) => address_of(*value),
            ArgumentData::Vector4DblPtr(value) => address_of(*value),
            ArgumentData::VoidPtr(value) => *value,
        }
    }

    /// Bytes occupied by the stored member.
    ///
    /// Value variants report the size of the value, pointer variants the width of the data
    /// pointer they carry. Always equal to [`ArgumentKind::byte_width`] of [`Self::kind`].
    #[must_use]
    pub fn stored_size(&self) -> usize {
        match self {
            ArgumentData::Int8(value) => size_of_val(value),
            ArgumentData::Int16(value) => size_of_val(value),
            ArgumentData::Int32(value) => size_of_val(value),
            ArgumentData::Int64(value) => size_of_val(value),
            ArgumentData::UInt8(value) => size_of_val(value),
            ArgumentData::UInt16(value) => size_of_val(value),
            ArgumentData::UInt32(value) => size_of_val(value),
            ArgumentData::UInt64(value) => size_of_val(value),
            ArgumentData::Float16(value) => size_of_val(value),
            ArgumentData::Float32(value) => size_of_val(value),
            ArgumentData::Float64(value) => size_of_val(value),
            ArgumentData::Bool(value) => size_of_val(value),
            ArgumentData::Vector2(value) => size_of_val(value),
            ArgumentData::Vector4(value) => size_of_val(value),
            ArgumentData::Vector4Int(value) => size_of_val(value),
            ArgumentData::Vector4Dbl(value) => size_of_val(value),
            ArgumentData::StringPtr(_)
            | ArgumentData::CharPtr(_)
            | ArgumentData::Int8Ptr(_)
            | ArgumentData::UInt8Ptr(_)
            | ArgumentData::Int16Ptr(_)
            | ArgumentData::UInt16Ptr(_)
            | ArgumentData::Int32Ptr(_)
            | ArgumentData::UInt32Ptr(_)
            | ArgumentData::Int64Ptr(_)
            | ArgumentData::UInt64Ptr(_)
            | ArgumentData::Float32Ptr(_)
            | ArgumentData::Float64Ptr(_)
            | ArgumentData::BoolPtr(_)
            | ArgumentData::Vector2Ptr(_)
            | ArgumentData::Vector4Ptr(_)
            | ArgumentData::Vector4IntPtr(_)
            | ArgumentData::Vector4DblPtr(_)
            | ArgumentData::VoidPtr(_) => size_of_val(&self.address()),
        }
    }
}
