//! The [`TypedArgument`] entity and its numeric, boolean and pointer accessors.
//!
//! All accessors are total. An accessor that does not apply to the captured kind returns a fixed
//! default (`0`, `0.0`, `false`, a null pointer or [`INVALID_CHAR`]) that a formatting engine
//! reads as "does not apply", never as an error. The strict `TryFrom` conversions at the end of
//! this module are the only place a mismatch becomes an [`Error`].
//!
//! # Unsigned conversions
//!
//! [`TypedArgument::get_u32`] and [`TypedArgument::get_u64`] return the *magnitude* of a negative
//! signed or floating value, not its two's complement bit pattern. Formatting engines rely on this
//! to print a sign followed by the digits of the magnitude.
//!
//! ```rust
//! use argtype::TypedArgument;
//!
//! let argument = TypedArgument::from(-5i8);
//! assert!(argument.is_negative());
//! assert_eq!(argument.get_i32(), -5);
//! assert_eq!(argument.get_u32(), 5);
//! ```

use std::{ffi::c_void, fmt, ptr};

use crate::{
    argument::{
        data::ArgumentData,
        kind::{ArgumentClass, ArgumentKind},
    },
    Error, Result,
};

/// Returned by [`TypedArgument::get_char`] for kinds that are not numeric.
///
/// Never zero, so a mismatched conversion shows up in formatted output instead of truncating it.
pub const INVALID_CHAR: u8 = b'~';

/// A captured call site value together with the kind that names its representation.
///
/// Built with `From` from any supported source type (see [`crate::Intrinsic`] and
/// [`TypedArgument::from_half_bits`]). Immutable once built, never owns what a pointer kind
/// refers to, and `Copy`, so a batch of arguments is a plain array on the stack.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TypedArgument<'a> {
    kind: ArgumentKind,
    data: ArgumentData<'a>,
}

impl<'a> TypedArgument<'a> {
    pub(crate) const fn new(data: ArgumentData<'a>) -> Self {
        TypedArgument {
            kind: data.kind(),
            data,
        }
    }

    /// The kind of the captured value
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> ArgumentKind {
        self.kind
    }

    /// The captured payload as a typed view
    #[must_use]
    #[inline]
    pub const fn data(&self) -> &ArgumentData<'a> {
        &self.data
    }

    /// Tests the kind against a classification mask.
    ///
    /// Returns `true` if the kind belongs to any class in `accepted`, which lets a formatting
    /// engine keep one mask per conversion instead of chaining predicates.
    ///
    /// ## Arguments
    /// * `accepted` - Classes the caller accepts
    #[must_use]
    pub fn matches(&self, accepted: ArgumentClass) -> bool {
        self.kind.class().intersects(accepted)
    }

    /// See [`ArgumentKind::is_numeric`]
    #[must_use]
    #[inline]
    pub const fn is_numeric(&self) -> bool {
        self.kind.is_numeric()
    }

    /// See [`ArgumentKind::is_integer`]
    #[must_use]
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.kind.is_integer()
    }

    /// See [`ArgumentKind::is_signed`]
    #[must_use]
    #[inline]
    pub const fn is_signed(&self) -> bool {
        self.kind.is_signed()
    }

    /// See [`ArgumentKind::is_unsigned`]
    #[must_use]
    #[inline]
    pub const fn is_unsigned(&self) -> bool {
        self.kind.is_unsigned()
    }

    /// See [`ArgumentKind::is_boolean`]
    #[must_use]
    #[inline]
    pub const fn is_boolean(&self) -> bool {
        self.kind.is_boolean()
    }

    /// See [`ArgumentKind::is_real`]
    #[must_use]
    #[inline]
    pub const fn is_real(&self) -> bool {
        self.kind.is_real()
    }

    /// See [`ArgumentKind::is_character`]
    #[must_use]
    #[inline]
    pub const fn is_character(&self) -> bool {
        self.kind.is_character()
    }

    /// See [`ArgumentKind::is_text_pointer`]
    #[must_use]
    #[inline]
    pub const fn is_text_pointer(&self) -> bool {
        self.kind.is_text_pointer()
    }

    /// See [`ArgumentKind::is_pointer`]
    #[must_use]
    #[inline]
    pub const fn is_pointer(&self) -> bool {
        self.kind.is_pointer()
    }

    /// See [`ArgumentKind::is_64bit`]
    #[must_use]
    #[inline]
    pub const fn is_64bit(&self) -> bool {
        self.kind.is_64bit()
    }

    /// See [`ArgumentKind::is_simd`]
    #[must_use]
    #[inline]
    pub const fn is_simd(&self) -> bool {
        self.kind.is_simd()
    }

    /// See [`ArgumentKind::is_simd_pointer`]
    #[must_use]
    #[inline]
    pub const fn is_simd_pointer(&self) -> bool {
        self.kind.is_simd_pointer()
    }

    /// Whether the value is below zero.
    ///
    /// Half floats test the sign bit, so negative zero reports `true`. Unsigned, boolean, pointer
    /// and vector kinds are never negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self.data {
            ArgumentData::Int8(value) => value < 0,
            ArgumentData::Int16(value) => value < 0,
            ArgumentData::Int32(value) => value < 0,
            ArgumentData::Int64(value) => value < 0,
            ArgumentData::Float16(value) => value.is_sign_negative(),
            ArgumentData::Float32(value) => value < 0.0,
            ArgumentData::Float64(value) => value < 0.0,
            _ => false,
        }
    }

    /// Whether the value is zero.
    ///
    /// Both signed zeros of a half float count as zero. A boolean is zero when it is `false`.
    /// Pointer and vector kinds are never zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self.data {
            ArgumentData::Int8(value) => value == 0,
            ArgumentData::Int16(value) => value == 0,
            ArgumentData::Int32(value) => value == 0,
            ArgumentData::Int64(value) => value == 0,
            ArgumentData::UInt8(value) => value == 0,
            ArgumentData::UInt16(value) => value == 0,
            ArgumentData::UInt32(value) => value == 0,
            ArgumentData::UInt64(value) => value == 0,
            ArgumentData::Float16(value) => value.is_zero(),
            ArgumentData::Float32(value) => value == 0.0,
            ArgumentData::Float64(value) => value == 0.0,
            ArgumentData::Bool(value) => !value,
            _ => false,
        }
    }

    /// The value as an `i32`.
    ///
    /// Integers wrap to 32 bits, floats truncate toward zero (saturating, NaN is 0) and half
    /// floats are unpacked first. Non numeric kinds return 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn get_i32(&self) -> i32 {
        match self.data {
            ArgumentData::Int8(value) => i32::from(value),
            ArgumentData::Int16(value) => i32::from(value),
            ArgumentData::Int32(value) => value,
            ArgumentData::Int64(value) => value as i32,
            ArgumentData::UInt8(value) => i32::from(value),
            ArgumentData::UInt16(value) => i32::from(value),
            ArgumentData::UInt32(value) => value as i32,
            ArgumentData::UInt64(value) => value as i32,
            ArgumentData::Float16(value) => value.to_f32() as i32,
            ArgumentData::Float32(value) => value as i32,
            ArgumentData::Float64(value) => value as i32,
            ArgumentData::Bool(value) => i32::from(value),
            _ => 0,
        }
    }

    /// The value as an `i64`, with the rules of [`TypedArgument::get_i32`] at 64-bit width
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn get_i64(&self) -> i64 {
        match self.data {
            ArgumentData::Int8(value) => i64::from(value),
            ArgumentData::Int16(value) => i64::from(value),
            ArgumentData::Int32(value) => i64::from(value),
            ArgumentData::Int64(value) => value,
            ArgumentData::UInt8(value) => i64::from(value),
            ArgumentData::UInt16(value) => i64::from(value),
            ArgumentData::UInt32(value) => i64::from(value),
            ArgumentData::UInt64(value) => value as i64,
            ArgumentData::Float16(value) => value.to_f32() as i64,
            ArgumentData::Float32(value) => value as i64,
            ArgumentData::Float64(value) => value as i64,
            ArgumentData::Bool(value) => i64::from(value),
            _ => 0,
        }
    }

    /// The magnitude of the value as a `u32`.
    ///
    /// Unsigned integers wrap to 32 bits. Signed integers and floats return their absolute value,
    /// so `-5` yields `5`. The magnitude of `i64::MIN` is 2^63, which truncates to 0. Non numeric
    /// kinds return 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn get_u32(&self) -> u32 {
        match self.data {
            ArgumentData::UInt8(value) => u32::from(value),
            ArgumentData::UInt16(value) => u32::from(value),
            ArgumentData::UInt32(value) => value,
            ArgumentData::UInt64(value) => value as u32,
            ArgumentData::Int8(value) => u32::from(value.unsigned_abs()),
            ArgumentData::Int16(value) => u32::from(value.unsigned_abs()),
            ArgumentData::Int32(value) => value.unsigned_abs(),
            ArgumentData::Int64(value) => value.unsigned_abs() as u32,
            ArgumentData::Float16(value) => value.abs().to_f32() as u32,
            ArgumentData::Float32(value) => value.abs() as u32,
            ArgumentData::Float64(value) => value.abs() as u32,
            ArgumentData::Bool(value) => u32::from(value),
            _ => 0,
        }
    }

    /// The magnitude of the value as a `u64`, with the rules of [`TypedArgument::get_u32`]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn get_u64(&self) -> u64 {
        match self.data {
            ArgumentData::UInt8(value) => u64::from(value),
            ArgumentData::UInt16(value) => u64::from(value),
            ArgumentData::UInt32(value) => u64::from(value),
            ArgumentData::UInt64(value) => value,
            ArgumentData::Int8(value) => u64::from(value.unsigned_abs()),
            ArgumentData::Int16(value) => u64::from(value.unsigned_abs()),
            ArgumentData::Int32(value) => u64::from(value.unsigned_abs()),
            ArgumentData::Int64(value) => value.unsigned_abs(),
            ArgumentData::Float16(value) => value.abs().to_f32() as u64,
            ArgumentData::Float32(value) => value.abs() as u64,
            ArgumentData::Float64(value) => value.abs() as u64,
            ArgumentData::Bool(value) => u64::from(value),
            _ => 0,
        }
    }

    /// The value as an `f64`. Numeric kinds widen, booleans are 0 or 1, everything else is 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn get_f64(&self) -> f64 {
        match self.data {
            ArgumentData::Int8(value) => f64::from(value),
            ArgumentData::Int16(value) => f64::from(value),
            ArgumentData::Int32(value) => f64::from(value),
            ArgumentData::Int64(value) => value as f64,
            ArgumentData::UInt8(value) => f64::from(value),
            ArgumentData::UInt16(value) => f64::from(value),
            ArgumentData::UInt32(value) => f64::from(value),
            ArgumentData::UInt64(value) => value as f64,
            ArgumentData::Float16(value) => f64::from(value),
            ArgumentData::Float32(value) => f64::from(value),
            ArgumentData::Float64(value) => value,
            ArgumentData::Bool(value) => f64::from(u8::from(value)),
            _ => 0.0,
        }
    }

    /// The value narrowed to a single byte.
    ///
    /// Numeric kinds truncate like [`TypedArgument::get_i32`]. Every other kind returns
    /// [`INVALID_CHAR`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn get_char(&self) -> u8 {
        if self.kind.is_numeric() {
            self.get_i32() as u8
        } else {
            INVALID_CHAR
        }
    }

    /// The stored flag for booleans, otherwise `!is_zero()`.
    ///
    /// Note that pointer and vector kinds are never zero and therefore report `true`.
    #[must_use]
    pub fn get_bool(&self) -> bool {
        match self.data {
            ArgumentData::Bool(value) => value,
            _ => !self.is_zero(),
        }
    }

    /// The address held by a pointer kind, null for every other kind.
    ///
    /// A borrowed `String` yields the address of the `String` itself.
    #[must_use]
    pub fn get_pointer(&self) -> *const c_void {
        if self.kind.is_pointer() {
            self.data.address()
        } else {
            ptr::null()
        }
    }

    /// Address of the active payload member.
    ///
    /// Value kinds yield the address of the value stored inside this argument, valid for as long
    /// as the argument is borrowed. Pointer kinds yield the address they refer to.
    #[must_use]
    pub fn get_data_address(&self) -> *const c_void {
        self.data.address()
    }

    /// Size in bytes of the intrinsic data, see [`ArgumentKind::byte_width`]
    #[must_use]
    #[inline]
    pub const fn get_data_length_in_bytes(&self) -> usize {
        self.kind.byte_width()
    }
}

impl<'a> From<ArgumentData<'a>> for TypedArgument<'a> {
    fn from(data: ArgumentData<'a>) -> Self {
        TypedArgument::new(data)
    }
}

impl fmt::Display for TypedArgument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind.type_name();
        match self.data {
            ArgumentData::Int8(value) => write!(f, "{name}({value})"),
            ArgumentData::Int16(value) => write!(f, "{name}({value})"),
            ArgumentData::Int32(value) => write!(f, "{name}({value})"),
            ArgumentData::Int64(value) => write!(f, "{name}({value})"),
            ArgumentData::UInt8(value) => write!(f, "{name}({value})"),
            ArgumentData::UInt16(value) => write!(f, "{name}({value})"),
            ArgumentData::UInt32(value) => write!(f, "{name}({value})"),
            ArgumentData::UInt64(value) => write!(f, "{name}({value})"),
            ArgumentData::Float16(value) => write!(f, "{name}({value})"),
            ArgumentData::Float32(value) => write!(f, "{name}({value})"),
            ArgumentData::Float64(value) => write!(f, "{name}({value})"),
            ArgumentData::Bool(value) => write!(f, "{name}({value})"),
            ArgumentData::Vector2(value) => write!(f, "{name}({:?})", value.0),
            ArgumentData::Vector4(value) => write!(f, "{name}({:?})", value.0),
            ArgumentData::Vector4Int(value) => write!(f, "{name}({:?})", value.0),
            ArgumentData::Vector4Dbl(value) => write!(f, "{name}({:?})", value.0),
            _ => {
                let address = self.data.address();
                if address.is_null() {
                    write!(f, "{name}(null)")
                } else {
                    write!(f, "{name}({address:p})")
                }
            }
        }
    }
}

fn refuse<T>(argument: &TypedArgument<'_>, to: &'static str) -> Result<T> {
    Err(Error::ConversionInvalid {
        from: argument.kind(),
        to,
    })
}

/// Strict conversions for numeric kinds, using the matching total accessor
macro_rules! strict_numeric {
    ($($ty:ty => $accessor:ident;)*) => {
        $(
            impl TryFrom<&TypedArgument<'_>> for $ty {
                type Error = Error;

                fn try_from(argument: &TypedArgument<'_>) -> Result<Self> {
                    if argument.is_numeric() {
                        Ok(argument.$accessor())
                    } else {
                        refuse(argument, stringify!($ty))
                    }
                }
            }
        )*
    };
}

strict_numeric! {
    i32 => get_i32;
    i64 => get_i64;
    u32 => get_u32;
    u64 => get_u64;
    f64 => get_f64;
    bool => get_bool;
}

impl<'a> TryFrom<&TypedArgument<'a>> for &'a [u8] {
    type Error = Error;

    fn try_from(argument: &TypedArgument<'a>) -> Result<Self> {
        match argument.get_text() {
            Some(text) => Ok(text),
            None => refuse(argument, "&[u8]"),
        }
    }
}
