//! Capture of call site values into [`TypedArgument`].
//!
//! Every supported source type has exactly one `From` conversion, so the argument kind is
//! resolved at compile time and an unsupported type simply does not convert. No conversion
//! allocates or can fail.
//!
//! Resolution follows a fixed order:
//! - intrinsics resolve by byte width, then integer, float or boolean, then signedness
//!   (see [`Intrinsic`])
//! - references and slices resolve their pointee first and then take the matching pointer kind,
//!   one level deep
//! - raw pointers, pointers to pointers and pointers to half floats are untyped addresses
//! - half floats and the 64-bit short vector have no native Rust type and need an explicit
//!   [`Half`] or [`Vector2`] at the call site
//! - `String`, `str` and `CStr` have dedicated text kinds

use std::{
    ffi::{c_void, CStr, CString},
    mem::size_of,
    slice,
};

use crate::argument::{
    data::ArgumentData,
    half::Half,
    kind::ArgumentKind,
    simd::{Vector2, Vector4, Vector4Dbl, Vector4Int},
    typed::TypedArgument,
};

/// A value type with a dedicated argument kind.
///
/// Implemented for every Rust type that can be captured by value. The associated constants expose
/// the compile time resolution as data, so a consumer can reason about the kind a type will
/// produce without building an argument.
///
/// ```rust
/// use argtype::{ArgumentKind, Intrinsic};
///
/// assert_eq!(<u16 as Intrinsic>::KIND, ArgumentKind::UInt16);
/// assert_eq!(<u16 as Intrinsic>::POINTER_KIND, ArgumentKind::UInt16Ptr);
/// assert_eq!(<char as Intrinsic>::KIND, ArgumentKind::UInt32);
/// ```
pub trait Intrinsic: Copy + sealed::Sealed {
    /// Kind of a captured value of this type
    const KIND: ArgumentKind;
    /// Kind of a captured reference or slice of this type
    const POINTER_KIND: ArgumentKind = Self::KIND.pointer_to();
}

mod sealed {
    pub trait Sealed {}
}

/// Reinterpret a slice of one plain type as a slice of another of identical layout.
///
/// # Safety
///
/// `T` and `U` must have the same size and alignment, and every bit pattern of `T` must be a valid
/// `U`.
unsafe fn same_layout<T, U>(values: &[T]) -> &[U] {
    slice::from_raw_parts(values.as_ptr().cast::<U>(), values.len())
}

const fn integer_kind<T>(signed: bool) -> ArgumentKind {
    ArgumentKind::integer(size_of::<T>(), signed)
}

/// `From` conversions for a type with its own value variant and pointer variant.
macro_rules! capture {
    ($($ty:ty => $kind:expr, $value:ident, $pointer:ident;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Intrinsic for $ty {
                const KIND: ArgumentKind = $kind;
            }

            const _: () = assert!(
                <$ty as Intrinsic>::KIND as u8 == ArgumentKind::$value as u8
                    && <$ty as Intrinsic>::POINTER_KIND as u8 == ArgumentKind::$pointer as u8
            );

            impl From<$ty> for TypedArgument<'_> {
                fn from(value: $ty) -> Self {
                    TypedArgument::new(ArgumentData::$value(value))
                }
            }

            impl<'a> From<&'a $ty> for TypedArgument<'a> {
                fn from(value: &'a $ty) -> Self {
                    TypedArgument::new(ArgumentData::$pointer(Some(slice::from_ref(value))))
                }
            }

            impl<'a> From<&'a [$ty]> for TypedArgument<'a> {
                fn from(values: &'a [$ty]) -> Self {
                    TypedArgument::new(ArgumentData::$pointer(Some(values)))
                }
            }

            impl<'a, const N: usize> From<&'a [$ty; N]> for TypedArgument<'a> {
                fn from(values: &'a [$ty; N]) -> Self {
                    TypedArgument::new(ArgumentData::$pointer(Some(values)))
                }
            }

            impl<'a> From<Option<&'a [$ty]>> for TypedArgument<'a> {
                fn from(values: Option<&'a [$ty]>) -> Self {
                    TypedArgument::new(ArgumentData::$pointer(values))
                }
            }
        )*
    };
}

capture! {
    i8 => integer_kind::<i8>(true), Int8, Int8Ptr;
    i16 => integer_kind::<i16>(true), Int16, Int16Ptr;
    i32 => integer_kind::<i32>(true), Int32, Int32Ptr;
    i64 => integer_kind::<i64>(true), Int64, Int64Ptr;
    u8 => integer_kind::<u8>(false), UInt8, UInt8Ptr;
    u16 => integer_kind::<u16>(false), UInt16, UInt16Ptr;
    u32 => integer_kind::<u32>(false), UInt32, UInt32Ptr;
    u64 => integer_kind::<u64>(false), UInt64, UInt64Ptr;
    f32 => ArgumentKind::Float32, Float32, Float32Ptr;
    f64 => ArgumentKind::Float64, Float64, Float64Ptr;
    bool => ArgumentKind::Bool, Bool, BoolPtr;
    Vector2 => ArgumentKind::Vector2, Vector2, Vector2Ptr;
    Vector4 => ArgumentKind::Vector4, Vector4, Vector4Ptr;
    Vector4Int => ArgumentKind::Vector4Int, Vector4Int, Vector4IntPtr;
    Vector4Dbl => ArgumentKind::Vector4Dbl, Vector4Dbl, Vector4DblPtr;
}

/// `From` conversions for a type captured as another type of identical layout.
macro_rules! capture_as {
    ($($ty:ty => $as:ty, $signed:expr;)*) => {
        $(
            const _: () = assert!(
                size_of::<$ty>() == size_of::<$as>()
                    && std::mem::align_of::<$ty>() == std::mem::align_of::<$as>()
            );

            impl sealed::Sealed for $ty {}

            impl Intrinsic for $ty {
                const KIND: ArgumentKind = integer_kind::<$ty>($signed);
            }

            impl From<$ty> for TypedArgument<'_> {
                #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                fn from(value: $ty) -> Self {
                    TypedArgument::from(value as $as)
                }
            }

            impl<'a> From<&'a $ty> for TypedArgument<'a> {
                fn from(value: &'a $ty) -> Self {
                    TypedArgument::from(slice::from_ref(value))
                }
            }

            impl<'a> From<&'a [$ty]> for TypedArgument<'a> {
                fn from(values: &'a [$ty]) -> Self {
                    // SAFETY: layout equality is asserted above and both are plain integers
                    TypedArgument::from(unsafe { same_layout::<$ty, $as>(values) })
                }
            }

            impl<'a, const N: usize> From<&'a [$ty; N]> for TypedArgument<'a> {
                fn from(values: &'a [$ty; N]) -> Self {
                    TypedArgument::from(values.as_slice())
                }
            }

            impl<'a> From<Option<&'a [$ty]>> for TypedArgument<'a> {
                fn from(values: Option<&'a [$ty]>) -> Self {
                    // SAFETY: layout equality is asserted above and both are plain integers
                    TypedArgument::from(values.map(|values| unsafe { same_layout::<$ty, $as>(values) }))
                }
            }
        )*
    };
}

#[cfg(target_pointer_width = "64")]
capture_as! {
    isize => i64, true;
    usize => u64, false;
}

#[cfg(target_pointer_width = "32")]
capture_as! {
    isize => i32, true;
    usize => u32, false;
}

// A char is a UTF-32 code point, captured as its scalar value
capture_as! {
    char => u32, false;
}

impl sealed::Sealed for Half {}

impl Intrinsic for Half {
    const KIND: ArgumentKind = ArgumentKind::Float16;
}

impl From<Half> for TypedArgument<'_> {
    fn from(value: Half) -> Self {
        TypedArgument::new(ArgumentData::Float16(value))
    }
}

impl<'a> From<&'a Half> for TypedArgument<'a> {
    fn from(value: &'a Half) -> Self {
        TypedArgument::from(value as *const Half)
    }
}

impl TypedArgument<'_> {
    /// Capture a half float from its raw binary16 bits.
    ///
    /// A bare `u16` would capture as [`ArgumentKind::UInt16`], so half floats always need this
    /// explicit override.
    ///
    /// ## Arguments
    /// * `bits` - IEEE 754 binary16 bit pattern
    #[must_use]
    pub const fn from_half_bits(bits: u16) -> Self {
        TypedArgument::new(ArgumentData::Float16(Half::from_bits(bits)))
    }
}

impl<'a> From<&'a String> for TypedArgument<'a> {
    fn from(value: &'a String) -> Self {
        TypedArgument::new(ArgumentData::StringPtr(Some(value)))
    }
}

impl<'a> From<Option<&'a String>> for TypedArgument<'a> {
    fn from(value: Option<&'a String>) -> Self {
        TypedArgument::new(ArgumentData::StringPtr(value))
    }
}

impl<'a> From<&'a str> for TypedArgument<'a> {
    fn from(value: &'a str) -> Self {
        TypedArgument::new(ArgumentData::CharPtr(Some(value.as_bytes())))
    }
}

impl<'a> From<Option<&'a str>> for TypedArgument<'a> {
    fn from(value: Option<&'a str>) -> Self {
        TypedArgument::new(ArgumentData::CharPtr(value.map(str::as_bytes)))
    }
}

impl<'a> From<&'a CStr> for TypedArgument<'a> {
    fn from(value: &'a CStr) -> Self {
        TypedArgument::new(ArgumentData::CharPtr(Some(value.to_bytes_with_nul())))
    }
}

impl<'a> From<Option<&'a CStr>> for TypedArgument<'a> {
    fn from(value: Option<&'a CStr>) -> Self {
        TypedArgument::new(ArgumentData::CharPtr(value.map(CStr::to_bytes_with_nul)))
    }
}

impl<'a> From<&'a CString> for TypedArgument<'a> {
    fn from(value: &'a CString) -> Self {
        TypedArgument::from(value.as_c_str())
    }
}

impl<T: ?Sized> From<*const T> for TypedArgument<'_> {
    fn from(value: *const T) -> Self {
        log::trace!(
            "untyped pointer {:p} captured as {}",
            value.cast::<c_void>(),
            ArgumentKind::VoidPtr
        );
        TypedArgument::new(ArgumentData::VoidPtr(value.cast()))
    }
}

impl<T: ?Sized> From<*mut T> for TypedArgument<'_> {
    fn from(value: *mut T) -> Self {
        TypedArgument::from(value.cast_const())
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod arch {
    #[cfg(target_arch = "x86")]
    use core::arch::x86::{__m128, __m128d, __m128i};
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::{__m128, __m128d, __m128i};
    use std::slice;

    use crate::argument::{
        data::ArgumentData,
        simd::{Vector4, Vector4Dbl, Vector4Int},
        typed::TypedArgument,
    };

    macro_rules! capture_intrinsic {
        ($($intrinsic:ty => $vector:ident, $pointer:ident;)*) => {
            $(
                impl From<$intrinsic> for TypedArgument<'_> {
                    fn from(value: $intrinsic) -> Self {
                        TypedArgument::new(ArgumentData::$vector($vector::from(value)))
                    }
                }

                impl<'a> From<&'a $intrinsic> for TypedArgument<'a> {
                    fn from(value: &'a $intrinsic) -> Self {
                        TypedArgument::new(ArgumentData::$pointer(Some(slice::from_ref(
                            $vector::from_intrinsic(value),
                        ))))
                    }
                }
            )*
        };
    }

    capture_intrinsic! {
        __m128 => Vector4, Vector4Ptr;
        __m128i => Vector4Int, Vector4IntPtr;
        __m128d => Vector4Dbl, Vector4DblPtr;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn intrinsics_resolve_by_width_and_sign() {
        assert_eq!(TypedArgument::from(-1i8).kind(), ArgumentKind::Int8);
        assert_eq!(TypedArgument::from(1i16).kind(), ArgumentKind::Int16);
        assert_eq!(TypedArgument::from(1i32).kind(), ArgumentKind::Int32);
        assert_eq!(TypedArgument::from(1i64).kind(), ArgumentKind::Int64);
        assert_eq!(TypedArgument::from(1u8).kind(), ArgumentKind::UInt8);
        assert_eq!(TypedArgument::from(1u16).kind(), ArgumentKind::UInt16);
        assert_eq!(TypedArgument::from(1u32).kind(), ArgumentKind::UInt32);
        assert_eq!(TypedArgument::from(1u64).kind(), ArgumentKind::UInt64);
        assert_eq!(TypedArgument::from(1.0f32).kind(), ArgumentKind::Float32);
        assert_eq!(TypedArgument::from(1.0f64).kind(), ArgumentKind::Float64);
        assert_eq!(TypedArgument::from(true).kind(), ArgumentKind::Bool);
    }

    #[test]
    fn host_width_integers() {
        let expected = if cfg!(target_pointer_width = "64") {
            (ArgumentKind::Int64, ArgumentKind::UInt64, ArgumentKind::UInt64Ptr)
        } else {
            (ArgumentKind::Int32, ArgumentKind::UInt32, ArgumentKind::UInt32Ptr)
        };
        assert_eq!(TypedArgument::from(-3isize).kind(), expected.0);
        assert_eq!(TypedArgument::from(3usize).kind(), expected.1);

        let sizes = [1usize, 2, 3];
        let argument = TypedArgument::from(&sizes);
        assert_eq!(argument.kind(), expected.2);
        assert_eq!(argument.get_pointer(), sizes.as_ptr().cast());
        assert_eq!(TypedArgument::from(-3isize).get_i64(), -3);
        assert_eq!(TypedArgument::from(None::<&[usize]>).kind(), expected.2);
    }

    #[test]
    fn chars_are_code_points() {
        let argument = TypedArgument::from('é');
        assert_eq!(argument.kind(), ArgumentKind::UInt32);
        assert_eq!(argument.get_u32(), 0xE9);

        let text = ['a', 'b'];
        assert_eq!(TypedArgument::from(&text).kind(), ArgumentKind::UInt32Ptr);
        assert_eq!(
            TypedArgument::from(&text[0]).get_pointer(),
            ptr::from_ref(&text[0]).cast()
        );
    }

    #[test]
    fn references_take_the_pointer_kind() {
        let value = 7u16;
        let argument = TypedArgument::from(&value);
        assert_eq!(argument.kind(), ArgumentKind::UInt16Ptr);
        assert_eq!(argument.get_pointer(), ptr::from_ref(&value).cast());

        let values = [1.0f32, 2.0];
        assert_eq!(
            TypedArgument::from(&values[..]).kind(),
            ArgumentKind::Float32Ptr
        );
        assert_eq!(TypedArgument::from(&values).kind(), ArgumentKind::Float32Ptr);

        let flags = [true];
        assert_eq!(TypedArgument::from(&flags).kind(), ArgumentKind::BoolPtr);

        let none: Option<&[i64]> = None;
        let argument = TypedArgument::from(none);
        assert_eq!(argument.kind(), ArgumentKind::Int64Ptr);
        assert!(argument.get_pointer().is_null());
    }

    #[test]
    fn pointers_to_pointers_are_untyped() {
        let value = 5i32;
        let pointer = ptr::from_ref(&value);
        assert_eq!(TypedArgument::from(pointer).kind(), ArgumentKind::VoidPtr);
        assert_eq!(
            TypedArgument::from(ptr::from_ref(&pointer)).kind(),
            ArgumentKind::VoidPtr
        );
        assert_eq!(
            TypedArgument::from(ptr::null_mut::<u8>()).kind(),
            ArgumentKind::VoidPtr
        );
        assert_eq!(TypedArgument::from(pointer).get_pointer(), pointer.cast());
    }

    #[test]
    fn overrides() {
        let half = TypedArgument::from_half_bits(0x3C00);
        assert_eq!(half.kind(), ArgumentKind::Float16);
        assert_eq!(TypedArgument::from(Half::ONE), half);
        assert_eq!(TypedArgument::from(&Half::ONE).kind(), ArgumentKind::VoidPtr);

        assert_eq!(
            TypedArgument::from(Vector2::from_bits(1)).kind(),
            ArgumentKind::Vector2
        );
        let vectors = [Vector4Dbl([1.0, 2.0])];
        assert_eq!(
            TypedArgument::from(&vectors).kind(),
            ArgumentKind::Vector4DblPtr
        );
    }

    #[test]
    fn strings() {
        let owned = String::from("hello");
        assert_eq!(TypedArgument::from(&owned).kind(), ArgumentKind::StringPtr);
        assert_eq!(
            TypedArgument::from(None::<&String>).kind(),
            ArgumentKind::StringPtr
        );
        assert_eq!(TypedArgument::from("hello").kind(), ArgumentKind::CharPtr);
        assert_eq!(
            TypedArgument::from(c"hello").kind(),
            ArgumentKind::CharPtr
        );
        let c_string = CString::new("hello").unwrap();
        assert_eq!(TypedArgument::from(&c_string).kind(), ArgumentKind::CharPtr);
        assert_eq!(
            TypedArgument::from(None::<&CStr>).kind(),
            ArgumentKind::CharPtr
        );

        let bytes = b"raw";
        assert_eq!(TypedArgument::from(bytes).kind(), ArgumentKind::UInt8Ptr);
    }

    #[test]
    fn pointer_kind_constants() {
        assert_eq!(<i8 as Intrinsic>::POINTER_KIND, ArgumentKind::Int8Ptr);
        assert_eq!(<Half as Intrinsic>::POINTER_KIND, ArgumentKind::VoidPtr);
        assert_eq!(<Vector2 as Intrinsic>::POINTER_KIND, ArgumentKind::Vector2Ptr);
        assert_eq!(<bool as Intrinsic>::KIND, ArgumentKind::Bool);
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn intrinsic_registers() {
        use core::arch::x86_64::{_mm_set1_epi32, _mm_set1_pd, _mm_set1_ps};

        // SAFETY: SSE2 is part of the x86_64 baseline
        let (floats, ints, doubles) =
            unsafe { (_mm_set1_ps(1.0), _mm_set1_epi32(2), _mm_set1_pd(3.0)) };
        assert_eq!(TypedArgument::from(floats).kind(), ArgumentKind::Vector4);
        assert_eq!(TypedArgument::from(ints).kind(), ArgumentKind::Vector4Int);
        assert_eq!(TypedArgument::from(doubles).kind(), ArgumentKind::Vector4Dbl);

        let argument = TypedArgument::from(&floats);
        assert_eq!(argument.kind(), ArgumentKind::Vector4Ptr);
        assert_eq!(argument.get_pointer(), ptr::from_ref(&floats).cast());
    }
}
