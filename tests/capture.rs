//! Integration tests for argument capture and conversion.
//!
//! These tests drive the crate the way a formatting engine does: a batch of arguments is
//! captured at a call site, then every argument is classified and converted through the public
//! accessors.

use argtype::{prelude::*, Result};
use std::ffi::CString;
use strum::IntoEnumIterator;

/// Render one argument roughly the way a printf engine would pick a conversion for it.
fn render(argument: &TypedArgument<'_>) -> String {
    if argument.matches(ArgumentClass::TEXT_POINTER) {
        match argument.get_text() {
            Some(text) => String::from_utf8_lossy(text).into_owned(),
            None => NULL_STRING.to_string(),
        }
    } else if argument.is_boolean() && !argument.is_pointer() {
        argument.get_bool().to_string()
    } else if argument.is_real() {
        argument.get_f64().to_string()
    } else if argument.is_integer() {
        let sign = if argument.is_negative() { "-" } else { "" };
        format!("{sign}{}", argument.get_u64())
    } else {
        argument.to_string()
    }
}

#[test]
fn test_printf_style_batch() {
    let name = String::from("Burger");
    let c_name = CString::new("Fries").unwrap();
    let count = -42i32;
    let arguments = typed_args![&name, &c_name, count, 7u8, true, 0.5f64, i64::MIN];

    let rendered: Vec<String> = arguments.iter().map(render).collect();
    assert_eq!(
        rendered,
        vec![
            "Burger",
            "Fries",
            "-42",
            "7",
            "true",
            "0.5",
            "-9223372036854775808"
        ]
    );
}

#[test]
fn test_magnitude_conversion_for_every_signed_width() {
    let arguments = typed_args![-1i8, -1000i16, -100_000i32, -10_000_000_000i64];
    let expected = [1u64, 1000, 100_000, 10_000_000_000];
    for (argument, magnitude) in arguments.iter().zip(expected) {
        assert!(argument.is_signed());
        assert!(argument.is_negative());
        assert_eq!(argument.get_u64(), magnitude);
        #[allow(clippy::cast_possible_truncation)]
        let truncated = magnitude as u32;
        assert_eq!(argument.get_u32(), truncated);
    }
}

#[test]
fn test_half_float_zeros() {
    let positive = TypedArgument::from_half_bits(0x0000);
    let negative = TypedArgument::from_half_bits(0x8000);
    assert!(positive.is_zero() && negative.is_zero());
    assert!(!positive.is_negative());
    assert!(negative.is_negative());
    assert!(!positive.get_bool());
    assert!(!negative.get_bool());
}

#[test]
fn test_invalid_char_for_pointers_and_vectors() {
    let values = [1.0f32; 4];
    let arguments = typed_args![
        Vector4(values),
        Vector2::from_bits(0),
        &values,
        "text",
        std::ptr::null::<u8>()
    ];
    for argument in &arguments {
        assert!(!argument.is_numeric());
        assert_eq!(argument.get_char(), INVALID_CHAR);
        assert_ne!(argument.get_char(), 0);
    }
}

#[test]
fn test_null_string_sentinel() {
    let argument = TypedArgument::from(None::<&String>);
    assert_eq!(argument.get_text(), Some(NULL_STRING.as_bytes()));
    assert_eq!(argument.get_text_length(), NULL_STRING.len());
}

#[test]
fn test_utf8_scenarios() {
    let mut buffer = [0u8; UTF8_BUFFER_SIZE];

    let letter = TypedArgument::from(0x0041u16);
    assert_eq!(letter.get_utf8(&mut buffer), 1);
    assert_eq!(buffer[0], 0x41);

    let emoji = TypedArgument::from(0x1F600u32);
    assert_eq!(emoji.get_utf8(&mut buffer), 4);
    assert_eq!(&buffer[..4], "😀".as_bytes());
}

#[test]
fn test_pointer_to_double() {
    let value = 3.25f64;
    let argument = TypedArgument::from(&value);
    assert!(argument.is_pointer());
    assert_eq!(argument.kind(), ArgumentKind::Float64Ptr);
    assert_eq!(argument.get_pointer(), std::ptr::from_ref(&value).cast());
    assert_eq!(argument.get_i32(), 0);
    assert_eq!(argument.get_data_length_in_bytes(), std::mem::size_of::<*const f64>());
}

#[test]
fn test_raw_kind_round_trip() -> Result<()> {
    for kind in ArgumentKind::iter() {
        assert_eq!(ArgumentKind::try_from(u8::from(kind))?, kind);
    }
    assert_eq!(ArgumentKind::try_from(0u8), Err(Error::InvalidKind(0)));
    Ok(())
}

#[test]
fn test_strict_conversions() -> Result<()> {
    let number = TypedArgument::from(-9i64);
    assert_eq!(i64::try_from(&number)?, -9);
    assert_eq!(u32::try_from(&number)?, 9);

    let text = String::from("menu");
    let argument = TypedArgument::from(&text);
    let bytes: &[u8] = <&[u8]>::try_from(&argument)?;
    assert_eq!(bytes, b"menu");
    assert!(matches!(
        f64::try_from(&argument),
        Err(Error::ConversionInvalid {
            from: ArgumentKind::StringPtr,
            ..
        })
    ));
    Ok(())
}

#[test]
fn test_arguments_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TypedArgument<'static>>();

    let pointer = 0x1000usize as *const u8;
    let arguments = typed_args![pointer, 5u32];
    std::thread::scope(|scope| {
        scope.spawn(|| {
            assert_eq!(arguments[0].kind(), ArgumentKind::VoidPtr);
            assert_eq!(arguments[1].get_u32(), 5);
        });
    });
}
