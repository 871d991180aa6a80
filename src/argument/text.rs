//! Text accessors of [`TypedArgument`].
//!
//! Narrow text kinds ([`ArgumentKind::StringPtr`] through [`ArgumentKind::UInt8Ptr`]) read as
//! bytes up to the first zero byte or the end of the borrowed slice, whichever comes first. A
//! `u16` slice measures as UTF-16. Single 8, 16 and 32-bit integers can be re-encoded as UTF-8
//! with [`TypedArgument::get_utf8`].

use widestring::U16CStr;

use crate::argument::{data::ArgumentData, kind::ArgumentKind, typed::TypedArgument};

/// Text shown for a null string reference.
///
/// Its length is what [`TypedArgument::get_text_length`] reports for null text pointers.
pub const NULL_STRING: &str = "(null)";

/// Capacity of the buffer [`TypedArgument::get_utf8`] writes into
pub const UTF8_BUFFER_SIZE: usize = 5;

fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&byte| byte == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

fn narrow_length(kind: ArgumentKind, bytes: &[u8]) -> usize {
    match bytes.iter().position(|&byte| byte == 0) {
        Some(length) => length,
        None => {
            log::trace!(
                "{kind} text of {} bytes has no terminator, using the slice length",
                bytes.len()
            );
            bytes.len()
        }
    }
}

fn signed_bytes(bytes: &[i8]) -> &[u8] {
    // SAFETY: i8 and u8 share size and alignment and every bit pattern is valid for both
    unsafe { std::slice::from_raw_parts(bytes.as_ptr().cast::<u8>(), bytes.len()) }
}

impl<'a> TypedArgument<'a> {
    /// The narrow text this argument refers to.
    ///
    /// A borrowed `String` yields its bytes, or [`NULL_STRING`] if the reference is null. Narrow
    /// text pointers yield the bytes before the first zero, or `None` when null. Every other
    /// kind yields `None`.
    ///
    /// ```rust
    /// use argtype::TypedArgument;
    ///
    /// let argument = TypedArgument::from(c"hello");
    /// assert_eq!(argument.get_text(), Some(&b"hello"[..]));
    /// assert_eq!(TypedArgument::from(None::<&String>).get_text(), Some(&b"(null)"[..]));
    /// assert_eq!(TypedArgument::from(42u32).get_text(), None);
    /// ```
    #[must_use]
    pub fn get_text(&self) -> Option<&'a [u8]> {
        match *self.data() {
            ArgumentData::StringPtr(Some(string)) => Some(string.as_bytes()),
            ArgumentData::StringPtr(None) => Some(NULL_STRING.as_bytes()),
            ArgumentData::CharPtr(bytes) | ArgumentData::UInt8Ptr(bytes) => bytes.map(until_nul),
            ArgumentData::Int8Ptr(bytes) => bytes.map(|bytes| until_nul(signed_bytes(bytes))),
            _ => None,
        }
    }

    /// Length of the text this argument refers to.
    ///
    /// Narrow text counts bytes and `u16` slices count UTF-16 code units, in both cases up to the
    /// terminating zero or the end of the slice. Null text reports the length of
    /// [`NULL_STRING`]. Kinds that are not text report 0.
    #[must_use]
    pub fn get_text_length(&self) -> usize {
        let kind = self.kind();
        match *self.data() {
            ArgumentData::StringPtr(Some(string)) => string.len(),
            ArgumentData::CharPtr(Some(bytes)) | ArgumentData::UInt8Ptr(Some(bytes)) => {
                narrow_length(kind, bytes)
            }
            ArgumentData::Int8Ptr(Some(bytes)) => narrow_length(kind, signed_bytes(bytes)),
            ArgumentData::UInt16Ptr(Some(units)) => match U16CStr::from_slice_truncate(units) {
                Ok(text) => text.len(),
                Err(_) => {
                    log::trace!(
                        "{kind} text of {} units has no terminator, using the slice length",
                        units.len()
                    );
                    units.len()
                }
            },
            ArgumentData::StringPtr(None)
            | ArgumentData::CharPtr(None)
            | ArgumentData::Int8Ptr(None)
            | ArgumentData::UInt8Ptr(None)
            | ArgumentData::UInt16Ptr(None) => NULL_STRING.len(),
            _ => 0,
        }
    }

    /// Encode a character sized integer as UTF-8.
    ///
    /// 8-bit values are copied as a single byte, 16-bit values are read as one UTF-16 code unit
    /// and 32-bit values as one UTF-32 code point. Returns the number of bytes written, which is
    /// 0 for every other kind and for surrogates or values beyond U+10FFFF. No terminator is
    /// written.
    ///
    /// ## Arguments
    /// * `output` - Receives the encoded bytes
    ///
    /// ```rust
    /// use argtype::{TypedArgument, UTF8_BUFFER_SIZE};
    ///
    /// let mut buffer = [0u8; UTF8_BUFFER_SIZE];
    /// let length = TypedArgument::from(0x1F600u32).get_utf8(&mut buffer);
    /// assert_eq!(&buffer[..length], "😀".as_bytes());
    /// ```
    #[allow(clippy::cast_sign_loss)]
    pub fn get_utf8(&self, output: &mut [u8; UTF8_BUFFER_SIZE]) -> usize {
        let code_point = match *self.data() {
            ArgumentData::Int8(value) => {
                output[0] = value as u8;
                return 1;
            }
            ArgumentData::UInt8(value) => {
                output[0] = value;
                return 1;
            }
            ArgumentData::Int16(value) => u32::from(value as u16),
            ArgumentData::UInt16(value) => u32::from(value),
            ArgumentData::Int32(value) => value as u32,
            ArgumentData::UInt32(value) => value,
            _ => return 0,
        };

        match char::from_u32(code_point) {
            Some(character) => character.encode_utf8(output).len(),
            None => {
                log::debug!(
                    "{} {code_point:#x} is not a Unicode scalar value, nothing encoded",
                    self.kind()
                );
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::CString;

    use super::*;

    #[test]
    fn owned_strings() {
        let text = String::from("hello world");
        let argument = TypedArgument::from(&text);
        assert_eq!(argument.get_text(), Some(&b"hello world"[..]));
        assert_eq!(argument.get_text_length(), 11);
    }

    #[test]
    fn null_owned_string_is_the_sentinel() {
        let argument = TypedArgument::from(None::<&String>);
        assert_eq!(argument.get_text(), Some(NULL_STRING.as_bytes()));
        assert_eq!(argument.get_text_length(), NULL_STRING.len());
        assert_eq!(argument.get_text_length(), 6);
    }

    #[test]
    fn narrow_text_stops_at_zero() {
        let c_string = CString::new("abc").unwrap();
        let argument = TypedArgument::from(&c_string);
        assert_eq!(argument.get_text(), Some(&b"abc"[..]));
        assert_eq!(argument.get_text_length(), 3);

        let bytes = *b"ab\0cd";
        let argument = TypedArgument::from(&bytes);
        assert_eq!(argument.kind(), ArgumentKind::UInt8Ptr);
        assert_eq!(argument.get_text(), Some(&b"ab"[..]));
        assert_eq!(argument.get_text_length(), 2);

        let signed = [104i8, 105, 0];
        let argument = TypedArgument::from(&signed);
        assert_eq!(argument.get_text(), Some(&b"hi"[..]));
        assert_eq!(argument.get_text_length(), 2);
    }

    #[test]
    fn unterminated_text_uses_the_slice() {
        let argument = TypedArgument::from("plain");
        assert_eq!(argument.get_text(), Some(&b"plain"[..]));
        assert_eq!(argument.get_text_length(), 5);
    }

    #[test]
    fn null_narrow_text() {
        let argument = TypedArgument::from(None::<&str>);
        assert_eq!(argument.get_text(), None);
        assert_eq!(argument.get_text_length(), NULL_STRING.len());

        let argument = TypedArgument::from(None::<&[u16]>);
        assert_eq!(argument.get_text_length(), NULL_STRING.len());
    }

    #[test]
    fn wide_text_counts_code_units() {
        let units: Vec<u16> = "héllo😀".encode_utf16().chain([0, 65]).collect();
        let argument = TypedArgument::from(units.as_slice());
        assert_eq!(argument.get_text_length(), 7);
        assert_eq!(argument.get_text(), None);

        let unterminated = [65u16, 66, 67];
        assert_eq!(TypedArgument::from(&unterminated).get_text_length(), 3);
    }

    #[test]
    fn non_text_kinds() {
        let values = [1i32, 2];
        let argument = TypedArgument::from(&values);
        assert_eq!(argument.get_text(), None);
        assert_eq!(argument.get_text_length(), 0);
        assert_eq!(TypedArgument::from(1.0f64).get_text_length(), 0);
    }

    #[test]
    fn utf8_single_bytes() {
        let mut buffer = [0u8; UTF8_BUFFER_SIZE];
        assert_eq!(TypedArgument::from(0x41u8).get_utf8(&mut buffer), 1);
        assert_eq!(buffer[0], 0x41);
        assert_eq!(TypedArgument::from(-1i8).get_utf8(&mut buffer), 1);
        assert_eq!(buffer[0], 0xFF);
    }

    #[test]
    fn utf8_code_units() {
        let mut buffer = [0xAAu8; UTF8_BUFFER_SIZE];
        assert_eq!(TypedArgument::from(0x0041u16).get_utf8(&mut buffer), 1);
        assert_eq!(buffer, [0x41, 0xAA, 0xAA, 0xAA, 0xAA]);

        assert_eq!(TypedArgument::from(0x00E9u16).get_utf8(&mut buffer), 2);
        assert_eq!(&buffer[..2], "é".as_bytes());

        assert_eq!(TypedArgument::from(0x20ACi16).get_utf8(&mut buffer), 3);
        assert_eq!(&buffer[..3], "€".as_bytes());
    }

    #[test]
    fn utf8_code_points() {
        let mut buffer = [0u8; UTF8_BUFFER_SIZE];
        let length = TypedArgument::from(0x1F600u32).get_utf8(&mut buffer);
        assert_eq!(length, 4);
        assert_eq!(&buffer[..4], &[0xF0, 0x9F, 0x98, 0x80]);
        assert_eq!(buffer[4], 0);

        assert_eq!(TypedArgument::from('€').get_utf8(&mut buffer), 3);
        assert_eq!(TypedArgument::from(0x41i32).get_utf8(&mut buffer), 1);
    }

    #[test]
    fn utf8_refuses_invalid_values() {
        let mut buffer = [0u8; UTF8_BUFFER_SIZE];
        assert_eq!(TypedArgument::from(0xD800u16).get_utf8(&mut buffer), 0);
        assert_eq!(TypedArgument::from(0x11_0000u32).get_utf8(&mut buffer), 0);
        assert_eq!(TypedArgument::from(-1i32).get_utf8(&mut buffer), 0);
        assert_eq!(buffer, [0; UTF8_BUFFER_SIZE]);
    }

    #[test]
    fn utf8_ignores_other_kinds() {
        let mut buffer = [0u8; UTF8_BUFFER_SIZE];
        assert_eq!(TypedArgument::from(0x41u64).get_utf8(&mut buffer), 0);
        assert_eq!(TypedArgument::from(65.0f32).get_utf8(&mut buffer), 0);
        assert_eq!(TypedArgument::from("A").get_utf8(&mut buffer), 0);
        assert_eq!(buffer, [0; UTF8_BUFFER_SIZE]);
    }
}
