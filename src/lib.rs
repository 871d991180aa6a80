// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'argument/capture.rs' reinterprets `char`, `isize` and `usize` slices as same-width integers
// - 'argument/text.rs' reinterprets `i8` text as bytes
// - 'argument/simd.rs' reinterprets x86 intrinsic registers as lane arrays

//! # argtype
//!
//! Typed, non-owning capture of call site values for formatted output engines.
//!
//! C style variadic formatting passes its arguments as untyped memory and trusts the format
//! string to describe them. `argtype` replaces that with a uniform value type,
//! [`TypedArgument`], which records at capture time exactly which kind of data it holds. A
//! formatting engine then classifies each argument and converts it through accessors that are
//! defined for every kind and never fail.
//!
//! ## Features
//!
//! - **Compile time resolution** - every supported Rust type converts with `From`, unsupported
//!   types do not compile
//! - **No ownership** - pointer kinds borrow, the lifetime ties an argument to its data
//! - **Total accessors** - numeric, boolean, pointer and text queries return a documented default
//!   when they do not apply
//! - **Magnitude conversions** - unsigned accessors return the absolute value of negative inputs
//! - **UTF-8 re-encoding** of 8, 16 and 32-bit character values
//! - **Half floats and vectors** - binary16, 64-bit and 128-bit vector values and pointers
//!
//! ## Quick Start
//!
//! ```rust
//! use argtype::prelude::*;
//!
//! let name = String::from("patty");
//! let weight = 0.25f32;
//! let arguments = typed_args![&name, -3i32, weight, 'é'];
//!
//! assert_eq!(arguments[0].get_text_length(), 5);
//! assert!(arguments[1].is_negative());
//! assert_eq!(arguments[1].get_u32(), 3);
//! assert!(arguments[2].matches(ArgumentClass::REAL));
//!
//! let mut buffer = [0u8; UTF8_BUFFER_SIZE];
//! let length = arguments[3].get_utf8(&mut buffer);
//! assert_eq!(&buffer[..length], "é".as_bytes());
//! ```
//!
//! ## Architecture
//!
//! - [`argument`] - Kinds, payloads, capture and accessors
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`Error`] and [`Result`] - Errors of the strict conversions and raw kind decoding
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never installs a logger.
//! Only lenient fallbacks are reported: `trace` for unterminated text slices and untyped pointer
//! captures, `debug` for values that can not be encoded as UTF-8.

#[macro_use]
mod macros;

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types.
///
/// ```rust
/// use argtype::prelude::*;
///
/// let argument = TypedArgument::from(7u8);
/// assert_eq!(argument.kind(), ArgumentKind::UInt8);
/// ```
pub mod prelude;

/// Kinds, payloads and accessors of typed arguments.
///
/// See [`TypedArgument`] for the accessors and [`ArgumentKind`] for the classification rules.
pub mod argument;

/// `argtype` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `argtype` Error type
///
/// See [`Error`] for the variants.
pub use error::Error;

pub use argument::{
    ArgumentClass, ArgumentData, ArgumentKind, Half, Intrinsic, TypedArgument, Vector2, Vector4,
    Vector4Dbl, Vector4Int, INVALID_CHAR, NULL_STRING, UTF8_BUFFER_SIZE,
};
