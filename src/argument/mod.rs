//! Typed capture of call site values for formatted output.
//!
//! A formatting engine receives its arguments as a slice of [`TypedArgument`]. Each one pairs a
//! borrowed or copied value with the [`ArgumentKind`] naming its representation, so the engine
//! can classify a value and convert it without ever touching untyped memory.
//!
//! # Key Components
//!
//! - [`ArgumentKind`]: Closed set of representable kinds, ordered so classification is a range test
//! - [`ArgumentClass`]: Every classification of a kind folded into one mask
//! - [`ArgumentData`]: The payload, one variant per kind
//! - [`TypedArgument`]: Kind plus payload, with total accessors
//! - [`Intrinsic`]: Compile time resolution of a Rust type to its kind
//! - [`Half`], [`Vector2`], [`Vector4`], [`Vector4Int`], [`Vector4Dbl`]: value types Rust has no
//!   native spelling for
//!
//! # Examples
//!
//! ```rust
//! use argtype::argument::{ArgumentKind, TypedArgument};
//!
//! let name = String::from("burger");
//! let arguments = [
//!     TypedArgument::from(&name),
//!     TypedArgument::from(-12i16),
//!     TypedArgument::from_half_bits(0x3C00),
//! ];
//!
//! assert_eq!(arguments[0].get_text(), Some(&b"burger"[..]));
//! assert_eq!(arguments[1].get_u32(), 12);
//! assert_eq!(arguments[2].kind(), ArgumentKind::Float16);
//! ```

mod capture;
mod data;
mod half;
mod kind;
mod simd;
mod text;
mod typed;

pub use capture::Intrinsic;
pub use data::ArgumentData;
pub use half::Half;
pub use kind::{ArgumentClass, ArgumentKind};
pub use simd::{Vector2, Vector4, Vector4Dbl, Vector4Int};
pub use text::{NULL_STRING, UTF8_BUFFER_SIZE};
pub use typed::{TypedArgument, INVALID_CHAR};
