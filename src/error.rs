use thiserror::Error;

use crate::argument::ArgumentKind;

/// The generic Error type, which covers every error this library can return.
///
/// The accessors of [`crate::TypedArgument`] are total and never fail. Errors only arise at the
/// edges of the crate: when a raw discriminant is decoded into an [`ArgumentKind`], and when a
/// strict conversion refuses an argument whose kind the target type cannot represent.
///
/// # Examples
///
/// ```rust
/// use argtype::{ArgumentKind, Error, TypedArgument};
///
/// assert!(matches!(ArgumentKind::try_from(0u8), Err(Error::InvalidKind(0))));
///
/// let values = [1.5f64];
/// let argument = TypedArgument::from(&values);
/// match i32::try_from(&argument) {
///     Err(Error::ConversionInvalid { from, to }) => {
///         assert_eq!(from, ArgumentKind::Float64Ptr);
///         assert_eq!(to, "i32");
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The discriminant does not name an argument kind.
    ///
    /// Valid discriminants are `1..=ArgumentKind::COUNT`. Zero is reserved and never decodes.
    #[error("Invalid argument kind - {0}")]
    InvalidKind(u8),

    /// The requested conversion is not possible for this kind.
    ///
    /// Returned by the strict `TryFrom<&TypedArgument>` conversions where the total accessor would
    /// only produce its documented default.
    ///
    /// # Fields
    ///
    /// * `from` - Kind of the argument that was converted
    /// * `to` - Name of the requested target type
    #[error("Can not convert {from} to {to}")]
    ConversionInvalid {
        /// Kind of the argument
        from: ArgumentKind,
        /// The requested target type
        to: &'static str,
    },
}
