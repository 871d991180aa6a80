/// Capture a batch of call site values as an array of [`TypedArgument`](crate::TypedArgument).
///
/// Each expression is converted with `TypedArgument::from`, so every element resolves its own
/// kind. The result is a fixed size array on the stack, ready to be passed as a slice.
///
/// ```rust
/// use argtype::{typed_args, ArgumentKind};
///
/// let total = 12u64;
/// let arguments = typed_args!["count", total, &total];
/// assert_eq!(arguments.len(), 3);
/// assert_eq!(arguments[0].kind(), ArgumentKind::CharPtr);
/// assert_eq!(arguments[1].kind(), ArgumentKind::UInt64);
/// assert_eq!(arguments[2].kind(), ArgumentKind::UInt64Ptr);
///
/// let empty: [argtype::TypedArgument; 0] = typed_args![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! typed_args {
    ($($argument:expr),* $(,)?) => {
        [$($crate::TypedArgument::from($argument)),*]
    };
}
