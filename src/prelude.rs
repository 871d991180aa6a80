//! # argtype Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! of the argtype library. Import it to capture and inspect arguments.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all argtype operations
pub use crate::Error;

/// The result type used throughout argtype
pub use crate::Result;

// ================================================================================================
// Capture
// ================================================================================================

/// A captured value and its kind
pub use crate::TypedArgument;

/// Compile time kind resolution of capturable types
pub use crate::Intrinsic;

/// Batch capture of call site values
pub use crate::typed_args;

// ================================================================================================
// Classification
// ================================================================================================

/// Kinds, classification masks and the payload sum type
pub use crate::{ArgumentClass, ArgumentData, ArgumentKind};

// ================================================================================================
// Value Types
// ================================================================================================

/// Half floats and vector values without a native Rust spelling
pub use crate::{Half, Vector2, Vector4, Vector4Dbl, Vector4Int};

// ================================================================================================
// Constants
// ================================================================================================

/// Sentinels and buffer sizes of the text accessors
pub use crate::{INVALID_CHAR, NULL_STRING, UTF8_BUFFER_SIZE};
