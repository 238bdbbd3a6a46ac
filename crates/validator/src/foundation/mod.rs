//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Values**: [`Value`], [`ValueKind`], [`Callable`]
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`], [`FieldPath`]
//!
//! # Architecture
//!
//! ## 1. One contract for every matcher
//!
//! Primitive markers, `Any`, `Choice`, `Optional`, nested trees and custom
//! rules all implement [`Validate`]. A matcher receives the config field it
//! governs (or `None` if that field is absent) and either succeeds or returns
//! the first violation.
//!
//! ## 2. Explicit failure paths
//!
//! Failures travel as `Result<(), ValidationError>` through every recursive
//! call. Nothing panics and nothing is collected: the first failing field
//! ends the walk.
//!
//! ## 3. Rich, structured errors
//!
//! ```
//! use rc_validator::foundation::{ErrorKind, ValidationError};
//!
//! let error = ValidationError::type_mismatch("Boolean", "Number")
//!     .within("inside")
//!     .within("branch");
//!
//! assert_eq!(error.kind, ErrorKind::TypeMismatch);
//! assert_eq!(error.path.to_string(), "branch.inside");
//! ```

// Module declarations
pub mod error;
pub mod traits;
pub mod value;

// Re-export everything at the foundation level for convenience
pub use error::{BoxError, ErrorKind, FieldPath, ValidationError};
pub use traits::Validate;
pub use value::{Callable, Map, Value, ValueKind};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
