//! Prelude module for convenient imports.
//!
//! Provides a single `use rc_validator::prelude::*;` import that brings
//! in the rule builders, the entry points and the error types.
//!
//! # Examples
//!
//! ```
//! use rc_validator::prelude::*;
//!
//! let rules = rules! {
//!     name: string(),
//!     age: number(),
//!     hobbies: optional(array()),
//!     os: choice(["linux", "macos", "windows"]),
//!     extra: any(),
//! };
//! assert_eq!(rules.len(), 5);
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, values
// ============================================================================

pub use crate::foundation::{
    BoxError, Callable, ErrorKind, FieldPath, Map, Validate, ValidationError, ValidationResult,
    Value, ValueKind,
};

// ============================================================================
// VALIDATORS: Primitive markers, wildcard, choice
// ============================================================================

pub use crate::validators::{
    AnyValue, Choice, PrimitiveKind, any, array, boolean, choice, function, number, object,
    string,
};

// ============================================================================
// COMBINATORS: Optional and custom rules
// ============================================================================

pub use crate::combinators::{CustomRule, Optional, custom, optional, predicate};

// ============================================================================
// RULES AND ENTRY POINTS
// ============================================================================

pub use crate::rule::{Rule, RuleTree};
pub use crate::rules;
pub use crate::validator::{Validator, validate};

// ============================================================================
// SERDE-GATED: JSON rule descriptors
// ============================================================================

#[cfg(feature = "serde")]
pub use crate::descriptor::RuleError;
