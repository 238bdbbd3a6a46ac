//! # rc-validator
//!
//! Recursive rule-tree validation for nested configuration data.
//!
//! A rule tree describes the expected shape of a config: which fields must
//! be present and what type each holds. [`validate`] walks the tree in
//! declaration order and returns the first mismatch as a structured
//! [`ValidationError`](foundation::ValidationError) carrying the expected
//! and actual type descriptors.
//!
//! ## Quick Start
//!
//! ```rust
//! use rc_validator::prelude::*;
//!
//! let rules = rules! {
//!     name: string(),
//!     age: number(),
//!     hobbies: optional(array()),
//!     os: choice(["linux", "macos", "windows"]),
//! };
//!
//! let config: Value = [
//!     ("name", Value::from("Michael")),
//!     ("age", Value::from(27)),
//!     ("os", Value::from("freebsd")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let err = validate(&rules, &config).unwrap_err();
//! assert_eq!(err.expected, "'linux', 'macos', 'windows'");
//! assert_eq!(err.actual, "'freebsd'");
//! ```
//!
//! ## Rules
//!
//! - **Primitive markers**: [`string`](validators::string), [`number`](validators::number),
//!   [`boolean`](validators::boolean), [`array`](validators::array),
//!   [`object`](validators::object), [`function`](validators::function)
//! - **Wildcard**: [`any`](validators::any)
//! - **Enumerations**: [`choice`](validators::choice)
//! - **Optional fields**: [`optional`](combinators::optional)
//! - **Nested trees**: [`RuleTree`](rule::RuleTree) or a nested [`rules!`]
//! - **User rules**: [`custom`](combinators::custom), [`predicate`](combinators::predicate)
//!
//! ## Features
//!
//! - `serde` (default): `From<serde_json::Value>` for config values, JSON
//!   rule descriptors and `ValidationError::to_json_value`.

// ValidationError is returned by value from every matcher.
#![allow(clippy::result_large_err)]

mod macros;

pub mod combinators;
#[cfg(feature = "serde")]
pub mod descriptor;
pub mod foundation;
pub mod prelude;
pub mod rule;
pub mod validator;
pub mod validators;

pub use validator::{Validator, validate};
