//! Built-in validators
//!
//! Leaf matchers for rule trees:
//!
//! - **Primitive markers**: [`string`], [`number`], [`boolean`], [`array`],
//!   [`object`], [`function`]
//! - **Wildcard**: [`any`]
//! - **Enumerations**: [`choice`]
//!
//! # Examples
//!
//! ```
//! use rc_validator::prelude::*;
//!
//! let rules = rules! {
//!     name: string(),
//!     os: choice(["linux", "macos", "windows"]),
//!     plugins: any(),
//! };
//!
//! let config: Value = [("name", "svc"), ("os", "linux")].into_iter().collect();
//! assert!(validate(&rules, &config).is_ok());
//! ```

pub mod any;
pub mod choice;
pub mod primitive;

pub use any::{AnyValue, any};
pub use choice::{Choice, choice};
pub use primitive::{
    MatchFn, PrimitiveKind, array, boolean, function, number, object, string,
};
