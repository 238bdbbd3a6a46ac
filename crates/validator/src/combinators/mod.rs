//! Rule combinators
//!
//! - [`Optional`] / [`optional`]: the field may be omitted, but is strict
//!   when present
//! - [`CustomRule`] / [`custom`] / [`predicate`]: user-supplied validators

pub mod custom;
pub mod optional;

pub use custom::{CustomRule, custom, predicate};
pub use optional::{Optional, optional};
