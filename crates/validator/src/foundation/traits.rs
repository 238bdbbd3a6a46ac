//! Core traits for the validation system
//!
//! Every matcher (primitive markers, `Any`, `Choice`, `Optional`, nested
//! trees and custom rules) implements [`Validate`].

use crate::foundation::{ValidationError, Value};
use std::borrow::Cow;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait all matchers implement.
///
/// The input is the config field the rule governs, or `None` when that field
/// is absent. Matchers decide for themselves whether absence is acceptable.
///
/// # Examples
///
/// ```
/// use rc_validator::foundation::{Validate, ValidationError, Value, ValueKind};
/// use std::borrow::Cow;
///
/// struct NonEmptyString;
///
/// impl Validate for NonEmptyString {
///     fn expected(&self) -> Cow<'static, str> {
///         Cow::Borrowed("NonEmptyString")
///     }
///
///     fn validate(&self, input: Option<&Value>) -> Result<(), ValidationError> {
///         match input.and_then(Value::as_str) {
///             Some(s) if !s.is_empty() => Ok(()),
///             _ => Err(ValidationError::rejected(self.expected(), ValueKind::of(input).name())),
///         }
///     }
/// }
///
/// assert!(NonEmptyString.validate(Some(&Value::from("x"))).is_ok());
/// assert!(NonEmptyString.validate(None).is_err());
/// ```
pub trait Validate {
    /// Descriptor of what this matcher accepts, reported as `expected`.
    fn expected(&self) -> Cow<'static, str>;

    /// Validates the candidate value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` describing the first violation
    fn validate(&self, input: Option<&Value>) -> Result<(), ValidationError>;

    /// Validates a value that is known to be present.
    fn validate_value(&self, input: &Value) -> Result<(), ValidationError> {
        self.validate(Some(input))
    }

    /// Returns `true` if the candidate passes.
    fn accepts(&self, input: Option<&Value>) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    fn expected(&self) -> Cow<'static, str> {
        (**self).expected()
    }

    fn validate(&self, input: Option<&Value>) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn expected(&self) -> Cow<'static, str> {
        (**self).expected()
    }

    fn validate(&self, input: Option<&Value>) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
