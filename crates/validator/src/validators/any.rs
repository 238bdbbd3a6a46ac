//! Wildcard validator

use crate::foundation::{Validate, ValidationError, Value};
use std::borrow::Cow;

/// Accepts every candidate, including an absent field.
///
/// Listing a field as `any()` documents that it is expected in the config
/// without constraining its contents.
///
/// # Examples
///
/// ```
/// use rc_validator::foundation::{Validate, Value};
/// use rc_validator::validators::any;
///
/// assert!(any().validate(None).is_ok());
/// assert!(any().validate_value(&Value::from(42)).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AnyValue;

impl Validate for AnyValue {
    fn expected(&self) -> Cow<'static, str> {
        Cow::Borrowed("Any")
    }

    fn validate(&self, _input: Option<&Value>) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Creates the wildcard validator.
#[must_use]
pub const fn any() -> AnyValue {
    AnyValue
}
