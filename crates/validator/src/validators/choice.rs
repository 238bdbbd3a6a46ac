//! Enumerated-choice validator
//!
//! [`Choice`] restricts a field to a fixed, ordered set of literal values,
//! compared with [`Value::strict_eq`].

use crate::foundation::{Validate, ValidationError, Value};
use std::borrow::Cow;

/// Validates that a value is one of a fixed set of literals.
///
/// An empty set is allowed but rejects every candidate.
///
/// # Examples
///
/// ```
/// use rc_validator::foundation::{Validate, Value};
/// use rc_validator::validators::choice;
///
/// let os = choice(["linux", "macos", "windows"]);
/// assert!(os.validate_value(&Value::from("linux")).is_ok());
///
/// let err = os.validate_value(&Value::from("freebsd")).unwrap_err();
/// assert_eq!(err.expected, "'linux', 'macos', 'windows'");
/// assert_eq!(err.actual, "'freebsd'");
/// ```
#[derive(Debug, Clone)]
pub struct Choice {
    allowed: Vec<Value>,
}

impl Choice {
    pub fn new<I, V>(allowed: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// The allowed literals, in construction order.
    #[must_use]
    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }

    /// Returns true if `value` strictly equals one of the allowed literals.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.allowed.iter().any(|allowed| allowed.strict_eq(value))
    }
}

fn quoted(value: Option<&Value>) -> String {
    match value {
        Some(value) => format!("'{value}'"),
        None => "'undefined'".to_owned(),
    }
}

impl Validate for Choice {
    fn expected(&self) -> Cow<'static, str> {
        let quoted: Vec<String> = self.allowed.iter().map(|v| quoted(Some(v))).collect();
        Cow::Owned(quoted.join(", "))
    }

    fn validate(&self, input: Option<&Value>) -> Result<(), ValidationError> {
        match input {
            Some(value) if self.contains(value) => Ok(()),
            _ => Err(ValidationError::not_a_choice(
                self.expected(),
                quoted(input),
            )),
        }
    }
}

/// Creates a [`Choice`] validator.
pub fn choice<I, V>(allowed: I) -> Choice
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Choice::new(allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;

    #[test]
    fn test_member_passes() {
        let v = choice(["foo", "bar"]);
        assert!(v.validate_value(&Value::from("foo")).is_ok());
        assert!(v.validate_value(&Value::from("bar")).is_ok());
    }

    #[test]
    fn test_non_member_fails() {
        let err = choice(["foo", "bar"])
            .validate_value(&Value::from("baz"))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotAChoice);
        assert_eq!(err.expected, "'foo', 'bar'");
        assert_eq!(err.actual, "'baz'");
    }

    #[test]
    fn test_absent_fails() {
        let err = choice(["foo", "bar"]).validate(None).unwrap_err();
        assert_eq!(err.actual, "'undefined'");
    }

    #[test]
    fn test_no_coercion() {
        let v = choice([1, 2]);
        assert!(v.validate_value(&Value::from(1)).is_ok());
        assert!(v.validate_value(&Value::from("1")).is_err());
        assert!(v.validate_value(&Value::from(true)).is_err());
    }

    #[test]
    fn test_empty_choice_rejects_everything() {
        let v = choice(Vec::<Value>::new());
        assert!(v.validate_value(&Value::from("anything")).is_err());
        assert!(v.validate(None).is_err());
        assert_eq!(v.expected(), "");
    }

    #[test]
    fn test_mixed_literals() {
        let v = Choice::new([Value::from("auto"), Value::from(0), Value::from(false)]);
        assert_eq!(v.expected(), "'auto', '0', 'false'");
        assert!(v.validate_value(&Value::from(false)).is_ok());
        assert!(v.validate_value(&Value::Null).is_err());
    }
}
