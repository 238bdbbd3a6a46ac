//! User-supplied rules
//!
//! A [`CustomRule`] wraps any validating closure. Two flavours exist:
//!
//! - [`custom`]: the closure returns `Result<(), E>` for any error type `E`.
//!   Its errors are wrapped as [`ErrorKind::Custom`] failures with the
//!   original error kept as `source()`. A closure that returns a
//!   [`ValidationError`] (for example from a nested `validate` call) has it
//!   forwarded unchanged.
//! - [`predicate`]: the closure returns `bool`; `false` becomes an
//!   [`ErrorKind::Rejected`] failure.
//!
//! [`ErrorKind::Custom`]: crate::foundation::ErrorKind::Custom
//! [`ErrorKind::Rejected`]: crate::foundation::ErrorKind::Rejected

use crate::foundation::{BoxError, Validate, ValidationError, Value, ValueKind};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type CheckFn = dyn Fn(Option<&Value>) -> Result<(), BoxError> + Send + Sync;
type PredicateFn = dyn Fn(Option<&Value>) -> bool + Send + Sync;

#[derive(Clone)]
enum Check {
    Fallible(Arc<CheckFn>),
    Predicate(Arc<PredicateFn>),
}

/// A named, user-supplied validator.
///
/// The closure sees the field exactly as the walk does: `None` when the
/// field is absent.
///
/// # Examples
///
/// ```
/// use rc_validator::prelude::*;
///
/// let even = predicate("Even", |v: Option<&Value>| {
///     v.and_then(Value::as_f64).is_some_and(|n| n % 2.0 == 0.0)
/// });
/// let rules = rules! { workers: even };
///
/// let ok: Value = [("workers", 4)].into_iter().collect();
/// let bad: Value = [("workers", 3)].into_iter().collect();
/// assert!(validate(&rules, &ok).is_ok());
/// assert_eq!(validate(&rules, &bad).unwrap_err().expected, "Even");
/// ```
#[derive(Clone)]
pub struct CustomRule {
    name: Cow<'static, str>,
    check: Check,
}

impl CustomRule {
    /// Creates a rule from a fallible closure.
    pub fn new<F, E>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(Option<&Value>) -> Result<(), E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self {
            name: name.into(),
            check: Check::Fallible(Arc::new(
                move |value: Option<&Value>| -> Result<(), BoxError> {
                    f(value).map_err(Into::into)
                },
            )),
        }
    }

    /// Creates a rule from a boolean predicate.
    pub fn predicate<F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Check::Predicate(Arc::new(f)),
        }
    }

    /// The name reported as `expected` on failure.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomRule")
            .field("name", &self.name)
            .field("check", &"<function>")
            .finish()
    }
}

impl Validate for CustomRule {
    fn expected(&self) -> Cow<'static, str> {
        self.name.clone()
    }

    fn validate(&self, input: Option<&Value>) -> Result<(), ValidationError> {
        let actual = ValueKind::of(input).name();
        match &self.check {
            Check::Predicate(f) => {
                if f(input) {
                    Ok(())
                } else {
                    Err(ValidationError::rejected(self.name.clone(), actual))
                }
            }
            Check::Fallible(f) => f(input).map_err(|err| match err.downcast::<ValidationError>() {
                Ok(inner) => *inner,
                Err(other) => ValidationError::custom(self.name.clone(), actual, other),
            }),
        }
    }
}

/// Creates a [`CustomRule`] from a fallible closure.
pub fn custom<F, E>(name: impl Into<Cow<'static, str>>, f: F) -> CustomRule
where
    F: Fn(Option<&Value>) -> Result<(), E> + Send + Sync + 'static,
    E: Into<BoxError>,
{
    CustomRule::new(name, f)
}

/// Creates a [`CustomRule`] from a boolean predicate.
pub fn predicate<F>(name: impl Into<Cow<'static, str>>, f: F) -> CustomRule
where
    F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
{
    CustomRule::predicate(name, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use std::error::Error as _;

    fn port() -> CustomRule {
        custom("Port", |v: Option<&Value>| match v.and_then(Value::as_f64) {
            Some(n) if (1.0..=65535.0).contains(&n) => Ok(()),
            Some(n) => Err(format!("{n} is not a valid port")),
            None => Err("port must be a number".to_owned()),
        })
    }

    #[test]
    fn test_custom_passes() {
        assert!(port().validate_value(&Value::from(8080)).is_ok());
    }

    #[test]
    fn test_custom_wraps_user_error() {
        let err = port().validate_value(&Value::from(70000)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Custom);
        assert_eq!(err.expected, "Port");
        assert_eq!(err.actual, "Number");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("70000 is not a valid port")
        );
    }

    #[test]
    fn test_custom_sees_absence() {
        let err = port().validate(None).unwrap_err();
        assert_eq!(err.actual, "Undefined");
    }

    #[test]
    fn test_custom_forwards_validation_errors() {
        let nested = custom("Nested", |_: Option<&Value>| {
            Err(ValidationError::type_mismatch("String", "Number").within("name"))
        });
        let err = nested.validate_value(&Value::Null).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert_eq!(err.expected, "String");
        assert_eq!(err.path.to_string(), "name");
    }

    #[test]
    fn test_predicate() {
        let non_empty = predicate("NonEmpty", |v: Option<&Value>| {
            v.and_then(Value::as_str).is_some_and(|s| !s.is_empty())
        });
        assert!(non_empty.validate_value(&Value::from("x")).is_ok());

        let err = non_empty.validate_value(&Value::from("")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Rejected);
        assert_eq!(err.expected, "NonEmpty");
        assert_eq!(err.actual, "String");
    }

    #[test]
    fn test_debug_hides_closure() {
        let rendered = format!("{:?}", port());
        assert!(rendered.contains("Port"));
        assert!(rendered.contains("<function>"));
    }
}
