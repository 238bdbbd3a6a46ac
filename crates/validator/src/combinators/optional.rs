//! OPTIONAL combinator - fields that may be omitted

use crate::foundation::{Validate, ValidationError, Value};
use crate::rule::Rule;
use std::borrow::Cow;

/// Makes a field optional while keeping it strict when present.
///
/// An absent field (missing, or an explicit `null`) passes without running
/// the inner rule. A present field is validated by the inner rule; built-in
/// failures are re-described with the inner rule's own `expected`
/// descriptor, and errors raised by custom rules pass through untouched.
///
/// # Examples
///
/// ```
/// use rc_validator::prelude::*;
///
/// let rules = rules! { hobbies: optional(array()) };
///
/// let empty = Value::object();
/// assert!(validate(&rules, &empty).is_ok());
///
/// let config: Value = [("hobbies", "Sport")].into_iter().collect();
/// assert!(validate(&rules, &config).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Optional {
    pub(crate) inner: Box<Rule>,
}

impl Optional {
    pub fn new(inner: impl Into<Rule>) -> Self {
        Self {
            inner: Box::new(inner.into()),
        }
    }

    pub fn inner(&self) -> &Rule {
        &self.inner
    }

    pub fn into_inner(self) -> Rule {
        *self.inner
    }
}

impl Validate for Optional {
    fn expected(&self) -> Cow<'static, str> {
        self.inner.expected()
    }

    fn validate(&self, input: Option<&Value>) -> Result<(), ValidationError> {
        let Some(value) = input.filter(|value| !value.is_null()) else {
            return Ok(());
        };

        self.inner.validate_value(value).map_err(|err| {
            if err.kind.is_builtin() {
                let expected = self.inner.expected();
                tracing::debug!(
                    from = %err.expected,
                    to = %expected,
                    "re-describing optional field failure"
                );
                err.with_expected(expected)
            } else {
                err
            }
        })
    }
}

/// Creates an [`Optional`] rule.
pub fn optional(inner: impl Into<Rule>) -> Optional {
    Optional::new(inner)
}
