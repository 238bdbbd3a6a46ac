//! Validation entry points

use crate::foundation::{Validate, ValidationResult, Value};
use crate::rule::RuleTree;

/// Validates `config` against `rules`.
///
/// Fields are checked in the order the tree declares them; the first
/// failure is returned and the remaining fields are not evaluated. Config
/// fields the tree does not name are ignored.
///
/// # Examples
///
/// ```
/// use rc_validator::prelude::*;
///
/// let rules = rules! {
///     name: string(),
///     age: number(),
///     hobbies: optional(array()),
/// };
///
/// let ok: Value = [("name", Value::from("Michael")), ("age", Value::from(27))]
///     .into_iter()
///     .collect();
/// assert!(validate(&rules, &ok).is_ok());
///
/// let bad: Value = [("name", Value::from("Michael")), ("age", Value::Number(f64::NAN))]
///     .into_iter()
///     .collect();
/// let err = validate(&rules, &bad).unwrap_err();
/// assert_eq!((err.expected.as_ref(), err.actual.as_ref()), ("Number", "Number"));
/// ```
pub fn validate(rules: &RuleTree, config: &Value) -> ValidationResult<()> {
    rules.validate_value(config).inspect_err(|err| {
        tracing::debug!(
            code = err.code(),
            path = %err.path,
            expected = %err.expected,
            actual = %err.actual,
            "config rejected"
        );
    })
}

/// A rule tree built once and reused across many configs.
///
/// # Examples
///
/// ```
/// use rc_validator::prelude::*;
///
/// let validator = Validator::new(rules! { os: choice(["linux", "macos"]) });
///
/// let linux: Value = [("os", "linux")].into_iter().collect();
/// let bsd: Value = [("os", "freebsd")].into_iter().collect();
/// assert!(validator.is_valid(&linux));
/// assert!(!validator.is_valid(&bsd));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: RuleTree,
}

impl Validator {
    #[must_use]
    pub fn new(rules: RuleTree) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &RuleTree {
        &self.rules
    }

    /// Validates a config, returning the first violation.
    pub fn validate(&self, config: &Value) -> ValidationResult<()> {
        validate(&self.rules, config)
    }

    #[must_use]
    pub fn is_valid(&self, config: &Value) -> bool {
        self.validate(config).is_ok()
    }

    pub fn into_rules(self) -> RuleTree {
        self.rules
    }
}

impl From<RuleTree> for Validator {
    fn from(rules: RuleTree) -> Self {
        Self::new(rules)
    }
}
