//! Error types for validation failures
//!
//! A rule-tree validation stops at the first violation and reports it as a
//! single [`ValidationError`]: what the rule expected, what the config
//! actually held, and where in the tree it happened.
//!
//! Descriptors use `Cow<'static, str>` so the common case (type names known
//! at compile time) does not allocate.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Error type user-supplied rules may raise.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Stable discriminant telling validation-machinery failures apart from
/// errors raised inside user rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// A primitive marker or nested tree saw the wrong runtime type.
    TypeMismatch,
    /// The candidate is not a member of a `Choice` set.
    NotAChoice,
    /// A custom predicate returned `false`.
    Rejected,
    /// A custom rule raised its own error.
    Custom,
}

impl ErrorKind {
    /// Error code for programmatic handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::NotAChoice => "not_a_choice",
            Self::Rejected => "rejected",
            Self::Custom => "custom",
        }
    }

    /// True for failures produced by the validator itself rather than by a
    /// user rule's own error.
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom)
    }
}

// ============================================================================
// FIELD PATH
// ============================================================================

/// Dotted location of a failing field, outermost segment first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(VecDeque<Cow<'static, str>>);

impl FieldPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a parent segment.
    pub fn push_front(&mut self, segment: impl Into<Cow<'static, str>>) {
        self.0.push_front(segment.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(AsRef::as_ref)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl<S: Into<Cow<'static, str>>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The first violation found while validating a config.
///
/// `expected` and `actual` are readable state, not just part of a message,
/// so callers can branch on them directly.
///
/// # Examples
///
/// ```
/// use rc_validator::prelude::*;
///
/// let rules = rules! { age: number() };
/// let config: Value = [("age", "27")].into_iter().collect();
///
/// let err = validate(&rules, &config).unwrap_err();
/// assert_eq!(err.expected, "Number");
/// assert_eq!(err.actual, "String");
/// assert_eq!(err.path.to_string(), "age");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Where the failure came from.
    pub kind: ErrorKind,

    /// Descriptor of what the rule accepts.
    ///
    /// Examples: "Number", "'linux', 'macos'", "Object"
    pub expected: Cow<'static, str>,

    /// Descriptor of what the config held.
    ///
    /// Examples: "String", "Undefined", "'freebsd'"
    pub actual: Cow<'static, str>,

    /// Field path of the offending value, empty when raised outside a tree.
    pub path: FieldPath,

    source: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ValidationError {
    pub fn new(
        kind: ErrorKind,
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            expected: expected.into(),
            actual: actual.into(),
            path: FieldPath::new(),
            source: None,
        }
    }

    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::TypeMismatch, expected, actual)
    }

    /// Creates a "not_a_choice" error.
    pub fn not_a_choice(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::NotAChoice, expected, actual)
    }

    /// Creates a "rejected" error.
    pub fn rejected(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::Rejected, expected, actual)
    }

    /// Wraps an error raised by a user rule.
    pub fn custom(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
        source: BoxError,
    ) -> Self {
        let mut error = Self::new(ErrorKind::Custom, expected, actual);
        error.source = Some(Arc::from(source));
        error
    }

    /// Prefixes the field path with a parent segment.
    #[must_use = "builder methods must be chained or built"]
    pub fn within(mut self, segment: impl Into<Cow<'static, str>>) -> Self {
        self.path.push_front(segment);
        self
    }

    /// Replaces the `expected` descriptor, keeping everything else.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_expected(mut self, expected: impl Into<Cow<'static, str>>) -> Self {
        self.expected = expected.into();
        self
    }

    /// Error code of the underlying kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Converts the error to a JSON structure for reporting.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        json!({
            "code": self.code(),
            "expected": self.expected,
            "actual": self.actual,
            "path": self.path.segments().collect::<Vec<_>>(),
            "source": self.source.as_ref().map(ToString::to_string),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected '{}' found '{}'", self.expected, self.actual)?;
        if !self.path.is_empty() {
            write!(f, " at '{}'", self.path)?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ============================================================================
// TESTS
// ============================================================================
