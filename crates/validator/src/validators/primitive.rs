//! Primitive type markers
//!
//! Six built-in base types usable directly as leaf rules. Each kind maps to
//! a single predicate through [`PrimitiveKind::matcher`].
//!
//! # Examples
//!
//! ```
//! use rc_validator::foundation::{Validate, Value};
//! use rc_validator::validators::PrimitiveKind;
//!
//! assert!(PrimitiveKind::Number.validate_value(&Value::from(42)).is_ok());
//! assert!(PrimitiveKind::Number.validate_value(&Value::Number(f64::NAN)).is_err());
//! assert!(PrimitiveKind::Number.validate_value(&Value::from(true)).is_err());
//! ```

use crate::foundation::{Validate, ValidationError, Value, ValueKind};
use std::borrow::Cow;
use std::fmt;

/// One of the six primitive rule markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Function,
}

/// Predicate run against a present candidate value.
pub type MatchFn = fn(&Value) -> bool;

impl PrimitiveKind {
    /// All markers, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Array,
        Self::Object,
        Self::Function,
    ];

    /// The type name reported as `expected`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Array => "Array",
            Self::Object => "Object",
            Self::Function => "Function",
        }
    }

    /// Dispatch table from marker to matcher.
    #[must_use]
    pub const fn matcher(&self) -> MatchFn {
        match self {
            Self::String => is_string,
            Self::Number => is_number,
            Self::Boolean => is_boolean,
            Self::Array => is_array,
            Self::Object => is_object,
            Self::Function => is_function,
        }
    }

    /// Parses a type name such as `"String"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Validate for PrimitiveKind {
    fn expected(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.name())
    }

    fn validate(&self, input: Option<&Value>) -> Result<(), ValidationError> {
        match input {
            Some(value) if (self.matcher())(value) => Ok(()),
            _ => Err(ValidationError::type_mismatch(
                self.name(),
                ValueKind::of(input).name(),
            )),
        }
    }
}

// ============================================================================
// MATCHERS
// ============================================================================

fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

// Booleans are a separate variant, so only NaN needs rejecting here.
fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(n) if !n.is_nan())
}

fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

// ============================================================================
// FACTORIES
// ============================================================================

#[must_use]
pub const fn string() -> PrimitiveKind {
    PrimitiveKind::String
}

#[must_use]
pub const fn number() -> PrimitiveKind {
    PrimitiveKind::Number
}

#[must_use]
pub const fn boolean() -> PrimitiveKind {
    PrimitiveKind::Boolean
}

#[must_use]
pub const fn array() -> PrimitiveKind {
    PrimitiveKind::Array
}

#[must_use]
pub const fn object() -> PrimitiveKind {
    PrimitiveKind::Object
}

#[must_use]
pub const fn function() -> PrimitiveKind {
    PrimitiveKind::Function
}
