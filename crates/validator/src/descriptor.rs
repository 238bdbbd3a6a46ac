//! JSON rule descriptors
//!
//! Builds a [`RuleTree`] from a hand-authored JSON document, for rule sets
//! that live next to the config they govern rather than in code.
//!
//! | Descriptor | Rule |
//! |---|---|
//! | `"String"`, `"Number"`, `"Boolean"`, `"Array"`, `"Object"`, `"Function"` | primitive marker |
//! | `"Any"` | wildcard |
//! | `{ "field": <descriptor>, ... }` | nested tree |
//! | `{ "$optional": <descriptor> }` | [`Optional`] |
//! | `{ "$choice": [literal, ...] }` | [`Choice`] |
//!
//! # Examples
//!
//! ```
//! use rc_validator::prelude::*;
//! use serde_json::json;
//!
//! let rules = RuleTree::from_descriptor(&json!({
//!     "name": "String",
//!     "hobbies": { "$optional": "Array" },
//!     "os": { "$choice": ["linux", "macos", "windows"] },
//! }))
//! .unwrap();
//!
//! let config = Value::from(json!({ "name": "Michael", "os": "linux" }));
//! assert!(validate(&rules, &config).is_ok());
//! ```

use crate::combinators::Optional;
use crate::foundation::Value;
use crate::rule::{Rule, RuleTree};
use crate::validators::{Choice, PrimitiveKind};
use serde_json::{Map as JsonMap, Value as Json};

const OPTIONAL_KEY: &str = "$optional";
const CHOICE_KEY: &str = "$choice";

/// Error raised while turning a descriptor into rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// The top-level descriptor is not a JSON object.
    #[error("rule descriptor must be an object, found {found}")]
    NotATree { found: &'static str },

    /// A string leaf names no known rule.
    #[error("unknown rule type '{name}' at '{path}'")]
    UnknownType { name: String, path: String },

    /// A leaf is neither a type name nor an object.
    #[error("invalid rule at '{path}': expected a type name or an object, found {found}")]
    InvalidRule { path: String, found: &'static str },

    /// `$choice` was not given an array.
    #[error("'$choice' at '{path}' must be an array of literals")]
    InvalidChoice { path: String },
}

impl RuleTree {
    /// Parses a JSON rule descriptor.
    pub fn from_descriptor(descriptor: &Json) -> Result<Self, RuleError> {
        match descriptor {
            Json::Object(map) => parse_tree(map, ""),
            other => Err(RuleError::NotATree {
                found: json_kind(other),
            }),
        }
    }
}

impl TryFrom<&Json> for RuleTree {
    type Error = RuleError;

    fn try_from(descriptor: &Json) -> Result<Self, Self::Error> {
        Self::from_descriptor(descriptor)
    }
}

fn parse_tree(map: &JsonMap<String, Json>, path: &str) -> Result<RuleTree, RuleError> {
    let mut tree = RuleTree::new();
    for (name, descriptor) in map {
        let path = join(path, name);
        tree.insert(name.clone(), parse_rule(descriptor, &path)?);
    }
    Ok(tree)
}

fn parse_rule(descriptor: &Json, path: &str) -> Result<Rule, RuleError> {
    match descriptor {
        Json::String(name) if name == "Any" => Ok(Rule::Any),
        Json::String(name) => PrimitiveKind::from_name(name)
            .map(Rule::Primitive)
            .ok_or_else(|| RuleError::UnknownType {
                name: name.clone(),
                path: path.to_owned(),
            }),
        Json::Object(map) if map.len() == 1 && map.contains_key(OPTIONAL_KEY) => {
            let inner = &map[OPTIONAL_KEY];
            Ok(Optional::new(parse_rule(inner, path)?).into())
        }
        Json::Object(map) if map.len() == 1 && map.contains_key(CHOICE_KEY) => {
            match &map[CHOICE_KEY] {
                Json::Array(items) => {
                    Ok(Choice::new(items.iter().cloned().map(Value::from)).into())
                }
                _ => Err(RuleError::InvalidChoice {
                    path: path.to_owned(),
                }),
            }
        }
        Json::Object(map) => parse_tree(map, path).map(Rule::Tree),
        other => Err(RuleError::InvalidRule {
            path: path.to_owned(),
            found: json_kind(other),
        }),
    }
}

fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}.{name}")
    }
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
