//! Rules and rule trees
//!
//! A [`RuleTree`] maps field names to [`Rule`]s in declaration order. The
//! variant of each rule is fixed when the tree is built, so dispatch during
//! validation is a plain `match`.

use crate::combinators::{CustomRule, Optional};
use crate::foundation::{Validate, ValidationError, Value};
use crate::validators::{AnyValue, Choice, PrimitiveKind};
use indexmap::IndexMap;
use std::borrow::Cow;

// ============================================================================
// RULE
// ============================================================================

/// A node in a rule tree.
#[derive(Debug, Clone)]
pub enum Rule {
    /// One of the six primitive markers.
    Primitive(PrimitiveKind),
    /// Accepts anything, including absence.
    Any,
    /// One of a fixed set of literals.
    Choice(Choice),
    /// May be omitted; strict when present.
    Optional(Optional),
    /// A nested sub-tree.
    Tree(RuleTree),
    /// A user-supplied validator.
    Custom(CustomRule),
}

impl Validate for Rule {
    fn expected(&self) -> Cow<'static, str> {
        match self {
            Self::Primitive(kind) => kind.expected(),
            Self::Any => AnyValue.expected(),
            Self::Choice(choice) => choice.expected(),
            Self::Optional(optional) => optional.expected(),
            Self::Tree(tree) => tree.expected(),
            Self::Custom(custom) => custom.expected(),
        }
    }

    fn validate(&self, input: Option<&Value>) -> Result<(), ValidationError> {
        match self {
            Self::Primitive(kind) => kind.validate(input),
            Self::Any => AnyValue.validate(input),
            Self::Choice(choice) => choice.validate(input),
            Self::Optional(optional) => optional.validate(input),
            Self::Tree(tree) => tree.validate(input),
            Self::Custom(custom) => custom.validate(input),
        }
    }
}

impl From<PrimitiveKind> for Rule {
    fn from(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }
}

impl From<AnyValue> for Rule {
    fn from(_: AnyValue) -> Self {
        Self::Any
    }
}

impl From<Choice> for Rule {
    fn from(choice: Choice) -> Self {
        Self::Choice(choice)
    }
}

impl From<Optional> for Rule {
    fn from(optional: Optional) -> Self {
        Self::Optional(optional)
    }
}

impl From<RuleTree> for Rule {
    fn from(tree: RuleTree) -> Self {
        Self::Tree(tree)
    }
}

impl From<CustomRule> for Rule {
    fn from(custom: CustomRule) -> Self {
        Self::Custom(custom)
    }
}

// ============================================================================
// RULE TREE
// ============================================================================

/// An ordered mapping from field name to [`Rule`].
///
/// Validation visits fields in declaration order and stops at the first
/// failure. Config fields the tree does not name are never inspected.
///
/// # Examples
///
/// ```
/// use rc_validator::prelude::*;
///
/// let rules = RuleTree::new()
///     .field("name", string())
///     .field("age", number());
///
/// let config: Value = [("name", Value::from("Michael")), ("age", Value::from(27))]
///     .into_iter()
///     .collect();
/// assert!(validate(&rules, &config).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleTree {
    fields: IndexMap<String, Rule>,
}

impl RuleTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, returning the tree for chaining.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, rule: impl Into<Rule>) -> Self {
        self.insert(name, rule);
        self
    }

    /// Adds or replaces a field. A replaced field keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, rule: impl Into<Rule>) -> Option<Rule> {
        self.fields.insert(name.into(), rule.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.fields.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.fields.iter().map(|(name, rule)| (name.as_str(), rule))
    }
}

impl Validate for RuleTree {
    fn expected(&self) -> Cow<'static, str> {
        Cow::Borrowed("Object")
    }

    /// Walks the tree depth-first.
    ///
    /// A missing or non-object input is not rejected up front: each field
    /// then sees `None`, so the first field that requires presence fails and
    /// an empty tree (or one with only optional fields) passes.
    fn validate(&self, input: Option<&Value>) -> Result<(), ValidationError> {
        for (name, rule) in &self.fields {
            tracing::trace!(field = %name, expected = %rule.expected(), "validating field");
            let field = input.and_then(|value| value.get(name));
            rule.validate(field)
                .map_err(|err| err.within(name.clone()))?;
        }
        Ok(())
    }
}

impl<K, R> FromIterator<(K, R)> for RuleTree
where
    K: Into<String>,
    R: Into<Rule>,
{
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, rule)| (name.into(), rule.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleTree {
    type Item = (&'a String, &'a Rule);
    type IntoIter = indexmap::map::Iter<'a, String, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::optional;
    use crate::foundation::ErrorKind;
    use crate::validators::{any, boolean, choice, number, string};

    fn config(pairs: Vec<(&str, Value)>) -> Value {
        pairs.into_iter().collect()
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let tree = RuleTree::new()
            .field("zeta", string())
            .field("alpha", number())
            .field("mid", any());
        let names: Vec<_> = tree.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut tree = RuleTree::new().field("a", string()).field("b", number());
        let previous = tree.insert("a", boolean());
        assert!(matches!(previous, Some(Rule::Primitive(PrimitiveKind::String))));
        let (first, rule) = tree.iter().next().unwrap();
        assert_eq!((first, rule.expected().as_ref()), ("a", "Boolean"));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_nested_failure_carries_path() {
        let tree = RuleTree::new().field("server", RuleTree::new().field("port", number()));
        let input = config(vec![("server", config(vec![("port", Value::from("80"))]))]);

        let err = tree.validate_value(&input).unwrap_err();
        assert_eq!(err.path.to_string(), "server.port");
        assert_eq!(err.expected, "Number");
        assert_eq!(err.actual, "String");
    }

    #[test]
    fn test_missing_subtree_fails_on_first_required_field() {
        let tree = RuleTree::new().field("server", RuleTree::new().field("host", string()));
        let err = tree.validate_value(&Value::object()).unwrap_err();
        assert_eq!(err.path.to_string(), "server.host");
        assert_eq!(err.actual, "Undefined");
    }

    #[test]
    fn test_empty_subtree_accepts_anything() {
        let tree = RuleTree::new().field("server", RuleTree::new());
        assert!(tree.validate_value(&Value::object()).is_ok());
        assert!(tree.validate_value(&config(vec![("server", Value::from(1))])).is_ok());
    }

    #[test]
    fn test_optional_only_subtree_accepts_absence() {
        let tree = RuleTree::new().field("tls", RuleTree::new().field("cert", optional(string())));
        assert!(tree.validate_value(&Value::object()).is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        let tree = RuleTree::new()
            .field("a", number())
            .field("b", choice(["x"]));
        let input = config(vec![("a", Value::from("nope")), ("b", Value::from("y"))]);

        let err = tree.validate_value(&input).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert_eq!(err.path.to_string(), "a");
    }

    #[test]
    fn test_rule_expected_descriptors() {
        assert_eq!(Rule::from(string()).expected(), "String");
        assert_eq!(Rule::Any.expected(), "Any");
        assert_eq!(Rule::from(RuleTree::new()).expected(), "Object");
        assert_eq!(Rule::from(choice(["a", "b"])).expected(), "'a', 'b'");
        assert_eq!(Rule::from(optional(boolean())).expected(), "Boolean");
    }

    #[test]
    fn test_from_iter() {
        let tree: RuleTree = [("name", string()), ("age", number())].into_iter().collect();
        assert_eq!(tree.len(), 2);
        assert!(tree.get("age").is_some());
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_rules_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Rule>();
        assert_send_sync::<RuleTree>();
        assert_send_sync::<ValidationError>();
    }
}
