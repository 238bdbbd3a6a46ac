//! Macros for building rule trees with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rules!`]: build a [`RuleTree`](crate::rule::RuleTree) from `field: rule` pairs
//!
//! # Examples
//!
//! ```
//! use rc_validator::prelude::*;
//!
//! let rules = rules! {
//!     name: string(),
//!     "log-level": choice(["debug", "info", "warn"]),
//!     branch: optional(rules! { inside: boolean() }),
//! };
//!
//! let names: Vec<_> = rules.iter().map(|(name, _)| name).collect();
//! assert_eq!(names, ["name", "log-level", "branch"]);
//! ```

// ============================================================================
// RULES MACRO
// ============================================================================

/// Builds a [`RuleTree`](crate::rule::RuleTree) in declaration order.
///
/// Keys are identifiers or string literals; values are any expression that
/// converts into a [`Rule`](crate::rule::Rule), including a nested
/// `rules! { ... }`.
///
/// ```
/// use rc_validator::prelude::*;
///
/// let empty = rules! {};
/// assert!(empty.is_empty());
///
/// let server = rules! {
///     host: string(),
///     port: number(),
///     tls: optional(rules! { cert: string(), key: string() }),
/// };
/// assert_eq!(server.len(), 3);
/// ```
#[macro_export]
macro_rules! rules {
    () => {
        $crate::rule::RuleTree::new()
    };
    ($($key:tt : $rule:expr),+ $(,)?) => {{
        let mut tree = $crate::rule::RuleTree::new();
        $(
            tree.insert($crate::__rule_key!($key), $rule);
        )+
        tree
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rule_key {
    ($key:ident) => {
        stringify!($key)
    };
    ($key:literal) => {
        $key
    };
}
