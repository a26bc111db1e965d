//! URI Template variables and expansion.
//!
//! # Responsibilities
//! - Hold the variable mapping supplied at lookup time
//! - Hand templates to the RFC 6570 expander (`iri-string`)
//!
//! # Design Decisions
//! - Variables are ordered by name so debug output is deterministic
//! - Unsupplied variables are left undefined (RFC 6570 omits them)
//! - Rejected templates surface as `RouteError::Template`, never a panic
//! - Non-ASCII literals are percent-encoded before parsing; the expander
//!   only accepts ASCII literals, and RFC 6570 encodes them in the output

use std::borrow::Cow;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use iri_string::spec::UriSpec;
use iri_string::template::simple_context::{SimpleContext, Value};
use iri_string::template::UriTemplateStr;

use crate::routing::types::{RouteError, RouteResult};

/// A single template variable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarValue {
    String(String),
    List(Vec<String>),
    Assoc(Vec<(String, String)>),
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for VarValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for VarValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for VarValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<(String, String)>> for VarValue {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::Assoc(pairs)
    }
}

impl From<&VarValue> for Value {
    fn from(value: &VarValue) -> Self {
        match value {
            VarValue::String(s) => Value::String(s.clone()),
            VarValue::List(items) => Value::List(items.clone()),
            VarValue::Assoc(pairs) => Value::Assoc(pairs.clone()),
        }
    }
}

/// Variables supplied to a templated route at expansion time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    values: BTreeMap<String, VarValue>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Variables::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<VarValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a variable, returning the value it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<VarValue>,
    ) -> Option<VarValue> {
        self.values.insert(name.into(), value.into())
    }

    /// Append a string value. A repeated name turns the variable into a list.
    ///
    /// Returns `false` and leaves the variable untouched if it already holds
    /// an associative value, which has no slot for a bare string.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let value = value.into();
        match self.values.entry(name.into()) {
            Entry::Vacant(slot) => {
                slot.insert(VarValue::String(value));
            }
            Entry::Occupied(mut slot) => {
                let merged = match slot.get_mut() {
                    VarValue::List(items) => {
                        items.push(value);
                        return true;
                    }
                    VarValue::String(first) => VarValue::List(vec![std::mem::take(first), value]),
                    VarValue::Assoc(_) => return false,
                };
                slot.insert(merged);
            }
        }
        true
    }

    pub fn get(&self, name: &str) -> Option<&VarValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VarValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn to_context(&self) -> SimpleContext {
        let mut context = SimpleContext::new();
        for (name, value) in &self.values {
            context.insert(name.clone(), Value::from(value));
        }
        context
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<String>,
    V: Into<VarValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut variables = Self::new();
        for (name, value) in iter {
            variables.insert(name, value);
        }
        variables
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Variables
where
    K: Into<String>,
    V: Into<VarValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Percent-encode non-ASCII characters outside `{...}` expressions.
fn encode_literals(template: &str) -> Cow<'_, str> {
    if template.is_ascii() {
        return Cow::Borrowed(template);
    }

    let mut encoded = String::with_capacity(template.len() * 3);
    let mut in_expression = false;
    let mut buf = [0u8; 4];
    for ch in template.chars() {
        match ch {
            '{' => in_expression = true,
            '}' => in_expression = false,
            _ => {}
        }
        if in_expression || ch.is_ascii() {
            encoded.push(ch);
        } else {
            encoded.push_str(&urlencoding::encode(ch.encode_utf8(&mut buf)));
        }
    }
    Cow::Owned(encoded)
}

/// Expand an RFC 6570 template with the given variables.
pub fn expand(template: &str, variables: &Variables) -> RouteResult<String> {
    let to_error = |source: iri_string::template::Error| RouteError::Template {
        template: template.to_string(),
        source,
    };

    let literal_safe = encode_literals(template);
    let parsed = UriTemplateStr::new(&literal_safe).map_err(to_error)?;
    let context = variables.to_context();
    let expanded = parsed.expand::<UriSpec, _>(&context).map_err(to_error)?;

    Ok(expanded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_optional_query() {
        let vars = Variables::new().with("q", "search-term");
        assert_eq!(
            expand("http://example.com/search{?q}", &vars).unwrap(),
            "http://example.com/search?q=search-term"
        );
        assert_eq!(
            expand("http://example.com/search{?q}", &Variables::new()).unwrap(),
            "http://example.com/search"
        );
    }

    #[test]
    fn test_expand_ignores_unknown_variables() {
        let vars = Variables::from([("id", "42"), ("unused", "x")]);
        assert_eq!(expand("/users/{id}", &vars).unwrap(), "/users/42");
    }

    #[test]
    fn test_expand_encodes_values() {
        let vars = Variables::new().with("q", "two words");
        assert_eq!(expand("/search{?q}", &vars).unwrap(), "/search?q=two%20words");
    }

    #[test]
    fn test_expand_list_value() {
        let vars = Variables::new().with("tags", vec!["a", "b"]);
        assert_eq!(expand("/items{?tags}", &vars).unwrap(), "/items?tags=a,b");
    }

    #[test]
    fn test_expand_rejects_unclosed_expression() {
        let err = expand("/search{?q", &Variables::new()).unwrap_err();
        assert!(matches!(
            err,
            RouteError::Template { ref template, .. } if template == "/search{?q"
        ));
    }

    #[test]
    fn test_expand_non_ascii_literal() {
        let vars = Variables::new().with("q", "x");
        assert_eq!(expand("/ü{?q}", &vars).unwrap(), "/%C3%BC?q=x");
        let vars = Variables::from([("id", "1")]);
        assert_eq!(expand("/café/{id}", &vars).unwrap(), "/caf%C3%A9/1");
    }

    #[test]
    fn test_encode_literals_leaves_ascii_borrowed() {
        assert!(matches!(encode_literals("/search{?q}"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_push_onto_assoc_is_refused() {
        let pairs = vec![("a".to_string(), "1".to_string())];
        let mut vars = Variables::new().with("k", pairs.clone());

        assert!(!vars.push("k", "x"));
        assert_eq!(vars.get("k"), Some(&VarValue::Assoc(pairs)));
    }

    #[test]
    fn test_push_promotes_to_list() {
        let mut vars = Variables::new();
        vars.push("tag", "a");
        assert_eq!(vars.get("tag"), Some(&VarValue::String("a".into())));

        vars.push("tag", "b");
        vars.push("tag", "c");
        assert_eq!(
            vars.get("tag"),
            Some(&VarValue::List(vec!["a".into(), "b".into(), "c".into()]))
        );
    }
}
