use serde::Deserialize;
use std::collections::BTreeMap;

/// The JSON Schema `type` keyword: a single type name or a list of names.
///
/// `{"type": "string"}` and `{"type": ["array", "null"]}` are both valid
/// schema fragments; the untagged enum accepts either shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TypeKeyword {
    One(String),
    Many(Vec<String>),
}

impl TypeKeyword {
    /// Canonical form used for all type dispatch: a sorted list of type
    /// names, with a lone name becoming a one-element list.
    ///
    /// `["array", "null"]` and `["null", "array"]` canonicalize to the same
    /// key, and `["array"]` canonicalizes to the same key as `"array"`, so
    /// the rest of the generator never deals with a dual-shaped key space.
    #[must_use]
    pub fn canonical(&self) -> Vec<String> {
        match self {
            Self::One(name) => vec![name.clone()],
            Self::Many(names) => {
                let mut sorted: Vec<String> = names.clone();
                sorted.sort();
                sorted
            }
        }
    }
}

/// Root or nested JSON Schema node.
///
/// Only the keywords the generator interprets are modeled; extra keys in
/// the JSON are ignored via serde's default behavior. Uses `BTreeMap` for
/// deterministic property iteration (alphabetical by key); field order
/// never affects the generated fields, which are sorted at emission.
#[derive(Debug, Deserialize)]
pub struct SchemaNode {
    #[serde(default)]
    pub r#type: Option<TypeKeyword>,

    #[serde(default)]
    pub properties: Option<BTreeMap<String, Box<SchemaNode>>>,

    #[serde(default)]
    pub items: Option<Box<SchemaNode>>,

    #[serde(default, rename = "anyOf")]
    pub any_of: Option<Vec<SchemaNode>>,
}

impl SchemaNode {
    /// Canonical form of this node's `type`, if the keyword is present.
    #[must_use]
    pub fn canonical_type(&self) -> Option<Vec<String>> {
        self.r#type.as_ref().map(TypeKeyword::canonical)
    }

    /// True when the canonical type is exactly `object`.
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.canonical_type().as_deref().is_some_and(|t| t == ["object"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SchemaNode {
        serde_json::from_str(json).expect("schema should deserialize")
    }

    #[test]
    fn type_keyword_accepts_single_string() {
        let node: SchemaNode = parse(r#"{ "type": "string" }"#);
        let expected: Vec<String> = vec!["string".to_string()];
        assert_eq!(Some(expected), node.canonical_type());
    }

    #[test]
    fn type_keyword_accepts_list_of_strings() {
        let node: SchemaNode = parse(r#"{ "type": ["null", "array"] }"#);
        let expected: Vec<String> = vec!["array".to_string(), "null".to_string()];
        assert_eq!(Some(expected), node.canonical_type());
    }

    #[test]
    fn canonical_sorts_list_forms_identically() {
        let a: SchemaNode = parse(r#"{ "type": ["array", "null"] }"#);
        let b: SchemaNode = parse(r#"{ "type": ["null", "array"] }"#);
        assert_eq!(a.canonical_type(), b.canonical_type());
    }

    #[test]
    fn canonical_singleton_list_equals_scalar() {
        let scalar: SchemaNode = parse(r#"{ "type": "object" }"#);
        let list: SchemaNode = parse(r#"{ "type": ["object"] }"#);
        assert_eq!(scalar.canonical_type(), list.canonical_type());
        assert!(list.is_object());
    }

    #[test]
    fn missing_type_is_none() {
        let node: SchemaNode = parse(r#"{ "anyOf": [{ "type": "string" }] }"#);
        assert_eq!(None, node.canonical_type());
        assert!(!node.is_object());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let node: SchemaNode = parse(
            r#"{ "type": "object", "properties": {}, "title": "T", "required": ["x"] }"#,
        );
        assert!(node.is_object());
        assert!(node.properties.as_ref().is_some_and(BTreeMap::is_empty));
    }

    #[test]
    fn properties_iterate_alphabetically() {
        let node: SchemaNode = parse(
            r#"{
                "type": "object",
                "properties": {
                    "zeta": { "type": "string" },
                    "alpha": { "type": "integer" }
                }
            }"#,
        );
        let keys: Vec<&String> = node
            .properties
            .as_ref()
            .expect("properties should be present")
            .keys()
            .collect();
        assert_eq!(vec!["alpha", "zeta"], keys);
    }
}
