//! Schema validation for `deny_unsupported_schema` mode.
//!
//! Walks the raw JSON Schema (as `serde_json::Value`) and collects all
//! invalid/unsupported issues without panicking.

use crate::error::{SchemaValidationError, SchemaValidationIssue, SchemaValidationIssueKind};
use crate::json_pointer;
use std::collections::BTreeSet;

/// Keywords the generator interprets, plus metadata keys it knowingly
/// ignores. Keys not in this set and not on the unsupported list are
/// reported as `UnknownKeyword`.
const KNOWN_KEYWORDS: &[&str] = &[
    "$schema",
    "title",
    "description",
    "type",
    "properties",
    "items",
    "anyOf",
];

fn known_keywords_set() -> BTreeSet<&'static str> {
    KNOWN_KEYWORDS.iter().copied().collect()
}

/// Maps unsupported keyword name to issue kind.
fn unsupported_kind(key: &str) -> Option<SchemaValidationIssueKind> {
    let kind = match key {
        "$ref" => SchemaValidationIssueKind::UnsupportedKeywordRef,
        "$defs" => SchemaValidationIssueKind::UnsupportedKeywordDefs,
        "definitions" => SchemaValidationIssueKind::UnsupportedKeywordDefinitions,
        "$id" => SchemaValidationIssueKind::UnsupportedKeywordId,
        "oneOf" => SchemaValidationIssueKind::UnsupportedKeywordOneOf,
        "allOf" => SchemaValidationIssueKind::UnsupportedKeywordAllOf,
        "not" => SchemaValidationIssueKind::UnsupportedKeywordNot,
        "enum" => SchemaValidationIssueKind::UnsupportedKeywordEnum,
        "const" => SchemaValidationIssueKind::UnsupportedKeywordConst,
        "required" => SchemaValidationIssueKind::UnsupportedKeywordRequired,
        "format" => SchemaValidationIssueKind::UnsupportedKeywordFormat,
        "default" => SchemaValidationIssueKind::UnsupportedKeywordDefault,
        "additionalProperties" => {
            SchemaValidationIssueKind::UnsupportedKeywordAdditionalProperties
        }
        "pattern" => SchemaValidationIssueKind::UnsupportedKeywordPattern,
        "minimum" => SchemaValidationIssueKind::UnsupportedKeywordMinimum,
        "maximum" => SchemaValidationIssueKind::UnsupportedKeywordMaximum,
        "minLength" => SchemaValidationIssueKind::UnsupportedKeywordMinLength,
        "maxLength" => SchemaValidationIssueKind::UnsupportedKeywordMaxLength,
        "minItems" => SchemaValidationIssueKind::UnsupportedKeywordMinItems,
        "maxItems" => SchemaValidationIssueKind::UnsupportedKeywordMaxItems,
        "uniqueItems" => SchemaValidationIssueKind::UnsupportedKeywordUniqueItems,
        "examples" => SchemaValidationIssueKind::UnsupportedKeywordExamples,
        _ => return None,
    };
    Some(kind)
}

/// Types the walker can dispatch on: the five scalar primitives plus the
/// two structural types.
const RECOGNIZED_TYPES: &[&str] = &[
    "string", "integer", "null", "number", "boolean", "object", "array",
];

/// Canonical (sorted-list) form of a raw `type` value, or `None` when the
/// value is not a string or an array of strings.
fn canonical_of(value: &serde_json::Value) -> Option<Vec<String>> {
    match value {
        serde_json::Value::String(name) => Some(vec![name.clone()]),
        serde_json::Value::Array(parts) => {
            let mut names: Vec<String> = Vec::with_capacity(parts.len());
            for part in parts {
                names.push(part.as_str()?.to_string());
            }
            names.sort();
            Some(names)
        }
        _ => None,
    }
}

/// Validates the schema (parsed as `Value`). Returns `Ok(())` if no issues,
/// or `Err(SchemaValidationError)` with all collected issues.
///
/// # Errors
///
/// Returns every issue found anywhere in the tree, each tagged with the
/// JSON Pointer of the node it was found on.
pub fn validate_schema(value: &serde_json::Value) -> Result<(), SchemaValidationError> {
    let mut issues: Vec<SchemaValidationIssue> = Vec::new();
    let known: BTreeSet<&'static str> = known_keywords_set();

    let Some(root) = value.as_object() else {
        issues.push(SchemaValidationIssue {
            path: String::new(),
            kind: SchemaValidationIssueKind::RootNotObject,
        });
        return Err(SchemaValidationError { issues });
    };

    // Root-level checks
    match root.get("type") {
        None => issues.push(SchemaValidationIssue {
            path: String::new(),
            kind: SchemaValidationIssueKind::RootMissingType,
        }),
        Some(type_value) => {
            if let Some(canonical) = canonical_of(type_value)
                && canonical != ["object"]
            {
                issues.push(SchemaValidationIssue {
                    path: String::new(),
                    kind: SchemaValidationIssueKind::RootNotObject,
                });
            }
        }
    }

    collect_issues(value, "", &mut issues, &known);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(SchemaValidationError { issues })
    }
}

fn push_issue(issues: &mut Vec<SchemaValidationIssue>, path: &str, kind: SchemaValidationIssueKind) {
    issues.push(SchemaValidationIssue {
        path: path.to_string(),
        kind,
    });
}

fn collect_issues(
    value: &serde_json::Value,
    path: &str,
    issues: &mut Vec<SchemaValidationIssue>,
    known: &BTreeSet<&'static str>,
) {
    let Some(obj) = value.as_object() else {
        return;
    };

    let canonical: Option<Vec<String>> = obj.get("type").and_then(canonical_of);
    let has_any_of: bool = obj.contains_key("anyOf");

    // The walker requires "properties" on every object-typed node.
    if canonical.as_deref().is_some_and(|c| c == ["object"]) && !obj.contains_key("properties") {
        push_issue(issues, path, SchemaValidationIssueKind::ObjectMissingProperties);
    }

    for (key, val) in obj {
        let key_path: String = json_pointer::join(path, key);

        if known.contains(key.as_str()) {
            match key.as_str() {
                "type" => validate_type(val, has_any_of, &key_path, issues),
                "properties" => {
                    if let Some(properties) = val.as_object() {
                        for (property_name, property_schema) in properties {
                            let property_path: String =
                                json_pointer::join(&key_path, property_name);
                            collect_issues(property_schema, &property_path, issues, known);
                        }
                    } else {
                        push_issue(
                            issues,
                            &key_path,
                            SchemaValidationIssueKind::InvalidPropertiesFormat,
                        );
                    }
                }
                "items" => {
                    if val.is_object() {
                        collect_issues(val, &key_path, issues, known);
                    } else {
                        push_issue(issues, &key_path, SchemaValidationIssueKind::InvalidItemsFormat);
                    }
                }
                "anyOf" => {
                    if let Some(alternatives) = val.as_array() {
                        if alternatives.is_empty() {
                            push_issue(issues, &key_path, SchemaValidationIssueKind::AnyOfEmpty);
                        }
                        for (index, alternative) in alternatives.iter().enumerate() {
                            let alternative_path: String =
                                json_pointer::join(&key_path, &index.to_string());
                            if alternative.is_object() {
                                collect_issues(alternative, &alternative_path, issues, known);
                            } else {
                                push_issue(
                                    issues,
                                    &alternative_path,
                                    SchemaValidationIssueKind::InvalidAnyOfFormat,
                                );
                            }
                        }
                    } else {
                        push_issue(issues, &key_path, SchemaValidationIssueKind::InvalidAnyOfFormat);
                    }
                }
                _ => {}
            }
        } else if let Some(kind) = unsupported_kind(key) {
            push_issue(issues, &key_path, kind);
        } else {
            push_issue(
                issues,
                &key_path,
                SchemaValidationIssueKind::UnknownKeyword(key.clone()),
            );
        }
    }
}

fn validate_type(
    value: &serde_json::Value,
    has_any_of: bool,
    path: &str,
    issues: &mut Vec<SchemaValidationIssue>,
) {
    let Some(canonical) = canonical_of(value) else {
        push_issue(issues, path, SchemaValidationIssueKind::InvalidTypeValue);
        return;
    };
    let recognized: bool = match canonical.as_slice() {
        [single] => RECOGNIZED_TYPES.contains(&single.as_str()),
        [first, second] => first == "array" && second == "null",
        _ => false,
    };
    // With an anyOf present the walker never consults this node's type.
    if !recognized && !has_any_of {
        push_issue(
            issues,
            path,
            SchemaValidationIssueKind::UnknownScalarType(canonical.join(", ")),
        );
    }
}
