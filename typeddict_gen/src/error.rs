use std::error;
use std::fmt;

/// Error type for `TypedDict` code generation operations.
#[derive(Debug)]
pub enum TypedDictGenError {
    /// A node violates the structural expectations of the walker, e.g. an
    /// object node without `properties` or a non-object root.
    MalformedSchema {
        /// JSON Pointer to the offending node (empty for the root).
        path: String,
        reason: String,
    },

    /// A scalar node's `type` matches none of the recognized primitives and
    /// the node carries no `anyOf` fallback.
    UnknownType {
        /// JSON Pointer to the offending node.
        path: String,
        /// The canonical type key that failed the lookup.
        type_key: String,
    },

    /// I/O error (e.g., reading the schema file, writing generated source).
    IoError(std::io::Error),

    /// JSON parsing error.
    JsonError(serde_json::Error),

    /// Schema validation failed in `deny_unsupported_schema` mode.
    ValidationError(SchemaValidationError),
}

impl error::Error for TypedDictGenError {}

impl fmt::Display for TypedDictGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedSchema { path, reason } => {
                write!(f, "malformed schema at {}: {reason}", display_path(path))
            }
            Self::UnknownType { path, type_key } => {
                write!(
                    f,
                    "unknown schema type \"{type_key}\" at {}",
                    display_path(path)
                )
            }
            Self::IoError(io_error) => fmt::Display::fmt(io_error, f),
            Self::JsonError(json_error) => fmt::Display::fmt(json_error, f),
            Self::ValidationError(validation_error) => fmt::Display::fmt(validation_error, f),
        }
    }
}

impl From<std::io::Error> for TypedDictGenError {
    fn from(io_error: std::io::Error) -> Self {
        Self::IoError(io_error)
    }
}

impl From<serde_json::Error> for TypedDictGenError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::JsonError(json_error)
    }
}

impl From<SchemaValidationError> for TypedDictGenError {
    fn from(validation_error: SchemaValidationError) -> Self {
        Self::ValidationError(validation_error)
    }
}

/// An empty JSON Pointer addresses the whole document.
fn display_path(path: &str) -> &str {
    if path.is_empty() { "schema root" } else { path }
}

/// All issues collected by a strict-mode validation pass.
#[derive(Debug)]
pub struct SchemaValidationError {
    pub issues: Vec<SchemaValidationIssue>,
}

impl error::Error for SchemaValidationError {}

impl fmt::Display for SchemaValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "schema validation failed with {} issue(s):",
            self.issues.len()
        )?;
        for issue in &self.issues {
            write!(f, "\n  {issue}")?;
        }
        Ok(())
    }
}

/// One validation finding, tagged with the JSON Pointer of the node it was
/// found on.
#[derive(Debug)]
pub struct SchemaValidationIssue {
    pub path: String,
    pub kind: SchemaValidationIssueKind,
}

impl fmt::Display for SchemaValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", display_path(&self.path), self.kind)
    }
}

/// What a single validation issue is about.
#[derive(Debug, PartialEq, Eq)]
pub enum SchemaValidationIssueKind {
    RootNotObject,
    RootMissingType,
    InvalidTypeValue,
    /// A `type` whose canonical form maps to no known annotation.
    UnknownScalarType(String),
    ObjectMissingProperties,
    InvalidPropertiesFormat,
    InvalidItemsFormat,
    InvalidAnyOfFormat,
    AnyOfEmpty,
    UnsupportedKeywordRef,
    UnsupportedKeywordDefs,
    UnsupportedKeywordDefinitions,
    UnsupportedKeywordId,
    UnsupportedKeywordOneOf,
    UnsupportedKeywordAllOf,
    UnsupportedKeywordNot,
    UnsupportedKeywordEnum,
    UnsupportedKeywordConst,
    UnsupportedKeywordRequired,
    UnsupportedKeywordFormat,
    UnsupportedKeywordDefault,
    UnsupportedKeywordAdditionalProperties,
    UnsupportedKeywordPattern,
    UnsupportedKeywordMinimum,
    UnsupportedKeywordMaximum,
    UnsupportedKeywordMinLength,
    UnsupportedKeywordMaxLength,
    UnsupportedKeywordMinItems,
    UnsupportedKeywordMaxItems,
    UnsupportedKeywordUniqueItems,
    UnsupportedKeywordExamples,
    /// A keyword that is neither recognized nor on the unsupported list.
    UnknownKeyword(String),
}

impl fmt::Display for SchemaValidationIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotObject => write!(f, "root schema must be an object with type \"object\""),
            Self::RootMissingType => write!(f, "root schema is missing \"type\""),
            Self::InvalidTypeValue => write!(f, "\"type\" must be a string or an array of strings"),
            Self::UnknownScalarType(name) => {
                write!(f, "type \"{name}\" maps to no known annotation")
            }
            Self::ObjectMissingProperties => write!(f, "object schema is missing \"properties\""),
            Self::InvalidPropertiesFormat => write!(f, "\"properties\" must be an object"),
            Self::InvalidItemsFormat => write!(f, "\"items\" must be a schema object"),
            Self::InvalidAnyOfFormat => write!(f, "\"anyOf\" must be an array of schema objects"),
            Self::AnyOfEmpty => write!(f, "\"anyOf\" must not be empty"),
            Self::UnsupportedKeywordRef => write!(f, "\"$ref\" is not supported"),
            Self::UnsupportedKeywordDefs => write!(f, "\"$defs\" is not supported"),
            Self::UnsupportedKeywordDefinitions => write!(f, "\"definitions\" is not supported"),
            Self::UnsupportedKeywordId => write!(f, "\"$id\" is not supported"),
            Self::UnsupportedKeywordOneOf => write!(f, "\"oneOf\" is not supported"),
            Self::UnsupportedKeywordAllOf => write!(f, "\"allOf\" is not supported"),
            Self::UnsupportedKeywordNot => write!(f, "\"not\" is not supported"),
            Self::UnsupportedKeywordEnum => write!(f, "\"enum\" is not supported"),
            Self::UnsupportedKeywordConst => write!(f, "\"const\" is not supported"),
            Self::UnsupportedKeywordRequired => write!(f, "\"required\" is not supported"),
            Self::UnsupportedKeywordFormat => write!(f, "\"format\" is not supported"),
            Self::UnsupportedKeywordDefault => write!(f, "\"default\" is not supported"),
            Self::UnsupportedKeywordAdditionalProperties => {
                write!(f, "\"additionalProperties\" is not supported")
            }
            Self::UnsupportedKeywordPattern => write!(f, "\"pattern\" is not supported"),
            Self::UnsupportedKeywordMinimum => write!(f, "\"minimum\" is not supported"),
            Self::UnsupportedKeywordMaximum => write!(f, "\"maximum\" is not supported"),
            Self::UnsupportedKeywordMinLength => write!(f, "\"minLength\" is not supported"),
            Self::UnsupportedKeywordMaxLength => write!(f, "\"maxLength\" is not supported"),
            Self::UnsupportedKeywordMinItems => write!(f, "\"minItems\" is not supported"),
            Self::UnsupportedKeywordMaxItems => write!(f, "\"maxItems\" is not supported"),
            Self::UnsupportedKeywordUniqueItems => write!(f, "\"uniqueItems\" is not supported"),
            Self::UnsupportedKeywordExamples => write!(f, "\"examples\" is not supported"),
            Self::UnknownKeyword(keyword) => write!(f, "unknown keyword \"{keyword}\""),
        }
    }
}
