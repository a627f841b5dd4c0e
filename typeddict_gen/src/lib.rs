//! Generate Python `TypedDict` declarations from JSON Schema.
//!
//! The generator interprets the `type`, `properties`, `items`, and `anyOf`
//! keywords, emitting one `class <Name>(TypedDict):` block per object type
//! encountered in the schema. Nested object types are declared before the
//! classes that reference them.

mod codegen;
mod error;
mod json_pointer;
mod schema;
mod settings;
mod validate;

pub use error::{
    SchemaValidationError, SchemaValidationIssue, SchemaValidationIssueKind, TypedDictGenError,
};
pub use schema::{SchemaNode, TypeKeyword};
pub use settings::GenerateSettings;

use std::io::Write;
use std::path::Path;

/// Generate Python `TypedDict` declarations from a JSON Schema string and
/// write the source to `writer`.
///
/// The writer can be any type implementing `Write`, such as `File`,
/// `Vec<u8>`, or `Cursor<Vec<u8>>`, enabling easy unit testing without file
/// system interaction. Nothing is written unless the whole conversion
/// succeeds.
///
/// # Errors
///
/// Returns `TypedDictGenError` if the schema JSON is invalid, the root is
/// not an object, the tree contains an unknown or malformed node, strict
/// validation (when enabled in `settings`) finds issues, or writing to the
/// writer fails.
pub fn generate_to_writer<W: Write>(
    schema_json: &str,
    writer: &mut W,
    settings: &GenerateSettings,
) -> Result<(), TypedDictGenError> {
    codegen::generate_to_writer(schema_json, writer, settings)
}

/// Generate Python `TypedDict` declarations from a JSON Schema file and
/// write them to an output file.
///
/// # Errors
///
/// Returns `TypedDictGenError` if reading the input file fails, the schema
/// is invalid or malformed, or writing to the output file fails.
pub fn generate_from_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    settings: &GenerateSettings,
) -> Result<(), TypedDictGenError> {
    let schema_json: String = std::fs::read_to_string(input_path)?;
    let mut output_file: std::fs::File = std::fs::File::create(output_path)?;
    generate_to_writer(&schema_json, &mut output_file, settings)
}
