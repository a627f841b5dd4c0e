//! Full-featured example matching the README: every supported schema feature.
//! See [README Examples](../README.md#examples).
//!
//! Contains only the input JSON Schema and the conversion call; generated
//! Python is written to stdout.

use std::io;

const SCHEMA_JSON: &str = r#"{
  "type": "object",
  "properties": {
    "active": { "type": "boolean" },
    "attachments": { "type": "array" },
    "id": { "type": "integer" },
    "location": {
      "type": "object",
      "properties": {
        "latitude": { "type": "number" },
        "longitude": { "type": "number" }
      }
    },
    "name": { "anyOf": [{ "type": "string" }, { "type": "null" }] },
    "reviews": {
      "type": "array",
      "items": {
        "type": "object",
        "properties": {
          "score": { "type": "number" },
          "text": { "type": "string" }
        }
      }
    },
    "tags": { "type": "array", "items": { "type": "string" } },
    "waypoints": { "type": ["array", "null"] }
  }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout: io::Stdout = io::stdout();
    let settings = typeddict_gen::GenerateSettings::default();
    typeddict_gen::generate_to_writer(SCHEMA_JSON, &mut stdout, &settings)?;
    Ok(())
}
