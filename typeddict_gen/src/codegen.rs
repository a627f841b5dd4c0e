use crate::error::TypedDictGenError;
use crate::json_pointer;
use crate::schema::SchemaNode;
use crate::settings::GenerateSettings;
use crate::validate;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::btree_map::Entry;
use std::io::Write;

/// Class name given to the root object schema.
const ROOT_CLASS_NAME: &str = "ResponseDict";

/// Candidate type expressions accumulated for one field.
///
/// Candidates are kept in registration order and never deduplicated: a
/// field fed the same annotation twice renders it twice in the union. The
/// first candidate is stored apart from the rest, so an annotation always
/// holds at least one candidate.
#[derive(Debug)]
struct Annotation {
    first: String,
    rest: Vec<String>,
}

impl Annotation {
    fn new(first: String) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    fn add(&mut self, candidate: String) {
        self.rest.push(candidate);
    }

    fn is_union(&self) -> bool {
        !self.rest.is_empty()
    }

    fn candidates(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.first.as_str()).chain(self.rest.iter().map(String::as_str))
    }

    /// Render for emission: a lone candidate verbatim, multiple candidates
    /// as a `Union[...]` over all of them in registration order.
    fn render(&self) -> String {
        if self.rest.is_empty() {
            self.first.clone()
        } else {
            let mut joined: String = self.first.clone();
            for candidate in &self.rest {
                joined.push_str(", ");
                joined.push_str(candidate);
            }
            format!("Union[{joined}]")
        }
    }
}

/// One generated `TypedDict` class, with its field annotations.
/// `BTreeMap` keeps fields sorted lexicographically for emission.
#[derive(Debug)]
struct RecordDef {
    name: String,
    fields: BTreeMap<String, Annotation>,
}

/// Python annotations for the directly-mapped JSON Schema scalar types,
/// keyed on the canonical (sorted) form of the `type` keyword.
fn primitive_annotation(canonical: &[String]) -> Option<&'static str> {
    match canonical {
        [single] => match single.as_str() {
            "string" => Some("str"),
            "integer" => Some("int"),
            "null" => Some("Optional[Any]"),
            "number" => Some("float"),
            "boolean" => Some("bool"),
            _ => None,
        },
        [first, second] if first == "array" && second == "null" => {
            Some("Union[List[Any], Optional[Any]]")
        }
        _ => None,
    }
}

/// Recursive descent over the schema tree, collecting one record per
/// object-typed node in discovery order. The finished list is reversed
/// before emission, so the newest discovery comes first and every record
/// referencing a nested class name is preceded by that class's declaration.
struct SchemaWalker {
    records: Vec<RecordDef>,
}

impl SchemaWalker {
    fn walk(
        &mut self,
        node: &SchemaNode,
        class_name: &str,
        parent: Option<(usize, &str)>,
        path: &str,
    ) -> Result<(), TypedDictGenError> {
        let canonical: Option<Vec<String>> = node.canonical_type();
        match canonical.as_deref() {
            Some([name]) if name == "object" => self.walk_object(node, class_name, path),
            Some([name]) if name == "array" => self.walk_array(node, class_name, parent, path),
            _ => self.walk_leaf(node, canonical.as_deref(), class_name, parent, path),
        }
    }

    fn walk_object(
        &mut self,
        node: &SchemaNode,
        class_name: &str,
        path: &str,
    ) -> Result<(), TypedDictGenError> {
        let Some(properties) = node.properties.as_ref() else {
            return Err(TypedDictGenError::MalformedSchema {
                path: path.to_string(),
                reason: "object node is missing \"properties\"".to_string(),
            });
        };
        let record_index: usize = self.records.len();
        self.records.push(RecordDef {
            name: class_name.to_string(),
            fields: BTreeMap::new(),
        });
        let properties_path: String = json_pointer::join(path, "properties");
        for (property_name, property_node) in properties {
            let child_name: String = format!("{class_name}_{property_name}");
            let property_path: String = json_pointer::join(&properties_path, property_name);
            // An object-typed property is represented by its own class; the
            // parent field references that class by name.
            if property_node.is_object() {
                self.register(
                    Some((record_index, property_name.as_str())),
                    &property_path,
                    child_name.clone(),
                )?;
            }
            self.walk(
                property_node,
                &child_name,
                Some((record_index, property_name.as_str())),
                &property_path,
            )?;
        }
        Ok(())
    }

    fn walk_array(
        &mut self,
        node: &SchemaNode,
        class_name: &str,
        parent: Option<(usize, &str)>,
        path: &str,
    ) -> Result<(), TypedDictGenError> {
        let Some(items) = node.items.as_ref() else {
            return self.register(parent, path, "List[Any]".to_string());
        };
        let items_canonical: Option<Vec<String>> = items.canonical_type();
        if let Some(primitive) = items_canonical.as_deref().and_then(primitive_annotation) {
            return self.register(parent, path, format!("List[{primitive}]"));
        }
        // Complex items: the element type is recorded under the current
        // class name, and the recursion fills that class in from `items`.
        self.register(parent, path, format!("List[{class_name}]"))?;
        self.walk(items, class_name, parent, &json_pointer::join(path, "items"))
    }

    fn walk_leaf(
        &mut self,
        node: &SchemaNode,
        canonical: Option<&[String]>,
        class_name: &str,
        parent: Option<(usize, &str)>,
        path: &str,
    ) -> Result<(), TypedDictGenError> {
        if let Some(alternatives) = node.any_of.as_ref() {
            let any_of_path: String = json_pointer::join(path, "anyOf");
            for (index, alternative) in alternatives.iter().enumerate() {
                let alternative_name: String = format!("{class_name}_{index}");
                let alternative_path: String = json_pointer::join(&any_of_path, &index.to_string());
                // Same representation as object-typed properties: the field
                // gains the alternative's class name as one more candidate.
                if alternative.is_object() {
                    self.register(parent, &alternative_path, alternative_name.clone())?;
                }
                self.walk(alternative, &alternative_name, parent, &alternative_path)?;
            }
            return Ok(());
        }
        let Some(canonical) = canonical else {
            return Err(TypedDictGenError::MalformedSchema {
                path: path.to_string(),
                reason: "leaf node has no \"type\" and no \"anyOf\"".to_string(),
            });
        };
        let Some(primitive) = primitive_annotation(canonical) else {
            return Err(TypedDictGenError::UnknownType {
                path: path.to_string(),
                type_key: canonical.join(", "),
            });
        };
        self.register(parent, path, primitive.to_string())
    }

    fn register(
        &mut self,
        parent: Option<(usize, &str)>,
        path: &str,
        candidate: String,
    ) -> Result<(), TypedDictGenError> {
        let Some((record_index, field_name)) = parent else {
            return Err(TypedDictGenError::MalformedSchema {
                path: path.to_string(),
                reason: "no enclosing record to annotate".to_string(),
            });
        };
        match self.records[record_index].fields.entry(field_name.to_string()) {
            Entry::Occupied(mut occupied) => occupied.get_mut().add(candidate),
            Entry::Vacant(vacant) => {
                vacant.insert(Annotation::new(candidate));
            }
        }
        Ok(())
    }
}

/// Convert a parsed schema tree into record definitions in emission order.
fn convert(schema: &SchemaNode) -> Result<Vec<RecordDef>, TypedDictGenError> {
    if !schema.is_object() {
        return Err(TypedDictGenError::MalformedSchema {
            path: String::new(),
            reason: "root schema must have type \"object\"".to_string(),
        });
    }
    let mut walker = SchemaWalker {
        records: Vec::new(),
    };
    walker.walk(schema, ROOT_CLASS_NAME, None, "")?;
    let mut records: Vec<RecordDef> = walker.records;
    // Discovery appends at the tail; reversing yields the head-insertion
    // order where nested classes precede the classes that reference them.
    records.reverse();
    Ok(records)
}

/// The single `from typing import ...` line for the generated module.
/// `TypedDict` is always needed; the other names only when some annotation
/// uses them.
fn typing_import_line(records: &[RecordDef]) -> String {
    let mut names: BTreeSet<&'static str> = BTreeSet::new();
    names.insert("TypedDict");
    for record in records {
        for annotation in record.fields.values() {
            if annotation.is_union() {
                names.insert("Union");
            }
            for candidate in annotation.candidates() {
                if candidate.contains("Any]") {
                    names.insert("Any");
                }
                if candidate.contains("List[") {
                    names.insert("List");
                }
                if candidate.contains("Optional[") {
                    names.insert("Optional");
                }
                if candidate.contains("Union[") {
                    names.insert("Union");
                }
            }
        }
    }
    let joined: Vec<&str> = names.into_iter().collect();
    format!("from typing import {}", joined.join(", "))
}

/// Emit the generated Python module: header, imports, then one class per
/// record with fields sorted by name. A record without fields gets a `pass`
/// body so the output stays valid Python.
fn emit_records<W: Write>(records: &[RecordDef], writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "# Generated by typeddict-gen. Do not edit manually.")?;
    writeln!(writer)?;
    writeln!(writer, "{}", typing_import_line(records))?;
    writeln!(writer)?;
    writeln!(writer)?;
    for record in records {
        writeln!(writer, "class {}(TypedDict):", record.name)?;
        if record.fields.is_empty() {
            writeln!(writer, "    pass")?;
        }
        for (field_name, annotation) in &record.fields {
            writeln!(writer, "    {field_name}: {}", annotation.render())?;
        }
        writeln!(writer)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Generate Python `TypedDict` source from a JSON Schema string and write
/// it to `writer`. Nothing is written until the whole traversal succeeds.
///
/// # Errors
///
/// Returns `TypedDictGenError` if the input is not valid JSON, strict
/// validation (when enabled) finds issues, the traversal hits a malformed
/// or unknown node, or writing fails.
pub fn generate_to_writer<W: Write>(
    schema_json: &str,
    writer: &mut W,
    settings: &GenerateSettings,
) -> Result<(), TypedDictGenError> {
    let raw: serde_json::Value = serde_json::from_str(schema_json)?;
    if settings.deny_unsupported_schema {
        validate::validate_schema(&raw)?;
    }
    let schema: SchemaNode = serde_json::from_value(raw)?;
    let records: Vec<RecordDef> = convert(&schema)?;
    emit_records(&records, writer)?;
    Ok(())
}
