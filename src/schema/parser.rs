//! Parser for JSON schema definitions
//!
//! Accepts the Avro-style definition format:
//! - primitive type names as JSON strings (`"string"`, `"long"`, ...)
//! - complex types as JSON objects (`{"type": "record", ...}`)
//! - unions as JSON arrays of branch definitions
//! - references to previously defined named types by name
//!
//! Schemas are assumed acyclic at the record-nesting level; a named type can
//! only be referenced after its definition has been seen.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult};
use super::types::{Field, RecordSchema, Schema};

/// Parses a schema definition from a JSON string.
pub fn parse_str(input: &str) -> SchemaResult<Schema> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| SchemaError::Malformed(format!("invalid JSON: {}", e)))?;
    parse_value(&value)
}

/// Parses a schema definition from an already-decoded JSON value.
pub fn parse_value(value: &Value) -> SchemaResult<Schema> {
    Parser::default().parse(value)
}

/// Definition parser holding the table of named types seen so far.
#[derive(Default)]
struct Parser {
    named: HashMap<String, Schema>,
}

impl Parser {
    fn parse(&mut self, value: &Value) -> SchemaResult<Schema> {
        match value {
            Value::String(name) => self.resolve_name(name),
            Value::Array(branches) => self.parse_union(branches),
            Value::Object(obj) => self.parse_complex(obj),
            other => Err(SchemaError::Malformed(format!(
                "schema must be a string, array, or object, got {}",
                json_kind(other)
            ))),
        }
    }

    /// Resolves a primitive type name or a reference to a named type.
    fn resolve_name(&self, name: &str) -> SchemaResult<Schema> {
        match name {
            "null" => Ok(Schema::Null),
            "boolean" => Ok(Schema::Boolean),
            "int" => Ok(Schema::Int),
            "long" => Ok(Schema::Long),
            "float" => Ok(Schema::Float),
            "double" => Ok(Schema::Double),
            "bytes" => Ok(Schema::Bytes),
            "string" => Ok(Schema::String),
            other => self
                .named
                .get(other)
                .cloned()
                .ok_or_else(|| SchemaError::UnknownType(other.to_string())),
        }
    }

    fn parse_union(&mut self, branches: &[Value]) -> SchemaResult<Schema> {
        if branches.is_empty() {
            return Err(SchemaError::Malformed(
                "union must have at least one branch".into(),
            ));
        }
        let mut members = Vec::with_capacity(branches.len());
        for branch in branches {
            members.push(self.parse(branch)?);
        }
        Ok(Schema::Union(members))
    }

    fn parse_complex(&mut self, obj: &Map<String, Value>) -> SchemaResult<Schema> {
        let type_name = obj
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| SchemaError::Malformed("missing 'type' attribute".into()))?;

        match type_name {
            "record" => self.parse_record(obj),
            "enum" => self.parse_enum(obj),
            "fixed" => self.parse_fixed(obj),
            "array" => {
                let items = obj.get("items").ok_or_else(|| {
                    SchemaError::Malformed("array requires an 'items' attribute".into())
                })?;
                Ok(Schema::Array(Box::new(self.parse(items)?)))
            }
            "map" => {
                let values = obj.get("values").ok_or_else(|| {
                    SchemaError::Malformed("map requires a 'values' attribute".into())
                })?;
                Ok(Schema::Map(Box::new(self.parse(values)?)))
            }
            // {"type": "string"} style wrapping of a primitive or reference
            other => self.resolve_name(other),
        }
    }

    fn parse_record(&mut self, obj: &Map<String, Value>) -> SchemaResult<Schema> {
        let name = required_name(obj, "record")?;
        let declared = obj
            .get("fields")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                SchemaError::Malformed(format!("record '{}' requires a 'fields' array", name))
            })?;

        let mut fields: Vec<Field> = Vec::with_capacity(declared.len());
        for field_value in declared {
            let field_obj = field_value.as_object().ok_or_else(|| {
                SchemaError::Malformed(format!("field of record '{}' must be an object", name))
            })?;
            let field_name = field_obj
                .get("name")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    SchemaError::Malformed(format!("field of record '{}' requires a name", name))
                })?;
            if fields.iter().any(|f| f.name == field_name) {
                return Err(SchemaError::DuplicateField {
                    record: name,
                    field: field_name.to_string(),
                });
            }
            let field_type = field_obj.get("type").ok_or_else(|| {
                SchemaError::Malformed(format!(
                    "field '{}' of record '{}' requires a type",
                    field_name, name
                ))
            })?;
            fields.push(Field::new(field_name, self.parse(field_type)?));
        }

        let schema = Schema::Record(RecordSchema::new(name.clone(), fields));
        self.define(name, schema.clone())?;
        Ok(schema)
    }

    fn parse_enum(&mut self, obj: &Map<String, Value>) -> SchemaResult<Schema> {
        let name = required_name(obj, "enum")?;
        let declared = obj
            .get("symbols")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                SchemaError::Malformed(format!("enum '{}' requires a 'symbols' array", name))
            })?;

        let mut symbols: Vec<String> = Vec::with_capacity(declared.len());
        for symbol in declared {
            let symbol = symbol.as_str().ok_or_else(|| {
                SchemaError::Malformed(format!("enum '{}' symbols must be strings", name))
            })?;
            if symbols.iter().any(|s| s == symbol) {
                return Err(SchemaError::Malformed(format!(
                    "enum '{}' has duplicate symbol '{}'",
                    name, symbol
                )));
            }
            symbols.push(symbol.to_string());
        }

        let schema = Schema::Enum {
            name: name.clone(),
            symbols,
        };
        self.define(name, schema.clone())?;
        Ok(schema)
    }

    fn parse_fixed(&mut self, obj: &Map<String, Value>) -> SchemaResult<Schema> {
        let name = required_name(obj, "fixed")?;
        let size = obj.get("size").and_then(Value::as_u64).ok_or_else(|| {
            SchemaError::Malformed(format!("fixed '{}' requires a non-negative 'size'", name))
        })?;

        let schema = Schema::Fixed {
            name: name.clone(),
            size: size as usize,
        };
        self.define(name, schema.clone())?;
        Ok(schema)
    }

    /// Records a named type so later definitions can reference it.
    fn define(&mut self, name: String, schema: Schema) -> SchemaResult<()> {
        if self.named.insert(name.clone(), schema).is_some() {
            return Err(SchemaError::DuplicateName(name));
        }
        Ok(())
    }
}

fn required_name(obj: &Map<String, Value>, kind: &str) -> SchemaResult<String> {
    obj.get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| SchemaError::Malformed(format!("{} requires a 'name' attribute", kind)))
}

/// Returns the JSON value kind for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
