//! Schema type definitions
//!
//! Supported types:
//! - null, boolean, int, long, float, double, bytes, string: primitives
//! - enum: named set of symbols
//! - fixed: named fixed-size byte block
//! - array: homogeneous list with element schema
//! - map: string-keyed values with value schema
//! - union: ordered set of alternative schemas
//! - record: named, declaration-ordered field list

use std::fmt;

/// Type classification for a schema node.
///
/// Used for structural decisions at compile time (record vs leaf) and for
/// diagnostics afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    Enum,
    Fixed,
    Array,
    Map,
    Union,
    Record,
}

impl SchemaType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaType::Null => "null",
            SchemaType::Boolean => "boolean",
            SchemaType::Int => "int",
            SchemaType::Long => "long",
            SchemaType::Float => "float",
            SchemaType::Double => "double",
            SchemaType::Bytes => "bytes",
            SchemaType::String => "string",
            SchemaType::Enum => "enum",
            SchemaType::Fixed => "fixed",
            SchemaType::Array => "array",
            SchemaType::Map => "map",
            SchemaType::Union => "union",
            SchemaType::Record => "record",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// A single record field: a name plus the field's declared schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name, unique within its record
    pub name: String,
    /// Declared schema for the field's value
    pub schema: Schema,
}

impl Field {
    /// Create a field with the given name and schema
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

/// A named record schema with declaration-ordered fields.
///
/// Field order is part of the schema contract: traversal visits fields in
/// exactly this order, so fields are kept in a `Vec` rather than a map.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    /// Declared record name
    pub name: String,
    /// Fields in declaration order
    pub fields: Vec<Field>,
}

impl RecordSchema {
    /// Create a record schema with the given name and fields
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Looks up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A schema node.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    /// Named enumeration of symbols
    Enum { name: String, symbols: Vec<String> },
    /// Named fixed-size byte block
    Fixed { name: String, size: usize },
    /// Homogeneous array with element schema
    Array(Box<Schema>),
    /// String-keyed map with value schema
    Map(Box<Schema>),
    /// Ordered alternatives
    Union(Vec<Schema>),
    /// Named record with ordered fields
    Record(RecordSchema),
}

impl Schema {
    /// Returns this schema's type classification
    pub fn schema_type(&self) -> SchemaType {
        match self {
            Schema::Null => SchemaType::Null,
            Schema::Boolean => SchemaType::Boolean,
            Schema::Int => SchemaType::Int,
            Schema::Long => SchemaType::Long,
            Schema::Float => SchemaType::Float,
            Schema::Double => SchemaType::Double,
            Schema::Bytes => SchemaType::Bytes,
            Schema::String => SchemaType::String,
            Schema::Enum { .. } => SchemaType::Enum,
            Schema::Fixed { .. } => SchemaType::Fixed,
            Schema::Array(_) => SchemaType::Array,
            Schema::Map(_) => SchemaType::Map,
            Schema::Union(_) => SchemaType::Union,
            Schema::Record(_) => SchemaType::Record,
        }
    }

    /// Returns the declared name for named types (record, enum, fixed)
    pub fn name(&self) -> Option<&str> {
        match self {
            Schema::Record(record) => Some(&record.name),
            Schema::Enum { name, .. } => Some(name),
            Schema::Fixed { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns the record schema if this is a record
    pub fn as_record(&self) -> Option<&RecordSchema> {
        match self {
            Schema::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Unwraps a nullable union to its first non-null branch.
    ///
    /// Non-union schemas and unions with no non-null branch are returned
    /// unchanged. For a union with several non-null branches the first one
    /// decides the structural classification; the remaining branches are
    /// ignored.
    pub fn unwrap_nullable(&self) -> &Schema {
        match self {
            Schema::Union(branches) => branches
                .iter()
                .find(|branch| branch.schema_type() != SchemaType::Null)
                .unwrap_or(self),
            _ => self,
        }
    }

    /// Returns true if this is a union containing a null branch
    pub fn is_nullable(&self) -> bool {
        match self {
            Schema::Union(branches) => branches
                .iter()
                .any(|branch| branch.schema_type() == SchemaType::Null),
            _ => false,
        }
    }
}
