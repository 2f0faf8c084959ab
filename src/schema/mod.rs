//! Schema model for fieldtree
//!
//! An Avro-style schema system: primitives, named types (record, enum,
//! fixed), arrays, maps, and unions. Records carry their fields in
//! declaration order, which downstream traversal treats as a contract.

mod errors;
mod loader;
mod parser;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use loader::SchemaLoader;
pub use parser::{parse_str, parse_value};
pub use types::{Field, RecordSchema, Schema, SchemaType};
