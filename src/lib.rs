//! fieldtree - compile schemas into reusable field trees and walk records
//! against them
//!
//! A schema is compiled once into a [`tree::FieldTree`] whose shape mirrors
//! the schema's nested records. Each traversal then walks one JSON record
//! against the tree, invoking a caller-supplied callback at every leaf field
//! with the field's fully-qualified dotted path and resolved value. This
//! decouples "what fields exist" from "what to do with each value":
//! validation, masking, or metric extraction pipelines are driven by schema
//! shape instead of hand-written field access.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use serde_json::{json, Value};
//! use fieldtree::schema::{Field, RecordSchema, Schema};
//! use fieldtree::tree::{compile, LeafFn};
//!
//! let schema = Schema::Record(RecordSchema::new(
//!     "User",
//!     vec![
//!         Field::new("id", Schema::Long),
//!         Field::new("name", Schema::String),
//!     ],
//! ));
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let tree = compile(&schema, |_path| {
//!     let seen = Arc::clone(&seen);
//!     Some(Box::new(move |_parent: Option<&Value>, path: &str, value: Option<&Value>| {
//!         seen.lock().unwrap().push((path.to_string(), value.cloned()));
//!     }) as LeafFn)
//! })?;
//!
//! tree.execute(&json!({ "id": 7, "name": "ada" }));
//! assert_eq!(seen.lock().unwrap().len(), 2);
//! # Ok::<(), fieldtree::tree::TreeError>(())
//! ```

pub mod schema;
pub mod tree;

pub use schema::{Schema, SchemaType};
pub use tree::{compile, FieldTree, LeafFn, TreeError};
