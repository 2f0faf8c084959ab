//! Schema-to-tree compilation
//!
//! Compilation runs once per schema and produces a tree whose shape mirrors
//! the schema's nested-record structure. Nullable unions are unwrapped to
//! their first non-null branch before deciding whether a field is a nested
//! record or a leaf; every other type (array, map, multi-branch union, enum,
//! fixed, scalar) becomes a leaf.

use log::debug;

use crate::schema::{Field, Schema};

use super::errors::{TreeError, TreeResult};
use super::node::{FieldNode, FieldTree, LeafFn};

/// Compiles a record schema into a reusable [`FieldTree`].
///
/// The resolver maps each leaf's fully-qualified dotted path to an optional
/// callback and is invoked exactly once per leaf path, only during
/// compilation. Fails if the root schema is not a record; no partial tree is
/// produced.
pub fn compile<R>(schema: &Schema, mut resolver: R) -> TreeResult<FieldTree>
where
    R: FnMut(&str) -> Option<LeafFn>,
{
    let record = match schema {
        Schema::Record(record) => record,
        other => return Err(TreeError::InvalidSchema(other.schema_type())),
    };

    let children = record
        .fields
        .iter()
        .map(|field| build_field_node(field, &record.name, &mut resolver))
        .collect();
    let root = FieldNode::internal(record.name.clone(), record.name.clone(), children);
    let tree = FieldTree { root };

    debug!(
        "compiled field tree '{}' with {} leaf paths",
        record.name,
        tree.leaf_paths().len()
    );
    Ok(tree)
}

fn build_field_node<R>(field: &Field, parent_path: &str, resolver: &mut R) -> FieldNode
where
    R: FnMut(&str) -> Option<LeafFn>,
{
    let unwrapped = field.schema.unwrap_nullable();
    let path = format!("{}.{}", parent_path, field.name);

    match unwrapped {
        Schema::Record(record) => {
            let children = record
                .fields
                .iter()
                .map(|nested| build_field_node(nested, &path, resolver))
                .collect();
            FieldNode::internal(field.name.clone(), path, children)
        }
        other => {
            let callback = resolver(&path);
            FieldNode::leaf(field.name.clone(), path, other.schema_type(), callback)
        }
    }
}
