//! Compiled field tree data structures
//!
//! A `FieldTree` mirrors the nested-record shape of a schema: one node per
//! field, with the fully-qualified dotted path precomputed at compile time.
//! Trees are immutable after compilation and safe to share across threads.

use std::fmt;

use serde_json::Value;

use crate::schema::SchemaType;

/// Callback attached to a leaf node.
///
/// Invoked as `(parent_record, path, resolved_value)`. The parent record and
/// the resolved value are `None` when the surrounding structure is absent
/// from the data instance.
pub type LeafFn = Box<dyn Fn(Option<&Value>, &str, Option<&Value>) + Send + Sync>;

/// Node variant: a nested record or a leaf field.
pub(crate) enum NodeKind {
    /// Nested record with children in declaration order
    Internal { children: Vec<FieldNode> },
    /// Terminal field, optionally carrying a callback
    Leaf { callback: Option<LeafFn> },
}

/// One field position in the compiled tree.
pub struct FieldNode {
    pub(crate) name: String,
    pub(crate) path: String,
    pub(crate) schema_type: SchemaType,
    pub(crate) kind: NodeKind,
}

impl FieldNode {
    pub(crate) fn internal(
        name: String,
        path: String,
        children: Vec<FieldNode>,
    ) -> Self {
        Self {
            name,
            path,
            schema_type: SchemaType::Record,
            kind: NodeKind::Internal { children },
        }
    }

    pub(crate) fn leaf(
        name: String,
        path: String,
        schema_type: SchemaType,
        callback: Option<LeafFn>,
    ) -> Self {
        Self {
            name,
            path,
            schema_type,
            kind: NodeKind::Leaf { callback },
        }
    }

    /// The field's local name within its parent record.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully-qualified dotted path from the tree root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Union-unwrapped type classification, for diagnostics.
    pub fn schema_type(&self) -> SchemaType {
        self.schema_type
    }

    /// Returns true for leaf nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Returns true if this is a leaf with an attached callback.
    pub fn has_callback(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { callback: Some(_) })
    }

    /// Children in declaration order; empty for leaves.
    pub fn children(&self) -> &[FieldNode] {
        match &self.kind {
            NodeKind::Internal { children } => children,
            NodeKind::Leaf { .. } => &[],
        }
    }

    fn collect_leaf_paths<'a>(&'a self, out: &mut Vec<&'a str>) {
        match &self.kind {
            NodeKind::Internal { children } => {
                for child in children {
                    child.collect_leaf_paths(out);
                }
            }
            NodeKind::Leaf { .. } => out.push(&self.path),
        }
    }
}

impl fmt::Debug for FieldNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Internal { children } => f
                .debug_struct("FieldNode")
                .field("path", &self.path)
                .field("type", &self.schema_type.type_name())
                .field("children", &children.len())
                .finish(),
            NodeKind::Leaf { callback } => f
                .debug_struct("FieldNode")
                .field("path", &self.path)
                .field("type", &self.schema_type.type_name())
                .field("callback", &callback.is_some())
                .finish(),
        }
    }
}

/// A compiled, reusable traversal structure for one schema.
///
/// Compile once per schema, then execute against any number of data
/// instances; the tree is never mutated by traversal.
pub struct FieldTree {
    pub(crate) root: FieldNode,
}

impl FieldTree {
    /// The root node; always internal, named after the schema.
    pub fn root(&self) -> &FieldNode {
        &self.root
    }

    /// All leaf paths in traversal (declaration) order.
    pub fn leaf_paths(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.root.collect_leaf_paths(&mut out);
        out
    }
}

impl fmt::Debug for FieldTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldTree").field("root", &self.root).finish()
    }
}
