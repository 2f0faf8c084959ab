//! Traversal engine
//!
//! Walks a compiled tree against one data instance, pre-order and in field
//! declaration order, invoking each leaf's callback with the resolved value.
//! Absent, null, or non-record intermediate values propagate absence to all
//! descendant leaves; traversal itself never fails.

use serde_json::Value;

use super::node::{FieldNode, FieldTree, NodeKind};

impl FieldTree {
    /// Runs one traversal of `record` against this tree.
    ///
    /// Every leaf with an attached callback is invoked exactly once, in
    /// declaration order, even when the leaf's value or its whole parent
    /// structure is missing from the record. A non-object `record` behaves
    /// like an absent one. All effects happen through the callbacks.
    pub fn execute(&self, record: &Value) {
        self.root.traverse(record.as_object().map(|_| record));
    }
}

impl FieldNode {
    fn traverse(&self, record: Option<&Value>) {
        for child in self.children() {
            child.traverse_for_parent(record);
        }
    }

    fn traverse_for_parent(&self, parent: Option<&Value>) {
        match &self.kind {
            NodeKind::Internal { children } => {
                let nested = parent
                    .and_then(|p| p.get(self.name.as_str()))
                    .filter(|v| v.is_object());
                for child in children {
                    child.traverse_for_parent(nested);
                }
            }
            NodeKind::Leaf { callback } => {
                let value = parent.and_then(|p| p.get(self.name.as_str()));
                if let Some(callback) = callback {
                    callback(parent, &self.path, value);
                }
            }
        }
    }
}
