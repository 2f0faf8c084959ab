//! Field tree compilation and traversal
//!
//! The two phases of the crate's core:
//!
//! 1. [`compile`] turns a record schema plus a path-to-callback resolver
//!    into an immutable [`FieldTree`] (once per schema).
//! 2. [`FieldTree::execute`] walks one data instance against the tree,
//!    firing leaf callbacks in declaration order (once per instance).

mod compiler;
mod errors;
mod node;
mod traversal;

pub use compiler::compile;
pub use errors::{TreeError, TreeResult};
pub use node::{FieldNode, FieldTree, LeafFn};
