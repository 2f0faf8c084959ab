//! Schema loader for loading schema definition files from disk
//!
//! Definitions live as `.avsc` or `.json` files, one schema per file.
//! Loaded schemas are kept in an in-memory registry keyed by declared name.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::errors::{SchemaError, SchemaResult};
use super::parser;
use super::types::Schema;

/// Schema loader that reads schema definition files from a directory and
/// maintains an in-memory registry.
pub struct SchemaLoader {
    /// Directory containing schema definition files
    schema_dir: PathBuf,
    /// Loaded schemas indexed by declared name
    schemas: HashMap<String, Schema>,
}

impl SchemaLoader {
    /// Creates a new loader reading from the given directory.
    pub fn new(schema_dir: impl Into<PathBuf>) -> Self {
        Self {
            schema_dir: schema_dir.into(),
            schemas: HashMap::new(),
        }
    }

    /// Returns the schema directory path.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Loads all schema definition files from the schema directory.
    ///
    /// Files without a `.avsc` or `.json` extension are skipped. A missing
    /// directory is treated as an empty one.
    pub fn load_all(&mut self) -> SchemaResult<()> {
        if !self.schema_dir.exists() {
            return Ok(());
        }

        let entries = fs::read_dir(&self.schema_dir).map_err(|e| SchemaError::Io {
            path: self.schema_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| SchemaError::Io {
                path: self.schema_dir.display().to_string(),
                reason: e.to_string(),
            })?;
            let path = entry.path();

            let ext = path.extension().and_then(|e| e.to_str());
            if !matches!(ext, Some("avsc") | Some("json")) {
                continue;
            }

            self.load_schema_file(&path)?;
        }

        Ok(())
    }

    /// Loads a single schema definition file.
    fn load_schema_file(&mut self, path: &Path) -> SchemaResult<()> {
        let content = fs::read_to_string(path).map_err(|e| SchemaError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let schema = parser::parse_str(&content)?;
        debug!(
            "loaded schema '{}' from {}",
            schema.name().unwrap_or("<anonymous>"),
            path.display()
        );
        self.register(schema)
    }

    /// Registers a schema directly (for programmatic creation or tests).
    ///
    /// The schema must be a named type; re-registering a name fails.
    pub fn register(&mut self, schema: Schema) -> SchemaResult<()> {
        let name = schema.name().ok_or(SchemaError::Unnamed)?.to_string();

        if self.schemas.contains_key(&name) {
            return Err(SchemaError::AlreadyRegistered(name));
        }

        debug!("registered schema '{}'", name);
        self.schemas.insert(name, schema);
        Ok(())
    }

    /// Looks up a schema by declared name.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Returns true if a schema with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Returns the number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if no schemas are registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
