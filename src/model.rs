//! Data model for the function catalog, independent of the source format.

use serde::Deserialize;
use std::collections::HashMap;

/// Package recorded for functions whose dataset entry names none.
pub const UNKNOWN_PACKAGE: &str = "unknown";

/// A single documented function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionRecord {
    pub name: String,
    pub package: String,
    /// Empty when the dataset has no explanation; renderers show a placeholder.
    pub explanation: String,
    pub arguments: Vec<Argument>,
    /// Linked code snippets, in link order. May contain duplicates.
    pub examples: Vec<String>,
}

/// One documented argument of a function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Argument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A code snippet scanned for function references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlock {
    pub code: String,
}

impl CodeBlock {
    pub fn new(code: impl Into<String>) -> Self {
        CodeBlock { code: code.into() }
    }
}

/// Function records keyed by name.
///
/// Iteration follows first-insertion order of each name. Inserting a name
/// that already exists replaces the record in its original slot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<FunctionRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced (last write wins).
    pub fn insert(&mut self, record: FunctionRecord) -> Option<FunctionRecord> {
        match self.index.get(&record.name) {
            Some(&slot) => Some(std::mem::replace(&mut self.records[slot], record)),
            None => {
                self.index.insert(record.name.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FunctionRecord> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FunctionRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Distinct package names, sorted.
    pub fn packages(&self) -> Vec<&str> {
        let mut packages: Vec<&str> = self.records.iter().map(|r| r.package.as_str()).collect();
        packages.sort_unstable();
        packages.dedup();
        packages
    }

    /// Mutable access for the linker. Names must not be changed through it.
    pub(crate) fn records_mut(&mut self) -> &mut [FunctionRecord] {
        &mut self.records
    }
}
