//! Code-block linking: attach each snippet to the catalog functions it
//! references.
//!
//! Blocks are visited in input order and, per block, functions in catalog
//! order, so every `examples` list ends up in first-match order. Linking
//! the same blocks again appends them again.

use crate::model::{Catalog, CodeBlock};

/// How a function name must appear in a block to count as a reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MatchMode {
    /// Name occurs anywhere as a literal substring, even inside a longer
    /// identifier (`filter` matches `filterOut(y)`).
    #[default]
    Substring,
    /// Name is called: followed by `(` and not preceded by an identifier
    /// character.
    WordBoundary,
}

/// Totals from one linking pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    pub blocks: usize,
    pub links: usize,
}

/// Append every block to the examples of each function it references.
pub fn link(catalog: &mut Catalog, blocks: &[CodeBlock], mode: MatchMode) -> LinkStats {
    let mut stats = LinkStats {
        blocks: blocks.len(),
        links: 0,
    };
    let records = catalog.records_mut();
    for block in blocks {
        for record in records.iter_mut() {
            if references(&block.code, &record.name, mode) {
                record.examples.push(block.code.clone());
                stats.links += 1;
            }
        }
    }
    stats
}

/// Whether `code` references `name` under `mode`.
pub fn references(code: &str, name: &str, mode: MatchMode) -> bool {
    if name.is_empty() {
        return false;
    }
    match mode {
        MatchMode::Substring => code.contains(name),
        MatchMode::WordBoundary => is_called(code, name),
    }
}

// Occurrences may overlap, so advance one char at a time past each hit.
fn is_called(code: &str, name: &str) -> bool {
    let mut from = 0;
    while let Some(offset) = code[from..].find(name) {
        let start = from + offset;
        let end = start + name.len();
        let bounded = code[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_identifier_char(c));
        if bounded && code[end..].starts_with('(') {
            return true;
        }
        from = start + code[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}

/// R identifiers: word characters plus `.`.
fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}
