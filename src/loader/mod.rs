//! Dataset loading: JSON text into catalog records and code blocks.

pub mod codeblocks;
pub mod functions;

use crate::error::{Error, Result};
use crate::link::{self, MatchMode};
use crate::model::{Catalog, CodeBlock};
use serde_json::Value;
use tracing::debug;

pub use codeblocks::parse_blocks;
pub use functions::{load, parse_record};

/// Parse a dataset document, which must be a JSON array of records.
///
/// `origin` names the source in error messages.
pub fn parse_array(origin: &str, text: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| Error::unavailable(origin, format!("invalid JSON: {e}")))?;
    match value {
        Value::Array(items) => Ok(items),
        other => Err(Error::unavailable(
            origin,
            format!("expected a JSON array, found {}", kind(&other)),
        )),
    }
}

/// Build a linked catalog from the two dataset documents.
///
/// Dataset-level errors abort the build; malformed function records are
/// skipped by [`load`].
pub fn build_catalog(functions_json: &str, codeblocks_json: &str, mode: MatchMode) -> Result<Catalog> {
    let functions = parse_array("functions", functions_json)?;
    let blocks = parse_blocks(parse_array("codeblocks", codeblocks_json)?);
    Ok(assemble(functions, &blocks, mode))
}

/// Load parsed function records and link the code blocks into them.
pub fn assemble(functions: Vec<Value>, blocks: &[CodeBlock], mode: MatchMode) -> Catalog {
    let mut catalog = load(functions);
    let stats = link::link(&mut catalog, blocks, mode);
    debug!(blocks = stats.blocks, links = stats.links, ?mode, "linked");
    catalog
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
