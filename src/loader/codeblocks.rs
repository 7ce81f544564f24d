//! Code-block dataset records: `{ "code": string }`, other fields ignored.

use crate::model::CodeBlock;
use serde_json::Value;
use tracing::debug;

/// Extract code blocks. Records without a string `code` carry no text and
/// are dropped, since they cannot link to anything.
pub fn parse_blocks(values: Vec<Value>) -> Vec<CodeBlock> {
    let total = values.len();
    let blocks: Vec<CodeBlock> = values
        .iter()
        .filter_map(|v| v.get("code").and_then(Value::as_str))
        .filter(|code| !code.is_empty())
        .map(CodeBlock::new)
        .collect();
    if blocks.len() < total {
        debug!(dropped = total - blocks.len(), "code blocks without code");
    }
    blocks
}
