//! JSON renderer: structured output for tooling integration.

use crate::lookup::Hit;
use crate::render::Renderer;
use serde_json::{json, Value};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, hits: &[Hit]) -> String {
        let results: Vec<Value> = hits.iter().map(hit_json).collect();
        format!("{:#}\n", json!({ "results": results }))
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

fn hit_json(hit: &Hit) -> Value {
    let func = hit.record;
    let arguments: Vec<Value> = func
        .arguments
        .iter()
        .map(|arg| json!({ "name": arg.name, "description": arg.description }))
        .collect();
    json!({
        "name": func.name,
        "package": func.package,
        "explanation": func.explanation,
        "arguments": arguments,
        "examples": func.examples,
        "score": hit.score,
    })
}
