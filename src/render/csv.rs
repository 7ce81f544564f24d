//! CSV export: `function_name,package,explanation,examples`.
//!
//! All examples of a function go into one field, newline-joined. Fields are
//! quoted per RFC 4180 when they contain a comma, quote, CR or LF.

use crate::lookup::Hit;
use crate::render::Renderer;

pub struct CsvRenderer;

const HEADER: [&str; 4] = ["function_name", "package", "explanation", "examples"];

impl Renderer for CsvRenderer {
    fn render(&self, hits: &[Hit]) -> String {
        let mut out = String::new();
        write_row(&mut out, &HEADER);
        for hit in hits {
            let func = hit.record;
            let examples = func.examples.join("\n");
            write_row(
                &mut out,
                &[&func.name, &func.package, &func.explanation, &examples],
            );
        }
        out
    }

    fn file_extension(&self) -> &str {
        "csv"
    }
}

fn write_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&csv_escape(field));
    }
    out.push_str("\r\n");
}

fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
