//! Renderer module: trait-based format dispatch for lookup results.

pub mod csv;
pub mod json;
pub mod markdown;

use crate::error::{Error, Result};
use crate::lookup::Hit;

/// Placeholder shown for functions without an explanation.
pub const NO_EXPLANATION: &str = "No explanation available.";

/// Trait for rendering lookup hits into a specific output format.
pub trait Renderer {
    fn render(&self, hits: &[Hit]) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        "csv" => Ok(Box::new(csv::CsvRenderer)),
        _ => Err(Error::InvalidInput(format!(
            "unknown format: {}. Use markdown, json, or csv",
            format
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        assert_eq!(create_renderer("md").unwrap().file_extension(), "md");
        assert_eq!(create_renderer("json").unwrap().file_extension(), "json");
        assert_eq!(create_renderer("csv").unwrap().file_extension(), "csv");
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("xml").err().unwrap();
        assert!(err.to_string().contains("unknown format: xml"));
    }
}
