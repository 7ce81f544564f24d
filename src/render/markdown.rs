//! GitHub-flavored markdown renderer for terminal and file output.

use crate::lookup::Hit;
use crate::model::FunctionRecord;
use crate::render::{Renderer, NO_EXPLANATION};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, hits: &[Hit]) -> String {
        let mut output = String::new();

        // Index only pays off with more than one match
        if hits.len() > 1 {
            output.push_str("## Matches\n\n");
            for hit in hits {
                output.push_str(&format!(
                    "* [{}](#{}) (score {:.0})\n",
                    hit.record.name,
                    github_slug(&hit.record.name),
                    hit.score
                ));
            }
            output.push('\n');
        }

        for hit in hits {
            output.push_str(&render_function(hit.record, hit.score));
            output.push('\n');
        }

        output
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render a single function block.
fn render_function(func: &FunctionRecord, score: f64) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", func.name));
    lines.push(format!("**Package:** `{}`  ", func.package));
    lines.push(format!("**Score:** {:.0}", score));
    lines.push(String::new());

    if func.explanation.trim().is_empty() {
        lines.push(format!("_{}_", NO_EXPLANATION));
    } else {
        lines.push(func.explanation.trim().to_string());
    }
    lines.push(String::new());

    if !func.arguments.is_empty() {
        lines.push("#### Arguments\n".to_string());
        for arg in &func.arguments {
            if arg.description.is_empty() {
                lines.push(format!("* `{}`", arg.name));
            } else {
                lines.push(format!("* `{}`: {}", arg.name, arg.description));
            }
        }
        lines.push(String::new());
    }

    if !func.examples.is_empty() {
        lines.push("#### Examples\n".to_string());
        for example in &func.examples {
            lines.push("```r".to_string());
            lines.push(example.trim_end().to_string());
            lines.push("```".to_string());
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// GitHub heading anchor: lowercase, keep alphanumerics, spaces and hyphens,
/// spaces become hyphens. Underscores and dots are dropped.
fn github_slug(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-')
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Argument;

    fn record() -> FunctionRecord {
        FunctionRecord {
            name: "str_detect".to_string(),
            package: "stringr".to_string(),
            explanation: "Detect the presence of a pattern.".to_string(),
            arguments: vec![
                Argument {
                    name: "string".to_string(),
                    description: "Input vector.".to_string(),
                },
                Argument {
                    name: "pattern".to_string(),
                    description: String::new(),
                },
            ],
            examples: vec!["str_detect(fruit, \"a\")\n".to_string()],
        }
    }

    #[test]
    fn slug_drops_underscores_and_dots() {
        assert_eq!(github_slug("str_detect"), "strdetect");
        assert_eq!(github_slug("as.numeric"), "asnumeric");
        assert_eq!(github_slug("Read CSV"), "read-csv");
    }

    #[test]
    fn single_hit_has_no_index() {
        let rec = record();
        let out = MarkdownRenderer.render(&[Hit { record: &rec, score: 100.0 }]);
        assert!(!out.contains("## Matches"));
        assert!(out.starts_with("### str_detect\n"));
        assert!(out.contains("**Package:** `stringr`"));
        assert!(out.contains("* `string`: Input vector.\n* `pattern`\n"));
        assert!(out.contains("```r\nstr_detect(fruit, \"a\")\n```"));
    }

    #[test]
    fn multiple_hits_get_index() {
        let a = record();
        let b = FunctionRecord {
            name: "str_replace".to_string(),
            package: "stringr".to_string(),
            ..Default::default()
        };
        let out = MarkdownRenderer.render(&[
            Hit { record: &a, score: 90.0 },
            Hit { record: &b, score: 70.4 },
        ]);
        assert!(out.starts_with("## Matches\n\n* [str_detect](#strdetect) (score 90)\n"));
        assert!(out.contains("* [str_replace](#strreplace) (score 70)"));
        assert!(out.contains(&format!("_{}_", NO_EXPLANATION)));
    }
}
