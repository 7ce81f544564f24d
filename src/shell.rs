//! Interactive query loop over a shared catalog.
//!
//! A bare line is a fuzzy search. Lines starting with `:` are commands:
//!
//! - `:exact NAME`: direct selection
//! - `:package [PKG]`: set or clear the package filter
//! - `:packages`: list packages
//! - `:reload`: rebuild the catalog and swap it in
//! - `:help`, `:quit`

use crate::error::Result;
use crate::handle::CatalogHandle;
use crate::lookup::{lookup, LookupMode, LookupOptions};
use crate::model::Catalog;
use crate::render::markdown::MarkdownRenderer;
use crate::render::Renderer;
use std::io::{self, BufRead, Write};
use tracing::warn;

const PROMPT: &str = "fnref> ";

const HELP: &str = "\
<query>          fuzzy search by function name
:exact NAME      show one function by exact name
:package [PKG]   set (or clear) the package filter
:packages        list packages
:reload          reload the datasets
:quit            leave
";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Search(&'a str),
    Exact(&'a str),
    Package(Option<&'a str>),
    Packages,
    Reload,
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        return if line.is_empty() {
            Command::Empty
        } else {
            Command::Search(line)
        };
    };
    let (word, arg) = match rest.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, arg.trim()),
        None => (rest, ""),
    };
    match word {
        "exact" | "e" => Command::Exact(arg),
        "package" | "p" => Command::Package(Some(arg).filter(|a| !a.is_empty())),
        "packages" => Command::Packages,
        "reload" => Command::Reload,
        "help" | "h" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(word),
    }
}

/// Session state for one interactive run.
pub struct Shell<'h, F> {
    handle: &'h CatalogHandle,
    reload: F,
    package: Option<String>,
    limit: usize,
    score_cutoff: f64,
}

impl<'h, F> Shell<'h, F>
where
    F: Fn() -> Result<Catalog>,
{
    pub fn new(handle: &'h CatalogHandle, reload: F, limit: usize, score_cutoff: f64) -> Self {
        Shell {
            handle,
            reload,
            package: None,
            limit,
            score_cutoff,
        }
    }

    pub fn with_package(mut self, package: Option<String>) -> Self {
        self.package = package;
        self
    }

    /// Read commands until EOF or `:quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        for line in input.lines() {
            let line = line?;
            if !self.execute(&line, &mut out)? {
                break;
            }
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        writeln!(out)
    }

    /// Run one line. Returns `false` when the session should end.
    fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        match parse_command(line) {
            Command::Empty => {}
            Command::Quit => return Ok(false),
            Command::Help => write!(out, "{HELP}")?,
            Command::Search(query) => self.search(query, LookupMode::Fuzzy, out)?,
            Command::Exact("") => writeln!(out, "usage: :exact NAME")?,
            Command::Exact(name) => self.search(name, LookupMode::Exact, out)?,
            Command::Package(package) => {
                self.package = package.map(str::to_string);
                match &self.package {
                    Some(p) => writeln!(out, "package filter: {p}")?,
                    None => writeln!(out, "package filter cleared")?,
                }
            }
            Command::Packages => {
                let catalog = self.handle.snapshot();
                for package in catalog.packages() {
                    writeln!(out, "{package}")?;
                }
            }
            Command::Reload => match self.handle.rebuild(&self.reload) {
                Ok(catalog) => writeln!(out, "reloaded {} functions", catalog.len())?,
                Err(e) => {
                    warn!("reload failed: {e}");
                    writeln!(out, "reload failed, keeping current catalog: {e}")?;
                }
            },
            Command::Unknown(word) => writeln!(out, "unknown command :{word} (try :help)")?,
        }
        Ok(true)
    }

    fn search<W: Write>(&self, query: &str, mode: LookupMode, out: &mut W) -> io::Result<()> {
        let catalog = self.handle.snapshot();
        let options = LookupOptions {
            package: self.package.as_deref(),
            mode,
            limit: self.limit,
            score_cutoff: self.score_cutoff,
        };
        let hits = lookup(&catalog, query, &options);
        if hits.is_empty() {
            writeln!(out, "No matches found. Try another keyword.")
        } else {
            write!(out, "{}", MarkdownRenderer.render(&hits))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::FunctionRecord;

    fn catalog(entries: &[(&str, &str)]) -> Catalog {
        let mut catalog = Catalog::new();
        for (name, package) in entries {
            catalog.insert(FunctionRecord {
                name: name.to_string(),
                package: package.to_string(),
                ..Default::default()
            });
        }
        catalog
    }

    fn session(handle: &CatalogHandle, input: &str, reload: impl Fn() -> Result<Catalog>) -> String {
        let mut out = Vec::new();
        Shell::new(handle, reload, 10, 60.0)
            .run(input.as_bytes(), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("  flter "), Command::Search("flter"));
        assert_eq!(parse_command(":exact filter"), Command::Exact("filter"));
        assert_eq!(parse_command(":package  dplyr "), Command::Package(Some("dplyr")));
        assert_eq!(parse_command(":package"), Command::Package(None));
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command(":frobnicate"), Command::Unknown("frobnicate"));
    }

    #[test]
    fn fuzzy_then_filtered_search() {
        let handle = CatalogHandle::new(catalog(&[("filter", "dplyr"), ("str_detect", "stringr")]));
        let out = session(
            &handle,
            "flter\n:package stringr\nflter\n:quit\nfilter\n",
            || Ok(Catalog::new()),
        );

        assert!(out.contains("### filter"));
        assert!(out.contains("package filter: stringr"));
        assert!(out.contains("No matches found."));
        // Nothing after :quit runs
        assert_eq!(out.matches("### filter").count(), 1);
    }

    #[test]
    fn reload_swaps_and_failure_keeps_catalog() {
        let handle = CatalogHandle::new(catalog(&[("filter", "dplyr")]));
        let out = session(&handle, ":reload\n:exact mutate\n", || {
            Ok(catalog(&[("mutate", "dplyr")]))
        });
        assert!(out.contains("reloaded 1 functions"));
        assert!(out.contains("### mutate"));

        let out = session(&handle, ":reload\n:packages\n", || {
            Err(Error::InvalidInput("boom".to_string()))
        });
        assert!(out.contains("reload failed, keeping current catalog"));
        assert!(handle.snapshot().contains("mutate"));
        assert!(out.contains("dplyr\n"));
    }
}
