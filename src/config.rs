//! Runtime configuration: where the datasets come from and how the catalog
//! is built from them.

use crate::error::Result;
use crate::link::MatchMode;
use crate::loader;
use crate::model::Catalog;
use crate::source::Source;
use std::time::Duration;
use tracing::info;

/// Default number of fuzzy results.
pub const DEFAULT_LIMIT: usize = 10;
/// Default minimum fuzzy score.
pub const DEFAULT_SCORE_CUTOFF: f64 = 60.0;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RETRIES: u32 = 2;

/// Limits for fetching a remote dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Extra attempts after the first failure.
    pub retries: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retries: DEFAULT_RETRIES,
        }
    }
}

/// Everything needed to (re)build a catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub functions: Source,
    /// Concatenated in order before linking. May be empty.
    pub codeblocks: Vec<Source>,
    pub match_mode: MatchMode,
    pub fetch: FetchOptions,
}

impl CatalogConfig {
    /// Fetch both datasets, load and link. Any dataset-level failure aborts
    /// the whole build.
    pub fn build(&self) -> Result<Catalog> {
        let text = self.functions.fetch(&self.fetch)?;
        let values = loader::parse_array(&self.functions.to_string(), &text)?;

        let mut blocks = Vec::new();
        for source in &self.codeblocks {
            let text = source.fetch(&self.fetch)?;
            let values = loader::parse_array(&source.to_string(), &text)?;
            blocks.extend(loader::parse_blocks(values));
        }

        let catalog = loader::assemble(values, &blocks, self.match_mode);
        info!(functions = catalog.len(), source = %self.functions, "catalog built");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn json_file(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn builds_from_files_and_concatenates_blocks() {
        let functions = json_file(r#"[{"function": "filter"}, {"function": "select"}]"#);
        let first = json_file(r#"[{"code": "filter(a)"}]"#);
        let second = json_file(r#"[{"code": "select(b); filter(c)"}]"#);

        let config = CatalogConfig {
            functions: Source::File(functions.path().to_path_buf()),
            codeblocks: vec![
                Source::File(first.path().to_path_buf()),
                Source::File(second.path().to_path_buf()),
            ],
            match_mode: MatchMode::WordBoundary,
            fetch: FetchOptions::default(),
        };
        let catalog = config.build().unwrap();

        assert_eq!(
            catalog.get("filter").unwrap().examples,
            ["filter(a)", "select(b); filter(c)"]
        );
        assert_eq!(catalog.get("select").unwrap().examples.len(), 1);
    }

    #[test]
    fn missing_codeblock_file_aborts() {
        let functions = json_file(r#"[{"function": "filter"}]"#);
        let config = CatalogConfig {
            functions: Source::File(functions.path().to_path_buf()),
            codeblocks: vec![Source::File("/nonexistent/codeblocks.json".into())],
            match_mode: MatchMode::Substring,
            fetch: FetchOptions::default(),
        };
        let err = config.build().unwrap_err();
        assert!(matches!(err, Error::DataSourceUnavailable { .. }));
    }
}
