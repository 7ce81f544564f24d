//! fnref: a function reference catalog.
//!
//! Loads a dataset of documented functions and a dataset of code snippets,
//! links each snippet to the functions it references, and answers exact or
//! fuzzy name lookups over the result.
//!
//! ```
//! use fnref::{build_catalog, search, LookupMode, MatchMode};
//!
//! let functions = r#"[{"function": "filter", "package": "dplyr"}]"#;
//! let codeblocks = r#"[{"code": "books %>% filter(year > 2000)"}]"#;
//! let catalog = build_catalog(functions, codeblocks, MatchMode::WordBoundary)?;
//!
//! let hits = search(&catalog, "flter", Some("dplyr"), LookupMode::Fuzzy, 10, 60.0);
//! assert_eq!(hits[0].record.name, "filter");
//! assert_eq!(hits[0].record.examples.len(), 1);
//! # Ok::<(), fnref::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod handle;
pub mod link;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod render;
pub mod shell;
pub mod source;
pub mod stats;

pub use config::{CatalogConfig, FetchOptions};
pub use error::{Error, Result};
pub use handle::CatalogHandle;
pub use link::{link, MatchMode};
pub use loader::{build_catalog, load};
pub use lookup::{lookup, Hit, LookupMode, LookupOptions};
pub use model::{Argument, Catalog, CodeBlock, FunctionRecord};
pub use source::Source;

/// Query entry point with the lookup parameters spelled out.
pub fn search<'c>(
    catalog: &'c Catalog,
    query: &str,
    package_filter: Option<&str>,
    mode: LookupMode,
    limit: usize,
    score_cutoff: f64,
) -> Vec<Hit<'c>> {
    let options = LookupOptions {
        package: package_filter,
        mode,
        limit,
        score_cutoff,
    };
    lookup(catalog, query, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let functions = r#"[
            {"function": "filter", "package": "dplyr"},
            {"function": "filter_all", "package": "dplyr"},
            {"function": "str_filter", "package": "stringr"}
        ]"#;
        build_catalog(functions, "[]", MatchMode::Substring).unwrap()
    }

    fn names<'a>(hits: &[Hit<'a>]) -> Vec<&'a str> {
        hits.iter().map(|h| h.record.name.as_str()).collect()
    }

    #[test]
    fn search_exact_respects_package() {
        let cat = catalog();
        let hits = search(&cat, "filter", Some("dplyr"), LookupMode::Exact, 10, 60.0);
        assert_eq!(names(&hits), ["filter"]);
        assert_eq!(hits[0].score, lookup::EXACT_SCORE);
        assert!(search(&cat, "filter", Some("stringr"), LookupMode::Exact, 10, 60.0).is_empty());
    }

    #[test]
    fn search_fuzzy_filters_ranks_and_limits() {
        let cat = catalog();
        let hits = search(&cat, "flter", Some("dplyr"), LookupMode::Fuzzy, 10, 0.0);
        assert_eq!(names(&hits), ["filter", "filter_all"]);

        let hits = search(&cat, "flter", None, LookupMode::Fuzzy, 1, 0.0);
        assert_eq!(names(&hits), ["filter"]);

        assert!(search(&cat, "flter", Some("tidytext"), LookupMode::Fuzzy, 10, 0.0).is_empty());
    }
}
