//! Lookup over a linked catalog: exact key selection or fuzzy name search.

use crate::config::{DEFAULT_LIMIT, DEFAULT_SCORE_CUTOFF};
use crate::model::{Catalog, FunctionRecord};

/// Score given to an exact key match.
pub const EXACT_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupMode {
    /// Direct selection of a known name.
    Exact,
    /// Approximate name matching, ranked by similarity.
    #[default]
    Fuzzy,
}

/// Parameters of a single lookup.
#[derive(Debug, Clone)]
pub struct LookupOptions<'a> {
    pub package: Option<&'a str>,
    pub mode: LookupMode,
    pub limit: usize,
    /// Minimum fuzzy score in [0, 100]. Ignored by exact lookups.
    pub score_cutoff: f64,
}

impl Default for LookupOptions<'_> {
    fn default() -> Self {
        LookupOptions {
            package: None,
            mode: LookupMode::Fuzzy,
            limit: DEFAULT_LIMIT,
            score_cutoff: DEFAULT_SCORE_CUTOFF,
        }
    }
}

/// A catalog entry matched by a lookup.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'c> {
    pub record: &'c FunctionRecord,
    pub score: f64,
}

/// Run a lookup. A blank query or no qualifying candidate yields no hits.
///
/// Exact lookups take the query as a key verbatim; fuzzy lookups ignore
/// surrounding whitespace.
pub fn lookup<'c>(catalog: &'c Catalog, query: &str, options: &LookupOptions) -> Vec<Hit<'c>> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let in_package = |record: &FunctionRecord| {
        options
            .package
            .map_or(true, |package| record.package == package)
    };

    match options.mode {
        LookupMode::Exact => catalog
            .get(query)
            .filter(|record| in_package(*record))
            .map(|record| Hit {
                record,
                score: EXACT_SCORE,
            })
            .into_iter()
            .collect(),
        LookupMode::Fuzzy => {
            let mut hits: Vec<Hit> = catalog
                .iter()
                .filter(|record| in_package(*record))
                .map(|record| Hit {
                    record,
                    score: similarity(query.trim(), &record.name),
                })
                .filter(|hit| hit.score >= options.score_cutoff)
                .collect();
            hits.sort_by(|a, b| {
                b.score
                    .total_cmp(&a.score)
                    .then_with(|| a.record.name.cmp(&b.record.name))
            });
            hits.truncate(options.limit);
            hits
        }
    }
}

/// Case-insensitive similarity in [0, 100].
///
/// The better of the normalized Levenshtein ratio over the whole strings and
/// over their sorted alphanumeric tokens, so `detect_str` still finds
/// `str_detect`.
pub fn similarity(query: &str, candidate: &str) -> f64 {
    let query = query.to_lowercase();
    let candidate = candidate.to_lowercase();
    let ratio = strsim::normalized_levenshtein(&query, &candidate);

    let (q, c) = (token_sort(&query), token_sort(&candidate));
    let sorted = if q.is_empty() || c.is_empty() {
        0.0
    } else {
        strsim::normalized_levenshtein(&q, &c)
    };

    100.0 * ratio.max(sorted)
}

fn token_sort(s: &str) -> String {
    let mut tokens: Vec<&str> = s
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();
    tokens.sort_unstable();
    tokens.join(" ")
}
