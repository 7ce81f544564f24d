//! Text statistics calculators: TF-IDF weight and type-token ratio.
//!
//! Inputs are validated before computing; out-of-range counts are
//! `InvalidInput` errors rather than NaN or infinite results.

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w']+").unwrap());

/// `(term_count / total_tokens) * ln(total_docs / docs_with_term)`.
pub fn tf_idf(term_count: u64, total_tokens: u64, total_docs: u64, docs_with_term: u64) -> Result<f64> {
    if total_tokens == 0 {
        return Err(invalid("total tokens must be greater than zero"));
    }
    if term_count > total_tokens {
        return Err(invalid(format!(
            "term count ({term_count}) exceeds total tokens ({total_tokens})"
        )));
    }
    if total_docs == 0 {
        return Err(invalid("total documents must be greater than zero"));
    }
    if docs_with_term == 0 {
        return Err(invalid("documents containing the term must be greater than zero"));
    }
    if docs_with_term > total_docs {
        return Err(invalid(format!(
            "documents containing the term ({docs_with_term}) exceed total documents ({total_docs})"
        )));
    }

    let tf = term_count as f64 / total_tokens as f64;
    let idf = (total_docs as f64 / docs_with_term as f64).ln();
    Ok(tf * idf)
}

/// Unique words divided by total words.
pub fn ttr(types: u64, tokens: u64) -> Result<f64> {
    if tokens == 0 {
        return Err(invalid("tokens must be greater than zero"));
    }
    if types == 0 {
        return Err(invalid("types must be greater than zero"));
    }
    if types > tokens {
        return Err(invalid(format!("types ({types}) exceed tokens ({tokens})")));
    }
    Ok(types as f64 / tokens as f64)
}

/// Word counts of a text, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCounts {
    pub tokens: u64,
    pub types: u64,
}

impl WordCounts {
    pub fn of(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = RE_WORD.find_iter(&lowered).map(|m| m.as_str()).collect();
        let distinct: HashSet<&str> = words.iter().copied().collect();
        WordCounts {
            tokens: words.len() as u64,
            types: distinct.len() as u64,
        }
    }

    pub fn ttr(&self) -> Result<f64> {
        ttr(self.types, self.tokens)
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidInput(message.into())
}
