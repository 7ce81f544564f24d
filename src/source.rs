//! Dataset sources: local files or `http(s)` URLs.

use crate::config::FetchOptions;
use crate::error::{Error, Result};
use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    pub fn parse(arg: &str) -> Source {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Source::Url(arg.to_string())
        } else {
            Source::File(PathBuf::from(arg))
        }
    }

    /// Read the whole document. Failures map to `DataSourceUnavailable`.
    pub fn fetch(&self, options: &FetchOptions) -> Result<String> {
        match self {
            Source::File(path) => {
                fs::read_to_string(path).map_err(|e| Error::unavailable(path.display().to_string(), e))
            }
            Source::Url(url) => fetch_url(url, options),
        }
    }
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Source::parse(s))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => f.write_str(url),
        }
    }
}

/// GET with a per-attempt timeout. Transport errors and 5xx responses are
/// retried up to `options.retries` times; 4xx fails immediately.
///
/// The body is read through `into_reader`, which has no size cap.
fn fetch_url(url: &str, options: &FetchOptions) -> Result<String> {
    let agent = ureq::AgentBuilder::new().timeout(options.timeout).build();
    let mut attempt = 0;
    loop {
        info!(url, attempt, "fetching dataset");
        let reason = match agent.get(url).call() {
            Ok(response) => {
                let mut body = String::new();
                match response.into_reader().read_to_string(&mut body) {
                    Ok(_) => return Ok(body),
                    Err(e) => e.to_string(),
                }
            }
            Err(ureq::Error::Status(code, _)) if code < 500 => {
                return Err(Error::unavailable(url, format!("HTTP {code}")));
            }
            Err(e) => e.to_string(),
        };
        if attempt >= options.retries {
            return Err(Error::unavailable(url, reason));
        }
        attempt += 1;
        warn!(url, attempt, %reason, "fetch failed, retrying");
    }
}

/// Expand source arguments into sources.
///
/// URLs and existing files pass through; anything else is tried as a glob
/// pattern. A pattern matching nothing is kept as a file path so that
/// fetching it reports the missing file instead of silently dropping it.
pub fn expand(patterns: &[String]) -> Result<Vec<Source>> {
    let mut sources = Vec::new();
    for pattern in patterns {
        let source = Source::parse(pattern);
        let Source::File(path) = &source else {
            sources.push(source);
            continue;
        };
        if path.is_file() {
            sources.push(source);
            continue;
        }
        let mut matches: Vec<PathBuf> = glob::glob(pattern)
            .map_err(|e| Error::unavailable(pattern.as_str(), format!("invalid glob pattern: {e}")))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            sources.push(source);
            continue;
        }
        // Sort for deterministic link order
        matches.sort();
        sources.extend(matches.into_iter().map(Source::File));
    }
    Ok(sources)
}
