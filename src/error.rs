//! Error taxonomy for catalog construction and the calculators.

/// Errors surfaced by the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A raw function record could not be turned into a `FunctionRecord`.
    /// The loader skips these.
    #[error("malformed record #{index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// A dataset could not be fetched, read, or parsed as a JSON array.
    #[error("data source unavailable: {origin}: {reason}")]
    DataSourceUnavailable { origin: String, reason: String },

    /// Out-of-range calculator input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub(crate) fn unavailable(origin: impl Into<String>, reason: impl ToString) -> Self {
        Error::DataSourceUnavailable {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
