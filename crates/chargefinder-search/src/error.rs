use thiserror::Error;

/// Failure reported by a zip lookup collaborator.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("zip lookup unavailable: {0}")]
    Unavailable(String),

    #[error("zip lookup failed for {zipcode}: {reason}")]
    Failed { zipcode: u32, reason: String },
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("zip lookup failed for query \"{query}\": {source}")]
    Lookup {
        query: String,
        #[source]
        source: LookupError,
    },
}
