use thiserror::Error;

/// Errors surfaced by tournament lookups and the roster fetch pipeline.
///
/// Every variant is returned to the caller as-is; nothing is swallowed
/// or retried internally. Per-field ranking parse failures are the one
/// condition handled locally (they degrade to "unranked" instead of
/// failing the fetch) and so never show up here.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A tournament's fields cannot produce a valid feed URL.
    #[error("invalid tournament configuration: {0}")]
    Configuration(String),

    #[error("no provider registered with ID {0}")]
    ProviderNotFound(String),

    #[error("no tournament registered with ID {0}")]
    TournamentNotFound(String),

    /// The request itself could not be completed.
    #[error("fetching players feed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A completed request came back with a non-200 status. The raw body
    /// is carried along unparsed.
    #[error("HTTP/{status}\n{body}")]
    HttpStatus { status: u16, body: String },

    /// The top-level structure of the feed payload could not be parsed.
    #[error("unmarshaling players feed: {0}")]
    Deserialization(#[from] serde_json::Error),
}
