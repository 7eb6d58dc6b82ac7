use std::path::PathBuf;

/// Failure reported by a page fetch.
///
/// Both variants surface to the user as a single message; the fetcher
/// never retries and callers decide whether to re-trigger the request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Network failure: {reason}")]
    Network { reason: String },

    #[error("Server rejected the request: {message}")]
    Rejected { message: String },
}

impl FetchError {
    /// The user-visible message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            FetchError::Network { reason } => reason,
            FetchError::Rejected { message } => message,
        }
    }
}

/// All domain errors for adminlog.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum AdminLogError {
    #[error(
        "Could not load audit log: {message}\n\n  \
         Check that the server is reachable and your access token is valid.\n  \
         Run the command again to retry."
    )]
    LoadFailed { message: String },

    #[error("Page {page} is out of range (pages start at 1{})", last_page_hint(.last))]
    InvalidPage { page: usize, last: Option<usize> },

    #[error(
        "Invalid page size: {size}\n\n  \
         Allowed sizes: {allowed}\n  \
         Change the list in [view].page_size_options of your config file."
    )]
    InvalidPageSize { size: usize, allowed: String },

    #[error(
        "A request for page {page} is still loading\n\n  \
         Wait for it to finish, or change the filter to start over."
    )]
    RequestInFlight { page: usize },

    #[error("Invalid time range: {detail}")]
    InvalidTimeRange { detail: String },

    #[error(
        "Invalid configuration in {path}: {detail}\n\n  \
         Fix the file or pass --config to use a different one."
    )]
    InvalidConfig { path: PathBuf, detail: String },

    #[error("Invalid argument: {detail}")]
    InvalidArgument { detail: String },

    #[error("Could not store page size preference: {detail}")]
    PreferencesError { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn last_page_hint(last: &Option<usize>) -> String {
    last.map(|n| format!(", last page is {n}")).unwrap_or_default()
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AdminLogError>;
