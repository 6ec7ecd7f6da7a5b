use std::fmt;

use thiserror::Error;

/// The GitHub API resource a request was addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Repositories,
    Contributors,
    Issues,
    PullRequests,
    Commits,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Repositories => "repositories",
            Resource::Contributors => "contributors",
            Resource::Issues => "issues",
            Resource::PullRequests => "pull requests",
            Resource::Commits => "commits",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum ReportError {
    /// GitHub answered with a non-200 status. Recoverable: the aggregator
    /// substitutes an empty collection after logging it.
    #[error("GitHub API returned status {status} fetching {resource}")]
    Status { resource: Resource, status: u16 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
