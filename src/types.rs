use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::ItemState;

// GitHub API response structures, one per endpoint. Deserialization at the
// client boundary is the only place raw JSON is touched.

#[derive(Debug, Deserialize)]
pub struct RawRepository {
    pub name: String,
    pub owner: RawOwner,
    pub description: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub fork: bool,
}

#[derive(Debug, Deserialize)]
pub struct RawOwner {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct RawContributor {
    pub login: String,
    pub contributions: u32,
}

#[derive(Debug, Deserialize)]
pub struct RawPullRequest {
    pub title: String,
    pub state: ItemState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Same shape as [`RawPullRequest`]; issues and pull requests are distinct
/// API resources with identical list fields.
#[derive(Debug, Deserialize)]
pub struct RawIssue {
    pub title: String,
    pub state: ItemState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct RawCommit {
    pub sha: String,
    pub commit: RawCommitDetail,
}

#[derive(Debug, Deserialize)]
pub struct RawCommitDetail {
    pub message: String,
    pub author: RawCommitAuthor,
}

#[derive(Debug, Deserialize)]
pub struct RawCommitAuthor {
    pub name: String,
    pub date: DateTime<Utc>,
}
