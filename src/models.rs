use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::{RawCommit, RawContributor, RawIssue, RawPullRequest, RawRepository};

/// State of an issue or pull request as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    Open,
    Closed,
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemState::Open => f.write_str("open"),
            ItemState::Closed => f.write_str("closed"),
        }
    }
}

/// A non-forked repository with its fetched sub-resources attached.
///
/// Built once per entry from the repositories endpoint and populated
/// incrementally by the aggregator; child collections only ever hold records
/// fetched with this repository's owner+name pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    pub name: String,
    pub owner: String,
    pub description: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub contributors: Vec<Contributor>,
    pub pull_requests: Vec<PullRequest>,
    pub issues: Vec<Issue>,
    pub commits: Vec<Commit>,
}

impl From<RawRepository> for Repository {
    fn from(raw: RawRepository) -> Self {
        Repository {
            name: raw.name,
            owner: raw.owner.login,
            description: raw.description,
            stars: raw.stargazers_count,
            forks: raw.forks_count,
            contributors: Vec::new(),
            pull_requests: Vec::new(),
            issues: Vec::new(),
            commits: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contributor {
    pub login: String,
    pub contributions: u32,
}

impl From<RawContributor> for Contributor {
    fn from(raw: RawContributor) -> Self {
        Contributor {
            login: raw.login,
            contributions: raw.contributions,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PullRequest {
    pub title: String,
    pub state: ItemState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RawPullRequest> for PullRequest {
    fn from(raw: RawPullRequest) -> Self {
        PullRequest {
            title: raw.title,
            state: raw.state,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub title: String,
    pub state: ItemState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RawIssue> for Issue {
    fn from(raw: RawIssue) -> Self {
        Issue {
            title: raw.title,
            state: raw.state,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}

/// A commit, flattened from the nested `commit.author` JSON structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    pub sha: String,
    pub author: String,
    pub message: String,
    pub date: DateTime<Utc>,
}

impl From<RawCommit> for Commit {
    fn from(raw: RawCommit) -> Self {
        Commit {
            sha: raw.sha,
            author: raw.commit.author.name,
            message: raw.commit.message,
            date: raw.commit.author.date,
        }
    }
}
