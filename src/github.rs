use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ReportError, Resource, Result};
use crate::models::Commit;
use crate::types::{RawCommit, RawContributor, RawIssue, RawPullRequest, RawRepository};

const API_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "github-repo-report/0.1.0";

/// Thin authenticated client over the GitHub REST API.
///
/// Only the first page of each listing is fetched; there is no retry or
/// rate-limit handling. Any status other than 200 comes back as
/// [`ReportError::Status`] so the caller decides how to recover.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        Self::with_base_url(token, API_BASE_URL.to_string())
    }

    /// Point the client at an alternative API root, e.g. a mock server.
    pub fn with_base_url(token: String, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient {
            client,
            base_url,
            token,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: Resource, url: &str) -> Result<T> {
        debug!(%resource, url, "fetching");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .header("Authorization", format!("token {}", self.token))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ReportError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// List a user's repositories, forks included; filtering happens upstream.
    pub async fn fetch_repositories(&self, username: &str) -> Result<Vec<RawRepository>> {
        let url = format!("{}/users/{}/repos", self.base_url, username);
        self.get_json(Resource::Repositories, &url).await
    }

    pub async fn fetch_contributors(&self, owner: &str, repo: &str) -> Result<Vec<RawContributor>> {
        let url = format!("{}/repos/{}/{}/contributors", self.base_url, owner, repo);
        self.get_json(Resource::Contributors, &url).await
    }

    /// List issues. The endpoint also returns pull requests (issues are a
    /// superset resource upstream); entries are passed through unfiltered.
    pub async fn fetch_issues(&self, owner: &str, repo: &str) -> Result<Vec<RawIssue>> {
        let url = format!("{}/repos/{}/{}/issues", self.base_url, owner, repo);
        self.get_json(Resource::Issues, &url).await
    }

    pub async fn fetch_pull_requests(&self, owner: &str, repo: &str) -> Result<Vec<RawPullRequest>> {
        let url = format!("{}/repos/{}/{}/pulls", self.base_url, owner, repo);
        self.get_json(Resource::PullRequests, &url).await
    }

    /// List commits, mapped eagerly into domain records since the interesting
    /// fields live two levels deep in the payload.
    pub async fn fetch_commits(&self, owner: &str, repo: &str) -> Result<Vec<Commit>> {
        let url = format!("{}/repos/{}/{}/commits", self.base_url, owner, repo);
        let raw: Vec<RawCommit> = self.get_json(Resource::Commits, &url).await?;
        Ok(raw.into_iter().map(Commit::from).collect())
    }
}
