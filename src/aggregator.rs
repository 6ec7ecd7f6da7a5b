use tracing::{debug, warn};

use crate::error::{ReportError, Result};
use crate::github::GitHubClient;
use crate::models::{Contributor, Issue, PullRequest, Repository};

/// Drives the client to turn a username into fully populated repository
/// records. Fetches are strictly sequential, one request in flight at a time.
pub struct Aggregator {
    client: GitHubClient,
}

impl Aggregator {
    pub fn new(client: GitHubClient) -> Self {
        Aggregator { client }
    }

    /// Fetch every non-fork repository of `username` with its contributors,
    /// pull requests, issues and commits attached, in API order.
    ///
    /// A non-200 answer for any single resource is logged and yields an empty
    /// collection in its place; the run continues. Transport and parse errors
    /// abort the run.
    pub async fn collect(&self, username: &str) -> Result<Vec<Repository>> {
        let raw_repos = recover(self.client.fetch_repositories(username).await)?;

        let mut repositories = Vec::new();
        for raw in raw_repos {
            if raw.fork {
                debug!(repo = %raw.name, "skipping fork");
                continue;
            }

            let mut repo = Repository::from(raw);

            repo.contributors =
                recover(self.client.fetch_contributors(&repo.owner, &repo.name).await)?
                    .into_iter()
                    .map(Contributor::from)
                    .collect();

            repo.pull_requests =
                recover(self.client.fetch_pull_requests(&repo.owner, &repo.name).await)?
                    .into_iter()
                    .map(PullRequest::from)
                    .collect();

            repo.issues = recover(self.client.fetch_issues(&repo.owner, &repo.name).await)?
                .into_iter()
                .map(Issue::from)
                .collect();

            repo.commits = recover(self.client.fetch_commits(&repo.owner, &repo.name).await)?;

            repositories.push(repo);
        }

        Ok(repositories)
    }
}

/// Downgrade an API-status failure to an empty collection, keeping the
/// distinction visible through a single diagnostic per failed fetch. Note this
/// makes "fetch failed" indistinguishable from "truly empty" downstream.
fn recover<T>(result: Result<Vec<T>>) -> Result<Vec<T>> {
    match result {
        Ok(items) => Ok(items),
        Err(ReportError::Status { resource, status }) => {
            warn!(%resource, status, "GitHub API request failed, treating as empty");
            Ok(Vec::new())
        }
        Err(other) => Err(other),
    }
}
