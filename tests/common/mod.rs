#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use github_repo_report::github::GitHubClient;

pub const TEST_TOKEN: &str = "test-token";

pub fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::with_base_url(TEST_TOKEN.to_string(), server.uri())
        .expect("Failed to create client")
}

pub fn repo_entry(name: &str, owner: &str, fork: bool) -> Value {
    json!({
        "name": name,
        "owner": { "login": owner },
        "description": "Test repository",
        "stargazers_count": 3,
        "forks_count": 1,
        "fork": fork,
    })
}

pub fn commit_entry(sha: &str, author: &str, message: &str, date: &str) -> Value {
    json!({
        "sha": sha,
        "commit": {
            "message": message,
            "author": { "name": author, "date": date },
        },
    })
}

pub fn issue_entry(title: &str, state: &str) -> Value {
    json!({
        "title": title,
        "state": state,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z",
    })
}

/// Mount a 200 JSON response for a GET route.
pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a bare status response for a GET route.
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
