use chrono::{TimeZone, Utc};

use github_repo_report::models::{Commit, Contributor, Issue, ItemState, PullRequest, Repository};
use github_repo_report::report::write_report;

fn sample_repository() -> Repository {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    Repository {
        name: "tool".to_string(),
        owner: "alice".to_string(),
        description: Some("A little tool".to_string()),
        stars: 42,
        forks: 7,
        contributors: vec![
            Contributor {
                login: "zoe".to_string(),
                contributions: 1,
            },
            Contributor {
                login: "bob".to_string(),
                contributions: 4,
            },
        ],
        pull_requests: vec![PullRequest {
            title: "Add feature".to_string(),
            state: ItemState::Open,
            created_at: t0,
            updated_at: t1,
        }],
        issues: vec![Issue {
            title: "Crash on start".to_string(),
            state: ItemState::Closed,
            created_at: t0,
            updated_at: t1,
        }],
        commits: vec![Commit {
            sha: "abc123".to_string(),
            author: "Bob".to_string(),
            message: "fix bug".to_string(),
            date: t0,
        }],
    }
}

fn render(repositories: &[Repository]) -> String {
    let mut out = Vec::new();
    write_report(&mut out, repositories).expect("Failed to write report");
    String::from_utf8(out).expect("Report is not valid UTF-8")
}

#[test]
fn test_transcript_layout() {
    let transcript = render(&[sample_repository()]);

    let expected = "\
Repository: tool
Owner: alice
Description: A little tool
Stars: 42
Forks: 7
Contributors:
- zoe (1 contributions)
- bob (4 contributions)
Pull Requests:
- Add feature (open) Created: 2024-01-01T00:00:00Z, Updated: 2024-01-02T00:00:00Z
Open Issues:
- Crash on start (closed) Created: 2024-01-01T00:00:00Z, Updated: 2024-01-02T00:00:00Z
Commits:
- SHA: abc123
  Author: Bob
  Message: fix bug
  Date: 2024-01-01T00:00:00Z

";

    assert_eq!(transcript, expected);
}

#[test]
fn test_missing_description_renders_placeholder() {
    let mut repo = sample_repository();
    repo.description = None;

    let transcript = render(&[repo]);
    assert!(transcript.contains("Description: (none)"));
}

#[test]
fn test_empty_input_renders_nothing() {
    assert_eq!(render(&[]), "");
}

#[test]
fn test_blocks_follow_input_order() {
    let mut second = sample_repository();
    second.name = "another".to_string();

    let transcript = render(&[sample_repository(), second]);

    let first_pos = transcript.find("Repository: tool").unwrap();
    let second_pos = transcript.find("Repository: another").unwrap();
    assert!(first_pos < second_pos);
}
