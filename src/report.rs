use std::io::Write;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::Result;
use crate::models::Repository;

fn timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render one block per repository: identity fields, then contributors, pull
/// requests, open issues and commits, each in the order the API returned them.
pub fn write_report<W: Write>(out: &mut W, repositories: &[Repository]) -> Result<()> {
    for repo in repositories {
        writeln!(out, "Repository: {}", repo.name)?;
        writeln!(out, "Owner: {}", repo.owner)?;
        writeln!(
            out,
            "Description: {}",
            repo.description.as_deref().unwrap_or("(none)")
        )?;
        writeln!(out, "Stars: {}", repo.stars)?;
        writeln!(out, "Forks: {}", repo.forks)?;

        writeln!(out, "Contributors:")?;
        for contributor in &repo.contributors {
            writeln!(
                out,
                "- {} ({} contributions)",
                contributor.login, contributor.contributions
            )?;
        }

        writeln!(out, "Pull Requests:")?;
        for pr in &repo.pull_requests {
            writeln!(
                out,
                "- {} ({}) Created: {}, Updated: {}",
                pr.title,
                pr.state,
                timestamp(&pr.created_at),
                timestamp(&pr.updated_at)
            )?;
        }

        writeln!(out, "Open Issues:")?;
        for issue in &repo.issues {
            writeln!(
                out,
                "- {} ({}) Created: {}, Updated: {}",
                issue.title,
                issue.state,
                timestamp(&issue.created_at),
                timestamp(&issue.updated_at)
            )?;
        }

        writeln!(out, "Commits:")?;
        for commit in &repo.commits {
            writeln!(out, "- SHA: {}", commit.sha)?;
            writeln!(out, "  Author: {}", commit.author)?;
            writeln!(out, "  Message: {}", commit.message)?;
            writeln!(out, "  Date: {}", timestamp(&commit.date))?;
        }

        writeln!(out)?;
    }

    Ok(())
}
