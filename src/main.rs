use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use github_repo_report::aggregator::Aggregator;
use github_repo_report::cli::Cli;
use github_repo_report::github::GitHubClient;
use github_repo_report::report;

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "GitHub Repository Report".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let username = match cli.username {
        Some(username) => username,
        None => prompt("Enter your GitHub username: ")?,
    };
    let token = match cli.token {
        Some(token) => token,
        None => prompt("Enter your GitHub token: ")?,
    };

    let client = GitHubClient::new(token).context("Failed to build HTTP client")?;
    let aggregator = Aggregator::new(client);

    let repositories = aggregator
        .collect(&username)
        .await
        .context("Failed to collect repository data")?;

    let stdout = io::stdout();
    report::write_report(&mut stdout.lock(), &repositories)?;

    Ok(())
}
