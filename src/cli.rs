use clap::Parser;

#[derive(Parser)]
#[command(name = "github-repo-report")]
#[command(about = "Reports contributors, pull requests, issues and commits for a user's non-forked repositories")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub username to report on (prompted for when omitted)
    #[arg(env = "GITHUB_USERNAME")]
    pub username: Option<String>,

    /// GitHub personal access token (prompted for when omitted)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}
