mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
#[cfg(test)]
mod testing;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::start::{self, StartCommandOutcome};
use crate::config::{AppConfig, RunOverrides};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::fzf::FzfSelector;
use crate::infra::gh::GhCli;
use crate::infra::git::GitCli;
use crate::infra::jira::JiraClient;
use crate::workflow::start::{BranchAction, PullRequestOutcome};

#[derive(Parser)]
#[command(
    name = "jiraflow",
    author,
    version,
    about = "Start work on a Jira issue: branch, placeholder commit, upstream and draft PR"
)]
struct Cli {
    /// Log every external command that is run.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick an open issue and prepare its branch and pull request (default).
    Start(StartArgs),
}

#[derive(Args, Default)]
struct StartArgs {
    /// Jira project/board key to search.
    #[arg(short, long)]
    board: Option<String>,
    /// Issue status to search for, quoted for JQL when it has spaces.
    #[arg(short, long)]
    status: Option<String>,
    /// Component an issue must carry to be offered for selection.
    #[arg(short, long)]
    component: Option<String>,
    /// Pull request body template; `{{ISSUE_ID}}` is replaced with the issue key.
    #[arg(short, long)]
    template: Option<PathBuf>,
    /// Remote to push the new branch to.
    #[arg(short, long)]
    remote: Option<String>,
}

impl From<StartArgs> for RunOverrides {
    fn from(args: StartArgs) -> Self {
        Self {
            board: args.board,
            status: args.status,
            component: args.component,
            template: args.template,
            remote: args.remote,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(error) = run(cli).await {
        eprintln!("Error: {error}");
        if let Some(stage) = error.stage() {
            eprintln!("Stopped at the {stage} stage; rerun to resume.");
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,jiraflow={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

async fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Some(Commands::Start(args)) => run_start(args).await,
        None => run_start(StartArgs::default()).await,
    }
}

async fn run_start(args: StartArgs) -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd, args.into())?;

    let issue_tracker = Arc::new(JiraClient::new(
        config.jira_domain.clone(),
        config.jira_token.clone(),
    ));
    let selector = Arc::new(FzfSelector::new(config.workspace_root.clone()));
    let git = Arc::new(GitCli::new(config.workspace_root.clone()));
    let gh = Arc::new(GhCli::new(config.workspace_root.clone()));

    let context = AppContext::new(config, issue_tracker, selector, git, gh);

    let outcome = start::run(&context).await?;
    print_summary(&outcome);
    Ok(())
}

fn print_summary(outcome: &StartCommandOutcome) {
    let verb = match outcome.work.branch_action {
        BranchAction::Created => "created",
        BranchAction::Switched => "switched to",
    };
    println!(
        "Issue {}: {} branch {}",
        outcome.issue.key,
        verb,
        outcome.work.branch.as_str()
    );
    match &outcome.work.pull_request {
        Some(PullRequestOutcome::Created(draft)) => {
            println!("Draft pull request created: {}", draft.title)
        }
        Some(PullRequestOutcome::AlreadyOpen) => println!("Pull request already open."),
        None => println!("Branch already has commits; push and pull request were skipped."),
    }
}
