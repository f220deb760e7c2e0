mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use snag::{io, IssueManager, IssueStore};

#[derive(Parser)]
#[command(name = "snag")]
#[command(about = "A simple, lean issue tracker CLI")]
#[command(version)]
struct Cli {
    /// Issue set to operate on
    #[arg(
        long,
        global = true,
        env = "SNAG_FILE",
        default_value = "issues.json"
    )]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new issue
    Add {
        /// Issue name
        name: String,
        /// Days since the issue was last updated
        #[arg(long, default_value_t = 0)]
        age: i64,
        /// Issue author
        #[arg(short, long, default_value = "")]
        author: String,
        /// Label (repeatable)
        #[arg(short, long = "label")]
        labels: Vec<String>,
        /// Project name
        #[arg(short, long, default_value = "")]
        project: String,
        /// Milestone name
        #[arg(short, long, default_value = "")]
        milestone: String,
        /// Assignee
        #[arg(long, default_value = "")]
        assignee: String,
        /// Create the issue in the closed state
        #[arg(long)]
        closed: bool,
    },

    /// List issues
    List {
        /// Filter by state (open, closed, all)
        #[arg(short, long, default_value = "open")]
        state: String,
        /// Filter by label
        #[arg(short, long)]
        label: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find issues matching a text exactly (name, author, project, milestone
    /// or assignee, case-insensitive)
    Search {
        /// Text to match
        text: String,
    },

    /// List issues by staleness, most days since update first
    Sort {
        /// Least stale first instead
        #[arg(short, long)]
        reverse: bool,
    },

    /// Show issue details
    Show {
        /// Issue ID
        id: i64,
    },

    /// Open an issue
    Open {
        /// Issue ID
        id: i64,
    },

    /// Close an issue
    Close {
        /// Issue ID
        id: i64,
    },

    /// Remove an issue
    Remove {
        /// Issue ID
        id: i64,
    },
}

fn load_manager(file: &Path) -> Result<IssueManager> {
    let mut store = IssueStore::new();
    store.save_all(io::load_issues(file)?);
    Ok(IssueManager::new(store))
}

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("snag=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut manager = load_manager(&cli.file)?;

    match cli.command {
        Commands::Add {
            name,
            age,
            author,
            labels,
            project,
            milestone,
            assignee,
            closed,
        } => {
            commands::add::run(
                &mut manager,
                &name,
                age,
                &author,
                labels,
                &project,
                &milestone,
                &assignee,
                !closed,
            )?;
            io::save_issues(&cli.file, manager.get_all())
        }

        Commands::List { state, label, json } => {
            commands::list::run(&manager, &state, label.as_deref(), json)
        }

        Commands::Search { text } => commands::search::run(&manager, &text),

        Commands::Sort { reverse } => commands::sort::run(&manager, reverse),

        Commands::Show { id } => commands::show::run(&manager, id),

        Commands::Open { id } => {
            commands::status::open(&mut manager, id)?;
            io::save_issues(&cli.file, manager.get_all())
        }

        Commands::Close { id } => {
            commands::status::close(&mut manager, id)?;
            io::save_issues(&cli.file, manager.get_all())
        }

        Commands::Remove { id } => {
            commands::delete::run(&mut manager, id)?;
            io::save_issues(&cli.file, manager.get_all())
        }
    }
}
