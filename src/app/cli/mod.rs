//! CLI Adapter.

mod archive;
mod documents;
mod publish;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "bntf-docs")]
#[command(version)]
#[command(about = "Maintain the BNTF PDF document archive served to the app", long_about = None)]
struct Cli {
    /// Archive root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create category folders, README, config and index
    #[clap(visible_alias = "i")]
    Init {
        /// GitHub owner of the archive repository
        #[arg(long)]
        owner: Option<String>,
        /// Archive repository name
        #[arg(long)]
        repo: Option<String>,
        /// Branch the app reads from
        #[arg(long)]
        branch: Option<String>,
    },
    /// List documents with their raw URLs
    #[clap(visible_alias = "ls")]
    List {
        /// Only list one category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Print the raw URL of a document
    #[clap(visible_alias = "u")]
    Url {
        category: String,
        filename: String,
        /// Fail unless the document exists locally
        #[arg(long)]
        check: bool,
    },
    /// Copy a PDF into a category folder
    #[clap(visible_alias = "a")]
    Add {
        /// PDF file to copy
        source: PathBuf,
        /// Target category (prompted when omitted)
        #[arg(short, long)]
        category: Option<String>,
        /// File name in the archive (defaults to the source file name)
        #[arg(short, long)]
        name: Option<String>,
        /// Overwrite an existing document
        #[arg(long)]
        replace: bool,
    },
    /// Delete a document
    #[clap(visible_alias = "rm")]
    Remove { category: String, filename: String },
    /// Check the archive structure
    #[clap(visible_alias = "v")]
    Validate {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Generate the document index
    #[clap(visible_alias = "ix")]
    Index {
        /// Fail if the committed index is stale instead of writing
        #[arg(long, conflicts_with = "stdout")]
        check: bool,
        /// Print the index instead of writing it
        #[arg(long)]
        stdout: bool,
    },
    /// Notify the app repository that documents changed
    #[clap(visible_alias = "n")]
    Notify {
        /// Print the payload without sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// Write the webhook configuration document
    Webhook,
    /// Regenerate the index, commit, push, and notify
    #[clap(visible_alias = "s")]
    Sync {
        /// Commit without pushing
        #[arg(long)]
        no_push: bool,
        /// Skip the app notification
        #[arg(long)]
        no_notify: bool,
        /// Commit message prefix
        #[arg(short, long)]
        message: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = execute(cli);

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn execute(cli: Cli) -> Result<i32, AppError> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { owner, repo, branch } => {
            archive::run_init(root, owner, repo, branch).map(|_| 0)
        }
        Commands::List { category } => documents::run_list(root, category).map(|_| 0),
        Commands::Url { category, filename, check } => {
            documents::run_url(root, category, filename, check).map(|_| 0)
        }
        Commands::Add { source, category, name, replace } => {
            documents::run_add(root, source, category, name, replace).map(|_| 0)
        }
        Commands::Remove { category, filename } => {
            documents::run_remove(root, &category, &filename).map(|_| 0)
        }
        Commands::Validate { strict } => archive::run_validate(root, strict),
        Commands::Index { check, stdout } => archive::run_index(root, check, stdout).map(|_| 0),
        Commands::Notify { dry_run } => publish::run_notify(root, dry_run).map(|_| 0),
        Commands::Webhook => publish::run_webhook(root).map(|_| 0),
        Commands::Sync { no_push, no_notify, message } => {
            publish::run_sync(root, !no_push, !no_notify, message).map(|_| 0)
        }
    }
}

/// Human-readable byte size.
fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f < KB {
        format!("{bytes} B")
    } else if bytes_f < KB * KB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{:.1} MB", bytes_f / (KB * KB))
    }
}
