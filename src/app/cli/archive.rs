//! Archive-wide commands: init, validate, index.

use std::path::PathBuf;

use crate::app::api::{self, IndexOptions, IndexStatus, InitOptions, ValidateOptions};
use crate::domain::AppError;

pub fn run_init(
    root: PathBuf,
    owner: Option<String>,
    repo: Option<String>,
    branch: Option<String>,
) -> Result<(), AppError> {
    let outcome = api::init_at(root, InitOptions { owner, repo, branch })?;

    for path in &outcome.created {
        println!("  + {}", path);
    }
    if outcome.created.is_empty() {
        println!("✅ Archive already initialized");
    } else {
        println!(
            "✅ Initialized archive ({} created, {} existing)",
            outcome.created.len(),
            outcome.existing.len()
        );
    }
    Ok(())
}

pub fn run_validate(root: PathBuf, strict: bool) -> Result<i32, AppError> {
    let outcome = api::validate_at(root, ValidateOptions { strict })?;
    outcome.diagnostics.emit();

    let (errors, warnings) = (outcome.errors, outcome.warnings);
    if errors == 0 && warnings == 0 {
        println!("All checks passed.");
    } else if errors == 0 && !strict {
        eprintln!("Check completed with {} warning(s).", warnings);
    } else {
        eprintln!("Check failed: {} error(s), {} warning(s) found.", errors, warnings);
    }

    Ok(outcome.exit_code)
}

pub fn run_index(root: PathBuf, check: bool, stdout: bool) -> Result<(), AppError> {
    let outcome = api::index_at(root, IndexOptions { check, stdout })?;
    let total = outcome.index.statistics.total_documents;

    match outcome.status {
        IndexStatus::Printed => print!("{}", outcome.json),
        IndexStatus::Fresh => println!("✅ {} is up to date ({} documents)", outcome.path, total),
        IndexStatus::Unchanged => {
            println!("✅ {} already up to date ({} documents)", outcome.path, total)
        }
        IndexStatus::Written => println!("✅ Wrote {} ({} documents)", outcome.path, total),
    }
    Ok(())
}
