//! Structural checks over the archive tree.

mod readme;
mod structure;

use chrono::Utc;

use crate::app::AppContext;
use crate::app::commands::index;
use crate::app::config::ArchiveSettings;
use crate::domain::config::paths::CONFIG_FILE;
use crate::domain::{AppError, Diagnostics};
use crate::ports::{DocumentStore, GitPort};

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOptions {
    /// Treat warnings as failures.
    pub strict: bool,
}

#[derive(Debug)]
pub struct ValidateOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
    pub diagnostics: Diagnostics,
}

pub fn execute<S: DocumentStore, G: GitPort>(
    ctx: &AppContext<S, G>,
    options: ValidateOptions,
) -> Result<ValidateOutcome, AppError> {
    let store = ctx.store();
    let mut diagnostics = Diagnostics::default();

    structure::root_checks(store, &mut diagnostics)?;
    structure::category_checks(store, &mut diagnostics)?;

    match ctx.settings() {
        Ok(settings) => {
            readme::readme_checks(store, Some(&settings), &mut diagnostics)?;
            index_checks(store, &settings, &mut diagnostics)?;
        }
        Err(e) => {
            diagnostics.push_error(CONFIG_FILE, e.to_string());
            readme::readme_checks(store, None, &mut diagnostics)?;
        }
    }

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    Ok(ValidateOutcome { errors, warnings, exit_code, diagnostics })
}

fn index_checks<S: DocumentStore + ?Sized>(
    store: &S,
    settings: &ArchiveSettings,
    diagnostics: &mut Diagnostics,
) -> Result<(), AppError> {
    let file = settings.index_file();
    if !store.exists(file) {
        return Ok(());
    }

    let current = index::build_index(store, settings, Utc::now())?;
    match index::check_fresh(store, settings, &current) {
        Ok(()) => Ok(()),
        Err(AppError::IndexStale(message)) => {
            diagnostics.push_warning(file, format!("{message}; run 'bntf-docs index'"));
            Ok(())
        }
        Err(e) => Err(e),
    }
}
