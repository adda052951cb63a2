//! Scaffold a new archive: category folders, README, config, index.

use chrono::{DateTime, Utc};

use crate::adapters::assets::{ScaffoldContext, render_config, render_readme};
use crate::app::AppContext;
use crate::app::commands::{catalog, index};
use crate::app::config::{self, ArchiveSettings};
use crate::domain::config::paths::{self, CONFIG_FILE, README_FILE};
use crate::domain::{AppError, Category};
use crate::ports::{DocumentStore, GitPort};

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct InitOutcome {
    /// Paths written, folders with a trailing `/`.
    pub created: Vec<String>,
    /// Paths that already existed and were left untouched.
    pub existing: Vec<String>,
}

pub fn execute<S: DocumentStore, G: GitPort>(
    ctx: &AppContext<S, G>,
    options: InitOptions,
    generated_at: DateTime<Utc>,
) -> Result<InitOutcome, AppError> {
    let store = ctx.store();
    let config_exists = store.exists(CONFIG_FILE);

    let mut archive_config = config::load_config(store)?;
    if config_exists && (options.owner.is_some() || options.repo.is_some() || options.branch.is_some())
    {
        log::warn!("{CONFIG_FILE} already exists; command-line repository options apply to this run only");
    }
    if let Some(owner) = options.owner {
        archive_config.repository.owner = Some(owner);
    }
    if let Some(repo) = options.repo {
        archive_config.repository.name = Some(repo);
    }
    if let Some(branch) = options.branch {
        archive_config.repository.branch = branch;
    }
    archive_config.validate()?;
    let settings = config::resolve_settings(archive_config, ctx.git())?;

    let mut outcome = InitOutcome::default();

    for category in Category::ALL {
        let dir = paths::category_dir(category);
        if store.is_dir(dir) {
            outcome.existing.push(format!("{dir}/"));
            continue;
        }
        store.create_dir_all(dir)?;
        store.write_bytes(&paths::keep_file(category), b"")?;
        outcome.created.push(format!("{dir}/"));
    }

    let scaffold = scaffold_context(store, &settings)?;

    if store.exists(README_FILE) {
        outcome.existing.push(README_FILE.to_string());
    } else {
        store.write_text(README_FILE, &render_readme(&scaffold)?)?;
        outcome.created.push(README_FILE.to_string());
    }

    if config_exists {
        outcome.existing.push(CONFIG_FILE.to_string());
    } else {
        store.write_text(CONFIG_FILE, &render_config(&scaffold)?)?;
        outcome.created.push(CONFIG_FILE.to_string());
    }

    let index_file = settings.index_file().to_string();
    if store.exists(&index_file) {
        outcome.existing.push(index_file);
    } else {
        let built = index::build_index(store, &settings, generated_at)?;
        index::write_index(store, &settings, &built)?;
        outcome.created.push(index_file);
    }

    Ok(outcome)
}

fn scaffold_context<S: DocumentStore + ?Sized>(
    store: &S,
    settings: &ArchiveSettings,
) -> Result<ScaffoldContext, AppError> {
    let example = catalog::scan_documents(store)?
        .first()
        .map(|document| {
            (document.key.relative_path(), settings.raw.document_url(&document.key).to_string())
        });
    let config = &settings.config;

    Ok(ScaffoldContext {
        owner: config.repository.owner.clone(),
        repo: settings.repo.clone(),
        branch: settings.branch().to_string(),
        template: settings.raw.template(),
        example,
        index_url: settings.index_url().to_string(),
        index_file: config.index.file.clone(),
        index_version: config.index.version.clone(),
        app_repository: config.notify.app_repository.clone(),
        event_type: config.notify.event_type.clone(),
        token_env: config.notify.token_env.clone(),
        remote: config.sync.remote.clone(),
        commit_message: config.sync.commit_message.clone(),
    })
}
