//! Document commands: list, url, add, remove.

use std::io::{ErrorKind, IsTerminal};
use std::path::PathBuf;

use dialoguer::{Error as DialoguerError, Select};

use super::format_size;
use crate::app::api::{self, ListOptions, UrlOptions};
use crate::domain::{AppError, Category};

pub fn run_list(root: PathBuf, category: Option<String>) -> Result<(), AppError> {
    let category = category.as_deref().map(Category::parse).transpose()?;
    let documents = api::list_at(root, ListOptions { category })?;

    if documents.is_empty() {
        println!("No documents found.");
        return Ok(());
    }

    let mut current: Option<Category> = None;
    for listed in &documents {
        let key = &listed.document.key;
        if current != Some(key.category) {
            println!("{} {}", key.category.icon(), key.category.display_name());
            current = Some(key.category);
        }
        println!("  {} ({})", key.name, format_size(listed.document.size));
        println!("    {}", listed.url);
    }
    println!("{} document(s)", documents.len());
    Ok(())
}

pub fn run_url(
    root: PathBuf,
    category: String,
    filename: String,
    check: bool,
) -> Result<(), AppError> {
    let url = api::url_at(root, UrlOptions { category, filename, check })?;
    println!("{}", url);
    Ok(())
}

pub fn run_add(
    root: PathBuf,
    source: PathBuf,
    category: Option<String>,
    name: Option<String>,
    replace: bool,
) -> Result<(), AppError> {
    let category = match category {
        Some(value) => Category::parse(&value)?,
        None => match prompt_category()? {
            Some(category) => category,
            None => return Ok(()),
        },
    };

    let outcome = api::add_at(root, &source, category, name.as_deref(), replace)?;
    let verb = if outcome.replaced { "Replaced" } else { "Added" };
    println!("✅ {} {} ({})", verb, outcome.key, format_size(outcome.size));
    println!("{}", outcome.url);
    Ok(())
}

pub fn run_remove(root: PathBuf, category: &str, filename: &str) -> Result<(), AppError> {
    let key = api::remove_at(root, category, filename)?;
    println!("✅ Removed {}", key);
    Ok(())
}

fn prompt_category() -> Result<Option<Category>, AppError> {
    if !std::io::stdin().is_terminal() {
        return Err(AppError::MissingArgument(
            "--category is required when not running interactively".into(),
        ));
    }

    let items: Vec<String> = Category::ALL
        .iter()
        .map(|category| format!("{} {}", category.icon(), category.dir_name()))
        .collect();

    match Select::new().with_prompt("Select category").items(&items).default(0).interact_opt() {
        Ok(selection) => Ok(selection.map(|index| Category::ALL[index])),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Io(std::io::Error::other(format!(
            "Failed to select category: {}",
            err
        )))),
    }
}
