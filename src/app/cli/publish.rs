//! Publishing commands: notify, webhook, sync.

use std::path::PathBuf;

use crate::app::api::{self, NotificationStatus, NotifyOptions, SyncOptions};
use crate::domain::AppError;

pub fn run_notify(root: PathBuf, dry_run: bool) -> Result<(), AppError> {
    let outcome = api::notify_at(root, NotifyOptions { dry_run })?;

    match outcome.response {
        None => println!("{}", serde_json::to_string_pretty(&outcome.payload)?),
        Some(response) => println!(
            "✅ Sent {} event ({} documents, HTTP {})",
            outcome.payload.event_type,
            outcome.payload.client_payload.total_documents,
            response.status
        ),
    }
    Ok(())
}

pub fn run_webhook(root: PathBuf) -> Result<(), AppError> {
    let outcome = api::webhook_at(root)?;
    println!("✅ Wrote {} for {}", outcome.path, outcome.config.config.url);
    Ok(())
}

pub fn run_sync(
    root: PathBuf,
    push: bool,
    notify: bool,
    message: Option<String>,
) -> Result<(), AppError> {
    let outcome = api::sync_at(root, SyncOptions { push, notify, message })?;

    let Some(commit) = &outcome.commit else {
        println!("✅ Nothing to sync");
        return Ok(());
    };

    if outcome.index_written {
        println!("  Regenerated index");
    }
    println!("✅ Committed {} change(s): {}", outcome.changed_paths.len(), commit.message);
    if let Some((remote, branch)) = &outcome.pushed {
        println!("✅ Pushed {} to {}", branch, remote);
    }

    match &outcome.notification {
        NotificationStatus::Sent { updated_categories, .. } => {
            println!("✅ Notified the app ({})", updated_categories.join(", "));
        }
        NotificationStatus::Skipped(reason) => println!("⚠️  Notification skipped: {}", reason),
        NotificationStatus::Failed(reason) => eprintln!("⚠️  Notification failed: {}", reason),
    }
    Ok(())
}
