mod dispatch_client;
mod document_store;
mod git;

pub use dispatch_client::{DispatchClient, DispatchResponse};
pub use document_store::{DocumentStore, EntryMetadata};
pub use git::GitPort;
