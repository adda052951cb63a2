//! `repository_dispatch` payload announcing a document update to the app.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchPayload {
    pub event_type: String,
    pub client_payload: UpdateSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    pub timestamp: String,
    pub total_documents: usize,
    pub category_counts: BTreeMap<String, usize>,
    pub updated_categories: Vec<String>,
    pub index_url: String,
    pub version: String,
}
