//! Activity log operations (Enterprise plans only).

use super::CalendlyClient;
use crate::error::Result;
use crate::transport::Transport;
use calendly_core::PathParams;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Query parameters for listing activity log entries.
///
/// `actor`, `namespace` and `action` accept several values; each is sent as a
/// repeated query key.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ListActivityLogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_occurred_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_occurred_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Vec<String>>,
}

impl<T: Transport> CalendlyClient<T> {
    /// List activity log entries of an organization.
    pub async fn list_activity_log_entries(&self, query: &ListActivityLogQuery) -> Result<Value> {
        self.call_with("list_activity_log_entries", PathParams::new(), query)
            .await
    }
}
