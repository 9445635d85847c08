//! Scheduled event and invitee operations.

use super::CalendlyClient;
use crate::error::Result;
use crate::transport::Transport;
use calendly_core::values::{EventStatus, InviteeStatus};
use calendly_core::{Params, PathParams};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Query parameters for listing scheduled events.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ListEventsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitee_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Query parameters for listing the invitees of one event.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ListEventInviteesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InviteeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl<T: Transport> CalendlyClient<T> {
    /// List scheduled events with filters.
    pub async fn list_events(&self, query: &ListEventsQuery) -> Result<Value> {
        self.call_with("list_events", PathParams::new(), query).await
    }

    /// Get scheduled event by UUID.
    pub async fn get_event(&self, uuid: &str) -> Result<Value> {
        self.call_by_uuid("get_event", uuid).await
    }

    /// List the invitees of a scheduled event.
    pub async fn list_event_invitees(
        &self,
        uuid: &str,
        query: &ListEventInviteesQuery,
    ) -> Result<Value> {
        self.call_with(
            "list_event_invitees",
            PathParams::new().with("uuid", uuid),
            query,
        )
        .await
    }

    /// Get one invitee of a scheduled event.
    pub async fn get_event_invitee(&self, event_uuid: &str, invitee_uuid: &str) -> Result<Value> {
        self.call(
            "get_event_invitee",
            PathParams::new()
                .with("event_uuid", event_uuid)
                .with("invitee_uuid", invitee_uuid),
            Params::new(),
        )
        .await
    }
}
