//! Data compliance deletion requests.
//!
//! Both calls are accepted asynchronously by Calendly; the response carries
//! no resource.

use super::CalendlyClient;
use crate::error::Result;
use crate::transport::Transport;
use calendly_core::PathParams;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Request for deleting all data of invitees by email.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct DeleteInviteeDataRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
}

/// Request for deleting scheduled event data in a time range.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct DeleteEventDataRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
}

impl<T: Transport> CalendlyClient<T> {
    /// Remove all data Calendly holds for the given invitee emails.
    pub async fn delete_invitee_data(&self, req: &DeleteInviteeDataRequest) -> Result<Value> {
        self.call_with("delete_invitee_data", PathParams::new(), req)
            .await
    }

    /// Remove scheduled event data between `start_time` and `end_time`.
    pub async fn delete_scheduled_event_data(&self, req: &DeleteEventDataRequest) -> Result<Value> {
        self.call_with("delete_scheduled_event_data", PathParams::new(), req)
            .await
    }
}
