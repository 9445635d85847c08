//! Single-use scheduling links.

use super::CalendlyClient;
use crate::error::Result;
use crate::transport::Transport;
use calendly_core::values::OwnerType;
use calendly_core::PathParams;
use serde_json::Value;

/// Request for creating a single-use scheduling link.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct CreateSchedulingLinkRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_event_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_type: Option<OwnerType>,
}

impl CreateSchedulingLinkRequest {
    /// One booking against the given event type URI.
    pub fn for_event_type(event_type: impl Into<String>) -> Self {
        Self {
            max_event_count: Some(1),
            owner: Some(event_type.into()),
            owner_type: Some(OwnerType::EventType),
        }
    }
}

impl<T: Transport> CalendlyClient<T> {
    /// Create a scheduling link that expires after a number of bookings.
    pub async fn create_single_use_scheduling_link(
        &self,
        req: &CreateSchedulingLinkRequest,
    ) -> Result<Value> {
        self.call_with("create_single_use_scheduling_link", PathParams::new(), req)
            .await
    }
}
