//! Event type operations.

use super::CalendlyClient;
use crate::error::Result;
use crate::transport::Transport;
use calendly_core::PathParams;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// Query parameters for listing event types.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ListEventTypesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_availability_schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_managed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// Query parameters for listing the hosts of an event type.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ListEventTypeHostsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// Query parameters for available start times. The range may span at most a week.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct AvailableTimesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

/// Request for creating a one-off event type.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct CreateOneOffEventTypeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co_hosts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_setting: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Request for sharing a customized copy of an event type.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct CreateShareRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_rule: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_location: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_configurations: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_booking_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl<T: Transport> CalendlyClient<T> {
    /// Get event type by UUID.
    pub async fn get_event_type(&self, uuid: &str) -> Result<Value> {
        self.call_by_uuid("get_event_type", uuid).await
    }

    /// List event types of a user or organization.
    pub async fn list_event_types(&self, query: &ListEventTypesQuery) -> Result<Value> {
        self.call_with("list_event_types", PathParams::new(), query)
            .await
    }

    /// List the hosts assigned to an event type.
    pub async fn list_event_type_hosts(&self, query: &ListEventTypeHostsQuery) -> Result<Value> {
        self.call_with("list_event_type_hosts", PathParams::new(), query)
            .await
    }

    /// List bookable start times of an event type.
    pub async fn list_event_type_available_times(
        &self,
        query: &AvailableTimesQuery,
    ) -> Result<Value> {
        self.call_with("list_event_type_available_times", PathParams::new(), query)
            .await
    }

    /// Create a one-off event type.
    pub async fn create_one_off_event_type(
        &self,
        req: &CreateOneOffEventTypeRequest,
    ) -> Result<Value> {
        self.call_with("create_one_off_event_type", PathParams::new(), req)
            .await
    }

    /// Create a share of an event type.
    pub async fn create_share(&self, req: &CreateShareRequest) -> Result<Value> {
        self.call_with("create_share", PathParams::new(), req).await
    }
}
