//! Busy times and availability schedules.

use super::CalendlyClient;
use crate::error::Result;
use crate::transport::Transport;
use calendly_core::{Params, PathParams};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Query parameters for a user's busy times. The range may span at most a week.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct UserBusyTimesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

impl<T: Transport> CalendlyClient<T> {
    /// List busy time ranges of a user, including external calendar events.
    pub async fn list_user_busy_times(&self, query: &UserBusyTimesQuery) -> Result<Value> {
        self.call_with("list_user_busy_times", PathParams::new(), query)
            .await
    }

    /// Get availability schedule by UUID.
    pub async fn get_user_availability_schedule(&self, uuid: &str) -> Result<Value> {
        self.call_by_uuid("get_user_availability_schedule", uuid)
            .await
    }

    /// List availability schedules, optionally for one user URI.
    pub async fn list_user_availability_schedules(&self, user: Option<&str>) -> Result<Value> {
        self.call(
            "list_user_availability_schedules",
            PathParams::new(),
            Params::new().with_opt("user", user),
        )
        .await
    }
}
