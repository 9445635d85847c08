//! Invitee no-show operations.

use super::CalendlyClient;
use crate::error::Result;
use crate::transport::Transport;
use calendly_core::{Params, PathParams};
use serde_json::Value;

impl<T: Transport> CalendlyClient<T> {
    /// Get invitee no-show by UUID.
    pub async fn get_invitee_no_show(&self, uuid: &str) -> Result<Value> {
        self.call_by_uuid("get_invitee_no_show", uuid).await
    }

    /// Undo a no-show mark.
    pub async fn delete_invitee_no_show(&self, uuid: &str) -> Result<Value> {
        self.call_by_uuid("delete_invitee_no_show", uuid).await
    }

    /// Mark an invitee (by URI) as a no-show.
    pub async fn create_invitee_no_show(&self, invitee: Option<&str>) -> Result<Value> {
        self.call(
            "create_invitee_no_show",
            PathParams::new(),
            Params::new().with_opt("invitee", invitee),
        )
        .await
    }
}
