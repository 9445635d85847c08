//! User API operations.

use super::CalendlyClient;
use crate::error::Result;
use crate::transport::Transport;
use calendly_core::{Params, PathParams};
use serde_json::Value;

impl<T: Transport> CalendlyClient<T> {
    /// Get user by UUID.
    pub async fn get_user(&self, uuid: &str) -> Result<Value> {
        self.call_by_uuid("get_user", uuid).await
    }

    /// Get the user the access token belongs to.
    pub async fn get_current_user(&self) -> Result<Value> {
        self.call("get_current_user", PathParams::new(), Params::new())
            .await
    }
}
