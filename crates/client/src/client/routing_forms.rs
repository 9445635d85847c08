//! Routing form operations.

use super::CalendlyClient;
use crate::error::Result;
use crate::transport::Transport;
use calendly_core::PathParams;
use serde_json::Value;

/// Query parameters for listing routing forms.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ListRoutingFormsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

/// Query parameters for listing routing form submissions.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ListSubmissionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl<T: Transport> CalendlyClient<T> {
    /// Get routing form by UUID.
    pub async fn get_routing_form(&self, uuid: &str) -> Result<Value> {
        self.call_by_uuid("get_routing_form", uuid).await
    }

    /// List routing forms of an organization.
    pub async fn list_routing_forms(&self, query: &ListRoutingFormsQuery) -> Result<Value> {
        self.call_with("list_routing_forms", PathParams::new(), query)
            .await
    }

    /// Get routing form submission by UUID.
    pub async fn get_routing_form_submission(&self, uuid: &str) -> Result<Value> {
        self.call_by_uuid("get_routing_form_submission", uuid).await
    }

    /// List submissions of a routing form.
    pub async fn list_routing_form_submissions(
        &self,
        query: &ListSubmissionsQuery,
    ) -> Result<Value> {
        self.call_with("list_routing_form_submissions", PathParams::new(), query)
            .await
    }
}
