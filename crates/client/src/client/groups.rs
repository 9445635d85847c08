//! Group API operations.

use super::CalendlyClient;
use crate::error::Result;
use crate::transport::Transport;
use calendly_core::PathParams;
use serde_json::Value;

/// Query parameters for listing groups.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ListGroupsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// Query parameters for listing group relationships.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ListGroupRelationshipsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl<T: Transport> CalendlyClient<T> {
    /// Get group by UUID.
    pub async fn get_group(&self, uuid: &str) -> Result<Value> {
        self.call_by_uuid("get_group", uuid).await
    }

    /// List groups of an organization.
    pub async fn list_groups(&self, query: &ListGroupsQuery) -> Result<Value> {
        self.call_with("list_groups", PathParams::new(), query).await
    }

    /// Get group relationship by UUID.
    pub async fn get_group_relationship(&self, uuid: &str) -> Result<Value> {
        self.call_by_uuid("get_group_relationship", uuid).await
    }

    /// List group relationships.
    pub async fn list_group_relationships(
        &self,
        query: &ListGroupRelationshipsQuery,
    ) -> Result<Value> {
        self.call_with("list_group_relationships", PathParams::new(), query)
            .await
    }
}
