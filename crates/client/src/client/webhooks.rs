//! Webhook subscription operations.

use super::CalendlyClient;
use crate::error::Result;
use crate::transport::Transport;
use calendly_core::values::WebhookScope;
use calendly_core::{Params, PathParams};
use serde_json::Value;

/// Query parameters for listing webhook subscriptions.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ListWebhooksQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<WebhookScope>,
}

/// Request for creating a webhook subscription.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct CreateWebhookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<WebhookScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Query parameters for sample webhook payloads.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct SampleWebhookQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<WebhookScope>,
}

fn webhook_path(webhook_uuid: &str) -> PathParams {
    PathParams::new().with("webhook_uuid", webhook_uuid)
}

impl<T: Transport> CalendlyClient<T> {
    /// Get webhook subscription by UUID.
    pub async fn get_webhook_subscription(&self, webhook_uuid: &str) -> Result<Value> {
        self.call(
            "get_webhook_subscription",
            webhook_path(webhook_uuid),
            Params::new(),
        )
        .await
    }

    /// Delete webhook subscription by UUID.
    pub async fn delete_webhook_subscription(&self, webhook_uuid: &str) -> Result<Value> {
        self.call(
            "delete_webhook_subscription",
            webhook_path(webhook_uuid),
            Params::new(),
        )
        .await
    }

    /// List webhook subscriptions with filters.
    pub async fn list_webhook_subscriptions(&self, query: &ListWebhooksQuery) -> Result<Value> {
        self.call_with("list_webhook_subscriptions", PathParams::new(), query)
            .await
    }

    /// Create a webhook subscription.
    pub async fn create_webhook_subscription(&self, req: &CreateWebhookRequest) -> Result<Value> {
        self.call_with("create_webhook_subscription", PathParams::new(), req)
            .await
    }

    /// Get a sample payload for a webhook event.
    pub async fn get_sample_webhook_data(&self, query: &SampleWebhookQuery) -> Result<Value> {
        self.call_with("get_sample_webhook_data", PathParams::new(), query)
            .await
    }
}
