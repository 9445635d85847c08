//! HTTP client for the Calendly API.
//!
//! Every operation goes through [`CalendlyClient::execute`]: the request is
//! assembled by `calendly_core`, sent by a [`Transport`], and the response
//! decoded by `calendly_core` again. The typed methods in the submodules are
//! thin wrappers that name the operation and serialize their arguments.

pub mod activity_log;
pub mod availability;
pub mod data_compliance;
pub mod event_types;
pub mod groups;
pub mod no_shows;
pub mod organizations;
pub mod routing_forms;
pub mod scheduled_events;
pub mod scheduling_links;
pub mod users;
pub mod webhooks;

use std::sync::Arc;

use calendly_core::{
    build_request, decode_response, find_operation, Operation, Params, PathParams,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::transport::{HttpTransport, Transport};

/// HTTP client for the Calendly API.
#[derive(Debug)]
pub struct CalendlyClient<T = HttpTransport> {
    transport: Arc<T>,
    base_url: Url,
}

impl<T> Clone for CalendlyClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base_url: self.base_url.clone(),
        }
    }
}

impl CalendlyClient<HttpTransport> {
    /// Create a new client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config.base_url, transport))
    }

    /// Create from environment (see [`ClientConfig::from_env`]).
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> CalendlyClient<T> {
    /// Create a client sending through a custom transport.
    pub fn with_transport(base_url: Url, transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            base_url,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Run a catalog operation by name.
    pub async fn call(&self, operation: &str, path: PathParams, params: Params) -> Result<Value> {
        let operation = find_operation(operation)
            .ok_or_else(|| ClientError::UnknownOperation(operation.to_string()))?;
        self.execute(operation, &path, &params).await
    }

    /// Build, send and decode one request.
    pub async fn execute(
        &self,
        operation: &'static Operation,
        path: &PathParams,
        params: &Params,
    ) -> Result<Value> {
        let request = build_request(&self.base_url, operation, path, params)?;

        debug!(
            operation = operation.name,
            method = %request.method,
            path = request.path(),
            "sending request"
        );
        let response = self.transport.send(&request).await?;
        debug!(
            operation = operation.name,
            status = response.status,
            "received response"
        );

        Ok(decode_response(operation, &response)?)
    }

    /// Run an operation whose optional parameters come from a serializable struct.
    async fn call_with<Q: Serialize>(
        &self,
        operation: &str,
        path: PathParams,
        params: &Q,
    ) -> Result<Value> {
        self.call(operation, path, Params::from_serialize(params)?)
            .await
    }

    /// Run an operation that takes a single `uuid` path parameter and nothing else.
    async fn call_by_uuid(&self, operation: &str, uuid: &str) -> Result<Value> {
        self.call(operation, PathParams::new().with("uuid", uuid), Params::new())
            .await
    }
}
