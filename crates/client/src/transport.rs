//! HTTP transport.

use std::sync::Arc;

use async_trait::async_trait;
use calendly_core::{Method, RawResponse, Request};
use reqwest::header::{HeaderValue, ACCEPT};

use crate::config::{AccessToken, ClientConfig};
use crate::error::Result;

/// Sends a resolved request and returns the response as received.
///
/// Implementations must not interpret the status code.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &Request) -> Result<RawResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: &Request) -> Result<RawResponse> {
        (**self).send(request).await
    }
}

/// Transport backed by a shared `reqwest` connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    token: AccessToken,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            token: config.token.clone(),
        })
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &Request) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(http_method(request.method), request.url.clone())
            .bearer_auth(self.token.secret())
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
