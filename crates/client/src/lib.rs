//! calendly_client - HTTP client and CLI for the Calendly API.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod transport;

pub use client::CalendlyClient;
pub use config::{AccessToken, ClientConfig};
pub use error::{ClientError, Result};
pub use transport::{HttpTransport, Transport};

pub use calendly_core::{Params, PathParams};
