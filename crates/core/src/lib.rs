//! calendly_core - operation catalog, request builder and response handler
//! for the Calendly REST API.
//!
//! Everything in this crate is pure: requests are assembled and responses
//! interpreted without touching the network. The `calendly_client` crate
//! supplies the transport.

pub mod catalog;
pub mod request;
pub mod response;
pub mod values;

pub use catalog::{find_operation, Method, Operation, ParamLocation, ResponseKind, OPERATIONS};
pub use request::{build_request, BuildError, Params, PathParams, Request};
pub use response::{decode_response, RawResponse, ResponseError};

/// Production API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.calendly.com";
