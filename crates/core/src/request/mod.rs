mod builder;
mod error;
mod params;

pub use builder::{build_request, resolve_path, Request};
pub use error::BuildError;
pub use params::{Params, PathParams};
