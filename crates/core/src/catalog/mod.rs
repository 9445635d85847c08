mod operations;
mod types;

pub use operations::{find_operation, template_placeholders, OPERATIONS};
pub use types::{Method, Operation, ParamLocation, ResponseKind};
