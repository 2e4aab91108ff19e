/// Format-forwarding domain layer: invocation construction and launch.
pub mod errors;
pub mod invoke;

pub use errors::ForwardError;
pub use invoke::{Invocation, DEFAULT_FORMATTER, INPLACE_FLAG, STYLE_ARG};
