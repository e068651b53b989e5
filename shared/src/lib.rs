pub mod config;
pub mod error;
pub mod handler;
pub mod request;
pub mod response;
pub mod sentiment;
pub mod speech;
pub mod users;

pub use error::{ActionError, CapabilityError, ConfigError};
pub use handler::{function_handler, handle, Action, Outcome};
