//! Interactive command session for the rookery legality engine.

pub mod command;
pub mod error;
pub mod session;

pub use command::{parse_command, Command, SessionOption};
pub use error::CliError;
pub use session::{Session, SessionConfig};
