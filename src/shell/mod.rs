//! Interactive line-based shell over a `VideoPlayer`

pub mod command;
pub mod config;
pub mod session;

pub use command::Command;
pub use config::ShellConfig;
pub use session::Shell;
