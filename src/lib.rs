mod app;
pub mod components;
pub mod config;
pub mod environment;
pub mod error;
mod helper;
pub mod store;

pub use app::{init_logging, run, App};
pub use config::Config;
pub use environment::Environment;
pub use error::{Error, Result};
