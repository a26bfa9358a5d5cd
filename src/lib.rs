pub mod cli;
pub mod cli_handlers;
pub mod core;
pub mod db;
pub mod error;
pub mod models;

pub use error::{MovieError, Result};
pub use models::*;
