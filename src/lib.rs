pub mod config;
pub mod error;
pub mod handlers;
pub mod oracle;
pub mod prompts;
pub mod state;
pub mod types;
pub mod utils;

pub use crate::config::Config;
pub use crate::error::RelayError;
pub use crate::handlers::*;
pub use crate::oracle::CompletionClient;
pub use crate::state::AppState;
pub use crate::types::*;
pub use crate::utils::*;

pub use actix_web;
pub use log;
pub use reqwest;
