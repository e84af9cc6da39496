//! Deploy Watcher
//!
//! Repository plugin that records every mod jar deployed to a Maven
//! repository as a `mod_files` row, with its platform and mod version
//! broken down for querying.

#[macro_use]
mod macros;

pub mod config;
pub mod db;
pub mod error;
pub mod formats;
pub mod models;
pub mod plugin;
pub mod services;
pub mod storage;
pub mod telemetry;

#[cfg(test)]
mod test_logs;

pub use config::Config;
pub use error::{AppError, Result};
