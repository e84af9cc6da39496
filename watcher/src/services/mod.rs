//! Business logic services.

pub mod deploy_ingestor;
pub mod deploy_watcher;
pub mod event_bus;
pub mod mod_file_service;
