//! Database models.

pub mod mod_file;

pub use mod_file::{ModFile, NewModFile, VersionParts};
