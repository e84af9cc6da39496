//! Parsers for deployed mod jar paths and their version strings.

pub mod mod_jar;
pub mod version;

pub use mod_jar::{resolve_file_info, FileInfo};
pub use version::parse_version;
