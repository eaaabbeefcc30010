//! TOML standard documents
//!
//! - [`parser`] - Read, deserialize and validate a standard

pub mod parser;

pub use parser::{CheckEntry, StandardFile, StandardHeader, bundled, load_file, load_for_repo, parse_str};
