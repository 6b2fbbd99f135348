//! Node Offset Module
//!
//! Reads and, when still unset, generates the numeric node offset kept in the
//! node config file.

pub mod document;
pub mod manager;

pub use document::ConfigDocument;
pub use manager::{
    ensure_generated, parse_override, random_offset, read_config_offset, resolve, EnsureOutcome,
    OffsetSource, ResolvedOffset, OFFSET_MAX, OFFSET_MIN,
};
