//! Shared data model layer (structs only).
//!
//! ## Files
//! - `models.rs` — JSON output envelope.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs. Keep schema-impacting
//! changes explicit.

pub mod models;
