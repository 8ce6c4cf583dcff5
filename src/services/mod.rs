//! Service layer containing the path-processing logic and output helpers.
//!
//! ## Service map
//! - `normalize.rs` — per-line suffix extraction, dedup set, sorted sequence.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Keep `main.rs` thin; delegate the work here.

pub mod normalize;
pub mod output;
