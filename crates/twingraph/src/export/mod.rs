//! Export module for handing graph data to external tools.
//!
//! - **JSON**: D3.js-style `nodes`/`links` documents for the graph renderer

pub mod json;

pub use json::{export_json, export_result_json};
