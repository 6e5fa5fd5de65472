//! Core definitions (errors and result helpers), relied upon by all simple-vector-* crates.

pub mod error;
pub mod result;

pub use result::Result;
