//! Test utilities and helpers for the simple-vector crates.
//!
//! This crate provides:
//! - Data generation for building populated vectors
//! - Element types that observe how the container treats its values
//!   (move-only values, drop counting, clones that fail on demand)
//!
//! # Usage
//!
//! This crate is intended for use as a dev-dependency of the simple-vector
//! test suites.

pub mod data_gen;
pub mod elements;
