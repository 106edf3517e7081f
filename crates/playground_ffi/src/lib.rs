//! Shared-module build of the binary playground kernels.
//!
//! Built as a `cdylib`, this crate produces `libbinary_playground.so` /
//! `libbinary_playground.dylib`, the files the core loader looks for.

pub mod api;

pub use api::{sum_scalars, sum_structs, sum_vectors};
