//! Use-case entry points consumed by the calling layer.
//!
//! # Responsibility
//! - Turn a run configuration into one dispatched operation.
//! - Own the module handle for the duration of a run.
//!
//! # Invariants
//! - The module handle is released on every exit path of a run.
//! - Unknown operations are rejected before any module is opened.

pub mod harness;
