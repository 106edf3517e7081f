//! Shared data shapes crossing the module boundary.
//!
//! # Responsibility
//! - Define the one record layout used by local kernels, module exports and
//!   callers.
//!
//! # Invariants
//! - `NumericRecord` is declared exactly once, here. Other crates import it.
//!
//! # See also
//! - `crate::module::symbols` for the function signatures that carry it.

pub mod operation;
pub mod record;
