//! Per-operation routing between built-in and module-resolved kernels.
//!
//! # Responsibility
//! - Expose one backend contract per summation operation.
//! - Pick, once per configuration, which backend serves each operation.
//!
//! # Invariants
//! - A module backend exists only for a resolved symbol, and is routed only
//!   when a module was preferred. Everything else silently uses the
//!   built-in kernels.
//! - Routing carries no state across calls.

mod backend;
mod policy;

pub use backend::{
    Backend, BackendKind, LocalKernels, ModuleKernel, ScalarSum, StructSum, SumBackend,
    VectorSum,
};
pub use policy::Dispatcher;
