//! Core of the binary playground: numeric kernels, the shared record layout,
//! optional dynamic-module loading and the dispatch policy between them.

pub mod dispatch;
pub mod kernels;
pub mod logging;
pub mod model;
pub mod module;
pub mod service;

pub use dispatch::{
    Backend, BackendKind, Dispatcher, LocalKernels, ModuleKernel, ScalarSum, StructSum,
    SumBackend, VectorSum,
};
pub use kernels::{sum_scalars, sum_structs, sum_vectors, summed_vectors};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::operation::Operation;
pub use model::record::NumericRecord;
pub use module::{
    default_module_candidates, module_candidates, LoadError, ModuleHandle, ModuleSymbols,
    ResolvedSymbol, ScalarSumFn, StructSumFn, VectorSumFn,
};
pub use service::harness::{
    parse_operation, run, HarnessError, HarnessResult, OperationResult, RunConfig, RunOutcome,
    EXIT_SUCCESS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
