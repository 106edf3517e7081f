//! Optional shared-module loading and symbol resolution.
//!
//! # Responsibility
//! - Open the first loadable module from an ordered list of candidates.
//! - Resolve the three summation symbols by name.
//! - Release the module handle exactly once on every exit path.
//!
//! # Invariants
//! - A missing symbol is `None`, never an error.
//! - Resolved symbols borrow their handle and cannot outlive it.
//! - Symbol signatures are trusted, not verified. Only modules exporting the
//!   C contract of `crate::kernels` with the `NumericRecord` layout may be
//!   loaded.
//!
//! # See also
//! - `crate::dispatch` for how resolved symbols are selected per call.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod loader;
mod symbols;

pub use loader::{
    default_module_candidates, module_candidates, ModuleHandle, MODULE_FILE_NAMES,
};
pub use symbols::{
    KernelSymbol, ModuleSymbols, ResolvedSymbol, ScalarSumFn, StructSumFn, VectorSumFn,
    SUM_SCALARS_SYMBOL, SUM_STRUCTS_SYMBOL, SUM_VECTORS_SYMBOL,
};

pub type LoadResult<T> = Result<T, LoadError>;

/// Module open failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// No candidate could be opened. `last_error` is the platform message of
    /// the final attempt.
    NotFound {
        attempted: Vec<PathBuf>,
        last_error: String,
    },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound {
                attempted,
                last_error,
            } => {
                let tried = attempted
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "failed to open dynamic module (tried: {tried}): {last_error}"
                )
            }
        }
    }
}

impl Error for LoadError {}
