//! Built-in numeric kernels.
//!
//! # Responsibility
//! - Provide the local implementation of every summation operation.
//! - Serve as the fallback whenever a module-resolved symbol is unavailable.
//!
//! # Invariants
//! - Kernels are pure apart from the documented in-place vector write.
//! - Results are bit-identical to the C exports for the same evaluation order.

mod numeric;

pub use numeric::{sum_scalars, sum_structs, sum_vectors, summed_vectors};
