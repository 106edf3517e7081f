//! Backend contracts and their two implementations.

use crate::kernels;
use crate::model::record::NumericRecord;
use crate::module::{KernelSymbol, ResolvedSymbol, ScalarSumFn, StructSumFn, VectorSumFn};
use serde::{Deserialize, Serialize};

/// Which implementation served an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    Local,
    Module,
}

impl BackendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Module => "module",
        }
    }
}

/// Identity shared by every operation backend.
pub trait Backend {
    fn kind(&self) -> BackendKind;
}

pub trait ScalarSum: Backend {
    fn sum_scalars(&self, a: f32, b: f32, c: f32) -> f32;
}

pub trait VectorSum: Backend {
    /// # Panics
    /// Panics when any buffer holds fewer than `len` elements.
    fn sum_vectors(&self, target: &mut [f32], in2: &[f32], in3: &[f32], len: usize);
}

pub trait StructSum: Backend {
    fn sum_structs(&self, s1: &NumericRecord, s2: &NumericRecord) -> NumericRecord;
}

/// All three summation operations served by one implementation.
pub trait SumBackend: ScalarSum + VectorSum + StructSum {}

impl<T: ScalarSum + VectorSum + StructSum> SumBackend for T {}

/// Built-in kernels linked into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalKernels;

impl Backend for LocalKernels {
    fn kind(&self) -> BackendKind {
        BackendKind::Local
    }
}

impl ScalarSum for LocalKernels {
    fn sum_scalars(&self, a: f32, b: f32, c: f32) -> f32 {
        kernels::sum_scalars(a, b, c)
    }
}

impl VectorSum for LocalKernels {
    fn sum_vectors(&self, target: &mut [f32], in2: &[f32], in3: &[f32], len: usize) {
        kernels::sum_vectors(target, in2, in3, len);
    }
}

impl StructSum for LocalKernels {
    fn sum_structs(&self, s1: &NumericRecord, s2: &NumericRecord) -> NumericRecord {
        kernels::sum_structs(s1, s2)
    }
}

/// One operation served by a symbol resolved from a loaded module.
#[derive(Debug, Clone, Copy)]
pub struct ModuleKernel<'lib, F> {
    symbol: ResolvedSymbol<'lib, F>,
}

impl<'lib, F: KernelSymbol> ModuleKernel<'lib, F> {
    pub fn new(symbol: ResolvedSymbol<'lib, F>) -> Self {
        Self { symbol }
    }

    pub fn symbol(&self) -> ResolvedSymbol<'lib, F> {
        self.symbol
    }
}

impl<F: KernelSymbol> Backend for ModuleKernel<'_, F> {
    fn kind(&self) -> BackendKind {
        BackendKind::Module
    }
}

impl ScalarSum for ModuleKernel<'_, ScalarSumFn> {
    fn sum_scalars(&self, a: f32, b: f32, c: f32) -> f32 {
        // SAFETY: signature trusted at resolution time.
        unsafe { (self.symbol.get())(a, b, c) }
    }
}

impl VectorSum for ModuleKernel<'_, VectorSumFn> {
    fn sum_vectors(&self, target: &mut [f32], in2: &[f32], in3: &[f32], len: usize) {
        let target = &mut target[..len];
        let in2 = &in2[..len];
        let in3 = &in3[..len];
        // SAFETY: all three buffers were bounds-checked to `len` above and
        // the signature was trusted at resolution time.
        unsafe { (self.symbol.get())(target.as_mut_ptr(), in2.as_ptr(), in3.as_ptr(), len) }
    }
}

impl StructSum for ModuleKernel<'_, StructSumFn> {
    fn sum_structs(&self, s1: &NumericRecord, s2: &NumericRecord) -> NumericRecord {
        // SAFETY: both pointers come from live references to the shared
        // `repr(C)` record.
        unsafe { (self.symbol.get())(s1, s2) }
    }
}

#[cfg(test)]
mod tests {
    use super::{Backend, BackendKind, LocalKernels, ModuleKernel, ScalarSum, StructSum};
    use crate::model::record::NumericRecord;
    use crate::module::{ResolvedSymbol, ScalarSumFn, StructSumFn};

    unsafe extern "C" fn negated_scalars(a: f32, b: f32, c: f32) -> f32 {
        -(a + b + c)
    }

    unsafe extern "C" fn first_record(
        s1: *const NumericRecord,
        _s2: *const NumericRecord,
    ) -> NumericRecord {
        *s1
    }

    #[test]
    fn module_kernel_always_invokes_its_symbol() {
        let scalars = ModuleKernel::new(ResolvedSymbol::from_static(negated_scalars as ScalarSumFn));
        assert_eq!(scalars.kind(), BackendKind::Module);
        assert_eq!(scalars.sum_scalars(1.0, 2.0, 3.0), -6.0);

        let structs = ModuleKernel::new(ResolvedSymbol::from_static(first_record as StructSumFn));
        let s1 = NumericRecord::new(1, 2.0, 3.0);
        assert_eq!(
            structs.sum_structs(&s1, &NumericRecord::new(9, 9.0, 9.0)),
            s1
        );
    }

    #[test]
    fn local_kernels_report_local_kind() {
        assert_eq!(LocalKernels.kind(), BackendKind::Local);
        assert_eq!(LocalKernels.sum_scalars(1.0, 2.0, 3.0), 6.0);
    }
}
