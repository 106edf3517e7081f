//! Exported symbol names, signatures and resolved handles.

use super::loader::ModuleHandle;
use crate::model::record::NumericRecord;
use std::marker::PhantomData;

pub const SUM_SCALARS_SYMBOL: &str = "sum_scalars";
pub const SUM_VECTORS_SYMBOL: &str = "sum_vectors";
pub const SUM_STRUCTS_SYMBOL: &str = "sum_structs";

/// `float sum_scalars(float a, float b, float c)`
pub type ScalarSumFn = unsafe extern "C" fn(f32, f32, f32) -> f32;
/// `void sum_vectors(float *v1, const float *v2, const float *v3, size_t len)`
pub type VectorSumFn = unsafe extern "C" fn(*mut f32, *const f32, *const f32, usize);
/// `MyStruct sum_structs(const MyStruct *s1, const MyStruct *s2)`
pub type StructSumFn =
    unsafe extern "C" fn(*const NumericRecord, *const NumericRecord) -> NumericRecord;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::ScalarSumFn {}
    impl Sealed for super::VectorSumFn {}
    impl Sealed for super::StructSumFn {}
}

/// Function-pointer types that may be resolved from a module.
pub trait KernelSymbol: Copy + sealed::Sealed {
    /// Exported name of the symbol carrying this signature.
    const NAME: &'static str;
}

impl KernelSymbol for ScalarSumFn {
    const NAME: &'static str = SUM_SCALARS_SYMBOL;
}

impl KernelSymbol for VectorSumFn {
    const NAME: &'static str = SUM_VECTORS_SYMBOL;
}

impl KernelSymbol for StructSumFn {
    const NAME: &'static str = SUM_STRUCTS_SYMBOL;
}

/// A callable resolved from a module, valid while its handle is borrowed.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSymbol<'lib, F> {
    func: F,
    _module: PhantomData<&'lib ModuleHandle>,
}

impl<'lib, F: KernelSymbol> ResolvedSymbol<'lib, F> {
    pub(crate) fn new(func: F) -> Self {
        Self {
            func,
            _module: PhantomData,
        }
    }

    pub fn get(&self) -> F {
        self.func
    }
}

impl<F: KernelSymbol> ResolvedSymbol<'static, F> {
    /// Wraps a function linked into this process as if it were resolved.
    pub fn from_static(func: F) -> Self {
        Self::new(func)
    }
}

/// The three summation symbols of one module. Absent entries are `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleSymbols<'lib> {
    pub scalars: Option<ResolvedSymbol<'lib, ScalarSumFn>>,
    pub vectors: Option<ResolvedSymbol<'lib, VectorSumFn>>,
    pub structs: Option<ResolvedSymbol<'lib, StructSumFn>>,
}

impl<'lib> ModuleSymbols<'lib> {
    /// Resolves every known symbol by its exported name.
    ///
    /// # Safety
    /// The module held by `handle` must export `sum_scalars`, `sum_vectors`
    /// and `sum_structs` (whichever it exports) with the C signatures above
    /// and the `NumericRecord` layout.
    pub unsafe fn resolve(handle: &'lib ModuleHandle) -> Self {
        Self {
            scalars: handle.resolve::<ScalarSumFn>(ScalarSumFn::NAME),
            vectors: handle.resolve::<VectorSumFn>(VectorSumFn::NAME),
            structs: handle.resolve::<StructSumFn>(StructSumFn::NAME),
        }
    }

    pub fn resolved_count(&self) -> usize {
        [
            self.scalars.is_some(),
            self.vectors.is_some(),
            self.structs.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved_count() == 0
    }
}
