//! Dispatch policy: route selection at construction, plain calls after.

use super::backend::{BackendKind, LocalKernels, ModuleKernel, ScalarSum, StructSum, VectorSum};
use crate::model::operation::Operation;
use crate::model::record::NumericRecord;
use crate::module::ModuleSymbols;
use log::debug;
use std::fmt::{Debug, Formatter};

/// Holds, per operation, the backend chosen for it.
pub struct Dispatcher<'lib> {
    scalars: Box<dyn ScalarSum + 'lib>,
    vectors: Box<dyn VectorSum + 'lib>,
    structs: Box<dyn StructSum + 'lib>,
}

impl<'lib> Dispatcher<'lib> {
    /// Chooses a backend for every operation.
    ///
    /// An operation is routed to the module only when `prefer_module` is set
    /// and its symbol is present in `symbols`.
    pub fn new(prefer_module: bool, symbols: ModuleSymbols<'lib>) -> Self {
        let symbols = if prefer_module {
            symbols
        } else {
            ModuleSymbols::default()
        };
        let scalars: Box<dyn ScalarSum + 'lib> = match symbols.scalars {
            Some(symbol) => Box::new(ModuleKernel::new(symbol)),
            None => Box::new(LocalKernels),
        };
        let vectors: Box<dyn VectorSum + 'lib> = match symbols.vectors {
            Some(symbol) => Box::new(ModuleKernel::new(symbol)),
            None => Box::new(LocalKernels),
        };
        let structs: Box<dyn StructSum + 'lib> = match symbols.structs {
            Some(symbol) => Box::new(ModuleKernel::new(symbol)),
            None => Box::new(LocalKernels),
        };

        let dispatcher = Self {
            scalars,
            vectors,
            structs,
        };
        for operation in Operation::ALL {
            debug!(
                "event=dispatch_route module=dispatch operation={} backend={}",
                operation.as_str(),
                dispatcher.backend_for(operation).as_str()
            );
        }
        dispatcher
    }

    /// Dispatcher that always uses the built-in kernels.
    pub fn local() -> Self {
        Self::new(false, ModuleSymbols::default())
    }

    pub fn backend_for(&self, operation: Operation) -> BackendKind {
        match operation {
            Operation::Scalar => self.scalars.kind(),
            Operation::Vector => self.vectors.kind(),
            Operation::Struct => self.structs.kind(),
        }
    }

    pub fn sum_scalars(&self, a: f32, b: f32, c: f32) -> f32 {
        self.scalars.sum_scalars(a, b, c)
    }

    /// # Panics
    /// Panics when any buffer holds fewer than `len` elements, whichever
    /// backend is routed.
    pub fn sum_vectors(&self, target: &mut [f32], in2: &[f32], in3: &[f32], len: usize) {
        self.vectors.sum_vectors(target, in2, in3, len);
    }

    pub fn sum_structs(&self, s1: &NumericRecord, s2: &NumericRecord) -> NumericRecord {
        self.structs.sum_structs(s1, s2)
    }
}

impl Default for Dispatcher<'_> {
    fn default() -> Self {
        Self::local()
    }
}

impl Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("scalar", &self.scalars.kind())
            .field("vector", &self.vectors.kind())
            .field("struct", &self.structs.kind())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Dispatcher;
    use crate::dispatch::BackendKind;
    use crate::model::operation::Operation;
    use crate::module::{ModuleSymbols, ResolvedSymbol, ScalarSumFn};

    unsafe extern "C" fn offset_scalars(a: f32, b: f32, c: f32) -> f32 {
        a + b + c + 100.0
    }

    fn scalar_only() -> ModuleSymbols<'static> {
        ModuleSymbols {
            scalars: Some(ResolvedSymbol::from_static(offset_scalars as ScalarSumFn)),
            ..ModuleSymbols::default()
        }
    }

    #[test]
    fn local_dispatcher_routes_everything_locally() {
        let dispatcher = Dispatcher::local();
        for operation in Operation::ALL {
            assert_eq!(dispatcher.backend_for(operation), BackendKind::Local);
        }
    }

    #[test]
    fn module_is_ignored_when_not_preferred() {
        let dispatcher = Dispatcher::new(false, scalar_only());
        assert_eq!(dispatcher.backend_for(Operation::Scalar), BackendKind::Local);
        assert_eq!(dispatcher.sum_scalars(1.0, 2.0, 3.0), 6.0);
    }

    #[test]
    fn routes_per_operation_by_symbol_presence() {
        let dispatcher = Dispatcher::new(true, scalar_only());
        assert_eq!(dispatcher.backend_for(Operation::Scalar), BackendKind::Module);
        assert_eq!(dispatcher.backend_for(Operation::Vector), BackendKind::Local);
        assert_eq!(dispatcher.backend_for(Operation::Struct), BackendKind::Local);
        assert_eq!(dispatcher.sum_scalars(1.0, 2.0, 3.0), 106.0);
    }

    #[test]
    fn debug_output_lists_routes() {
        let rendered = format!("{:?}", Dispatcher::new(true, scalar_only()));
        assert_eq!(
            rendered,
            "Dispatcher { scalar: Module, vector: Local, struct: Local }"
        );
    }
}
