//! Harness run: configuration, canned inputs, outcome reporting.

use crate::dispatch::{BackendKind, Dispatcher};
use crate::model::operation::Operation;
use crate::model::record::NumericRecord;
use crate::module::{module_candidates, LoadError, ModuleHandle, ModuleSymbols};
use log::{error, info};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Instant;

/// Process exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;

/// Default scalar inputs.
pub const DEFAULT_SCALARS: [f32; 3] = [1.0, 2.0, 3.0];

/// Canned buffers for the vector operation; the first one is accumulated into.
pub const EXAMPLE_VECTORS: [[f32; 3]; 3] = [[1.0, 2.0, 3.0], [0.5, 0.5, 0.5], [0.1, 0.2, 0.3]];

/// Canned records for the struct operation.
pub const EXAMPLE_RECORDS: [NumericRecord; 2] = [
    NumericRecord::new(1, 2.5, 3.25),
    NumericRecord::new(4, 1.5, 0.75),
];

pub type HarnessResult<T> = Result<T, HarnessError>;

/// Failures surfaced to the calling layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    ModuleNotFound(LoadError),
    UnknownOperation(String),
}

impl HarnessError {
    /// Distinct process exit code per failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ModuleNotFound(_) => 1,
            Self::UnknownOperation(_) => 2,
        }
    }
}

impl Display for HarnessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ModuleNotFound(err) => write!(f, "{err}"),
            Self::UnknownOperation(value) => write!(f, "Unknown mode '{value}'"),
        }
    }
}

impl Error for HarnessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ModuleNotFound(err) => Some(err),
            Self::UnknownOperation(_) => None,
        }
    }
}

impl From<LoadError> for HarnessError {
    fn from(value: LoadError) -> Self {
        Self::ModuleNotFound(value)
    }
}

/// Parses an operation name or reports it as unknown.
pub fn parse_operation(raw: &str) -> HarnessResult<Operation> {
    Operation::parse(raw).ok_or_else(|| HarnessError::UnknownOperation(raw.to_string()))
}

/// Inputs for one harness run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub operation: Operation,
    /// Route operations to the shared module when its symbol resolves.
    pub prefer_module: bool,
    /// Inputs of the scalar operation. Ignored by the others.
    pub scalars: [f32; 3],
    /// Directory searched for the module file names.
    pub module_dir: PathBuf,
}

impl RunConfig {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            ..Self::default()
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            operation: Operation::Scalar,
            prefer_module: false,
            scalars: DEFAULT_SCALARS,
            module_dir: PathBuf::from("."),
        }
    }
}

/// Operation inputs and result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OperationResult {
    Scalar {
        inputs: [f32; 3],
        sum: f32,
    },
    Vector {
        inputs: [[f32; 3]; 3],
        sum: Vec<f32>,
    },
    Struct {
        inputs: [NumericRecord; 2],
        sum: NumericRecord,
    },
}

/// Report of one completed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutcome {
    pub operation: Operation,
    pub backend: BackendKind,
    /// Module the run loaded, if any.
    pub module_path: Option<PathBuf>,
    pub result: OperationResult,
}

/// Runs one operation end to end.
///
/// When `prefer_module` is set the module is opened from
/// `config.module_dir`; symbols it lacks fall back to built-in kernels.
///
/// # Errors
/// - Returns `HarnessError::ModuleNotFound` when a module was preferred and
///   no candidate could be opened.
pub fn run(config: &RunConfig) -> HarnessResult<RunOutcome> {
    let started_at = Instant::now();
    info!(
        "event=harness_run module=service status=start operation={} prefer_module={}",
        config.operation.as_str(),
        config.prefer_module
    );

    let mut handle = if config.prefer_module {
        match ModuleHandle::load(&module_candidates(&config.module_dir)) {
            Ok(handle) => handle,
            Err(err) => {
                error!(
                    "event=harness_run module=service status=error operation={} duration_ms={} error_code=module_not_found error={}",
                    config.operation.as_str(),
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        }
    } else {
        ModuleHandle::unloaded()
    };
    let module_path = handle.path().map(|path| path.to_path_buf());

    let (backend, result) = {
        // SAFETY: modules at the candidate paths are trusted to export the
        // C summation contract over `NumericRecord`.
        let symbols = unsafe { ModuleSymbols::resolve(&handle) };
        let dispatcher = Dispatcher::new(config.prefer_module, symbols);
        (
            dispatcher.backend_for(config.operation),
            execute(&dispatcher, config),
        )
    };
    handle.release();

    info!(
        "event=harness_run module=service status=ok operation={} backend={} duration_ms={}",
        config.operation.as_str(),
        backend.as_str(),
        started_at.elapsed().as_millis()
    );
    Ok(RunOutcome {
        operation: config.operation,
        backend,
        module_path,
        result,
    })
}

/// Executes the configured operation on its canned or supplied inputs.
pub fn execute(dispatcher: &Dispatcher<'_>, config: &RunConfig) -> OperationResult {
    match config.operation {
        Operation::Scalar => {
            let [a, b, c] = config.scalars;
            OperationResult::Scalar {
                inputs: config.scalars,
                sum: dispatcher.sum_scalars(a, b, c),
            }
        }
        Operation::Vector => {
            let [v1, v2, v3] = EXAMPLE_VECTORS;
            let mut sum = v1.to_vec();
            dispatcher.sum_vectors(&mut sum, &v2, &v3, v1.len());
            OperationResult::Vector {
                inputs: EXAMPLE_VECTORS,
                sum,
            }
        }
        Operation::Struct => {
            let [s1, s2] = EXAMPLE_RECORDS;
            OperationResult::Struct {
                inputs: EXAMPLE_RECORDS,
                sum: dispatcher.sum_structs(&s1, &s2),
            }
        }
    }
}
