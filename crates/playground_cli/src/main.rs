//! Command-line harness for the binary playground kernels.
//!
//! # Responsibility
//! - Parse options into a core `RunConfig` and print the outcome.
//! - Map core failures to distinct process exit codes.
//!
//! # Examples
//! - `binary_playground --mode scalar --a 1.2 --b 3.4 --c 5.6`
//! - `binary_playground --mode vector`
//! - `binary_playground --use-lib --mode struct`

use binary_playground_core::service::harness::DEFAULT_SCALARS;
use binary_playground_core::{
    core_version, default_log_level, init_logging, parse_operation, run, HarnessError,
    OperationResult, RunConfig, RunOutcome, EXIT_SUCCESS,
};
use clap::Parser;
use log::error;
use std::path::PathBuf;

const USAGE: &str =
    "Usage: binary_playground [--mode scalar|vector|struct] [--use-lib] [--a <float> --b <float> --c <float>]";

/// Scalar, vector and struct summation, built-in or from a shared module.
#[derive(Parser, Debug)]
#[command(name = "binary_playground")]
#[command(version = core_version())]
#[command(about = "Exercise summation kernels, optionally loaded from libbinary_playground")]
struct Cli {
    /// Operation to run: scalar, vector or struct
    #[arg(short, long, default_value = "scalar")]
    mode: String,

    /// Load kernels from libbinary_playground.{dylib,so} when available
    #[arg(short, long)]
    use_lib: bool,

    /// First scalar input
    #[arg(short = 'a', long = "a", default_value_t = DEFAULT_SCALARS[0], allow_hyphen_values = true)]
    a: f32,

    /// Second scalar input
    #[arg(short = 'b', long = "b", default_value_t = DEFAULT_SCALARS[1], allow_hyphen_values = true)]
    b: f32,

    /// Third scalar input
    #[arg(short = 'c', long = "c", default_value_t = DEFAULT_SCALARS[2], allow_hyphen_values = true)]
    c: f32,

    /// Directory searched for the shared module
    #[arg(long, env = "BINARY_PLAYGROUND_MODULE_DIR", default_value = ".")]
    module_dir: PathBuf,

    /// Log level: trace, debug, info, warn or error
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (stderr when omitted)
    #[arg(long)]
    log_dir: Option<String>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn run_config(&self) -> Result<RunConfig, HarnessError> {
        Ok(RunConfig {
            operation: parse_operation(&self.mode)?,
            prefer_module: self.use_lib,
            scalars: [self.a, self.b, self.c],
            module_dir: self.module_dir.clone(),
        })
    }
}

fn main() {
    let cli = Cli::parse();

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, cli.log_dir.as_deref()) {
        eprintln!("logging disabled: {err}");
    }

    std::process::exit(execute(&cli));
}

fn execute(cli: &Cli) -> i32 {
    let outcome = cli.run_config().and_then(|config| run(&config));
    match outcome {
        Ok(outcome) => {
            if cli.json {
                match serde_json::to_string_pretty(&outcome) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        error!("event=cli_output module=cli status=error error={err}");
                        println!("{}", render_outcome(&outcome));
                    }
                }
            } else {
                println!("{}", render_outcome(&outcome));
            }
            EXIT_SUCCESS
        }
        Err(err) => {
            eprintln!("{}", render_error(&err));
            if matches!(err, HarnessError::UnknownOperation(_)) {
                eprintln!("{USAGE}");
            }
            err.exit_code()
        }
    }
}

fn render_outcome(outcome: &RunOutcome) -> String {
    match &outcome.result {
        OperationResult::Scalar {
            inputs: [a, b, c],
            sum,
        } => format!("sum_scalars({a:.6}, {b:.6}, {c:.6}) = {sum:.6}"),
        OperationResult::Vector { sum, .. } => {
            let items = sum
                .iter()
                .map(|value| format!("{value:.6}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("sum_vectors result: [{items}]")
        }
        OperationResult::Struct { sum, .. } => {
            format!("sum_structs: x={}, y={:.6}, z={:.6}", sum.x, sum.y, sum.z)
        }
    }
}

fn render_error(err: &HarnessError) -> String {
    match err {
        HarnessError::ModuleNotFound(inner) => format!("Failed to open dynamic library: {inner}"),
        HarnessError::UnknownOperation(_) => err.to_string(),
    }
}
