//! Module handle lifecycle.

use super::symbols::{KernelSymbol, ResolvedSymbol};
use super::{LoadError, LoadResult};
use libloading::Library;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Module file names tried in order: macOS first, then Linux.
pub const MODULE_FILE_NAMES: [&str; 2] =
    ["libbinary_playground.dylib", "libbinary_playground.so"];

/// Builds the ordered candidate list for modules living in `dir`.
pub fn module_candidates(dir: impl AsRef<Path>) -> Vec<PathBuf> {
    MODULE_FILE_NAMES
        .iter()
        .map(|name| dir.as_ref().join(name))
        .collect()
}

/// Candidates relative to the current working directory
/// (`./libbinary_playground.dylib`, `./libbinary_playground.so`).
pub fn default_module_candidates() -> Vec<PathBuf> {
    module_candidates(".")
}

/// Owner of one optionally-loaded shared module.
///
/// The library is closed by [`ModuleHandle::release`] or on drop, whichever
/// comes first.
#[derive(Debug, Default)]
pub struct ModuleHandle {
    library: Option<Library>,
    path: Option<PathBuf>,
}

impl ModuleHandle {
    /// A handle that never acquired a module. Releasing it is a no-op.
    pub fn unloaded() -> Self {
        Self::default()
    }

    /// Opens the first candidate that loads.
    ///
    /// # Errors
    /// - Returns `LoadError::NotFound` when every candidate fails, carrying
    ///   the platform error of the last attempt.
    pub fn load<P: AsRef<Path>>(candidates: &[P]) -> LoadResult<Self> {
        let started_at = Instant::now();
        let mut last_error = String::from("no module candidates supplied");

        for candidate in candidates {
            let path = candidate.as_ref();
            // SAFETY: opening a module runs its initializers. Only trusted
            // modules built for this contract are expected at these paths.
            match unsafe { Library::new(path) } {
                Ok(library) => {
                    info!(
                        "event=module_open module=loader status=ok path={} duration_ms={}",
                        path.display(),
                        started_at.elapsed().as_millis()
                    );
                    return Ok(Self {
                        library: Some(library),
                        path: Some(path.to_path_buf()),
                    });
                }
                Err(err) => {
                    debug!(
                        "event=module_open module=loader status=miss path={} error={}",
                        path.display(),
                        err
                    );
                    last_error = err.to_string();
                }
            }
        }

        warn!(
            "event=module_open module=loader status=error error_code=module_not_found attempts={} duration_ms={}",
            candidates.len(),
            started_at.elapsed().as_millis()
        );
        Err(LoadError::NotFound {
            attempted: candidates
                .iter()
                .map(|candidate| candidate.as_ref().to_path_buf())
                .collect(),
            last_error,
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.library.is_some()
    }

    /// Path the module was opened from, while it is held.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Looks up `name` and reinterprets it as `F`.
    ///
    /// Returns `None` when no module is held or the symbol is not exported.
    ///
    /// # Safety
    /// The exported symbol must have exactly the signature `F`. This is not
    /// checked; a mismatch is undefined behavior when the symbol is called.
    pub unsafe fn resolve<F: KernelSymbol>(&self, name: &str) -> Option<ResolvedSymbol<'_, F>> {
        let library = self.library.as_ref()?;
        match library.get::<F>(name.as_bytes()) {
            Ok(symbol) => {
                debug!("event=symbol_resolve module=loader status=ok symbol={name}");
                Some(ResolvedSymbol::new(*symbol))
            }
            Err(err) => {
                debug!(
                    "event=symbol_resolve module=loader status=absent symbol={name} error={err}"
                );
                None
            }
        }
    }

    /// Closes the module if one is held.
    ///
    /// Returns `true` only for the call that actually released the module.
    /// Further calls, and calls on an [`unloaded`](Self::unloaded) handle,
    /// return `false`.
    pub fn release(&mut self) -> bool {
        let Some(library) = self.library.take() else {
            return false;
        };
        let path = self
            .path
            .take()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        match library.close() {
            Ok(()) => info!("event=module_release module=loader status=ok path={path}"),
            Err(err) => warn!(
                "event=module_release module=loader status=error path={path} error={err}"
            ),
        }
        true
    }
}

impl Drop for ModuleHandle {
    fn drop(&mut self) {
        self.release();
    }
}
