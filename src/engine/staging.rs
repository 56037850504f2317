//! Per-invocation staging directories for engine inputs and outputs.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use tempfile::TempDir;

use crate::error::RivetError;

/// A uniquely named working directory for one engine invocation.
///
/// Names combine the process id with a random suffix, so concurrent
/// invocations in one process or across processes never share a directory.
/// Callers decide its fate explicitly with [`release`](Self::release) or
/// [`retain`](Self::retain).
#[derive(Debug)]
pub struct StagingDir {
    dir: TempDir,
}

impl StagingDir {
    /// Creates a fresh staging directory under `root`.
    pub fn create_in(root: &Path) -> Result<Self, RivetError> {
        let prefix = format!("rivet-{}-", std::process::id());
        let dir = tempfile::Builder::new()
            .prefix(&prefix)
            .tempdir_in(root)?;
        debug!("created staging directory {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a file inside the staging directory.
    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Removes the directory and everything in it. A failed removal is
    /// logged, not returned.
    pub fn release(self) {
        let path = self.dir.path().to_path_buf();
        match self.dir.close() {
            Ok(()) => debug!("removed staging directory {}", path.display()),
            Err(err) => warn!(
                "failed to remove staging directory {}: {err}",
                path.display()
            ),
        }
    }

    /// Leaves the directory on disk and returns its path.
    pub fn retain(self) -> PathBuf {
        self.dir.keep()
    }
}
