//! Running the `rivet_console` engine as a subprocess.
//!
//! Every high-level operation stages its inputs in a fresh
//! [`StagingDir`], runs the engine once, parses what it printed and removes
//! the directory. When the operation fails the directory is kept (unless
//! [`EngineConfig::retain_on_failure`] is off) and its path is logged, so the
//! exact files the engine saw can be inspected afterwards.
//!
//! ```no_run
//! use rivet_io::engine::{ComputeParams, Engine};
//! use rivet_io::model::{Point, PointCloud};
//!
//! let engine = Engine::from_env();
//! let cloud = PointCloud::new(Point::many([[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]], 0.0))?;
//! let params = ComputeParams::new(1, 10, 10);
//!
//! let module = engine.compute(&cloud, params, true)?;
//! let bounds = engine.bounds(&module)?;
//! let barcodes = engine.barcodes(&module, &[(45.0, 0.0)])?;
//! # Ok::<(), rivet_io::RivetError>(())
//! ```

mod config;
mod staging;

pub use config::{
    EngineConfig, DEFAULT_EXECUTABLE, EXECUTABLE_ENV, KEEP_FAILED_ENV, STAGING_DIR_ENV,
};
pub use staging::StagingDir;

use std::ffi::{OsStr, OsString};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, warn};

use crate::codec::io_betti::from_betti_slice;
use crate::codec::io_bounds::from_bounds_slice;
use crate::codec::io_slices::{from_slices_slice, write_slices};
use crate::codec::Saveable;
use crate::error::RivetError;
use crate::model::{Barcode, Bounds, MultiBetti, SliceKey};

const COMPUTE_INPUT_NAME: &str = "rivet_input_data.txt";
const BETTI_INPUT_NAME: &str = "rivet-input.txt";
const BOUNDS_MODULE_NAME: &str = "precomp.rivet";
const BARCODES_MODULE_NAME: &str = "precomputed.rivet";
const SLICES_NAME: &str = "slices.txt";
const MODULE_FORMAT: &str = "msgpack";

/// Homology degree and the x/y coarsening parameters passed to the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComputeParams {
    pub homology: u32,
    pub x: u32,
    pub y: u32,
}

impl ComputeParams {
    pub fn new(homology: u32, x: u32, y: u32) -> Self {
        Self { homology, x, y }
    }

    /// Default module file name for `input`: `<input>.H<h>_x<x>_y<y>.rivet`.
    pub fn output_name(&self, input: &Path) -> PathBuf {
        let mut name = input.as_os_str().to_os_string();
        name.push(format!(".H{}_x{}_y{}.rivet", self.homology, self.x, self.y));
        PathBuf::from(name)
    }

    fn push_args(&self, args: &mut Vec<OsString>) {
        for (flag, value) in [("-H", self.homology), ("-x", self.x), ("-y", self.y)] {
            args.push(flag.into());
            args.push(value.to_string().into());
        }
    }
}

/// Handle on the engine executable.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// An engine configured from the `RIVET_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(EngineConfig::from_env())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs the engine with `args` and returns what it printed on stdout.
    ///
    /// # Errors
    /// [`RivetError::EngineLaunch`] if the executable cannot be started,
    /// [`RivetError::EngineFailed`] with the captured output if it exits
    /// unsuccessfully.
    pub fn run<I, S>(&self, args: I) -> Result<Vec<u8>, RivetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let executable = &self.config.executable;
        let args: Vec<OsString> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_os_string())
            .collect();
        debug!("running {} {:?}", executable.display(), args);

        let output = Command::new(executable)
            .args(&args)
            .output()
            .map_err(|source| RivetError::EngineLaunch {
                executable: executable.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RivetError::EngineFailed {
                executable: executable.clone(),
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output.stdout)
    }

    /// Runs `f` against a fresh staging directory, removing the directory on
    /// success and keeping it on failure if so configured.
    pub fn with_staging<T>(
        &self,
        f: impl FnOnce(&StagingDir) -> Result<T, RivetError>,
    ) -> Result<T, RivetError> {
        let staging = StagingDir::create_in(&self.config.staging_root)?;

        match f(&staging) {
            Ok(value) => {
                staging.release();
                Ok(value)
            }
            Err(err) if self.config.retain_on_failure => {
                let path = staging.retain();
                warn!(
                    "error occurred, leaving RIVET working directory intact: {}",
                    path.display()
                );
                Err(err)
            }
            Err(err) => {
                staging.release();
                Err(err)
            }
        }
    }

    /// Computes a module from an input file and returns the module's path.
    ///
    /// Without `output`, the module is written next to the input under
    /// [`ComputeParams::output_name`].
    pub fn compute_file(
        &self,
        input: &Path,
        output: Option<&Path>,
        params: ComputeParams,
    ) -> Result<PathBuf, RivetError> {
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| params.output_name(input));

        let mut args: Vec<OsString> = vec![input.into(), output.clone().into()];
        params.push_args(&mut args);
        args.push("-f".into());
        args.push(MODULE_FORMAT.into());

        self.run(&args)?;
        Ok(output)
    }

    /// Computes a module from in-memory input and returns its raw bytes.
    ///
    /// With `verify`, the module must be non-empty and the engine must be
    /// able to report bounds for it.
    pub fn compute<T: Saveable>(
        &self,
        input: &T,
        params: ComputeParams,
        verify: bool,
    ) -> Result<Vec<u8>, RivetError> {
        self.with_staging(|staging| {
            let input_path = staging.join(COMPUTE_INPUT_NAME);
            stage_input(&input_path, input)?;

            let output_path = self.compute_file(&input_path, None, params)?;
            let module = fs::read(&output_path)?;

            if verify {
                self.verify_module(&module)?;
            }
            Ok(module)
        })
    }

    /// Computes multi-graded Betti numbers for an input file.
    pub fn betti_file(
        &self,
        input: &Path,
        params: ComputeParams,
    ) -> Result<MultiBetti, RivetError> {
        let mut args: Vec<OsString> = vec![input.into(), "--betti".into()];
        params.push_args(&mut args);

        let stdout = self.run(&args)?;
        from_betti_slice(&stdout)
    }

    /// Computes multi-graded Betti numbers for in-memory input.
    pub fn betti<T: Saveable>(
        &self,
        input: &T,
        params: ComputeParams,
    ) -> Result<MultiBetti, RivetError> {
        self.with_staging(|staging| {
            let input_path = staging.join(BETTI_INPUT_NAME);
            stage_input(&input_path, input)?;
            self.betti_file(&input_path, params)
        })
    }

    /// Reads the parameter bounds of a module file.
    pub fn bounds_file(&self, module: &Path) -> Result<Bounds, RivetError> {
        let stdout = self.run([module.as_os_str(), OsStr::new("--bounds")])?;
        from_bounds_slice(&stdout)
    }

    /// Reads the parameter bounds of module bytes returned by
    /// [`compute`](Self::compute).
    pub fn bounds(&self, module: &[u8]) -> Result<Bounds, RivetError> {
        if module.is_empty() {
            return Err(RivetError::EmptyModule);
        }

        self.with_staging(|staging| {
            let module_path = staging.join(BOUNDS_MODULE_NAME);
            fs::write(&module_path, module)?;
            self.bounds_file(&module_path)
        })
    }

    /// Queries barcodes along the slices listed in `slice_file`.
    pub fn barcodes_file(
        &self,
        module: &Path,
        slice_file: &Path,
    ) -> Result<Vec<(SliceKey, Barcode)>, RivetError> {
        let stdout = self.run([
            module.as_os_str(),
            OsStr::new("--barcodes"),
            slice_file.as_os_str(),
        ])?;
        from_slices_slice(&stdout)
    }

    /// Returns one barcode per `(angle, offset)` slice, in request order.
    pub fn barcodes(
        &self,
        module: &[u8],
        slices: &[SliceKey],
    ) -> Result<Vec<(SliceKey, Barcode)>, RivetError> {
        self.with_staging(|staging| {
            let module_path = staging.join(BARCODES_MODULE_NAME);
            fs::write(&module_path, module)?;

            let slices_path = staging.join(SLICES_NAME);
            let mut slices_file = BufWriter::new(File::create(&slices_path)?);
            write_slices(&mut slices_file, slices)?;
            slices_file.flush()?;
            drop(slices_file);

            self.barcodes_file(&module_path, &slices_path)
        })
    }

    fn verify_module(&self, module: &[u8]) -> Result<(), RivetError> {
        if module.is_empty() {
            return Err(RivetError::VerificationFailed {
                message: "engine produced an empty module".to_string(),
            });
        }

        self.bounds(module)
            .map(|_| ())
            .map_err(|err| RivetError::VerificationFailed {
                message: format!("could not read bounds of computed module: {err}"),
            })
    }
}

/// Writes engine input to `path`, opened for reading and writing because
/// some encoders rewind their output.
fn stage_input<T: Saveable>(path: &Path, input: &T) -> Result<(), RivetError> {
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    let mut out = BufWriter::new(file);
    input.save(&mut out)?;
    out.flush()?;
    Ok(())
}
