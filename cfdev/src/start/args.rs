//! Start request and its command-line surface.

use cfdev_shared::errors::{CfdevError, CfdevResult};
use clap::Args;
use std::path::PathBuf;

pub const DEFAULT_CPUS: u32 = 4;
pub const DEFAULT_MEMORY_MB: u64 = 4096;

/// Input to one start run. Immutable for the duration of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRequest {
    pub cpus: u32,
    pub memory_mb: u64,
    /// Boot this image instead of the cached one.
    pub image_path: Option<PathBuf>,
    /// Stop once the VM answers, without deploying anything.
    pub no_provision: bool,
}

impl StartRequest {
    pub fn new(cpus: u32, memory_mb: u64) -> Self {
        Self {
            cpus,
            memory_mb,
            image_path: None,
            no_provision: false,
        }
    }

    /// Boot `path` instead of the cached image. An empty path leaves it unset.
    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.image_path = if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        };
        self
    }

    pub fn with_no_provision(mut self, no_provision: bool) -> Self {
        self.no_provision = no_provision;
        self
    }
}

impl Default for StartRequest {
    fn default() -> Self {
        Self::new(DEFAULT_CPUS, DEFAULT_MEMORY_MB)
    }
}

/// Flags of `cfdev start`, flattened into the host binary's CLI.
#[derive(Args, Debug, Clone)]
pub struct StartArgs {
    /// Number of CPUs for the VM
    #[arg(short = 'c', long = "cpus", default_value_t = DEFAULT_CPUS)]
    pub cpus: u32,

    /// Memory for the VM in MB
    #[arg(short = 'm', long = "memory", default_value_t = DEFAULT_MEMORY_MB)]
    pub memory_mb: u64,

    /// Path to a custom deps image to boot instead of the default one
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Start the VM without deploying the platform
    #[arg(short = 'n', long = "no-provision")]
    pub no_provision: bool,
}

impl TryFrom<StartArgs> for StartRequest {
    type Error = CfdevError;

    fn try_from(args: StartArgs) -> CfdevResult<Self> {
        if args.cpus == 0 {
            return Err(CfdevError::Config("cpus must be greater than zero".into()));
        }
        if args.memory_mb == 0 {
            return Err(CfdevError::Config("memory must be greater than zero".into()));
        }

        let request = StartRequest::new(args.cpus, args.memory_mb)
            .with_no_provision(args.no_provision);
        Ok(match args.file {
            Some(file) => request.with_image(file),
            None => request,
        })
    }
}
