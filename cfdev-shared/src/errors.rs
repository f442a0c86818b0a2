//! Error taxonomy for cfdev.
//!
//! - `Validation`: user input rejected before any side effect.
//! - `Step`: a provisioning step failed; carries the step name and the
//!   collaborator error unchanged.
//! - Everything else is raised by collaborators or configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CfdevError {
    /// User-supplied image path does not exist.
    #[error("no file found at: {path}")]
    Validation { path: String },

    #[error("configuration error: {0}")]
    Config(String),

    /// Hypervisor failures.
    #[error("engine error: {0}")]
    Engine(String),

    /// Host network, network bridge or network helper failures.
    #[error("network error: {0}")]
    Network(String),

    #[error("cache error: {0}")]
    Cache(String),

    #[error("deploy error: {0}")]
    Deploy(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),

    /// A pipeline step failed. Displays as the underlying cause.
    #[error("{source}")]
    Step {
        stage: &'static str,
        #[source]
        source: Box<CfdevError>,
    },
}

impl CfdevError {
    /// Wrap `source` as the failure of `stage`.
    pub fn step(stage: &'static str, source: CfdevError) -> Self {
        CfdevError::Step {
            stage,
            source: Box::new(source),
        }
    }

    /// Name of the step that failed, if this error came out of the pipeline.
    pub fn stage(&self) -> Option<&'static str> {
        match self {
            CfdevError::Step { stage, .. } => Some(stage),
            _ => None,
        }
    }

    /// Innermost error, unwrapping any `Step` layers.
    pub fn root_cause(&self) -> &CfdevError {
        let mut current = self;
        while let CfdevError::Step { source, .. } = current {
            current = source;
        }
        current
    }
}

pub type CfdevResult<T> = Result<T, CfdevError>;
