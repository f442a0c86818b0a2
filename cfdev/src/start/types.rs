//! Type definitions for the start pipeline.

use super::args::StartRequest;
use crate::collab::Collaborators;
use crate::process::ExitSender;
use crate::resource::Selection;
use crate::telemetry::TelemetryGate;
use std::sync::Arc;

/// Terminal result of a start run that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// VM and network are up; the platform is deployed unless no-provision was set.
    Success,
    /// A VM from an earlier run is still up; nothing was touched.
    AlreadyRunning,
}

/// Shared start pipeline context.
///
/// Built once per run after resource selection; read-only for every task.
pub struct StartContext {
    pub request: StartRequest,
    pub selection: Selection,
    pub bosh_director_ip: String,
    pub cf_router_ip: String,
    pub collab: Collaborators,
    pub telemetry: TelemetryGate,
    /// Handed to every process monitor; never read by the pipeline.
    pub exit: ExitSender,
}

pub type StartCtx = Arc<StartContext>;
