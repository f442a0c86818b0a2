//! Start pipeline tasks, one per provisioning step.

mod boot;
mod finish;
mod host;
mod preflight;
mod provision;

pub(crate) use boot::{BridgeStartTask, GardenReadyTask, VmStartTask};
pub(crate) use finish::{TelemetryEndTask, WelcomeTask};
pub(crate) use host::{HelperInstallTask, LoopbackAliasTask, ResourceSyncTask};
pub(crate) use preflight::{RunningCheckTask, TelemetryBeginTask};
pub(crate) use provision::{
    DeployDirectorTask, DeployPlatformTask, DeployServicesTask, NoProvisionTask,
};

pub use preflight::ALREADY_RUNNING_MESSAGE;
pub use provision::{NO_PROVISION_MESSAGE, PLATFORM_DEPLOYMENT};

use super::types::{RunOutcome, StartCtx};
use crate::pipeline::StepFlow;
use cfdev_shared::CfdevResult;

pub(crate) type Flow = CfdevResult<StepFlow<RunOutcome>>;

/// Narrate `line` to the user.
pub(crate) fn say(ctx: &StartCtx, line: &str) {
    ctx.collab.ui.say(line);
}
