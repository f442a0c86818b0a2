//! Start orchestration.
//!
//! ## Architecture
//!
//! Resource selection runs first and is the only check that can fail
//! without side effects. The rest is one table-driven plan:
//!
//! ```text
//! Selection               (validate -f path, pick items and image)
//!
//! preflight:
//!   1. TelemetryBegin     (segment property, begin event)
//!   2. RunningCheck       (halt: AlreadyRunning)
//! host:
//!   3. LoopbackAlias      (director + router IPs)
//!   4. ResourceSync       (selected items only)
//!   5. HelperInstall      (cfdevd)
//! boot:
//!   6. BridgeStart        (vpnkit start + watch)
//!   7. VmStart            (linuxkit start + watch)
//!   8. GardenReady        (ping)
//! provision:
//!   9. NoProvision        (halt: Success)
//!  10. DeployDirector
//!  11. DeployPlatform     (progress + deploy)
//!  12. DeployServices     (list + deploy)
//! finish:
//!  13. Welcome
//!  14. TelemetryEnd
//! ```
//!
//! A failing task ends the run with its error; nothing is rolled back and
//! the end event is not sent.

mod args;
mod tasks;
mod types;

pub use args::{DEFAULT_CPUS, DEFAULT_MEMORY_MB, StartArgs, StartRequest};
pub use tasks::{ALREADY_RUNNING_MESSAGE, NO_PROVISION_MESSAGE, PLATFORM_DEPLOYMENT};
pub use types::{RunOutcome, StartContext, StartCtx};

use crate::collab::Collaborators;
use crate::config::CfdevConfig;
use crate::pipeline::{BoxedTask, ExecutionPlan, PipelineBuilder, PipelineExecutor, Stage};
use crate::process::ExitSender;
use crate::resource::select;
use crate::telemetry::TelemetryGate;
use cfdev_shared::errors::CfdevResult;
use std::sync::Arc;

use tasks::{
    BridgeStartTask, DeployDirectorTask, DeployPlatformTask, DeployServicesTask, GardenReadyTask,
    HelperInstallTask, LoopbackAliasTask, NoProvisionTask, ResourceSyncTask, RunningCheckTask,
    TelemetryBeginTask, TelemetryEndTask, VmStartTask, WelcomeTask,
};

// ============================================================================
// EXECUTION PLAN
// ============================================================================

fn get_execution_plan() -> ExecutionPlan<StartCtx, RunOutcome> {
    let stages: Vec<Stage<BoxedTask<StartCtx, RunOutcome>>> = vec![
        Stage::new(
            "preflight",
            vec![Box::new(TelemetryBeginTask), Box::new(RunningCheckTask)],
        ),
        Stage::new(
            "host",
            vec![
                Box::new(LoopbackAliasTask),
                Box::new(ResourceSyncTask),
                Box::new(HelperInstallTask),
            ],
        ),
        Stage::new(
            "boot",
            vec![
                Box::new(BridgeStartTask),
                Box::new(VmStartTask),
                Box::new(GardenReadyTask),
            ],
        ),
        Stage::new(
            "provision",
            vec![
                Box::new(NoProvisionTask),
                Box::new(DeployDirectorTask),
                Box::new(DeployPlatformTask),
                Box::new(DeployServicesTask),
            ],
        ),
        Stage::new(
            "finish",
            vec![Box::new(WelcomeTask), Box::new(TelemetryEndTask)],
        ),
    ];

    ExecutionPlan::new(stages)
}

/// Brings a CF Dev environment up.
///
/// # Example
///
/// ```ignore
/// let (exit_tx, exit_rx) = exit_channel(WATCHER_COUNT);
/// let outcome = StartCommand::new(config, collaborators, exit_tx)
///     .execute(StartRequest::new(4, 4096))
///     .await?;
/// ```
pub struct StartCommand {
    config: CfdevConfig,
    collab: Collaborators,
    exit: ExitSender,
}

impl StartCommand {
    /// `exit` must come from a channel sized for [`crate::process::WATCHER_COUNT`] monitors.
    pub fn new(config: CfdevConfig, collab: Collaborators, exit: ExitSender) -> Self {
        Self {
            config,
            collab,
            exit,
        }
    }

    /// Run the start sequence once.
    ///
    /// Monitors registered during the run stay detached and keep supervising
    /// after this returns.
    pub async fn execute(&self, request: StartRequest) -> CfdevResult<RunOutcome> {
        let selection = select(
            &self.config.dependencies,
            &self.config.cache_dir,
            request.image_path.as_deref(),
        )?;

        tracing::info!(
            cpus = request.cpus,
            memory_mb = request.memory_mb,
            image = %selection.image_path.display(),
            segment = %selection.segment,
            no_provision = request.no_provision,
            "Starting CF Dev"
        );

        let ctx = Arc::new(StartContext {
            request,
            selection,
            bosh_director_ip: self.config.bosh_director_ip.clone(),
            cf_router_ip: self.config.cf_router_ip.clone(),
            collab: self.collab.clone(),
            telemetry: TelemetryGate::new(
                Arc::clone(&self.collab.analytics),
                Arc::clone(&self.collab.analytics_toggle),
            ),
            exit: self.exit.clone(),
        });

        let pipeline = PipelineBuilder::from_plan(get_execution_plan());
        let run = PipelineExecutor::execute(pipeline, ctx).await?;
        run.metrics.log_stages();

        let outcome = run.outcome.unwrap_or(RunOutcome::Success);
        tracing::info!(outcome = ?outcome, halted_by = ?run.halted_by, "Start finished");
        Ok(outcome)
    }
}
