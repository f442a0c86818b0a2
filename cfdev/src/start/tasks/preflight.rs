//! Tasks: telemetry begin and the already-running check.

use super::{Flow, say};
use crate::pipeline::{PipelineTask, StepFlow};
use crate::start::types::{RunOutcome, StartCtx};
use crate::telemetry::{START_BEGIN, START_END, already_running_attributes};
use async_trait::async_trait;

pub const ALREADY_RUNNING_MESSAGE: &str = "CF Dev is already running...";

pub struct TelemetryBeginTask;

#[async_trait]
impl PipelineTask<StartCtx, RunOutcome> for TelemetryBeginTask {
    async fn run(self: Box<Self>, ctx: StartCtx) -> Flow {
        ctx.telemetry.set_segment(&ctx.selection.segment);
        ctx.telemetry.emit(START_BEGIN, None).await;
        Ok(StepFlow::Continue)
    }

    fn name(&self) -> &'static str {
        "telemetry_begin"
    }
}

/// Short-circuits the run when a VM from an earlier start is still up.
pub struct RunningCheckTask;

#[async_trait]
impl PipelineTask<StartCtx, RunOutcome> for RunningCheckTask {
    async fn run(self: Box<Self>, ctx: StartCtx) -> Flow {
        if !ctx.collab.linuxkit.is_running().await? {
            return Ok(StepFlow::Continue);
        }

        tracing::info!("VM already running, skipping start");
        say(&ctx, ALREADY_RUNNING_MESSAGE);
        ctx.telemetry
            .emit(START_END, Some(already_running_attributes()))
            .await;
        Ok(StepFlow::Halt(RunOutcome::AlreadyRunning))
    }

    fn name(&self) -> &'static str {
        "running_check"
    }
}
