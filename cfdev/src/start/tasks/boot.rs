//! Tasks: network bridge, VM, and waiting for the in-VM agent.
//!
//! Bridge and VM each get a monitor on the shared exit channel right after
//! they start. Registering a monitor cannot fail.

use super::{Flow, say};
use crate::pipeline::{PipelineTask, StepFlow};
use crate::start::types::{RunOutcome, StartCtx};
use async_trait::async_trait;

pub struct BridgeStartTask;

#[async_trait]
impl PipelineTask<StartCtx, RunOutcome> for BridgeStartTask {
    async fn run(self: Box<Self>, ctx: StartCtx) -> Flow {
        say(&ctx, "Starting VPNKit...");
        ctx.collab.vpnkit.start().await?;
        ctx.collab.vpnkit.watch(ctx.exit.clone());
        Ok(StepFlow::Continue)
    }

    fn name(&self) -> &'static str {
        "bridge_start"
    }
}

pub struct VmStartTask;

#[async_trait]
impl PipelineTask<StartCtx, RunOutcome> for VmStartTask {
    async fn run(self: Box<Self>, ctx: StartCtx) -> Flow {
        say(&ctx, "Starting the VM...");
        let request = &ctx.request;
        let image = &ctx.selection.image_path;
        tracing::info!(
            cpus = request.cpus,
            memory_mb = request.memory_mb,
            image = %image.display(),
            "Starting VM"
        );
        ctx.collab
            .linuxkit
            .start(request.cpus, request.memory_mb, image)
            .await?;
        ctx.collab.linuxkit.watch(ctx.exit.clone());
        Ok(StepFlow::Continue)
    }

    fn name(&self) -> &'static str {
        "vm_start"
    }
}

pub struct GardenReadyTask;

#[async_trait]
impl PipelineTask<StartCtx, RunOutcome> for GardenReadyTask {
    async fn run(self: Box<Self>, ctx: StartCtx) -> Flow {
        say(&ctx, "Waiting for Garden...");
        ctx.collab.garden.ping().await?;
        Ok(StepFlow::Continue)
    }

    fn name(&self) -> &'static str {
        "garden_ready"
    }
}
