//! Tasks: platform provisioning inside the running VM.

use super::{Flow, say};
use crate::pipeline::{PipelineTask, StepFlow};
use crate::start::types::{RunOutcome, StartCtx};
use async_trait::async_trait;

pub const NO_PROVISION_MESSAGE: &str = "VM will not be provisioned because the no-provision flag was set.\n\
     The VM and network are up; nothing has been deployed.";

/// Progress label of the platform deployment.
pub const PLATFORM_DEPLOYMENT: &str = "cf";

/// Ends the run successfully when no-provision was requested.
pub struct NoProvisionTask;

#[async_trait]
impl PipelineTask<StartCtx, RunOutcome> for NoProvisionTask {
    async fn run(self: Box<Self>, ctx: StartCtx) -> Flow {
        if !ctx.request.no_provision {
            return Ok(StepFlow::Continue);
        }
        say(&ctx, NO_PROVISION_MESSAGE);
        Ok(StepFlow::Halt(RunOutcome::Success))
    }

    fn name(&self) -> &'static str {
        "no_provision_check"
    }
}

pub struct DeployDirectorTask;

#[async_trait]
impl PipelineTask<StartCtx, RunOutcome> for DeployDirectorTask {
    async fn run(self: Box<Self>, ctx: StartCtx) -> Flow {
        say(&ctx, "Deploying the BOSH Director...");
        ctx.collab.garden.deploy_bosh().await?;
        Ok(StepFlow::Continue)
    }

    fn name(&self) -> &'static str {
        "deploy_director"
    }
}

pub struct DeployPlatformTask;

#[async_trait]
impl PipelineTask<StartCtx, RunOutcome> for DeployPlatformTask {
    async fn run(self: Box<Self>, ctx: StartCtx) -> Flow {
        say(&ctx, "Deploying CF...");
        let garden = &ctx.collab.garden;
        garden.report_progress(ctx.collab.ui.clone(), PLATFORM_DEPLOYMENT);
        garden.deploy_cloud_foundry(None).await?;
        Ok(StepFlow::Continue)
    }

    fn name(&self) -> &'static str {
        "deploy_platform"
    }
}

/// Deploys every service the image declares.
pub struct DeployServicesTask;

#[async_trait]
impl PipelineTask<StartCtx, RunOutcome> for DeployServicesTask {
    async fn run(self: Box<Self>, ctx: StartCtx) -> Flow {
        let garden = &ctx.collab.garden;
        let list = garden.get_services().await?;
        if !list.message.is_empty() {
            say(&ctx, &list.message);
        }

        tracing::info!(
            services = ?list.services.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            "Deploying services"
        );
        garden
            .deploy_services(ctx.collab.ui.clone(), &list.services)
            .await?;
        Ok(StepFlow::Continue)
    }

    fn name(&self) -> &'static str {
        "deploy_services"
    }
}
