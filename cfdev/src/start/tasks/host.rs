//! Tasks: host-side preparation (loopback aliases, resources, network helper).

use super::{Flow, say};
use crate::pipeline::{PipelineTask, StepFlow};
use crate::start::types::{RunOutcome, StartCtx};
use async_trait::async_trait;

pub struct LoopbackAliasTask;

#[async_trait]
impl PipelineTask<StartCtx, RunOutcome> for LoopbackAliasTask {
    async fn run(self: Box<Self>, ctx: StartCtx) -> Flow {
        ctx.collab
            .host_net
            .add_loopback_aliases(&ctx.bosh_director_ip, &ctx.cf_router_ip)
            .await?;
        tracing::debug!(
            director_ip = %ctx.bosh_director_ip,
            router_ip = %ctx.cf_router_ip,
            "Loopback aliases added"
        );
        Ok(StepFlow::Continue)
    }

    fn name(&self) -> &'static str {
        "network_aliases"
    }
}

/// Syncs exactly the items chosen by resource selection.
pub struct ResourceSyncTask;

#[async_trait]
impl PipelineTask<StartCtx, RunOutcome> for ResourceSyncTask {
    async fn run(self: Box<Self>, ctx: StartCtx) -> Flow {
        say(&ctx, "Downloading Resources...");
        let items = &ctx.selection.to_sync;
        tracing::info!(items = ?items.names(), "Syncing resources");
        ctx.collab.cache.sync(items).await?;
        Ok(StepFlow::Continue)
    }

    fn name(&self) -> &'static str {
        "resource_sync"
    }
}

pub struct HelperInstallTask;

#[async_trait]
impl PipelineTask<StartCtx, RunOutcome> for HelperInstallTask {
    async fn run(self: Box<Self>, ctx: StartCtx) -> Flow {
        say(&ctx, "Installing cfdevd network helper...");
        ctx.collab.cfdevd.install().await?;
        Ok(StepFlow::Continue)
    }

    fn name(&self) -> &'static str {
        "helper_install"
    }
}
