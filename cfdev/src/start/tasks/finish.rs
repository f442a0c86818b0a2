//! Tasks: welcome message and telemetry end.

use super::{Flow, say};
use crate::pipeline::{PipelineTask, StepFlow};
use crate::start::types::{RunOutcome, StartCtx};
use crate::telemetry::START_END;
use async_trait::async_trait;

pub struct WelcomeTask;

#[async_trait]
impl PipelineTask<StartCtx, RunOutcome> for WelcomeTask {
    async fn run(self: Box<Self>, ctx: StartCtx) -> Flow {
        say(&ctx, &welcome_message(&ctx.cf_router_ip));
        Ok(StepFlow::Continue)
    }

    fn name(&self) -> &'static str {
        "welcome"
    }
}

pub struct TelemetryEndTask;

#[async_trait]
impl PipelineTask<StartCtx, RunOutcome> for TelemetryEndTask {
    async fn run(self: Box<Self>, ctx: StartCtx) -> Flow {
        ctx.telemetry.emit(START_END, None).await;
        Ok(StepFlow::Continue)
    }

    fn name(&self) -> &'static str {
        "telemetry_end"
    }
}

fn welcome_message(router_ip: &str) -> String {
    format!(
        "\n\tCF Dev is now running!\n\
         \n\
         \tTo begin using CF Dev, please run:\n\
         \t    cf login -a https://api.dev.cfdev.sh --skip-ssl-validation\n\
         \n\
         \tAdmin user => Email: admin / Password: admin\n\
         \tRegular user => Email: user / Password: pass\n\
         \n\
         \tApps are routed through {}.\n",
        router_ip
    )
}
