//! Generic task trait for pipeline execution.

use async_trait::async_trait;
use cfdev_shared::errors::CfdevResult;

/// What the pipeline does after a task succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepFlow<Out> {
    /// Run the next task.
    Continue,
    /// Stop here; the run ends with this outcome.
    Halt(Out),
}

/// Trait for tasks that can be executed in a pipeline.
///
/// Tasks run with a shared context, which is cloned per task.
#[async_trait]
pub trait PipelineTask<Ctx, Out>: Send + Sync {
    /// Execute the task with the shared pipeline context.
    async fn run(self: Box<Self>, ctx: Ctx) -> CfdevResult<StepFlow<Out>>;

    /// Stable task name, used for logging, metrics and error reporting.
    fn name(&self) -> &'static str;
}

pub type BoxedTask<Ctx, Out> = Box<dyn PipelineTask<Ctx, Out>>;
