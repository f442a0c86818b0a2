//! Generic pipeline execution framework.
//!
//! Provides a table-driven executor that runs stages of tasks strictly in
//! order, stopping at the first task that halts or fails.

use super::metrics::{PipelineMetrics, StageMetrics, TaskMetrics};
use super::stage::Stage;
use super::task::{BoxedTask, StepFlow};
use cfdev_shared::errors::{CfdevError, CfdevResult};
use std::time::Instant;

pub struct ExecutionPlan<Ctx, Out> {
    stages: Vec<Stage<BoxedTask<Ctx, Out>>>,
}

impl<Ctx, Out> ExecutionPlan<Ctx, Out> {
    pub fn new(stages: Vec<Stage<BoxedTask<Ctx, Out>>>) -> Self {
        Self { stages }
    }

    pub fn stages(self) -> Vec<Stage<BoxedTask<Ctx, Out>>> {
        self.stages
    }

    /// Task names in execution order.
    pub fn task_names(&self) -> Vec<&'static str> {
        self.stages
            .iter()
            .flat_map(|stage| stage.tasks.iter().map(|task| task.name()))
            .collect()
    }
}

pub struct Pipeline<Ctx, Out> {
    stages: Vec<Stage<BoxedTask<Ctx, Out>>>,
}

impl<Ctx, Out> Pipeline<Ctx, Out> {
    pub fn new(stages: Vec<Stage<BoxedTask<Ctx, Out>>>) -> Self {
        Self { stages }
    }
}

pub struct PipelineBuilder;

impl PipelineBuilder {
    pub fn from_plan<Ctx, Out>(plan: ExecutionPlan<Ctx, Out>) -> Pipeline<Ctx, Out> {
        Pipeline::new(plan.stages())
    }
}

/// Result of a pipeline that ran without error.
#[derive(Debug)]
pub struct PipelineRun<Out> {
    /// Outcome of the task that halted the run, if any.
    pub outcome: Option<Out>,
    /// Name of the task that halted the run.
    pub halted_by: Option<&'static str>,
    pub metrics: PipelineMetrics,
}

/// Pipeline executor framework.
///
/// This provides the generic infrastructure for executing a table-driven pipeline.
/// The actual task execution logic is provided by task implementations.
pub struct PipelineExecutor;

impl PipelineExecutor {
    /// Execute a pipeline.
    ///
    /// Generic over:
    /// - `Ctx`: Shared pipeline context (use interior mutability for writes)
    /// - `Out`: Outcome a task may halt the run with
    pub async fn execute<Ctx, Out>(
        pipeline: Pipeline<Ctx, Out>,
        ctx: Ctx,
    ) -> CfdevResult<PipelineRun<Out>>
    where
        Ctx: Clone,
    {
        let total_start = Instant::now();
        let mut stage_metrics = Vec::new();

        for stage in pipeline.stages {
            let stage_start = Instant::now();
            let mut task_metrics = Vec::new();
            let mut halted = None;

            for task in stage.tasks {
                let name = task.name();
                let task_start = Instant::now();
                tracing::debug!(stage = stage.name, task = name, "Task starting");

                let flow = task.run(ctx.clone()).await.map_err(|e| {
                    tracing::error!(stage = stage.name, task = name, error = %e, "Task failed");
                    CfdevError::step(name, e)
                })?;

                task_metrics.push(TaskMetrics {
                    name,
                    duration_ms: task_start.elapsed().as_millis(),
                });

                if let StepFlow::Halt(outcome) = flow {
                    tracing::debug!(stage = stage.name, task = name, "Task halted pipeline");
                    halted = Some((name, outcome));
                    break;
                }
            }

            stage_metrics.push(StageMetrics {
                name: stage.name,
                duration_ms: stage_start.elapsed().as_millis(),
                tasks: task_metrics,
            });

            if let Some((name, outcome)) = halted {
                return Ok(PipelineRun {
                    outcome: Some(outcome),
                    halted_by: Some(name),
                    metrics: PipelineMetrics {
                        total_duration_ms: total_start.elapsed().as_millis(),
                        stages: stage_metrics,
                    },
                });
            }
        }

        Ok(PipelineRun {
            outcome: None,
            halted_by: None,
            metrics: PipelineMetrics {
                total_duration_ms: total_start.elapsed().as_millis(),
                stages: stage_metrics,
            },
        })
    }
}
