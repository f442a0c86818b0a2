//! Generic table-driven pipeline execution framework.
//!
//! ## Architecture
//!
//! ```text
//! Pipeline → Stages → Tasks
//!
//! - Pipeline: Runs every stage in order
//! - Stage: Named group of tasks, run one after another
//! - Task: Atomic unit of work; continues the run or halts it with an outcome
//! ```
//!
//! A task error stops the run and is returned wrapped as
//! `CfdevError::Step` carrying the task name. Nothing after a failed or
//! halting task runs.
//!
//! ## Example
//!
//! ```ignore
//! use pipeline::{ExecutionPlan, PipelineBuilder, PipelineExecutor, Stage};
//! use std::sync::Arc;
//!
//! struct Context;
//! struct TaskA;
//! struct TaskB;
//!
//! let plan = ExecutionPlan::new(vec![Stage::new("setup", vec![
//!     Box::new(TaskA),
//!     Box::new(TaskB),
//! ])]);
//!
//! let pipeline = PipelineBuilder::from_plan(plan);
//! let run = PipelineExecutor::execute(pipeline, Arc::new(Context)).await?;
//! println!("pipeline took {}ms", run.metrics.total_duration_ms);
//! ```

mod metrics;
#[allow(clippy::module_inception)]
mod pipeline;
mod stage;
mod task;

pub use metrics::{PipelineMetrics, StageMetrics, TaskMetrics};
pub use pipeline::{ExecutionPlan, Pipeline, PipelineBuilder, PipelineExecutor, PipelineRun};
pub use stage::Stage;
pub use task::{BoxedTask, PipelineTask, StepFlow};
