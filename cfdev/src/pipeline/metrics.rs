#[derive(Debug, Clone)]
pub struct TaskMetrics {
    pub name: &'static str,
    pub duration_ms: u128,
}

#[derive(Debug, Clone)]
pub struct StageMetrics {
    pub name: &'static str,
    pub duration_ms: u128,
    pub tasks: Vec<TaskMetrics>,
}

#[derive(Debug, Clone)]
pub struct PipelineMetrics {
    pub total_duration_ms: u128,
    pub stages: Vec<StageMetrics>,
}

impl PipelineMetrics {
    pub fn task_duration_ms(&self, name: &str) -> Option<u128> {
        self.stages
            .iter()
            .flat_map(|stage| stage.tasks.iter())
            .find(|task| task.name == name)
            .map(|task| task.duration_ms)
    }

    /// Names of every task that ran, in order.
    pub fn task_names(&self) -> Vec<&'static str> {
        self.stages
            .iter()
            .flat_map(|stage| stage.tasks.iter().map(|task| task.name))
            .collect()
    }

    pub fn log_stages(&self) {
        for stage in &self.stages {
            tracing::debug!(
                stage = stage.name,
                duration_ms = stage.duration_ms as u64,
                tasks = stage.tasks.len(),
                "Stage finished"
            );
        }
        tracing::info!(
            total_duration_ms = self.total_duration_ms as u64,
            "Pipeline finished"
        );
    }
}
