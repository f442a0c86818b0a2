//! Best-effort analytics for start runs.
//!
//! The orchestrator talks to the analytics sinks only through
//! [`TelemetryGate`], which logs and swallows every sink failure.

use async_trait::async_trait;
use cfdev_shared::CfdevResult;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub const START_BEGIN: &str = "start_begin";
pub const START_END: &str = "start_end";

/// Property used to segment every event of a run.
pub const SEGMENT_PROPERTY: &str = "type";

/// Set on the end event when the VM was already running.
pub const ALREADY_RUNNING_ATTRIBUTE: &str = "alreadyrunning";

pub type EventAttributes = Map<String, Value>;

/// Analytics event sink.
#[async_trait]
pub trait AnalyticsClient: Send + Sync {
    async fn event(&self, name: &str, attributes: Option<EventAttributes>) -> CfdevResult<()>;
}

/// Properties attached to every subsequent event.
pub trait AnalyticsToggle: Send + Sync {
    fn set_prop(&self, key: &str, value: &str) -> CfdevResult<()>;
}

/// Fire-and-forget front for the analytics sinks.
pub struct TelemetryGate {
    analytics: Arc<dyn AnalyticsClient>,
    toggle: Arc<dyn AnalyticsToggle>,
    segmented: AtomicBool,
}

impl TelemetryGate {
    pub fn new(analytics: Arc<dyn AnalyticsClient>, toggle: Arc<dyn AnalyticsToggle>) -> Self {
        Self {
            analytics,
            toggle,
            segmented: AtomicBool::new(false),
        }
    }

    /// Set the segmentation property. Only the first call per gate takes effect.
    pub fn set_segment(&self, value: &str) {
        if self.segmented.swap(true, Ordering::SeqCst) {
            tracing::warn!(value, "Segment already set for this run, ignoring");
            return;
        }
        if let Err(e) = self.toggle.set_prop(SEGMENT_PROPERTY, value) {
            tracing::warn!(value, error = %e, "Failed to set analytics segment");
        }
    }

    pub async fn emit(&self, event: &str, attributes: Option<EventAttributes>) {
        if let Err(e) = self.analytics.event(event, attributes).await {
            tracing::warn!(event, error = %e, "Failed to send analytics event");
        }
    }
}

/// Attributes of the end event for the already-running short-circuit.
pub fn already_running_attributes() -> EventAttributes {
    let mut attributes = Map::new();
    attributes.insert(ALREADY_RUNNING_ATTRIBUTE.to_string(), Value::Bool(true));
    attributes
}
