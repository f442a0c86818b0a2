//! Contracts for the collaborators the start sequence drives.
//!
//! Each call blocks (awaits) until the collaborator finishes or fails. Retry
//! policy, if any, belongs to the collaborator.

use crate::process::{Hypervisor, NetworkBridge};
use crate::resource::Catalog;
use crate::telemetry::{AnalyticsClient, AnalyticsToggle};
use crate::ui::Ui;
use async_trait::async_trait;
use cfdev_shared::CfdevResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Host network configuration.
#[async_trait]
pub trait HostNet: Send + Sync {
    /// Alias the platform addresses onto the loopback interface.
    async fn add_loopback_aliases(&self, director_ip: &str, router_ip: &str) -> CfdevResult<()>;
}

/// Downloads and verifies catalog items into the cache directory.
#[async_trait]
pub trait ResourceCache: Send + Sync {
    async fn sync(&self, items: &Catalog) -> CfdevResult<()>;
}

/// Privileged helper daemon (cfdevd) that routes traffic to the VM.
#[async_trait]
pub trait NetworkHelper: Send + Sync {
    async fn install(&self) -> CfdevResult<()>;
}

/// A service deployable next to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub handle: String,
    pub script: String,
    pub deployment: String,
}

/// Extra options for the platform deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployOptions {
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

/// Services declared by the VM image, plus an optional note for the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceList {
    pub services: Vec<Service>,
    pub message: String,
}

/// RPC client for the deployment agent (garden) inside the VM.
#[async_trait]
pub trait DeployClient: Send + Sync {
    /// Return once the agent answers.
    async fn ping(&self) -> CfdevResult<()>;

    async fn deploy_bosh(&self) -> CfdevResult<()>;

    /// Start streaming progress of deployment `label` to `ui`. Returns immediately.
    fn report_progress(&self, ui: Arc<dyn Ui>, label: &str);

    async fn deploy_cloud_foundry(&self, options: Option<&DeployOptions>) -> CfdevResult<()>;

    async fn get_services(&self) -> CfdevResult<ServiceList>;

    async fn deploy_services(&self, ui: Arc<dyn Ui>, services: &[Service]) -> CfdevResult<()>;
}

/// Every handle the start sequence needs, injected by the caller.
#[derive(Clone)]
pub struct Collaborators {
    pub ui: Arc<dyn Ui>,
    pub analytics: Arc<dyn AnalyticsClient>,
    pub analytics_toggle: Arc<dyn AnalyticsToggle>,
    pub host_net: Arc<dyn HostNet>,
    pub cache: Arc<dyn ResourceCache>,
    pub cfdevd: Arc<dyn NetworkHelper>,
    pub vpnkit: Arc<dyn NetworkBridge>,
    pub linuxkit: Arc<dyn Hypervisor>,
    pub garden: Arc<dyn DeployClient>,
}
