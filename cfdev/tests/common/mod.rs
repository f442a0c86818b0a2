//! Recording fakes for every start collaborator.
//!
//! All fakes append to one shared call log so tests can assert the exact
//! order of collaborator calls across components.

#![allow(dead_code)]

use async_trait::async_trait;
use cfdev::collab::{DeployClient, DeployOptions, HostNet, NetworkHelper, ResourceCache, Service, ServiceList};
use cfdev::process::{Hypervisor, NetworkBridge};
use cfdev::resource::{Catalog, ResourceItem};
use cfdev::telemetry::{AnalyticsClient, AnalyticsToggle, EventAttributes};
use cfdev::ui::Ui;
use cfdev::{CfdevConfig, CfdevError, CfdevResult, Collaborators, ExitSender, WatchedProcess};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetProp(String, String),
    Event(String, Option<EventAttributes>),
    Say(String),
    IsRunning,
    AddLoopbackAliases(String, String),
    Sync(Vec<String>),
    Install,
    VpnKitStart,
    VpnKitWatch,
    VpnKitStop,
    LinuxKitStart(u32, u64, PathBuf),
    LinuxKitWatch,
    LinuxKitStop,
    Ping,
    DeployBosh,
    ReportProgress(String),
    DeployCloudFoundry(Option<DeployOptions>),
    GetServices,
    DeployServices(Vec<Service>),
}

#[derive(Default)]
pub struct Harness {
    calls: Mutex<Vec<Call>>,
    fail_on: Mutex<Option<&'static str>>,
    already_running: Mutex<bool>,
    services: Mutex<ServiceList>,
    watchers: Mutex<Vec<(WatchedProcess, ExitSender)>>,
}

impl Harness {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn collaborators(self: &Arc<Self>) -> Collaborators {
        let analytics = Arc::new(FakeAnalytics(Arc::clone(self)));
        Collaborators {
            ui: Arc::new(FakeUi(Arc::clone(self))),
            analytics: analytics.clone(),
            analytics_toggle: analytics,
            host_net: Arc::new(FakeHostNet(Arc::clone(self))),
            cache: Arc::new(FakeCache(Arc::clone(self))),
            cfdevd: Arc::new(FakeCfdevd(Arc::clone(self))),
            vpnkit: Arc::new(FakeVpnKit(Arc::clone(self))),
            linuxkit: Arc::new(FakeLinuxKit(Arc::clone(self))),
            garden: Arc::new(FakeGarden(Arc::clone(self))),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Make the collaborator operation `op` fail.
    pub fn fail_on(&self, op: &'static str) {
        *self.fail_on.lock() = Some(op);
    }

    pub fn set_already_running(&self, running: bool) {
        *self.already_running.lock() = running;
    }

    pub fn set_services(&self, list: ServiceList) {
        *self.services.lock() = list;
    }

    pub fn watched(&self) -> Vec<WatchedProcess> {
        self.watchers.lock().iter().map(|(p, _)| *p).collect()
    }

    pub fn watcher_senders(&self) -> Vec<ExitSender> {
        self.watchers.lock().iter().map(|(_, s)| s.clone()).collect()
    }

    /// Simulate the supervised `process` dying.
    pub fn kill(&self, process: WatchedProcess) {
        for (watched, sender) in self.watchers.lock().iter() {
            if *watched == process {
                sender.notify(process);
            }
        }
    }

    fn record(&self, call: Call, op: &'static str) -> Result<(), String> {
        self.calls.lock().push(call);
        if *self.fail_on.lock() == Some(op) {
            return Err(format!("{op} failed"));
        }
        Ok(())
    }
}

pub struct FakeUi(Arc<Harness>);

impl Ui for FakeUi {
    fn say(&self, line: &str) {
        self.0.calls.lock().push(Call::Say(line.to_string()));
    }
}

pub struct FakeAnalytics(Arc<Harness>);

#[async_trait]
impl AnalyticsClient for FakeAnalytics {
    async fn event(&self, name: &str, attributes: Option<EventAttributes>) -> CfdevResult<()> {
        self.0
            .record(Call::Event(name.to_string(), attributes), "event")
            .map_err(CfdevError::Telemetry)
    }
}

impl AnalyticsToggle for FakeAnalytics {
    fn set_prop(&self, key: &str, value: &str) -> CfdevResult<()> {
        self.0
            .record(Call::SetProp(key.to_string(), value.to_string()), "set_prop")
            .map_err(CfdevError::Telemetry)
    }
}

pub struct FakeHostNet(Arc<Harness>);

#[async_trait]
impl HostNet for FakeHostNet {
    async fn add_loopback_aliases(&self, director_ip: &str, router_ip: &str) -> CfdevResult<()> {
        self.0
            .record(
                Call::AddLoopbackAliases(director_ip.to_string(), router_ip.to_string()),
                "add_loopback_aliases",
            )
            .map_err(CfdevError::Network)
    }
}

pub struct FakeCache(Arc<Harness>);

#[async_trait]
impl ResourceCache for FakeCache {
    async fn sync(&self, items: &Catalog) -> CfdevResult<()> {
        let names = items.names().into_iter().map(String::from).collect();
        self.0
            .record(Call::Sync(names), "sync")
            .map_err(CfdevError::Cache)
    }
}

pub struct FakeCfdevd(Arc<Harness>);

#[async_trait]
impl NetworkHelper for FakeCfdevd {
    async fn install(&self) -> CfdevResult<()> {
        self.0
            .record(Call::Install, "install")
            .map_err(CfdevError::Network)
    }
}

pub struct FakeVpnKit(Arc<Harness>);

#[async_trait]
impl NetworkBridge for FakeVpnKit {
    async fn start(&self) -> CfdevResult<()> {
        self.0
            .record(Call::VpnKitStart, "vpnkit_start")
            .map_err(CfdevError::Network)
    }

    async fn stop(&self) -> CfdevResult<()> {
        self.0
            .record(Call::VpnKitStop, "vpnkit_stop")
            .map_err(CfdevError::Network)
    }

    fn watch(&self, exit: ExitSender) {
        self.0.calls.lock().push(Call::VpnKitWatch);
        self.0.watchers.lock().push((WatchedProcess::VpnKit, exit));
    }
}

pub struct FakeLinuxKit(Arc<Harness>);

#[async_trait]
impl Hypervisor for FakeLinuxKit {
    async fn is_running(&self) -> CfdevResult<bool> {
        self.0
            .record(Call::IsRunning, "is_running")
            .map_err(CfdevError::Engine)?;
        Ok(*self.0.already_running.lock())
    }

    async fn start(&self, cpus: u32, memory_mb: u64, image: &Path) -> CfdevResult<()> {
        self.0
            .record(
                Call::LinuxKitStart(cpus, memory_mb, image.to_path_buf()),
                "linuxkit_start",
            )
            .map_err(CfdevError::Engine)
    }

    async fn stop(&self) -> CfdevResult<()> {
        self.0
            .record(Call::LinuxKitStop, "linuxkit_stop")
            .map_err(CfdevError::Engine)
    }

    fn watch(&self, exit: ExitSender) {
        self.0.calls.lock().push(Call::LinuxKitWatch);
        self.0.watchers.lock().push((WatchedProcess::LinuxKit, exit));
    }
}

pub struct FakeGarden(Arc<Harness>);

#[async_trait]
impl DeployClient for FakeGarden {
    async fn ping(&self) -> CfdevResult<()> {
        self.0.record(Call::Ping, "ping").map_err(CfdevError::Deploy)
    }

    async fn deploy_bosh(&self) -> CfdevResult<()> {
        self.0
            .record(Call::DeployBosh, "deploy_bosh")
            .map_err(CfdevError::Deploy)
    }

    fn report_progress(&self, _ui: Arc<dyn Ui>, label: &str) {
        self.0.calls.lock().push(Call::ReportProgress(label.to_string()));
    }

    async fn deploy_cloud_foundry(&self, options: Option<&DeployOptions>) -> CfdevResult<()> {
        self.0
            .record(
                Call::DeployCloudFoundry(options.cloned()),
                "deploy_cloud_foundry",
            )
            .map_err(CfdevError::Deploy)
    }

    async fn get_services(&self) -> CfdevResult<ServiceList> {
        self.0
            .record(Call::GetServices, "get_services")
            .map_err(CfdevError::Deploy)?;
        Ok(self.0.services.lock().clone())
    }

    async fn deploy_services(&self, _ui: Arc<dyn Ui>, services: &[Service]) -> CfdevResult<()> {
        self.0
            .record(Call::DeployServices(services.to_vec()), "deploy_services")
            .map_err(CfdevError::Deploy)
    }
}

/// Config rooted in a fresh temp dir with a two-item catalog.
pub fn test_config() -> (TempDir, CfdevConfig) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = CfdevConfig::new(dir.path());
    config.cache_dir = dir.path().join("some-cache-dir");
    config.state_dir = dir.path().join("some-state-dir");
    config.vpnkit_state_dir = dir.path().join("some-vpnkit-state-dir");
    config.bosh_director_ip = "some-bosh-director-ip".to_string();
    config.cf_router_ip = "some-cf-router-ip".to_string();
    config.dependencies = Catalog::new(vec![
        ResourceItem::named("some-item"),
        ResourceItem::named("cf-deps.iso"),
    ])
    .unwrap();
    (dir, config)
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            name: "some-service".into(),
            handle: "some-handle".into(),
            script: "/path/to/some-script".into(),
            deployment: "some-deployment".into(),
        },
        Service {
            name: "some-other-service".into(),
            handle: "some-other-handle".into(),
            script: "/path/to/some-other-script".into(),
            deployment: "some-other-deployment".into(),
        },
    ]
}
