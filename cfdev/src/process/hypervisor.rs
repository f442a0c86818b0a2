//! Contracts for the long-running processes the start sequence leaves behind.

use super::ExitSender;
use async_trait::async_trait;
use cfdev_shared::CfdevResult;
use std::path::Path;

/// The VM the platform runs in.
///
/// `start` boots the VM and returns once the hypervisor process is up.
/// `watch` installs a monitor and returns immediately; the monitor pushes
/// one `ExitSignal` if the VM dies without `stop` having been called.
#[async_trait]
pub trait Hypervisor: Send + Sync {
    /// Check whether a VM from an earlier run is still up.
    async fn is_running(&self) -> CfdevResult<bool>;

    /// Boot the VM from `image`.
    async fn start(&self, cpus: u32, memory_mb: u64, image: &Path) -> CfdevResult<()>;

    /// Stop the VM. Silences the monitor installed by `watch`.
    async fn stop(&self) -> CfdevResult<()>;

    fn watch(&self, exit: ExitSender);
}

/// Host-to-VM network bridge.
///
/// Same supervision contract as [`Hypervisor`].
#[async_trait]
pub trait NetworkBridge: Send + Sync {
    async fn start(&self) -> CfdevResult<()>;

    async fn stop(&self) -> CfdevResult<()>;

    fn watch(&self, exit: ExitSender);
}
