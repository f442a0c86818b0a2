//! Post-start supervision of the VM and network bridge.
//!
//! After a successful start the host process parks here until the user
//! interrupts it or a watched process dies, then stops both processes.

use crate::process::{ExitReceiver, Hypervisor, NetworkBridge};
use crate::ui::Ui;
use cfdev_shared::ExitSignal;
use std::future::Future;
use std::sync::Arc;

/// Why supervision ended.
#[derive(Debug, Clone)]
pub enum TeardownReason {
    /// The shutdown future completed (OS signal).
    Interrupted,
    /// A watched process died on its own.
    ProcessExited(ExitSignal),
}

/// Wait for `shutdown` or the first exit signal, then stop the VM and bridge.
///
/// If every exit sender is dropped, only `shutdown` can end supervision.
pub async fn supervise<F>(
    mut exits: ExitReceiver,
    shutdown: F,
    ui: Arc<dyn Ui>,
    hypervisor: Arc<dyn Hypervisor>,
    bridge: Arc<dyn NetworkBridge>,
) -> TeardownReason
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    let reason = tokio::select! {
        _ = &mut shutdown => TeardownReason::Interrupted,
        Some(signal) = exits.recv() => TeardownReason::ProcessExited(signal),
    };

    match &reason {
        TeardownReason::Interrupted => tracing::info!("Shutdown requested, stopping CF Dev"),
        TeardownReason::ProcessExited(signal) => {
            tracing::error!(process = %signal.process, at = %signal.observed_at, "Watched process stopped");
            ui.say(&format!("ERROR: {} has stopped", signal.process));
        }
    }

    if let Err(e) = hypervisor.stop().await {
        tracing::warn!(error = %e, "Failed to stop VM");
    }
    if let Err(e) = bridge.stop().await {
        tracing::warn!(error = %e, "Failed to stop network bridge");
    }

    reason
}

/// Completes when the process receives a termination signal.
///
/// Unix: SIGINT, SIGTERM, SIGQUIT and ctrl-c. Elsewhere: ctrl-c only.
#[cfg(unix)]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigquit = signal(SignalKind::quit())?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {},
        _ = sigint.recv()  => {},
        _ = sigterm.recv() => {},
        _ = sigquit.recv() => {},
    }
    Ok(())
}

#[cfg(not(unix))]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
