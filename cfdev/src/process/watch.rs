//! Background monitor for one supervised process.

use super::ExitSender;
use crate::util::{is_process_alive, kill_process};
use cfdev_shared::WatchedProcess;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::process::Child;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Monitor for one supervised process.
///
/// A collaborator keeps one `ProcessWatch` per process it manages. `watch_*`
/// spawns a detached task that reports the process on the exit channel if it
/// dies on its own. `request_stop` marks the stop as orchestrator-initiated:
/// the monitor exits without reporting and leaves the process alone, so the
/// collaborator's own graceful stop can finish. `terminate` does the same but
/// SIGKILLs the process first.
///
/// Each spawned monitor reports at most once.
#[derive(Debug, Clone)]
pub struct ProcessWatch {
    process: WatchedProcess,
    stopping: CancellationToken,
    kill_on_stop: Arc<AtomicBool>,
}

impl ProcessWatch {
    pub fn new(process: WatchedProcess) -> Self {
        Self {
            process,
            stopping: CancellationToken::new(),
            kill_on_stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn process(&self) -> WatchedProcess {
        self.process
    }

    /// Mark the upcoming exit as requested. Call before stopping the process
    /// gracefully.
    pub fn request_stop(&self) {
        tracing::debug!(process = %self.process, "Stop requested");
        self.stopping.cancel();
    }

    /// Silence the monitor and SIGKILL the process.
    pub fn terminate(&self) {
        tracing::debug!(process = %self.process, "Termination requested");
        self.kill_on_stop.store(true, Ordering::SeqCst);
        self.stopping.cancel();
    }

    pub fn is_stopping(&self) -> bool {
        self.stopping.is_cancelled()
    }

    /// Supervise a child process spawned by the collaborator.
    pub fn watch_child(&self, mut child: Child, exit: ExitSender) -> JoinHandle<()> {
        let process = self.process;
        let stopping = self.stopping.clone();
        let kill_on_stop = Arc::clone(&self.kill_on_stop);

        tokio::spawn(async move {
            let status = tokio::select! {
                status = child.wait() => Some(status),
                _ = stopping.cancelled() => None,
            };

            match status {
                None => {
                    if kill_on_stop.load(Ordering::SeqCst) {
                        if let Err(e) = child.kill().await {
                            tracing::warn!(process = %process, error = %e, "Failed to kill process on stop");
                        }
                    }
                    tracing::debug!(process = %process, "Monitor finished after requested stop");
                }
                Some(_) if stopping.is_cancelled() => {
                    tracing::debug!(process = %process, "Process exited after requested stop");
                }
                Some(status) => {
                    match status {
                        Ok(status) => tracing::warn!(process = %process, %status, "Process exited unexpectedly"),
                        Err(e) => tracing::warn!(process = %process, error = %e, "Lost track of process"),
                    }
                    exit.notify(process);
                }
            }
        })
    }

    /// Supervise a process by PID, polling liveness every `interval`.
    ///
    /// For processes the collaborator did not spawn itself (daemonized helpers,
    /// reattached VMs).
    pub fn watch_pid(&self, pid: u32, interval: Duration, exit: ExitSender) -> JoinHandle<()> {
        let process = self.process;
        let stopping = self.stopping.clone();
        let kill_on_stop = Arc::clone(&self.kill_on_stop);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = stopping.cancelled() => {
                        if kill_on_stop.load(Ordering::SeqCst) && !kill_process(pid) {
                            tracing::warn!(process = %process, pid, "Failed to kill process on stop");
                        }
                        tracing::debug!(process = %process, pid, "Monitor finished after requested stop");
                        return;
                    }
                    _ = ticker.tick() => {
                        if !is_process_alive(pid) {
                            break;
                        }
                    }
                }
            }

            if stopping.is_cancelled() {
                return;
            }
            tracing::warn!(process = %process, pid, "Process exited unexpectedly");
            exit.notify(process);
        })
    }
}
