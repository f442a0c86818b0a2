//! Shared exit channel between process monitors and the host process.

use cfdev_shared::{ExitSignal, WatchedProcess};
use std::collections::HashSet;
use tokio::sync::mpsc::{self, error::TrySendError};

/// Monitors registered by one start run (network bridge and VM).
pub const WATCHER_COUNT: usize = 2;

/// Create the exit channel for `watchers` monitors.
///
/// Capacity is at least one slot per monitor so a monitor's single write
/// never waits for a reader.
pub fn exit_channel(watchers: usize) -> (ExitSender, ExitReceiver) {
    let (tx, rx) = mpsc::channel(watchers.max(1));
    (
        ExitSender { tx },
        ExitReceiver {
            rx,
            seen: HashSet::new(),
        },
    )
}

/// Write half, cloned into every monitor.
#[derive(Clone, Debug)]
pub struct ExitSender {
    tx: mpsc::Sender<ExitSignal>,
}

impl ExitSender {
    /// Report that `process` stopped unexpectedly. Never blocks.
    pub fn notify(&self, process: WatchedProcess) {
        match self.tx.try_send(ExitSignal::new(process)) {
            Ok(()) => tracing::debug!(process = %process, "Exit signal queued"),
            Err(TrySendError::Full(_)) => {
                tracing::warn!(process = %process, "Exit channel full, dropping signal")
            }
            Err(TrySendError::Closed(_)) => {
                tracing::debug!(process = %process, "Exit channel closed, nobody is listening")
            }
        }
    }

    /// Whether `self` and `other` feed the same channel.
    pub fn same_channel(&self, other: &ExitSender) -> bool {
        self.tx.same_channel(&other.tx)
    }
}

/// Read half, owned by the host process.
#[derive(Debug)]
pub struct ExitReceiver {
    rx: mpsc::Receiver<ExitSignal>,
    seen: HashSet<WatchedProcess>,
}

impl ExitReceiver {
    /// Next signal from a process not reported before.
    ///
    /// Returns `None` once every sender is dropped and the buffer is empty.
    pub async fn recv(&mut self) -> Option<ExitSignal> {
        while let Some(signal) = self.rx.recv().await {
            if self.seen.insert(signal.process) {
                return Some(signal);
            }
            tracing::debug!(process = %signal.process, "Ignoring repeated exit signal");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notify_then_recv() {
        let (tx, mut rx) = exit_channel(WATCHER_COUNT);
        tx.notify(WatchedProcess::VpnKit);

        let signal = rx.recv().await.unwrap();
        assert_eq!(signal.process, WatchedProcess::VpnKit);
    }

    #[tokio::test]
    async fn test_repeated_signal_is_delivered_once() {
        let (tx, mut rx) = exit_channel(4);
        tx.notify(WatchedProcess::LinuxKit);
        tx.notify(WatchedProcess::LinuxKit);
        tx.notify(WatchedProcess::VpnKit);
        drop(tx);

        assert_eq!(rx.recv().await.unwrap().process, WatchedProcess::LinuxKit);
        assert_eq!(rx.recv().await.unwrap().process, WatchedProcess::VpnKit);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_every_watcher_fits_without_a_reader() {
        let (tx, mut rx) = exit_channel(WATCHER_COUNT);
        // No reader yet: both writes must return immediately.
        tx.notify(WatchedProcess::VpnKit);
        tx.notify(WatchedProcess::LinuxKit);
        drop(tx);

        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_none());
    }

    #[test]
    fn test_zero_watchers_still_gets_a_slot() {
        let (tx, _rx) = exit_channel(0);
        tx.notify(WatchedProcess::VpnKit);
    }

    #[test]
    fn test_clones_share_channel() {
        let (tx, _rx) = exit_channel(1);
        let (other, _other_rx) = exit_channel(1);
        assert!(tx.same_channel(&tx.clone()));
        assert!(!tx.same_channel(&other));
    }

    #[test]
    fn test_notify_after_receiver_dropped_does_not_panic() {
        let (tx, rx) = exit_channel(1);
        drop(rx);
        tx.notify(WatchedProcess::LinuxKit);
    }
}
