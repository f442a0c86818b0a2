//! Supervision of the processes that outlive the start sequence.
//!
//! ## Architecture
//!
//! - **Hypervisor / NetworkBridge**: collaborator contracts (start, stop, watch)
//! - **ProcessWatch**: reusable monitor collaborators build `watch` on
//! - **ExitSender / ExitReceiver**: the shared exit channel
//!
//! ```text
//! NetworkBridge::watch ──┐
//!                        ├──► ExitSender ──► ExitReceiver ──► teardown::supervise
//! Hypervisor::watch ─────┘    (bounded, never blocks)   (one signal per process)
//! ```
//!
//! The start sequence only hands out senders. Nothing in the sequence reads
//! the channel; the host process does once the sequence has returned.

mod exit;
mod hypervisor;
mod watch;

pub use exit::{ExitReceiver, ExitSender, WATCHER_COUNT, exit_channel};
pub use hypervisor::{Hypervisor, NetworkBridge};
pub use watch::ProcessWatch;
