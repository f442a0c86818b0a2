//! # cfdev
//!
//! Brings a local Cloud Foundry environment up on a developer machine and
//! supervises it afterwards.
//!
//! ```text
//! host process
//!   │
//!   ├─► StartCommand::execute(request)
//!   │     ├─ resource::select        (what to fetch, what to boot)
//!   │     └─ pipeline                (telemetry → running check → host prep
//!   │                                  → vpnkit → VM → garden → deploy)
//!   │             │
//!   │             └─ Hypervisor::watch / NetworkBridge::watch ──► ExitSender
//!   │
//!   └─► teardown::supervise(ExitReceiver, shutdown signal)
//! ```
//!
//! Collaborators (hypervisor, network bridge, helper daemon, cache, deploy
//! client, UI, analytics) are traits injected through [`Collaborators`].

pub mod collab;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod process;
pub mod resource;
pub mod start;
pub mod teardown;
pub mod telemetry;
pub mod ui;
mod util;

pub use cfdev_shared::{CfdevError, CfdevResult, ExitSignal, WatchedProcess};
pub use collab::Collaborators;
pub use config::CfdevConfig;
pub use logging::init_logging_for;
pub use process::{ExitReceiver, ExitSender, ProcessWatch, WATCHER_COUNT, exit_channel};
pub use start::{RunOutcome, StartArgs, StartCommand, StartRequest};
pub use teardown::{TeardownReason, supervise, wait_for_shutdown_signal};
