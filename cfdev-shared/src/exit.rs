//! Tokens pushed onto the shared exit channel when a supervised process
//! dies without being asked to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Long-running processes the orchestrator leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchedProcess {
    /// Host-to-VM network bridge.
    VpnKit,
    /// The VM itself.
    LinuxKit,
}

impl WatchedProcess {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchedProcess::VpnKit => "vpnkit",
            WatchedProcess::LinuxKit => "linuxkit",
        }
    }
}

impl fmt::Display for WatchedProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unexpected termination of a watched process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitSignal {
    pub process: WatchedProcess,
    pub observed_at: DateTime<Utc>,
}

impl ExitSignal {
    pub fn new(process: WatchedProcess) -> Self {
        Self {
            process,
            observed_at: Utc::now(),
        }
    }
}
