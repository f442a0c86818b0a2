//! Types shared between the cfdev orchestrator, its collaborators and the
//! host process that drives them.

pub mod errors;
pub mod exit;

pub use errors::{CfdevError, CfdevResult};
pub use exit::{ExitSignal, WatchedProcess};
