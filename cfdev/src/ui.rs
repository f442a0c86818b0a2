//! User-facing narration sink.

use std::io::Write;

/// Append-only narration. Implementations must not block for long.
pub trait Ui: Send + Sync {
    fn say(&self, line: &str);
}

/// Writes narration to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleUi;

impl Ui for ConsoleUi {
    fn say(&self, line: &str) {
        tracing::debug!(line, "ui");
        let mut stdout = std::io::stdout().lock();
        // A closed stdout must not abort provisioning.
        let _ = writeln!(stdout, "{}", line);
    }
}
