//! Process liveness helpers for supervising detached processes by PID.

/// Kill a process with SIGKILL.
///
/// # Returns
/// * `true` - Process was killed or doesn't exist
/// * `false` - Failed to kill (permission denied), or `pid` does not name a
///   single process
pub fn kill_process(pid: u32) -> bool {
    if !is_single_pid(pid) {
        return false;
    }
    unsafe { libc::kill(pid as i32, libc::SIGKILL) == 0 || !is_process_alive(pid) }
}

/// Check if a process with the given PID exists.
///
/// Uses `libc::kill(pid, 0)` which sends a null signal to check existence.
///
/// # Returns
/// * `true` - Process exists
/// * `false` - Process does not exist or permission denied
pub fn is_process_alive(pid: u32) -> bool {
    if !is_single_pid(pid) {
        return false;
    }
    unsafe { libc::kill(pid as i32, 0) == 0 }
}

// PID 0 and values that wrap negative address process groups, not a process.
fn is_single_pid(pid: u32) -> bool {
    pid != 0 && pid <= i32::MAX as u32
}
