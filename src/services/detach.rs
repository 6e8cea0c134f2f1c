//! Fork-based detachment of the post-run rotation task.

use std::io;
use std::thread;
use std::time::Duration;

use crate::domain::AppError;

/// Delay before the detached child starts its work, giving the parent time
/// to finish its own teardown and flush its log.
const DETACH_DELAY: Duration = Duration::from_millis(500);

/// Split off a background child that runs `action` and exits.
///
/// The parent returns `Ok(())` as soon as the fork succeeds, so the caller
/// is never delayed by the action. The child sleeps for [`DETACH_DELAY`],
/// runs `action`, and terminates with the returned code through `_exit`;
/// any atexit handlers belong to the parent's lifecycle, not this task.
/// A failed fork is fatal to the caller: the action is abandoned and the
/// error is returned for the process to exit non-zero.
pub fn detach_and_run<F>(action: F) -> Result<(), AppError>
where
    F: FnOnce() -> i32,
{
    match unsafe { libc::fork() } {
        -1 => Err(AppError::DetachFailed(io::Error::last_os_error().to_string())),
        0 => {
            thread::sleep(DETACH_DELAY);
            let code = action();
            unsafe { libc::_exit(code) }
        }
        _ => Ok(()),
    }
}
