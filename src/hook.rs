/*
 * hook.rs
 *
 * Global registration and the native fatal path. install() is the one
 * entry point with a side effect in this crate: a CAS to claim the
 * slot, then per-target wiring. The native hook itself renders, writes
 * one stderr line, and exits 1. No recovery here - this code runs when
 * recovery already failed.
 */

use crate::sync::OneShot;

/// Exit status of a process ended by the fatal hook.
///
/// 1, specifically: distinguishable from a clean 0, from the usage
/// errors conventionally at 2, and from signal deaths at 128+N.
pub const FATAL_EXIT: u8 = 1;

/* install() may be called from anywhere; only the first call acts */
static INSTALLED: OneShot = OneShot::new();

/// Install the process-wide last-resort handlers. Idempotent; the
/// second and every later call is a no-op.
///
/// Call once from application bootstrap. Native targets get a panic
/// hook covering every thread: a main-thread panic is the classic
/// uncaught error, a background-thread panic is the failure nobody
/// joins, and both end with one stderr report and exit status
/// [`FATAL_EXIT`]. On `wasm32` with a reachable window the same two
/// channels (panics and unhandled promise rejections) paint a page
/// overlay instead; without a window - workers, non-browser hosts -
/// nothing is registered and failures keep their host defaults.
///
/// There is no uninstall. A process-wide last-resort handler with a
/// teardown path is a race between the teardown and the crash.
pub fn install() {
    if !INSTALLED.claim() {
        return;
    }
    register();
}

/// True once [`install`] has run, whether or not the environment
/// offered a channel to register on.
#[inline]
#[must_use]
pub fn is_installed() -> bool {
    INSTALLED.is_claimed()
}

#[cfg(not(target_arch = "wasm32"))]
fn register() {
    std::panic::set_hook(Box::new(native::fatal_hook));
}

#[cfg(target_arch = "wasm32")]
fn register() {
    if crate::env::is_browser() {
        crate::overlay::register();
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::panic::PanicHookInfo;

    use super::FATAL_EXIT;
    use crate::sync::OneShot;
    use crate::{io, report};

    /* first panicking thread wins stderr and the exit status */
    static REPORTED: OneShot = OneShot::new();

    pub(super) fn fatal_hook(info: &PanicHookInfo<'_>) {
        /* a guarded formatter probe panicked; catch_unwind upstream
         * owns that panic, not us */
        if report::is_rendering() {
            return;
        }

        if !REPORTED.claim() {
            /* another thread is mid-report and about to exit. Parking
             * forever beats interleaving two reports on one stderr. */
            loop {
                std::thread::park();
            }
        }

        let mut line = String::with_capacity(256);
        line.push_str(report::head());
        line.push_str(": ");
        line.push_str(&report::panic_text(info));
        line.push('\n');
        io::write_stderr(line.as_bytes());

        std::process::exit(i32::from(FATAL_EXIT));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /* Everything observable about install() lives in other processes:
     * the tests/ binaries own "install and then panic". Here we only
     * check the passive facts that cannot kill the harness. */

    #[test]
    fn test_fatal_exit_is_one() {
        assert_eq!(FATAL_EXIT, 1);
    }

    #[test]
    fn test_not_installed_by_default() {
        /* no test in this binary calls install() */
        assert!(!is_installed());
    }
}
