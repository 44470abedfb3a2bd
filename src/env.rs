/*
 * env.rs
 *
 * Where are we running? Two facts, decided once, never revisited.
 *
 * Native targets answer at compile time - the binary IS the process.
 * wasm32 needs one runtime probe because the same module can land in a
 * page, a worker, or a non-browser host, and only the page has a window
 * to paint on.
 */

/// True when compiled for a native OS process (anything but `wasm32`).
///
/// This is the "server-style" fact: a real process with a real stderr
/// and a real exit status. Compile-time constant, cannot be wrong at
/// runtime.
#[inline]
#[must_use]
pub const fn is_native() -> bool {
    cfg!(not(target_arch = "wasm32"))
}

/// True when a DOM `window` is reachable from this module.
///
/// Only ever true on `wasm32`, and there only when the host is an
/// actual browser page - workers and Node-style hosts have no window
/// and yield false. The probe runs once and the answer is cached for
/// the life of the process; it cannot fail, absence is just `false`.
#[must_use]
pub fn is_browser() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        static WINDOW_PRESENT: std::sync::OnceLock<bool> = std::sync::OnceLock::new();
        *WINDOW_PRESENT.get_or_init(|| web_sys::window().is_some())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}
