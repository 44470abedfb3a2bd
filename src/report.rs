/*
 * report.rs
 *
 * Classify and render the values that reach a last-resort handler.
 *
 * Everything on the hook path is total by construction: a panic raised
 * while the panic hook runs aborts the process before the report gets
 * out, so `payload_text` and `panic_text` never invoke payload code.
 * The one entry point that does run foreign code (`error_text`, used
 * from ordinary embedding code) wraps every call in `catch_unwind` and
 * raises a thread-local flag so an installed fatal hook stands down
 * for those probe panics.
 */

use std::any::{self, Any};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::cell::Cell;
use std::error::Error;
use std::fmt::Write as _;
use std::panic::{self, AssertUnwindSafe, PanicHookInfo};

use crate::fail::Fail;

/// Fixed first line of every report, native and browser alike.
///
/// Deliberately constant: grep-able in logs, assertable in tests, and
/// immune to whatever state the process died in.
pub const BANNER: &str = "[crashguard] unhandled fatal error";

/// Placeholder for payloads that expose no message and match no known
/// type. Same wording the default runtime hook uses for the case.
const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

/// Longest cause chain `error_text` will walk. Cyclic or absurd chains
/// get a truncation line instead of an unbounded report.
const SOURCE_CHAIN_CAP: usize = 32;

/// The report header.
///
/// Always [`BANNER`]; the indirection exists so callers composing their
/// own output never hard-code the wording.
#[inline]
#[must_use]
pub fn head() -> &'static str {
    BANNER
}

/// Extract the textual message from a panic payload, if it carries one.
///
/// `Some` for the payloads the `panic!` family produces (`&str` and
/// `String`), `None` for anything shipped through `panic_any`. This is
/// the capability probe for opaque values: a borrowed message is the
/// one thing the runtime's own panic model guarantees a reader.
/// Never panics.
#[must_use]
pub fn payload_str(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(s) = payload.downcast_ref::<&str>() {
        Some(s)
    } else {
        payload.downcast_ref::<String>().map(String::as_str)
    }
}

/// Render any panic payload to owned text. Total: never panics, never
/// invokes code carried by the payload.
///
/// Message-bearing payloads render as their message. [`Fail`] values
/// render structurally (they are outcomes, not errors, and own no
/// display form). The primitives `panic_any` plausibly carries render
/// via their canonical display. Everything else gets the
/// `"Box<dyn Any>"` placeholder rather than a guess.
#[must_use]
pub fn payload_text(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload_str(payload) {
        return s.to_string();
    }
    if let Some(fail) = payload.downcast_ref::<Fail>() {
        return format!("{fail:?}");
    }

    macro_rules! probe {
        ($($ty:ty),* $(,)?) => {
            $(if let Some(v) = payload.downcast_ref::<$ty>() {
                return v.to_string();
            })*
        };
    }
    probe!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);

    OPAQUE_PAYLOAD.to_string()
}

/// Render an error as `"Name: message\n"` followed by one
/// `"caused by: ..."` line per source link.
///
/// `Name` is the last path segment of the concrete type the caller
/// holds - `std::io::Error` reports as `Error`, a user's `ParseFault`
/// as `ParseFault` - and callers holding only a trait object, whether
/// `&dyn Error` or a `Box<dyn Error + Send + Sync>`, get the plain
/// `Error` default. Every line ends in `\n`, so the first line is a
/// stable prefix for log scrapers.
///
/// Total even against hostile errors: a `Display` or `source` impl that
/// panics yields a placeholder line instead of propagating, and an
/// installed fatal hook ignores panics raised by this probe.
///
/// # Examples
///
/// ```rust
/// let err = std::io::Error::other("boom");
/// assert_eq!(crashguard::report::error_text(&err), "Error: boom\n");
/// ```
#[must_use]
pub fn error_text<E: Error + ?Sized>(err: &E) -> String {
    let name = short_type_name(any::type_name::<E>());
    let mut text = match guarded(|| err.to_string()) {
        Some(message) => format!("{name}: {message}\n"),
        None => format!("{name}: <message unavailable>\n"),
    };

    /* walk the cause chain; a hostile link degrades, a cycle hits the cap */
    let mut depth = 0;
    let mut cause = guarded(|| err.source()).flatten();
    while let Some(link) = cause {
        if depth == SOURCE_CHAIN_CAP {
            text.push_str("caused by: <chain truncated>\n");
            break;
        }
        match guarded(|| link.to_string()) {
            Some(message) => {
                let _ = writeln!(text, "caused by: {message}");
            }
            None => text.push_str("caused by: <message unavailable>\n"),
        }
        depth += 1;
        cause = guarded(|| link.source()).flatten();
    }
    text
}

/// Full report body for a panic, shaped like the runtime's own message:
/// thread name, location, payload, and the backtrace when
/// `RUST_BACKTRACE` asked for one. Total: safe to call from inside a
/// panic hook.
#[must_use]
pub fn panic_text(info: &PanicHookInfo<'_>) -> String {
    let thread = std::thread::current();
    let name = thread.name().unwrap_or("<unnamed>");

    let mut text = String::with_capacity(128);
    match info.location() {
        Some(location) => {
            let _ = writeln!(text, "thread '{name}' panicked at {location}:");
        }
        None => {
            let _ = writeln!(text, "thread '{name}' panicked:");
        }
    }
    text.push_str(&payload_text(info.payload()));

    /* "if present" is the env-gated capture deciding, not us */
    let backtrace = Backtrace::capture();
    if matches!(backtrace.status(), BacktraceStatus::Captured) {
        let _ = write!(text, "\n\nstack backtrace:\n{backtrace}");
    }
    text
}

/* "std::io::Error" -> "Error", "dyn core::error::Error" -> "Error",
 * "holder::Wrapped<T>" -> "Wrapped". Trait objects carry their auto
 * traits in the name ("dyn ... Error + ... Send + ... Sync"), so the
 * cut happens at the first bound as well as the first generic, before
 * the last-segment split. Paths and generics don't help a report that
 * names its message anyway. */
fn short_type_name(full: &str) -> &str {
    let full = full.trim_start_matches("dyn ");
    let base = full.split(['<', '+']).next().unwrap_or(full).trim_end();
    base.rsplit("::").next().unwrap_or(base)
}

thread_local! {
    /* raised while foreign rendering code runs under catch_unwind */
    static RENDERING: Cell<bool> = const { Cell::new(false) };
}

/// True while this thread is probing foreign rendering code under
/// `catch_unwind`. The fatal hook must not treat those panics as fatal.
pub(crate) fn is_rendering() -> bool {
    RENDERING.with(Cell::get)
}

/* run one foreign call with the stand-down flag up; None if it panicked */
fn guarded<T>(f: impl FnOnce() -> T) -> Option<T> {
    RENDERING.with(|flag| {
        let was = flag.replace(true);
        let result = panic::catch_unwind(AssertUnwindSafe(f)).ok();
        flag.set(was);
        result
    })
}
