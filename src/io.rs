/*
 * io.rs
 *
 * The one write that must not fail sideways. The fatal hook reports on
 * a dying process, and a second panic inside a panic hook aborts before
 * anything reaches the terminal - so no `eprintln!` (it panics when
 * stderr is gone), no locks, no buffering. Raw fd writes on unix, a
 * best-effort std write elsewhere, errors swallowed either way.
 */

/// Write the whole buffer to stderr, best effort.
///
/// Retries partial writes and `EINTR` until the buffer is flushed.
/// Gives up silently on any other error - when stderr itself is
/// unwritable there is nobody left to tell.
#[cfg(unix)]
pub fn write_stderr(bytes: &[u8]) {
    let mut rest = bytes;
    while !rest.is_empty() {
        // SAFETY: rest points into a live slice and len is its exact
        // length; write(2) on fd 2 has no other preconditions.
        let n = unsafe { libc::write(libc::STDERR_FILENO, rest.as_ptr().cast(), rest.len()) };
        if n > 0 {
            rest = &rest[n as usize..];
        } else if n < 0 && std::io::Error::last_os_error().raw_os_error() == Some(libc::EINTR) {
            continue;
        } else {
            /* closed or broken stderr - drop the rest */
            break;
        }
    }
}

/// Write the whole buffer to stderr, best effort.
#[cfg(not(unix))]
pub fn write_stderr(bytes: &[u8]) {
    use std::io::Write;

    let _ = std::io::stderr().write_all(bytes);
}
