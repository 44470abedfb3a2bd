/*
 * lib.rs
 *
 * Tiny surface on purpose. The whole crate is one call at bootstrap
 * plus a handful of pure helpers the tests and embedders share.
 */

//! # crashguard
//!
//! Last-resort fatal error reporting. One panic hook, one readable
//! report, exit 1 - or a page overlay on `wasm32` in a browser.
//!
//! ## Quick Start
//!
//! ```rust
//! use crashguard::Fail;
//!
//! crashguard::install();
//!
//! // From here on, a panic on any thread produces one stderr report
//! // and ends the process with status 1. Recoverable trouble still
//! // travels as values:
//! fn half(n: u32) -> Result<u32, Fail> {
//!     if n % 2 == 0 {
//!         Ok(n / 2)
//!     } else {
//!         Err(Fail::new("odd input"))
//!     }
//! }
//! assert!(half(3).is_err());
//! ```
//!
//! ## What fires, where
//!
//! | target | synchronous failure | asynchronous failure |
//! |---|---|---|
//! | native | panic on the calling thread | panic on a thread nobody joins |
//! | browser page | panic hook | `unhandledrejection` listener |
//! | wasm worker / other hosts | nothing registered | nothing registered |
//!
//! Both native channels funnel into the same hook and the same report.
//! A browser page paints the report over the DOM once and leaves the
//! page running; there is no process to end there.

pub mod env;
pub mod fail;
pub mod hook;
pub mod overlay;
pub mod report;

#[cfg(not(target_arch = "wasm32"))]
mod io;
mod sync;

pub use fail::{Fail, is_fail};
pub use hook::{FATAL_EXIT, install, is_installed};
