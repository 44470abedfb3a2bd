/*
 * fail.rs
 *
 * Failure as a plain value. For code that wants to hand back "this did
 * not work" without panicking and without minting an error enum: a
 * message, an optional bag of string context, nothing else.
 *
 * Deliberately not an implementation of std::error::Error. The report
 * formatter classifies a Fail as "anything else" and renders it
 * structurally, and a type that implements Error inevitably ends up
 * inside somebody's `?` chain.
 */

use std::any::Any;
use std::collections::BTreeMap;

/// An explicit failure outcome: a message plus optional string context.
///
/// Immutable once built; both constructors take everything up front.
/// Recognizable inside an opaque panic payload via [`is_fail`]. The
/// ordered map keeps the structural rendering deterministic.
///
/// # Examples
///
/// ```rust
/// use crashguard::Fail;
///
/// fn parse_port(raw: &str) -> Result<u16, Fail> {
///     raw.parse().map_err(|_| Fail::new("port is not a number"))
/// }
///
/// assert_eq!(parse_port("oops").unwrap_err().message(), "port is not a number");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fail {
    message: String,
    data: BTreeMap<String, String>,
}

impl Fail {
    /// New failure value with no context data.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: BTreeMap::new(),
        }
    }

    /// New failure value carrying context entries.
    #[must_use]
    pub fn with(message: impl Into<String>, data: BTreeMap<String, String>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    /// What failed, in the words of whoever constructed the value.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Context attached at construction. Empty unless [`Fail::with`]
    /// built the value.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &BTreeMap<String, String> {
        &self.data
    }
}

/// True iff an opaque value is a [`Fail`].
///
/// The runtime half of classification - typed code already knows what
/// it holds. Always returns, never panics; errors and everything else
/// come back false.
#[inline]
#[must_use]
pub fn is_fail(value: &dyn Any) -> bool {
    value.is::<Fail>()
}
