/*
 * sync.rs
 *
 * One synchronization primitive, used three times.
 *
 * Every irreversible step in this crate follows the same discipline:
 * any number of callers may arrive, exactly one proceeds. install()
 * claims the process slot the same way the native hook claims stderr
 * and the browser overlay claims the page. OneShot is that discipline
 * with a name, so the decision is made (and tested) in one place.
 */

use std::sync::atomic::{AtomicBool, Ordering};

/// A flag that grants exactly one claim over its lifetime.
///
/// `claim` is a compare-and-swap, so the winner is decided even when
/// callers race in from different threads. There is no reset.
pub(crate) struct OneShot(AtomicBool);

impl OneShot {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// True for exactly one caller, ever.
    pub(crate) fn claim(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// True once any caller has claimed.
    #[inline]
    pub(crate) fn is_claimed(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_first_claim_wins() {
        let slot = OneShot::new();
        assert!(!slot.is_claimed());
        assert!(slot.claim());
        assert!(slot.is_claimed());
    }

    #[test]
    fn test_later_claims_lose() {
        let slot = OneShot::new();
        assert!(slot.claim());
        for _ in 0..8 {
            assert!(!slot.claim());
            assert!(slot.is_claimed());
        }
    }

    #[test]
    fn test_one_winner_under_contention() {
        let slot = Arc::new(OneShot::new());
        let racers: Vec<_> = (0..8)
            .map(|_| {
                let slot = Arc::clone(&slot);
                std::thread::spawn(move || slot.claim())
            })
            .collect();

        let winners = racers
            .into_iter()
            .map(|racer| racer.join().expect("claim does not panic"))
            .filter(|&won| won)
            .count();
        assert_eq!(winners, 1);
        assert!(slot.is_claimed());
    }
}
