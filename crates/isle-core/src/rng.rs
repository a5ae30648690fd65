//! Thread-safe random source shared by every concurrent worker.
//!
//! # Sharing strategy
//!
//! Every passenger, ship and the ambient generator run on their own thread
//! and all draw from one [`RandomSource`].  The production implementation,
//! [`SharedRng`], serialises draws through a `parking_lot::Mutex` around a
//! `SmallRng`; each draw is a short, non-suspending critical section.
//!
//! Randomness is unseeded by default ([`SharedRng::from_entropy`]).  Tests
//! inject [`SharedRng::seeded`] so the *sequence* of draws is fixed, though
//! thread interleaving still decides which worker receives which draw.

use parking_lot::Mutex;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform reals, integers and weighted choice, safe for concurrent use.
///
/// The trait is object safe so the engine can hold an
/// `Arc<dyn RandomSource>` and tests can substitute their own source.
pub trait RandomSource: Send + Sync {
    /// A real drawn uniformly from `[low, high)`.  Returns `low` when the
    /// range is empty.
    fn uniform(&self, low: f64, high: f64) -> f64;

    /// An integer drawn uniformly from `low..=high`.  Returns `low` when
    /// `high < low`.
    fn int_inclusive(&self, low: u32, high: u32) -> u32;

    /// `true` with probability `p` (clamped to [0, 1]).
    fn chance(&self, p: f64) -> bool;

    /// A uniformly chosen index into a collection of length `len`, or
    /// `None` for an empty collection.
    fn index(&self, len: usize) -> Option<usize>;

    /// An index drawn with probability proportional to `weights[i]`.
    ///
    /// Returns `None` if `weights` is empty or sums to zero.
    fn weighted_index(&self, weights: &[u32]) -> Option<usize>;
}

/// Shuffle `items` in place (Fisher-Yates) using `rng`.
pub fn shuffle<T>(rng: &dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        if let Some(j) = rng.index(i + 1) {
            items.swap(i, j);
        }
    }
}

// ── SharedRng ─────────────────────────────────────────────────────────────────

/// Production [`RandomSource`]: a `SmallRng` behind an exclusive lock.
pub struct SharedRng(Mutex<SmallRng>);

impl SharedRng {
    /// Seed from operating-system entropy.
    pub fn from_entropy() -> Self {
        SharedRng(Mutex::new(SmallRng::from_entropy()))
    }

    /// Seed deterministically.
    pub fn seeded(seed: u64) -> Self {
        SharedRng(Mutex::new(SmallRng::seed_from_u64(seed)))
    }
}

impl RandomSource for SharedRng {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        if low.is_nan() || high.is_nan() || high <= low {
            return low;
        }
        self.0.lock().gen_range(low..high)
    }

    fn int_inclusive(&self, low: u32, high: u32) -> u32 {
        if high < low {
            return low;
        }
        self.0.lock().gen_range(low..=high)
    }

    fn chance(&self, p: f64) -> bool {
        // gen_bool panics on NaN; treat it as "never".
        if p.is_nan() {
            return false;
        }
        self.0.lock().gen_bool(p.clamp(0.0, 1.0))
    }

    fn index(&self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.lock().gen_range(0..len))
    }

    fn weighted_index(&self, weights: &[u32]) -> Option<usize> {
        let dist = WeightedIndex::new(weights).ok()?;
        Some(dist.sample(&mut *self.0.lock()))
    }
}
