//! # One-rep max estimation
//!
//! Estimates the heaviest load liftable for a single repetition from a
//! sub-maximal (weight, reps) observation.
//!
//! Epley:
//!
//! ```notrust
//! 1RM = w × (1 + r / 30)
//! ```
//!
//! Brzycki:
//!
//! ```notrust
//! 1RM = w × 36 / (37 - r)
//! ```
//!
//! Both collapse to the observed weight for a true single. Formulas per
//! [this overview](https://en.wikipedia.org/wiki/One-repetition_maximum).
//!
//! Neither estimator validates its input: zero reps or a negative weight
//! pass through, the caller owns input sanity.

use volume::LoggedSet;

/// Epley estimate for one (weight, reps) observation.
#[inline]
pub fn epley(weight: f64, reps: u32) -> f64 {
    if reps == 1 {
        return weight;
    }

    weight * (1.0 + f64::from(reps) / 30.0)
}

/// Brzycki estimate for one (weight, reps) observation.
///
/// The denominator `37 - reps` is non-positive from 37 reps on; that range
/// degenerates to the observed weight instead of dividing.
#[inline]
pub fn brzycki(weight: f64, reps: u32) -> f64 {
    if reps == 1 || reps >= 37 {
        return weight;
    }

    weight * (36.0 / (37.0 - f64::from(reps)))
}

/// Best estimated 1RM across a set collection.
///
/// Candidates are working sets with a present, strictly positive load; the
/// estimate is Epley's. Returns `None` when no set qualifies, so callers
/// can tell "no data" apart from a zero estimate.
pub fn best_one_rep_max(sets: impl IntoIterator<Item = LoggedSet>) -> Option<f64> {
    sets.into_iter()
        .filter_map(|set| match set.weight {
            Some(weight) if !set.is_warmup && weight > 0.0 => Some(epley(weight, set.reps)),
            _ => None,
        })
        .reduce(f64::max)
}
