//! # Training volume
//!
//! Volume is the product of load and repetitions summed across working
//! sets, a common proxy for total training stimulus:
//!
//! ```notrust
//! volume = Σ weight × reps
//! ```
//!
//! Warm-up sets are valid inputs but never contribute to any metric. A set
//! without a load (unloaded bodyweight movement) carries a zero weight
//! term.
//!
//! Inputs are trusted as-is: negative or nonsensical weight/rep values are
//! the caller's responsibility and pass through unvalidated.

mod muscle_group;

pub use self::muscle_group::*;

/// One performed set within a workout session.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggedSet {
    pub exercise_id: String,
    /// Load in kilograms. `None` for unloaded bodyweight movements,
    /// which is not the same as a zero load on the bar.
    pub weight: Option<f64>,
    pub reps: u32,
    pub is_warmup: bool,
}

/// Aggregate of a set collection. The empty aggregate is the default value.
#[derive(Debug, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeSummary {
    pub volume: f64,
    /// Number of working sets.
    pub sets: usize,
    pub total_reps: u32,
    /// Reps-weighted average load: `Σ(weight × reps) / Σreps`, not a plain
    /// mean of per-set weights.
    pub average_weight: f64,
}

/// Volume contribution of a single set.
///
/// Warm-up sets contribute `0` regardless of their weight and reps.
#[inline]
pub fn set_volume(set: &LoggedSet) -> f64 {
    if set.is_warmup {
        return 0.0;
    }

    set.weight.unwrap_or(0.0) * f64::from(set.reps)
}

/// Aggregate volume, set count, total reps and average load over a set
/// collection. Warm-up sets are filtered out before anything is counted.
pub fn total_volume(sets: impl IntoIterator<Item = LoggedSet>) -> VolumeSummary {
    let mut summary = VolumeSummary::default();

    for set in sets {
        if set.is_warmup {
            continue;
        }

        summary.volume += set_volume(&set);
        summary.total_reps += set.reps;
        summary.sets += 1;
    }

    // The reps-weighted numerator Σ(weight × reps) is the volume itself
    if summary.total_reps > 0 {
        summary.average_weight = summary.volume / f64::from(summary.total_reps);
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn working(weight: f64, reps: u32) -> LoggedSet {
        LoggedSet {
            exercise_id: "bench-press".to_owned(),
            weight: Some(weight),
            reps,
            is_warmup: false,
        }
    }

    fn warmup(weight: f64, reps: u32) -> LoggedSet {
        LoggedSet {
            is_warmup: true,
            ..working(weight, reps)
        }
    }

    fn bodyweight(reps: u32) -> LoggedSet {
        LoggedSet {
            weight: None,
            ..working(0.0, reps)
        }
    }

    #[test]
    fn test_set_volume_working() {
        assert_eq!(set_volume(&working(100.0, 10)), 1000.0);
    }

    #[test]
    fn test_set_volume_warmup_is_zero() {
        // Weight and reps are irrelevant once the set is a warm-up
        assert_eq!(set_volume(&warmup(140.0, 8)), 0.0);
    }

    #[test]
    fn test_set_volume_bodyweight_is_zero() {
        assert_eq!(set_volume(&bodyweight(15)), 0.0);
    }

    #[test]
    fn test_total_volume_empty() {
        let summary = total_volume([]);

        assert_eq!(summary, VolumeSummary::default());
        assert_eq!(summary.volume, 0.0);
        assert_eq!(summary.sets, 0);
        assert_eq!(summary.total_reps, 0);
        assert_eq!(summary.average_weight, 0.0);
    }

    #[test]
    fn test_total_volume_straight_sets() {
        let sets = [working(100.0, 10), working(100.0, 9), working(100.0, 8)];

        let summary = total_volume(sets);

        assert_eq!(summary.volume, 2700.0);
        assert_eq!(summary.sets, 3);
        assert_eq!(summary.total_reps, 27);
        assert_eq!(summary.average_weight, 100.0);
    }

    #[test]
    fn test_total_volume_excludes_warmups() {
        let sets = [warmup(60.0, 10), working(100.0, 10)];

        let summary = total_volume(sets);

        assert_eq!(summary.volume, 1000.0);
        assert_eq!(summary.sets, 1);
        assert_eq!(summary.total_reps, 10);
    }

    #[test]
    fn test_average_weight_is_reps_weighted() {
        // 100kg × 10 and 50kg × 10: plain mean of weights would be 75
        // either way, but 100kg × 30 and 50kg × 10 must lean toward 100
        let summary = total_volume([working(100.0, 30), working(50.0, 10)]);

        assert_eq!(summary.volume, 3500.0);
        assert_eq!(summary.total_reps, 40);
        assert_eq!(summary.average_weight, 87.5);
    }

    #[test]
    fn test_total_volume_bodyweight_counts_sets_not_volume() {
        let summary = total_volume([bodyweight(12), working(80.0, 5)]);

        assert_eq!(summary.volume, 400.0);
        assert_eq!(summary.sets, 2);
        assert_eq!(summary.total_reps, 17);
    }

    #[test]
    fn test_total_volume_all_warmups_is_empty_aggregate() {
        let summary = total_volume([warmup(40.0, 10), warmup(60.0, 5)]);

        assert_eq!(summary, VolumeSummary::default());
    }

    #[test]
    fn test_total_volume_is_deterministic() {
        let sets = vec![working(100.0, 10), warmup(60.0, 10)];

        let first = total_volume(sets.clone());
        let second = total_volume(sets);

        assert_eq!(first, second);
    }
}
