use std::collections::HashMap;

use log::info;

use crate::metrics::{self, Metric, round1};
use crate::record::PlayerSeasonStats;
use crate::role::{ALL_ROLES, Role, normalize_position};

/// A metric needs at least this many qualifying observations before a role
/// distribution is worth ranking against.
pub const MIN_DISTRIBUTION_SAMPLES: usize = 3;

const WINSOR_LOWER_PCT: f64 = 1.0;
const WINSOR_UPPER_PCT: f64 = 99.0;
const WINSOR_MIN_SAMPLES: usize = 10;

/// Metrics collected into per-role distributions for percentile lookup.
/// Direct-score metrics (captaincy) are deliberately absent.
pub const DISTRIBUTABLE_METRICS: &[Metric] = &[
    Metric::GoalsPer90,
    Metric::AssistsPer90,
    Metric::ShotsOnPer90,
    Metric::KeyPassesPer90,
    Metric::TacklesPer90,
    Metric::InterceptionsPer90,
    Metric::BlocksPer90,
    Metric::SavesPer90,
    Metric::GoalsConcededPer90,
    Metric::YellowPer90,
    Metric::RedPer90,
    Metric::ShotAccuracyPct,
    Metric::PassAccuracy,
    Metric::DuelsWonPct,
    Metric::DribblesSuccessPct,
    Metric::CleanSheetRate,
    Metric::PenaltySavedRate,
    Metric::SavePct,
    Metric::Minutes,
    Metric::Appearances,
    Metric::Rating,
    Metric::MatchWinningGoals,
];

/// Sorted, winsorized observed values per metric for one role. Read-only
/// once built; safe to share across parallel scoring calls.
#[derive(Debug, Clone, Default)]
pub struct MetricDistribution {
    values: HashMap<Metric, Vec<f64>>,
}

impl MetricDistribution {
    pub fn get(&self, metric: Metric) -> Option<&[f64]> {
        self.values.get(&metric).map(Vec::as_slice)
    }

    pub fn metric_count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The full baseline for one scoring batch: one distribution per role, all
/// four always present (possibly empty).
#[derive(Debug, Clone, Default)]
pub struct RoleDistributions {
    by_role: [MetricDistribution; 4],
}

impl RoleDistributions {
    pub fn for_role(&self, role: Role) -> &MetricDistribution {
        &self.by_role[role.index()]
    }
}

/// Build empirical per-role baselines from a season population.
///
/// Records with missing minutes or under `min_minutes` contribute to no
/// distribution. Per role and metric, all derivable values are collected,
/// clipped at the empirical 1st/99th percentile and stored ascending for
/// O(log n) percentile lookups. Metrics with fewer than three observations
/// are omitted entirely.
pub fn build_role_distributions(
    records: &[PlayerSeasonStats],
    min_minutes: u32,
) -> RoleDistributions {
    let mut grouped: [Vec<HashMap<Metric, f64>>; 4] = Default::default();
    for rec in records {
        let Some(minutes) = rec.minutes else {
            continue;
        };
        if minutes < min_minutes {
            continue;
        }
        let role = normalize_position(rec.position.as_deref());
        grouped[role.index()].push(metrics::compute_derived_metrics(rec, min_minutes));
    }

    let mut out = RoleDistributions::default();
    for role in ALL_ROLES {
        let players = &grouped[role.index()];
        let dist = &mut out.by_role[role.index()];
        for &metric in DISTRIBUTABLE_METRICS {
            let values: Vec<f64> = players
                .iter()
                .filter_map(|derived| derived.get(&metric).copied())
                .collect();
            if values.len() < MIN_DISTRIBUTION_SAMPLES {
                continue;
            }
            let mut clipped = winsorize(values);
            clipped.sort_by(|a, b| a.total_cmp(b));
            dist.values.insert(metric, clipped);
        }
        info!(
            "{} distribution: {} qualifying players, {} metrics",
            role.label(),
            players.len(),
            dist.metric_count(),
        );
    }
    out
}

/// Clip each value to the sample's own empirical [1st, 99th] percentile.
/// Samples under ten points pass through untouched.
pub fn winsorize(values: Vec<f64>) -> Vec<f64> {
    let n = values.len();
    if n < WINSOR_MIN_SAMPLES {
        return values;
    }
    let mut sorted = values.clone();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let lo = sorted[((n as f64 * WINSOR_LOWER_PCT / 100.0) as usize).min(n - 1)];
    let hi = sorted[((n as f64 * WINSOR_UPPER_PCT / 100.0) as usize).min(n - 1)];
    values.into_iter().map(|v| v.clamp(lo, hi)).collect()
}

/// Rank-based empirical percentile with midrank tie handling, in [0, 100].
/// An empty baseline pins everything to the neutral midpoint.
pub fn empirical_percentile(value: f64, sorted_values: &[f64]) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return 50.0;
    }
    let below = sorted_values.partition_point(|x| *x < value);
    let above = sorted_values.partition_point(|x| *x <= value);
    let equal = above - below;
    round1((below as f64 + 0.5 * equal as f64) / n as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_midrank_example() {
        // Two strictly below, one equal: (2 + 0.5) / 5 * 100.
        let dist = [0.1, 0.2, 0.3, 0.4, 0.5];
        assert_eq!(empirical_percentile(0.3, &dist), 50.0);
    }

    #[test]
    fn percentile_is_monotonic_and_bounded() {
        let dist = [1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 8.0, 13.0];
        let mut last = f64::NEG_INFINITY;
        let mut probe = -2.0;
        while probe <= 15.0 {
            let p = empirical_percentile(probe, &dist);
            assert!(p >= last, "percentile must not decrease at {probe}");
            assert!((0.0..=100.0).contains(&p));
            last = p;
            probe += 0.25;
        }
    }

    #[test]
    fn percentile_of_median_is_fifty() {
        let dist = [3.0, 7.0, 9.0, 12.0, 20.0];
        assert_eq!(empirical_percentile(9.0, &dist), 50.0);
    }

    #[test]
    fn percentile_of_empty_baseline_is_neutral() {
        assert_eq!(empirical_percentile(4.2, &[]), 50.0);
    }

    #[test]
    fn winsorize_leaves_small_samples_alone() {
        let values = vec![100.0, 1.0, 2.0, 3.0];
        assert_eq!(winsorize(values.clone()), values);
    }

    #[test]
    fn winsorize_preserves_length_and_bounds() {
        let mut values: Vec<f64> = (1..=100).map(f64::from).collect();
        values[0] = -1000.0;
        values[99] = 1000.0;
        let clipped = winsorize(values.clone());
        assert_eq!(clipped.len(), values.len());

        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let lo = sorted[1];
        let hi = sorted[99];
        assert!(clipped.iter().all(|v| *v >= lo && *v <= hi));
        // Interior values pass through unchanged.
        assert_eq!(clipped[50], values[50]);
    }

    #[test]
    fn empty_population_yields_four_empty_distributions() {
        let dists = build_role_distributions(&[], metrics::MIN_MINUTES);
        for role in ALL_ROLES {
            assert!(dists.for_role(role).is_empty());
        }
    }
}
