//! Batch scoring for a whole roster or season population: build the role
//! baselines once, score every player against them in parallel, and return
//! rows ordered by overall score.

use rayon::prelude::*;
use serde::Serialize;

use crate::attribution::{ScoreResult, score_athlete};
use crate::distribution::{RoleDistributions, build_role_distributions};
use crate::metrics::{self, MIN_MINUTES, Metric};
use crate::record::PlayerSeasonStats;
use crate::role::{Role, normalize_position};

#[derive(Debug, Clone, Copy, Default)]
pub struct RosterOptions {
    /// Breakdowns are verbose; callers opt in per batch.
    pub include_breakdown: bool,
}

/// One output row: identity, the raw counters a table wants to show, the
/// display-friendly derived rates, and the composite scores.
#[derive(Debug, Clone, Serialize)]
pub struct RatedPlayer {
    pub name: String,
    pub role: Role,
    pub appearances: u32,
    pub minutes: u32,
    pub goals: u32,
    pub assists: u32,
    pub goals_per_90: Option<f64>,
    pub assists_per_90: Option<f64>,
    pub shots_on_per_90: Option<f64>,
    pub key_passes_per_90: Option<f64>,
    pub shot_accuracy_pct: Option<f64>,
    pub duels_won_pct: Option<f64>,
    pub rating: Option<f64>,
    #[serde(flatten)]
    pub scores: ScoreResult,
}

/// Rate a season population against baselines built from that same
/// population.
pub fn rate_season(records: &[PlayerSeasonStats], options: &RosterOptions) -> Vec<RatedPlayer> {
    let distributions = build_role_distributions(records, MIN_MINUTES);
    rate_with_distributions(records, &distributions, options)
}

/// Rate records against baselines built elsewhere, e.g. one team's roster
/// against the whole league. The distributions are read-only, so the
/// per-player scoring fans out across threads.
pub fn rate_with_distributions(
    records: &[PlayerSeasonStats],
    distributions: &RoleDistributions,
    options: &RosterOptions,
) -> Vec<RatedPlayer> {
    let mut rows: Vec<RatedPlayer> = records
        .par_iter()
        .map(|record| rate_one(record, distributions, options))
        .collect();

    // Highest overall first, unscored players at the bottom; ties broken by
    // name so the output is stable.
    rows.sort_by(|a, b| {
        match (a.scores.overall_score, b.scores.overall_score) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
        .then_with(|| a.name.cmp(&b.name))
    });
    rows
}

fn rate_one(
    record: &PlayerSeasonStats,
    distributions: &RoleDistributions,
    options: &RosterOptions,
) -> RatedPlayer {
    let derived = metrics::compute_derived_metrics(record, MIN_MINUTES);
    let mut scores = score_athlete(record, distributions, None);
    if !options.include_breakdown {
        scores.breakdown = None;
    }

    let get = |metric: Metric| derived.get(&metric).copied();
    RatedPlayer {
        name: record.name.clone(),
        role: normalize_position(record.position.as_deref()),
        appearances: record.appearances.unwrap_or(0),
        minutes: record.minutes.unwrap_or(0),
        goals: record.goals.unwrap_or(0),
        assists: record.assists.unwrap_or(0),
        goals_per_90: get(Metric::GoalsPer90),
        assists_per_90: get(Metric::AssistsPer90),
        shots_on_per_90: get(Metric::ShotsOnPer90),
        key_passes_per_90: get(Metric::KeyPassesPer90),
        shot_accuracy_pct: get(Metric::ShotAccuracyPct),
        duels_won_pct: get(Metric::DuelsWonPct),
        rating: get(Metric::Rating),
        scores,
    }
}
