//! Tiered, role-normalized attribution scoring.
//!
//! Per player: empirical percentile per metric against the role baseline,
//! shrinkage toward 50 for thin minute samples, weighted tier aggregation
//! with implicit weight redistribution for missing metrics, and a bounded
//! discipline malus on top. Pure and stateless; every guard short-circuits
//! to an all-None result instead of erroring.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::distribution::{RoleDistributions, empirical_percentile};
use crate::metrics::{self, MIN_MINUTES, Metric, round1, round2, round3};
use crate::record::PlayerSeasonStats;
use crate::role::{Role, normalize_position};
use crate::score_config::{CATEGORY_METRICS, Category, TIERS, config_for};

/// Minutes at which the evidence is considered complete and shrinkage
/// stops having any effect (~13 full matches).
pub const RELIABILITY_MINUTES: u32 = 1200;

const MALUS_FLOOR: f64 = -10.0;

/// How one metric contributed to a player's score. Malus entries carry a
/// contribution and max penalty instead of a score and weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDetail {
    pub value: f64,
    pub percentile: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    pub tier: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub malus_contribution: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_penalty: Option<f64>,
}

/// Composite rating for one player. All fields are None together when the
/// evidence was insufficient (too few minutes, empty role baseline, or no
/// scorable tier); that is an expected outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreResult {
    pub overall_score: Option<f64>,
    pub attack_score: Option<f64>,
    pub creation_score: Option<f64>,
    pub defense_score: Option<f64>,
    pub impact_score: Option<f64>,
    pub discipline_malus: Option<f64>,
    pub reliability_index: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<BTreeMap<Metric, MetricDetail>>,
}

impl ScoreResult {
    pub fn is_scored(&self) -> bool {
        self.overall_score.is_some()
    }
}

/// Evidence weight in [0, 1], saturating at `RELIABILITY_MINUTES`.
pub fn reliability(minutes: u32) -> f64 {
    (minutes as f64 / RELIABILITY_MINUTES as f64).min(1.0)
}

/// Pull a percentile toward the neutral midpoint in proportion to how much
/// evidence the minutes sample carries. At zero minutes everything is 50;
/// at full reliability the percentile passes through unchanged.
pub fn shrink(percentile: f64, minutes: u32) -> f64 {
    round1(50.0 + reliability(minutes) * (percentile - 50.0))
}

/// Score one player against the prebuilt role baselines.
///
/// The role is taken from `role_override` when given, otherwise normalized
/// from the record's position label. Returns the all-None result when the
/// minutes sample is missing or under the threshold, or when the resolved
/// role's distribution is empty.
pub fn score_athlete(
    record: &PlayerSeasonStats,
    distributions: &RoleDistributions,
    role_override: Option<Role>,
) -> ScoreResult {
    let Some(minutes) = record.minutes else {
        return ScoreResult::default();
    };
    if minutes < MIN_MINUTES {
        return ScoreResult::default();
    }

    let role = role_override.unwrap_or_else(|| normalize_position(record.position.as_deref()));
    let dist = distributions.for_role(role);
    if dist.is_empty() {
        return ScoreResult::default();
    }

    let config = config_for(role);
    let rel = reliability(minutes);
    let derived = metrics::compute_derived_metrics(record, MIN_MINUTES);

    // Per-metric percentile and shrunk score across all three tiers.
    let mut metric_scores: HashMap<Metric, f64> = HashMap::new();
    let mut breakdown: BTreeMap<Metric, MetricDetail> = BTreeMap::new();

    for (tier, weights) in TIERS.iter().zip(&config.tiers) {
        for &(metric, weight) in weights.metrics {
            let Some(value) = derived.get(&metric).copied() else {
                continue;
            };
            let percentile = if metric.is_direct_score() {
                value
            } else {
                let Some(sorted) = dist.get(metric) else {
                    continue;
                };
                let p = empirical_percentile(value, sorted);
                if metric.lower_is_better() {
                    round1(100.0 - p)
                } else {
                    p
                }
            };
            let score = shrink(percentile, minutes);

            metric_scores.insert(metric, score);
            breakdown.insert(
                metric,
                MetricDetail {
                    value: round3(value),
                    percentile: round1(percentile),
                    score: Some(score),
                    weight: Some(weight),
                    tier: tier.label(),
                    malus_contribution: None,
                    max_penalty: None,
                },
            );
        }
    }

    // Weighted mean inside each tier over available metrics only; a missing
    // metric's points flow to the rest of its tier, never to zero.
    let mut tier_scores: Vec<(f64, u32)> = Vec::new();
    for weights in &config.tiers {
        let mut sum = 0.0;
        let mut points = 0u32;
        for &(metric, weight) in weights.metrics {
            if let Some(score) = metric_scores.get(&metric) {
                sum += score * weight as f64;
                points += weight;
            }
        }
        if points > 0 {
            tier_scores.push((sum / points as f64, weights.weight));
        }
    }
    if tier_scores.is_empty() {
        return ScoreResult::default();
    }

    // Same redistribution one level up: tiers with no data drop out of the
    // group-weighted mean.
    let group_total: u32 = tier_scores.iter().map(|(_, w)| *w).sum();
    let base_score = tier_scores
        .iter()
        .map(|(score, weight)| score * *weight as f64)
        .sum::<f64>()
        / group_total as f64;

    // Discipline malus, separate from the tiers. Scaled by reliability so
    // short samples are not over-punished, and floored at -10 overall.
    let mut malus = 0.0;
    for &(metric, max_penalty) in config.malus {
        let Some(value) = derived.get(&metric).copied() else {
            continue;
        };
        let Some(sorted) = dist.get(metric) else {
            continue;
        };
        let percentile = empirical_percentile(value, sorted);
        let contribution = max_penalty * (percentile / 100.0) * rel;
        malus += contribution;
        breakdown.insert(
            metric,
            MetricDetail {
                value: round3(value),
                percentile,
                score: None,
                weight: None,
                tier: "malus",
                malus_contribution: Some(round2(contribution)),
                max_penalty: Some(max_penalty),
            },
        );
    }
    let discipline_malus = round1(malus.max(MALUS_FLOOR));
    let overall_score = round1((base_score + discipline_malus).clamp(0.0, 100.0));

    let attack_score = category_score(Category::Attack, &metric_scores);
    let creation_score = category_score(Category::Creation, &metric_scores);
    let defense_score = category_score(Category::Defense, &metric_scores);
    let impact_score = category_score(Category::Impact, &metric_scores);

    ScoreResult {
        overall_score: Some(overall_score),
        attack_score,
        creation_score,
        defense_score,
        impact_score,
        discipline_malus: Some(discipline_malus),
        reliability_index: Some(round1(rel * 100.0)),
        breakdown: Some(breakdown),
    }
}

/// Plain mean of whichever scored metrics fall into the category. None when
/// the player has no data in it at all.
fn category_score(category: Category, metric_scores: &HashMap<Metric, f64>) -> Option<f64> {
    let members = CATEGORY_METRICS
        .iter()
        .find(|(cat, _)| *cat == category)
        .map(|(_, metrics)| *metrics)?;
    let scores: Vec<f64> = members
        .iter()
        .filter_map(|m| metric_scores.get(m).copied())
        .collect();
    if scores.is_empty() {
        return None;
    }
    Some(round1(scores.iter().sum::<f64>() / scores.len() as f64))
}
