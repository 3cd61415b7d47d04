//! Hand-tuned per-role weight tables for the tiered attribution scorer.
//!
//! Tier A carries on-pitch performance, Tier B reliability and volume,
//! Tier C match impact. Group weights sum to 100 per role and each tier's
//! metric points sum to its group weight, so a fully-populated player is
//! scored on exactly 100 conceptual points before the discipline malus.

use std::collections::HashSet;

use crate::metrics::Metric;
use crate::role::{ALL_ROLES, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    A,
    B,
    C,
}

pub const TIERS: [Tier; 3] = [Tier::A, Tier::B, Tier::C];

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::A => "tier_a",
            Tier::B => "tier_b",
            Tier::C => "tier_c",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TierWeights {
    /// Group weight of this tier in the base score, out of 100.
    pub weight: u32,
    /// Point weight per metric; absent metrics redistribute their points
    /// across the rest of the tier via weighted-mean semantics.
    pub metrics: &'static [(Metric, u32)],
}

#[derive(Debug, Clone, Copy)]
pub struct RoleConfig {
    pub tiers: [TierWeights; 3],
    /// Maximum (negative) penalty per disciplinary metric.
    pub malus: &'static [(Metric, f64)],
}

const DISCIPLINE_MALUS: &[(Metric, f64)] = &[
    (Metric::YellowPer90, -4.0),
    (Metric::RedPer90, -6.0),
];

pub const GOALKEEPER_CONFIG: RoleConfig = RoleConfig {
    tiers: [
        TierWeights {
            weight: 70,
            metrics: &[
                (Metric::SavesPer90, 25),
                (Metric::GoalsConcededPer90, 25),
                (Metric::CleanSheetRate, 15),
                (Metric::PenaltySavedRate, 5),
            ],
        },
        TierWeights {
            weight: 20,
            metrics: &[
                (Metric::PassAccuracy, 8),
                (Metric::Appearances, 5),
                (Metric::Minutes, 7),
            ],
        },
        TierWeights {
            weight: 10,
            metrics: &[(Metric::SavePct, 6), (Metric::Captain, 4)],
        },
    ],
    malus: DISCIPLINE_MALUS,
};

pub const DEFENDER_CONFIG: RoleConfig = RoleConfig {
    tiers: [
        TierWeights {
            weight: 65,
            metrics: &[
                (Metric::TacklesPer90, 15),
                (Metric::InterceptionsPer90, 12),
                (Metric::BlocksPer90, 8),
                (Metric::DuelsWonPct, 15),
                (Metric::CleanSheetRate, 15),
            ],
        },
        TierWeights {
            weight: 20,
            metrics: &[
                (Metric::PassAccuracy, 8),
                (Metric::Appearances, 5),
                (Metric::Minutes, 7),
            ],
        },
        TierWeights {
            weight: 15,
            metrics: &[
                (Metric::GoalsPer90, 8),
                (Metric::Rating, 4),
                (Metric::Captain, 3),
            ],
        },
    ],
    malus: DISCIPLINE_MALUS,
};

pub const MIDFIELDER_CONFIG: RoleConfig = RoleConfig {
    tiers: [
        TierWeights {
            weight: 60,
            metrics: &[
                (Metric::KeyPassesPer90, 14),
                (Metric::AssistsPer90, 12),
                (Metric::PassAccuracy, 12),
                (Metric::TacklesPer90, 10),
                (Metric::DuelsWonPct, 12),
            ],
        },
        TierWeights {
            weight: 25,
            metrics: &[
                (Metric::Minutes, 9),
                (Metric::Appearances, 8),
                (Metric::Rating, 8),
            ],
        },
        TierWeights {
            weight: 15,
            metrics: &[
                (Metric::GoalsPer90, 8),
                (Metric::ShotsOnPer90, 4),
                (Metric::Captain, 3),
            ],
        },
    ],
    malus: DISCIPLINE_MALUS,
};

pub const ATTACKER_CONFIG: RoleConfig = RoleConfig {
    tiers: [
        TierWeights {
            weight: 70,
            metrics: &[
                (Metric::GoalsPer90, 25),
                (Metric::ShotsOnPer90, 12),
                (Metric::ShotAccuracyPct, 10),
                (Metric::AssistsPer90, 13),
                (Metric::DribblesSuccessPct, 10),
            ],
        },
        TierWeights {
            weight: 20,
            metrics: &[
                (Metric::KeyPassesPer90, 8),
                (Metric::PassAccuracy, 5),
                (Metric::Minutes, 7),
            ],
        },
        TierWeights {
            weight: 10,
            metrics: &[(Metric::MatchWinningGoals, 6), (Metric::Captain, 4)],
        },
    ],
    malus: DISCIPLINE_MALUS,
};

pub fn config_for(role: Role) -> &'static RoleConfig {
    match role {
        Role::Goalkeeper => &GOALKEEPER_CONFIG,
        Role::Defender => &DEFENDER_CONFIG,
        Role::Midfielder => &MIDFIELDER_CONFIG,
        Role::Attacker => &ATTACKER_CONFIG,
    }
}

/// Coarser grouping than the tiers, used for the per-category summary
/// scores in the output. A metric may appear in one category at most.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Attack,
    Creation,
    Defense,
    Impact,
}

pub const CATEGORY_METRICS: [(Category, &[Metric]); 4] = [
    (
        Category::Attack,
        &[
            Metric::GoalsPer90,
            Metric::ShotsOnPer90,
            Metric::ShotAccuracyPct,
            Metric::DribblesSuccessPct,
        ],
    ),
    (
        Category::Creation,
        &[
            Metric::AssistsPer90,
            Metric::KeyPassesPer90,
            Metric::PassAccuracy,
        ],
    ),
    (
        Category::Defense,
        &[
            Metric::TacklesPer90,
            Metric::InterceptionsPer90,
            Metric::DuelsWonPct,
            Metric::BlocksPer90,
            Metric::SavesPer90,
            Metric::GoalsConcededPer90,
            Metric::CleanSheetRate,
            Metric::SavePct,
            Metric::PenaltySavedRate,
        ],
    ),
    (
        Category::Impact,
        &[
            Metric::Minutes,
            Metric::Appearances,
            Metric::Rating,
            Metric::MatchWinningGoals,
            Metric::Captain,
        ],
    ),
];

/// Validate every role's weight tables. Run once at startup; a failure is
/// a deployment defect, never a data condition. All problems are reported
/// together rather than one at a time.
pub fn validate_configs() -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    for role in ALL_ROLES {
        validate_role_config(role.label(), config_for(role), &mut errors);
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn validate_role_config(label: &str, config: &RoleConfig, errors: &mut Vec<String>) {
    let group_total: u32 = config.tiers.iter().map(|t| t.weight).sum();
    if group_total != 100 {
        errors.push(format!(
            "{label}: tier group weights sum to {group_total}, expected 100"
        ));
    }

    let mut seen: HashSet<Metric> = HashSet::new();
    for (tier, weights) in TIERS.iter().zip(&config.tiers) {
        if weights.metrics.is_empty() {
            errors.push(format!("{label}/{}: no metrics configured", tier.label()));
            continue;
        }
        let points: u32 = weights.metrics.iter().map(|(_, w)| w).sum();
        if points != weights.weight {
            errors.push(format!(
                "{label}/{}: metric points sum to {points}, expected the group weight {}",
                tier.label(),
                weights.weight
            ));
        }
        for (metric, weight) in weights.metrics {
            if *weight == 0 {
                errors.push(format!(
                    "{label}/{}: {} has zero weight",
                    tier.label(),
                    metric.name()
                ));
            }
            if !seen.insert(*metric) {
                errors.push(format!(
                    "{label}: {} appears in more than one tier",
                    metric.name()
                ));
            }
        }
    }

    for (metric, penalty) in config.malus {
        if *penalty >= 0.0 {
            errors.push(format!(
                "{label}/malus: {} penalty {penalty} must be negative",
                metric.name()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::DISTRIBUTABLE_METRICS;

    #[test]
    fn shipped_configs_are_valid() {
        assert_eq!(validate_configs(), Ok(()));
    }

    #[test]
    fn every_ranked_metric_has_a_distribution_source() {
        // Every tier metric except direct-score ones must be distributable,
        // otherwise the scorer could never look it up.
        for role in ALL_ROLES {
            for tier in &config_for(role).tiers {
                for (metric, _) in tier.metrics {
                    if metric.is_direct_score() {
                        continue;
                    }
                    assert!(
                        DISTRIBUTABLE_METRICS.contains(metric),
                        "{} is ranked but not distributable",
                        metric.name()
                    );
                }
            }
            for (metric, _) in config_for(role).malus {
                assert!(DISTRIBUTABLE_METRICS.contains(metric));
            }
        }
    }

    #[test]
    fn validation_reports_all_defects_at_once() {
        let broken = RoleConfig {
            tiers: [
                TierWeights {
                    weight: 70,
                    metrics: &[(Metric::GoalsPer90, 60)],
                },
                TierWeights {
                    weight: 20,
                    metrics: &[],
                },
                TierWeights {
                    weight: 5,
                    metrics: &[(Metric::GoalsPer90, 5), (Metric::Captain, 0)],
                },
            ],
            malus: &[(Metric::YellowPer90, 2.0)],
        };
        let mut errors = Vec::new();
        validate_role_config("Broken", &broken, &mut errors);
        assert!(errors.iter().any(|e| e.contains("sum to 95")));
        assert!(errors.iter().any(|e| e.contains("no metrics configured")));
        assert!(errors.iter().any(|e| e.contains("more than one tier")));
        assert!(errors.iter().any(|e| e.contains("zero weight")));
        assert!(errors.iter().any(|e| e.contains("must be negative")));
    }
}
