use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::record::PlayerSeasonStats;

/// Below this many minutes a season sample is too thin to rate at all, and
/// per-90 rates are too noisy to derive.
pub const MIN_MINUTES: u32 = 300;

pub const CAPTAIN_SCORE_YES: f64 = 85.0;
pub const CAPTAIN_SCORE_NO: f64 = 40.0;

/// Every metric any weight table, malus table or category table refers to.
/// Keeping this closed lets the configuration stay `&'static` data checked
/// at compile time instead of stringly-typed maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    GoalsPer90,
    AssistsPer90,
    ShotsPer90,
    ShotsOnPer90,
    KeyPassesPer90,
    TacklesPer90,
    InterceptionsPer90,
    BlocksPer90,
    SavesPer90,
    GoalsConcededPer90,
    YellowPer90,
    RedPer90,
    ShotAccuracyPct,
    PassAccuracy,
    DuelsWonPct,
    DribblesSuccessPct,
    CleanSheetRate,
    PenaltySavedRate,
    SavePct,
    Minutes,
    Appearances,
    Rating,
    MatchWinningGoals,
    Captain,
}

impl Metric {
    pub fn name(self) -> &'static str {
        match self {
            Metric::GoalsPer90 => "goals_per_90",
            Metric::AssistsPer90 => "assists_per_90",
            Metric::ShotsPer90 => "shots_per_90",
            Metric::ShotsOnPer90 => "shots_on_per_90",
            Metric::KeyPassesPer90 => "key_passes_per_90",
            Metric::TacklesPer90 => "tackles_per_90",
            Metric::InterceptionsPer90 => "interceptions_per_90",
            Metric::BlocksPer90 => "blocks_per_90",
            Metric::SavesPer90 => "saves_per_90",
            Metric::GoalsConcededPer90 => "goals_conceded_per_90",
            Metric::YellowPer90 => "yellow_per_90",
            Metric::RedPer90 => "red_per_90",
            Metric::ShotAccuracyPct => "shot_accuracy_pct",
            Metric::PassAccuracy => "pass_accuracy",
            Metric::DuelsWonPct => "duels_won_pct",
            Metric::DribblesSuccessPct => "dribbles_success_pct",
            Metric::CleanSheetRate => "clean_sheet_rate",
            Metric::PenaltySavedRate => "penalty_saved_rate",
            Metric::SavePct => "save_pct",
            Metric::Minutes => "minutes",
            Metric::Appearances => "appearances",
            Metric::Rating => "rating",
            Metric::MatchWinningGoals => "match_winning_goals",
            Metric::Captain => "captain",
        }
    }

    /// Metrics where a smaller raw value means a better player; their
    /// percentile gets flipped before shrinkage.
    pub fn lower_is_better(self) -> bool {
        matches!(self, Metric::GoalsConcededPer90)
    }

    /// Metrics whose derived value already is the score input, bypassing
    /// percentile ranking. Excluded from every distribution.
    pub fn is_direct_score(self) -> bool {
        matches!(self, Metric::Captain)
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub(crate) fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Counting stat scaled to a 90-minute rate. None when the counter is
/// missing or the minutes sample is under `min_minutes`.
fn per_90(value: Option<u32>, minutes: Option<u32>, min_minutes: u32) -> Option<f64> {
    let value = value?;
    let minutes = minutes?;
    if minutes < min_minutes {
        return None;
    }
    Some(round3(value as f64 / minutes as f64 * 90.0))
}

/// Success percentage. None when either side is missing or the denominator
/// is zero -- a player with no duels has no duel rate, not a 0% one.
fn pct(numerator: Option<u32>, denominator: Option<u32>) -> Option<f64> {
    let num = numerator?;
    let denom = denominator?;
    if denom == 0 {
        return None;
    }
    Some(round1(num as f64 / denom as f64 * 100.0))
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

fn put(out: &mut HashMap<Metric, f64>, metric: Metric, value: Option<f64>) {
    if let Some(v) = value {
        out.insert(metric, v);
    }
}

/// Compute the full derived-metric set for one player. Metrics that cannot
/// be derived are simply absent; downstream code never imputes them.
///
/// The same derivation runs population-wide in the distribution builder and
/// once more per player in the scorer, so both sides see identical values.
pub fn compute_derived_metrics(
    stats: &PlayerSeasonStats,
    min_minutes: u32,
) -> HashMap<Metric, f64> {
    let minutes = stats.minutes;
    let mut out = HashMap::new();

    put(&mut out, Metric::GoalsPer90, per_90(stats.goals, minutes, min_minutes));
    put(&mut out, Metric::AssistsPer90, per_90(stats.assists, minutes, min_minutes));
    put(&mut out, Metric::ShotsPer90, per_90(stats.shots_total, minutes, min_minutes));
    put(&mut out, Metric::ShotsOnPer90, per_90(stats.shots_on, minutes, min_minutes));
    put(&mut out, Metric::KeyPassesPer90, per_90(stats.key_passes, minutes, min_minutes));
    put(&mut out, Metric::TacklesPer90, per_90(stats.tackles_total, minutes, min_minutes));
    put(&mut out, Metric::InterceptionsPer90, per_90(stats.interceptions, minutes, min_minutes));
    put(&mut out, Metric::BlocksPer90, per_90(stats.blocks, minutes, min_minutes));
    put(&mut out, Metric::SavesPer90, per_90(stats.saves, minutes, min_minutes));
    put(&mut out, Metric::GoalsConcededPer90, per_90(stats.goals_conceded, minutes, min_minutes));
    put(&mut out, Metric::YellowPer90, per_90(stats.yellow_cards, minutes, min_minutes));
    put(&mut out, Metric::RedPer90, per_90(stats.red_cards, minutes, min_minutes));

    put(&mut out, Metric::ShotAccuracyPct, pct(stats.shots_on, stats.shots_total));
    put(&mut out, Metric::DuelsWonPct, pct(stats.duels_won, stats.duels_total));
    put(
        &mut out,
        Metric::DribblesSuccessPct,
        pct(stats.dribbles_success, stats.dribbles_attempts),
    );
    put(&mut out, Metric::PassAccuracy, positive(stats.pass_accuracy));

    put(&mut out, Metric::CleanSheetRate, pct(stats.clean_sheets, stats.starter_matches));
    put(&mut out, Metric::PenaltySavedRate, pct(stats.penalty_saved, stats.appearances));

    // Share of shots faced that were kept out. Missing counters count as
    // zero shots faced here, not as unknowns.
    let faced = stats.saves.unwrap_or(0) + stats.goals_conceded.unwrap_or(0);
    if faced > 0 {
        let save_pct = round1(stats.saves.unwrap_or(0) as f64 / faced as f64 * 100.0);
        out.insert(Metric::SavePct, save_pct);
    }

    if let Some(m) = minutes
        && m >= min_minutes
    {
        out.insert(Metric::Minutes, m as f64);
    }
    put(&mut out, Metric::Appearances, stats.appearances.map(f64::from));
    put(&mut out, Metric::Rating, positive(stats.rating));
    put(
        &mut out,
        Metric::MatchWinningGoals,
        stats.match_winning_goals.map(f64::from),
    );

    let captain_score = if stats.captain {
        CAPTAIN_SCORE_YES
    } else {
        CAPTAIN_SCORE_NO
    };
    out.insert(Metric::Captain, captain_score);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_record() -> PlayerSeasonStats {
        PlayerSeasonStats {
            name: "Test".to_string(),
            minutes: Some(900),
            goals: Some(5),
            shots_total: Some(40),
            shots_on: Some(18),
            duels_total: Some(0),
            duels_won: Some(0),
            rating: Some(7.1),
            ..Default::default()
        }
    }

    #[test]
    fn per_90_gated_by_minutes_threshold() {
        let mut rec = base_record();
        rec.minutes = Some(299);
        let derived = compute_derived_metrics(&rec, MIN_MINUTES);
        assert!(!derived.contains_key(&Metric::GoalsPer90));
        assert!(!derived.contains_key(&Metric::Minutes));

        rec.minutes = Some(300);
        let derived = compute_derived_metrics(&rec, MIN_MINUTES);
        assert_eq!(derived.get(&Metric::GoalsPer90), Some(&1.5));
        assert_eq!(derived.get(&Metric::Minutes), Some(&300.0));
    }

    #[test]
    fn zero_denominator_yields_no_percentage() {
        let derived = compute_derived_metrics(&base_record(), MIN_MINUTES);
        assert!(!derived.contains_key(&Metric::DuelsWonPct));
        assert_eq!(derived.get(&Metric::ShotAccuracyPct), Some(&45.0));
    }

    #[test]
    fn missing_counters_stay_absent() {
        let rec = PlayerSeasonStats {
            name: "Sparse".to_string(),
            minutes: Some(1000),
            ..Default::default()
        };
        let derived = compute_derived_metrics(&rec, MIN_MINUTES);
        assert!(!derived.contains_key(&Metric::GoalsPer90));
        assert!(!derived.contains_key(&Metric::Rating));
        assert!(!derived.contains_key(&Metric::SavePct));
        // Captaincy is always decidable.
        assert_eq!(derived.get(&Metric::Captain), Some(&CAPTAIN_SCORE_NO));
    }

    #[test]
    fn captaincy_maps_to_fixed_scores() {
        let mut rec = base_record();
        rec.captain = true;
        let derived = compute_derived_metrics(&rec, MIN_MINUTES);
        assert_eq!(derived.get(&Metric::Captain), Some(&CAPTAIN_SCORE_YES));
    }

    #[test]
    fn goalkeeper_share_metrics() {
        let rec = PlayerSeasonStats {
            name: "Keeper".to_string(),
            minutes: Some(1800),
            saves: Some(60),
            goals_conceded: Some(20),
            penalty_saved: Some(1),
            appearances: Some(20),
            clean_sheets: Some(8),
            starter_matches: Some(20),
            ..Default::default()
        };
        let derived = compute_derived_metrics(&rec, MIN_MINUTES);
        assert_eq!(derived.get(&Metric::SavePct), Some(&75.0));
        assert_eq!(derived.get(&Metric::CleanSheetRate), Some(&40.0));
        assert_eq!(derived.get(&Metric::PenaltySavedRate), Some(&5.0));
    }
}
