//! Synthetic season populations for demos and benches. Deterministic per
//! seed so generated datasets are reproducible across runs.

use rand::Rng;
use rand::rngs::StdRng;
use rand::{SeedableRng, seq::SliceRandom};

use crate::record::PlayerSeasonStats;

const GK_LABELS: &[&str] = &["Goalkeeper"];
const DEF_LABELS: &[&str] = &["Centre-Back", "Right-Back", "Left-Back", "Defender"];
const MID_LABELS: &[&str] = &[
    "Defensive Midfield",
    "Central Midfield",
    "Attacking Midfield",
    "Midfielder",
];
const ATT_LABELS: &[&str] = &[
    "Centre-Forward",
    "Striker",
    "Right Winger",
    "Left Winger",
    "Second Striker",
];

/// Generate `count` plausible season records spread across the four roles
/// (one keeper, four defenders, three midfielders, two attackers per ten).
pub fn sample_population(count: usize, seed: u64) -> Vec<PlayerSeasonStats> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|i| sample_player(i, &mut rng)).collect()
}

fn sample_player(index: usize, rng: &mut StdRng) -> PlayerSeasonStats {
    let minutes = rng.gen_range(0..=3_420u32);
    let appearances = minutes / 90 + rng.gen_range(0..=4);
    let starts = (minutes / 90).min(appearances);

    let mut rec = PlayerSeasonStats {
        name: format!("Player {index:03}"),
        minutes: Some(minutes),
        appearances: Some(appearances),
        captain: rng.gen_bool(0.06),
        yellow_cards: Some(per_90_count(rng, minutes, 0.02, 0.45)),
        red_cards: Some(per_90_count(rng, minutes, 0.0, 0.05)),
        fouls_committed: Some(per_90_count(rng, minutes, 0.3, 2.2)),
        rating: Some((rng.gen_range(5.8..8.2f64) * 100.0).round() / 100.0),
        ..Default::default()
    };

    match index % 10 {
        0 => fill_goalkeeper(&mut rec, rng, minutes, starts),
        1..=4 => fill_defender(&mut rec, rng, minutes, starts),
        5..=7 => fill_midfielder(&mut rec, rng, minutes),
        _ => fill_attacker(&mut rec, rng, minutes),
    }
    rec
}

fn fill_goalkeeper(rec: &mut PlayerSeasonStats, rng: &mut StdRng, minutes: u32, starts: u32) {
    rec.position = Some(pick(rng, GK_LABELS));
    rec.saves = Some(per_90_count(rng, minutes, 1.8, 4.5));
    rec.goals_conceded = Some(per_90_count(rng, minutes, 0.6, 2.0));
    rec.penalty_saved = Some(rng.gen_range(0..=2));
    rec.pass_accuracy = Some(rng.gen_range(52.0..82.0f64).round());
    rec.starter_matches = Some(starts);
    rec.clean_sheets = Some((starts as f64 * rng.gen_range(0.1..0.45)).round() as u32);
}

fn fill_defender(rec: &mut PlayerSeasonStats, rng: &mut StdRng, minutes: u32, starts: u32) {
    rec.position = Some(pick(rng, DEF_LABELS));
    rec.tackles_total = Some(per_90_count(rng, minutes, 1.0, 3.5));
    rec.interceptions = Some(per_90_count(rng, minutes, 0.8, 2.8));
    rec.blocks = Some(per_90_count(rng, minutes, 0.3, 1.6));
    rec.goals = Some(per_90_count(rng, minutes, 0.0, 0.15));
    rec.assists = Some(per_90_count(rng, minutes, 0.0, 0.12));
    rec.pass_accuracy = Some(rng.gen_range(68.0..93.0f64).round());
    rec.starter_matches = Some(starts);
    rec.clean_sheets = Some((starts as f64 * rng.gen_range(0.1..0.4)).round() as u32);
    fill_duels(rec, rng, minutes);
}

fn fill_midfielder(rec: &mut PlayerSeasonStats, rng: &mut StdRng, minutes: u32) {
    rec.position = Some(pick(rng, MID_LABELS));
    rec.key_passes = Some(per_90_count(rng, minutes, 0.4, 2.8));
    rec.assists = Some(per_90_count(rng, minutes, 0.0, 0.5));
    rec.goals = Some(per_90_count(rng, minutes, 0.0, 0.4));
    rec.shots_total = Some(per_90_count(rng, minutes, 0.5, 2.5));
    rec.shots_on = rec.shots_total.map(|s| fraction(rng, s, 0.25, 0.55));
    rec.tackles_total = Some(per_90_count(rng, minutes, 0.5, 2.5));
    rec.pass_accuracy = Some(rng.gen_range(74.0..93.0f64).round());
    fill_duels(rec, rng, minutes);
    fill_dribbles(rec, rng, minutes, 0.2, 1.8);
}

fn fill_attacker(rec: &mut PlayerSeasonStats, rng: &mut StdRng, minutes: u32) {
    rec.position = Some(pick(rng, ATT_LABELS));
    rec.goals = Some(per_90_count(rng, minutes, 0.05, 0.95));
    rec.shots_total = Some(per_90_count(rng, minutes, 1.2, 4.2));
    rec.shots_on = rec.shots_total.map(|s| fraction(rng, s, 0.3, 0.6));
    rec.assists = Some(per_90_count(rng, minutes, 0.0, 0.5));
    rec.key_passes = Some(per_90_count(rng, minutes, 0.3, 2.2));
    rec.pass_accuracy = Some(rng.gen_range(62.0..86.0f64).round());
    rec.match_winning_goals = Some(rng.gen_range(0..=5));
    fill_duels(rec, rng, minutes);
    fill_dribbles(rec, rng, minutes, 0.5, 3.5);
}

fn fill_duels(rec: &mut PlayerSeasonStats, rng: &mut StdRng, minutes: u32) {
    let total = per_90_count(rng, minutes, 4.0, 14.0);
    rec.duels_total = Some(total);
    rec.duels_won = Some(fraction(rng, total, 0.35, 0.65));
}

fn fill_dribbles(rec: &mut PlayerSeasonStats, rng: &mut StdRng, minutes: u32, lo: f64, hi: f64) {
    let attempts = per_90_count(rng, minutes, lo, hi);
    rec.dribbles_attempts = Some(attempts);
    rec.dribbles_success = Some(fraction(rng, attempts, 0.3, 0.7));
}

fn per_90_count(rng: &mut StdRng, minutes: u32, lo: f64, hi: f64) -> u32 {
    let rate = if hi > lo { rng.gen_range(lo..hi) } else { lo };
    (minutes as f64 / 90.0 * rate).round() as u32
}

fn fraction(rng: &mut StdRng, total: u32, lo: f64, hi: f64) -> u32 {
    (total as f64 * rng.gen_range(lo..hi)).round() as u32
}

fn pick(rng: &mut StdRng, labels: &[&str]) -> String {
    labels
        .choose(rng)
        .copied()
        .unwrap_or("Midfielder")
        .to_string()
}
