use serde::{Deserialize, Serialize};

/// One player's raw season counters for one team, as handed over by the
/// ingestion side. Every counter is optional: providers routinely omit
/// fields, and absence must stay distinguishable from zero all the way
/// through scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeasonStats {
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub appearances: Option<u32>,
    #[serde(default)]
    pub minutes: Option<u32>,
    #[serde(default)]
    pub goals: Option<u32>,
    #[serde(default)]
    pub assists: Option<u32>,
    #[serde(default)]
    pub shots_total: Option<u32>,
    #[serde(default)]
    pub shots_on: Option<u32>,
    #[serde(default)]
    pub key_passes: Option<u32>,
    #[serde(default)]
    pub tackles_total: Option<u32>,
    #[serde(default)]
    pub interceptions: Option<u32>,
    #[serde(default)]
    pub blocks: Option<u32>,
    #[serde(default)]
    pub duels_total: Option<u32>,
    #[serde(default)]
    pub duels_won: Option<u32>,
    #[serde(default)]
    pub dribbles_attempts: Option<u32>,
    #[serde(default)]
    pub dribbles_success: Option<u32>,
    #[serde(default)]
    pub fouls_committed: Option<u32>,
    #[serde(default)]
    pub yellow_cards: Option<u32>,
    #[serde(default)]
    pub red_cards: Option<u32>,
    #[serde(default)]
    pub saves: Option<u32>,
    #[serde(default)]
    pub goals_conceded: Option<u32>,
    #[serde(default)]
    pub penalty_saved: Option<u32>,
    #[serde(default)]
    pub pass_accuracy: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub captain: bool,
    // Computed upstream from lineup/fixture data; present only when the
    // producer ran those joins.
    #[serde(default)]
    pub clean_sheets: Option<u32>,
    #[serde(default)]
    pub starter_matches: Option<u32>,
    #[serde(default)]
    pub match_winning_goals: Option<u32>,
}
