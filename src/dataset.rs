use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::record::PlayerSeasonStats;
use crate::roster::RatedPlayer;

/// Season input file: either a wrapper object with a `players` array, or a
/// bare JSON array of records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonDataset {
    #[serde(default)]
    pub season: Option<u32>,
    pub players: Vec<PlayerSeasonStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatedSeasonArtifact {
    pub version: u32,
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    pub players: Vec<RatedPlayer>,
}

pub fn load_season_dataset(path: &Path) -> Result<SeasonDataset> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read season dataset {}", path.display()))?;
    let dataset = match serde_json::from_str::<SeasonDataset>(&raw) {
        Ok(dataset) => dataset,
        Err(_) => {
            let players = serde_json::from_str::<Vec<PlayerSeasonStats>>(&raw)
                .with_context(|| format!("parse season dataset {}", path.display()))?;
            SeasonDataset {
                season: None,
                players,
            }
        }
    };
    info!(
        "loaded {} season records from {}",
        dataset.players.len(),
        path.display()
    );
    Ok(dataset)
}

/// Write the rated season as a versioned JSON artifact, atomically via a
/// temp file swap.
pub fn save_rated_season(path: &Path, season: Option<u32>, players: &[RatedPlayer]) -> Result<()> {
    let artifact = RatedSeasonArtifact {
        version: 1,
        generated_at: chrono::Utc::now().to_rfc3339(),
        season,
        players: players.to_vec(),
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let tmp = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(&artifact).context("serialize rated season")?;
    fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("swap {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array_and_wrapper_both_parse() {
        let bare = r#"[{"name": "A", "minutes": 900, "goals": 4}]"#;
        let players = serde_json::from_str::<Vec<PlayerSeasonStats>>(bare).unwrap();
        assert_eq!(players[0].minutes, Some(900));

        let wrapped = r#"{"season": 2025, "players": [{"name": "A", "captain": true}]}"#;
        let dataset = serde_json::from_str::<SeasonDataset>(wrapped).unwrap();
        assert_eq!(dataset.season, Some(2025));
        assert!(dataset.players[0].captain);
        assert_eq!(dataset.players[0].minutes, None);
    }
}
