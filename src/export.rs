use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::roster::RatedPlayer;

pub struct ExportReport {
    pub players: usize,
    pub scored: usize,
    pub breakdown_rows: usize,
}

/// Write the rated season to an XLSX workbook: one Ratings sheet, plus a
/// Breakdown sheet when any player carries one.
pub fn export_ratings(path: &Path, players: &[RatedPlayer]) -> Result<ExportReport> {
    let mut ratings_rows = vec![vec![
        "Player".to_string(),
        "Role".to_string(),
        "Apps".to_string(),
        "Minutes".to_string(),
        "Goals".to_string(),
        "Assists".to_string(),
        "Goals/90".to_string(),
        "Assists/90".to_string(),
        "Shots On/90".to_string(),
        "Key Passes/90".to_string(),
        "Shot Acc %".to_string(),
        "Duels Won %".to_string(),
        "Rating".to_string(),
        "Overall".to_string(),
        "Attack".to_string(),
        "Creation".to_string(),
        "Defense".to_string(),
        "Impact".to_string(),
        "Malus".to_string(),
        "Reliability".to_string(),
    ]];

    let mut breakdown_rows = vec![vec![
        "Player".to_string(),
        "Role".to_string(),
        "Metric".to_string(),
        "Tier".to_string(),
        "Value".to_string(),
        "Percentile".to_string(),
        "Score".to_string(),
        "Weight".to_string(),
        "Malus Contribution".to_string(),
    ]];

    let mut scored = 0usize;
    for player in players {
        if player.scores.is_scored() {
            scored += 1;
        }
        ratings_rows.push(vec![
            player.name.clone(),
            player.role.label().to_string(),
            player.appearances.to_string(),
            player.minutes.to_string(),
            player.goals.to_string(),
            player.assists.to_string(),
            opt_to_string(player.goals_per_90),
            opt_to_string(player.assists_per_90),
            opt_to_string(player.shots_on_per_90),
            opt_to_string(player.key_passes_per_90),
            opt_to_string(player.shot_accuracy_pct),
            opt_to_string(player.duels_won_pct),
            opt_to_string(player.rating),
            opt_to_string(player.scores.overall_score),
            opt_to_string(player.scores.attack_score),
            opt_to_string(player.scores.creation_score),
            opt_to_string(player.scores.defense_score),
            opt_to_string(player.scores.impact_score),
            opt_to_string(player.scores.discipline_malus),
            opt_to_string(player.scores.reliability_index),
        ]);

        let Some(breakdown) = &player.scores.breakdown else {
            continue;
        };
        for (metric, detail) in breakdown {
            breakdown_rows.push(vec![
                player.name.clone(),
                player.role.label().to_string(),
                metric.name().to_string(),
                detail.tier.to_string(),
                detail.value.to_string(),
                detail.percentile.to_string(),
                opt_to_string(detail.score),
                opt_to_string(detail.weight),
                opt_to_string(detail.malus_contribution),
            ]);
        }
    }

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Ratings")?;
        write_rows(sheet, &ratings_rows)?;
    }
    if breakdown_rows.len() > 1 {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Breakdown")?;
        write_rows(sheet, &breakdown_rows)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;

    Ok(ExportReport {
        players: players.len(),
        scored,
        breakdown_rows: breakdown_rows.len().saturating_sub(1),
    })
}

fn opt_to_string<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
