use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};

use league_ratings::dataset;
use league_ratings::export;
use league_ratings::roster::{RatedPlayer, RosterOptions, rate_season};
use league_ratings::sample_season;
use league_ratings::score_config;

const DEFAULT_TOP: usize = 20;
const DEFAULT_SAMPLE_SEED: u64 = 26;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    if let Err(errors) = score_config::validate_configs() {
        for error in &errors {
            eprintln!("[CONFIG] {error}");
        }
        return Err(anyhow!("invalid scoring configuration"));
    }

    let args: Vec<String> = env::args().skip(1).collect();
    if parse_flag(&args, "--help") {
        print_usage();
        return Ok(());
    }

    let sample = parse_value(&args, "--sample").and_then(|v| v.parse::<usize>().ok());
    let seed = parse_value(&args, "--seed")
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_SAMPLE_SEED);
    let top = parse_value(&args, "--top")
        .and_then(|v| v.parse::<usize>().ok())
        .or_else(|| {
            env::var("RATINGS_TOP")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
        })
        .unwrap_or(DEFAULT_TOP);
    let include_breakdown = parse_flag(&args, "--breakdown");
    let out_json = parse_value(&args, "--json").map(PathBuf::from);
    let out_xlsx = parse_value(&args, "--xlsx").map(PathBuf::from);
    let dataset_path = positional_arg(&args).map(PathBuf::from);

    let (season, records) = match (sample, dataset_path) {
        (Some(count), _) => {
            eprintln!("[INFO] generating synthetic population: {count} players, seed {seed}");
            (None, sample_season::sample_population(count, seed))
        }
        (None, Some(path)) => {
            let loaded = dataset::load_season_dataset(&path)?;
            (loaded.season, loaded.players)
        }
        (None, None) => {
            print_usage();
            return Err(anyhow!("no dataset path and no --sample count given"));
        }
    };

    let options = RosterOptions { include_breakdown };
    let rated = rate_season(&records, &options);
    print_table(&rated, top);

    if let Some(path) = out_json {
        dataset::save_rated_season(&path, season, &rated)?;
        eprintln!("[INFO] wrote rated season to {}", path.display());
    }
    if let Some(path) = out_xlsx {
        let report = export::export_ratings(&path, &rated)?;
        eprintln!(
            "[INFO] wrote workbook to {}: {} players, {} scored, {} breakdown rows",
            path.display(),
            report.players,
            report.scored,
            report.breakdown_rows
        );
    }

    Ok(())
}

fn print_table(rated: &[RatedPlayer], top: usize) {
    let scored = rated.iter().filter(|p| p.scores.is_scored()).count();
    println!(
        "{} players rated ({} scored, {} with insufficient evidence)",
        rated.len(),
        scored,
        rated.len() - scored
    );
    println!(
        "{:<4} {:<22} {:<11} {:>5} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
        "#", "Player", "Role", "Min", "Ovr", "Att", "Cre", "Def", "Imp", "Malus", "Rel"
    );
    for (idx, player) in rated.iter().take(top).enumerate() {
        println!(
            "{:<4} {:<22} {:<11} {:>5} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
            idx + 1,
            truncate(&player.name, 22),
            player.role.label(),
            player.minutes,
            fmt_opt(player.scores.overall_score),
            fmt_opt(player.scores.attack_score),
            fmt_opt(player.scores.creation_score),
            fmt_opt(player.scores.defense_score),
            fmt_opt(player.scores.impact_score),
            fmt_opt(player.scores.discipline_malus),
            fmt_opt(player.scores.reliability_index),
        );
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.1}")).unwrap_or_else(|| "-".to_string())
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let cut: String = name.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}\u{2026}")
    }
}

fn parse_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

fn parse_value(args: &[String], name: &str) -> Option<String> {
    let idx = args.iter().position(|a| a == name)?;
    args.get(idx + 1).cloned()
}

fn positional_arg(args: &[String]) -> Option<String> {
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg.starts_with("--") {
            // Flags with values consume the next token.
            skip_next = matches!(
                arg.as_str(),
                "--sample" | "--seed" | "--top" | "--json" | "--xlsx"
            );
            continue;
        }
        return Some(arg.clone());
    }
    None
}

fn print_usage() {
    eprintln!(
        "usage: rate_season [season.json] [--sample N] [--seed S] [--top N] \
         [--breakdown] [--json out.json] [--xlsx out.xlsx]"
    );
    eprintln!("  season.json   JSON array of season records, or {{season, players}}");
    eprintln!("  --sample N    generate a synthetic population instead of loading a file");
    eprintln!("  --breakdown   keep per-metric breakdowns in the JSON/XLSX output");
    eprintln!("  RATINGS_TOP   env fallback for --top (default {DEFAULT_TOP})");
}
