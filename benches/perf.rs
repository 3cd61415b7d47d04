use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use league_ratings::attribution::score_athlete;
use league_ratings::distribution::build_role_distributions;
use league_ratings::metrics::MIN_MINUTES;
use league_ratings::role::Role;
use league_ratings::roster::{RosterOptions, rate_season};
use league_ratings::sample_season::sample_population;

fn bench_build_distributions(c: &mut Criterion) {
    let players = sample_population(600, 26);
    c.bench_function("build_role_distributions", |b| {
        b.iter(|| {
            let dists = build_role_distributions(black_box(&players), MIN_MINUTES);
            black_box(dists.for_role(Role::Attacker).metric_count());
        })
    });
}

fn bench_score_athlete(c: &mut Criterion) {
    let players = sample_population(600, 26);
    let dists = build_role_distributions(&players, MIN_MINUTES);
    let subject = players
        .iter()
        .find(|p| p.minutes.unwrap_or(0) >= MIN_MINUTES)
        .expect("population should contain a qualifying player");

    c.bench_function("score_athlete", |b| {
        b.iter(|| {
            let result = score_athlete(black_box(subject), black_box(&dists), None);
            black_box(result.overall_score);
        })
    });
}

fn bench_rate_season(c: &mut Criterion) {
    let players = sample_population(600, 26);
    let options = RosterOptions::default();
    c.bench_function("rate_season_600", |b| {
        b.iter(|| {
            let rated = rate_season(black_box(&players), &options);
            black_box(rated.len());
        })
    });
}

criterion_group!(
    perf,
    bench_build_distributions,
    bench_score_athlete,
    bench_rate_season
);
criterion_main!(perf);
