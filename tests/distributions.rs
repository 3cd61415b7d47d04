use league_ratings::distribution::{build_role_distributions, empirical_percentile};
use league_ratings::metrics::{MIN_MINUTES, Metric};
use league_ratings::record::PlayerSeasonStats;
use league_ratings::role::{ALL_ROLES, Role};

fn attacker(name: &str, minutes: u32, goals: Option<u32>) -> PlayerSeasonStats {
    PlayerSeasonStats {
        name: name.to_string(),
        position: Some("Striker".to_string()),
        minutes: Some(minutes),
        goals,
        ..Default::default()
    }
}

#[test]
fn below_threshold_records_contribute_nothing() {
    let records: Vec<PlayerSeasonStats> = (0..5)
        .map(|i| attacker(&format!("Sub {i}"), 120, Some(3)))
        .collect();
    let dists = build_role_distributions(&records, MIN_MINUTES);
    for role in ALL_ROLES {
        assert!(dists.for_role(role).is_empty());
    }
}

#[test]
fn metric_with_fewer_than_three_values_is_omitted() {
    let records = vec![
        attacker("A", 900, Some(5)),
        attacker("B", 1000, Some(3)),
        attacker("C", 1100, None),
    ];
    let dists = build_role_distributions(&records, MIN_MINUTES);
    let dist = dists.for_role(Role::Attacker);
    // Only two players have goals, so no goals baseline exists...
    assert!(dist.get(Metric::GoalsPer90).is_none());
    // ...but all three have minutes, which qualifies.
    assert_eq!(dist.get(Metric::Minutes), Some(&[900.0, 1000.0, 1100.0][..]));
}

#[test]
fn roles_never_share_a_baseline() {
    let mut records = vec![
        attacker("A", 900, Some(5)),
        attacker("B", 900, Some(3)),
        attacker("C", 900, Some(1)),
    ];
    records.push(PlayerSeasonStats {
        name: "D".to_string(),
        position: Some("Centre-Back".to_string()),
        minutes: Some(900),
        goals: Some(2),
        ..Default::default()
    });
    let dists = build_role_distributions(&records, MIN_MINUTES);
    let attackers = dists.for_role(Role::Attacker);
    assert_eq!(attackers.get(Metric::GoalsPer90).map(<[f64]>::len), Some(3));
    // A single defender is below the three-sample minimum.
    assert!(dists.for_role(Role::Defender).get(Metric::GoalsPer90).is_none());
}

#[test]
fn small_sample_baseline_matches_raw_per_90_values() {
    // Five attackers, 900 minutes each, 1..=5 goals: rates 0.1 through 0.5,
    // no winsorizing under ten samples.
    let records: Vec<PlayerSeasonStats> = (1..=5)
        .map(|i| attacker(&format!("A{i}"), 900, Some(i)))
        .collect();
    let dists = build_role_distributions(&records, MIN_MINUTES);
    let goals = dists
        .for_role(Role::Attacker)
        .get(Metric::GoalsPer90)
        .unwrap();
    assert_eq!(goals, &[0.1, 0.2, 0.3, 0.4, 0.5]);

    // Two strictly below and one equal out of five: exactly the median.
    assert_eq!(empirical_percentile(0.3, goals), 50.0);
    assert_eq!(empirical_percentile(0.0, goals), 0.0);
    assert_eq!(empirical_percentile(9.9, goals), 100.0);
}

#[test]
fn large_sample_baseline_is_clipped_and_sorted() {
    // 120 attackers with goal rates 0.0..=11.9; the 1st/99th percentile clip
    // pulls both tails in.
    let records: Vec<PlayerSeasonStats> = (0..120)
        .map(|i| attacker(&format!("A{i}"), 900, Some(i)))
        .collect();
    let dists = build_role_distributions(&records, MIN_MINUTES);
    let goals = dists
        .for_role(Role::Attacker)
        .get(Metric::GoalsPer90)
        .unwrap();

    assert_eq!(goals.len(), 120);
    assert!(goals.windows(2).all(|w| w[0] <= w[1]), "must be ascending");
    assert_eq!(goals.first(), Some(&0.1));
    assert_eq!(goals.last(), Some(&11.8));
}
