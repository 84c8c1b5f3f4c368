use chrono::NaiveDate;

use gridiron_report::aggregate::compute_team_tables;
use gridiron_report::clean::GameRecord;
use gridiron_report::derive::enrich_games;
use gridiron_report::projection::project_wins;

fn game(year: i32, team1: &str, team2: &str, score1: i64, score2: i64) -> GameRecord {
    GameRecord {
        date: NaiveDate::from_ymd_opt(year, 10, 1).expect("valid date"),
        team1: team1.to_string(),
        team2: team2.to_string(),
        score1,
        score2,
    }
}

/// The three-game scenario: one clean A win, one tie resolved to the second
/// operand, one B win.
fn scenario() -> Vec<GameRecord> {
    vec![
        game(2018, "A", "B", 20, 10),
        game(2018, "B", "A", 14, 14),
        game(2019, "A", "B", 7, 21),
    ]
}

#[test]
fn scenario_winners_and_differentials() {
    let games = enrich_games(scenario());
    let winners = games.iter().map(|g| g.winner.as_str()).collect::<Vec<_>>();
    assert_eq!(winners, vec!["A", "B", "B"]);
    let diffs = games
        .iter()
        .map(|g| g.point_differential)
        .collect::<Vec<_>>();
    assert_eq!(diffs, vec![10, 0, -14]);
}

#[test]
fn scenario_win_counts_and_average_differential() {
    let games = enrich_games(scenario());
    let tables = compute_team_tables(&games, 5);

    assert_eq!(
        tables.win_counts,
        vec![("B".to_string(), 2), ("A".to_string(), 1)]
    );
    // Averages fold in winning games only: A's 10, B's 0 and -14.
    assert_eq!(
        tables.avg_point_differential,
        vec![("A".to_string(), 10.0), ("B".to_string(), -7.0)]
    );
}

#[test]
fn every_game_contributes_exactly_one_win() {
    let games = enrich_games(scenario());
    let tables = compute_team_tables(&games, 5);
    let total: u64 = tables.win_counts.iter().map(|(_, wins)| wins).sum();
    assert_eq!(total, games.len() as u64);
}

#[test]
fn wins_by_year_groups_on_year_and_winner() {
    let games = enrich_games(scenario());
    let tables = compute_team_tables(&games, 5);
    assert_eq!(
        tables.wins_by_year,
        vec![
            (2018, "A".to_string(), 1),
            (2018, "B".to_string(), 1),
            (2019, "B".to_string(), 1),
        ]
    );
}

#[test]
fn synthetic_indices_union_both_team_roles() {
    let games = enrich_games(vec![
        game(2019, "A", "B", 20, 10),
        game(2019, "B", "A", 30, 0),
    ]);
    let tables = compute_team_tables(&games, 5);

    // A scored 20 and 0: avg yards (200 + 0) / 2; B scored 10 and 30.
    assert_eq!(
        tables.avg_synthetic_yards,
        vec![("B".to_string(), 200.0), ("A".to_string(), 100.0)]
    );
    // Sacks use floor division of the opponent score: A faced 10 and 30
    // (1 + 3), B faced 20 and 0 (2 + 0).
    assert_eq!(
        tables.avg_synthetic_sacks,
        vec![("A".to_string(), 2.0), ("B".to_string(), 1.0)]
    );
    // Yards allowed is ascending: lower is better.
    assert_eq!(
        tables.avg_synthetic_yards_allowed,
        vec![("B".to_string(), 150.0), ("A".to_string(), 300.0)]
    );
}

#[test]
fn sack_division_floors() {
    let games = enrich_games(vec![game(2019, "A", "B", 27, 19)]);
    let tables = compute_team_tables(&games, 5);
    // A's opponent scored 19 -> 1 sack, not 1.9; B's opponent scored 27 -> 2.
    assert_eq!(
        tables.avg_synthetic_sacks,
        vec![("B".to_string(), 2.0), ("A".to_string(), 1.0)]
    );
}

#[test]
fn top_n_counts_positive_differential_wins_only() {
    let games = enrich_games(vec![
        game(2018, "A", "B", 20, 10),
        game(2018, "A", "C", 14, 7),
        game(2018, "C", "B", 3, 3),
        game(2019, "C", "B", 0, 9),
    ]);
    let tables = compute_team_tables(&games, 2);

    // A 2 wins, B 2 wins (one tie, one as team2 with negative differential).
    assert_eq!(tables.top_positive_differential.len(), 2);
    assert_eq!(tables.top_positive_differential[0], ("A".to_string(), 2));
    // B's wins were a tie (0) and a road win recorded at -9: no positives.
    assert_eq!(tables.top_positive_differential[1], ("B".to_string(), 0));
}

#[test]
fn projection_averages_yearly_wins() {
    let games = enrich_games(vec![
        game(2018, "A", "B", 20, 10),
        game(2018, "A", "C", 14, 7),
        game(2019, "A", "B", 21, 14),
        game(2019, "B", "C", 10, 3),
    ]);
    let tables = compute_team_tables(&games, 5);
    let projection = project_wins(&tables.wins_by_year);
    // A: (2 + 1) / 2 years; B: 1 / 1 year. C never won and is absent.
    assert_eq!(
        projection,
        vec![("A".to_string(), 1.5), ("B".to_string(), 1.0)]
    );
}
