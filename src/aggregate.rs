use std::collections::HashMap;

use crate::derive::EnrichedGame;

// Synthetic-index factors. The source table has no play-level data, so these
// are fixed arithmetic transforms of score standing in for real yardage and
// sack figures. They must never be mixed with genuine play-by-play stats.
const YARDS_PER_POINT: i64 = 10;
const SACK_POINT_DIVISOR: i64 = 10;
const YARDS_ALLOWED_PER_POINT: i64 = 15;

/// All per-team tables derived from one batch of enriched games. Every table
/// is an ordered tuple series with a deterministic ordering (value order,
/// team id as tie-break), so identical inputs reproduce identical tables.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamTables {
    /// (team, wins), wins descending.
    pub win_counts: Vec<(String, u64)>,
    /// (team, mean differential over that team's winning games only),
    /// descending. Losing-side differentials are not folded in.
    pub avg_point_differential: Vec<(String, f64)>,
    /// (year, team, wins), year then team ascending.
    pub wins_by_year: Vec<(i32, String, u64)>,
    /// (team, mean synthetic yards), descending.
    pub avg_synthetic_yards: Vec<(String, f64)>,
    /// (team, mean synthetic sacks), descending.
    pub avg_synthetic_sacks: Vec<(String, f64)>,
    /// (team, mean synthetic yards allowed), ascending; lower is better.
    pub avg_synthetic_yards_allowed: Vec<(String, f64)>,
    /// (team, wins with a positive differential) for the top-N teams by win
    /// count, in win-count order. Informational; no other table depends on it.
    pub top_positive_differential: Vec<(String, u64)>,
}

/// Builds all seven tables. The scoreboard tables come from a single pass
/// over the records; the synthetic indices are independent reductions and run
/// in parallel. Parallelism is an optimization only, the sequential result is
/// identical.
pub fn compute_team_tables(games: &[EnrichedGame], top_n: usize) -> TeamTables {
    let (scoreboard, (yards, (sacks, yards_allowed))) = rayon::join(
        || scoreboard_tables(games, top_n),
        || {
            rayon::join(
                || per_game_average(games, |own, _opp| own * YARDS_PER_POINT, SortOrder::Descending),
                || {
                    rayon::join(
                        || {
                            per_game_average(
                                games,
                                |_own, opp| opp / SACK_POINT_DIVISOR,
                                SortOrder::Descending,
                            )
                        },
                        || {
                            per_game_average(
                                games,
                                |_own, opp| opp * YARDS_ALLOWED_PER_POINT,
                                SortOrder::Ascending,
                            )
                        },
                    )
                },
            )
        },
    );

    TeamTables {
        win_counts: scoreboard.win_counts,
        avg_point_differential: scoreboard.avg_point_differential,
        wins_by_year: scoreboard.wins_by_year,
        avg_synthetic_yards: yards,
        avg_synthetic_sacks: sacks,
        avg_synthetic_yards_allowed: yards_allowed,
        top_positive_differential: scoreboard.top_positive_differential,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortOrder {
    Ascending,
    Descending,
}

struct ScoreboardTables {
    win_counts: Vec<(String, u64)>,
    avg_point_differential: Vec<(String, f64)>,
    wins_by_year: Vec<(i32, String, u64)>,
    top_positive_differential: Vec<(String, u64)>,
}

/// One pass over the enriched records accumulating every winner-keyed table.
fn scoreboard_tables(games: &[EnrichedGame], top_n: usize) -> ScoreboardTables {
    let mut wins: HashMap<&str, u64> = HashMap::new();
    let mut diff_sums: HashMap<&str, (i64, u64)> = HashMap::new();
    let mut yearly: HashMap<(i32, &str), u64> = HashMap::new();
    let mut positive_diffs: HashMap<&str, u64> = HashMap::new();

    for game in games {
        let winner = game.winner.as_str();
        *wins.entry(winner).or_insert(0) += 1;
        let entry = diff_sums.entry(winner).or_insert((0, 0));
        entry.0 += game.point_differential;
        entry.1 += 1;
        *yearly.entry((game.year, winner)).or_insert(0) += 1;
        if game.point_differential > 0 {
            *positive_diffs.entry(winner).or_insert(0) += 1;
        }
    }

    let mut win_counts = wins
        .iter()
        .map(|(team, count)| (team.to_string(), *count))
        .collect::<Vec<_>>();
    win_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut avg_point_differential = diff_sums
        .into_iter()
        .map(|(team, (sum, n))| (team.to_string(), sum as f64 / n as f64))
        .collect::<Vec<_>>();
    avg_point_differential.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut wins_by_year = yearly
        .into_iter()
        .map(|((year, team), count)| (year, team.to_string(), count))
        .collect::<Vec<_>>();
    wins_by_year.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    // Top-N teams by win count, reported with their positive-differential win
    // counts. A team whose every win was a tie still appears, with zero.
    let top_positive_differential = win_counts
        .iter()
        .take(top_n)
        .map(|(team, _)| {
            let positives = positive_diffs.get(team.as_str()).copied().unwrap_or(0);
            (team.clone(), positives)
        })
        .collect::<Vec<_>>();

    ScoreboardTables {
        win_counts,
        avg_point_differential,
        wins_by_year,
        top_positive_differential,
    }
}

/// Per-team average of a per-game derived value, unioned across both team
/// roles: every game contributes one figure for `team1` and one for `team2`.
/// `stat` receives (own score, opponent score).
fn per_game_average(
    games: &[EnrichedGame],
    stat: impl Fn(i64, i64) -> i64,
    order: SortOrder,
) -> Vec<(String, f64)> {
    let mut sums: HashMap<&str, (i64, u64)> = HashMap::new();
    for game in games {
        let g = &game.game;
        for (team, own, opp) in [
            (g.team1.as_str(), g.score1, g.score2),
            (g.team2.as_str(), g.score2, g.score1),
        ] {
            let entry = sums.entry(team).or_insert((0, 0));
            entry.0 += stat(own, opp);
            entry.1 += 1;
        }
    }
    let mut out = sums
        .into_iter()
        .map(|(team, (sum, n))| (team.to_string(), sum as f64 / n as f64))
        .collect::<Vec<_>>();
    match order {
        SortOrder::Descending => out.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))),
        SortOrder::Ascending => out.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0))),
    }
    out
}
