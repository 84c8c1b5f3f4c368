use chrono::Datelike;

use crate::clean::GameRecord;

/// A cleaned game plus its derived fields. Built once per retained row and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedGame {
    pub game: GameRecord,
    pub winner: String,
    /// `score1 - score2`, signed; negative or zero even though every game has
    /// a winner.
    pub point_differential: i64,
    pub year: i32,
}

/// Winner policy: `team1` on a strictly higher score, otherwise `team2`.
/// A drawn score therefore goes to `team2`. Inherited behavior, kept
/// deliberately; see DESIGN.md before changing it.
pub fn winner_of(record: &GameRecord) -> &str {
    if record.score1 > record.score2 {
        &record.team1
    } else {
        &record.team2
    }
}

/// Total for cleaned rows: every record reaching this point already has both
/// teams, both scores and a parsed date.
pub fn enrich_games(records: Vec<GameRecord>) -> Vec<EnrichedGame> {
    records.into_iter().map(enrich_game).collect()
}

fn enrich_game(record: GameRecord) -> EnrichedGame {
    let winner = winner_of(&record).to_string();
    let point_differential = record.score1 - record.score2;
    let year = record.date.year();
    EnrichedGame {
        game: record,
        winner,
        point_differential,
        year,
    }
}
