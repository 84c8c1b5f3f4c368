use chrono::{Datelike, NaiveDate};

use crate::games_fetch::RawGameRow;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A game row that survived cleaning: both sides named, both scores present,
/// date parsed. Scores are whole points by the time they get here.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub date: NaiveDate,
    pub team1: String,
    pub team2: String,
    pub score1: i64,
    pub score2: i64,
}

/// Stable filter over the raw rows: drops rows missing any of `team1`,
/// `team2`, `score1`, `score2` (blank cells count as missing), rows whose
/// date fails to parse, and rows earlier than the year floor (inclusive
/// minimum). Retained rows keep their source order; nothing is resorted.
pub fn clean_games(rows: &[RawGameRow], year_floor: i32) -> Vec<GameRecord> {
    rows.iter()
        .filter_map(|row| clean_row(row, year_floor))
        .collect()
}

fn clean_row(row: &RawGameRow, year_floor: i32) -> Option<GameRecord> {
    let team1 = non_empty(row.team1.as_deref())?;
    let team2 = non_empty(row.team2.as_deref())?;
    let score1 = row.score1?;
    let score2 = row.score2?;
    let date = NaiveDate::parse_from_str(row.date.trim(), DATE_FORMAT).ok()?;
    if date.year() < year_floor {
        return None;
    }
    Some(GameRecord {
        date,
        team1: team1.to_string(),
        team2: team2.to_string(),
        score1: score1 as i64,
        score2: score2 as i64,
    })
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    let s = raw?.trim();
    if s.is_empty() { None } else { Some(s) }
}
