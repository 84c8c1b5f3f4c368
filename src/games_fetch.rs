use std::fs;

use anyhow::{Context, Result, anyhow};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::source_check::is_http_locator;

const REQUIRED_COLUMNS: &[&str] = &["date", "team1", "team2", "score1", "score2"];

/// One raw row of the source table. The source carries extra columns (season,
/// elo ratings, neutral-site flags and so on); serde ignores them. Scores are
/// floats upstream, with blank cells for games that were never played.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGameRow {
    #[serde(default)]
    pub date: String,
    pub team1: Option<String>,
    pub team2: Option<String>,
    pub score1: Option<f64>,
    pub score2: Option<f64>,
}

/// Fetches the raw game table and decodes it row by row, preserving source
/// order. Unreachable sources and missing required columns are fatal here;
/// the caller is expected to have run the reachability probe already.
pub fn fetch_games(client: &Client, locator: &str) -> Result<Vec<RawGameRow>> {
    let body = if is_http_locator(locator) {
        let resp = client
            .get(locator)
            .send()
            .with_context(|| format!("fetch game table from {locator}"))?;
        let status = resp.status();
        let body = resp.text().context("failed reading game table body")?;
        if !status.is_success() {
            return Err(anyhow!("http {status} fetching game table"));
        }
        body
    } else {
        fs::read_to_string(locator).with_context(|| format!("read game table {locator}"))?
    };
    parse_games_csv(&body)
}

pub fn parse_games_csv(raw: &str) -> Result<Vec<RawGameRow>> {
    let mut reader = csv::Reader::from_reader(raw.as_bytes());
    let headers = reader.headers().context("read game table header")?.clone();
    let missing = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(anyhow!(
            "game table is missing required columns: {}",
            missing.join(", ")
        ));
    }

    let mut out = Vec::new();
    for row in reader.deserialize::<RawGameRow>() {
        out.push(row.context("decode game row")?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::parse_games_csv;

    #[test]
    fn parses_rows_and_keeps_blanks_as_none() {
        let raw = "date,season,team1,team2,score1,score2\n\
                   2018-09-06,2018,PHI,ATL,18,12\n\
                   2018-09-09,2018,SEA,NE,35,\n";
        let rows = parse_games_csv(raw).expect("csv should parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].team1.as_deref(), Some("PHI"));
        assert_eq!(rows[0].score1, Some(18.0));
        assert_eq!(rows[1].score2, None);
    }

    #[test]
    fn missing_required_columns_are_fatal() {
        let raw = "date,team1,team2,result1\n2018-09-06,PHI,ATL,1\n";
        let err = parse_games_csv(raw).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("missing required columns"), "{msg}");
        assert!(msg.contains("score1"), "{msg}");
        assert!(msg.contains("score2"), "{msg}");
    }
}
