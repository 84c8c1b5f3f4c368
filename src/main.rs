use anyhow::Result;

use gridiron_report::aggregate::compute_team_tables;
use gridiron_report::clean::clean_games;
use gridiron_report::composite::pick_favorite;
use gridiron_report::config::PipelineConfig;
use gridiron_report::derive::enrich_games;
use gridiron_report::games_fetch::fetch_games;
use gridiron_report::http_client::http_client;
use gridiron_report::projection::project_wins;
use gridiron_report::report::print_report;
use gridiron_report::source_check::source_is_reachable;

fn main() -> Result<()> {
    let config = PipelineConfig::from_env();
    let client = http_client()?;

    if !source_is_reachable(client, &config.source_url) {
        // Abort before any table is computed; no partial output.
        eprintln!("source unreachable: {}", config.source_url);
        return Ok(());
    }

    let raw = fetch_games(client, &config.source_url)?;
    let cleaned = clean_games(&raw, config.year_floor);
    let games = enrich_games(cleaned);
    println!(
        "Rows: {} fetched, {} retained (year >= {})",
        raw.len(),
        games.len(),
        config.year_floor
    );

    let tables = compute_team_tables(&games, config.top_n);
    let projection = project_wins(&tables.wins_by_year);
    let favorite = pick_favorite(&projection, &tables.avg_point_differential);
    print_report(&tables, &projection, favorite.as_ref());
    Ok(())
}
