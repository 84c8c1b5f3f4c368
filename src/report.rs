use crate::aggregate::TeamTables;
use crate::composite::FavoriteRow;

/// Prints every aggregate table as its ordered tuples, then a completion
/// line. This is the whole contract with the rendering side: tuples in table
/// order, no further aggregation downstream.
pub fn print_report(
    tables: &TeamTables,
    projection: &[(String, f64)],
    favorite: Option<&FavoriteRow>,
) {
    println!("Win counts:");
    for (team, wins) in &tables.win_counts {
        println!("  {team} {wins}");
    }

    println!("Average point differential (winning games only):");
    for (team, diff) in &tables.avg_point_differential {
        println!("  {team} {diff:.2}");
    }

    println!("Wins by year:");
    for (year, team, wins) in &tables.wins_by_year {
        println!("  {year} {team} {wins}");
    }

    println!("Synthetic offense index (avg yards, score x10):");
    for (team, yards) in &tables.avg_synthetic_yards {
        println!("  {team} {yards:.1}");
    }

    println!("Synthetic defense index (avg sacks, opponent score / 10):");
    for (team, sacks) in &tables.avg_synthetic_sacks {
        println!("  {team} {sacks:.2}");
    }

    println!("Synthetic defense index (avg yards allowed, opponent score x15):");
    for (team, yards) in &tables.avg_synthetic_yards_allowed {
        println!("  {team} {yards:.1}");
    }

    println!(
        "Top {} teams by wins, positive-differential wins:",
        tables.top_positive_differential.len()
    );
    for (team, positives) in &tables.top_positive_differential {
        println!("  {team} {positives}");
    }

    println!("Projected wins for the next period:");
    for (team, projected) in projection {
        println!("  {team} {projected:.2}");
    }

    match favorite {
        Some(row) => println!(
            "Favorite: {} (composite {:.2} = {:.2} projected + {:.2} avg diff)",
            row.team, row.composite_score, row.projected_wins, row.avg_point_differential
        ),
        None => println!("Favorite: none (no team present in both ranking tables)"),
    }

    println!("All aggregate tables produced.");
}
