use std::collections::HashMap;

/// One joined row of the favorite ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteRow {
    pub team: String,
    pub projected_wins: f64,
    pub avg_point_differential: f64,
    /// `projected_wins + avg_point_differential`.
    pub composite_score: f64,
}

/// Inner join of the win-projection and average-differential tables on team
/// id, scored and sorted by composite score descending (team id breaks
/// ties). A team present in only one table is dropped by the join and can
/// never be selected; teams with no recorded wins are structurally
/// ineligible. That exclusion is intended, not a gap to paper over.
pub fn rank_favorites(
    projection: &[(String, f64)],
    avg_diff: &[(String, f64)],
) -> Vec<FavoriteRow> {
    let diff_by_team: HashMap<&str, f64> = avg_diff
        .iter()
        .map(|(team, diff)| (team.as_str(), *diff))
        .collect();
    let mut rows = projection
        .iter()
        .filter_map(|(team, projected)| {
            let diff = diff_by_team.get(team.as_str()).copied()?;
            Some(FavoriteRow {
                team: team.clone(),
                projected_wins: *projected,
                avg_point_differential: diff,
                composite_score: *projected + diff,
            })
        })
        .collect::<Vec<_>>();
    rows.sort_by(|a, b| {
        b.composite_score
            .total_cmp(&a.composite_score)
            .then_with(|| a.team.cmp(&b.team))
    });
    rows
}

/// The single highest-composite row, if the join produced any.
pub fn pick_favorite(
    projection: &[(String, f64)],
    avg_diff: &[(String, f64)],
) -> Option<FavoriteRow> {
    rank_favorites(projection, avg_diff).into_iter().next()
}
