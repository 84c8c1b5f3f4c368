use std::collections::HashMap;

/// Projected wins for the next period: per team, the arithmetic mean of its
/// yearly win counts. Years in which a team recorded no wins are absent from
/// the grouped input and contribute nothing to the denominator, so the mean
/// is over years-with-at-least-one-win, not over all elapsed years.
/// Inherited averaging base, kept deliberately; see DESIGN.md.
///
/// Output is (team, projected wins), descending with team id as tie-break.
pub fn project_wins(wins_by_year: &[(i32, String, u64)]) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, (u64, u64)> = HashMap::new();
    for (_, team, wins) in wins_by_year {
        let entry = totals.entry(team.as_str()).or_insert((0, 0));
        entry.0 += *wins;
        entry.1 += 1;
    }
    let mut out = totals
        .into_iter()
        .map(|(team, (wins, years))| (team.to_string(), wins as f64 / years as f64))
        .collect::<Vec<_>>();
    out.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}
