// WHY: Selection runs as two separate stable sorts so tie-breaking stays auditable
// Pass one ranks by score, pass two restores reading order of the kept subset

use tracing::info;

use crate::scorer::ScoredStatement;

/// Number of statements kept for `rate`: `floor(total * rate)`, clamped to `[0, total]`
///
/// `rate` is expected in `[0, 1]`; negative or NaN rates select nothing.
pub fn select_count(total: usize, rate: f64) -> usize {
    // `as` saturates: negative and NaN become 0
    let count = (total as f64 * rate).floor() as usize;
    count.min(total)
}

/// Statements by score descending; equal scores keep ascending index order
pub fn rank_by_score(statements: &[ScoredStatement]) -> Vec<&ScoredStatement> {
    let mut ranked: Vec<&ScoredStatement> = statements.iter().collect();
    ranked.sort_by_key(|s| s.index());
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Put a selected subset back into document order
pub fn restore_reading_order(mut selected: Vec<&ScoredStatement>) -> Vec<&ScoredStatement> {
    selected.sort_by_key(|s| s.index());
    selected
}

/// Pick the top `floor(N * rate)` statements and return them in reading order
pub fn select(statements: &[ScoredStatement], rate: f64) -> Vec<&ScoredStatement> {
    let count = select_count(statements.len(), rate);

    let mut ranked = rank_by_score(statements);
    ranked.truncate(count);
    let selected = restore_reading_order(ranked);

    info!("Selected {} of {} statements at rate {}", selected.len(), statements.len(), rate);
    selected
}

/// Join statement texts with single spaces
pub fn join_texts(selected: &[&ScoredStatement]) -> String {
    selected
        .iter()
        .map(|s| s.text())
        .collect::<Vec<_>>()
        .join(" ")
}
