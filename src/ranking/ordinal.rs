const CO_RANK_LABEL: &str = "1/2";

/// Rank labels for scores already sorted in descending order.
///
/// Only the top two can share a label: when the runner-up is within `co_rank_margin`
/// of the leader both are "1/2". Every later position is its plain 1-based index.
pub fn assign_ranks(sorted_scores: &[f64], co_rank_margin: f64) -> Vec<String> {
    let mut ranks: Vec<String> = (1..=sorted_scores.len()).map(|pos| pos.to_string()).collect();

    if is_co_ranked(sorted_scores, co_rank_margin) {
        ranks[0] = CO_RANK_LABEL.to_string();
        ranks[1] = CO_RANK_LABEL.to_string();
    }

    ranks
}

fn is_co_ranked(sorted_scores: &[f64], co_rank_margin: f64) -> bool {
    match sorted_scores {
        [first, second, ..] => (second - first).abs() <= co_rank_margin,
        _ => false,
    }
}
