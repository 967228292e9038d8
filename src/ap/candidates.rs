use std::collections::HashSet;

use super::itemset::Itemset;

/// Fk-1 x Fk-1 self-join: every pair of equal-size itemsets sharing all but
/// their last item yields the prefix followed by both last items.
pub fn generate_candidates(level: &[Itemset]) -> Vec<Itemset> {
    let mut candidates = Vec::new();

    for (i, a) in level.iter().enumerate() {
        let Some(last_a) = a.last() else { continue };

        for b in &level[i + 1..] {
            if a.len() != b.len() || a.prefix() != b.prefix() {
                continue;
            }
            let Some(last_b) = b.last() else { continue };
            if last_a == last_b {
                continue;
            }

            let mut items = a.prefix().to_vec();
            items.push(last_a);
            items.push(last_b);
            candidates.push(Itemset::new(items));
        }
    }

    candidates
}

/// Drops candidates that have a one-smaller subset outside `frequent_prev`.
pub fn prune_infrequent_subsets(candidates: Vec<Itemset>, frequent_prev: &[Itemset]) -> Vec<Itemset> {
    let frequent: HashSet<&Itemset> = frequent_prev.iter().collect();

    candidates
        .into_iter()
        .filter(|candidate| {
            candidate
                .drop_one_subsets()
                .all(|subset| frequent.contains(&subset))
        })
        .collect()
}
