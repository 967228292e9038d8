use tracing::{debug, info};

use super::cancel::CancelToken;
use super::candidates::{generate_candidates, prune_infrequent_subsets};
use super::itemset::{ItemId, Itemset};
use super::observer::MiningObserver;
use super::storage::{FrequentItemsets, FrequentLevel};
use super::support::support_all;
use crate::config::{MineOptions, Thresholds};
use crate::data::{ItemUniverse, RecordSet};
use crate::error::{AprioriError, Result};

/// Level-wise Apriori over the whole universe, with the support threshold
/// scaled according to `thresholds`.
pub fn mine(
    universe: &ItemUniverse,
    records: &RecordSet,
    thresholds: &Thresholds,
    options: MineOptions,
    observer: &mut dyn MiningObserver,
    cancel: &CancelToken,
) -> Result<FrequentItemsets> {
    if !universe.is_empty() && !records.is_empty() && universe.len() != records.num_items() {
        return Err(AprioriError::UniverseMismatch {
            items: universe.len(),
            columns: records.num_items(),
        });
    }

    let threshold = thresholds.support_threshold(universe.len(), records.len());
    let items: Vec<ItemId> = universe.ids().collect();

    info!(
        items = items.len(),
        records = records.len(),
        min_support = thresholds.min_support(),
        scale = ?thresholds.scale(),
        threshold,
        "mining frequent itemsets"
    );

    frequent_itemsets(&items, threshold, records, options, observer, cancel)
}

/// Level-wise Apriori against an absolute support threshold.
pub fn frequent_itemsets(
    items: &[ItemId],
    threshold: f64,
    records: &RecordSet,
    options: MineOptions,
    observer: &mut dyn MiningObserver,
    cancel: &CancelToken,
) -> Result<FrequentItemsets> {
    let mut result = FrequentItemsets::new();

    if items.is_empty() || records.is_empty() {
        debug!("empty item universe or record set, nothing to mine");
        return Ok(result);
    }

    if let Some(item) = items.iter().find(|item| item.index() >= records.num_items()) {
        return Err(AprioriError::UniverseMismatch {
            items: item.index() + 1,
            columns: records.num_items(),
        });
    }

    let mut current: Vec<Itemset> = items.iter().copied().map(Itemset::singleton).collect();
    let mut k = 1;

    while !current.is_empty() {
        cancel.check()?;

        let supports = support_all(&current, records, options.parallel);
        let candidates = current.len();

        let mut level = FrequentLevel::with_capacity(k, candidates);
        let mut survivors = Vec::new();
        for (itemset, support) in current.into_iter().zip(supports) {
            if support as f64 >= threshold {
                level.add_itemset(&itemset, support);
                survivors.push(itemset);
            }
        }

        debug!(k, candidates, survivors = survivors.len(), "level pruned by support");
        observer.on_level(k, candidates, &survivors);

        if survivors.is_empty() {
            break;
        }
        result.push_level(level);

        current = generate_candidates(&survivors);
        if options.prune_subsets && k > 1 {
            current = prune_infrequent_subsets(current, &survivors);
        }
        k += 1;
    }

    info!(frequent = result.len(), levels = result.levels().len(), "mining finished");
    Ok(result)
}
