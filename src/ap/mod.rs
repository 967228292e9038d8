pub mod cancel;
pub mod candidates;
pub mod itemset;
pub mod mining;
pub mod observer;
pub mod rules;
pub mod storage;
pub mod support;


pub use cancel::CancelToken;
pub use candidates::{generate_candidates, prune_infrequent_subsets};
pub use itemset::{ItemId, Itemset};
pub use mining::{frequent_itemsets, mine};
pub use observer::{LevelRecorder, MiningObserver, NoopObserver, TracingObserver};
pub use rules::{Rule, generate_rules, rules_for_itemset};
pub use storage::{FrequentItemsets, FrequentLevel, ItemsetStorage};
pub use support::{support, support_all};

use crate::config::MiningConfig;
use crate::data::{ItemUniverse, RecordSet};
use crate::error::Result;

/// Frequent itemsets and the rules derived from them.
#[derive(Debug, Clone)]
pub struct Association {
    pub frequent: FrequentItemsets,
    pub rules: Vec<Rule>,
}

/// Mines frequent itemsets, then derives rules from them.
pub fn associate(
    universe: &ItemUniverse,
    records: &RecordSet,
    config: &MiningConfig,
    observer: &mut dyn MiningObserver,
    cancel: &CancelToken,
) -> Result<Association> {
    let thresholds = config.thresholds()?;
    let options = config.options();

    let frequent = mine(universe, records, &thresholds, options, observer, cancel)?;
    let rules = generate_rules(
        &frequent.to_itemsets(),
        thresholds.min_confidence(),
        records,
        options,
        observer,
        cancel,
    )?;

    Ok(Association { frequent, rules })
}
