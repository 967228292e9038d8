use tracing::{debug, trace};

use super::itemset::Itemset;

/// Progress hooks for the mining and rule loops. Every method defaults to a
/// no-op so implementors override only what they report.
pub trait MiningObserver {
    /// Called once per level after support pruning.
    fn on_level(&mut self, _k: usize, _candidates: usize, _survivors: &[Itemset]) {}

    /// Called once per itemset that took part in rule generation.
    fn on_rules(&mut self, _itemset: &Itemset, _emitted: usize) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MiningObserver for NoopObserver {}

/// Reports progress as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl MiningObserver for TracingObserver {
    fn on_level(&mut self, k: usize, candidates: usize, survivors: &[Itemset]) {
        debug!(
            k,
            before = candidates,
            after = survivors.len(),
            "candidate itemsets pruned by support"
        );
        for itemset in survivors {
            trace!(k, ?itemset, "frequent itemset");
        }
    }

    fn on_rules(&mut self, itemset: &Itemset, emitted: usize) {
        debug!(?itemset, emitted, "rules generated");
    }
}

/// Collects every reported level; mostly useful in tests.
#[derive(Debug, Default, Clone)]
pub struct LevelRecorder {
    pub levels: Vec<(usize, usize, usize)>,
    pub rule_counts: Vec<(Itemset, usize)>,
}

impl MiningObserver for LevelRecorder {
    fn on_level(&mut self, k: usize, candidates: usize, survivors: &[Itemset]) {
        self.levels.push((k, candidates, survivors.len()));
    }

    fn on_rules(&mut self, itemset: &Itemset, emitted: usize) {
        self.rule_counts.push((itemset.clone(), emitted));
    }
}
