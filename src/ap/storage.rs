use super::itemset::{ItemId, Itemset};

/// Memory-efficient itemset storage using flat arrays
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    items: Vec<ItemId>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// All frequent itemsets of one size, with their supports
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(estimated_items: usize, estimated_itemsets: usize) -> Self {
        Self {
            items: Vec::with_capacity(estimated_items),
            offsets: Vec::with_capacity(estimated_itemsets),
            supports: Vec::with_capacity(estimated_itemsets),
        }
    }

    pub fn add_itemset(&mut self, itemset: &Itemset, support: usize) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(itemset.items());
        self.offsets.push((start, itemset.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[ItemId] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn with_capacity(itemset_size: usize, estimated_itemsets: usize) -> Self {
        Self {
            storage: ItemsetStorage::with_capacity(
                estimated_itemsets * itemset_size,
                estimated_itemsets,
            ),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, itemset: &Itemset, support: usize) -> usize {
        debug_assert_eq!(itemset.len(), self.itemset_size);
        self.storage.add_itemset(itemset, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[ItemId] {
        self.storage.get_itemset(idx)
    }

    pub fn support(&self, idx: usize) -> usize {
        self.storage.support(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[ItemId]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    /// Itemsets paired with their supports.
    pub fn iter_with_support(&self) -> impl Iterator<Item = (&[ItemId], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.support(idx)))
    }

    pub fn to_itemsets(&self) -> Vec<Itemset> {
        self.iter_itemsets()
            .map(|items| Itemset::new(items.to_vec()))
            .collect()
    }
}

/// Frequent itemsets of every size, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct FrequentItemsets {
    levels: Vec<FrequentLevel>,
}

impl FrequentItemsets {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_level(&mut self, level: FrequentLevel) {
        self.levels.push(level);
    }

    pub fn levels(&self) -> &[FrequentLevel] {
        &self.levels
    }

    /// Total number of frequent itemsets across all levels.
    pub fn len(&self) -> usize {
        self.levels.iter().map(FrequentLevel::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &[ItemId]> {
        self.levels.iter().flat_map(FrequentLevel::iter_itemsets)
    }

    pub fn iter_with_support(&self) -> impl Iterator<Item = (&[ItemId], usize)> {
        self.levels.iter().flat_map(FrequentLevel::iter_with_support)
    }

    pub fn to_itemsets(&self) -> Vec<Itemset> {
        self.iter().map(|items| Itemset::new(items.to_vec())).collect()
    }
}
