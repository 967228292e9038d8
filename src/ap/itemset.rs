use std::fmt;

/// Position of an item in its universe. The derived ordering is the single
/// global order every itemset is kept in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub usize);

impl ItemId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Duplicate-free items in strictly increasing order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Itemset(Vec<ItemId>);

impl Itemset {
    pub fn new(mut items: Vec<ItemId>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    pub fn singleton(item: ItemId) -> Self {
        Self(vec![item])
    }

    pub fn from_indices(indices: &[usize]) -> Self {
        Self::new(indices.iter().copied().map(ItemId).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[ItemId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.0.binary_search(&item).is_ok()
    }

    pub fn prefix(&self) -> &[ItemId] {
        match self.0.split_last() {
            Some((_, prefix)) => prefix,
            None => &[],
        }
    }

    pub fn last(&self) -> Option<ItemId> {
        self.0.last().copied()
    }

    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        self.iter().all(|item| other.contains(item))
    }

    /// Items of `self` that are not in `other`, order preserved.
    pub fn difference(&self, other: &Itemset) -> Itemset {
        Self(self.iter().filter(|&item| !other.contains(item)).collect())
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        let mut items = self.0.clone();
        items.extend_from_slice(&other.0);
        Self::new(items)
    }

    pub fn is_disjoint(&self, other: &Itemset) -> bool {
        self.iter().all(|item| !other.contains(item))
    }

    /// Every subset obtained by dropping exactly one item.
    pub fn drop_one_subsets(&self) -> impl Iterator<Item = Itemset> + '_ {
        (0..self.0.len()).map(move |skip| {
            Self(
                self.0
                    .iter()
                    .enumerate()
                    .filter(|&(idx, _)| idx != skip)
                    .map(|(_, &item)| item)
                    .collect(),
            )
        })
    }
}

impl<'a> IntoIterator for &'a Itemset {
    type Item = &'a ItemId;
    type IntoIter = std::slice::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
