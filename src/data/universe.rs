use std::collections::HashMap;

use crate::ap::{ItemId, Itemset};
use crate::error::DatasetError;

/// Ordered, duplicate-free item names. An item's position is its `ItemId`.
#[derive(Debug, Clone, Default)]
pub struct ItemUniverse {
    names: Vec<String>,
    index: HashMap<String, ItemId>,
}

impl ItemUniverse {
    pub fn new<I, S>(names: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut universe = Self::default();
        for name in names {
            let name = name.into();
            if universe.index.contains_key(&name) {
                return Err(DatasetError::DuplicateItem(name));
            }
            universe.index.insert(name.clone(), ItemId(universe.names.len()));
            universe.names.push(name);
        }
        Ok(universe)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> {
        (0..self.names.len()).map(ItemId)
    }

    pub fn name(&self, item: ItemId) -> Option<&str> {
        self.names.get(item.0).map(String::as_str)
    }

    pub fn id(&self, name: &str) -> Option<ItemId> {
        self.index.get(name).copied()
    }

    /// Builds an itemset from names; `None` if any name is unknown.
    pub fn itemset<'a, I>(&self, names: I) -> Option<Itemset>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .map(|name| self.id(name))
            .collect::<Option<Vec<_>>>()
            .map(Itemset::new)
    }
}
