use std::fmt;

use crate::ap::{ItemId, Rule};
use crate::data::ItemUniverse;

/// Renders items by name, e.g. `[bread, milk]`.
pub struct ItemsetDisplay<'a> {
    items: &'a [ItemId],
    universe: &'a ItemUniverse,
}

impl<'a> ItemsetDisplay<'a> {
    pub fn new(items: &'a [ItemId], universe: &'a ItemUniverse) -> Self {
        Self { items, universe }
    }
}

impl fmt::Display for ItemsetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, &item) in self.items.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            match self.universe.name(item) {
                Some(name) => f.write_str(name)?,
                None => write!(f, "#{item}")?,
            }
        }
        f.write_str("]")
    }
}

/// Renders a rule as `antecedent ---> consequent`.
pub struct RuleDisplay<'a> {
    rule: &'a Rule,
    universe: &'a ItemUniverse,
}

impl<'a> RuleDisplay<'a> {
    pub fn new(rule: &'a Rule, universe: &'a ItemUniverse) -> Self {
        Self { rule, universe }
    }
}

impl fmt::Display for RuleDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ---> {}",
            ItemsetDisplay::new(self.rule.antecedent.items(), self.universe),
            ItemsetDisplay::new(self.rule.consequent.items(), self.universe)
        )
    }
}
