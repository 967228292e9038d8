use tracing::{debug, info, trace};

use super::cancel::CancelToken;
use super::candidates::generate_candidates;
use super::itemset::Itemset;
use super::observer::MiningObserver;
use super::support::{support, support_all};
use crate::config::MineOptions;
use crate::data::RecordSet;
use crate::error::{AprioriError, Result};

/// An association rule `antecedent -> consequent`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    /// Support of `antecedent ∪ consequent`
    pub support: usize,
    pub confidence: f64,
}

impl Rule {
    pub fn itemset(&self) -> Itemset {
        self.antecedent.union(&self.consequent)
    }
}

/// Rules meeting `min_confidence` for every itemset of two or more items.
pub fn generate_rules(
    itemsets: &[Itemset],
    min_confidence: f64,
    records: &RecordSet,
    options: MineOptions,
    observer: &mut dyn MiningObserver,
    cancel: &CancelToken,
) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();

    for itemset in itemsets.iter().filter(|itemset| itemset.len() >= 2) {
        let generated = rules_for_itemset(itemset, min_confidence, records, options, cancel)?;
        observer.on_rules(itemset, generated.len());
        rules.extend(generated);
    }

    info!(rules = rules.len(), min_confidence, "rule generation finished");
    Ok(rules)
}

/// Grows consequents level by level. A consequent that misses the confidence
/// floor is left out of the next level's join, since enlarging it can only
/// lower confidence.
pub fn rules_for_itemset(
    itemset: &Itemset,
    min_confidence: f64,
    records: &RecordSet,
    options: MineOptions,
    cancel: &CancelToken,
) -> Result<Vec<Rule>> {
    if let Some(item) = itemset.iter().find(|item| item.index() >= records.num_items()) {
        return Err(AprioriError::UniverseMismatch {
            items: item.index() + 1,
            columns: records.num_items(),
        });
    }

    let k = itemset.len();
    let itemset_support = support(itemset, records);

    let mut rules = Vec::new();
    let mut consequents: Vec<Itemset> = itemset.iter().map(Itemset::singleton).collect();
    let mut size = 1;

    while !consequents.is_empty() && size < k {
        cancel.check()?;

        let antecedents: Vec<Itemset> = consequents
            .iter()
            .map(|consequent| itemset.difference(consequent))
            .collect();
        let antecedent_supports = support_all(&antecedents, records, options.parallel);

        let mut keep = vec![true; consequents.len()];
        for idx in (0..consequents.len()).rev() {
            let antecedent_support = antecedent_supports[idx];
            if antecedent_support == 0 {
                return Err(AprioriError::ZeroAntecedentSupport {
                    antecedent: antecedents[idx].clone(),
                });
            }

            let confidence = itemset_support as f64 / antecedent_support as f64;
            trace!(
                antecedent = ?antecedents[idx],
                consequent = ?consequents[idx],
                confidence,
                "rule candidate"
            );

            if confidence >= min_confidence {
                rules.push(Rule {
                    antecedent: antecedents[idx].clone(),
                    consequent: consequents[idx].clone(),
                    support: itemset_support,
                    confidence,
                });
            } else {
                keep[idx] = false;
            }
        }

        // a consequent of k items would leave the antecedent empty
        if size + 1 == k {
            break;
        }

        let survivors: Vec<Itemset> = consequents
            .into_iter()
            .zip(keep)
            .filter_map(|(consequent, kept)| kept.then_some(consequent))
            .collect();
        debug!(?itemset, size, survivors = survivors.len(), "consequents kept");

        consequents = generate_candidates(&survivors);
        size += 1;
    }

    Ok(rules)
}
