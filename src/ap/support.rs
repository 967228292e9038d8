use rayon::prelude::*;

use super::itemset::Itemset;
use crate::data::RecordSet;

/// Number of records in which every item of `itemset` is present.
pub fn support(itemset: &Itemset, records: &RecordSet) -> usize {
    records
        .rows()
        .filter(|row| itemset.iter().all(|item| row[item.index()]))
        .count()
}

/// Supports of a batch of itemsets, in input order.
pub fn support_all(itemsets: &[Itemset], records: &RecordSet, parallel: bool) -> Vec<usize> {
    if parallel {
        itemsets
            .par_iter()
            .map(|itemset| support(itemset, records))
            .collect()
    } else {
        itemsets
            .iter()
            .map(|itemset| support(itemset, records))
            .collect()
    }
}
