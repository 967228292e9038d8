pub mod records;
pub mod universe;

pub use records::{RecordSet, Value};
pub use universe::ItemUniverse;

use crate::error::DatasetError;

/// Item universe together with the records defined over it.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub universe: ItemUniverse,
    pub records: RecordSet,
}

impl Dataset {
    pub fn new<I, S>(names: I, rows: &[Vec<Value>]) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let universe = ItemUniverse::new(names)?;
        let records = RecordSet::new(universe.len(), rows)?;
        Ok(Self { universe, records })
    }
}
