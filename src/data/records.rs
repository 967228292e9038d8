use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::ap::Itemset;
use crate::error::DatasetError;

/// A stored attribute value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Discrete attribute
    Flag(bool),
    /// Continuous attribute; counts as present when nonzero
    Measure(f64),
}

impl Value {
    pub fn is_present(self) -> bool {
        match self {
            Value::Flag(flag) => flag,
            Value::Measure(measure) => measure != 0.0,
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Flag(flag)
    }
}

/// Records as a dense presence matrix: one row per record, one column per item.
#[derive(Debug, Clone)]
pub struct RecordSet {
    presence: Array2<bool>,
}

impl RecordSet {
    pub fn new(num_items: usize, rows: &[Vec<Value>]) -> Result<Self, DatasetError> {
        let mut presence = Array2::from_elem((rows.len(), num_items), false);

        for (record, row) in rows.iter().enumerate() {
            if row.len() != num_items {
                return Err(DatasetError::RecordWidth {
                    record,
                    expected: num_items,
                    found: row.len(),
                });
            }
            for (item, value) in row.iter().enumerate() {
                presence[[record, item]] = value.is_present();
            }
        }

        Ok(Self { presence })
    }

    /// Nonzero entries are present, matching 0/1 transaction matrices.
    pub fn from_matrix(transactions: ArrayView2<i32>) -> Self {
        Self {
            presence: transactions.mapv(|value| value != 0),
        }
    }

    pub fn len(&self) -> usize {
        self.presence.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.presence.nrows() == 0
    }

    pub fn num_items(&self) -> usize {
        self.presence.ncols()
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, bool>> {
        self.presence.axis_iter(Axis(0))
    }

    pub fn contains(&self, record: usize, itemset: &Itemset) -> bool {
        let row = self.presence.row(record);
        itemset.iter().all(|item| row[item.index()])
    }
}
