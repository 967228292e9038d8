//! Apriori frequent itemset mining and association rule generation.
//!
//! ```
//! use arules::ap::{CancelToken, NoopObserver, associate};
//! use arules::config::{MiningConfig, ThresholdScale};
//! use arules::data::{Dataset, Value};
//!
//! let rows: Vec<Vec<Value>> = [
//!     [true, true, false],
//!     [true, true, true],
//!     [false, true, true],
//!     [true, false, false],
//! ]
//! .iter()
//! .map(|row| row.iter().copied().map(Value::from).collect())
//! .collect();
//! let dataset = Dataset::new(["A", "B", "C"], &rows).unwrap();
//!
//! let config = MiningConfig::new(2.0, 0.6).with_scale(ThresholdScale::Absolute);
//! let result = associate(
//!     &dataset.universe,
//!     &dataset.records,
//!     &config,
//!     &mut NoopObserver,
//!     &CancelToken::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(result.frequent.len(), 5);
//! ```

pub mod ap;
pub mod config;
pub mod data;
pub mod error;
pub mod io;

#[cfg(feature = "python")]
mod python;

pub use ap::{Association, FrequentItemsets, ItemId, Itemset, Rule, associate};
pub use config::{MiningConfig, ThresholdScale, Thresholds};
pub use data::{Dataset, ItemUniverse, RecordSet, Value};
pub use error::{AprioriError, DatasetError, LoadError};
