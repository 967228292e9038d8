//! Error types for mining, datasets and loaders

use std::path::PathBuf;
use thiserror::Error;

use crate::ap::Itemset;

pub type Result<T> = std::result::Result<T, AprioriError>;

/// Errors raised by the mining core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AprioriError {
    /// Minimum support is negative or not a finite number
    #[error("Invalid minimum support: {0}")]
    InvalidSupport(f64),

    /// Minimum confidence lies outside [0, 1]
    #[error("Invalid minimum confidence: {0} (expected a value in [0, 1])")]
    InvalidConfidence(f64),

    /// Confidence requested for an antecedent that no record contains
    #[error("Antecedent {antecedent:?} has zero support, confidence is undefined")]
    ZeroAntecedentSupport { antecedent: Itemset },

    /// A threshold was left unset in every configuration source
    #[error("Missing threshold: {0}")]
    MissingThreshold(&'static str),

    /// The universe and the record set disagree on the number of items
    #[error("Item universe has {items} items but records have {columns} columns")]
    UniverseMismatch { items: usize, columns: usize },

    #[error("Mining cancelled")]
    Cancelled,
}

/// Errors raised while assembling an item universe and record set
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    #[error("Duplicate item name: {0}")]
    DuplicateItem(String),

    #[error("Record {record} has {found} values, expected {expected}")]
    RecordWidth {
        record: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised while reading attribute and training files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: attribute line has no name")]
    EmptyAttributeLine { line: usize },

    #[error("Line {line}: missing value for attribute {attribute}")]
    MissingValue { line: usize, attribute: String },

    #[error("Line {line}: invalid number {value:?} for continuous attribute {attribute}")]
    InvalidNumber {
        line: usize,
        attribute: String,
        value: String,
    },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
