use std::path::Path;

use super::attributes::Attribute;
use crate::data::{Dataset, Value};
use crate::error::LoadError;

/// Parses training records. Tokens map positionally onto `attributes`;
/// surplus tokens are ignored and blank lines skipped.
pub fn parse_records(text: &str, attributes: &[Attribute]) -> Result<Vec<Vec<Value>>, LoadError> {
    let mut rows = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let mut row = Vec::with_capacity(attributes.len());

        for attribute in attributes {
            let token = tokens.next().ok_or_else(|| LoadError::MissingValue {
                line: idx + 1,
                attribute: attribute.name.clone(),
            })?;

            let value = if attribute.is_continuous() {
                let measure = token.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
                    line: idx + 1,
                    attribute: attribute.name.clone(),
                    value: token.to_owned(),
                })?;
                Value::Measure(measure)
            } else {
                Value::Flag(token != "0")
            };
            row.push(value);
        }

        rows.push(row);
    }

    Ok(rows)
}

pub fn load_records(path: impl AsRef<Path>, attributes: &[Attribute]) -> Result<Vec<Vec<Value>>, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&text, attributes)
}

/// Builds the item universe (one item per attribute) and the record set.
pub fn build_dataset(attributes: &[Attribute], rows: &[Vec<Value>]) -> Result<Dataset, LoadError> {
    let names = attributes.iter().map(|attribute| attribute.name.clone());
    Ok(Dataset::new(names, rows)?)
}

/// Reads an attribute file and a training file into a dataset.
pub fn load_dataset(attribute_path: impl AsRef<Path>, training_path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let attributes = super::attributes::load_attributes(attribute_path)?;
    let rows = load_records(training_path, &attributes)?;
    build_dataset(&attributes, &rows)
}
