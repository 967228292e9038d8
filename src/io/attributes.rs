use std::path::Path;

use crate::error::LoadError;

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeKind {
    /// Enumerated values, as listed in the description file
    Discrete(Vec<String>),
    Continuous,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub kind: AttributeKind,
}

impl Attribute {
    pub fn is_continuous(&self) -> bool {
        matches!(self.kind, AttributeKind::Continuous)
    }
}

/// Parses attribute descriptions: one attribute per line, `name continuous`
/// or `name value value ...`. Blank lines are skipped.
pub fn parse_attributes(text: &str) -> Result<Vec<Attribute>, LoadError> {
    let mut attributes = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut words = line.split_whitespace();
        let name = words
            .next()
            .ok_or(LoadError::EmptyAttributeLine { line: idx + 1 })?;
        let values: Vec<String> = words.map(str::to_owned).collect();

        let kind = if values.first().is_some_and(|word| word == "continuous") {
            AttributeKind::Continuous
        } else {
            AttributeKind::Discrete(values)
        };

        attributes.push(Attribute {
            name: name.to_owned(),
            kind,
        });
    }

    Ok(attributes)
}

pub fn load_attributes(path: impl AsRef<Path>) -> Result<Vec<Attribute>, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_attributes(&text)
}
