//! Attribute and training file loaders, and rule rendering

pub mod attributes;
pub mod render;
pub mod training;

#[cfg(test)]
mod tests;

pub use attributes::{Attribute, AttributeKind, load_attributes, parse_attributes};
pub use render::{ItemsetDisplay, RuleDisplay};
pub use training::{build_dataset, load_dataset, load_records, parse_records};
