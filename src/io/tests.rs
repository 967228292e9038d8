use super::*;
use crate::ap::{CancelToken, NoopObserver, Rule, associate};
use crate::config::{MiningConfig, ThresholdScale};
use crate::data::Value;
use crate::error::{DatasetError, LoadError};
use std::io::Write;

const ATTRIBUTES: &str = "\
outlook sunny overcast rain
windy true false

temperature continuous
play yes no
";

const TRAINING: &str = "\
1 0 71.5 1
1 1 0 1

0 1 64 0
1 0 0.0 1 extra
";

#[test]
fn test_parse_attributes() {
    let attributes = parse_attributes(ATTRIBUTES).unwrap();

    assert_eq!(attributes.len(), 4);
    assert_eq!(attributes[0].name, "outlook");
    assert_eq!(
        attributes[0].kind,
        AttributeKind::Discrete(vec!["sunny".into(), "overcast".into(), "rain".into()])
    );
    assert!(attributes[2].is_continuous());
    assert!(!attributes[3].is_continuous());
}

#[test]
fn test_parse_records() {
    let attributes = parse_attributes(ATTRIBUTES).unwrap();
    let rows = parse_records(TRAINING, &attributes).unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(
        rows[0],
        vec![
            Value::Flag(true),
            Value::Flag(false),
            Value::Measure(71.5),
            Value::Flag(true)
        ]
    );
    // surplus tokens are ignored
    assert_eq!(rows[3].len(), 4);
    assert!(!rows[3][2].is_present());
}

#[test]
fn test_missing_value() {
    let attributes = parse_attributes(ATTRIBUTES).unwrap();
    let err = parse_records("1 0 3.0 1\n1 0\n", &attributes).unwrap_err();

    match err {
        LoadError::MissingValue { line, attribute } => {
            assert_eq!(line, 2);
            assert_eq!(attribute, "temperature");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_number() {
    let attributes = parse_attributes(ATTRIBUTES).unwrap();
    let err = parse_records("1 0 warm 1\n", &attributes).unwrap_err();

    assert!(matches!(
        err,
        LoadError::InvalidNumber { line: 1, ref value, .. } if value == "warm"
    ));
}

#[test]
fn test_duplicate_attribute() {
    let attributes = parse_attributes("a x y\na continuous\n").unwrap();
    let err = build_dataset(&attributes, &[]).unwrap_err();

    assert!(matches!(
        err,
        LoadError::Dataset(DatasetError::DuplicateItem(ref name)) if name == "a"
    ));
}

#[test]
fn test_record_width_checked() {
    let err = crate::data::Dataset::new(["a", "b"], &[vec![Value::Flag(true)]]).unwrap_err();
    assert_eq!(
        err,
        DatasetError::RecordWidth {
            record: 0,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn test_load_dataset_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let attribute_path = dir.path().join("weather-attr.txt");
    let training_path = dir.path().join("weather.txt");

    std::fs::File::create(&attribute_path)
        .unwrap()
        .write_all(ATTRIBUTES.as_bytes())
        .unwrap();
    std::fs::File::create(&training_path)
        .unwrap()
        .write_all(TRAINING.as_bytes())
        .unwrap();

    let dataset = load_dataset(&attribute_path, &training_path).unwrap();
    assert_eq!(dataset.universe.len(), 4);
    assert_eq!(dataset.records.len(), 4);

    // outlook and play appear together in three records
    let config = MiningConfig::new(3.0, 1.0).with_scale(ThresholdScale::Absolute);
    let result = associate(
        &dataset.universe,
        &dataset.records,
        &config,
        &mut NoopObserver,
        &CancelToken::new(),
    )
    .unwrap();

    let rendered: Vec<String> = result
        .rules
        .iter()
        .map(|rule| RuleDisplay::new(rule, &dataset.universe).to_string())
        .collect();
    assert_eq!(rendered.len(), 2);
    assert!(rendered.contains(&"[outlook] ---> [play]".to_string()));
    assert!(rendered.contains(&"[play] ---> [outlook]".to_string()));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_attributes(dir.path().join("absent-attr.txt")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_render_multi_item_rule() {
    let dataset =
        crate::data::Dataset::new(["bread", "butter", "milk"], &[vec![Value::Flag(true); 3]]).unwrap();
    let universe = &dataset.universe;
    let rule = Rule {
        antecedent: universe.itemset(["milk", "bread"]).unwrap(),
        consequent: universe.itemset(["butter"]).unwrap(),
        support: 1,
        confidence: 1.0,
    };

    assert_eq!(
        RuleDisplay::new(&rule, universe).to_string(),
        "[bread, milk] ---> [butter]"
    );
}
