use ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::ap::{NoopObserver, associate};
use crate::config::{MiningConfig, ThresholdScale};
use crate::data::{ItemUniverse, RecordSet};

type PyRule = (Vec<usize>, Vec<usize>, f64);

#[pymodule]
fn arules(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(apriori_py, m)?)?;
    Ok(())
}

#[pyfunction]
#[pyo3(name = "apriori", signature = (transactions, min_support, min_confidence, scale = "record_count"))]
fn apriori_py<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
    min_confidence: f64,
    scale: &str,
) -> PyResult<(Vec<Bound<'py, PyArray2<usize>>>, Vec<PyRule>)> {
    let scale = match scale {
        "item_count" => ThresholdScale::ItemCount,
        "record_count" => ThresholdScale::RecordCount,
        "absolute" => ThresholdScale::Absolute,
        other => return Err(PyValueError::new_err(format!("Unknown scale: {other}"))),
    };

    let records = RecordSet::from_matrix(transactions.as_array());
    let universe = ItemUniverse::new((0..records.num_items()).map(|idx| idx.to_string()))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    let config = MiningConfig::new(min_support, min_confidence).with_scale(scale);

    let association = py
        .allow_threads(|| {
            associate(
                &universe,
                &records,
                &config,
                &mut NoopObserver,
                &config.cancel_token(),
            )
        })
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let mut levels = Vec::new();
    for level in association.frequent.levels() {
        if level.is_empty() {
            continue;
        }

        let itemset_size = level.itemset_size;
        let mut data = vec![0usize; level.len() * itemset_size];
        for (i, itemset) in level.iter_itemsets().enumerate() {
            for (j, item) in itemset.iter().enumerate() {
                data[i * itemset_size + j] = item.index();
            }
        }

        let array = Array2::from_shape_vec((level.len(), itemset_size), data)
            .map_err(|_| PyValueError::new_err("Failed to create array"))?;
        levels.push(array.into_pyarray(py));
    }

    let rules = association
        .rules
        .iter()
        .map(|rule| {
            (
                rule.antecedent.iter().map(|item| item.index()).collect(),
                rule.consequent.iter().map(|item| item.index()).collect(),
                rule.confidence,
            )
        })
        .collect();

    Ok((levels, rules))
}

