//! Scoring engine: ensemble traversal, aggregation, and the logistic link.

use rayon::prelude::*;
use serde_json::Value;

use crate::ensemble::Ensemble;
use crate::error::ScoreError;
use crate::tree::FeatureRecord;

/// Result of scoring a JSON input: one probability per supplied record.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreOutput {
    /// Score for a single record.
    Single(f64),
    /// Scores for a sequence of records, in input order.
    Batch(Vec<f64>),
}

/// Scores feature records against a tree ensemble.
///
/// A scorer has exactly two states: *uninitialized* ([`Scorer::default`]),
/// in which every scoring call fails with [`ScoreError::Uninitialized`],
/// and *ready* ([`Scorer::new`]), entered once at construction with a
/// model and never left. The model cannot be replaced or removed.
#[derive(Debug, Default)]
pub struct Scorer {
    model: Option<Ensemble>,
}

impl Scorer {
    /// Create a ready scorer holding the given ensemble.
    pub fn new(model: Ensemble) -> Self {
        Self { model: Some(model) }
    }

    fn model(&self) -> Result<&Ensemble, ScoreError> {
        self.model.as_ref().ok_or(ScoreError::Uninitialized)
    }

    /// Raw ensemble score for one record: the sum of each tree's leaf
    /// contribution, before the logistic transform.
    pub fn margin(&self, features: &FeatureRecord) -> Result<f64, ScoreError> {
        let model = self.model()?;

        let mut sum = 0.0;
        for tree in model.trees() {
            sum += tree.leaf_for(features)?;
        }
        Ok(sum)
    }

    /// Probability score for one record: `sigmoid(margin)`, in (0, 1).
    pub fn score(&self, features: &FeatureRecord) -> Result<f64, ScoreError> {
        Ok(sigmoid(self.margin(features)?))
    }

    /// Score a sequence of records, preserving input order.
    ///
    /// The first failing record aborts the whole batch; no partial output
    /// is returned.
    pub fn score_batch(&self, records: &[FeatureRecord]) -> Result<Vec<f64>, ScoreError> {
        self.model()?;
        records.iter().map(|r| self.score(r)).collect()
    }

    /// Score a sequence of records on the rayon thread pool.
    ///
    /// The ensemble is read-only shared state and each record carries its
    /// own traversal state, so records are scored independently. Output
    /// order still matches input order, and any failure aborts the batch.
    pub fn par_score_batch(&self, records: &[FeatureRecord]) -> Result<Vec<f64>, ScoreError> {
        self.model()?;
        records.par_iter().map(|r| self.score(r)).collect()
    }

    /// Score already-parsed JSON: an object scores as a single record, an
    /// array of objects as a batch. Any other JSON shape is rejected with
    /// [`ScoreError::InvalidInput`] before any traversal.
    pub fn score_value(&self, input: &Value) -> Result<ScoreOutput, ScoreError> {
        match input {
            Value::Object(_) => {
                let record = record_from_value(input)?;
                Ok(ScoreOutput::Single(self.score(&record)?))
            }
            Value::Array(items) => {
                let records = items
                    .iter()
                    .map(record_from_value)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(ScoreOutput::Batch(self.score_batch(&records)?))
            }
            other => Err(ScoreError::InvalidInput {
                got: json_type_name(other).to_string(),
            }),
        }
    }
}

/// Logistic link function: `1 / (1 + exp(-x))`.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Convert a JSON object to a feature record.
///
/// Numeric values are kept, `null` counts as an undefined value (the key is
/// treated as missing), and any other value type is rejected.
fn record_from_value(value: &Value) -> Result<FeatureRecord, ScoreError> {
    let object = match value {
        Value::Object(map) => map,
        other => {
            return Err(ScoreError::InvalidInput {
                got: json_type_name(other).to_string(),
            })
        }
    };

    let mut record = FeatureRecord::with_capacity(object.len());
    for (name, value) in object {
        match value {
            Value::Number(n) => {
                if let Some(v) = n.as_f64() {
                    record.insert(name.clone(), v);
                }
            }
            Value::Null => {}
            other => {
                return Err(ScoreError::InvalidInput {
                    got: format!("{} value for feature {name:?}", json_type_name(other)),
                })
            }
        }
    }
    Ok(record)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
