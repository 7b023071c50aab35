//! gbscore: inference for gradient boosted decision tree ensembles.
//!
//! Evaluates a pre-trained additive tree ensemble (XGBoost dump-format
//! shape) against feature records, producing a calibrated probability per
//! record: each tree is walked from root to leaf, the leaf contributions
//! are summed, and the logistic link maps the raw sum into (0, 1).
//!
//! The crate is inference-only. It consumes an already-deserialized model
//! and performs no training, no file I/O, and no logging; error handling
//! policy belongs to the caller.
//!
//! # Example
//!
//! ```
//! use gbscore::{Ensemble, ScoreOutput, Scorer};
//! use serde_json::json;
//!
//! let ensemble: Ensemble = serde_json::from_value(json!([
//!     {
//!         "nodeid": 0, "depth": 0, "split": "age", "split_condition": 30.0,
//!         "yes": 1, "no": 2, "missing": 2,
//!         "children": [
//!             {"nodeid": 1, "leaf": -0.5},
//!             {"nodeid": 2, "leaf": 0.5}
//!         ]
//!     }
//! ]))?;
//!
//! let scorer = Scorer::new(ensemble);
//! let output = scorer.score_value(&json!({"age": 24.0}))?;
//! assert_eq!(output, ScoreOutput::Single(1.0 / (1.0 + 0.5f64.exp())));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ensemble;
pub mod error;
pub mod scorer;
pub mod tree;

pub use ensemble::Ensemble;
pub use error::ScoreError;
pub use scorer::{sigmoid, ScoreOutput, Scorer};
pub use tree::{FeatureRecord, Tree, TreeNode};
