//! Ensemble: an ordered sequence of decision trees.

use serde::Deserialize;

use crate::tree::Tree;

/// A trained additive tree ensemble.
///
/// Trees are iterated in order during scoring and their leaf contributions
/// summed; summation is commutative, so order does not affect the result.
/// The ensemble is immutable after construction and safe to share across
/// concurrent scoring calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Ensemble {
    trees: Vec<Tree>,
}

impl Ensemble {
    /// Create an ensemble from its trees.
    pub fn new(trees: Vec<Tree>) -> Self {
        Self { trees }
    }

    /// Number of trees in the ensemble.
    #[inline]
    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    /// Whether the ensemble contains no trees.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// The trees, in scoring order.
    #[inline]
    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;
    use serde_json::json;

    #[test]
    fn ensemble_from_trees() {
        let ensemble = Ensemble::new(vec![
            Tree::new(TreeNode::leaf(0, 1.0)),
            Tree::new(TreeNode::leaf(0, 2.0)),
        ]);

        assert_eq!(ensemble.num_trees(), 2);
        assert!(!ensemble.is_empty());
    }

    #[test]
    fn empty_ensemble() {
        let ensemble = Ensemble::new(Vec::new());
        assert_eq!(ensemble.num_trees(), 0);
        assert!(ensemble.is_empty());
    }

    #[test]
    fn deserialize_from_tree_array() {
        let ensemble: Ensemble = serde_json::from_value(json!([
            {
                "nodeid": 0,
                "depth": 0,
                "split": "f",
                "split_condition": 0.5,
                "yes": 1,
                "no": 2,
                "missing": 2,
                "children": [
                    {"nodeid": 1, "leaf": 0.4},
                    {"nodeid": 2, "leaf": -0.4}
                ]
            },
            {"nodeid": 0, "leaf": 0.1}
        ]))
        .unwrap();

        assert_eq!(ensemble.num_trees(), 2);
        assert!(ensemble.trees()[1].root().is_leaf());
    }
}
