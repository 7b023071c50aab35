//! Tree node types and root-to-leaf traversal.
//!
//! Trees follow the XGBoost dump-format shape: split nodes reference their
//! children by node identifier (`yes`/`no`/`missing`), and children are
//! stored as an unordered collection looked up by that identifier, not by
//! position.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::ScoreError;

/// Runtime feature input: feature name mapped to a numeric value.
///
/// Keys may be absent (the supported "missing" case) or reference features
/// the model never splits on (ignored).
pub type FeatureRecord = HashMap<String, f64>;

/// A node in a decision tree.
///
/// The two shapes a node can take are encoded as an explicit sum type; the
/// distinction is made once at the deserialization boundary (presence of
/// the `leaf` field selects [`TreeNode::Leaf`]) and never re-checked during
/// traversal.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Leaf node carrying its contribution to the ensemble sum.
    Leaf {
        /// Node identifier, unique within its tree.
        nodeid: u32,
        /// Contribution added into the raw ensemble score.
        leaf: f64,
    },
    /// Internal split node.
    Split {
        /// Node identifier, unique within its tree.
        nodeid: u32,
        /// Depth of this node (informational only).
        #[serde(default)]
        depth: i32,
        /// Name of the feature this node splits on.
        split: String,
        /// Threshold: `value < split_condition` takes the `yes` branch.
        split_condition: f64,
        /// Child id when the comparison holds.
        yes: u32,
        /// Child id when it does not (including exact equality).
        no: u32,
        /// Child id when the split feature is absent from the input.
        missing: u32,
        /// Child nodes, looked up by identifier (order irrelevant).
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    /// Create a leaf node.
    pub fn leaf(nodeid: u32, leaf: f64) -> Self {
        Self::Leaf { nodeid, leaf }
    }

    /// Create a split node.
    pub fn split(
        nodeid: u32,
        split: impl Into<String>,
        split_condition: f64,
        yes: u32,
        no: u32,
        missing: u32,
        children: Vec<TreeNode>,
    ) -> Self {
        Self::Split {
            nodeid,
            depth: 0,
            split: split.into(),
            split_condition,
            yes,
            no,
            missing,
            children,
        }
    }

    /// This node's identifier.
    #[inline]
    pub fn nodeid(&self) -> u32 {
        match self {
            Self::Leaf { nodeid, .. } | Self::Split { nodeid, .. } => *nodeid,
        }
    }

    /// Returns true if this is a leaf node.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Get the leaf value, if this is a leaf.
    #[inline]
    pub fn leaf_value(&self) -> Option<f64> {
        match self {
            Self::Leaf { leaf, .. } => Some(*leaf),
            Self::Split { .. } => None,
        }
    }

    /// Find a direct child by node identifier.
    ///
    /// Returns `None` for leaves and for identifiers with no matching child.
    pub fn child(&self, nodeid: u32) -> Option<&TreeNode> {
        match self {
            Self::Leaf { .. } => None,
            Self::Split { children, .. } => children.iter().find(|c| c.nodeid() == nodeid),
        }
    }
}

/// A single decision tree: a root node, possibly itself a leaf.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Tree {
    root: TreeNode,
}

impl Tree {
    /// Create a tree from its root node.
    pub fn new(root: TreeNode) -> Self {
        Self { root }
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Walk from the root to a leaf for the given features and return the
    /// leaf's contribution.
    ///
    /// At each split node the branch is chosen as follows: if the record
    /// contains the split feature, take `yes` iff `value < split_condition`
    /// (strict; equality goes to `no`), otherwise take `no`. If the feature
    /// is absent, take `missing` regardless of the threshold.
    ///
    /// Fails with [`ScoreError::NodeNotFound`] if the chosen identifier has
    /// no matching child. No default leaf is substituted.
    pub fn leaf_for(&self, features: &FeatureRecord) -> Result<f64, ScoreError> {
        let mut node = &self.root;

        loop {
            match node {
                TreeNode::Leaf { leaf, .. } => return Ok(*leaf),
                TreeNode::Split {
                    split,
                    split_condition,
                    yes,
                    no,
                    missing,
                    ..
                } => {
                    let next_id = match features.get(split) {
                        // Missing always overrides the comparison.
                        None => *missing,
                        // Strict less-than; equality (and NaN) goes to "no".
                        Some(&value) => {
                            if value < *split_condition {
                                *yes
                            } else {
                                *no
                            }
                        }
                    };

                    node = node
                        .child(next_id)
                        .ok_or(ScoreError::NodeNotFound { nodeid: next_id })?;
                }
            }
        }
    }
}
