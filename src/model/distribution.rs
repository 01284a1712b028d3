//! Probability-weighted distribution trees

use serde::{Deserialize, Serialize};

/// Content of a distribution node
///
/// Serialized with the key naming the variant, so a leaf reads as
/// `{"probability": 0.5, "value": ...}` and a branch as
/// `{"probability": 0.5, "children": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DistributionNode<V> {
    /// Terminal content written into a cell
    #[serde(rename = "value")]
    Leaf(V),
    /// Nested options resolved by a further weighted draw
    #[serde(rename = "children")]
    Branch(Vec<Distribution<V>>),
}

/// A probability-weighted option within an ordered sibling list
///
/// Siblings are accumulated in list order, so reordering them moves the
/// selection boundaries. Probabilities summing to less than one leave a gap in
/// which nothing is selected.
///
/// A node carrying neither `value` nor `children` reads as a branch without
/// children: selecting it leaves the cell empty. When both keys are present
/// `children` wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "RawDistribution<V>",
    bound(deserialize = "V: Deserialize<'de>")
)]
pub struct Distribution<V> {
    /// Share of the unit interval claimed by this option
    pub probability: f64,
    /// Leaf value or child options
    #[serde(flatten)]
    pub node: DistributionNode<V>,
}

impl<V> Distribution<V> {
    /// Create a leaf option
    pub const fn leaf(probability: f64, value: V) -> Self {
        Self {
            probability,
            node: DistributionNode::Leaf(value),
        }
    }

    /// Create a branch option over `children`
    pub const fn branch(probability: f64, children: Vec<Self>) -> Self {
        Self {
            probability,
            node: DistributionNode::Branch(children),
        }
    }

    /// Leaf value, if this is a leaf
    pub const fn value(&self) -> Option<&V> {
        match &self.node {
            DistributionNode::Leaf(value) => Some(value),
            DistributionNode::Branch(_) => None,
        }
    }

    /// Child options, if this is a branch
    pub fn children(&self) -> Option<&[Self]> {
        match &self.node {
            DistributionNode::Leaf(_) => None,
            DistributionNode::Branch(children) => Some(children),
        }
    }

    /// Number of nodes in this subtree, including itself
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .map_or(0, |children| children.iter().map(Self::node_count).sum())
    }
}

#[derive(Deserialize)]
struct RawDistribution<V> {
    probability: f64,
    value: Option<V>,
    children: Option<Vec<Distribution<V>>>,
}

impl<V> From<RawDistribution<V>> for Distribution<V> {
    fn from(raw: RawDistribution<V>) -> Self {
        let node = match (raw.children, raw.value) {
            (Some(children), _) => DistributionNode::Branch(children),
            (None, Some(value)) => DistributionNode::Leaf(value),
            (None, None) => DistributionNode::Branch(Vec::new()),
        };
        Self {
            probability: raw.probability,
            node,
        }
    }
}
