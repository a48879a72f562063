//! Decision trees exported as flat node arrays
//!
//! Node `i` is a leaf when `children_left[i] == -1`. Internal nodes send a
//! sample left when `x[feature[i]] <= threshold[i]`, right otherwise. Leaves
//! carry `value[i]`: a single mean for regression trees, one count (or
//! probability) per class for classification trees.

use serde::Deserialize;

const LEAF: i64 = -1;

/// A fitted decision tree whose node arrays are known to be consistent
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "TreeArrays")]
pub struct DecisionTree {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<usize>,
    threshold: Vec<f64>,
    value: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
struct TreeArrays {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<i64>,
    threshold: Vec<f64>,
    value: Vec<Vec<f64>>,
}

impl TryFrom<TreeArrays> for DecisionTree {
    type Error = String;

    fn try_from(raw: TreeArrays) -> Result<Self, Self::Error> {
        let n = raw.children_left.len();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        if [
            raw.children_right.len(),
            raw.feature.len(),
            raw.threshold.len(),
            raw.value.len(),
        ]
        .iter()
        .any(|&len| len != n)
        {
            return Err(format!("tree node arrays differ in length (expected {n})"));
        }

        let mut feature = Vec::with_capacity(n);
        for node in 0..n {
            let (left, right) = (raw.children_left[node], raw.children_right[node]);
            if left == LEAF {
                if raw.value[node].is_empty() {
                    return Err(format!("leaf {node} has no value"));
                }
                // leaves carry a placeholder feature
                feature.push(0);
                continue;
            }

            // children always follow their parent, which also rules out cycles
            let forward = |child: i64| child > node as i64 && child < n as i64;
            if !forward(left) || !forward(right) {
                return Err(format!("node {node} has invalid children ({left}, {right})"));
            }
            let split = usize::try_from(raw.feature[node])
                .map_err(|_| format!("node {node} splits on feature {}", raw.feature[node]))?;
            feature.push(split);
        }

        Ok(Self {
            children_left: raw.children_left,
            children_right: raw.children_right,
            feature,
            threshold: raw.threshold,
            value: raw.value,
        })
    }
}

impl DecisionTree {
    pub fn node_count(&self) -> usize {
        self.children_left.len()
    }

    fn is_leaf(&self, node: usize) -> bool {
        self.children_left[node] == LEAF
    }

    /// Largest feature index any split reads, `None` for a single-leaf tree
    pub fn max_feature(&self) -> Option<usize> {
        (0..self.node_count())
            .filter(|&node| !self.is_leaf(node))
            .map(|node| self.feature[node])
            .max()
    }

    /// Width of every leaf value, `None` if leaves disagree
    pub fn leaf_width(&self) -> Option<usize> {
        let mut widths = (0..self.node_count())
            .filter(|&node| self.is_leaf(node))
            .map(|node| self.value[node].len());
        let first = widths.next()?;
        widths.all(|w| w == first).then_some(first)
    }

    /// Walk the tree and return the value of the leaf `x` lands in.
    ///
    /// `x` must be at least `max_feature() + 1` wide.
    pub fn leaf_value(&self, x: &[f64]) -> &[f64] {
        let mut node = 0;
        while !self.is_leaf(node) {
            let next = if x[self.feature[node]] <= self.threshold[node] {
                self.children_left[node]
            } else {
                self.children_right[node]
            };
            node = next as usize;
        }
        &self.value[node]
    }

    /// Regression output: first entry of the leaf value
    pub fn predict_value(&self, x: &[f64]) -> f64 {
        self.leaf_value(x)[0]
    }

    /// Classification output: leaf counts normalized to probabilities
    pub fn predict_proba(&self, x: &[f64]) -> Vec<f64> {
        let counts = self.leaf_value(x);
        let total: f64 = counts.iter().sum();
        if total > 0.0 {
            counts.iter().map(|c| c / total).collect()
        } else {
            vec![1.0 / counts.len() as f64; counts.len()]
        }
    }
}
