//! Regression and classification estimators
//!
//! Each variant is the exported state of one estimator family. The `type`
//! tag is the estimator's class name as the training process reports it.

use crate::models::tree::DecisionTree;
use serde::Deserialize;

/// Linear model: `coef . x + intercept`
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    pub coef: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    fn decision(&self, x: &[f64]) -> f64 {
        self.coef.iter().zip(x).map(|(w, v)| w * v).sum::<f64>() + self.intercept
    }

    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.coef.len() != n_features {
            return Err(format!(
                "{} coefficients, expected {n_features}",
                self.coef.len()
            ));
        }
        Ok(())
    }
}

/// Price regressor
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Regressor {
    LinearRegression(LinearModel),
    Ridge(LinearModel),
    Lasso(LinearModel),
    DecisionTreeRegressor { tree: DecisionTree },
    /// Mean of the member trees
    RandomForestRegressor { trees: Vec<DecisionTree> },
}

impl Regressor {
    pub fn class_name(&self) -> &'static str {
        match self {
            Regressor::LinearRegression(_) => "LinearRegression",
            Regressor::Ridge(_) => "Ridge",
            Regressor::Lasso(_) => "Lasso",
            Regressor::DecisionTreeRegressor { .. } => "DecisionTreeRegressor",
            Regressor::RandomForestRegressor { .. } => "RandomForestRegressor",
        }
    }

    pub(crate) fn validate(&self, n_features: usize) -> Result<(), String> {
        let result = match self {
            Regressor::LinearRegression(model) | Regressor::Ridge(model) | Regressor::Lasso(model) => {
                model.validate(n_features)
            }
            Regressor::DecisionTreeRegressor { tree } => {
                validate_trees(std::slice::from_ref(tree), n_features, 1)
            }
            Regressor::RandomForestRegressor { trees } => validate_trees(trees, n_features, 1),
        };
        result.map_err(|e| format!("{}: {e}", self.class_name()))
    }

    /// Predict the price of one scaled feature vector
    pub fn predict(&self, x: &[f64]) -> f64 {
        match self {
            Regressor::LinearRegression(model) | Regressor::Ridge(model) | Regressor::Lasso(model) => {
                model.decision(x)
            }
            Regressor::DecisionTreeRegressor { tree } => tree.predict_value(x),
            Regressor::RandomForestRegressor { trees } => {
                trees.iter().map(|t| t.predict_value(x)).sum::<f64>() / trees.len() as f64
            }
        }
    }
}

fn binary_classes() -> Vec<i64> {
    vec![0, 1]
}

/// Price-label classifier
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Classifier {
    /// Binary logistic regression; predicts `classes[1]` on a positive
    /// decision function
    LogisticRegression {
        coef: Vec<f64>,
        intercept: f64,
        #[serde(default = "binary_classes")]
        classes: Vec<i64>,
    },
    DecisionTreeClassifier {
        tree: DecisionTree,
        #[serde(default = "binary_classes")]
        classes: Vec<i64>,
    },
    /// Argmax of the mean class probabilities of the member trees
    RandomForestClassifier {
        trees: Vec<DecisionTree>,
        #[serde(default = "binary_classes")]
        classes: Vec<i64>,
    },
}

impl Classifier {
    pub fn class_name(&self) -> &'static str {
        match self {
            Classifier::LogisticRegression { .. } => "LogisticRegression",
            Classifier::DecisionTreeClassifier { .. } => "DecisionTreeClassifier",
            Classifier::RandomForestClassifier { .. } => "RandomForestClassifier",
        }
    }

    pub fn classes(&self) -> &[i64] {
        match self {
            Classifier::LogisticRegression { classes, .. }
            | Classifier::DecisionTreeClassifier { classes, .. }
            | Classifier::RandomForestClassifier { classes, .. } => classes,
        }
    }

    pub(crate) fn validate(&self, n_features: usize) -> Result<(), String> {
        let n_classes = self.classes().len();
        let result = match self {
            Classifier::LogisticRegression { coef, .. } => {
                if n_classes != 2 {
                    Err(format!("{n_classes} classes, expected 2"))
                } else if coef.len() != n_features {
                    Err(format!("{} coefficients, expected {n_features}", coef.len()))
                } else {
                    Ok(())
                }
            }
            Classifier::DecisionTreeClassifier { tree, .. } => {
                validate_trees(std::slice::from_ref(tree), n_features, n_classes)
            }
            Classifier::RandomForestClassifier { trees, .. } => {
                validate_trees(trees, n_features, n_classes)
            }
        };
        result.map_err(|e| format!("{}: {e}", self.class_name()))
    }

    /// Predict the class code of one scaled feature vector
    pub fn predict(&self, x: &[f64]) -> i64 {
        match self {
            Classifier::LogisticRegression {
                coef,
                intercept,
                classes,
            } => {
                let decision = coef.iter().zip(x).map(|(w, v)| w * v).sum::<f64>() + intercept;
                if decision > 0.0 {
                    classes[1]
                } else {
                    classes[0]
                }
            }
            Classifier::DecisionTreeClassifier { tree, classes } => {
                classes[argmax(&tree.predict_proba(x))]
            }
            Classifier::RandomForestClassifier { trees, classes } => {
                let mut proba = vec![0.0; classes.len()];
                for tree in trees {
                    for (acc, p) in proba.iter_mut().zip(tree.predict_proba(x)) {
                        *acc += p;
                    }
                }
                classes[argmax(&proba)]
            }
        }
    }
}

/// Index of the largest value; ties go to the lower index
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (idx, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = idx;
        }
    }
    best
}

fn validate_trees(
    trees: &[DecisionTree],
    n_features: usize,
    leaf_width: usize,
) -> Result<(), String> {
    if trees.is_empty() {
        return Err("no trees".to_string());
    }
    for (idx, tree) in trees.iter().enumerate() {
        if let Some(feature) = tree.max_feature() {
            if feature >= n_features {
                return Err(format!(
                    "tree {idx} splits on feature {feature}, only {n_features} available"
                ));
            }
        }
        if tree.leaf_width() != Some(leaf_width) {
            return Err(format!("tree {idx} leaves do not carry {leaf_width} value(s)"));
        }
    }
    Ok(())
}
