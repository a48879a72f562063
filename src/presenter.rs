//! Rendering of prediction results as display strings

use crate::config::DisplayConfig;
use crate::types::prediction::{ModelIdentity, PredictionResult};

/// One label/value pair of the result panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

/// Formats results according to the display configuration
#[derive(Debug, Clone)]
pub struct ResultPresenter {
    currency_symbol: String,
    show_model_details: bool,
}

impl ResultPresenter {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            show_model_details: config.show_model_details,
        }
    }

    pub fn show_model_details(&self) -> bool {
        self.show_model_details
    }

    /// Price rounded to whole units, e.g. `₹550,000` or `-₹1,234`
    pub fn format_currency(&self, value: f64) -> String {
        let rounded = value.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!(
            "{sign}{}{}",
            self.currency_symbol,
            group_thousands(rounded.abs() as u64)
        )
    }

    /// The three result metrics: price, label, cluster
    pub fn metrics(&self, result: &PredictionResult) -> [Metric; 3] {
        [
            Metric {
                label: "Estimated Price",
                value: self.format_currency(result.price),
            },
            Metric {
                label: "Price Label",
                value: result.label.to_string(),
            },
            Metric {
                label: "Cluster Group",
                value: result.cluster.to_string(),
            },
        ]
    }

    /// Model identity lines, empty when details are disabled
    pub fn model_details(&self, identity: &ModelIdentity) -> Vec<String> {
        if !self.show_model_details {
            return Vec::new();
        }

        let mut lines = vec![
            format!("Regression Model: {}", identity.regression),
            format!("Classification Model: {}", identity.classification),
            format!("Cluster Model: {}", identity.clustering),
            format!("Target Column: {}", identity.target_col),
        ];
        if let Some(median) = identity.target_median {
            lines.push(format!(
                "High/Low Threshold: {}",
                self.format_currency(median)
            ));
        }
        lines
    }

    /// Plain-text report used by headless mode
    pub fn render_text(&self, result: &PredictionResult, identity: &ModelIdentity) -> String {
        let mut out = String::new();
        for metric in self.metrics(result) {
            out.push_str(&format!("{}: {}\n", metric.label, metric.value));
        }
        let details = self.model_details(identity);
        if !details.is_empty() {
            out.push('\n');
            for line in details {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }
}

impl Default for ResultPresenter {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
