//! Fitted label encoder: category string to integer code

use crate::types::car::CategoricalField;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Encoders of the categorical columns, keyed by field
pub type EncoderMap = BTreeMap<CategoricalField, LabelEncoder>;

/// Maps each category seen at fit time to its index in `classes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "EncoderClasses")]
pub struct LabelEncoder {
    classes: Vec<String>,
    codes: HashMap<String, usize>,
}

/// Serialized form: the fitted `classes` list
#[derive(Debug, Deserialize)]
struct EncoderClasses {
    classes: Vec<String>,
}

impl TryFrom<EncoderClasses> for LabelEncoder {
    type Error = String;

    fn try_from(raw: EncoderClasses) -> Result<Self, Self::Error> {
        Self::new(raw.classes)
    }
}

impl LabelEncoder {
    /// Build an encoder from its fitted classes. Duplicates are rejected.
    pub fn new(classes: Vec<String>) -> Result<Self, String> {
        let mut codes = HashMap::with_capacity(classes.len());
        for (code, class) in classes.iter().enumerate() {
            if codes.insert(class.clone(), code).is_some() {
                return Err(format!("duplicate encoder class {class:?}"));
            }
        }
        Ok(Self { classes, codes })
    }

    /// Code of a category, or `None` if it was never seen at fit time
    pub fn transform(&self, value: &str) -> Option<usize> {
        self.codes.get(value).copied()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.codes.contains_key(value)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_uses_class_index() {
        let encoder: LabelEncoder =
            serde_json::from_str(r#"{"classes": ["CNG", "Diesel", "Petrol"]}"#).unwrap();

        assert_eq!(encoder.transform("CNG"), Some(0));
        assert_eq!(encoder.transform("Petrol"), Some(2));
        assert_eq!(encoder.transform("Electric"), None);
        assert_eq!(encoder.len(), 3);
    }

    #[test]
    fn test_duplicate_classes_rejected() {
        let result = serde_json::from_str::<LabelEncoder>(r#"{"classes": ["Manual", "Manual"]}"#);
        assert!(result.is_err());
    }
}
