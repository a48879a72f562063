//! Car record and the fields that describe it

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical attributes of a car, each backed by a fitted label encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoricalField {
    Name,
    Fuel,
    SellerType,
    Transmission,
    Owner,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 5] = [
        CategoricalField::Name,
        CategoricalField::Fuel,
        CategoricalField::SellerType,
        CategoricalField::Transmission,
        CategoricalField::Owner,
    ];

    /// Column name in the dataset and in the bundle's encoder map
    pub fn column(self) -> &'static str {
        match self {
            CategoricalField::Name => "name",
            CategoricalField::Fuel => "fuel",
            CategoricalField::SellerType => "seller_type",
            CategoricalField::Transmission => "transmission",
            CategoricalField::Owner => "owner",
        }
    }

    /// Form label
    pub fn label(self) -> &'static str {
        match self {
            CategoricalField::Name => "Car Name",
            CategoricalField::Fuel => "Fuel Type",
            CategoricalField::SellerType => "Seller Type",
            CategoricalField::Transmission => "Transmission",
            CategoricalField::Owner => "Owner",
        }
    }
}

/// Integer attributes of a car, passed to the scaler unencoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericField {
    Year,
    KmDriven,
}

impl NumericField {
    pub const ALL: [NumericField; 2] = [NumericField::Year, NumericField::KmDriven];

    pub fn column(self) -> &'static str {
        match self {
            NumericField::Year => "year",
            NumericField::KmDriven => "km_driven",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NumericField::Year => "Year",
            NumericField::KmDriven => "Kilometers Driven",
        }
    }
}

/// One column of the model's feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Categorical(CategoricalField),
    Numeric(NumericField),
}

impl Feature {
    /// Column order of the frame the artifacts were fitted on
    pub const TRAINING_ORDER: [Feature; 7] = [
        Feature::Categorical(CategoricalField::Name),
        Feature::Numeric(NumericField::Year),
        Feature::Numeric(NumericField::KmDriven),
        Feature::Categorical(CategoricalField::Fuel),
        Feature::Categorical(CategoricalField::SellerType),
        Feature::Categorical(CategoricalField::Transmission),
        Feature::Categorical(CategoricalField::Owner),
    ];

    pub fn column(self) -> &'static str {
        match self {
            Feature::Categorical(field) => field.column(),
            Feature::Numeric(field) => field.column(),
        }
    }

    /// Look a feature up by its column name
    pub fn from_column(column: &str) -> Option<Self> {
        Self::TRAINING_ORDER
            .iter()
            .copied()
            .find(|feature| feature.column() == column)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// A used car as submitted through the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarRecord {
    /// Make and model, e.g. "Maruti Swift Dzire VDI"
    pub name: String,

    /// Year of manufacture
    pub year: i64,

    /// Odometer reading in kilometres
    pub km_driven: i64,

    /// Fuel type (Petrol, Diesel, CNG, ...)
    pub fuel: String,

    /// Individual, Dealer or Trustmark Dealer
    pub seller_type: String,

    /// Manual or Automatic
    pub transmission: String,

    /// Ownership history (First Owner, Second Owner, ...)
    pub owner: String,
}

impl CarRecord {
    /// Value of a categorical attribute
    pub fn categorical(&self, field: CategoricalField) -> &str {
        match field {
            CategoricalField::Name => &self.name,
            CategoricalField::Fuel => &self.fuel,
            CategoricalField::SellerType => &self.seller_type,
            CategoricalField::Transmission => &self.transmission,
            CategoricalField::Owner => &self.owner,
        }
    }

    /// Value of a numeric attribute
    pub fn numeric(&self, field: NumericField) -> i64 {
        match field {
            NumericField::Year => self.year,
            NumericField::KmDriven => self.km_driven,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CarRecord {
        CarRecord {
            name: "Maruti Swift Dzire VDI".to_string(),
            year: 2015,
            km_driven: 50000,
            fuel: "Diesel".to_string(),
            seller_type: "Individual".to_string(),
            transmission: "Manual".to_string(),
            owner: "First Owner".to_string(),
        }
    }

    #[test]
    fn test_record_from_json() {
        let json = r#"{
            "name": "Maruti Swift Dzire VDI", "year": 2015, "km_driven": 50000,
            "fuel": "Diesel", "seller_type": "Individual",
            "transmission": "Manual", "owner": "First Owner"
        }"#;
        let record: CarRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, sample());
    }

    #[test]
    fn test_field_accessors() {
        let record = sample();
        assert_eq!(record.categorical(CategoricalField::SellerType), "Individual");
        assert_eq!(record.numeric(NumericField::KmDriven), 50000);
    }

    #[test]
    fn test_training_order_covers_every_field() {
        for field in CategoricalField::ALL {
            assert!(Feature::TRAINING_ORDER.contains(&Feature::Categorical(field)));
        }
        for field in NumericField::ALL {
            assert!(Feature::TRAINING_ORDER.contains(&Feature::Numeric(field)));
        }
        assert_eq!(Feature::from_column("km_driven"), Some(Feature::Numeric(NumericField::KmDriven)));
        assert_eq!(Feature::from_column("selling_price"), None);
    }
}
