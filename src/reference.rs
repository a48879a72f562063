//! Reference dataset loading and input-domain derivation
//!
//! The reference dataset is the table of historical listings the model bundle
//! was trained on. It is only read to decide what the form may offer: the
//! sorted unique values of each categorical column and the observed range and
//! median of each numeric column.

use crate::error::{ArtifactError, PredictError};
use crate::types::car::{CarRecord, CategoricalField, NumericField};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One historical listing. Columns not named here (the target column among
/// them) are ignored when reading.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub name: String,
    pub year: i64,
    pub km_driven: i64,
    pub fuel: String,
    pub seller_type: String,
    pub transmission: String,
    pub owner: String,
}

impl Listing {
    fn categorical(&self, field: CategoricalField) -> &str {
        match field {
            CategoricalField::Name => &self.name,
            CategoricalField::Fuel => &self.fuel,
            CategoricalField::SellerType => &self.seller_type,
            CategoricalField::Transmission => &self.transmission,
            CategoricalField::Owner => &self.owner,
        }
    }

    fn numeric(&self, field: NumericField) -> i64 {
        match field {
            NumericField::Year => self.year,
            NumericField::KmDriven => self.km_driven,
        }
    }
}

/// Immutable, non-empty table of historical listings
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    source: Option<PathBuf>,
    listings: Vec<Listing>,
}

impl ReferenceDataset {
    /// Load the dataset from a CSV file with a header row.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }

        info!(path = %path.display(), "Loading reference dataset");

        let file = File::open(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut listings = Vec::new();
        for (idx, row) in reader.deserialize::<Listing>().enumerate() {
            // +2: one for the header, one for 1-based line numbers
            let listing =
                row.map_err(|e| ArtifactError::malformed(path, format!("line {}: {e}", idx + 2)))?;
            listings.push(listing);
        }

        let mut dataset = Self::from_listings(listings)
            .ok_or_else(|| ArtifactError::malformed(path, "dataset has no rows"))?;
        dataset.source = Some(path.to_path_buf());

        info!(
            rows = dataset.len(),
            path = %path.display(),
            "Reference dataset loaded"
        );

        Ok(dataset)
    }

    /// Build a dataset from in-memory listings. Returns `None` when empty.
    pub fn from_listings(listings: Vec<Listing>) -> Option<Self> {
        if listings.is_empty() {
            return None;
        }
        Some(Self {
            source: None,
            listings,
        })
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// File the dataset was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Derive the input domains the form is allowed to offer
    pub fn domains(&self) -> InputDomains {
        let categorical = CategoricalField::ALL
            .iter()
            .map(|&field| (field, self.unique_sorted(field)))
            .collect();

        let numeric = NumericField::ALL
            .iter()
            .map(|&field| (field, self.numeric_range(field)))
            .collect();

        let domains = InputDomains {
            categorical,
            numeric,
        };

        debug!(
            names = domains.options(CategoricalField::Name).len(),
            year = ?domains.range(NumericField::Year),
            km_driven = ?domains.range(NumericField::KmDriven),
            "Input domains derived"
        );

        domains
    }

    fn unique_sorted(&self, field: CategoricalField) -> Vec<String> {
        let mut values: Vec<String> = self
            .listings
            .iter()
            .map(|l| l.categorical(field).to_string())
            .collect();
        values.sort();
        values.dedup();
        values
    }

    fn numeric_range(&self, field: NumericField) -> NumericRange {
        let mut values: Vec<i64> = self.listings.iter().map(|l| l.numeric(field)).collect();
        values.sort_unstable();
        NumericRange::from_sorted(&values)
    }
}

/// Observed bounds and default of a numeric column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: i64,
    pub max: i64,
    pub median: f64,
    /// Form default: the median rounded down
    pub default: i64,
}

impl NumericRange {
    /// Compute the range of an ascending, non-empty slice
    fn from_sorted(values: &[i64]) -> Self {
        let (min, max) = match (values.first(), values.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => (0, 0),
        };

        let n = values.len();
        let median = if n == 0 {
            0.0
        } else if n % 2 == 1 {
            values[n / 2] as f64
        } else {
            (values[n / 2 - 1] as f64 + values[n / 2] as f64) / 2.0
        };

        Self {
            min,
            max,
            median,
            default: (median.floor() as i64).clamp(min, max),
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }
}

/// What the form may offer, derived from the reference dataset
#[derive(Debug, Clone, PartialEq)]
pub struct InputDomains {
    categorical: BTreeMap<CategoricalField, Vec<String>>,
    numeric: BTreeMap<NumericField, NumericRange>,
}

impl InputDomains {
    /// Sorted unique options of a categorical field
    pub fn options(&self, field: CategoricalField) -> &[String] {
        self.categorical
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Bounds and default of a numeric field
    pub fn range(&self, field: NumericField) -> NumericRange {
        self.numeric.get(&field).copied().unwrap_or(NumericRange {
            min: 0,
            max: 0,
            median: 0.0,
            default: 0,
        })
    }

    /// The record the form shows before any edit: first option of every
    /// select, median default of every number.
    pub fn default_record(&self) -> CarRecord {
        let first = |field: CategoricalField| {
            self.options(field)
                .first()
                .cloned()
                .unwrap_or_default()
        };

        CarRecord {
            name: first(CategoricalField::Name),
            year: self.range(NumericField::Year).default,
            km_driven: self.range(NumericField::KmDriven).default,
            fuel: first(CategoricalField::Fuel),
            seller_type: first(CategoricalField::SellerType),
            transmission: first(CategoricalField::Transmission),
            owner: first(CategoricalField::Owner),
        }
    }

    /// Check a record that did not come from the form (e.g. headless mode)
    /// against the domains the form would have enforced.
    pub fn check(&self, record: &CarRecord) -> Result<(), PredictError> {
        for field in CategoricalField::ALL {
            let value = record.categorical(field);
            if self.options(field).binary_search_by(|o| o.as_str().cmp(value)).is_err() {
                return Err(PredictError::OutOfDomain {
                    field: field.column().to_string(),
                    value: value.to_string(),
                });
            }
        }

        for field in NumericField::ALL {
            let value = record.numeric(field);
            if !self.range(field).contains(value) {
                return Err(PredictError::OutOfDomain {
                    field: field.column().to_string(),
                    value: value.to_string(),
                });
            }
        }

        Ok(())
    }
}
