//! Loading the restaurant risk classifications and slicing them by city.
//!
//! The dataset is read once at startup and never modified afterwards. Views
//! over the dataset borrow its records, so a [CityView] is always computed
//! from the data as loaded and cannot go stale.

use std::{
    collections::HashSet,
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::risk::RiskCategory;

/// The CSV columns that every dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Restaurant", "City", "Category"];

/// The errors that can occur while loading a dataset.
///
/// All of these are fatal, the dashboard cannot be served without data.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The data file could not be opened or read.
    #[error("could not read the data file {}: {source}", path.display())]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying IO error.
        source: io::Error,
    },

    /// The header row does not contain one of [REQUIRED_COLUMNS].
    #[error("the data file is missing the required column \"{0}\"")]
    MissingColumn(&'static str),

    /// The CSV could not be parsed, e.g. a row has the wrong number of fields.
    #[error("could not parse the CSV data: {0}")]
    Malformed(#[from] csv::Error),

    /// The file has a valid header but no rows.
    #[error("the data file does not contain any restaurants")]
    Empty,
}

/// A restaurant and the risk category it was classified as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskRecord {
    /// The restaurant's name.
    pub restaurant: String,
    /// The city the restaurant is in.
    pub city: String,
    /// The restaurant's risk classification.
    pub category: RiskCategory,
}

impl RiskRecord {
    /// Create a record, parsing `category` as a [RiskCategory].
    pub fn new(restaurant: &str, city: &str, category: &str) -> Self {
        Self {
            restaurant: restaurant.to_owned(),
            city: city.to_owned(),
            category: RiskCategory::parse(category),
        }
    }

    /// The sort priority derived from the record's category.
    pub fn risk_rank(&self) -> u8 {
        self.category.rank()
    }
}

/// A row as it appears in the CSV file. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Restaurant")]
    restaurant: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Category")]
    category: String,
}

impl From<CsvRow> for RiskRecord {
    fn from(row: CsvRow) -> Self {
        Self {
            restaurant: row.restaurant,
            city: row.city,
            category: RiskCategory::parse(&row.category),
        }
    }
}

/// All restaurant risk records in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<RiskRecord>,
}

impl Dataset {
    /// Load the dataset from the CSV file at `path`.
    ///
    /// # Errors
    /// Returns a [DataLoadError] if the file cannot be read, is not valid
    /// CSV, lacks a required column or has no rows.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let file = File::open(path).map_err(|source| DataLoadError::Io {
            path: path.to_owned(),
            source,
        })?;

        let dataset = Self::from_reader(file)?;
        tracing::info!(
            "Loaded {} restaurants from {}",
            dataset.len(),
            path.display()
        );

        Ok(dataset)
    }

    /// Parse a dataset from CSV text with a header row.
    ///
    /// # Errors
    /// Returns a [DataLoadError] if the text is not valid CSV, lacks a
    /// required column or has no rows.
    pub fn from_reader(reader: impl Read) -> Result<Self, DataLoadError> {
        let mut reader = csv::ReaderBuilder::new().from_reader(reader);

        let headers = reader.headers()?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(DataLoadError::MissingColumn(column));
            }
        }

        let records = reader
            .deserialize::<CsvRow>()
            .map(|row| row.map(RiskRecord::from))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_records(records)
    }

    /// Create a dataset from records that have already been parsed.
    ///
    /// # Errors
    /// Returns [DataLoadError::Empty] if `records` is empty.
    pub fn from_records(records: Vec<RiskRecord>) -> Result<Self, DataLoadError> {
        if records.is_empty() {
            return Err(DataLoadError::Empty);
        }

        Ok(Self { records })
    }

    /// The number of restaurants in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no restaurants. Always false for a loaded dataset.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in file order.
    pub fn records(&self) -> &[RiskRecord] {
        &self.records
    }

    /// The distinct cities in the order they first appear, at most `limit` of them.
    pub fn list_cities(&self, limit: usize) -> Vec<&str> {
        let mut seen = HashSet::new();

        self.records
            .iter()
            .map(|record| record.city.as_str())
            .filter(|city| seen.insert(*city))
            .take(limit)
            .collect()
    }

    /// The restaurants in `city`, riskiest first.
    ///
    /// Restaurants with the same rank keep their order from the file.
    pub fn select_city(&self, city: &str) -> CityView<'_> {
        let mut records: Vec<&RiskRecord> = self
            .records
            .iter()
            .filter(|record| record.city == city)
            .collect();

        // `sort_by_key` is stable, which keeps file order within a rank.
        records.sort_by_key(|record| record.risk_rank());

        CityView {
            city: city.to_owned(),
            records,
        }
    }
}

/// The restaurants of a single city sorted by risk rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityView<'a> {
    /// The selected city.
    pub city: String,
    /// The city's restaurants, riskiest first.
    pub records: Vec<&'a RiskRecord>,
}

impl CityView<'_> {
    /// The number of restaurants in the view.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the city has no restaurants.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
