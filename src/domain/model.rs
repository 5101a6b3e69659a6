use crate::core::format::FileFormat;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single country record as persisted in CSV and JSON files.
///
/// Missing or `null` JSON fields fall back to an empty name or zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Country {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub population: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub area: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRecord {
    EmptyName,
    NegativePopulation,
    NegativeArea,
}

impl fmt::Display for InvalidRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            InvalidRecord::EmptyName => "country name cannot be empty",
            InvalidRecord::NegativePopulation => "population cannot be negative",
            InvalidRecord::NegativeArea => "area cannot be negative",
        };
        f.write_str(reason)
    }
}

impl std::error::Error for InvalidRecord {}

/// Where the pipeline put its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Console { records: usize },
    File {
        path: String,
        format: FileFormat,
        records: usize,
    },
}

impl LoadOutcome {
    pub fn records(&self) -> usize {
        match self {
            LoadOutcome::Console { records } | LoadOutcome::File { records, .. } => *records,
        }
    }
}

impl Country {
    pub fn new(name: impl Into<String>, population: i64, area: i64) -> Self {
        Self {
            name: name.into(),
            population,
            area,
        }
    }

    /// Reports the first violated rule, checked in field order.
    pub fn validate(&self) -> std::result::Result<(), InvalidRecord> {
        if self.name.is_empty() {
            return Err(InvalidRecord::EmptyName);
        }
        if self.population < 0 {
            return Err(InvalidRecord::NegativePopulation);
        }
        if self.area < 0 {
            return Err(InvalidRecord::NegativeArea);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_country() {
        assert!(Country::new("France", 68860000, 549190).validate().is_ok());
        assert!(Country::new("Nowhere", 0, 0).validate().is_ok());
    }

    #[test]
    fn test_invalid_country_reasons() {
        assert_eq!(
            Country::new("", 1, 1).validate(),
            Err(InvalidRecord::EmptyName)
        );
        assert_eq!(
            Country::new("A", -1, 1).validate(),
            Err(InvalidRecord::NegativePopulation)
        );
        assert_eq!(
            Country::new("A", 1, -1).validate(),
            Err(InvalidRecord::NegativeArea)
        );
        // name is checked before the numeric fields
        assert_eq!(
            Country::new("", -1, -1).validate(),
            Err(InvalidRecord::EmptyName)
        );
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(Country::new("Japan", 127400000, 377835)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Name": "Japan", "Population": 127400000, "Area": 377835})
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let country: Country = serde_json::from_str(r#"{"Name": "Japan", "Extra": true}"#).unwrap();
        assert_eq!(country, Country::new("Japan", 0, 0));
    }

    #[test]
    fn test_null_fields_default() {
        let country: Country =
            serde_json::from_str(r#"{"Name": null, "Population": null, "Area": 7}"#).unwrap();
        assert_eq!(country, Country::new("", 0, 7));
    }
}
