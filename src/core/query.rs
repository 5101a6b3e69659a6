//! Filtering and sorting over an in-memory sequence of countries.

use crate::domain::model::Country;
use crate::utils::error::{EtlError, Result};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Population,
    Area,
}

impl Field {
    pub fn parse(field: &str) -> Option<Field> {
        match field {
            "name" => Some(Field::Name),
            "population" => Some(Field::Population),
            "area" => Some(Field::Area),
            _ => None,
        }
    }

    fn numeric_value(&self, country: &Country) -> Option<i64> {
        match self {
            Field::Name => None,
            Field::Population => Some(country.population),
            Field::Area => Some(country.area),
        }
    }

    /// Descending comparator for this field.
    fn compare(&self, a: &Country, b: &Country) -> Ordering {
        match self {
            Field::Name => b.name.cmp(&a.name),
            Field::Population => b.population.cmp(&a.population),
            Field::Area => b.area.cmp(&a.area),
        }
    }
}

/// Keeps the records matching `field`/`value`, in their original order.
///
/// `name` matches exactly; `population` and `area` keep records whose value is
/// at least the parsed threshold. An unknown field or an unparsable threshold
/// matches nothing.
pub fn filter(countries: &[Country], field: &str, value: &str) -> Vec<Country> {
    match Field::parse(field) {
        Some(Field::Name) => countries
            .iter()
            .filter(|c| c.name == value)
            .cloned()
            .collect(),
        Some(numeric) => match value.parse::<i64>() {
            Ok(threshold) => countries
                .iter()
                .filter(|c| numeric.numeric_value(c).is_some_and(|v| v >= threshold))
                .cloned()
                .collect(),
            Err(_) => Vec::new(),
        },
        None => Vec::new(),
    }
}

/// Returns a copy ordered by `field`, largest first. Unknown fields order by name.
/// Ties keep their input order.
pub fn sort(countries: &[Country], field: &str) -> Vec<Country> {
    let mut sorted = countries.to_vec();
    sort_in_place(&mut sorted, field);
    sorted
}

pub fn sort_in_place(countries: &mut [Country], field: &str) {
    let field = Field::parse(field).unwrap_or(Field::Name);
    countries.sort_by(|a, b| field.compare(a, b));
}

/// A `field=value` filter taken from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpr {
    pub field: Field,
    pub value: String,
}

impl FilterExpr {
    /// Unlike [`filter`], rejects unknown fields and non-integer thresholds.
    pub fn parse(expression: &str) -> Result<FilterExpr> {
        let invalid = |reason: &str| EtlError::InvalidFilter {
            expression: expression.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = expression.split('=').collect();
        let [field, value] = parts.as_slice() else {
            return Err(invalid("expected exactly one '=' as in field=value"));
        };

        let field = Field::parse(field)
            .ok_or_else(|| invalid("field must be one of name, population, area"))?;

        if field != Field::Name && value.parse::<i64>().is_err() {
            return Err(invalid("threshold must be an integer"));
        }

        Ok(FilterExpr {
            field,
            value: value.to_string(),
        })
    }

    pub fn field_name(&self) -> &'static str {
        match self.field {
            Field::Name => "name",
            Field::Population => "population",
            Field::Area => "area",
        }
    }

    pub fn apply(&self, countries: &[Country]) -> Vec<Country> {
        filter(countries, self.field_name(), &self.value)
    }
}
