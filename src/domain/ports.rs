use crate::domain::model::{Country, LoadOutcome};
use crate::utils::error::Result;
use std::path::Path;

/// Format-specific reader/writer for a sequence of countries.
pub trait CountryCodec {
    fn read(&self, path: &Path) -> Result<Vec<Country>>;
    fn write(&self, path: &Path, countries: &[Country]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn sort_field(&self) -> Option<&str>;
    fn filter_expr(&self) -> Option<&str>;
    fn validate_records(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Country>>;
    fn transform(&self, data: Vec<Country>) -> Result<Vec<Country>>;
    fn load(&self, data: Vec<Country>) -> Result<LoadOutcome>;
}
