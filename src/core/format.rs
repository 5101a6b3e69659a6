use crate::adapters::csv_codec::CsvCodec;
use crate::adapters::json_codec::JsonCodec;
use crate::domain::ports::CountryCodec;
use crate::utils::error::{EtlError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Json,
    Unsupported,
}

impl FileFormat {
    /// Resolves the format from the path suffix alone. Matching is case-sensitive.
    pub fn from_path(path: &str) -> Self {
        if path.ends_with(".csv") {
            FileFormat::Csv
        } else if path.ends_with(".json") {
            FileFormat::Json
        } else {
            FileFormat::Unsupported
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileFormat::Csv => "csv",
            FileFormat::Json => "json",
            FileFormat::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// Picks the codec for the file at `path`.
pub fn codec_for(path: &str, validate_records: bool) -> Result<Box<dyn CountryCodec>> {
    match FileFormat::from_path(path) {
        FileFormat::Csv => Ok(Box::new(CsvCodec::new().with_validation(validate_records))),
        FileFormat::Json => Ok(Box::new(JsonCodec::new().with_validation(validate_records))),
        FileFormat::Unsupported => Err(EtlError::UnsupportedFormat {
            path: path.to_string(),
        }),
    }
}
