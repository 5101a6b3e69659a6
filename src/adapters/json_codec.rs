use crate::domain::model::Country;
use crate::domain::ports::CountryCodec;
use crate::utils::error::{EtlError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Reads and writes a JSON array of `{"Name", "Population", "Area"}` objects.
#[derive(Debug, Clone)]
pub struct JsonCodec {
    validate_records: bool,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self {
            validate_records: true,
        }
    }

    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_records = enabled;
        self
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryCodec for JsonCodec {
    fn read(&self, path: &Path) -> Result<Vec<Country>> {
        let file = File::open(path)?;

        let countries: Vec<Country> =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                if e.is_io() {
                    EtlError::IoError(e.into())
                } else {
                    EtlError::DecodeError {
                        message: e.to_string(),
                    }
                }
            })?;

        if self.validate_records {
            for (index, country) in countries.iter().enumerate() {
                country.validate().map_err(|e| EtlError::InvalidRecord {
                    index: index + 1,
                    reason: e.to_string(),
                })?;
            }
        }

        tracing::debug!("Read {} records from {}", countries.len(), path.display());
        Ok(countries)
    }

    fn write(&self, path: &Path, countries: &[Country]) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);

        serde_json::to_writer_pretty(&mut writer, countries)
            .map_err(|e| EtlError::IoError(e.into()))?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        tracing::debug!("Wrote {} records to {}", countries.len(), path.display());
        Ok(())
    }
}
