use crate::domain::model::Country;
use crate::domain::ports::CountryCodec;
use crate::utils::error::{EtlError, Result};
use std::fs::File;
use std::path::Path;

const HEADER: [&str; 3] = ["Name", "Population", "Area"];

/// Reads and writes `Name,Population,Area` CSV files.
#[derive(Debug, Clone)]
pub struct CsvCodec {
    validate_records: bool,
}

impl CsvCodec {
    pub fn new() -> Self {
        Self {
            validate_records: true,
        }
    }

    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_records = enabled;
        self
    }

    fn parse_record(&self, record: &csv::StringRecord, line: u64) -> Result<Country> {
        let malformed = |reason: String| EtlError::MalformedRecord { line, reason };

        if record.len() < 3 {
            return Err(malformed(format!(
                "expected at least 3 columns, found {}",
                record.len()
            )));
        }

        let population = record[1]
            .parse::<i64>()
            .map_err(|e| malformed(format!("invalid population '{}': {}", &record[1], e)))?;
        let area = record[2]
            .parse::<i64>()
            .map_err(|e| malformed(format!("invalid area '{}': {}", &record[2], e)))?;

        let country = Country::new(&record[0], population, area);
        if self.validate_records {
            country.validate().map_err(|e| malformed(e.to_string()))?;
        }
        Ok(country)
    }
}

impl Default for CsvCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a csv crate error to our taxonomy: I/O failures stay I/O, everything else is a bad row.
fn from_csv_error(err: csv::Error, line: u64) -> EtlError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => EtlError::IoError(io),
        _ => EtlError::MalformedRecord { line, reason },
    }
}

/// Write failures of any kind surface as I/O errors.
fn write_error(err: csv::Error) -> EtlError {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => EtlError::IoError(io),
        other => EtlError::IoError(std::io::Error::other(format!("{:?}", other))),
    }
}

impl CountryCodec for CsvCodec {
    fn read(&self, path: &Path) -> Result<Vec<Country>> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Err(EtlError::EmptyFile {
                path: path.display().to_string(),
            });
        }

        // The first row is always treated as a header and never inspected.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        // Lines are numbered by record, header = 1, whatever the line endings.
        // Blank lines are skipped by the reader and not counted; a quoted
        // multi-line field counts once.
        let mut countries = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let line = index as u64 + 2;
            let record = result.map_err(|e| from_csv_error(e, line))?;
            countries.push(self.parse_record(&record, line)?);
        }

        tracing::debug!("Read {} records from {}", countries.len(), path.display());
        Ok(countries)
    }

    fn write(&self, path: &Path, countries: &[Country]) -> Result<()> {
        let mut writer = csv::Writer::from_path(path).map_err(write_error)?;

        writer.write_record(HEADER).map_err(write_error)?;
        for country in countries {
            let population = country.population.to_string();
            let area = country.area.to_string();
            writer
                .write_record([country.name.as_str(), population.as_str(), area.as_str()])
                .map_err(write_error)?;
        }
        writer.flush()?;

        tracing::debug!("Wrote {} records to {}", countries.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_csv() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "test1.csv",
            "Name,Population,Area\n\
             Russia,143400000,17075200\n\
             USA,295700000,9629091\n\
             France,68860000,549190\n\
             Japan,127400000,377835\n",
        );

        let countries = CsvCodec::new().read(&path).unwrap();
        assert_eq!(
            countries,
            vec![
                Country::new("Russia", 143400000, 17075200),
                Country::new("USA", 295700000, 9629091),
                Country::new("France", 68860000, 549190),
                Country::new("Japan", 127400000, 377835),
            ]
        );
    }

    #[test]
    fn test_header_content_is_ignored_and_extra_columns_dropped() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "extra.csv",
            "whatever,header\nChile,19000000,756102,Santiago\n",
        );

        let countries = CsvCodec::new().read(&path).unwrap();
        assert_eq!(countries, vec![Country::new("Chile", 19000000, 756102)]);
    }

    #[test]
    fn test_header_only_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "header.csv", "Name,Population,Area\n");
        assert!(CsvCodec::new().read(&path).unwrap().is_empty());
    }

    #[test]
    fn test_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.csv", "");

        let err = CsvCodec::new().read(&path).unwrap_err();
        assert!(matches!(err, EtlError::EmptyFile { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = CsvCodec::new()
            .read(&dir.path().join("missing.csv"))
            .unwrap_err();
        assert!(matches!(err, EtlError::IoError(_)));
    }

    #[test]
    fn test_invalid_number() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "invalid.csv",
            "Name,Population,Area\nA,1,2\nB,not_number,3\n",
        );

        match CsvCodec::new().read(&path).unwrap_err() {
            EtlError::MalformedRecord { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("population"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    fn malformed_line(content: &str) -> u64 {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "lines.csv", content);
        match CsvCodec::new().read(&path).unwrap_err() {
            EtlError::MalformedRecord { line, .. } => line,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_line_numbers_with_crlf_endings() {
        assert_eq!(malformed_line("Name,Population,Area\r\nA,1,2\r\nB,y,3\r\n"), 3);
        assert_eq!(malformed_line("Name,Population,Area\r\nA,1\r\n"), 2);
        assert_eq!(
            malformed_line("Name,Population,Area\r\nA,1,2\r\nB,2,3\r\nC,3,4\r\nD,4,z\r\n"),
            5
        );
    }

    #[test]
    fn test_line_numbers_count_records() {
        // blank lines are skipped and not counted
        assert_eq!(malformed_line("Name,Population,Area\n\nB,y,3\n"), 2);
        // a quoted name spanning two physical lines is one record
        assert_eq!(
            malformed_line("Name,Population,Area\n\"New\nZealand\",5,1\nB,y,3\n"),
            3
        );
        assert_eq!(
            malformed_line("Name,Population,Area\r\n\"New\r\nZealand\",5,1\r\nB,1\r\n"),
            3
        );
    }

    #[test]
    fn test_too_few_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "short.csv", "Name,Population\nvalue1,12\n");

        match CsvCodec::new().read(&path).unwrap_err() {
            EtlError::MalformedRecord { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validation_on_read() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "negative.csv", "Name,Population,Area\nA,-5,10\n");

        match CsvCodec::new().read(&path).unwrap_err() {
            EtlError::MalformedRecord { line, reason } => {
                assert_eq!(line, 2);
                assert_eq!(reason, "population cannot be negative");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let lenient = CsvCodec::new().with_validation(false).read(&path).unwrap();
        assert_eq!(lenient, vec![Country::new("A", -5, 10)]);
    }

    #[test]
    fn test_write_csv_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.csv");
        let countries = vec![
            Country::new("Test", 100, 200),
            Country::new("Bosnia, and Herzegovina", 3200000, 51197),
        ];

        CsvCodec::new().write(&path, &countries).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Name,Population,Area\nTest,100,200\n\"Bosnia, and Herzegovina\",3200000,51197\n"
        );
        assert_eq!(CsvCodec::new().read(&path).unwrap(), countries);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("out.csv");
        let err = CsvCodec::new()
            .write(&path, &[Country::new("A", 1, 1)])
            .unwrap_err();
        assert!(matches!(err, EtlError::IoError(_)));
    }
}
