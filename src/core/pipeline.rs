use crate::adapters::ConsoleWriter;
use crate::core::format::{codec_for, FileFormat};
use crate::core::query::{self, Field, FilterExpr};
use crate::core::{ConfigProvider, Country, LoadOutcome, Pipeline};
use crate::utils::error::Result;
use std::cell::RefCell;
use std::io::Write;
use std::path::Path;

/// Reads the configured input, filters and sorts it, then writes it to a file or the console.
pub struct CountryPipeline<C: ConfigProvider, W: Write> {
    config: C,
    console: RefCell<ConsoleWriter<W>>,
}

impl<C: ConfigProvider, W: Write> CountryPipeline<C, W> {
    pub fn new(config: C, console: W) -> Self {
        Self {
            config,
            console: RefCell::new(ConsoleWriter::new(console)),
        }
    }

    pub fn into_console(self) -> W {
        self.console.into_inner().into_inner()
    }
}

impl<C: ConfigProvider> CountryPipeline<C, std::io::Stdout> {
    pub fn with_stdout(config: C) -> Self {
        Self::new(config, std::io::stdout())
    }
}

impl<C: ConfigProvider, W: Write> Pipeline for CountryPipeline<C, W> {
    fn extract(&self) -> Result<Vec<Country>> {
        let input = self.config.input_path();
        tracing::debug!(
            "Reading {} input from {}",
            FileFormat::from_path(input),
            input
        );

        let codec = codec_for(input, self.config.validate_records())?;
        codec.read(Path::new(input))
    }

    fn transform(&self, data: Vec<Country>) -> Result<Vec<Country>> {
        let mut countries = data;

        if let Some(expression) = self.config.filter_expr() {
            let filter = FilterExpr::parse(expression)?;
            countries = filter.apply(&countries);
            tracing::debug!(
                "Filter {} kept {} records",
                expression,
                countries.len()
            );
        }

        if let Some(field) = self.config.sort_field() {
            if Field::parse(field).is_none() {
                tracing::warn!("Unknown sort field '{}', sorting by name", field);
            }
            countries = query::sort(&countries, field);
        }

        Ok(countries)
    }

    fn load(&self, data: Vec<Country>) -> Result<LoadOutcome> {
        match self.config.output_path() {
            Some(output) => {
                let codec = codec_for(output, self.config.validate_records())?;
                codec.write(Path::new(output), &data)?;
                Ok(LoadOutcome::File {
                    path: output.to_string(),
                    format: FileFormat::from_path(output),
                    records: data.len(),
                })
            }
            None => {
                self.console.borrow_mut().write_countries(&data)?;
                Ok(LoadOutcome::Console {
                    records: data.len(),
                })
            }
        }
    }
}
