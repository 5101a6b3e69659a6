use crate::core::{LoadOutcome, Pipeline};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<LoadOutcome> {
        tracing::info!("Starting ETL process...");

        let raw_data = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", raw_data.len());

        let transformed = self.pipeline.transform(raw_data)?;
        tracing::info!("Transformed down to {} records", transformed.len());

        let outcome = self.pipeline.load(transformed)?;
        match &outcome {
            LoadOutcome::File {
                path,
                format,
                records,
            } => {
                tracing::info!("Wrote {} records to {} as {}", records, path, format)
            }
            LoadOutcome::Console { records } => {
                tracing::info!("Printed {} records", records)
            }
        }

        Ok(outcome)
    }

    pub fn into_pipeline(self) -> P {
        self.pipeline
    }
}
