use crate::config::{RunConfig, TomlConfig};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "country-etl")]
#[command(about = "Load country records from CSV or JSON, filter, sort and write them out")]
pub struct CliConfig {
    /// Path to input file (.csv or .json)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Path to output file (.csv or .json); prints to the console when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Field to sort by, largest first (name, population, area)
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Filter as field=value, e.g. area=1000000 keeps areas of at least 1000000
    #[arg(short, long)]
    pub filter: Option<String>,

    /// TOML job file; flags given on the command line take precedence
    #[arg(short, long)]
    pub config: Option<String>,

    /// Accept records with an empty name or negative numbers
    #[arg(long)]
    pub no_validate: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Builds the run settings, loading the job file first when one is given.
    pub fn to_run_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading job file {}", path);
                RunConfig::from_toml(&TomlConfig::from_file(path)?)
            }
            None => RunConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input = Some(input.clone());
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        if let Some(sort) = &self.sort {
            config.sort = Some(sort.clone());
        }
        if let Some(filter) = &self.filter {
            config.filter = Some(filter.clone());
        }
        if self.no_validate {
            config.validate_records = false;
        }

        Ok(config)
    }
}
