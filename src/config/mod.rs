#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::query::FilterExpr;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_format, validate_non_empty_string, validate_required_field, Validate,
};

/// Settings for one run after merging the job file and command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: Option<String>,
    pub output: Option<String>,
    pub sort: Option<String>,
    pub filter: Option<String>,
    pub validate_records: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            sort: None,
            filter: None,
            validate_records: true,
        }
    }
}

impl RunConfig {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: Some(input.into()),
            ..Self::default()
        }
    }

    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            input: config.input.path.clone(),
            output: config.output.path.clone(),
            sort: config.query.sort.clone(),
            filter: config.query.filter.clone(),
            validate_records: config.validation.enforce,
        }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(field.into());
        self
    }

    pub fn with_filter(mut self, expression: impl Into<String>) -> Self {
        self.filter = Some(expression.into());
        self
    }

    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_records = enabled;
        self
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn sort_field(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    fn filter_expr(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    fn validate_records(&self) -> bool {
        self.validate_records
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        let input = validate_required_field("input", &self.input)?;
        validate_file_format("input", input)?;

        if let Some(output) = &self.output {
            validate_file_format("output", output)?;
        }

        if let Some(sort) = &self.sort {
            validate_non_empty_string("sort", sort)?;
        }

        if let Some(filter) = &self.filter {
            FilterExpr::parse(filter)?;
        }

        Ok(())
    }
}
