pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{ConsoleWriter, CsvCodec, JsonCodec};
pub use crate::config::{RunConfig, TomlConfig};
pub use crate::core::{
    etl::EtlEngine,
    format::{codec_for, FileFormat},
    pipeline::CountryPipeline,
    query::{filter, sort, sort_in_place, Field, FilterExpr},
};
pub use crate::domain::model::{Country, InvalidRecord, LoadOutcome};
pub use crate::domain::ports::{ConfigProvider, CountryCodec, Pipeline};
pub use crate::utils::error::{EtlError, Result};
