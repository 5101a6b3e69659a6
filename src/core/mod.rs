pub mod etl;
pub mod format;
pub mod pipeline;
pub mod query;

pub use crate::domain::model::{Country, InvalidRecord, LoadOutcome};
pub use crate::domain::ports::{ConfigProvider, CountryCodec, Pipeline};
pub use crate::utils::error::Result;
