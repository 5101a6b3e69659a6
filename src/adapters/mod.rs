// Adapters layer: concrete readers/writers for the persisted formats and the console.

pub mod console;
pub mod csv_codec;
pub mod json_codec;

pub use console::ConsoleWriter;
pub use csv_codec::CsvCodec;
pub use json_codec::JsonCodec;
