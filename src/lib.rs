pub mod cli;
pub mod converter;
pub mod error;
pub mod fallback;
pub mod request;
pub mod runner;

pub use cli::Args;
pub use converter::Converter;
pub use error::{ConvertError, RunError};
pub use request::{CodecSettings, ConversionRequest};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
