pub mod config;
pub mod convert;
pub mod report;
pub mod utils;

pub use convert::{convert, ConvertError, DEFAULT_SOLANA_ADDRESS};
