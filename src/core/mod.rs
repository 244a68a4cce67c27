pub mod config;
pub mod error;
pub mod label;

pub use config::LexiconConfig;
pub use error::SentimentError;
pub use label::SentimentLabel;
