pub mod core;
pub mod models;
pub mod pipelines;
pub mod reporting;

// Re-export core types
pub use crate::core::{LexiconConfig, SentimentError, SentimentLabel};

// Re-export the pipeline surface for easier access
pub use models::PatternPolarityEngine;
pub use pipelines::{
    AdvancedSentimentResult, Normalizer, PolarityEngine, PolarityScore, ReviewRow,
    SentimentAnalysisPipeline, SentimentAnalysisPipelineBuilder, SimpleSentimentResult,
};
pub use reporting::{BatchReport, SentimentChart};
