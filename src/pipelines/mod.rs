pub mod sentiment_analysis_pipeline;
pub mod utils;

pub use sentiment_analysis_pipeline::{
    truncate_review, AdvancedSentimentResult, PolarityEngine, PolarityScore, ReviewRow,
    SentimentAnalysisPipeline, SentimentAnalysisPipelineBuilder, SimpleSentimentResult,
};
pub use utils::Normalizer;
