use anyhow::Result;
use sentiment_analyzer::pipelines::sentiment_analysis_pipeline::*;
use sentiment_analyzer::reporting::DEFAULT_CHART_PATH;

const REVIEWS: &[&str] = &[
    "This product is amazing! Best purchase I've made all year.",
    "Terrible quality. It broke after two days, complete waste of money.",
    "It's okay, does what it says on the box.",
    "I love the design but the battery life is disappointing.",
    "Excellent customer service and really fast shipping.",
    "Worst experience ever, I hate dealing with this company.",
    "The instructions were clear and setup took ten minutes.",
    "Great value for the price, very happy with it.",
];

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("Building pipeline...");
    let pipeline = SentimentAnalysisPipelineBuilder::pattern().build()?;
    println!("Pipeline built successfully.");

    let text = REVIEWS[0];
    let simple = pipeline.score_simple(text);
    let advanced = pipeline.score_advanced(text)?;

    println!("\n=== Single Review ===");
    println!("Text: \"{}\"", text);
    println!(
        "Simple:   {} (confidence: {:.1}%, +{} / -{})",
        simple.label, simple.confidence, simple.positive_count, simple.negative_count
    );
    println!(
        "Advanced: {} (polarity: {:.3}, confidence: {:.1}%, subjectivity: {:.3})",
        advanced.label, advanced.polarity, advanced.confidence, advanced.subjectivity
    );

    let report = pipeline.analyze_reviews(REVIEWS)?;
    println!("\n{report}");

    println!("=== Rows ===");
    println!("{}", report.to_json()?);

    pipeline.visualize(REVIEWS, DEFAULT_CHART_PATH)?;
    println!("\nSaved visualization as '{DEFAULT_CHART_PATH}'");

    Ok(())
}
