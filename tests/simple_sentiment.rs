use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sentiment_analyzer::pipelines::sentiment_analysis_pipeline::*;
use sentiment_analyzer::SentimentError;

fn neutral_engine() -> impl Fn(&str) -> anyhow::Result<PolarityScore> {
    |_: &str| Ok(PolarityScore::new(0.0, 0.0))
}

fn pipeline() -> anyhow::Result<SentimentAnalysisPipeline<impl PolarityEngine>> {
    SentimentAnalysisPipelineBuilder::new(neutral_engine()).build()
}

#[test]
fn empty_text_is_neutral() -> anyhow::Result<()> {
    let res = pipeline()?.score_simple("");
    assert_eq!(res.label, SentimentLabel::Neutral);
    assert_eq!(res.confidence, 50.0);
    assert_eq!(res.positive_count, 0);
    assert_eq!(res.negative_count, 0);
    Ok(())
}

#[test]
fn ascii_separators_count_as_whitespace() -> anyhow::Result<()> {
    let res = pipeline()?.score_simple("good\u{1c}great");
    assert_eq!(res.label, SentimentLabel::Positive);
    assert_eq!(res.positive_count, 2);
    assert_eq!(res.negative_count, 0);
    Ok(())
}

#[test]
fn positive_words_win() -> anyhow::Result<()> {
    let res = pipeline()?.score_simple("this is good great excellent");
    assert_eq!(res.label, SentimentLabel::Positive);
    assert_eq!(res.positive_count, 3);
    assert_eq!(res.negative_count, 0);
    assert_eq!(res.confidence, 75.0);
    Ok(())
}

#[test]
fn negative_words_win() -> anyhow::Result<()> {
    let res = pipeline()?.score_simple("bad terrible good");
    assert_eq!(res.label, SentimentLabel::Negative);
    assert_eq!(res.positive_count, 1);
    assert_eq!(res.negative_count, 2);
    assert_eq!(res.confidence, 50.0);
    Ok(())
}

#[test]
fn ties_have_fixed_confidence() -> anyhow::Result<()> {
    let pipeline = pipeline()?;
    let res = pipeline.score_simple("good bad");
    assert_eq!(res.label, SentimentLabel::Neutral);
    assert_eq!(res.confidence, 50.0);
    assert_eq!((res.positive_count, res.negative_count), (1, 1));

    let res = pipeline.score_simple("love best hate worst");
    assert_eq!(res.label, SentimentLabel::Neutral);
    assert_eq!(res.confidence, 50.0);
    Ok(())
}

#[test]
fn punctuation_and_case_do_not_hide_words() -> anyhow::Result<()> {
    let res = pipeline()?.score_simple("GOOD!!! Great. 10/10");
    assert_eq!(res.label, SentimentLabel::Positive);
    assert_eq!(res.positive_count, 2);
    assert!((res.confidence - 200.0 / 3.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn repeated_words_count_every_time() -> anyhow::Result<()> {
    let res = pipeline()?.score_simple("good good good, bad bad");
    assert_eq!(res.label, SentimentLabel::Positive);
    assert_eq!((res.positive_count, res.negative_count), (3, 2));
    assert_eq!(res.confidence, 50.0);
    Ok(())
}

#[test]
fn custom_stopwords_can_hide_lexicon_words() -> anyhow::Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::new(neutral_engine())
        .stopwords(["good"])
        .build()?;
    let res = pipeline.score_simple("good good bad");
    assert_eq!(res.label, SentimentLabel::Negative);
    assert_eq!(res.confidence, 50.0);
    Ok(())
}

#[test]
fn shared_term_counts_toward_both_sides() -> anyhow::Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::new(neutral_engine())
        .positive_terms(["fine", "good"])
        .negative_terms(["fine", "bad"])
        .build()?;
    let res = pipeline.score_simple("fine");
    assert_eq!((res.positive_count, res.negative_count), (1, 1));
    assert_eq!(res.label, SentimentLabel::Neutral);

    let res = pipeline.score_simple("fine good");
    assert_eq!(res.label, SentimentLabel::Positive);
    assert!((res.confidence - 200.0 / 4.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn invalid_terms_fail_to_build() {
    let err = SentimentAnalysisPipelineBuilder::new(neutral_engine())
        .positive_terms(["good", "5-star"])
        .build()
        .err()
        .expect("build should fail");
    match err.downcast_ref::<SentimentError>() {
        Some(SentimentError::InvalidTerm { term }) => assert_eq!(term, "5-star"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn random_text_always_yields_a_valid_result() -> anyhow::Result<()> {
    const WORDS: &[&str] = &[
        "good", "bad", "great", "awful", "the", "not", "product", "LOVE", "Hate!", "42", "café",
        "  ", "\n", "...", "waste", "perfect", "ÉTÉ",
    ];
    let pipeline = pipeline()?;
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..500 {
        let len = rng.random_range(0..30);
        let text = (0..len)
            .map(|_| WORDS[rng.random_range(0..WORDS.len())])
            .collect::<Vec<_>>()
            .join(" ");

        let res = pipeline.score_simple(&text);
        assert!((0.0..=100.0).contains(&res.confidence), "{text:?} -> {res:?}");
        assert!(matches!(
            res.label,
            SentimentLabel::Positive | SentimentLabel::Negative | SentimentLabel::Neutral
        ));
        assert_eq!(pipeline.score_simple(&text), res, "scoring must be idempotent");
    }
    Ok(())
}
