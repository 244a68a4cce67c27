pub mod implementations;
pub mod lexicon;
pub mod stopwords;

pub use implementations::PatternPolarityEngine;
pub use lexicon::Lexicon;
pub use stopwords::StopwordSet;
