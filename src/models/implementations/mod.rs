pub mod pattern;

pub use pattern::PatternPolarityEngine;
