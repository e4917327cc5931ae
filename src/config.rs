// File: src/config.rs
use serde::{Deserialize, Serialize};

const MAX_ATTEMPTS: usize = 200;
const MAX_WORDS_PER_LINE: usize = 6;

/// Knobs for the line assembler. `Default` is the shipped behaviour; seeded
/// output is only reproducible between engines sharing the same config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Shuffled walks tried per line before giving up.
    pub max_attempts: usize,
    pub max_words: usize,
    /// Substituted for a 5-syllable line nothing could fill.
    pub fallback_five: String,
    /// Substituted for a 7-syllable line nothing could fill.
    pub fallback_seven: String,
    pub empty_pool_filler: String,
    pub exhausted_filler: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            max_words: MAX_WORDS_PER_LINE,
            fallback_five: "creative has nothing".to_string(),
            fallback_seven: "the writers just gave up now".to_string(),
            empty_pool_filler: "the pool is empty".to_string(),
            exhausted_filler: "a swing and a miss".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// The fixed line for `target` syllables, if the target has one.
    pub fn fallback_for(&self, target: usize) -> Option<&str> {
        match target {
            5 => Some(&self.fallback_five),
            7 => Some(&self.fallback_seven),
            _ => None,
        }
    }

    /// True when `line` is one of the configured fallback or filler lines.
    pub fn is_fallback(&self, line: &str) -> bool {
        [
            &self.fallback_five,
            &self.fallback_seven,
            &self.empty_pool_filler,
            &self.exhausted_filler,
        ]
        .iter()
        .any(|fallback| fallback.as_str() == line)
    }
}
