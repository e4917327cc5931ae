// src/core/line.rs
use crate::config::GeneratorConfig;
use crate::core::rng::{comparator_shuffle, Mulberry32};
use crate::core::syllables::count_syllables_in_sentence;
use crate::core::types::TermPool;

/// Fills single lines to an exact syllable count by randomized search.
pub struct LineAssembler<'c> {
    config: &'c GeneratorConfig,
}

impl<'c> LineAssembler<'c> {
    pub fn new(config: &'c GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns a phrase of at most `max_words` pool terms whose syllables sum
    /// to exactly `target`, or the configured fallback line.
    ///
    /// Each attempt shuffles the pool with [`comparator_shuffle`] and walks
    /// it greedily, taking every term that still fits the budget. Attempts
    /// share `rng`, so the result depends on every draw made before it.
    pub fn generate_line(&self, target: usize, rng: &mut Mulberry32, pool: &TermPool) -> String {
        if pool.is_empty() {
            log::debug!("empty pool, falling back for a {target}-syllable line");
            return self.fallback(target, &self.config.empty_pool_filler);
        }

        for attempt in 0..self.config.max_attempts {
            if let Some(line) = self.attempt(target, rng, pool) {
                log::trace!("{target}-syllable line found on attempt {}", attempt + 1);
                return line;
            }
        }

        log::debug!(
            "no {target}-syllable line after {} attempts over {} terms",
            self.config.max_attempts,
            pool.len()
        );
        self.fallback(target, &self.config.exhausted_filler)
    }

    fn attempt(&self, target: usize, rng: &mut Mulberry32, pool: &TermPool) -> Option<String> {
        let shuffled = comparator_shuffle(pool.terms(), rng);
        let mut words: Vec<&str> = Vec::with_capacity(self.config.max_words);
        let mut syllables = 0;

        for term in &shuffled {
            if words.len() >= self.config.max_words {
                break;
            }
            let count = count_syllables_in_sentence(term);
            if count == 0 || count > target || syllables + count > target {
                continue;
            }
            words.push(term);
            syllables += count;
            if syllables == target {
                return Some(words.join(" ").trim().to_string());
            }
        }
        None
    }

    fn fallback(&self, target: usize, filler: &str) -> String {
        self.config.fallback_for(target).unwrap_or(filler).to_string()
    }
}
