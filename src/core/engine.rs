use crate::config::GeneratorConfig;
use crate::core::line::LineAssembler;
use crate::core::pool::build_pool;
use crate::core::rng::Mulberry32;
use crate::core::types::{Haiku, HaikuOptions, Lexicon};
use crate::error::{HaikuError, Result};
use crate::persistence::{load_bundle, load_lexicon_dir};
use std::path::Path;

const LINE_TARGETS: [usize; 3] = [5, 7, 5];
const CHAOS_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

// The engine owns one read-only lexicon and hands out fresh haikus.
// Nothing is cached between calls.
pub struct HaikuEngine {
    lexicon: Lexicon,
    config: GeneratorConfig,
}

impl HaikuEngine {
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_config(lexicon, GeneratorConfig::default())
    }

    pub fn with_config(lexicon: Lexicon, config: GeneratorConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn from_data_dir(dir: &Path) -> Result<Self> {
        load_lexicon_dir(dir).map(Self::new)
    }

    pub fn from_bundle(path: &Path) -> Result<Self> {
        load_bundle(path).map(Self::new)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// One haiku for `options`. The seed drives every random draw, and the
    /// three lines share a single generator in order 5, 7, 5.
    pub fn generate(&self, options: &HaikuOptions) -> Result<Haiku> {
        compose(&self.lexicon, &self.config, options)
    }

    /// `count` haikus seeded `seed`, `seed + 1`, ... with the other options fixed.
    pub fn generate_batch(&self, options: &HaikuOptions, count: usize) -> Result<Vec<Haiku>> {
        let base = validate(options)?;
        (0..count as i64)
            .map(|i| {
                let options = HaikuOptions { seed: Some(base.wrapping_add(i)), ..options.clone() };
                self.generate(&options)
            })
            .collect()
    }
}

/// Generates one haiku against a borrowed lexicon with the default config.
pub fn generate_haiku(options: &HaikuOptions, lexicon: &Lexicon) -> Result<Haiku> {
    compose(lexicon, &GeneratorConfig::default(), options)
}

fn compose(lexicon: &Lexicon, config: &GeneratorConfig, options: &HaikuOptions) -> Result<Haiku> {
    let seed = validate(options)?;
    let mut rng = Mulberry32::from_seed(seed);
    let pool = build_pool(lexicon, options);
    let assembler = LineAssembler::new(config);

    let [line1, line2, line3] = LINE_TARGETS.map(|target| assembler.generate_line(target, &mut rng, &pool));
    Ok(Haiku { line1, line2, line3, seed })
}

fn validate(options: &HaikuOptions) -> Result<i64> {
    if let Some(chaos) = options.chaos {
        if !CHAOS_RANGE.contains(&chaos) {
            return Err(HaikuError::InvalidChaos(chaos));
        }
    }
    options.seed.ok_or(HaikuError::MissingSeed)
}
