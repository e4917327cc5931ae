// src/lib.rs
//! Deterministic 5-7-5 wrestling haiku from a lexicon and a seed, plus the
//! hashtags and tweet text to share them.

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod social;

pub use crate::config::GeneratorConfig;
pub use crate::core::engine::{generate_haiku, HaikuEngine};
pub use crate::core::syllables::{count_syllables, count_syllables_in_sentence};
pub use crate::core::types::{Haiku, HaikuOptions, Lexicon, TermPool, Tone, Wrestler};
pub use crate::error::{HaikuError, Result};
pub use crate::social::{build_hashtags, build_tweet_text, HashtagTable, TweetFormat};
