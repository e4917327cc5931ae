// src/core/mod.rs
pub mod engine;
pub mod line;
pub mod pool;
pub mod rng;
pub mod syllables;
pub mod types;
