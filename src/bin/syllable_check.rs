// Minimal harness for the syllable heuristic
// Run with: cargo run --bin syllable_check -- [words...]
// src/bin/syllable_check.rs
use haiku_core::{count_syllables, count_syllables_in_sentence};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let test_cases: Vec<String> = if args.is_empty() {
        [
            "a", "the", "wrestling", "championship", "chokeslam", "people", "tables",
            "socialism", "yesterday", "rhythm", "queue", "Stone Cold", "Five Knuckle Shuffle",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    } else {
        args
    };

    for text in &test_cases {
        if text.split_whitespace().nth(1).is_some() {
            println!("{} => {} (sentence)", text, count_syllables_in_sentence(text));
        } else {
            println!("{} => {}", text, count_syllables(text));
        }
    }
}
