// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// One wrestler entry from the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrestler {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub finishers: Vec<String>,
    #[serde(default)]
    pub catchphrases: Vec<String>,
    /// Carried for completeness; factions never reach the term pool.
    #[serde(default)]
    pub factions: Vec<String>,
    #[serde(default)]
    pub era: String,
}

/// Read-only reference data the engine draws its terms from.
/// Any of the collections may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(default)]
    pub wrestlers: Vec<Wrestler>,
    #[serde(default)]
    pub eras: Vec<String>,
    #[serde(default)]
    pub shows: Vec<String>,
    #[serde(default)]
    pub tropes: Vec<String>,
    #[serde(default)]
    pub objects: Vec<String>,
    #[serde(default)]
    pub pivots: Vec<String>,
}

/// Requested voice of a haiku.
///
/// Reserved: accepted and echoed back, but generation does not read it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Deadpan,
    Nostalgic,
    Petty,
    Absurdist,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Deadpan, Tone::Nostalgic, Tone::Petty, Tone::Absurdist];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Deadpan => "deadpan",
            Tone::Nostalgic => "nostalgic",
            Tone::Petty => "petty",
            Tone::Absurdist => "absurdist",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown tone '{s}'"))
    }
}

/// Everything a caller can ask of one generation call.
///
/// `match_type`, `tone` and `chaos` are reserved extension points: they are
/// validated and echoed in output records, but do not change the lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HaikuOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrestlers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<String>,
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chaos: Option<f64>,
    /// The only source of randomness. Generation refuses to run without it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl HaikuOptions {
    pub fn with_seed(seed: i64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    /// Requested wrestler filters, ignoring an explicitly empty list.
    pub fn requested_wrestlers(&self) -> Option<&[String]> {
        self.wrestlers.as_deref().filter(|names| !names.is_empty())
    }
}

/// A generated poem. Plain value, no identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Haiku {
    pub line1: String,
    pub line2: String,
    pub line3: String,
    pub seed: i64,
}

impl Haiku {
    pub fn lines(&self) -> [&str; 3] {
        [&self.line1, &self.line2, &self.line3]
    }

    /// The three lines joined with `separator`, e.g. `" / "`.
    pub fn joined(&self, separator: &str) -> String {
        self.lines().join(separator)
    }
}

/// Deduplicated, order-preserving candidate terms for line assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermPool {
    terms: Vec<String>,
}

impl TermPool {
    /// Keeps the first occurrence of each term and drops empty strings.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for term in terms {
            let term = term.into();
            if term.is_empty() || !seen.insert(term.clone()) {
                continue;
            }
            kept.push(term);
        }
        Self { terms: kept }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }
}
