// File: src/social.rs
//! Hashtags and tweet text for a generated haiku.

use crate::core::types::{Haiku, HaikuOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// The brand pair every share starts with.
pub const REQUIRED_HASHTAGS: [&str; 2] = ["#WrestlingCircleJerks", "#WrestlingHaiku"];
pub const MAX_OPTIONAL_HASHTAGS: usize = 2;
pub const TWEET_MAX_CHARS: usize = 280;

const FULL_SEPARATOR: &str = " / ";
const COMPACT_SEPARATOR: &str = " | ";

/// Static lookup from show, era and wrestler name to a contextual tag.
///
/// Built once at startup (the default, or a JSON file) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagTable {
    #[serde(default)]
    pub shows: HashMap<String, String>,
    #[serde(default)]
    pub eras: HashMap<String, String>,
    #[serde(default)]
    pub wrestlers: HashMap<String, String>,
}

fn table(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

impl Default for HashtagTable {
    fn default() -> Self {
        Self {
            shows: table(&[
                ("RAW", "#WWERAW"),
                ("SmackDown", "#SmackDown"),
                ("NXT", "#WWENXT"),
                ("WrestleMania", "#WrestleMania"),
                ("Royal Rumble", "#RoyalRumble"),
                ("SummerSlam", "#SummerSlam"),
                ("Survivor Series", "#SurvivorSeries"),
                ("Money in the Bank", "#MITB"),
            ]),
            eras: table(&[
                ("Attitude", "#AttitudeEra"),
                ("Ruthless Aggression", "#RuthlessAggression"),
                ("Reality", "#RealityEra"),
                ("PG", "#PGEra"),
                ("Tribal Chief", "#TribalChief"),
            ]),
            wrestlers: table(&[
                ("Roman Reigns", "#RomanReigns"),
                ("Seth Rollins", "#SethRollins"),
                ("Becky Lynch", "#BeckyLynch"),
                ("Daniel Bryan", "#DanielBryan"),
                ("Hulk Hogan", "#HulkHogan"),
                ("Steve Austin", "#StoneCold"),
            ]),
        }
    }
}

impl HashtagTable {
    /// Required pair first, then at most two contextual tags found by
    /// looking up show, era and the first requested wrestler, in that
    /// order. Keys match exactly; a repeated tag is kept once.
    pub fn build_hashtags(&self, options: &HaikuOptions) -> Vec<String> {
        let first_wrestler = options.wrestlers.as_ref().and_then(|names| names.first());
        let candidates = [
            options.show.as_ref().and_then(|show| self.shows.get(show)),
            options.era.as_ref().and_then(|era| self.eras.get(era)),
            first_wrestler.and_then(|name| self.wrestlers.get(name)),
        ];

        let mut optional: Vec<&String> = Vec::with_capacity(candidates.len());
        for tag in candidates.into_iter().flatten() {
            if !optional.contains(&tag) {
                optional.push(tag);
            }
        }
        optional.truncate(MAX_OPTIONAL_HASHTAGS);

        required_hashtags().into_iter().chain(optional.into_iter().cloned()).collect()
    }
}

/// [`HashtagTable::build_hashtags`] against the built-in table.
pub fn build_hashtags(options: &HaikuOptions) -> Vec<String> {
    HashtagTable::default().build_hashtags(options)
}

pub fn required_hashtags() -> Vec<String> {
    REQUIRED_HASHTAGS.iter().map(|tag| tag.to_string()).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TweetFormat {
    Compact,
    #[default]
    Full,
}

impl FromStr for TweetFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "full" => Ok(Self::Full),
            other => Err(format!("unknown tweet format '{other}'")),
        }
    }
}

/// Tweet-ready text, never longer than [`TWEET_MAX_CHARS`] characters.
///
/// Tries, in order: lines joined by `" / "` with a `— show • era` suffix
/// (full format only) and all `hashtags`; the same without the suffix;
/// the same with only the required tags; lines joined by `" | "` with
/// the required tags, cut to the limit if it still overflows.
pub fn build_tweet_text(haiku: &Haiku, options: &HaikuOptions, hashtags: &[String], format: TweetFormat) -> String {
    let body = haiku.joined(FULL_SEPARATOR);
    let tags = hashtags.join(" ");

    let context = match format {
        TweetFormat::Full => context_suffix(options),
        TweetFormat::Compact => String::new(),
    };
    let full = format!("{body}{context}\n{tags}");
    if fits(&full) {
        return full;
    }

    let no_context = format!("{body}\n{tags}");
    if fits(&no_context) {
        return no_context;
    }

    let required = required_hashtags().join(" ");
    let required_only = format!("{body}\n{required}");
    if fits(&required_only) {
        return required_only;
    }

    let compact = format!("{}\n{required}", haiku.joined(COMPACT_SEPARATOR));
    log::debug!("tweet text still over {TWEET_MAX_CHARS} characters, truncating");
    compact.chars().take(TWEET_MAX_CHARS).collect()
}

fn context_suffix(options: &HaikuOptions) -> String {
    let parts: Vec<&str> = [options.show.as_deref(), options.era.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!(" — {}", parts.join(" • "))
    }
}

fn fits(text: &str) -> bool {
    text.chars().count() <= TWEET_MAX_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn haiku(line1: &str, line2: &str, line3: &str) -> Haiku {
        Haiku { line1: line1.into(), line2: line2.into(), line3: line3.into(), seed: 1 }
    }

    fn options(show: Option<&str>, era: Option<&str>, wrestler: Option<&str>) -> HaikuOptions {
        HaikuOptions {
            show: show.map(String::from),
            era: era.map(String::from),
            wrestlers: wrestler.map(|w| vec![w.to_string()]),
            ..HaikuOptions::with_seed(1)
        }
    }

    #[test]
    fn show_tag_follows_required_pair() {
        assert_eq!(
            build_hashtags(&options(Some("RAW"), None, None)),
            ["#WrestlingCircleJerks", "#WrestlingHaiku", "#WWERAW"]
        );
    }

    #[test]
    fn at_most_two_optional_tags_in_lookup_order() {
        let tags = build_hashtags(&options(Some("SummerSlam"), Some("Attitude"), Some("Steve Austin")));
        assert_eq!(tags, ["#WrestlingCircleJerks", "#WrestlingHaiku", "#SummerSlam", "#AttitudeEra"]);
    }

    #[test]
    fn era_then_wrestler_when_show_is_unknown() {
        let tags = build_hashtags(&options(Some("Dynamite"), Some("PG"), Some("Becky Lynch")));
        assert_eq!(tags, ["#WrestlingCircleJerks", "#WrestlingHaiku", "#PGEra", "#BeckyLynch"]);
    }

    #[test]
    fn lookups_are_exact_and_only_the_first_wrestler_counts() {
        let opts = HaikuOptions {
            wrestlers: Some(vec!["roman reigns".into(), "Seth Rollins".into()]),
            show: Some("raw".into()),
            ..HaikuOptions::with_seed(1)
        };
        assert_eq!(build_hashtags(&opts), REQUIRED_HASHTAGS);
    }

    #[test]
    fn duplicate_tags_are_collapsed() {
        let mut custom = HashtagTable::default();
        custom.eras.insert("Tribal Chief".into(), "#RomanReigns".into());
        let tags = custom.build_hashtags(&options(None, Some("Tribal Chief"), Some("Roman Reigns")));
        assert_eq!(tags, ["#WrestlingCircleJerks", "#WrestlingHaiku", "#RomanReigns"]);
    }

    #[test]
    fn full_tweet_carries_context() {
        let h = haiku("Five Knuckle Shuffle", "John Cena steel chair table", "ladder title belt");
        let opts = options(Some("RAW"), Some("Attitude"), None);
        let tags = build_hashtags(&opts);
        assert_eq!(
            build_tweet_text(&h, &opts, &tags, TweetFormat::Full),
            "Five Knuckle Shuffle / John Cena steel chair table / ladder title belt — RAW • Attitude\n\
             #WrestlingCircleJerks #WrestlingHaiku #WWERAW #AttitudeEra"
        );
    }

    #[test]
    fn compact_format_skips_context() {
        let h = haiku("a", "b", "c");
        let opts = options(Some("RAW"), None, None);
        let tags = build_hashtags(&opts);
        assert_eq!(
            build_tweet_text(&h, &opts, &tags, TweetFormat::Compact),
            "a / b / c\n#WrestlingCircleJerks #WrestlingHaiku #WWERAW"
        );
    }

    #[test]
    fn long_context_is_dropped_first() {
        // 216 chars of haiku plus 63 of tags lands exactly on the limit.
        let line = "x".repeat(70);
        let h = haiku(&line, &line, &line);
        let opts = options(Some("Money in the Bank"), Some("Ruthless Aggression"), None);
        let tags = build_hashtags(&opts);
        let tweet = build_tweet_text(&h, &opts, &tags, TweetFormat::Full);
        assert_eq!(tweet, format!("{line} / {line} / {line}\n{}", tags.join(" ")));
        assert!(!tweet.contains('—'));
    }

    #[test]
    fn optional_tags_are_dropped_next() {
        let line = "y".repeat(74);
        let h = haiku(&line, &line, &line);
        let opts = options(Some("Survivor Series"), Some("Ruthless Aggression"), None);
        let tags = build_hashtags(&opts);
        let tweet = build_tweet_text(&h, &opts, &tags, TweetFormat::Full);
        assert_eq!(tweet, format!("{line} / {line} / {line}\n#WrestlingCircleJerks #WrestlingHaiku"));
        assert!(tweet.chars().count() <= TWEET_MAX_CHARS);
    }

    #[test]
    fn oversized_haiku_is_compacted_and_cut() {
        let line = "z".repeat(120);
        let h = haiku(&line, &line, &line);
        let opts = options(None, None, None);
        let tweet = build_tweet_text(&h, &opts, &required_hashtags(), TweetFormat::Full);
        assert_eq!(tweet.chars().count(), TWEET_MAX_CHARS);
        assert!(tweet.starts_with(&format!("{line} | ")));
    }

    #[test]
    fn tweet_format_parses() {
        assert_eq!("compact".parse::<TweetFormat>(), Ok(TweetFormat::Compact));
        assert_eq!("FULL".parse::<TweetFormat>(), Ok(TweetFormat::Full));
        assert!("thread".parse::<TweetFormat>().is_err());
    }
}
