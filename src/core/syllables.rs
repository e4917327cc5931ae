// src/core/syllables.rs

/// Letters that shield a trailing `e`/`es` from being treated as silent.
const SHIELDING: &[u8] = b"laeiouy";

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

/// Heuristic English syllable count. Always at least 1.
///
/// Not dictionary based. The steps are:
/// 1. lowercase and keep only `a-z`;
/// 2. three letters or fewer count as one syllable;
/// 3. drop a silent ending (`Xes`, `ed` or `Xe`, where X is not one of
///    `l a e i o u y`; the X goes with it);
/// 4. drop a leading `y`;
/// 5. count vowel groups, each group being one or two vowels;
/// 6. `-sm` adds one, `-les` takes one away.
pub fn count_syllables(word: &str) -> usize {
    let mut letters: Vec<u8> = word
        .to_lowercase()
        .bytes()
        .filter(u8::is_ascii_lowercase)
        .collect();

    if letters.len() <= 3 {
        return 1;
    }

    strip_silent_ending(&mut letters);
    if letters.first() == Some(&b'y') {
        letters.remove(0);
    }

    let groups = count_vowel_groups(&letters);
    if groups == 0 {
        return 1;
    }

    let mut syllables = groups;
    if letters.ends_with(b"sm") {
        syllables += 1;
    }
    if letters.ends_with(b"les") && letters.len() > 3 {
        syllables -= 1;
    }
    syllables.max(1)
}

/// Sum of [`count_syllables`] over whitespace-separated words.
/// Blank text counts as zero.
pub fn count_syllables_in_sentence(text: &str) -> usize {
    text.split_whitespace().map(count_syllables).sum()
}

// Only called with four or more letters.
fn strip_silent_ending(letters: &mut Vec<u8>) {
    let n = letters.len();
    let shielded = |i: usize| SHIELDING.contains(&letters[i]);

    let cut = if letters.ends_with(b"es") && !shielded(n - 3) {
        3
    } else if letters.ends_with(b"ed") {
        2
    } else if letters.ends_with(b"e") && !shielded(n - 2) {
        2
    } else {
        0
    };
    letters.truncate(n - cut);
}

/// Runs of vowels are consumed two at a time, so a run of three counts twice.
fn count_vowel_groups(letters: &[u8]) -> usize {
    let mut groups = 0;
    let mut bytes = letters.iter().copied().peekable();
    while let Some(b) = bytes.next() {
        if !is_vowel(b) {
            continue;
        }
        groups += 1;
        if bytes.peek().copied().is_some_and(is_vowel) {
            bytes.next();
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_are_one_syllable() {
        assert_eq!(count_syllables("a"), 1);
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("xyz"), 1);
        assert_eq!(count_syllables(""), 1);
        assert_eq!(count_syllables("RKO!"), 1);
    }

    #[test]
    fn counts_vowel_groups() {
        assert_eq!(count_syllables("wrestling"), 2);
        assert_eq!(count_syllables("championship"), 3);
        assert_eq!(count_syllables("stunner"), 2);
        assert_eq!(count_syllables("queue"), 2);
    }

    #[test]
    fn silent_endings_are_stripped() {
        assert_eq!(count_syllables("made"), 1);
        assert_eq!(count_syllables("hated"), 1);
        assert_eq!(count_syllables("stone"), 1);
        // `l` shields the final e.
        assert_eq!(count_syllables("people"), 2);
        assert_eq!(count_syllables("table"), 2);
    }

    #[test]
    fn ending_adjustments() {
        assert_eq!(count_syllables("socialism"), 4);
        assert_eq!(count_syllables("wrestles"), 1);
        assert_eq!(count_syllables("tables"), 1);
    }

    #[test]
    fn leading_y_and_y_as_vowel() {
        assert_eq!(count_syllables("yesterday"), 3);
        assert_eq!(count_syllables("rhythm"), 1);
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        assert_eq!(count_syllables("CHOKESLAM!!"), count_syllables("chokeslam"));
        assert_eq!(count_syllables("that's"), 1);
    }

    #[test]
    fn sentences_sum_their_words() {
        assert_eq!(count_syllables_in_sentence("Stone Cold"), 2);
        assert_eq!(count_syllables_in_sentence("  Five Knuckle   Shuffle "), 5);
        assert_eq!(count_syllables_in_sentence("Doctor of Thuganomics"), 7);
        assert_eq!(count_syllables_in_sentence(""), 0);
        assert_eq!(count_syllables_in_sentence(" \t "), 0);
    }
}
