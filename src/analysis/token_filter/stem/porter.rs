//! Porter stemming algorithm implementation.
//!
//! The classic five-step Porter algorithm, operating on lower-cased ASCII
//! words:
//! 1. Plurals and -ed/-ing suffixes, terminal y → i
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and reduce -ll
//!
//! Words shorter than three characters are returned unchanged; words
//! containing non-ASCII characters are only lower-cased.
//!
//! # Examples
//!
//! ```
//! use stembayes::analysis::token_filter::stem::{PorterStemmer, Stemmer};
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("Inspiring"), "inspir");
//! assert_eq!(stemmer.stem("relational"), "relat");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const STEP2_SUFFIXES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP3_SUFFIXES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    fn is_vowel(byte: u8) -> bool {
        matches!(byte, b'a' | b'e' | b'i' | b'o' | b'u')
    }

    /// Consonant flag of every byte, computed in one forward pass.
    ///
    /// `y` is a consonant at the start of a word or after a vowel.
    fn consonant_flags(word: &[u8]) -> Vec<bool> {
        let mut flags: Vec<bool> = Vec::with_capacity(word.len());
        for (i, &byte) in word.iter().enumerate() {
            let consonant = match byte {
                b'y' => i == 0 || !flags[i - 1],
                _ => !Self::is_vowel(byte),
            };
            flags.push(consonant);
        }
        flags
    }

    /// Check if the byte at `pos` acts as a consonant.
    ///
    /// Walks back over a run of `y`s only, whose flags alternate.
    fn is_consonant(word: &[u8], pos: usize) -> bool {
        if word[pos] != b'y' {
            return !Self::is_vowel(word[pos]);
        }

        let mut start = pos;
        while start > 0 && word[start - 1] == b'y' {
            start -= 1;
        }
        let first_is_consonant = start == 0 || Self::is_vowel(word[start - 1]);
        first_is_consonant == ((pos - start) % 2 == 0)
    }

    /// Number of vowel-consonant sequences in `word`.
    fn measure(word: &[u8]) -> usize {
        let flags = Self::consonant_flags(word);
        let len = flags.len();
        let mut m = 0;
        let mut i = 0;

        while i < len && flags[i] {
            i += 1;
        }

        loop {
            while i < len && !flags[i] {
                i += 1;
            }
            if i >= len {
                return m;
            }
            while i < len && flags[i] {
                i += 1;
            }
            m += 1;
        }
    }

    fn contains_vowel(word: &[u8]) -> bool {
        Self::consonant_flags(word).iter().any(|consonant| !consonant)
    }

    fn ends_with_double_consonant(word: &[u8]) -> bool {
        let len = word.len();
        len >= 2 && word[len - 1] == word[len - 2] && Self::is_consonant(word, len - 1)
    }

    /// Consonant-vowel-consonant ending where the last consonant is not w, x or y.
    fn ends_cvc(word: &[u8]) -> bool {
        let len = word.len();
        len >= 3
            && Self::is_consonant(word, len - 1)
            && !Self::is_consonant(word, len - 2)
            && Self::is_consonant(word, len - 3)
            && !matches!(word[len - 1], b'w' | b'x' | b'y')
    }

    fn replace_suffix(word: &mut Vec<u8>, suffix: &str, replacement: &str) {
        word.truncate(word.len() - suffix.len());
        word.extend_from_slice(replacement.as_bytes());
    }

    fn step1a(word: &mut Vec<u8>) {
        if word.ends_with(b"sses") || word.ends_with(b"ies") {
            word.truncate(word.len() - 2);
        } else if word.ends_with(b"s") && !word.ends_with(b"ss") {
            word.pop();
        }
    }

    fn step1b(word: &mut Vec<u8>) {
        if word.ends_with(b"eed") {
            if Self::measure(&word[..word.len() - 3]) > 0 {
                word.pop();
            }
            return;
        }

        let suffix_len = if word.ends_with(b"ed") && Self::contains_vowel(&word[..word.len() - 2])
        {
            2
        } else if word.ends_with(b"ing") && Self::contains_vowel(&word[..word.len() - 3]) {
            3
        } else {
            return;
        };
        word.truncate(word.len() - suffix_len);

        if word.ends_with(b"at") || word.ends_with(b"bl") || word.ends_with(b"iz") {
            word.push(b'e');
        } else if Self::ends_with_double_consonant(word)
            && !matches!(word.last(), Some(b'l') | Some(b's') | Some(b'z'))
        {
            word.pop();
        } else if Self::measure(word) == 1 && Self::ends_cvc(word) {
            word.push(b'e');
        }
    }

    fn step1c(word: &mut [u8]) {
        let len = word.len();
        if word.ends_with(b"y") && Self::contains_vowel(&word[..len - 1]) {
            word[len - 1] = b'i';
        }
    }

    /// Replace the first matching suffix when the remaining stem has measure > 0.
    fn replace_first_match(word: &mut Vec<u8>, table: &[(&str, &str)]) {
        if let Some((suffix, replacement)) = table
            .iter()
            .find(|(suffix, _)| word.ends_with(suffix.as_bytes()))
            && Self::measure(&word[..word.len() - suffix.len()]) > 0
        {
            Self::replace_suffix(word, suffix, replacement);
        }
    }

    fn step4(word: &mut Vec<u8>) {
        let matched = STEP4_SUFFIXES.iter().find(|suffix| {
            if !word.ends_with(suffix.as_bytes()) {
                return false;
            }
            if **suffix == "ion" {
                let stem = &word[..word.len() - 3];
                return matches!(stem.last(), Some(b's') | Some(b't'));
            }
            true
        });

        if let Some(suffix) = matched {
            let stem_len = word.len() - suffix.len();
            if Self::measure(&word[..stem_len]) > 1 {
                word.truncate(stem_len);
            }
        }
    }

    fn step5(word: &mut Vec<u8>) {
        if word.ends_with(b"e") {
            let stem = &word[..word.len() - 1];
            let m = Self::measure(stem);
            if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                word.pop();
            }
        }

        if word.ends_with(b"ll") && Self::measure(word) > 1 {
            word.pop();
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if word.chars().count() < 3 {
            return word.to_string();
        }
        let lowered = word.to_lowercase();
        if !lowered.is_ascii() {
            return lowered;
        }

        let mut bytes = lowered.into_bytes();
        Self::step1a(&mut bytes);
        Self::step1b(&mut bytes);
        Self::step1c(&mut bytes);
        Self::replace_first_match(&mut bytes, STEP2_SUFFIXES);
        Self::replace_first_match(&mut bytes, STEP3_SUFFIXES);
        Self::step4(&mut bytes);
        Self::step5(&mut bytes);

        // Only ASCII bytes were removed or appended.
        String::from_utf8_lossy(&bytes).into_owned()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("caresses"), "caress");
        assert_eq!(stemmer.stem("ponies"), "poni");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("feed"), "feed");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("plastered"), "plaster");
        assert_eq!(stemmer.stem("motoring"), "motor");
        assert_eq!(stemmer.stem("sing"), "sing");
        assert_eq!(stemmer.stem("conflated"), "conflat");
        assert_eq!(stemmer.stem("hopping"), "hop");
        assert_eq!(stemmer.stem("filing"), "file");
        assert_eq!(stemmer.stem("happy"), "happi");
        assert_eq!(stemmer.stem("sky"), "sky");
        assert_eq!(stemmer.stem("relational"), "relat");
        assert_eq!(stemmer.stem("conditional"), "condit");
        assert_eq!(stemmer.stem("generalization"), "gener");
    }

    #[test]
    fn test_short_and_non_ascii_words() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("I"), "I");
        assert_eq!(stemmer.stem("Is"), "Is");
        assert_eq!(stemmer.stem("CAT"), "cat");
        assert_eq!(stemmer.stem("Cafés"), "cafés");
    }

    #[test]
    fn test_long_run_of_y() {
        let stemmer = PorterStemmer::new();
        let word = format!("{}ing", "y".repeat(200_000));

        let stem = stemmer.stem(&word);

        assert!(stem.len() <= 200_000);
        assert!(stem.starts_with("yyyy"));
    }

    #[test]
    fn test_consonant_flags_match_per_position_check() {
        for word in [&b"syzygy"[..], b"yyyyy", b"toy", b"layer", b"ayyyb"] {
            let flags = PorterStemmer::consonant_flags(word);
            for (pos, flag) in flags.iter().enumerate() {
                assert_eq!(*flag, PorterStemmer::is_consonant(word, pos));
            }
        }
        assert_eq!(
            PorterStemmer::consonant_flags(b"yyyy"),
            vec![true, false, true, false]
        );
    }

    #[test]
    fn test_porter_measure() {
        assert_eq!(PorterStemmer::measure(b"tree"), 0);
        assert_eq!(PorterStemmer::measure(b"trees"), 1);
        assert_eq!(PorterStemmer::measure(b"trouble"), 1);
        assert_eq!(PorterStemmer::measure(b"troubles"), 2);
    }

    #[test]
    fn test_porter_consonant_detection() {
        let word = b"toy";

        assert!(PorterStemmer::is_consonant(word, 0)); // t
        assert!(!PorterStemmer::is_consonant(word, 1)); // o
        assert!(PorterStemmer::is_consonant(word, 2)); // y after a vowel
        assert!(PorterStemmer::is_consonant(b"yes", 0));
        assert!(!PorterStemmer::is_consonant(b"syzygy", 1));
    }
}
