//! Letter filtering.
//!
//! The alphabet recognized everywhere in the crate is the basic Latin
//! letters `a-z`/`A-Z` and the Cyrillic ranges `а-я`/`А-Я`. Anything else,
//! including digits, punctuation, whitespace and accented Latin letters,
//! is not a letter.

/// Returns true if `c` is a basic Latin or Cyrillic letter (either case).
///
/// Cyrillic coverage is the contiguous block `А..=я` (U+0410..=U+044F),
/// so `Ё`/`ё` are outside it.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{0410}'..='\u{044F}').contains(&c)
}

/// Strips every non-letter from a single line, keeping case and order.
pub fn letters_only(line: &str) -> String {
    line.chars().filter(|&c| is_letter(c)).collect()
}

/// Cleans an assembled candidate string.
///
/// Same filter as [`letters_only`]; kept as its own entry point because it
/// runs on a whole strategy output rather than on a line.
pub fn clean(raw: &str) -> String {
    letters_only(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_letter_latin_and_cyrillic() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(is_letter('а'));
        assert!(is_letter('Я'));
        assert!(is_letter('ж'));
    }

    #[test]
    fn test_is_letter_rejects_others() {
        assert!(!is_letter('1'));
        assert!(!is_letter(' '));
        assert!(!is_letter('!'));
        assert!(!is_letter('é'));
        assert!(!is_letter('ё'));
        assert!(!is_letter('Ё'));
        assert!(!is_letter('ß'));
    }

    #[test]
    fn test_letters_only_keeps_order_and_case() {
        assert_eq!(letters_only("Cat!"), "Cat");
        assert_eq!(letters_only("  12 Мир, world? "), "Мирworld");
        assert_eq!(letters_only("..."), "");
    }

    #[test]
    fn test_clean_is_subsequence() {
        let raw = "A-b c1Д";
        let cleaned = clean(raw);
        assert_eq!(cleaned, "AbcД");

        let mut rest = raw.chars();
        assert!(cleaned.chars().all(|c| rest.any(|r| r == c)));
    }
}
