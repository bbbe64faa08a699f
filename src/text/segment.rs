//! Line and sentence segmentation.

/// Characters that may end a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Whitespace as used for trimming and splitting.
///
/// Unicode white space plus the ASCII information separators
/// U+001C..=U+001F, which also separate words in plain text dumps.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trims [`is_space`] characters from both ends.
pub fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// True if `text` holds nothing but [`is_space`] characters.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_space)
}

/// Splits on runs of [`is_space`], skipping empty pieces.
pub fn split_space(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_space).filter(|word| !word.is_empty())
}

/// Splits text into trimmed, non-empty lines in source order.
pub fn segment_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(trim_space)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Splits text into sentences.
///
/// Newlines are first turned into spaces so a sentence may run across a
/// line break. A split happens wherever a terminator is immediately followed
/// by whitespace; the whitespace run is dropped. Pieces are trimmed and
/// returned even when empty or unterminated.
pub fn segment_sentences(text: &str) -> Vec<String> {
    let one_line = text.replace('\n', " ");

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = one_line.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        let at_boundary = is_space(c)
            && prev.is_some_and(|p| SENTENCE_TERMINATORS.contains(&p));

        if !at_boundary {
            prev = Some(c);
            continue;
        }

        sentences.push(trim_space(&one_line[start..pos]).to_string());

        // Consume the rest of the whitespace run
        let mut end = pos + c.len_utf8();
        while let Some(&(next_pos, next)) = chars.peek() {
            if !is_space(next) {
                break;
            }
            end = next_pos + next.len_utf8();
            chars.next();
        }
        start = end;
        prev = None;
    }

    sentences.push(trim_space(&one_line[start..]).to_string());
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_lines_drops_empty() {
        let lines = segment_lines("  Alpha \n\n   \nBeta\r\n\tGamma");
        assert_eq!(lines, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_segment_lines_empty_input() {
        assert!(segment_lines("").is_empty());
        assert!(segment_lines("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_segment_sentences_basic() {
        let sentences = segment_sentences("Hello world. Yes it works! Zebra runs.");
        assert_eq!(sentences, vec!["Hello world.", "Yes it works!", "Zebra runs."]);
    }

    #[test]
    fn test_segment_sentences_joins_lines() {
        let sentences = segment_sentences("One sentence\nacross lines. Next?\nLast");
        assert_eq!(
            sentences,
            vec!["One sentence across lines.", "Next?", "Last"]
        );
    }

    #[test]
    fn test_segment_sentences_no_split_without_whitespace() {
        // "3.14" and "e.g.x" have no whitespace after the dot
        let sentences = segment_sentences("Pi is 3.14 roughly. e.g.x works");
        assert_eq!(sentences, vec!["Pi is 3.14 roughly.", "e.g.x works"]);
    }

    #[test]
    fn test_segment_sentences_whitespace_run_consumed() {
        let sentences = segment_sentences("Stop.   \t Go!\n\nNow.");
        assert_eq!(sentences, vec!["Stop.", "Go!", "Now."]);
    }

    #[test]
    fn test_segment_sentences_trailing_separator() {
        let sentences = segment_sentences("Done. ");
        assert_eq!(sentences, vec!["Done.", ""]);
    }

    #[test]
    fn test_information_separators_are_space() {
        assert!(is_space('\u{1f}'));
        assert!(is_space('\u{1c}'));
        assert!(is_space('\u{a0}'));
        assert!(!is_space('\u{1b}'));
        assert_eq!(trim_space("\u{1f} word \u{1e}"), "word");
        assert!(is_blank(" \u{1d}\t"));
        assert_eq!(split_space("a\u{1f}b  c").collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_segment_handles_information_separators() {
        assert_eq!(segment_lines("\u{1f}Alpha\n\u{1c}\u{1d}\nBeta"), vec!["Alpha", "Beta"]);
        assert_eq!(segment_sentences("Stop.\u{1f}Go!"), vec!["Stop.", "Go!"]);
    }

    #[test]
    fn test_segment_sentences_cyrillic() {
        let sentences = segment_sentences("Привет, мир! Как дела? Хорошо.");
        assert_eq!(sentences, vec!["Привет, мир!", "Как дела?", "Хорошо."]);
    }

    #[test]
    fn test_segment_sentences_repeated_terminators() {
        let sentences = segment_sentences("Wait... What?! Ok");
        assert_eq!(sentences, vec!["Wait...", "What?!", "Ok"]);
    }
}
