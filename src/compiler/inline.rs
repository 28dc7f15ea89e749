//! Inline emphasis parsing.
//!
//! A line is scanned left to right with two independent toggles. `**`,
//! `__` and the mixed pairs flip bold; a lone `*` or `_` flips italic.
//! Toggles do not nest and are never closed automatically, so an
//! unmatched delimiter styles the rest of the line.

use crate::model::Run;

fn is_delimiter(c: char) -> bool {
    c == '*' || c == '_'
}

/// Two-flag emphasis automaton with a pending text buffer.
#[derive(Debug, Default)]
struct Emphasis {
    bold: bool,
    italic: bool,
    buffer: String,
    runs: Vec<Run>,
}

impl Emphasis {
    /// Emit the buffer as a run with the current flags. Empty buffers emit nothing.
    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            self.runs.push(Run::new(text, self.bold, self.italic));
        }
    }

    fn toggle_bold(&mut self) {
        self.flush();
        self.bold = !self.bold;
    }

    fn toggle_italic(&mut self) {
        self.flush();
        self.italic = !self.italic;
    }

    fn finish(mut self) -> Vec<Run> {
        self.flush();
        self.runs
    }
}

/// Parse one line of text into styled runs.
///
/// # Example
///
/// ```
/// use mdocx::compiler::parse_inline;
///
/// let runs = parse_inline("Hello **world**");
/// assert_eq!(runs.len(), 2);
/// assert!(runs[1].bold);
/// ```
pub fn parse_inline(line: &str) -> Vec<Run> {
    let mut state = Emphasis::default();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if !is_delimiter(c) {
            state.buffer.push(c);
            continue;
        }

        if chars.peek().copied().is_some_and(is_delimiter) {
            chars.next();
            state.toggle_bold();
        } else {
            state.toggle_italic();
        }
    }

    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_single_run() {
        let runs = parse_inline("Just a sentence, with punctuation.");
        assert_eq!(runs, vec![Run::plain("Just a sentence, with punctuation.")]);
    }

    #[test]
    fn test_bold() {
        assert_eq!(parse_inline("**a**"), vec![Run::bold("a")]);
        assert_eq!(parse_inline("__a__"), vec![Run::bold("a")]);
    }

    #[test]
    fn test_italic() {
        assert_eq!(parse_inline("*a*"), vec![Run::italic("a")]);
        assert_eq!(parse_inline("_a_"), vec![Run::italic("a")]);
    }

    #[test]
    fn test_mixed_line() {
        let runs = parse_inline("Hello **world** and *you*!");
        assert_eq!(
            runs,
            vec![
                Run::plain("Hello "),
                Run::bold("world"),
                Run::plain(" and "),
                Run::italic("you"),
                Run::plain("!"),
            ]
        );
    }

    #[test]
    fn test_unmatched_delimiter_stays_open() {
        assert_eq!(parse_inline("*abc"), vec![Run::italic("abc")]);
        assert_eq!(
            parse_inline("a **b c"),
            vec![Run::plain("a "), Run::bold("b c")]
        );
    }

    #[test]
    fn test_mixed_delimiter_pair_is_bold() {
        assert_eq!(parse_inline("*_a_*"), vec![Run::bold("a")]);
    }

    #[test]
    fn test_triple_delimiter() {
        // `**` then `*` open; `**` closes bold, trailing `*` closes italic.
        assert_eq!(parse_inline("***a***"), vec![Run::new("a", true, true)]);
    }

    #[test]
    fn test_snake_case_words_toggle_italic() {
        assert_eq!(
            parse_inline("a_b_c"),
            vec![Run::plain("a"), Run::italic("b"), Run::plain("c")]
        );
    }

    #[test]
    fn test_delimiters_only() {
        assert!(parse_inline("").is_empty());
        assert!(parse_inline("**").is_empty());
        assert!(parse_inline("*").is_empty());
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(
            parse_inline("**Förslag** på åtgärd"),
            vec![Run::bold("Förslag"), Run::plain(" på åtgärd")]
        );
    }
}
