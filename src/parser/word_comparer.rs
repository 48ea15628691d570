use crate::parser::QueryParser;

/// Case-insensitive keyword matcher anchored at the parser's current position.
///
/// A comparer only matches when the word is followed by an allowed postfix,
/// so `FROM` never fires inside `from_date` or `from_hrs`.
#[derive(Debug, Default)]
pub struct WordComparer {
    pub length: usize,
    pub word: Vec<char>,
    whitespace_postfix: bool,
    eof: bool,
}

impl WordComparer {
    pub fn new(word: &str) -> Self {
        Self {
            length: word.len(),
            word: word.to_uppercase().chars().collect(),
            whitespace_postfix: false,
            eof: false,
        }
    }

    pub fn reach_eof(&self, parser: &QueryParser) -> bool {
        parser.position + self.length >= parser.length
    }

    pub fn is_block_delimiter(ch: char) -> bool {
        ch.is_ascii_whitespace()
    }

    pub fn is_any_delimiter(ch: char) -> bool {
        ch == ',' || ch == '(' || ch == ')' || Self::is_block_delimiter(ch)
    }

    pub fn is_current_block_delimiter(parser: &QueryParser) -> bool {
        Self::is_block_delimiter(parser.current())
    }

    pub fn compare(&self, parser: &QueryParser) -> bool {
        let mut position = 0;
        while position < self.length {
            if (parser.position + position) >= parser.length ||
                self.word[position] != parser.text_v[parser.position + position].to_ascii_uppercase() {
                return false;
            }
            position += 1;
        }

        if self.reach_eof(parser) {
            return self.eof;
        }

        if !self.whitespace_postfix {
            return true;
        }

        Self::is_block_delimiter(parser.text_v[parser.position + position])
    }

    pub fn with_eof(mut self) -> Self { self.eof = true; self }
    pub fn with_whitespace_postfix(mut self) -> Self { self.whitespace_postfix = true; self }
}

#[cfg(test)]
mod tests {
    use crate::parser::{QueryParser, WordComparer};

    #[test]
    pub fn test_compare_is_case_insensitive() {
        let parser = QueryParser::new("FROM table");

        let comparer = WordComparer::new("FROM").with_whitespace_postfix();

        assert!(comparer.compare(&parser));
    }

    #[test]
    pub fn test_compare_rejects_embedded_word() {
        let parser = QueryParser::new("from_date, from_hrs");

        let comparer = WordComparer::new("FROM").with_whitespace_postfix();

        assert!(!comparer.compare(&parser));
    }

    #[test]
    pub fn test_compare_at_eof() {
        let parser = QueryParser::new("where");

        let with_eof = WordComparer::new("WHERE").with_whitespace_postfix().with_eof();
        let without_eof = WordComparer::new("WHERE").with_whitespace_postfix();

        assert!(with_eof.compare(&parser));
        assert!(!without_eof.compare(&parser));
    }
}
