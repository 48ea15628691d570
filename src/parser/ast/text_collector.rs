use crate::parser::{ParseError, QueryParser, WordComparer};

pub struct TextCollector;

pub type Stopper = dyn Fn(char) -> bool;

impl TextCollector {
    /// Collects one identifier (letters, digits, underscore) up to the next
    /// delimiter. An empty result means the cursor already sat on a delimiter.
    pub fn collect(parser: &mut QueryParser) -> Result<String, ParseError> {
        TextCollector::collect_with_stopper(parser, &|_| false)
    }

    pub fn collect_with_stopper(parser: &mut QueryParser, stopper: &Stopper) -> Result<String, ParseError> {
        let pivot = parser.position;
        while !parser.eof() && !WordComparer::is_any_delimiter(parser.current()) && !stopper(parser.current()) {
            let current = parser.current();
            if !current.is_ascii_alphanumeric() && current != '_' {
                return Err(ParseError::new("Invalid identifier", pivot, parser));
            }
            parser.next();
        }
        Ok(parser.text_from_pivot(pivot))
    }
}
