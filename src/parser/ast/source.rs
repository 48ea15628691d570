use crate::parser::{ParseError, QueryParser, WordComparer};

/// Data-source token after `from`, e.g. `data/ipl.csv`. A single
/// whitespace-delimited token; resolving it to an actual file is the
/// downstream reader's job.
pub struct SourceParser;

impl SourceParser {
    pub fn parse(parser: &mut QueryParser) -> Result<String, ParseError> {
        if !parser.comparers.from.compare(parser) {
            return ParseError::new("Missing from clause", parser.position, parser).err();
        }
        parser.jump(parser.comparers.from.length);
        parser.next_non_whitespace();

        let pivot = parser.position;
        while !parser.eof() && !WordComparer::is_current_block_delimiter(parser) {
            parser.next();
        }

        let name = parser.text_from_pivot(pivot);
        if name.is_empty() {
            return ParseError::new("Missing data source", pivot, parser).err();
        }

        if !parser.check_next_phase() {
            return ParseError::new("Unexpected token after data source", parser.position, parser).err();
        }

        Ok(name)
    }
}
