use crate::parser::{ast::TextCollector, ParseError, QueryParser};

pub struct GroupByParser;

impl GroupByParser {
    /// Comma-separated grouping fields after `group by`. The returned list
    /// may be empty (`group by` with nothing after it); the caller keeps
    /// that distinct from the clause being absent entirely.
    pub fn parse(parser: &mut QueryParser) -> Result<Vec<String>, ParseError> {
        if !parser.comparers.group_by.compare(parser) {
            return ParseError::new("Invalid group by", parser.position, parser).err();
        }
        parser.jump(parser.comparers.group_by.length);

        let mut fields: Vec<String> = vec![];
        let mut can_consume = true;
        while !parser.check_next_phase() {
            if parser.current() == ',' {
                if can_consume {
                    return ParseError::new("Invalid group by", parser.position, parser).err();
                }
                can_consume = true;
                parser.next();
                parser.next_non_whitespace();
            }
            if can_consume {
                let field = TextCollector::collect(parser)?;
                if field.is_empty() {
                    return ParseError::new("Invalid group by", parser.position, parser).err();
                }
                fields.push(field);
                can_consume = false;
            } else {
                return ParseError::new("Invalid group by", parser.position, parser).err();
            }
        }

        Ok(fields)
    }
}
