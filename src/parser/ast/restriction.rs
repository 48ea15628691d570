use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parser::{ast::{ComparatorOp, TextCollector}, ParseError, QueryParser, WordComparer};

/// One filter predicate from the WHERE clause: `field op value`.
///
/// The value has outer single quotes stripped and its first letter
/// capitalized (the rest stays lower-case because the whole query is
/// case-folded before parsing).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    pub field_name: String,
    pub operator: ComparatorOp,
    pub value: String,
}

fn is_operator_char(ch: char) -> bool {
    matches!(ch, '<' | '>' | '=' | '!')
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

impl Restriction {
    pub fn parse_single(parser: &mut QueryParser) -> Result<Self, ParseError> {
        let pivot = parser.position;

        let field_name = TextCollector::collect_with_stopper(parser, &is_operator_char)?;
        if field_name.is_empty() {
            return ParseError::new("Missing field name", pivot, parser).err();
        }

        parser.next_non_whitespace();
        let operator = match ComparatorOp::check(parser) {
            Some(operator) => operator,
            None => return ParseError::new("Missing comparison operator", parser.position, parser).err(),
        };

        parser.next_non_whitespace();
        let value = Self::parse_value(parser)?;
        if value.is_empty() {
            return ParseError::new("Missing value", parser.position, parser).err();
        }

        Ok(Self { field_name, operator, value: capitalize(&value) })
    }

    fn parse_value(parser: &mut QueryParser) -> Result<String, ParseError> {
        if parser.current() != '\'' {
            let pivot = parser.position;
            while !parser.eof() && !WordComparer::is_current_block_delimiter(parser) {
                parser.next();
            }
            return Ok(parser.text_from_pivot(pivot));
        }

        parser.next();
        let pivot = parser.position;
        while !parser.eof() && parser.current() != '\'' {
            parser.next();
        }
        if parser.eof() {
            return ParseError::new("Unterminated quoted value", pivot, parser).err();
        }

        let value = parser.text_from_pivot(pivot);
        parser.next();
        Ok(value)
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field_name, self.operator, self.value)
    }
}

impl fmt::Debug for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Restriction({})", self)
    }
}
