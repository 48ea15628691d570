use tracing::warn;

use crate::parser::{ast::{LogicalOp, Restriction}, ParseError, QueryParser, WordComparer};

/// WHERE clause: predicates joined by `and` / `or`, consumed until the next
/// clause keyword or the end of the input.
///
/// Parsing is lenient the way the dialect documents it: a predicate that has
/// no recognized operator or an empty side is dropped with a warning, not
/// surfaced as an error. Its adjacent connector is dropped with it so the
/// operator list stays aligned with the gaps between surviving restrictions.
pub struct WhereParser;

impl WhereParser {
    pub fn parse(parser: &mut QueryParser) -> Result<(Vec<Restriction>, Vec<LogicalOp>), ParseError> {
        if !parser.comparers.r#where.compare(parser) {
            return ParseError::new("Invalid where clause", parser.position, parser).err();
        }
        parser.jump(parser.comparers.r#where.length);

        let mut restrictions: Vec<Restriction> = vec![];
        let mut operators: Vec<LogicalOp> = vec![];
        let mut pending: Option<LogicalOp> = None;

        while !parser.check_next_phase() {
            match Restriction::parse_single(parser) {
                Ok(restriction) => {
                    match pending.take() {
                        Some(operator) => {
                            // a connector left behind by a dropped predicate
                            // has nothing to join; it goes with it
                            if !restrictions.is_empty() {
                                operators.push(operator);
                            }
                        }
                        None => {
                            if !restrictions.is_empty() {
                                return ParseError::new(
                                    "Predicates must be joined by and/or",
                                    parser.position,
                                    parser,
                                ).err();
                            }
                        }
                    }
                    restrictions.push(restriction);
                }
                Err(err) => {
                    warn!("dropping malformed predicate: {}", err);
                    pending = None;
                    Self::skip_predicate(parser);
                }
            }

            parser.next_non_whitespace();
            if parser.comparers.and.compare(parser) {
                parser.jump(parser.comparers.and.length);
                pending = Some(LogicalOp::And);
            } else if parser.comparers.or.compare(parser) {
                parser.jump(parser.comparers.or.length);
                pending = Some(LogicalOp::Or);
            }
        }

        Ok((restrictions, operators))
    }

    /// Advances past a predicate that failed to parse, stopping at the next
    /// connector or clause keyword. Keywords are only tested at token
    /// boundaries so a value like `band` cannot end the skip early.
    fn skip_predicate(parser: &mut QueryParser) {
        let mut at_boundary = true;
        while !parser.eof() {
            if at_boundary
                && (parser.comparers.and.compare(parser)
                    || parser.comparers.or.compare(parser)
                    || parser.comparers.group_by.compare(parser)
                    || parser.comparers.order_by.compare(parser))
            {
                return;
            }
            at_boundary = WordComparer::is_current_block_delimiter(parser);
            parser.next();
        }
    }
}
