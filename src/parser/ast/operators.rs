use serde::{Deserialize, Serialize};

use crate::parser::QueryParser;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparatorOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    LtEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    GtEq,
}

use std::fmt;

impl ComparatorOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparatorOp::Eq => "=",
            ComparatorOp::NotEq => "!=",
            ComparatorOp::Lt => "<",
            ComparatorOp::LtEq => "<=",
            ComparatorOp::Gt => ">",
            ComparatorOp::GtEq => ">=",
        }
    }

    /// Matches the operator at the cursor and consumes it.
    ///
    /// Two-character comparers are tested first: `<` and `>` are prefixes of
    /// `<=` and `>=`, so testing them earlier would truncate the match.
    pub fn check(parser: &mut QueryParser) -> Option<ComparatorOp> {
        if parser.comparers.less_than_or_equal.compare(parser) {
            parser.jump(parser.comparers.less_than_or_equal.length);
            return Some(ComparatorOp::LtEq);
        }

        if parser.comparers.greater_than_or_equal.compare(parser) {
            parser.jump(parser.comparers.greater_than_or_equal.length);
            return Some(ComparatorOp::GtEq);
        }

        if parser.comparers.not_equal.compare(parser) {
            parser.jump(parser.comparers.not_equal.length);
            return Some(ComparatorOp::NotEq);
        }

        if parser.comparers.equal.compare(parser) {
            parser.jump(parser.comparers.equal.length);
            return Some(ComparatorOp::Eq);
        }

        if parser.comparers.less_than.compare(parser) {
            parser.jump(parser.comparers.less_than.length);
            return Some(ComparatorOp::Lt);
        }

        if parser.comparers.greater_than.compare(parser) {
            parser.jump(parser.comparers.greater_than.length);
            return Some(ComparatorOp::Gt);
        }

        None
    }
}

impl fmt::Display for ComparatorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for ComparatorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComparatorOp({})", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::ComparatorOp, QueryParser};

    #[test]
    pub fn test_check_less_than_or_equal_wins_over_less_than() {
        let mut parser = QueryParser::new("<=100");

        let result = ComparatorOp::check(&mut parser);

        assert_eq!(result, Some(ComparatorOp::LtEq));
        assert_eq!(parser.position, 2);
    }

    #[test]
    pub fn test_check_greater_than_or_equal() {
        let mut parser = QueryParser::new(">=2008");

        let result = ComparatorOp::check(&mut parser);

        assert_eq!(result, Some(ComparatorOp::GtEq));
    }

    #[test]
    pub fn test_check_not_equal() {
        let mut parser = QueryParser::new("!=bat");

        let result = ComparatorOp::check(&mut parser);

        assert_eq!(result, Some(ComparatorOp::NotEq));
    }

    #[test]
    pub fn test_check_single_char_operators() {
        for (text, expected) in [("=a", ComparatorOp::Eq), ("<5", ComparatorOp::Lt), (">5", ComparatorOp::Gt)] {
            let mut parser = QueryParser::new(text);

            let result = ComparatorOp::check(&mut parser);

            assert_eq!(result, Some(expected));
            assert_eq!(parser.position, 1);
        }
    }

    #[test]
    pub fn test_check_no_operator() {
        let mut parser = QueryParser::new("bat");

        let result = ComparatorOp::check(&mut parser);

        assert_eq!(result, None);
        assert_eq!(parser.position, 0);
    }
}
