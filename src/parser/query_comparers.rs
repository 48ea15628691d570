use crate::parser::WordComparer;

#[derive(Debug)]
pub struct QueryComparers {
    pub select: WordComparer,
    pub from: WordComparer,
    pub r#where: WordComparer,
    pub group_by: WordComparer,
    pub order_by: WordComparer,
    pub and: WordComparer,
    pub or: WordComparer,
    pub equal: WordComparer,
    pub not_equal: WordComparer,
    pub greater_than: WordComparer,
    pub greater_than_or_equal: WordComparer,
    pub less_than: WordComparer,
    pub less_than_or_equal: WordComparer,
}

impl Default for QueryComparers {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryComparers {
    pub fn new() -> Self {
        Self {
            select: WordComparer::new("SELECT").with_whitespace_postfix(),
            from: WordComparer::new("FROM").with_whitespace_postfix().with_eof(),
            r#where: WordComparer::new("WHERE").with_whitespace_postfix().with_eof(),
            group_by: WordComparer::new("GROUP BY").with_whitespace_postfix().with_eof(),
            order_by: WordComparer::new("ORDER BY").with_whitespace_postfix().with_eof(),
            and: WordComparer::new("AND").with_whitespace_postfix().with_eof(),
            or: WordComparer::new("OR").with_whitespace_postfix().with_eof(),
            // comparison operators may be glued to their operands, so no postfix
            equal: WordComparer::new("=").with_eof(),
            not_equal: WordComparer::new("!=").with_eof(),
            greater_than: WordComparer::new(">").with_eof(),
            greater_than_or_equal: WordComparer::new(">=").with_eof(),
            less_than: WordComparer::new("<").with_eof(),
            less_than_or_equal: WordComparer::new("<=").with_eof(),
        }
    }
}
