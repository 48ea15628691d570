/// Clause phases in their only legal order. The parser never moves backwards,
/// which is what rejects queries like `... order by x group by y`.
#[derive(Debug, Default, PartialEq, PartialOrd)]
pub enum Phase {
    #[default]
    Projection = 0,
    Source = 1,
    Criteria = 2,
    GroupBy = 3,
    OrderBy = 4,
    EOF = 5,
}
