pub mod parser;

pub use parser::ast::{AggregateFunction, AggregateKind, ComparatorOp, LogicalOp, ParsedQuery, Restriction};
pub use parser::{ParseError, Phase, QueryParser};
