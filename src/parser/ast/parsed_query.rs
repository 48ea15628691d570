use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::parser::{ast::{AggregateFunction, GroupByParser, LogicalOp, OrderByParser, ProjectionParser, Restriction, SourceParser, WhereParser}, ParseError, Phase, QueryParser};

/// Structured form of one query line, built fresh per parse call and owned
/// by the caller.
///
/// `None` means a clause is absent; `Some(vec![])` means the clause keyword
/// was present with nothing after it. Downstream code must not conflate the
/// two.
#[derive(Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub source_name: String,
    pub base_clause: String,
    pub fields: Vec<String>,
    pub aggregate_functions: Vec<AggregateFunction>,
    pub restrictions: Option<Vec<Restriction>>,
    pub logical_operators: Option<Vec<LogicalOp>>,
    pub group_by_fields: Option<Vec<String>>,
    pub order_by_fields: Option<Vec<String>>,
}

impl ParsedQuery {
    pub fn parse(parser: &mut QueryParser) -> Result<Self, ParseError> {
        parser.next_non_whitespace();

        let mut query = ParsedQuery::default();

        while parser.phase != Phase::EOF {
            match parser.phase {
                Phase::Projection => {
                    let projection = ProjectionParser::parse(parser)?;
                    query.fields = projection.fields;
                    query.aggregate_functions = projection.aggregates;
                }
                Phase::Source => {
                    query.source_name = SourceParser::parse(parser)?;
                    query.base_clause = parser.text_from_range(0, parser.position).trim().to_string();
                }
                Phase::Criteria => {
                    let (restrictions, operators) = WhereParser::parse(parser)?;
                    query.logical_operators = (!operators.is_empty()).then_some(operators);
                    query.restrictions = Some(restrictions);
                }
                Phase::GroupBy => query.group_by_fields = Some(GroupByParser::parse(parser)?),
                Phase::OrderBy => query.order_by_fields = Some(OrderByParser::parse(parser)?),
                Phase::EOF => {}
            }
        }

        query.check_operator_alignment(parser)?;

        debug!("parsed query: {}", query);
        Ok(query)
    }

    /// The count of connectors must equal the gaps between restrictions.
    /// `WhereParser` maintains this by construction; a violation here means
    /// the result would be corrupted, so it is rejected rather than returned.
    fn check_operator_alignment(&self, parser: &QueryParser) -> Result<(), ParseError> {
        if let Some(restrictions) = &self.restrictions {
            let operators = self.logical_operators.as_ref().map_or(0, |operators| operators.len());
            let expected = restrictions.len().saturating_sub(1);
            if operators != expected {
                return ParseError::new("Logical operators do not match restrictions", parser.position, parser).err();
            }
        }
        Ok(())
    }
}

impl TryFrom<&str> for ParsedQuery {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut parser = QueryParser::new(value);
        ParsedQuery::parse(&mut parser)
    }
}

use std::fmt;

impl fmt::Display for ParsedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields.join(", ");
        let aggregates = self.aggregate_functions.iter().map(|a| format!("{}", a)).collect::<Vec<_>>().join(", ");
        let restrictions = match &self.restrictions {
            Some(restrictions) => format!("[{}]", restrictions.iter().map(|r| format!("{}", r)).collect::<Vec<_>>().join(", ")),
            None => "None".to_string(),
        };
        let operators = match &self.logical_operators {
            Some(operators) => format!("[{}]", operators.iter().map(|o| format!("{}", o)).collect::<Vec<_>>().join(", ")),
            None => "None".to_string(),
        };
        let group_by = match &self.group_by_fields {
            Some(fields) => format!("[{}]", fields.join(", ")),
            None => "None".to_string(),
        };
        let order_by = match &self.order_by_fields {
            Some(fields) => format!("[{}]", fields.join(", ")),
            None => "None".to_string(),
        };

        write!(f, "ParsedQuery(source={}, base='{}', fields=[{}], aggregates=[{}], restrictions={}, operators={}, group_by={}, order_by={})",
               self.source_name, self.base_clause, fields, aggregates, restrictions, operators, group_by, order_by)
    }
}

impl fmt::Debug for ParsedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParsedQuery({})", self)
    }
}
