use crate::parser::{ast::{AggregateFunction, AggregateKind, TextCollector}, ParseError, Phase, QueryParser};

/// Select list: the raw field tokens plus any aggregate expressions found
/// among them. An aggregate contributes to both sequences.
#[derive(Debug, Default)]
pub struct Projection {
    pub fields: Vec<String>,
    pub aggregates: Vec<AggregateFunction>,
}

pub struct ProjectionParser;

impl ProjectionParser {
    pub fn parse(parser: &mut QueryParser) -> Result<Projection, ParseError> {
        if !parser.comparers.select.compare(parser) {
            return ParseError::new("Missing select keyword", parser.position, parser).err();
        }
        parser.jump(parser.comparers.select.length);
        parser.next_non_whitespace();

        let mut projection = Projection::default();
        let mut can_consume = true;
        while !parser.eof() && !parser.comparers.from.compare(parser) {
            let current = parser.current();

            if current == ',' {
                if can_consume {
                    return ParseError::new("Invalid projection", parser.position, parser).err();
                }
                can_consume = true;
                parser.next();
                continue;
            }

            if !current.is_whitespace() {
                if !can_consume {
                    return ParseError::new("Invalid projection", parser.position, parser).err();
                }
                Self::parse_item(parser, &mut projection)?;
                can_consume = false;
                continue;
            }

            parser.next();
        }

        if parser.eof() {
            return ParseError::new("Missing from clause", parser.position, parser).err();
        }

        if projection.fields.is_empty() {
            return ParseError::new("Empty projection", parser.position, parser).err();
        }

        parser.phase = Phase::Source;
        Ok(projection)
    }

    fn parse_item(parser: &mut QueryParser, projection: &mut Projection) -> Result<(), ParseError> {
        let pivot = parser.position;

        let name = TextCollector::collect(parser)?;
        if name.is_empty() {
            return ParseError::new("Invalid projection", pivot, parser).err();
        }

        if parser.current() != '(' {
            projection.fields.push(name);
            return Ok(());
        }

        let kind = AggregateKind::resolve(&name)
            .ok_or_else(|| ParseError::new("Unknown aggregate function", pivot, parser))?;

        parser.next();
        parser.next_non_whitespace();

        let field_name = if parser.current() == '*' {
            parser.next();
            "*".to_string()
        } else {
            TextCollector::collect(parser)?
        };

        parser.next_non_whitespace();
        if field_name.is_empty() || parser.current() != ')' {
            return ParseError::new("Invalid aggregate expression", pivot, parser).err();
        }
        parser.next();

        projection.fields.push(format!("{}({})", kind, field_name));
        projection.aggregates.push(AggregateFunction { kind, field_name });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::{AggregateKind, ProjectionParser}, Phase, QueryParser};

    #[test]
    pub fn test_projection_three_fields() {
        let text = "select a,b,c from t";

        let mut parser = QueryParser::new(text);

        let result = ProjectionParser::parse(&mut parser).expect("Failed to parse projection");

        assert_eq!(result.fields, vec!["a", "b", "c"]);
        assert!(result.aggregates.is_empty());
        assert_eq!(parser.phase, Phase::Source);
    }

    #[test]
    pub fn test_projection_with_spaces() {
        let text = "select city , winner , team1 from data/ipl.csv";

        let mut parser = QueryParser::new(text);

        let result = ProjectionParser::parse(&mut parser).expect("Failed to parse projection");

        assert_eq!(result.fields, vec!["city", "winner", "team1"]);
    }

    #[test]
    pub fn test_projection_field_named_like_from() {
        let text = "select from_date,from_hrs from t";

        let mut parser = QueryParser::new(text);

        let result = ProjectionParser::parse(&mut parser).expect("Failed to parse projection");

        assert_eq!(result.fields, vec!["from_date", "from_hrs"]);
    }

    #[test]
    pub fn test_projection_aggregate_and_field() {
        let text = "select min(x),y from data/t.csv";

        let mut parser = QueryParser::new(text);

        let result = ProjectionParser::parse(&mut parser).expect("Failed to parse projection");

        assert_eq!(result.fields, vec!["min(x)", "y"]);
        assert_eq!(result.aggregates.len(), 1);
        assert_eq!(result.aggregates[0].kind, AggregateKind::Min);
        assert_eq!(result.aggregates[0].field_name, "x");
    }

    #[test]
    pub fn test_projection_count_wildcard() {
        let text = "select count(*) from t";

        let mut parser = QueryParser::new(text);

        let result = ProjectionParser::parse(&mut parser).expect("Failed to parse projection");

        assert_eq!(result.fields, vec!["count(*)"]);
        assert_eq!(result.aggregates[0].kind, AggregateKind::Count);
        assert_eq!(result.aggregates[0].field_name, "*");
    }

    #[test]
    pub fn test_projection_every_aggregate_kind() {
        let text = "select min(a),max(b),sum(c),count(d),avg(e) from t";

        let mut parser = QueryParser::new(text);

        let result = ProjectionParser::parse(&mut parser).expect("Failed to parse projection");

        assert_eq!(result.fields.len(), 5);
        assert_eq!(result.aggregates.len(), 5);

        let expected = [
            AggregateKind::Min,
            AggregateKind::Max,
            AggregateKind::Sum,
            AggregateKind::Count,
            AggregateKind::Avg,
        ];
        for (aggregate, kind) in result.aggregates.iter().zip(expected) {
            assert_eq!(aggregate.kind, kind);
        }
    }

    #[test]
    pub fn test_projection_unknown_aggregate() {
        let text = "select median(x) from t";

        let mut parser = QueryParser::new(text);

        let result = ProjectionParser::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Unknown aggregate function"),
        }
    }

    #[test]
    pub fn test_projection_missing_from() {
        let text = "select a,b,c";

        let mut parser = QueryParser::new(text);

        let result = ProjectionParser::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Missing from clause"),
        }
    }

    #[test]
    pub fn test_projection_missing_select() {
        let text = "a,b from t";

        let mut parser = QueryParser::new(text);

        let result = ProjectionParser::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Missing select keyword"),
        }
    }

    #[test]
    pub fn test_projection_double_comma() {
        let text = "select a,,b from t";

        let mut parser = QueryParser::new(text);

        let result = ProjectionParser::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Invalid projection"),
        }
    }
}
