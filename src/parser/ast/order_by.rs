use crate::parser::{ast::TextCollector, ParseError, QueryParser};

pub struct OrderByParser;

impl OrderByParser {
    /// Comma-separated ordering fields after `order by`. Always the last
    /// clause, so anything that is not a field or comma here (including a
    /// late `group by`) is an error.
    pub fn parse(parser: &mut QueryParser) -> Result<Vec<String>, ParseError> {
        if !parser.comparers.order_by.compare(parser) {
            return ParseError::new("Invalid order by", parser.position, parser).err();
        }
        parser.jump(parser.comparers.order_by.length);

        let mut fields: Vec<String> = vec![];
        let mut can_consume = true;
        while !parser.check_next_phase() {
            if parser.current() == ',' {
                if can_consume {
                    return ParseError::new("Invalid order by", parser.position, parser).err();
                }
                can_consume = true;
                parser.next();
                parser.next_non_whitespace();
            }
            if can_consume {
                let field = TextCollector::collect(parser)?;
                if field.is_empty() {
                    return ParseError::new("Invalid order by", parser.position, parser).err();
                }
                fields.push(field);
                can_consume = false;
            } else {
                return ParseError::new("Invalid order by", parser.position, parser).err();
            }
        }

        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::OrderByParser, QueryParser};

    #[test]
    pub fn test_order_by_single_field() {
        let text = "order by city";

        let mut parser = QueryParser::new(text);
        parser.check_next_phase();

        let result = OrderByParser::parse(&mut parser).expect("Failed to parse order by");

        assert_eq!(result, vec!["city"]);
    }

    #[test]
    pub fn test_order_by_two_fields() {
        let text = "order by city, winner";

        let mut parser = QueryParser::new(text);
        parser.check_next_phase();

        let result = OrderByParser::parse(&mut parser).expect("Failed to parse order by");

        assert_eq!(result, vec!["city", "winner"]);
    }

    #[test]
    pub fn test_order_by_empty_clause() {
        let text = "order by";

        let mut parser = QueryParser::new(text);
        parser.check_next_phase();

        let result = OrderByParser::parse(&mut parser).expect("Failed to parse order by");

        assert!(result.is_empty());
    }

    #[test]
    pub fn test_order_by_rejects_late_group_by() {
        let text = "order by city group by winner";

        let mut parser = QueryParser::new(text);
        parser.check_next_phase();

        let result = OrderByParser::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Invalid order by"),
        }
    }
}
