use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::records::{PointRecord, POINT_ARITY};

pub const QUERY_PROMPT: &str = "Enter a 5-dimensional query vector (space-separated integers): ";

#[derive(Debug)]
pub enum QueryError {
    Io(std::io::Error),
    InvalidToken(String),
    WrongArity { expected: usize, got: usize },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Io(err) => write!(f, "Failed to read query vector: {}", err),
            QueryError::InvalidToken(token) => {
                write!(f, "Query value '{}' is not an integer", token)
            }
            QueryError::WrongArity { expected, got } => write!(
                f,
                "Query vector must have exactly {} values, got {}",
                expected, got
            ),
        }
    }
}

impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            QueryError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QueryError {
    fn from(err: std::io::Error) -> Self {
        QueryError::Io(err)
    }
}

/// The record-shaped vector every point is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Query {
    pub values: [i32; POINT_ARITY],
}

fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

impl Query {
    pub fn new(values: [i32; POINT_ARITY]) -> Self {
        Self { values }
    }

    /// Reads lines until at least five values have been seen (or input
    /// ends) and requires exactly five in total.
    pub fn read_from<R: BufRead>(mut reader: R) -> Result<Self, QueryError> {
        let mut text = String::new();
        loop {
            let read = reader.read_line(&mut text)?;
            if read == 0 || split_tokens(&text).count() >= POINT_ARITY {
                break;
            }
        }
        text.parse()
    }
}

impl FromStr for Query {
    type Err = QueryError;

    /// Accepts whitespace- or comma-separated integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = split_tokens(s)
            .map(|token| {
                token
                    .parse::<i32>()
                    .map_err(|_| QueryError::InvalidToken(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if values.len() != POINT_ARITY {
            return Err(QueryError::WrongArity {
                expected: POINT_ARITY,
                got: values.len(),
            });
        }
        let mut query = [0; POINT_ARITY];
        query.copy_from_slice(&values);
        Ok(Self::new(query))
    }
}

impl From<PointRecord> for Query {
    fn from(record: PointRecord) -> Self {
        Self::new(record.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_space_and_comma_separated() {
        let spaced: Query = "1 2 3 4 5".parse().unwrap();
        let commas: Query = "1,2, 3,4 ,5".parse().unwrap();
        assert_eq!(spaced, Query::new([1, 2, 3, 4, 5]));
        assert_eq!(spaced, commas);
    }

    #[test]
    fn test_short_query_is_rejected() {
        let result = "1 2 3".parse::<Query>();
        assert!(matches!(
            result,
            Err(QueryError::WrongArity { expected: 5, got: 3 })
        ));
    }

    #[test]
    fn test_long_query_is_rejected() {
        let result = "1 2 3 4 5 6".parse::<Query>();
        assert!(matches!(result, Err(QueryError::WrongArity { got: 6, .. })));
    }

    #[test]
    fn test_non_integer_query_is_rejected() {
        let result = "1 2 x 4 5".parse::<Query>();
        match result {
            Err(QueryError::InvalidToken(token)) => assert_eq!(token, "x"),
            other => panic!("expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn test_read_from_spans_lines() {
        let query = Query::read_from(Cursor::new("1 2\n3 4\n5\nignored line\n")).unwrap();
        assert_eq!(query.values, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_read_from_short_input_fails() {
        let result = Query::read_from(Cursor::new("7 8\n"));
        assert!(matches!(result, Err(QueryError::WrongArity { got: 2, .. })));
        let result = Query::read_from(Cursor::new(""));
        assert!(matches!(result, Err(QueryError::WrongArity { got: 0, .. })));
    }
}
