//! Line parsers for the header and entry tuples

use std::str::FromStr;

use crate::error::{Error, Result};

/// Parses a `<key>=<non-negative integer>` header line
pub(super) fn header(line: Option<(usize, &str)>, expected_line: usize, key: &str) -> Result<usize> {
    let (line_no, line) = line.ok_or_else(|| {
        Error::format(expected_line, "", format!("missing `{}=` header", key))
    })?;

    let value = line
        .trim()
        .strip_prefix(key)
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or_else(|| Error::format(line_no, line, format!("expected `{}=<integer>`", key)))?;

    value.trim().parse::<usize>().map_err(|_| {
        Error::format(line_no, line, format!("`{}` must be a non-negative integer", key))
    })
}

/// Parses a `(<row>, <col>, <value>)` entry line
///
/// Only three integer literals inside parentheses are accepted; whitespace
/// around each field is ignored.
pub(super) fn entry<T: FromStr>(line_no: usize, line: &str) -> Result<(usize, usize, T)> {
    let inner = line
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| Error::format(line_no, line, "expected `(<row>, <col>, <value>)`"))?;

    let fields: Vec<&str> = inner.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(Error::format(
            line_no,
            line,
            format!("expected 3 comma-separated fields, found {}", fields.len()),
        ));
    }

    let row = coordinate(line_no, line, fields[0], "row")?;
    let col = coordinate(line_no, line, fields[1], "col")?;
    let value = fields[2]
        .parse::<T>()
        .map_err(|_| Error::format(line_no, line, format!("invalid value `{}`", fields[2])))?;

    Ok((row, col, value))
}

fn coordinate(line_no: usize, line: &str, field: &str, name: &str) -> Result<usize> {
    field.parse::<usize>().map_err(|_| {
        Error::format(
            line_no,
            line,
            format!("{} `{}` must be a non-negative integer", name, field),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        assert_eq!(header(Some((1, "rows=12")), 1, "rows").unwrap(), 12);
        assert_eq!(header(Some((1, "  rows = 3 ")), 1, "rows").unwrap(), 3);
    }

    #[test]
    fn test_header_rejects_wrong_key() {
        assert!(header(Some((1, "cols=2")), 1, "rows").is_err());
        assert!(header(Some((1, "rows2")), 1, "rows").is_err());
        assert!(header(Some((1, "rowsx=2")), 1, "rows").is_err());
    }

    #[test]
    fn test_header_rejects_non_integer() {
        assert!(header(Some((1, "rows=two")), 1, "rows").is_err());
        assert!(header(Some((1, "rows=-1")), 1, "rows").is_err());
        assert!(header(Some((1, "rows=1.5")), 1, "rows").is_err());
        assert!(header(Some((1, "rows=")), 1, "rows").is_err());
    }

    #[test]
    fn test_header_missing() {
        match header(None, 2, "cols").unwrap_err() {
            Error::Format { line, content, .. } => {
                assert_eq!(line, 2);
                assert!(content.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_entry() {
        assert_eq!(entry::<i64>(3, "(1, 2, -3)").unwrap(), (1, 2, -3));
        assert_eq!(entry::<i64>(3, "(1,2,3)").unwrap(), (1, 2, 3));
        assert_eq!(entry::<i64>(3, "  ( 4 ,5 , 6 )  ").unwrap(), (4, 5, 6));
    }

    #[test]
    fn test_entry_value_overflow() {
        match entry::<i64>(5, "(0, 0, 99999999999999999999)").unwrap_err() {
            Error::Format { line, reason, .. } => {
                assert_eq!(line, 5);
                assert!(reason.contains("invalid value"), "reason was {reason:?}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(entry::<i64>(5, "(0, 0, -9223372036854775808)").unwrap().2, i64::MIN);
    }

    #[test]
    fn test_entry_rejects_malformed() {
        for line in [
            "1, 2, 3",
            "(1, 2, 3",
            "1, 2, 3)",
            "(1, 2)",
            "(1, 2, 3, 4)",
            "(a, 2, 3)",
            "(1, 2, 3.5)",
            "(0, 0, 99999999999999999999)",
            "(99999999999999999999999, 0, 1)",
            "(-1, 2, 3)",
            "(1, , 3)",
            "(__import__('os'), 0, 1)",
            "[1, 2, 3]",
        ] {
            assert!(entry::<i64>(7, line).is_err(), "accepted {line:?}");
        }
    }
}
