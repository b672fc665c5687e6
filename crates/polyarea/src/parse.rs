//! Vertex parser: delimited text rows → validated `VertexSeq`.
//!
//! Policy
//! - One record per line, exactly two fields, each a real-number literal.
//! - Fail fast: the first defective row aborts the parse; nothing is skipped,
//!   coerced, or returned partially.
//! - No header row. A blank line is a record with zero fields and is rejected.
//!
//! Record syntax
//! - Fields are split on `ParseCfg::delimiter`. A field may be wrapped in double
//!   quotes; inside quotes the delimiter and line breaks are literal and `""` is
//!   one quote. Errors in a multi-line record report its first line.

use crate::error::{PolyAreaError, Result};
use crate::types::{ParseCfg, Vec2, VertexSeq};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Open `path` and parse it. The handle is closed on every return path.
pub fn read_vertices(path: &Path, cfg: &ParseCfg) -> Result<VertexSeq> {
    let file = File::open(path).map_err(|source| PolyAreaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_vertices(BufReader::new(file), &path.display().to_string(), cfg)
}

/// Parse an open stream; `source_name` labels error messages.
pub fn parse_vertices<R: BufRead>(
    reader: R,
    source_name: &str,
    cfg: &ParseCfg,
) -> Result<VertexSeq> {
    let mut verts = Vec::new();
    // Open quoted record carried into the next line: (first line number, text so far).
    let mut pending: Option<(usize, String)> = None;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| PolyAreaError::Io {
            path: source_name.into(),
            source,
        })?;
        let (line_no, text) = match pending.take() {
            Some((start, mut text)) => {
                text.push('\n');
                text.push_str(&line);
                (start, text)
            }
            None => (idx + 1, line),
        };
        let (row, open_quote) = split_fields(&text, cfg.delimiter);
        if open_quote {
            pending = Some((line_no, text));
            continue;
        }
        verts.push(parse_row(row, source_name, line_no, cfg)?);
    }
    // An unterminated quote at end of input still closes the record.
    if let Some((line_no, text)) = pending {
        let (row, _) = split_fields(&text, cfg.delimiter);
        verts.push(parse_row(row, source_name, line_no, cfg)?);
    }
    Ok(VertexSeq::new(verts))
}

fn parse_row(row: Vec<String>, source_name: &str, line: usize, cfg: &ParseCfg) -> Result<Vec2> {
    if row.len() != 2 {
        return Err(PolyAreaError::FieldCount {
            source_name: source_name.to_string(),
            line,
            row,
        });
    }
    let x = parse_field(&row[0], source_name, line, cfg)?;
    let y = parse_field(&row[1], source_name, line, cfg)?;
    Ok(Vec2::new(x, y))
}

fn parse_field(field: &str, source_name: &str, line: usize, cfg: &ParseCfg) -> Result<f64> {
    let text = if cfg.trim { field.trim() } else { field };
    text.parse::<f64>().map_err(|_| PolyAreaError::Numeric {
        source_name: source_name.to_string(),
        line,
        field: field.to_string(),
    })
}

/// Split one line into fields, honoring double-quoted fields.
///
/// An empty line yields no fields.
pub fn split_record(line: &str, delimiter: u8) -> Vec<String> {
    split_fields(line, delimiter).0
}

/// Fields of `line`, plus whether it ends inside an open quoted field.
fn split_fields(line: &str, delimiter: u8) -> (Vec<String>, bool) {
    if line.is_empty() {
        return (Vec::new(), false);
    }
    let delim = char::from(delimiter);
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' && field.is_empty() {
            in_quotes = true;
        } else if c == delim {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(c);
        }
    }
    fields.push(field);
    (fields, in_quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn parse_str(s: &str) -> Result<VertexSeq> {
        parse_vertices(Cursor::new(s), "mem.csv", &ParseCfg::default())
    }

    #[test]
    fn parses_rows_in_file_order() {
        let seq = parse_str("0,0\n4,0\n4,3\n0,3\n").unwrap();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.as_slice()[2], Vec2::new(4.0, 3.0));
        assert_eq!(seq.signed_area(), 12.0);
    }

    #[test]
    fn accepts_scientific_notation_crlf_and_spaces() {
        let seq = parse_str("1e2, -2.5E-1\r\n 0.5 ,+3\r\n").unwrap();
        assert_eq!(seq.as_slice()[0], Vec2::new(100.0, -0.25));
        assert_eq!(seq.as_slice()[1], Vec2::new(0.5, 3.0));
    }

    #[test]
    fn empty_input_is_empty_sequence() {
        assert!(parse_str("").unwrap().is_empty());
    }

    #[test]
    fn three_fields_rejected_with_row() {
        let err = parse_str("0,0\n1,2,3\n4,4\n").unwrap_err();
        match err {
            PolyAreaError::FieldCount { line, row, .. } => {
                assert_eq!(line, 2);
                assert_eq!(row, vec!["1", "2", "3"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_line_rejected() {
        let err = parse_str("0,0\n\n1,1\n").unwrap_err();
        assert!(matches!(err, PolyAreaError::FieldCount { line: 2, .. }));
    }

    #[test]
    fn non_numeric_rejected_with_source() {
        let err = parse_str("0,0\n1,abc\n").unwrap_err();
        assert!(matches!(err, PolyAreaError::Numeric { line: 2, .. }));
        assert!(err
            .to_string()
            .contains("numeric conversion of input failed for file: mem.csv"));
    }

    #[test]
    fn untrimmed_cfg_rejects_padded_numbers() {
        let cfg = ParseCfg {
            trim: false,
            ..ParseCfg::default()
        };
        let err = parse_vertices(Cursor::new("1, 2\n"), "mem.csv", &cfg).unwrap_err();
        assert!(matches!(err, PolyAreaError::Numeric { .. }));
    }

    #[test]
    fn custom_delimiter() {
        let cfg = ParseCfg {
            delimiter: b';',
            ..ParseCfg::default()
        };
        let seq = parse_vertices(Cursor::new("1;2\n3;4\n"), "mem.csv", &cfg).unwrap();
        assert_eq!(seq.as_slice()[1], Vec2::new(3.0, 4.0));
    }

    #[test]
    fn split_record_handles_quotes() {
        assert_eq!(split_record("\"1.5\",2", b','), vec!["1.5", "2"]);
        assert_eq!(split_record("\"1,5\",2", b','), vec!["1,5", "2"]);
        assert_eq!(split_record("\"a\"\"b\"", b','), vec!["a\"b"]);
        assert_eq!(split_record("1,", b','), vec!["1", ""]);
        assert!(split_record("", b',').is_empty());
    }

    #[test]
    fn quoted_field_spans_lines() {
        let seq = parse_str("\"1\n\",2\n3,4\n").unwrap();
        assert_eq!(seq.as_slice(), &[Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);

        let err = parse_str("0,0\n\"1\n2\",3\n").unwrap_err();
        assert!(matches!(err, PolyAreaError::Numeric { line: 2, .. }));

        let seq = parse_str("5,\"6").unwrap();
        assert_eq!(seq.as_slice(), &[Vec2::new(5.0, 6.0)]);
    }

    #[test]
    fn read_vertices_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "0,0\n0,3\n4,3\n4,0").unwrap();
        let seq = read_vertices(f.path(), &ParseCfg::default()).unwrap();
        assert_eq!(seq.signed_area(), -12.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_vertices(&dir.path().join("nope.csv"), &ParseCfg::default()).unwrap_err();
        assert!(matches!(err, PolyAreaError::Io { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }
}
