//! Error type shared by the parser and the integrator.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between opening the input and producing an area.
#[derive(Error, Debug)]
pub enum PolyAreaError {
    /// Input path could not be opened or read.
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record did not have exactly two fields.
    #[error("{source_name}:{line}: input row must have exactly 2 entries: {row:?}")]
    FieldCount {
        source_name: String,
        line: usize,
        row: Vec<String>,
    },

    /// A field was not a real-number literal.
    #[error(
        "numeric conversion of input failed for file: {source_name} (line {line}, field {field:?})"
    )]
    Numeric {
        source_name: String,
        line: usize,
        field: String,
    },

    /// A segment endpoint was not an `(x, y)` pair.
    #[error("invalid segment endpoint: expected 2 coordinates, got {len}")]
    InvalidSegment { len: usize },
}

/// Type alias for results carrying `PolyAreaError`.
pub type Result<T> = std::result::Result<T, PolyAreaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_message_names_source() {
        let e = PolyAreaError::Numeric {
            source_name: "square.csv".into(),
            line: 3,
            field: "abc".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("numeric conversion of input failed for file: square.csv"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn field_count_message_names_row() {
        let e = PolyAreaError::FieldCount {
            source_name: "tri.csv".into(),
            line: 2,
            row: vec!["1".into(), "2".into(), "3".into()],
        };
        assert_eq!(
            e.to_string(),
            r#"tri.csv:2: input row must have exactly 2 entries: ["1", "2", "3"]"#
        );
    }
}
