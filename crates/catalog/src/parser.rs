//! Parser for the coaster CSV export.
//!
//! The source is a plain comma-separated table with a header row. Fields may
//! be wrapped in double quotes (park names such as `"Six Flags, Inc."`
//! contain commas), and a doubled quote inside a quoted field is a literal
//! quote.

use crate::error::{DataLoadError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A parsed table: header row plus data rows.
///
/// `line_numbers[i]` is the 1-based source line of `rows[i]`, kept so that
/// cell errors can point at the offending line.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub source_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub line_numbers: Vec<usize>,
}

impl Table {
    /// Map each header name to its column index.
    ///
    /// When a header repeats, the first occurrence wins.
    pub fn column_index(&self) -> HashMap<&str, usize> {
        let mut index = HashMap::new();
        for (idx, header) in self.headers.iter().enumerate() {
            index.entry(header.as_str()).or_insert(idx);
        }
        index
    }
}

/// Read a CSV file from disk and split it into a [`Table`]
pub fn read_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_table(&content, &source_name)
}

/// Parse CSV text into a [`Table`].
///
/// Blank lines are skipped. Every data row must have exactly as many fields
/// as the header.
pub fn parse_table(content: &str, source_name: &str) -> Result<Table> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line_no, header_line) =
        lines.next().ok_or_else(|| DataLoadError::EmptyTable {
            source_name: source_name.to_string(),
        })?;
    let headers: Vec<String> = split_record(header_line, source_name, header_line_no)?
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut table = Table {
        source_name: source_name.to_string(),
        headers,
        ..Table::default()
    };

    for (line_no, line) in lines {
        let fields = split_record(line, source_name, line_no)?;
        if fields.len() != table.headers.len() {
            return Err(DataLoadError::FieldCountMismatch {
                expected: table.headers.len(),
                found: fields.len(),
                line: line_no,
            });
        }
        table.rows.push(fields);
        table.line_numbers.push(line_no);
    }

    Ok(table)
}

/// Split one CSV line into fields, honouring double quotes
fn split_record(line: &str, source_name: &str, line_no: usize) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ('"', false) if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            (',', false) => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(DataLoadError::ParseError {
            source_name: source_name.to_string(),
            line: line_no,
            reason: "Unterminated quoted field".to_string(),
        });
    }
    fields.push(field);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_record() {
        let fields = split_record("Apex,Texas,Sitdown", "t.csv", 1).unwrap();
        assert_eq!(fields, vec!["Apex", "Texas", "Sitdown"]);
    }

    #[test]
    fn test_split_quoted_record() {
        let fields = split_record(r#""Six Flags, Over Texas","He said ""go""",,"#, "t.csv", 1).unwrap();
        assert_eq!(fields, vec!["Six Flags, Over Texas", r#"He said "go""#, "", ""]);
    }

    #[test]
    fn test_unterminated_quote() {
        let err = split_record(r#"Apex,"Texas"#, "t.csv", 7).unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { line: 7, .. }));
    }

    #[test]
    fn test_parse_table_skips_blank_lines_and_bom() {
        let text = "\u{feff}Coaster,State\r\n\r\nApex,Texas\r\nBolt,Ohio\n";
        let table = parse_table(text, "t.csv").unwrap();
        assert_eq!(table.headers, vec!["Coaster", "State"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.line_numbers, vec![3, 4]);
    }

    #[test]
    fn test_field_count_mismatch() {
        let err = parse_table("A,B\n1,2,3\n", "t.csv").unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::FieldCountMismatch { expected: 2, found: 3, line: 2 }
        ));
    }

    #[test]
    fn test_empty_table() {
        assert!(matches!(
            parse_table("\n\n", "t.csv"),
            Err(DataLoadError::EmptyTable { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = read_table(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
