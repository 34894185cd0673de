// ==========================================
// Placement Prep Portal - CSV tokenizer
// ==========================================
// Character-at-a-time state machine over the raw file text, two
// states: inside quotes / outside quotes.
// - outside quotes: ',' ends the field, '\n'/'\r' ends the row
//   ('\r\n' is one terminator), '"' opens quoted mode
// - inside quotes: '""' is an escaped literal quote, a lone '"'
//   closes quoted mode, everything else (commas and newlines
//   included) is taken literally
// Fields are trimmed as they are pushed, never while inside quotes.
// Blank lines are dropped; a file without a final line terminator
// keeps its last row. Malformed quoting degrades gracefully: an
// unterminated quote consumes to end of input, the tokenizer never
// fails.
// ==========================================

use crate::upload::error::{UploadError, UploadResult};
use std::path::Path;
use tracing::debug;

/// One parsed row: an ordered sequence of trimmed fields
pub type ParsedRow = Vec<String>;

/// Tokenize raw CSV text into rows of trimmed fields
///
/// The header row, when present, is the first element. Completely
/// empty input yields zero rows.
pub fn parse_csv(text: &str) -> Vec<ParsedRow> {
    let chars: Vec<char> = text.chars().collect();
    let mut rows: Vec<ParsedRow> = Vec::new();
    let mut current_row: ParsedRow = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if in_quotes {
            if c == '"' && next == Some('"') {
                field.push('"');
                i += 1; // consume the escaped quote
            } else if c == '"' {
                in_quotes = false;
            } else {
                field.push(c);
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == ',' {
            current_row.push(field.trim().to_string());
            field.clear();
        } else if c == '\n' || c == '\r' {
            if !field.is_empty() || !current_row.is_empty() {
                current_row.push(field.trim().to_string());
                rows.push(std::mem::take(&mut current_row));
            }
            field.clear();
            if c == '\r' && next == Some('\n') {
                i += 1; // '\r\n' is a single terminator
            }
        } else {
            field.push(c);
        }
        i += 1;
    }

    // Flush the trailing field/row of a file without a final terminator
    if !field.is_empty() || !current_row.is_empty() {
        current_row.push(field.trim().to_string());
        rows.push(current_row);
    }

    debug!(rows = rows.len(), "csv tokenized");
    rows
}

/// Read the raw text of an uploaded CSV file
///
/// File-level failures (missing file, wrong extension, unreadable
/// content) are the only errors the pipeline propagates as types.
pub async fn read_file_content(file_path: &Path) -> UploadResult<String> {
    if !file_path.exists() {
        return Err(UploadError::FileNotFound(
            file_path.display().to_string(),
        ));
    }

    if let Some(ext) = file_path.extension() {
        if !ext.eq_ignore_ascii_case("csv") {
            return Err(UploadError::UnsupportedFormat(
                ext.to_string_lossy().to_string(),
            ));
        }
    }

    Ok(tokio::fs::read_to_string(file_path).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_rows() {
        let rows = parse_csv("a,b,c\n1,2,3\n");
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]);
    }

    #[test]
    fn test_row_count_header_plus_data() {
        // N data rows and a header yield exactly N + 1 rows
        let text = "h1,h2\nr1a,r1b\nr2a,r2b\nr3a,r3b\n";
        assert_eq!(parse_csv(text).len(), 4);
    }

    #[test]
    fn test_missing_final_terminator_keeps_last_row() {
        let rows = parse_csv("a,b\n1,2");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["1", "2"]);
    }

    #[test]
    fn test_quoted_field_with_comma_and_escaped_quotes() {
        let rows = parse_csv("\"Describe a project, and its \"\"impact\"\".\",next\n");
        assert_eq!(rows[0][0], "Describe a project, and its \"impact\".");
        assert_eq!(rows[0][1], "next");
    }

    #[test]
    fn test_quoted_field_with_embedded_newline() {
        let rows = parse_csv("\"line one\nline two\",x\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "line one\nline two");
    }

    #[test]
    fn test_round_trip_quoting() {
        let original = "a \"tricky\" value, with commas\nand a newline";
        let serialized = format!("\"{}\"\n", original.replace('"', "\"\""));
        let rows = parse_csv(&serialized);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], original);
    }

    #[test]
    fn test_crlf_is_one_terminator() {
        let rows = parse_csv("a,b\r\n1,2\r\n");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_blank_lines_dropped() {
        let rows = parse_csv("a,b\n\n\n1,2\n\n");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        assert!(parse_csv("").is_empty());
    }

    #[test]
    fn test_fields_trimmed_outside_quotes() {
        let rows = parse_csv("  a  ,  b\t\n");
        assert_eq!(rows[0], vec!["a", "b"]);
    }

    #[test]
    fn test_whitespace_preserved_inside_quotes_until_push() {
        // Trimming happens at push time on the assembled field, so
        // quoted interior whitespace survives only between words
        let rows = parse_csv("\"  padded value  \",x\n");
        assert_eq!(rows[0][0], "padded value");
    }

    #[test]
    fn test_unterminated_quote_consumes_to_end() {
        let rows = parse_csv("\"never closed,still one field\nmore");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "never closed,still one field\nmore");
    }

    #[test]
    fn test_empty_fields_kept_within_row() {
        let rows = parse_csv("a,,c\n");
        assert_eq!(rows[0], vec!["a", "", "c"]);
    }
}
