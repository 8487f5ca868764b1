//! CSV decision table parser adapter.
//!
//! Reads comma-separated uploads into a `RawDecisionTable`. Handles RFC 4180
//! quoting (`""` escapes, commas and newlines inside quotes), CRLF or LF
//! line endings, and a leading UTF-8 byte order mark. Blank lines are
//! skipped and every field is trimmed.

use crate::domain::topsis::RawDecisionTable;
use crate::ports::{DecisionTableParser, TableFormat, TableParseError};

const BOM: char = '\u{feff}';

/// CSV implementation of `DecisionTableParser`.
///
/// Spreadsheet formats are recognized by extension but rejected.
#[derive(Debug, Clone, Default)]
pub struct CsvTableParser;

impl CsvTableParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses already-decoded CSV text. The first record is the header.
    pub fn parse_text(&self, text: &str) -> Result<RawDecisionTable, TableParseError> {
        let mut records = Self::records(text)?.into_iter();
        let headers = records.next().ok_or(TableParseError::EmptyFile)?;
        Ok(RawDecisionTable::new(headers, records.collect()))
    }

    /// Splits text into trimmed records, skipping blank lines.
    fn records(text: &str) -> Result<Vec<Vec<String>>, TableParseError> {
        let text = text.strip_prefix(BOM).unwrap_or(text);

        let mut records = Vec::new();
        let mut record: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut quote_line = 0;
        let mut line = 1;

        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if in_quotes {
                match c {
                    '"' if chars.peek() == Some(&'"') => {
                        chars.next();
                        field.push('"');
                    }
                    '"' => in_quotes = false,
                    '\n' => {
                        line += 1;
                        field.push(c);
                    }
                    _ => field.push(c),
                }
                continue;
            }

            match c {
                '"' if field.trim().is_empty() => {
                    field.clear();
                    in_quotes = true;
                    quote_line = line;
                }
                ',' => record.push(Self::take_field(&mut field)),
                '\r' | '\n' => {
                    if c == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    line += 1;
                    Self::finish_record(&mut records, &mut record, &mut field);
                }
                _ => field.push(c),
            }
        }

        if in_quotes {
            return Err(TableParseError::UnterminatedQuote { line: quote_line });
        }
        Self::finish_record(&mut records, &mut record, &mut field);

        Ok(records)
    }

    fn take_field(field: &mut String) -> String {
        let value = field.trim().to_string();
        field.clear();
        value
    }

    fn finish_record(
        records: &mut Vec<Vec<String>>,
        record: &mut Vec<String>,
        field: &mut String,
    ) {
        let last = Self::take_field(field);
        if record.is_empty() && last.is_empty() {
            return;
        }
        record.push(last);
        records.push(std::mem::take(record));
    }
}

impl DecisionTableParser for CsvTableParser {
    fn parse(&self, filename: &str, content: &[u8]) -> Result<RawDecisionTable, TableParseError> {
        match TableFormat::from_filename(filename) {
            Some(TableFormat::Csv) => {
                let text =
                    std::str::from_utf8(content).map_err(|_| TableParseError::InvalidUtf8)?;
                self.parse_text(text)
            }
            _ => Err(TableParseError::unsupported(filename)),
        }
    }

    fn supports(&self, format: TableFormat) -> bool {
        format == TableFormat::Csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> RawDecisionTable {
        CsvTableParser::new().parse_text(text).unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Basic parsing
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn parses_header_and_rows() {
        let table = parse("Model,Price,Storage\nM1,250,16\nM2,200,32\n");
        assert_eq!(table.headers, vec!["Model", "Price", "Storage"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["M2", "200", "32"]);
    }

    #[test]
    fn accepts_crlf_and_missing_trailing_newline() {
        let table = parse("A,B\r\nx,1\r\ny,2");
        assert_eq!(table.rows, vec![vec!["x", "1"], vec!["y", "2"]]);
    }

    #[test]
    fn strips_byte_order_mark() {
        let table = parse("\u{feff}Fund,Return\nF1,3\n");
        assert_eq!(table.headers[0], "Fund");
    }

    #[test]
    fn skips_blank_lines_and_trims_fields() {
        let table = parse("A , B\n\n  x ,  1 \n   \ny,2\n\n");
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["x", "1"], vec!["y", "2"]]);
    }

    #[test]
    fn keeps_empty_cells() {
        let table = parse("A,B,C\nx,,3\n");
        assert_eq!(table.rows[0], vec!["x", "", "3"]);
    }

    // ───────────────────────────────────────────────────────────────
    // Quoting
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn quoted_fields_may_contain_commas_and_newlines() {
        let table = parse("Name,Score\n\"Acme, Inc.\",5\n\"Two\nLines\",6\n");
        assert_eq!(table.rows[0][0], "Acme, Inc.");
        assert_eq!(table.rows[1][0], "Two\nLines");
        assert_eq!(table.rows[1][1], "6");
    }

    #[test]
    fn doubled_quotes_are_unescaped() {
        let table = parse("Name,Score\n\"The \"\"Best\"\" One\",1\n");
        assert_eq!(table.rows[0][0], "The \"Best\" One");
    }

    #[test]
    fn unterminated_quote_reports_start_line() {
        let err = CsvTableParser::new()
            .parse_text("A,B\nx,1\n\"broken,2\n")
            .unwrap_err();
        assert_eq!(err, TableParseError::UnterminatedQuote { line: 3 });
    }

    // ───────────────────────────────────────────────────────────────
    // Port behavior
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn empty_file_is_rejected() {
        let parser = CsvTableParser::new();
        assert_eq!(parser.parse("data.csv", b"").unwrap_err(), TableParseError::EmptyFile);
        assert_eq!(parser.parse("data.csv", b"\n\n").unwrap_err(), TableParseError::EmptyFile);
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = CsvTableParser::new()
            .parse("data.csv", &[0x41, 0x2c, 0xff, 0xfe])
            .unwrap_err();
        assert_eq!(err, TableParseError::InvalidUtf8);
    }

    #[test]
    fn spreadsheets_and_unknown_extensions_are_unsupported() {
        let parser = CsvTableParser::new();
        assert!(matches!(
            parser.parse("book.xlsx", b"PK"),
            Err(TableParseError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            parser.parse("notes.txt", b"A,B\n"),
            Err(TableParseError::UnsupportedFormat(_))
        ));
        assert!(parser.supports(TableFormat::Csv));
        assert!(!parser.supports(TableFormat::Xls));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let table = CsvTableParser::new().parse("DATA.CSV", b"A,B\nx,1\n").unwrap();
        assert_eq!(table.row_count(), 1);
    }
}
