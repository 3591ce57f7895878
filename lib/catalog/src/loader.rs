//! Tabular source reading.
//!
//! The delimiter is not declared by the source, so a short ordered list of
//! conventions is tried first and the header line is sniffed last.

use internmatch_core::{Error, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Delimiters tried in order; the first parse with more than one column wins
pub const DELIMITER_ATTEMPTS: &[u8] = &[b',', b'\t'];

/// Candidates considered when sniffing the header line
pub const SNIFF_CANDIDATES: &[u8] = &[b',', b'\t', b';', b'|'];

/// Header plus rows, every row padded or cut to the header width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub delimiter: u8,
}

impl RawTable {
    /// Position of the first column called `name`
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Read and parse the file at `path`
pub fn read_table(path: &Path) -> Result<RawTable> {
    if !path.is_file() {
        return Err(Error::CatalogNotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    parse_table(&text, path)
}

/// Parse tabular `text`; `origin` only labels errors
pub fn parse_table(text: &str, origin: &Path) -> Result<RawTable> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for &delimiter in DELIMITER_ATTEMPTS {
        match parse_with(text, delimiter) {
            Ok(table) if table.headers.len() > 1 => return Ok(table),
            Ok(_) => debug!(delimiter = %(delimiter as char).escape_default(), "single column parse; trying next"),
            Err(e) => debug!(delimiter = %(delimiter as char).escape_default(), error = %e, "parse failed; trying next"),
        }
    }

    let delimiter = sniff_delimiter(text);
    warn!(
        path = %origin.display(),
        delimiter = %(delimiter as char).escape_default(),
        "no standard delimiter produced multiple columns; using detected delimiter"
    );
    let table = parse_with(text, delimiter).map_err(|e| Error::CatalogUnparsable {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })?;
    if table.headers.is_empty() {
        return Err(Error::CatalogUnparsable {
            path: origin.to_path_buf(),
            reason: "no header row".to_string(),
        });
    }
    Ok(table)
}

fn parse_with(text: &str, delimiter: u8) -> std::result::Result<RawTable, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    // a blank first line parses as a single empty header
    let headers = if headers.len() == 1 && headers[0].is_empty() {
        Vec::new()
    } else {
        headers
    };

    let width = headers.len();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut row: Vec<String> = record.iter().take(width).map(str::to_string).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    Ok(RawTable { headers, rows, delimiter })
}

/// Most frequent candidate delimiter in the first non-blank line, `,` if none occur
pub fn sniff_delimiter(text: &str) -> u8 {
    let header = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    SNIFF_CANDIDATES
        .iter()
        .map(|&d| (d, header.bytes().filter(|&b| b == d).count()))
        .filter(|(_, count)| *count > 0)
        // earlier candidates win ties
        .fold(None, |best: Option<(u8, usize)>, (d, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((d, count)),
        })
        .map(|(d, _)| d)
        .unwrap_or(b',')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn origin() -> &'static Path {
        Path::new("test.csv")
    }

    #[test]
    fn test_comma_table() {
        let table = parse_table("title , location\nIntern,Pune\n", origin()).unwrap();
        assert_eq!(table.delimiter, b',');
        assert_eq!(table.headers, vec!["title", "location"]);
        assert_eq!(table.rows, vec![vec!["Intern".to_string(), "Pune".to_string()]]);
    }

    #[test]
    fn test_tab_table() {
        let table = parse_table("title\tlocation\nIntern, Data\tPune\n", origin()).unwrap();
        assert_eq!(table.delimiter, b'\t');
        assert_eq!(table.rows[0][0], "Intern, Data");
    }

    #[test]
    fn test_semicolon_table_is_sniffed() {
        let table = parse_table("title;location;mode\nIntern;Pune;Remote\n", origin()).unwrap();
        assert_eq!(table.delimiter, b';');
        assert_eq!(table.column("mode"), Some(2));
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let table = parse_table("a,b,c\n1,2\n1,2,3,4\n", origin()).unwrap();
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
        assert_eq!(table.rows[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_bom_and_blank_rows() {
        let table = parse_table("\u{feff}title,mode\n,\nIntern,Remote\n", origin()).unwrap();
        assert_eq!(table.headers[0], "title");
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_empty_source_is_unparsable() {
        assert!(matches!(
            parse_table("", origin()),
            Err(Error::CatalogUnparsable { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = read_table(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, Error::CatalogNotFound(_)));
    }

    #[test]
    fn test_read_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title,stipend_per_month").unwrap();
        writeln!(file, "Intern,\"10,000\"").unwrap();
        let table = read_table(file.path()).unwrap();
        assert_eq!(table.rows[0][1], "10,000");
    }

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(sniff_delimiter("a|b|c\n"), b'|');
        assert_eq!(sniff_delimiter("single\n"), b',');
    }
}
