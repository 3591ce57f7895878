use crate::loader::{read_table, RawTable};
use crate::posting::{Posting, RawPosting};
use internmatch_core::{Result, TfIdfIndex};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Columns every catalog exposes; missing ones read as empty strings
pub const REQUIRED_COLUMNS: &[&str] = &[
    "title",
    "organization",
    "location",
    "requirements",
    "description",
    "mode",
    "duration_weeks",
    "stipend_per_month",
];

static NUMBERED_REQUIREMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^req_\d+").expect("valid regex"));

/// Summary of a loaded catalog
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogStats {
    pub rows: usize,
    pub columns: usize,
    pub delimiter: Option<char>,
    pub requirement_columns: Vec<String>,
    pub missing_columns: Vec<String>,
    pub vocabulary_size: usize,
}

/// Immutable snapshot of postings together with the index fitted on them.
///
/// The index is tied to exactly these postings; document `i` of the index is
/// the profile of posting `i`. There is no way to add or replace postings,
/// a new catalog has to be built instead.
#[derive(Debug, Clone)]
pub struct Catalog {
    postings: Vec<Posting>,
    index: TfIdfIndex,
    stats: CatalogStats,
}

impl Catalog {
    /// Load, normalize and index the tabular source at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let table = read_table(path)?;
        let catalog = Self::from_table(table);
        info!(
            path = %path.display(),
            rows = catalog.stats.rows,
            columns = catalog.stats.columns,
            delimiter = ?catalog.stats.delimiter,
            vocabulary = catalog.stats.vocabulary_size,
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_table(table: RawTable) -> Self {
        let requirement_columns: Vec<usize> = table
            .headers
            .iter()
            .enumerate()
            .filter(|(_, h)| NUMBERED_REQUIREMENT.is_match(h))
            .map(|(i, _)| i)
            .collect();
        let missing_columns: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| table.column(c).is_none())
            .map(|c| c.to_string())
            .collect();

        let positions: Vec<Option<usize>> =
            REQUIRED_COLUMNS.iter().map(|c| table.column(c)).collect();
        let cell = |row: &[String], field: usize| -> String {
            positions[field]
                .and_then(|i| row.get(i))
                .cloned()
                .unwrap_or_default()
        };

        let raw: Vec<RawPosting> = table
            .rows
            .iter()
            .map(|row| RawPosting {
                title: cell(row, 0),
                organization: cell(row, 1),
                location: cell(row, 2),
                requirements: cell(row, 3),
                description: cell(row, 4),
                mode: cell(row, 5),
                duration_weeks: cell(row, 6),
                stipend_per_month: cell(row, 7),
                numbered_requirements: requirement_columns
                    .iter()
                    .map(|&i| row.get(i).cloned().unwrap_or_default())
                    .collect(),
            })
            .collect();

        let mut catalog = Self::from_raw(raw);
        catalog.stats.columns = table.headers.len();
        catalog.stats.delimiter = Some(table.delimiter as char);
        catalog.stats.requirement_columns = requirement_columns
            .iter()
            .map(|&i| table.headers[i].clone())
            .collect();
        catalog.stats.missing_columns = missing_columns;
        catalog
    }

    /// Build a catalog from in-memory rows
    pub fn from_raw(raw: Vec<RawPosting>) -> Self {
        let postings: Vec<Posting> = raw.into_iter().map(RawPosting::normalize).collect();
        let profiles: Vec<&str> = postings.iter().map(|p| p.profile.as_str()).collect();
        let index = TfIdfIndex::fit(&profiles);
        let stats = CatalogStats {
            rows: postings.len(),
            columns: REQUIRED_COLUMNS.len(),
            delimiter: None,
            requirement_columns: Vec::new(),
            missing_columns: Vec::new(),
            vocabulary_size: index.vocabulary_size(),
        };
        Self { postings, index, stats }
    }

    #[inline]
    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Posting> {
        self.postings.get(idx)
    }

    #[inline]
    pub fn index(&self) -> &TfIdfIndex {
        &self.index
    }

    #[inline]
    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_table;
    use internmatch_core::PLACEHOLDER_PROFILE;

    fn table(text: &str) -> RawTable {
        parse_table(text, Path::new("test.csv")).unwrap()
    }

    #[test]
    fn test_missing_columns_default_to_empty() {
        let catalog = Catalog::from_table(table("title,location\nData Intern,Pune\n"));
        let posting = &catalog.postings()[0];
        assert_eq!(posting.organization, "");
        assert_eq!(posting.mode, "");
        assert_eq!(posting.stipend_per_month, None);
        assert!(catalog.stats().missing_columns.contains(&"description".to_string()));
    }

    #[test]
    fn test_numbered_requirements_in_column_order() {
        let catalog = Catalog::from_table(table(
            "title,req_2,notes,req_1,req_x\nIntern,sql,ignored,python,skip\n",
        ));
        assert_eq!(catalog.postings()[0].all_requirements, "sql python");
        assert_eq!(catalog.stats().requirement_columns, vec!["req_2", "req_1"]);
    }

    #[test]
    fn test_index_matches_postings() {
        let catalog = Catalog::from_table(table(
            "title,requirements\nBackend Intern,rust tokio\n,\nData Intern,python\n",
        ));
        // the blank row is skipped by the reader
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.index().len(), 2);
        assert!(catalog.index().term_index("tokio").is_some());
    }

    #[test]
    fn test_blank_profile_rows_kept_with_placeholder() {
        let catalog = Catalog::from_table(table("title,mode\n,Remote\nIntern,Onsite\n"));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.postings()[0].profile, PLACEHOLDER_PROFILE);
        assert!(catalog.index().documents()[0].is_zero());
    }

    #[test]
    fn test_stipend_and_duration_coercion() {
        let catalog = Catalog::from_table(table(
            "title,stipend_per_month,duration_weeks\nA,\"20,000\",12\nB,Unpaid,soon\n",
        ));
        assert_eq!(catalog.postings()[0].stipend_per_month, Some(20000.0));
        assert_eq!(catalog.postings()[0].duration_weeks, Some(12.0));
        assert_eq!(catalog.postings()[1].stipend_per_month, None);
        assert_eq!(catalog.postings()[1].duration_weeks, None);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_table(table("title,location\n"));
        assert!(catalog.is_empty());
        assert_eq!(catalog.stats().vocabulary_size, 0);
    }

    #[test]
    fn test_load_records_delimiter() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("internships.tsv");
        std::fs::write(&path, "title\tlocation\nData Intern\tPune\n").unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.stats().delimiter, Some('\t'));
        assert_eq!(catalog.stats().columns, 2);
    }
}
