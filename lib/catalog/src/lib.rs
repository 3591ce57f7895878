//! # internmatch Catalog
//!
//! Loads the internship catalog from a delimited text file, repairs and
//! normalizes every field, and fits the TF-IDF index over the derived
//! posting profiles.
//!
//! ```rust
//! use internmatch_catalog::{Catalog, RawPosting};
//!
//! let catalog = Catalog::from_raw(vec![RawPosting {
//!     title: "Data Intern".to_string(),
//!     requirements: "Python, SQL".to_string(),
//!     ..Default::default()
//! }]);
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.postings()[0].profile, "Data Intern Python, SQL");
//! ```

pub mod catalog;
pub mod loader;
pub mod normalize;
pub mod posting;

pub use catalog::{Catalog, CatalogStats, REQUIRED_COLUMNS};
pub use loader::{parse_table, read_table, RawTable};
pub use posting::{Posting, RawPosting};
