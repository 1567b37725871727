//! Dataset acquisition: fetch a JSON dataset and map its rows into
//! [`DatasetRecord`]s.
//!
//! Sources are either an HTTP endpoint returning JSON (the HGNC complete
//! set, an NFL play-by-play export) or a local JSON file. Row extraction
//! is shape-tolerant: a top-level array of rows, or the HGNC envelope
//! (`{"response": {"docs": [...]}}`). Which source columns become the
//! record's id/date/category/description is decided by the configured
//! [`FieldProfile`].

pub mod error;
pub mod json_import;

pub use error::IngestError;
pub use json_import::{DatasetFetcher, JsonImporter};
