//! Ingestion of `job_time_sets.xml` documents.

pub mod parse;
pub mod tree;

pub use parse::{JOBS_TAG, TIME_SET_TAG, ingest, ingest_tree, parse_decimal};
pub use tree::{Element, parse_document};
