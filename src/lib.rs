//! Loader and series engine for `job_time_sets.xml` job profiles.
//!
//! Pipeline: raw document -> [`ingest`] -> [`Model`] -> [`build_series`] per
//! data source -> [`resolve_job`] for a selected point. [`Session`] owns the
//! currently published model.

pub mod diagnostics;
pub mod error;
pub mod ingest;
pub mod model;
pub mod render;
pub mod report;
pub mod select;
pub mod series;
pub mod session;
pub mod viewport;

pub use error::{IngestError, NotFoundError, SeriesError};
pub use ingest::ingest;
pub use model::{Attribute, DataSourceIndex, Job, JobRegistry, Measurement, Model};
pub use select::resolve_job;
pub use series::{PALETTE, Point, Series, SeriesOptions, build_series, build_series_with};
pub use session::Session;
pub use viewport::{Window, initial_window, zoom};

/// Input file names must contain this to be accepted for loading.
pub const INPUT_FILE_MARKER: &str = "job_time_sets.xml";

/// File-selection gate applied before a path is ingested.
pub fn accepts_input_path(path: &str) -> bool {
    path.contains(INPUT_FILE_MARKER)
}

pub fn list_data_sources(model: &Model) -> Vec<String> {
    model
        .list_data_sources()
        .into_iter()
        .map(str::to_string)
        .collect()
}
