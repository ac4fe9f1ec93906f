//! In-memory model: job registry plus the data source index.
//!
//! A `Model` is built wholesale by `ingest` and never mutated afterwards.
//! Measurements refer to jobs by id only.

pub mod index;
pub mod job;
pub mod registry;

pub use index::{DataSourceIndex, Variations};
pub use job::{Attribute, Job, Measurement};
pub use registry::JobRegistry;

#[derive(Debug, Clone, Default)]
pub struct Model {
    jobs: JobRegistry,
    index: DataSourceIndex,
}

impl Model {
    pub(crate) fn new(jobs: JobRegistry, index: DataSourceIndex) -> Self {
        Self { jobs, index }
    }

    pub fn jobs(&self) -> &JobRegistry {
        &self.jobs
    }

    pub fn index(&self) -> &DataSourceIndex {
        &self.index
    }

    pub fn list_data_sources(&self) -> Vec<&str> {
        self.index.list_data_sources()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
