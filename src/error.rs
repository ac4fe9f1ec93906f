//! Error types shared by ingestion and the query side.

use thiserror::Error;

/// Fatal to a single ingestion attempt. The attempted model is discarded.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("job element <{tag}> has no identifier attribute")]
    MissingIdentifier { tag: String },

    #[error("job '{job_id}' has a time_set without a data source name")]
    MissingDataSourceName { job_id: String },

    #[error("job '{job_id}' field <{field}> has no value")]
    MissingValue { job_id: String, field: String },

    #[error("job '{job_id}' variation '{variation}' has invalid measurement {raw:?}")]
    InvalidMeasurement {
        job_id: String,
        variation: String,
        raw: String,
    },

    #[error("duplicate job id '{0}'")]
    DuplicateJobId(String),
}

impl From<quick_xml::events::attributes::AttrError> for IngestError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        IngestError::Xml(err.into())
    }
}

/// Query-time lookup miss. Never mutates anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("unknown data source '{0}'")]
    DataSource(String),

    #[error("unknown variation '{variation}' in data source '{data_source}'")]
    Variation {
        data_source: String,
        variation: String,
    },

    #[error("unknown job id '{0}'")]
    Job(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A measurement points at a job the registry does not hold.
    #[error("measurement references missing job '{job_id}'")]
    DanglingReference { job_id: String },
}
