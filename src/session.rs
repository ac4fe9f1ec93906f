//! Holder of the currently published model.
//!
//! Loads build the next model off to the side and publish it with a single
//! `Arc` swap, so readers only ever see a complete model.

use crate::error::IngestError;
use crate::ingest::ingest;
use crate::model::Model;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Default)]
pub struct Session {
    current: Option<Arc<Model>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the published model. Stays valid across later loads.
    pub fn model(&self) -> Option<Arc<Model>> {
        self.current.clone()
    }

    /// Replace the published model on success; keep it untouched on failure.
    pub fn load(&mut self, bytes: &[u8]) -> Result<Arc<Model>, IngestError> {
        match ingest(bytes) {
            Ok(model) => {
                let model = Arc::new(model);
                self.current = Some(Arc::clone(&model));
                Ok(model)
            }
            Err(err) => {
                warn!(error = %err, retained = self.current.is_some(), "load rejected");
                Err(err)
            }
        }
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}
