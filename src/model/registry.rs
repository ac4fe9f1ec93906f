use crate::error::NotFoundError;
use crate::model::Job;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Jobs keyed by id, iterated in insertion (document) order.
#[derive(Debug, Clone, Default)]
pub struct JobRegistry {
    jobs: IndexMap<String, Job>,
}

impl JobRegistry {
    pub fn get(&self, id: &str) -> Result<&Job, NotFoundError> {
        self.jobs
            .get(id)
            .ok_or_else(|| NotFoundError::Job(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.jobs.contains_key(id)
    }

    pub fn list_ids(&self) -> Vec<&str> {
        self.jobs.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Hands the job back if its id is already taken.
    pub(crate) fn insert(&mut self, job: Job) -> Result<(), Job> {
        match self.jobs.entry(job.id().to_string()) {
            Entry::Occupied(_) => Err(job),
            Entry::Vacant(slot) => {
                slot.insert(job);
                Ok(())
            }
        }
    }
}
