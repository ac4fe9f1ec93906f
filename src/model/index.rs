use crate::error::NotFoundError;
use crate::model::Measurement;
use indexmap::IndexMap;

/// Measurements of one data source, grouped by variation name.
pub type Variations = IndexMap<String, Vec<Measurement>>;

/// data source -> variation -> measurements, all in document order.
#[derive(Debug, Clone, Default)]
pub struct DataSourceIndex {
    sources: IndexMap<String, Variations>,
}

impl DataSourceIndex {
    pub fn list_data_sources(&self) -> Vec<&str> {
        self.sources.keys().map(String::as_str).collect()
    }

    pub fn variations(&self, data_source: &str) -> Result<&Variations, NotFoundError> {
        self.sources
            .get(data_source)
            .ok_or_else(|| NotFoundError::DataSource(data_source.to_string()))
    }

    pub fn list_variations(&self, data_source: &str) -> Result<Vec<&str>, NotFoundError> {
        Ok(self
            .variations(data_source)?
            .keys()
            .map(String::as_str)
            .collect())
    }

    pub fn measurements(
        &self,
        data_source: &str,
        variation: &str,
    ) -> Result<&[Measurement], NotFoundError> {
        self.variations(data_source)?
            .get(variation)
            .map(Vec::as_slice)
            .ok_or_else(|| NotFoundError::Variation {
                data_source: data_source.to_string(),
                variation: variation.to_string(),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Every measurement in the index, in no particular grouping.
    pub fn all_measurements(&self) -> impl Iterator<Item = &Measurement> {
        self.sources
            .values()
            .flat_map(|variations| variations.values())
            .flatten()
    }

    pub(crate) fn push(&mut self, data_source: &str, variation: &str, measurement: Measurement) {
        self.sources
            .entry(data_source.to_string())
            .or_default()
            .entry(variation.to_string())
            .or_default()
            .push(measurement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn m(value: f64, job_id: &str) -> Measurement {
        Measurement {
            value,
            job_id: job_id.to_string(),
        }
    }

    #[test]
    fn groups_by_source_then_variation() {
        let mut index = DataSourceIndex::default();
        index.push("wait_time", "avg_time", m(1.0, "J1"));
        index.push("completion_time", "max_time", m(2.0, "J1"));
        index.push("wait_time", "avg_time", m(3.0, "J2"));

        assert_eq!(
            index.list_data_sources(),
            vec!["wait_time", "completion_time"]
        );
        assert_eq!(
            index.measurements("wait_time", "avg_time").unwrap(),
            &[m(1.0, "J1"), m(3.0, "J2")]
        );
    }

    #[test]
    fn missing_source_and_variation() {
        let mut index = DataSourceIndex::default();
        index.push("wall_clock", "compile", m(1.0, "J1"));

        assert_eq!(
            index.list_variations("cpu").unwrap_err(),
            NotFoundError::DataSource("cpu".to_string())
        );
        assert_eq!(
            index.measurements("wall_clock", "link").unwrap_err(),
            NotFoundError::Variation {
                data_source: "wall_clock".to_string(),
                variation: "link".to_string(),
            }
        );
    }
}
