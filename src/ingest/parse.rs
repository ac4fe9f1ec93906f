use crate::error::IngestError;
use crate::ingest::tree::{Element, parse_document};
use crate::model::{Attribute, DataSourceIndex, Job, JobRegistry, Measurement, Model};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

/// Tag of the element whose children are the job elements.
pub const JOBS_TAG: &str = "jobs";

/// Tag of a grouped set of measurements inside a job.
pub const TIME_SET_TAG: &str = "time_set";

// Period decimal separator, optional exponent. Rejects "12,5", "inf", "NaN".
static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("decimal pattern is valid")
});

/// Parse a raw `job_time_sets.xml` document into a fresh `Model`.
///
/// A document whose root is not `<jobs>`, or whose `<jobs>` is empty, yields
/// an empty model. Any failure discards everything built so far.
pub fn ingest(bytes: &[u8]) -> Result<Model, IngestError> {
    let root = parse_document(bytes)?
        .ok_or_else(|| IngestError::Malformed("document has no root element".to_string()))?;
    ingest_tree(&root)
}

/// Same as [`ingest`] for an already parsed element tree.
pub fn ingest_tree(root: &Element) -> Result<Model, IngestError> {
    if root.name != JOBS_TAG {
        debug!(root = %root.name, "no <{}> collection, loading empty model", JOBS_TAG);
        return Ok(Model::default());
    }

    let mut jobs = JobRegistry::default();
    let mut index = DataSourceIndex::default();

    for element in &root.children {
        let (job, measurements) = ingest_job(element)?;
        debug!(
            job_id = job.id(),
            attributes = job.attributes().len(),
            measurements = measurements.len(),
            "ingested job"
        );

        // Register first so the index never refers to an unknown id.
        let job_id = job.id().to_string();
        jobs.insert(job)
            .map_err(|rejected| IngestError::DuplicateJobId(rejected.id().to_string()))?;

        for (data_source, variation, value) in measurements {
            index.push(
                &data_source,
                &variation,
                Measurement {
                    value,
                    job_id: job_id.clone(),
                },
            );
        }
    }

    let model = Model::new(jobs, index);
    info!(
        jobs = model.jobs().len(),
        data_sources = model.list_data_sources().len(),
        "ingested job time sets"
    );
    Ok(model)
}

/// Measurement as (data source, variation, value), pending job registration.
type PendingMeasurement = (String, String, f64);

fn ingest_job(element: &Element) -> Result<(Job, Vec<PendingMeasurement>), IngestError> {
    let id_attribute = element
        .attributes
        .first()
        .cloned()
        .ok_or_else(|| IngestError::MissingIdentifier {
            tag: element.name.clone(),
        })?;

    let mut job = Job::new(id_attribute);
    let mut measurements = Vec::new();

    for child in &element.children {
        if child.name == TIME_SET_TAG {
            ingest_time_set(&mut job, child, &mut measurements)?;
            continue;
        }

        let value = child
            .inner_text()
            .ok_or_else(|| IngestError::MissingValue {
                job_id: job.id().to_string(),
                field: child.name.clone(),
            })?;
        job.push_attribute(Attribute::new(child.name.clone(), value));
    }

    Ok((job, measurements))
}

fn ingest_time_set(
    job: &mut Job,
    time_set: &Element,
    out: &mut Vec<PendingMeasurement>,
) -> Result<(), IngestError> {
    let data_source = time_set
        .attributes
        .first()
        .map(|a| a.value.clone())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| IngestError::MissingDataSourceName {
            job_id: job.id().to_string(),
        })?;

    for variation in &time_set.children {
        let raw = variation.inner_text().unwrap_or_default();
        let value = parse_decimal(&raw).ok_or_else(|| IngestError::InvalidMeasurement {
            job_id: job.id().to_string(),
            variation: variation.name.clone(),
            raw: raw.clone(),
        })?;

        job.push_attribute(Attribute::new(
            format!("{}_{}", data_source, variation.name),
            raw,
        ));
        out.push((data_source.clone(), variation.name.clone(), value));
    }

    Ok(())
}

/// Locale-invariant decimal parse: `.` is the only decimal separator.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if !DECIMAL_RE.is_match(raw) {
        return None;
    }
    // Out-of-range literals parse to infinity.
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ONE_JOB: &str = r#"<jobs>
  <job id="J1">
    <owner>alice</owner>
    <time_set name="wall_clock">
      <compile>12.5</compile>
      <link>3.25</link>
    </time_set>
  </job>
</jobs>"#;

    fn attrs(job: &Job) -> Vec<(&str, &str)> {
        job.attributes()
            .iter()
            .map(|a| (a.name.as_str(), a.value.as_str()))
            .collect()
    }

    #[test]
    fn ingests_plain_and_grouped_fields_in_order() {
        let model = ingest(ONE_JOB.as_bytes()).unwrap();

        let job = model.jobs().get("J1").unwrap();
        assert_eq!(
            attrs(job),
            vec![
                ("id", "J1"),
                ("owner", "alice"),
                ("wall_clock_compile", "12.5"),
                ("wall_clock_link", "3.25"),
            ]
        );

        assert_eq!(model.list_data_sources(), vec!["wall_clock"]);
        assert_eq!(
            model.index().list_variations("wall_clock").unwrap(),
            vec!["compile", "link"]
        );
        assert_eq!(
            model.index().measurements("wall_clock", "link").unwrap(),
            &[Measurement {
                value: 3.25,
                job_id: "J1".to_string()
            }]
        );
    }

    #[test]
    fn missing_or_empty_collection_is_an_empty_model() {
        for doc in ["<jobs/>", "<jobs></jobs>", "<report><job id=\"1\"/></report>"] {
            let model = ingest(doc.as_bytes()).unwrap();
            assert!(model.is_empty(), "{doc}");
            assert!(model.index().is_empty(), "{doc}");
        }
    }

    #[test]
    fn no_root_element_is_malformed() {
        assert!(matches!(
            ingest(b"   ").unwrap_err(),
            IngestError::Malformed(_)
        ));
    }

    #[test]
    fn job_without_attributes_has_no_identifier() {
        let err = ingest(b"<jobs><job><owner>x</owner></job></jobs>").unwrap_err();
        assert!(matches!(err, IngestError::MissingIdentifier { tag } if tag == "job"));
    }

    #[test]
    fn first_attribute_is_the_identifier_whatever_its_name() {
        let model = ingest(br#"<jobs><job key="k9" id="ignored"/></jobs>"#).unwrap();
        let job = model.jobs().get("k9").unwrap();
        assert_eq!(attrs(job), vec![("key", "k9")]);
    }

    #[test]
    fn empty_plain_field_is_missing_value() {
        let err = ingest(br#"<jobs><job id="J1"><owner/></job></jobs>"#).unwrap_err();
        match err {
            IngestError::MissingValue { job_id, field } => {
                assert_eq!(job_id, "J1");
                assert_eq!(field, "owner");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn duplicate_job_id_fails() {
        let doc = br#"<jobs><job id="J1"/><job id="J1"/></jobs>"#;
        assert!(matches!(
            ingest(doc).unwrap_err(),
            IngestError::DuplicateJobId(id) if id == "J1"
        ));
    }

    #[test]
    fn invalid_measurement_reports_job_variation_and_text() {
        let doc = br#"<jobs><job id="J1"><time_set name="t"><compile>abc</compile></time_set></job></jobs>"#;
        match ingest(doc).unwrap_err() {
            IngestError::InvalidMeasurement {
                job_id,
                variation,
                raw,
            } => {
                assert_eq!(
                    (job_id.as_str(), variation.as_str(), raw.as_str()),
                    ("J1", "compile", "abc")
                );
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn overflowing_measurement_is_invalid() {
        let doc = br#"<jobs><job id="J1"><n>x</n><time_set name="t"><v>1e400</v></time_set></job></jobs>"#;
        assert!(matches!(
            ingest(doc).unwrap_err(),
            IngestError::InvalidMeasurement { raw, .. } if raw == "1e400"
        ));
    }

    #[test]
    fn time_set_without_name_fails() {
        let doc = br#"<jobs><job id="J1"><time_set><a>1</a></time_set></job></jobs>"#;
        assert!(matches!(
            ingest(doc).unwrap_err(),
            IngestError::MissingDataSourceName { job_id } if job_id == "J1"
        ));
    }

    #[test]
    fn decimal_parsing_ignores_host_locale_conventions() {
        assert_eq!(parse_decimal("12.5"), Some(12.5));
        assert_eq!(parse_decimal("-3"), Some(-3.0));
        assert_eq!(parse_decimal("1e-05"), Some(0.00001));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal(" 7.25 "), Some(7.25));

        assert_eq!(parse_decimal("12,5"), None);
        assert_eq!(parse_decimal("1,000.5"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("1e400"), None);
        assert_eq!(parse_decimal("-1e400"), None);
        assert_eq!(parse_decimal(""), None);
    }
}
