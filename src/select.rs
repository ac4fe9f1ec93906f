//! Detail lookup for a selected point.

use crate::error::NotFoundError;
use crate::model::Model;

/// The job's attributes as `name: value` lines, in document order.
pub fn resolve_job(model: &Model, job_id: &str) -> Result<Vec<String>, NotFoundError> {
    let job = model.jobs().get(job_id)?;
    Ok(job.attributes().iter().map(|a| a.display_line()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ingest;
    use crate::series::build_series;
    use pretty_assertions::assert_eq;

    const DOC: &str = r#"<jobs>
  <job id="42">
    <job_name>upload</job_name>
    <physical_job>src/upload.cpp__L:_17</physical_job>
    <time_set name="wait_time"><max_time>0.75</max_time></time_set>
  </job>
</jobs>"#;

    #[test]
    fn lines_follow_document_order() {
        let model = ingest(DOC.as_bytes()).unwrap();
        assert_eq!(
            resolve_job(&model, "42").unwrap(),
            vec![
                "id: 42",
                "job_name: upload",
                "physical_job: src/upload.cpp__L:_17",
                "wait_time_max_time: 0.75",
            ]
        );
    }

    #[test]
    fn matches_the_point_tooltip() {
        let model = ingest(DOC.as_bytes()).unwrap();
        let series = build_series(&model, "wait_time").unwrap();
        let point = &series["max_time"].points[0];
        assert_eq!(
            resolve_job(&model, &point.job_id).unwrap().join("\n"),
            point.tooltip
        );
    }

    #[test]
    fn stale_id_is_not_found() {
        let model = ingest(DOC.as_bytes()).unwrap();
        assert_eq!(
            resolve_job(&model, "7").unwrap_err(),
            NotFoundError::Job("7".to_string())
        );
    }
}
