//! Report data: everything the HTML page needs, precomputed from a model.

use crate::error::SeriesError;
use crate::model::Model;
use crate::series::{Series, SeriesOptions, build_series_with};
use crate::viewport::{INITIAL_WINDOW, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DataSourceView {
    pub name: String,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewportView {
    pub initial_points: usize,
    pub zoom_in: f64,
    pub zoom_out: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsView {
    pub jobs: usize,
    pub data_sources: usize,
    pub measurements: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub title: String,
    pub data_sources: Vec<DataSourceView>,
    /// job id -> `name: value` lines for the properties panel.
    pub jobs: IndexMap<String, Vec<String>>,
    pub viewport: ViewportView,
    pub totals: TotalsView,
}

/// Build report data for every data source in the model.
pub fn build_report_data(
    title: &str,
    model: &Model,
    options: &SeriesOptions,
) -> Result<ReportData, SeriesError> {
    let mut data_sources = Vec::new();
    for name in model.list_data_sources() {
        let series = build_series_with(model, name, options)?;
        data_sources.push(DataSourceView {
            name: name.to_string(),
            series: series.into_values().collect(),
        });
    }

    let jobs: IndexMap<String, Vec<String>> = model
        .jobs()
        .iter()
        .map(|job| {
            let lines = job.attributes().iter().map(|a| a.display_line()).collect();
            (job.id().to_string(), lines)
        })
        .collect();

    Ok(ReportData {
        title: title.to_string(),
        totals: TotalsView {
            jobs: jobs.len(),
            data_sources: data_sources.len(),
            measurements: model.index().all_measurements().count(),
        },
        data_sources,
        jobs,
        viewport: ViewportView {
            initial_points: INITIAL_WINDOW,
            zoom_in: ZOOM_IN_FACTOR,
            zoom_out: ZOOM_OUT_FACTOR,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ingest;
    use pretty_assertions::assert_eq;

    #[test]
    fn collects_sources_series_and_jobs() {
        let xml = br#"<jobs>
  <job id="1"><job_name>a</job_name>
    <time_set name="completion_time"><avg_time>1</avg_time><max_time>4</max_time></time_set>
    <time_set name="wait_time"><avg_time>0.5</avg_time></time_set>
  </job>
  <job id="2"><job_name>b</job_name>
    <time_set name="completion_time"><avg_time>3</avg_time><max_time>3</max_time></time_set>
  </job>
</jobs>"#;
        let model = ingest(xml).unwrap();
        let data = build_report_data("demo", &model, &SeriesOptions::default()).unwrap();

        let names: Vec<&str> = data.data_sources.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["completion_time", "wait_time"]);

        let variations: Vec<&str> = data.data_sources[0]
            .series
            .iter()
            .map(|s| s.variation.as_str())
            .collect();
        assert_eq!(variations, vec!["avg_time", "max_time"]);

        assert_eq!(data.jobs["2"][1], "job_name: b");
        assert_eq!(
            data.jobs["1"],
            crate::select::resolve_job(&model, "1").unwrap()
        );
        let ids: Vec<&str> = data.jobs.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(data.totals.jobs, 2);
        assert_eq!(data.totals.measurements, 5);
    }
}
