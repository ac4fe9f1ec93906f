//! Series construction: one ranked, labeled, colored point list per variation.

use crate::error::SeriesError;
use crate::model::{Job, Measurement, Model};
use indexmap::IndexMap;
use serde::Serialize;

/// Fixed palette cycled over points in rank order.
pub const PALETTE: [&str; 5] = ["#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f"];

/// Attribute position used as a point's label. Index 0 is the identifier,
/// so 1 is the first field recorded after it.
pub const LABEL_ATTRIBUTE_INDEX: usize = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesOptions {
    pub label_attribute_index: usize,
    pub palette: Vec<String>,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            label_attribute_index: LABEL_ATTRIBUTE_INDEX,
            palette: PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub value: f64,
    pub label: String,
    pub tooltip: String,
    pub job_id: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub variation: String,
    /// Sorted by value, highest first.
    pub points: Vec<Point>,
}

/// Build every variation's series for `data_source` with default options.
pub fn build_series(
    model: &Model,
    data_source: &str,
) -> Result<IndexMap<String, Series>, SeriesError> {
    build_series_with(model, data_source, &SeriesOptions::default())
}

pub fn build_series_with(
    model: &Model,
    data_source: &str,
    options: &SeriesOptions,
) -> Result<IndexMap<String, Series>, SeriesError> {
    let variations = model.index().variations(data_source)?;

    let mut out = IndexMap::with_capacity(variations.len());
    for (variation, measurements) in variations {
        let series = build_variation(model, variation, measurements, options)?;
        out.insert(variation.clone(), series);
    }
    Ok(out)
}

fn build_variation(
    model: &Model,
    variation: &str,
    measurements: &[Measurement],
    options: &SeriesOptions,
) -> Result<Series, SeriesError> {
    let mut points = Vec::with_capacity(measurements.len());
    for m in measurements {
        let job = model
            .jobs()
            .get(&m.job_id)
            .map_err(|_| SeriesError::DanglingReference {
                job_id: m.job_id.clone(),
            })?;

        points.push(Point {
            value: m.value,
            label: label_for(job, options.label_attribute_index),
            tooltip: tooltip_for(job),
            job_id: job.id().to_string(),
            color: String::new(),
        });
    }

    // Stable: equal values keep document order.
    points.sort_by(|a, b| b.value.total_cmp(&a.value));

    if !options.palette.is_empty() {
        for (rank, point) in points.iter_mut().enumerate() {
            point.color = options.palette[rank % options.palette.len()].clone();
        }
    }

    Ok(Series {
        variation: variation.to_string(),
        points,
    })
}

// Jobs too short for the configured index fall back to their id.
fn label_for(job: &Job, index: usize) -> String {
    job.attribute(index)
        .map(|a| a.value.clone())
        .unwrap_or_else(|| job.id().to_string())
}

fn tooltip_for(job: &Job) -> String {
    job.attributes()
        .iter()
        .map(|a| a.display_line())
        .collect::<Vec<_>>()
        .join("\n")
}
