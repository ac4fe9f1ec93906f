//! Visible-window policy over a series' points.

use serde::Serialize;

/// Points shown when a series is first displayed.
pub const INITIAL_WINDOW: usize = 25;

/// Factor applied by one zoom-in step; zoom-out uses its inverse.
pub const ZOOM_IN_FACTOR: f64 = 0.8;
pub const ZOOM_OUT_FACTOR: f64 = 1.25;

/// Half-open point range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

pub fn initial_window(point_count: usize) -> Window {
    Window {
        start: 0,
        end: point_count.min(INITIAL_WINDOW),
    }
}

/// New width after scaling by `factor`. Below 1 zooms in, above 1 zooms out.
/// Only clamped at zero; fitting to the data range is up to the renderer.
pub fn zoom(width: f64, factor: f64) -> f64 {
    (width * factor).max(0.0)
}

/// Zoom anchored at `start`: returns `(start, new_width)`.
pub fn zoom_at(start: f64, width: f64, factor: f64) -> (f64, f64) {
    (start, zoom(width, factor))
}
