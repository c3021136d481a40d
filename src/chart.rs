//! Presentation mapping: aggregated series to SVG-ready geometry.
//!
//! Pure and stateless. The vertical scale is the nice axis ceiling from
//! [`crate::aggregate::axis`], so tick labels and point geometry always
//! agree.

use serde::Serialize;

use crate::aggregate::axis::nice_currency_max;

/// Number of intervals the y axis is divided into.
const TICK_INTERVALS: usize = 4;

#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Geometry for a line chart of fixed canvas dimensions.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ChartGeometry {
    pub points: Vec<ChartPoint>,
    /// Tick values from 0 up to the nice maximum, low to high.
    pub ticks: Vec<f64>,
    /// The nice axis ceiling the points are scaled against.
    pub max: f64,
}

impl ChartGeometry {
    /// Points serialized in SVG polyline attribute form: `"x,y x,y ..."`.
    pub fn svg_points(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Maps a per-day series into polyline coordinates for a `width` x `height`
/// canvas with `padding` on every side. A single-point series centers
/// horizontally; an all-zero series draws along the baseline against the
/// default axis ceiling.
pub fn line_chart(series: &[f64], width: f64, height: f64, padding: f64) -> ChartGeometry {
    let raw_max = series.iter().copied().fold(0.0_f64, f64::max);
    let max = nice_currency_max(raw_max);

    let inner_width = (width - 2.0 * padding).max(0.0);
    let inner_height = (height - 2.0 * padding).max(0.0);

    let points = series
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = if series.len() > 1 {
                padding + inner_width * i as f64 / (series.len() - 1) as f64
            } else {
                padding + inner_width / 2.0
            };
            let y = height - padding - inner_height * (value / max).clamp(0.0, 1.0);
            ChartPoint { x, y }
        })
        .collect();

    let ticks = (0..=TICK_INTERVALS)
        .map(|i| max * i as f64 / TICK_INTERVALS as f64)
        .collect();

    ChartGeometry { points, ticks, max }
}
