use crate::render::{CanvasLayerKind, CirclePrimitive, PolylinePrimitive, RenderFrame};

use super::{ChartConfig, ChartGeometry};

/// One polyline plus a marker per record for every drawn curve.
///
/// Curves are emitted in registration order, so later curves paint over
/// earlier ones.
pub(super) fn append_line_series(
    frame: &mut RenderFrame,
    geometry: &ChartGeometry,
    config: &ChartConfig,
) {
    let layout = &geometry.layout;
    let style = &config.style;

    for series in &geometry.series {
        let points: Vec<(f64, f64)> = series
            .points
            .iter()
            .map(|point| layout.to_viewport(point.x, point.y))
            .collect();

        if points.len() >= 2 {
            frame.push_polyline(
                CanvasLayerKind::Series,
                PolylinePrimitive::new(points.clone(), style.series_line_width, series.color),
            );
        }
        for (cx, cy) in points {
            frame.push_circle(
                CanvasLayerKind::Series,
                CirclePrimitive::new(cx, cy, style.marker_radius_px, series.color),
            );
        }
    }
}
