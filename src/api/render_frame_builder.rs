use crate::render::RenderFrame;

use super::axis_render_frame_builder::{append_axes, append_grid};
use super::focus_render_frame_builder::{FocusOverlay, append_focus_overlay};
use super::legend_frame_builder::append_legend;
use super::line_series_render_frame_builder::append_line_series;
use super::{ChartConfig, ChartGeometry};

/// Materializes one full frame from precomputed geometry.
///
/// Builders only append to their own layer; paint order comes from the
/// frame's layer stack, not from the call order here.
pub(super) fn build_render_frame(
    geometry: &ChartGeometry,
    config: &ChartConfig,
    focus: Option<FocusOverlay<'_>>,
) -> RenderFrame {
    let mut frame = RenderFrame::new(geometry.layout.viewport());
    append_grid(&mut frame, geometry, config);
    append_axes(&mut frame, geometry, config);
    append_legend(&mut frame, geometry, config);
    append_line_series(&mut frame, geometry, config);
    if let Some(overlay) = focus {
        append_focus_overlay(&mut frame, geometry, config, overlay);
    }
    frame
}
