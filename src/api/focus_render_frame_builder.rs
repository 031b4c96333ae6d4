use crate::interaction::{FocusedPoint, InfoRowValue};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, RectPrimitive,
    RenderFrame, TextHAlign, TextPrimitive,
};

use super::{ChartConfig, ChartGeometry};

const PANEL_TEXT_INSET_PX: f64 = 8.0;

/// Focus input for one frame: the resolved record, its curve color and the
/// info row readout.
#[derive(Debug, Clone, Copy)]
pub(super) struct FocusOverlay<'a> {
    pub point: FocusedPoint,
    pub color: Color,
    pub readout: &'a [InfoRowValue],
}

/// Dashed guide lines through the focused record, a ring marker on it and
/// the info panel next to it.
pub(super) fn append_focus_overlay(
    frame: &mut RenderFrame,
    geometry: &ChartGeometry,
    config: &ChartConfig,
    overlay: FocusOverlay<'_>,
) {
    let layout = &geometry.layout;
    let style = &config.style;
    let plot_width = layout.plot_width();
    let plot_height = layout.plot_height();
    let FocusedPoint { x, y, .. } = overlay.point;

    let guide = |x1: f64, y1: f64, x2: f64, y2: f64| {
        let (x1, y1) = layout.to_viewport(x1, y1);
        let (x2, y2) = layout.to_viewport(x2, y2);
        LinePrimitive::new(x1, y1, x2, y2, style.focus_line_width, style.focus_line_color)
            .with_stroke_style(LineStrokeStyle::Dashed)
    };
    frame.push_line(CanvasLayerKind::Focus, guide(x, 0.0, x, plot_height));
    frame.push_line(CanvasLayerKind::Focus, guide(0.0, y, plot_width, y));

    let (cx, cy) = layout.to_viewport(x, y);
    frame.push_circle(
        CanvasLayerKind::Focus,
        CirclePrimitive::new(cx, cy, style.focus_marker_radius_px, Color::rgb(1.0, 1.0, 1.0))
            .with_stroke(2.0, overlay.color),
    );

    if overlay.readout.is_empty() {
        return;
    }

    let height = panel_height(overlay.readout.len(), config);
    let (panel_left, panel_top) = panel_origin(x, y, plot_width, plot_height, height, config);
    let (px, py) = layout.to_viewport(panel_left, panel_top);
    frame.push_rect(
        CanvasLayerKind::Focus,
        RectPrimitive::new(
            px,
            py,
            style.focus_panel_width_px,
            height,
            style.focus_panel_fill_color,
        )
        .with_border(1.0, style.focus_panel_border_color)
        .with_corner_radius(4.0),
    );

    for (row_index, row) in overlay.readout.iter().enumerate() {
        let row_top = PANEL_TEXT_INSET_PX / 2.0 + style.focus_panel_row_height_px * row_index as f64;
        frame.push_text(
            CanvasLayerKind::Focus,
            TextPrimitive::new(
                format!("{}: {}", row.label, row.value),
                px + PANEL_TEXT_INSET_PX,
                py + row_top,
                style.focus_panel_font_size_px,
                style.focus_panel_text_color,
                TextHAlign::Left,
            ),
        );
    }
}

/// Configured panel height, grown to fit every info row.
fn panel_height(row_count: usize, config: &ChartConfig) -> f64 {
    let style = &config.style;
    let rows_height = PANEL_TEXT_INSET_PX + style.focus_panel_row_height_px * row_count as f64;
    rows_height.max(style.focus_panel_height_px)
}

/// Panel sits to the right of the marker, flips left when it would cross
/// the plot's right edge, and is clamped vertically into the plot.
fn panel_origin(
    x: f64,
    y: f64,
    plot_width: f64,
    plot_height: f64,
    height: f64,
    config: &ChartConfig,
) -> (f64, f64) {
    let style = &config.style;
    let offset = style.focus_panel_offset_px;
    let width = style.focus_panel_width_px;

    let mut left = x + offset;
    if left + width > plot_width {
        left = x - offset - width;
    }
    let left = left.max(0.0);

    let top = (y - height / 2.0).clamp(0.0, (plot_height - height).max(0.0));
    (left, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_flips_near_right_edge() {
        let config = ChartConfig::default();
        let style = config.style;
        let height = style.focus_panel_height_px;
        let (left, _) = panel_origin(10.0, 50.0, 400.0, 200.0, height, &config);
        assert_eq!(left, 10.0 + style.focus_panel_offset_px);

        let (left, _) = panel_origin(390.0, 50.0, 400.0, 200.0, height, &config);
        assert_eq!(left, 390.0 - style.focus_panel_offset_px - style.focus_panel_width_px);
    }

    #[test]
    fn panel_stays_inside_plot_vertically() {
        let config = ChartConfig::default();
        let height = panel_height(6, &config);
        let (_, top) = panel_origin(10.0, 0.0, 400.0, 200.0, height, &config);
        assert_eq!(top, 0.0);
        let (_, top) = panel_origin(10.0, 200.0, 400.0, 200.0, height, &config);
        assert_eq!(top, 200.0 - height);
    }

    #[test]
    fn panel_grows_past_configured_height_for_many_rows() {
        let config = ChartConfig::default();
        let style = config.style;
        assert_eq!(panel_height(1, &config), style.focus_panel_height_px);
        assert_eq!(
            panel_height(6, &config),
            PANEL_TEXT_INSET_PX + 6.0 * style.focus_panel_row_height_px
        );
    }
}
