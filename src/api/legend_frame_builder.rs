use crate::render::{CanvasLayerKind, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::axis_ticks::estimate_label_text_width_px;
use super::{ChartConfig, ChartGeometry};

const SWATCH_LABEL_GAP_PX: f64 = 6.0;

/// Legend box in the top-right corner of the plot, one row per curve.
///
/// Nothing is emitted for a single curve. The Y domain headroom keeps the
/// rows clear of the curves.
pub(super) fn append_legend(frame: &mut RenderFrame, geometry: &ChartGeometry, config: &ChartConfig) {
    if !geometry.shows_legend() {
        return;
    }

    let layout = &geometry.layout;
    let style = &config.style;
    let padding = style.legend_padding_px;
    let row_height = style.legend_row_height_px;

    let label_width = geometry
        .legend
        .iter()
        .map(|row| estimate_label_text_width_px(&row.name, style.legend_font_size_px))
        .fold(0.0, f64::max);
    let box_width = padding * 2.0 + style.legend_swatch_size_px + SWATCH_LABEL_GAP_PX + label_width;
    let box_height = padding * 2.0 + row_height * geometry.legend.len() as f64;
    let box_left = (layout.plot_width() - box_width - padding).max(0.0);
    let box_top = padding;

    let (x, y) = layout.to_viewport(box_left, box_top);
    frame.push_rect(
        CanvasLayerKind::Legend,
        RectPrimitive::new(x, y, box_width, box_height, style.legend_background_color)
            .with_border(1.0, style.grid_line_color)
            .with_corner_radius(3.0),
    );

    for (row_index, row) in geometry.legend.iter().enumerate() {
        let row_top = box_top + padding + row_height * row_index as f64;
        let swatch_top = row_top + (row_height - style.legend_swatch_size_px) / 2.0;
        let (swatch_x, swatch_y) = layout.to_viewport(box_left + padding, swatch_top);
        frame.push_rect(
            CanvasLayerKind::Legend,
            RectPrimitive::new(
                swatch_x,
                swatch_y,
                style.legend_swatch_size_px,
                style.legend_swatch_size_px,
                row.color,
            ),
        );

        let label_top = row_top + (row_height - style.legend_font_size_px) / 2.0;
        let (label_x, label_y) = layout.to_viewport(
            box_left + padding + style.legend_swatch_size_px + SWATCH_LABEL_GAP_PX,
            label_top,
        );
        frame.push_text(
            CanvasLayerKind::Legend,
            TextPrimitive::new(
                row.name.clone(),
                label_x,
                label_y,
                style.legend_font_size_px,
                style.legend_text_color,
                TextHAlign::Left,
            ),
        );
    }
}
