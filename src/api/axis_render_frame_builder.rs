use crate::render::{CanvasLayerKind, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::axis_ticks::{format_tick_label, tick_step_hint_from_values};
use super::{ChartConfig, ChartGeometry};

const AXIS_LABEL_GAP_PX: f64 = 3.0;
const AXIS_TITLE_GAP_PX: f64 = 6.0;

/// Grid lines at every tick: vertical for X ticks, horizontal for Y ticks.
pub(super) fn append_grid(frame: &mut RenderFrame, geometry: &ChartGeometry, config: &ChartConfig) {
    let layout = &geometry.layout;
    let style = &config.style;
    let plot_width = layout.plot_width();
    let plot_height = layout.plot_height();

    for &tick in &geometry.x_ticks {
        let x = layout.x_scale().map(tick);
        let (x1, y1) = layout.to_viewport(x, 0.0);
        let (x2, y2) = layout.to_viewport(x, plot_height);
        frame.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(x1, y1, x2, y2, style.grid_line_width, style.grid_line_color),
        );
    }
    for &tick in &geometry.y_ticks {
        let y = layout.y_scale().map(tick);
        let (x1, y1) = layout.to_viewport(0.0, y);
        let (x2, y2) = layout.to_viewport(plot_width, y);
        frame.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(x1, y1, x2, y2, style.grid_line_width, style.grid_line_color),
        );
    }
}

/// Bottom X axis and left Y axis with tick marks, tick labels and titles.
pub(super) fn append_axes(frame: &mut RenderFrame, geometry: &ChartGeometry, config: &ChartConfig) {
    let layout = &geometry.layout;
    let style = &config.style;
    let margin = layout.margin();
    let plot_width = layout.plot_width();
    let plot_height = layout.plot_height();
    let tick_len = style.axis_tick_length_px;
    let axis_line = |x1: f64, y1: f64, x2: f64, y2: f64| {
        let (x1, y1) = layout.to_viewport(x1, y1);
        let (x2, y2) = layout.to_viewport(x2, y2);
        LinePrimitive::new(x1, y1, x2, y2, style.axis_line_width, style.axis_line_color)
    };

    frame.push_line(
        CanvasLayerKind::Axis,
        axis_line(0.0, plot_height, plot_width, plot_height),
    );
    let x_step = tick_step_hint_from_values(&geometry.x_ticks);
    for &tick in &geometry.x_ticks {
        let x = layout.x_scale().map(tick);
        frame.push_line(
            CanvasLayerKind::Axis,
            axis_line(x, plot_height, x, plot_height + tick_len),
        );
        let (label_x, label_y) =
            layout.to_viewport(x, plot_height + tick_len + AXIS_LABEL_GAP_PX);
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                format_tick_label(tick, config.x_axis.value_format, x_step),
                label_x,
                label_y,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            ),
        );
    }
    if !config.x_axis.title.is_empty() {
        let title_y = (plot_height + margin.bottom
            - style.axis_title_font_size_px
            - AXIS_TITLE_GAP_PX)
            .max(plot_height);
        let (title_x, title_y) = layout.to_viewport(plot_width / 2.0, title_y);
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                config.x_axis.title.clone(),
                title_x,
                title_y,
                style.axis_title_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            ),
        );
    }

    frame.push_line(CanvasLayerKind::Axis, axis_line(0.0, 0.0, 0.0, plot_height));
    let y_step = tick_step_hint_from_values(&geometry.y_ticks);
    for &tick in &geometry.y_ticks {
        let y = layout.y_scale().map(tick);
        frame.push_line(CanvasLayerKind::Axis, axis_line(-tick_len, y, 0.0, y));
        let (label_x, label_y) = layout.to_viewport(
            -tick_len - AXIS_LABEL_GAP_PX,
            y - style.axis_label_font_size_px / 2.0,
        );
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                format_tick_label(tick, config.y_axis.value_format, y_step),
                label_x,
                label_y,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Right,
            ),
        );
    }
    if !config.y_axis.title.is_empty() {
        // Rotated a quarter turn counter-clockwise, reading bottom to top.
        let (title_x, title_y) = layout.to_viewport(-margin.left + AXIS_TITLE_GAP_PX, plot_height / 2.0);
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                config.y_axis.title.clone(),
                title_x,
                title_y,
                style.axis_title_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            )
            .with_rotation(-90.0),
        );
    }
}
