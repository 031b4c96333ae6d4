use serde::{Deserialize, Serialize};

use crate::core::{LegendHeadroomPolicy, Margin, Viewport, resolve_total_width};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Fixed series palette; curves take colors in insertion order and wrap.
pub const DEFAULT_PALETTE: [Color; 5] = [
    Color::rgb8(31, 119, 180),
    Color::rgb8(255, 127, 14),
    Color::rgb8(44, 160, 44),
    Color::rgb8(214, 39, 40),
    Color::rgb8(148, 103, 189),
];

/// How axis tick values are turned into labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisValueFormat {
    /// Values are unix seconds, labelled as calendar dates.
    Timestamp,
    /// Plain numbers with precision derived from the tick step.
    Numeric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub title: String,
    pub tick_count: usize,
    pub value_format: AxisValueFormat,
}

impl AxisConfig {
    #[must_use]
    pub fn new(title: impl Into<String>, value_format: AxisValueFormat) -> Self {
        Self {
            title: title.into(),
            tick_count: 5,
            value_format,
        }
    }

    #[must_use]
    pub fn date() -> Self {
        Self::new("Date", AxisValueFormat::Timestamp)
    }

    #[must_use]
    pub fn execution_time() -> Self {
        Self::new("Execution time (ms)", AxisValueFormat::Numeric)
    }

    fn validate(&self, axis: &str) -> ChartResult<()> {
        if self.tick_count == 0 {
            return Err(ChartError::InvalidConfig(format!(
                "{axis} axis tick count must be > 0"
            )));
        }
        Ok(())
    }
}

/// Visual constants for one draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub series_line_width: f64,
    pub marker_radius_px: f64,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub axis_tick_length_px: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    pub axis_title_font_size_px: f64,
    pub legend_row_height_px: f64,
    pub legend_swatch_size_px: f64,
    pub legend_font_size_px: f64,
    pub legend_padding_px: f64,
    pub legend_text_color: Color,
    pub legend_background_color: Color,
    pub focus_marker_radius_px: f64,
    pub focus_line_color: Color,
    pub focus_line_width: f64,
    pub focus_panel_width_px: f64,
    pub focus_panel_height_px: f64,
    pub focus_panel_row_height_px: f64,
    pub focus_panel_font_size_px: f64,
    pub focus_panel_offset_px: f64,
    pub focus_panel_fill_color: Color,
    pub focus_panel_border_color: Color,
    pub focus_panel_text_color: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            series_line_width: 1.5,
            marker_radius_px: 3.0,
            grid_line_color: Color::rgb8(230, 230, 235),
            grid_line_width: 1.0,
            axis_line_color: Color::rgb8(60, 60, 70),
            axis_line_width: 1.0,
            axis_tick_length_px: 6.0,
            axis_label_color: Color::rgb8(20, 20, 30),
            axis_label_font_size_px: 11.0,
            axis_title_font_size_px: 12.0,
            legend_row_height_px: 20.0,
            legend_swatch_size_px: 12.0,
            legend_font_size_px: 12.0,
            legend_padding_px: 8.0,
            legend_text_color: Color::rgb8(20, 20, 30),
            legend_background_color: Color::rgba(1.0, 1.0, 1.0, 0.85),
            focus_marker_radius_px: 5.0,
            focus_line_color: Color::rgb8(120, 120, 130),
            focus_line_width: 1.0,
            focus_panel_width_px: 180.0,
            focus_panel_height_px: 64.0,
            focus_panel_row_height_px: 16.0,
            focus_panel_font_size_px: 11.0,
            focus_panel_offset_px: 12.0,
            focus_panel_fill_color: Color::rgba(1.0, 1.0, 1.0, 0.95),
            focus_panel_border_color: Color::rgb8(180, 180, 190),
            focus_panel_text_color: Color::rgb8(20, 20, 30),
        }
    }
}

impl ChartStyle {
    fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("series_line_width", self.series_line_width),
            ("marker_radius_px", self.marker_radius_px),
            ("grid_line_width", self.grid_line_width),
            ("axis_line_width", self.axis_line_width),
            ("axis_label_font_size_px", self.axis_label_font_size_px),
            ("axis_title_font_size_px", self.axis_title_font_size_px),
            ("legend_row_height_px", self.legend_row_height_px),
            ("legend_swatch_size_px", self.legend_swatch_size_px),
            ("legend_font_size_px", self.legend_font_size_px),
            ("focus_marker_radius_px", self.focus_marker_radius_px),
            ("focus_line_width", self.focus_line_width),
            ("focus_panel_width_px", self.focus_panel_width_px),
            ("focus_panel_height_px", self.focus_panel_height_px),
            ("focus_panel_row_height_px", self.focus_panel_row_height_px),
            ("focus_panel_font_size_px", self.focus_panel_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("axis_tick_length_px", self.axis_tick_length_px),
            ("legend_padding_px", self.legend_padding_px),
            ("focus_panel_offset_px", self.focus_panel_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }
        for color in [
            self.grid_line_color,
            self.axis_line_color,
            self.axis_label_color,
            self.legend_text_color,
            self.legend_background_color,
            self.focus_line_color,
            self.focus_panel_fill_color,
            self.focus_panel_border_color,
            self.focus_panel_text_color,
        ] {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(format!("style color: {err}")))?;
        }
        Ok(self)
    }
}

/// Chart bootstrap configuration.
///
/// Serializable so hosts can persist chart setup; missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Raw size of the host container.
    pub container: Viewport,
    pub min_container_width_px: u32,
    pub container_width_allowance_px: u32,
    pub margin: Margin,
    pub palette: Vec<Color>,
    pub headroom: LegendHeadroomPolicy,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub style: ChartStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(Viewport::new(960, 400))
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(container: Viewport) -> Self {
        Self {
            container,
            min_container_width_px: 500,
            container_width_allowance_px: 100,
            margin: Margin::default(),
            palette: DEFAULT_PALETTE.to_vec(),
            headroom: LegendHeadroomPolicy::default(),
            x_axis: AxisConfig::date(),
            y_axis: AxisConfig::execution_time(),
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Width of the drawing area after the container floor and allowance.
    #[must_use]
    pub fn total_width(&self) -> u32 {
        resolve_total_width(
            self.container.width,
            self.min_container_width_px,
            self.container_width_allowance_px,
        )
    }

    #[must_use]
    pub fn total_height(&self) -> u32 {
        self.container.height
    }

    /// Palette color for the `slot`-th registered curve, wrapping around.
    #[must_use]
    pub fn palette_color(&self, slot: usize) -> Color {
        // `validate` guarantees a non-empty palette; the fallback only covers
        // configs mutated after construction.
        match self.palette.len() {
            0 => DEFAULT_PALETTE[slot % DEFAULT_PALETTE.len()],
            len => self.palette[slot % len],
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.total_width() == 0 || self.total_height() == 0 {
            return Err(ChartError::InvalidViewport {
                width: self.total_width(),
                height: self.total_height(),
            });
        }
        self.margin.validate()?;
        if self.palette.is_empty() {
            return Err(ChartError::InvalidConfig(
                "palette must contain at least one color".to_owned(),
            ));
        }
        for color in &self.palette {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(format!("palette: {err}")))?;
        }
        self.headroom.validate()?;
        self.x_axis.validate("x")?;
        self.y_axis.validate("y")?;
        self.style.validate()?;
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}
