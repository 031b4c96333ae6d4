use serde::{Deserialize, Serialize};

use crate::core::{Domain, LinearScale, Viewport};
use crate::error::{ChartError, ChartResult};

/// Insets between the total drawing area and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 50.0,
            left: 70.0,
        }
    }
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Total drawing width for a raw container width.
///
/// The container width is floored at `min_container_width` before the
/// external `allowance` is subtracted.
#[must_use]
pub fn resolve_total_width(container_width: u32, min_container_width: u32, allowance: u32) -> u32 {
    container_width
        .max(min_container_width)
        .saturating_sub(allowance)
}

/// Shared coordinate authority for one draw pass.
///
/// Plot width and height are always derived from the total size and the
/// margins. Scale ranges are `[0, plot_width]` for X and `[plot_height, 0]`
/// for Y, both in plot-local pixels; [`ChartLayout::to_viewport`] adds the
/// margin offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    total_width: f64,
    total_height: f64,
    margin: Margin,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl ChartLayout {
    #[must_use]
    pub fn new(
        total_width: f64,
        total_height: f64,
        margin: Margin,
        x_domain: Domain,
        y_domain: Domain,
    ) -> Self {
        let plot_width = plot_extent(total_width, margin.left, margin.right);
        let plot_height = plot_extent(total_height, margin.top, margin.bottom);
        Self {
            total_width,
            total_height,
            margin,
            x_scale: LinearScale::new(x_domain, 0.0, plot_width),
            y_scale: LinearScale::new(y_domain, plot_height, 0.0),
        }
    }

    #[must_use]
    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.total_width as u32, self.total_height as u32)
    }

    #[must_use]
    pub fn margin(&self) -> Margin {
        self.margin
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        plot_extent(self.total_width, self.margin.left, self.margin.right)
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        plot_extent(self.total_height, self.margin.top, self.margin.bottom)
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    /// Plot-local pixel position of a data point.
    #[must_use]
    pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x_scale.map(x), self.y_scale.map(y))
    }

    /// Plot-local X pixel back to data space.
    #[must_use]
    pub fn invert_x(&self, pixel_x: f64) -> f64 {
        self.x_scale.invert(pixel_x)
    }

    /// Shifts plot-local pixels into total drawing area pixels.
    #[must_use]
    pub fn to_viewport(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.margin.left, y + self.margin.top)
    }
}

fn plot_extent(total: f64, inset_a: f64, inset_b: f64) -> f64 {
    (total - inset_a - inset_b).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_width_applies_floor_before_allowance() {
        assert_eq!(resolve_total_width(300, 500, 100), 400);
        assert_eq!(resolve_total_width(500, 500, 100), 400);
        assert_eq!(resolve_total_width(1280, 500, 100), 1180);
        assert_eq!(resolve_total_width(50, 0, 100), 0);
    }

    #[test]
    fn plot_size_is_derived_from_margins() {
        let layout = ChartLayout::new(
            800.0,
            400.0,
            Margin::new(20.0, 30.0, 50.0, 70.0),
            Domain::new(0.0, 2.0),
            Domain::new(4.0, 29.0),
        );
        assert_eq!(layout.plot_width(), 700.0);
        assert_eq!(layout.plot_height(), 330.0);
        assert_eq!(layout.x_scale().range(), (0.0, 700.0));
        assert_eq!(layout.y_scale().range(), (330.0, 0.0));
        assert_eq!(layout.project(2.0, 29.0), (700.0, 0.0));
        assert_eq!(layout.to_viewport(0.0, 0.0), (70.0, 20.0));
    }

    #[test]
    fn oversized_margins_collapse_plot_instead_of_going_negative() {
        let layout = ChartLayout::new(
            100.0,
            80.0,
            Margin::new(50.0, 60.0, 50.0, 60.0),
            Domain::new(0.0, 1.0),
            Domain::new(0.0, 1.0),
        );
        assert_eq!(layout.plot_width(), 0.0);
        assert_eq!(layout.plot_height(), 0.0);
        assert!(layout.project(0.5, 0.5).0.is_finite());
    }

    #[test]
    fn negative_margin_is_rejected() {
        assert!(Margin::new(0.0, -1.0, 0.0, 0.0).validate().is_err());
        assert!(Margin::default().validate().is_ok());
    }
}
