use serde::{Deserialize, Serialize};

use crate::core::{
    ChartLayout, Curve, Domain, ProjectedPoint, aggregate_x_domain, aggregate_y_domain,
    project_curve,
};
use crate::render::Color;

use super::ChartConfig;
use super::axis_ticks::axis_ticks;

/// One curve projected into plot-local pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGeometry {
    pub name: String,
    pub color: Color,
    pub points: Vec<ProjectedPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendRow {
    pub name: String,
    pub color: Color,
}

/// Everything a draw pass needs, computed without a rendering surface.
///
/// Domains, scales, ticks, projected curves and legend rows are derived
/// together here so they can never disagree with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub x_domain: Domain,
    pub y_domain: Domain,
    pub layout: ChartLayout,
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
    pub series: Vec<SeriesGeometry>,
    /// Empty unless at least two curves are drawn.
    pub legend: Vec<LegendRow>,
}

impl ChartGeometry {
    /// Computes the geometry for `curves` in drawing order.
    ///
    /// Curves without finite samples are left out. Returns `None` when no
    /// curve remains, since no domain exists then.
    pub fn compute<'a, T: 'a>(
        curves: impl IntoIterator<Item = (&'a Curve<T>, Color)>,
        config: &ChartConfig,
    ) -> Option<Self> {
        let drawn: Vec<(&Curve<T>, Color)> = curves
            .into_iter()
            .filter(|(curve, _)| participates(*curve))
            .collect();

        let x_domain = aggregate_x_domain(drawn.iter().map(|(curve, _)| *curve))?;
        let y_domain =
            aggregate_y_domain(drawn.iter().map(|(curve, _)| *curve), config.headroom)?;

        let layout = ChartLayout::new(
            f64::from(config.total_width()),
            f64::from(config.total_height()),
            config.margin,
            x_domain,
            y_domain,
        );

        let series: Vec<SeriesGeometry> = drawn
            .iter()
            .map(|(curve, color)| SeriesGeometry {
                name: curve.name().to_owned(),
                color: *color,
                points: project_curve(*curve, &layout),
            })
            .collect();

        let legend = if series.len() >= 2 {
            series
                .iter()
                .map(|series| LegendRow {
                    name: series.name.clone(),
                    color: series.color,
                })
                .collect()
        } else {
            Vec::new()
        };

        Some(Self {
            x_domain,
            y_domain,
            x_ticks: axis_ticks(x_domain, &config.x_axis),
            y_ticks: axis_ticks(y_domain, &config.y_axis),
            layout,
            series,
            legend,
        })
    }

    #[must_use]
    pub fn shows_legend(&self) -> bool {
        !self.legend.is_empty()
    }

    #[must_use]
    pub fn series(&self, name: &str) -> Option<&SeriesGeometry> {
        self.series.iter().find(|series| series.name == name)
    }
}

/// A curve takes part in domains and drawing only with finite X and Y samples.
pub(super) fn participates<T>(curve: &Curve<T>) -> bool {
    curve.x_domain().is_some() && curve.y_domain().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DataPoint, Viewport};

    fn curve(name: &str, samples: &[(f64, f64)]) -> Curve<DataPoint> {
        Curve::from_points(
            name,
            samples.iter().map(|&(x, y)| DataPoint::new(x, y)).collect(),
        )
    }

    #[test]
    fn single_curve_has_no_legend() {
        let a = curve("A", &[(0.0, 10.0), (1.0, 20.0)]);
        let config = ChartConfig::new(Viewport::new(800, 400));
        let geometry =
            ChartGeometry::compute([(&a, config.palette_color(0))], &config).expect("geometry");
        assert!(!geometry.shows_legend());
        assert_eq!(geometry.series.len(), 1);
        assert_eq!(geometry.y_domain, Domain::new(9.0, 21.0));
    }

    #[test]
    fn empty_input_has_no_geometry() {
        let config = ChartConfig::default();
        let empty = curve("empty", &[]);
        assert!(ChartGeometry::compute([(&empty, config.palette_color(0))], &config).is_none());
        assert!(
            ChartGeometry::compute(std::iter::empty::<(&Curve<DataPoint>, Color)>(), &config)
                .is_none()
        );
    }

    #[test]
    fn layout_uses_floored_container_width() {
        let a = curve("A", &[(0.0, 1.0), (1.0, 2.0)]);
        let config = ChartConfig::new(Viewport::new(320, 300));
        let geometry =
            ChartGeometry::compute([(&a, config.palette_color(0))], &config).expect("geometry");
        assert_eq!(geometry.layout.total_width(), 400.0);
        assert_eq!(
            geometry.layout.plot_width(),
            400.0 - config.margin.left - config.margin.right
        );
    }
}
