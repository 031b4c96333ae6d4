use serde::{Deserialize, Serialize};

use crate::core::{ChartLayout, Curve};

/// One record of a curve projected into plot-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    /// Position of the record in the curve's data.
    pub index: usize,
    pub data_x: f64,
    pub data_y: f64,
    pub x: f64,
    pub y: f64,
}

/// Projects every record through `x_scale ∘ get_x` and `y_scale ∘ get_y`.
///
/// Records with a non-finite coordinate are skipped; the remaining points keep
/// their original `index`.
#[must_use]
pub fn project_curve<T>(curve: &Curve<T>, layout: &ChartLayout) -> Vec<ProjectedPoint> {
    let mut out = Vec::with_capacity(curve.len());
    for (index, record) in curve.data().iter().enumerate() {
        let data_x = curve.x_of(record);
        let data_y = curve.y_of(record);
        if !data_x.is_finite() || !data_y.is_finite() {
            continue;
        }
        let (x, y) = layout.project(data_x, data_y);
        out.push(ProjectedPoint {
            index,
            data_x,
            data_y,
            x,
            y,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DataPoint, Domain, Margin};

    fn layout() -> ChartLayout {
        ChartLayout::new(
            1000.0,
            500.0,
            Margin::new(0.0, 0.0, 0.0, 0.0),
            Domain::new(0.0, 10.0),
            Domain::new(0.0, 100.0),
        )
    }

    #[test]
    fn projection_is_deterministic() {
        let curve = Curve::from_points(
            "a",
            vec![
                DataPoint::new(0.0, 0.0),
                DataPoint::new(5.0, 50.0),
                DataPoint::new(10.0, 100.0),
            ],
        );

        let points = project_curve(&curve, &layout());
        assert_eq!(points.len(), 3);
        assert_eq!((points[0].x, points[0].y), (0.0, 500.0));
        assert_eq!((points[1].x, points[1].y), (500.0, 250.0));
        assert_eq!((points[2].x, points[2].y), (1000.0, 0.0));
    }

    #[test]
    fn non_finite_records_are_skipped_but_keep_indices() {
        let curve = Curve::from_points(
            "gaps",
            vec![
                DataPoint::new(1.0, 10.0),
                DataPoint::new(2.0, f64::NAN),
                DataPoint::new(3.0, 30.0),
            ],
        );
        let points = project_curve(&curve, &layout());
        assert_eq!(points.iter().map(|p| p.index).collect::<Vec<_>>(), vec![0, 2]);
    }
}
