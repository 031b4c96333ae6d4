pub mod curve;
pub mod domain;
pub mod layout;
pub mod line_series;
pub mod primitives;
pub mod scale;
pub mod types;

pub use curve::{Accessor, Curve};
pub use domain::{
    Domain, LegendHeadroomPolicy, aggregate, aggregate_x_domain, aggregate_y_domain,
};
pub use layout::{ChartLayout, Margin, resolve_total_width};
pub use line_series::{ProjectedPoint, project_curve};
pub use scale::{LinearScale, nice_step, nice_ticks};
pub use types::{DataPoint, Viewport};
