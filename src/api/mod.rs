mod axis_render_frame_builder;
mod axis_ticks;
mod chart;
mod chart_config;
mod focus_render_frame_builder;
mod geometry;
mod legend_frame_builder;
mod line_series_render_frame_builder;
mod render_frame_builder;
mod snapshot;

pub use chart::{Chart, CurveEntry};
pub use chart_config::{AxisConfig, AxisValueFormat, ChartConfig, ChartStyle, DEFAULT_PALETTE};
pub use geometry::{ChartGeometry, LegendRow, SeriesGeometry};
pub use snapshot::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1, SeriesSnapshot,
};
