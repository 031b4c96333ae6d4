use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Domain, ProjectedPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FocusState, InfoRowValue};
use crate::render::{Color, Renderer};

use super::Chart;

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub color: Color,
    pub points: Vec<ProjectedPoint>,
}

/// Serializable deterministic chart state used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    /// `None` while no curve has drawable samples.
    pub x_domain: Option<Domain>,
    pub y_domain: Option<Domain>,
    pub plot_width: f64,
    pub plot_height: f64,
    pub series: IndexMap<String, SeriesSnapshot>,
    pub legend_rows: Vec<String>,
    pub focus: FocusState,
    pub focus_rows: Vec<InfoRowValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl<T, R: Renderer> Chart<T, R> {
    /// Snapshot of the state the next draw would render.
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let viewport = Viewport::new(self.config().total_width(), self.config().total_height());
        let focus = self.focus_state();
        let focus_rows = self.focus_rows().to_vec();

        let Some(geometry) = self.compute_geometry() else {
            return ChartSnapshot {
                viewport,
                x_domain: None,
                y_domain: None,
                plot_width: 0.0,
                plot_height: 0.0,
                series: IndexMap::new(),
                legend_rows: Vec::new(),
                focus,
                focus_rows,
            };
        };

        ChartSnapshot {
            viewport: geometry.layout.viewport(),
            x_domain: Some(geometry.x_domain),
            y_domain: Some(geometry.y_domain),
            plot_width: geometry.layout.plot_width(),
            plot_height: geometry.layout.plot_height(),
            legend_rows: geometry.legend.iter().map(|row| row.name.clone()).collect(),
            series: geometry
                .series
                .into_iter()
                .map(|series| {
                    (
                        series.name,
                        SeriesSnapshot {
                            color: series.color,
                            points: series.points,
                        },
                    )
                })
                .collect(),
            focus,
            focus_rows,
        }
    }
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts both a bare snapshot and the versioned v1 contract.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
