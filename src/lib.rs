//! curve-chart: multi-curve line chart core.
//!
//! Curves sharing one X/Y space are aggregated into common domains, laid out
//! through linear scales and emitted as layered draw instructions for a
//! pluggable `Renderer`. A focus tracker resolves the record nearest to the
//! pointer for the hover readout.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartConfig};
pub use crate::core::{Curve, DataPoint};
pub use error::{ChartError, ChartResult};
