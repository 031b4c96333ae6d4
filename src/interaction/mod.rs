mod nearest;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{ChartLayout, Curve};

pub use nearest::{insertion_index, nearest_index};

/// Host-supplied readout row: a label plus a function rendering one record.
pub struct InfoRow<T> {
    label: String,
    extractor: Arc<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> Clone for InfoRow<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            extractor: Arc::clone(&self.extractor),
        }
    }
}

impl<T> fmt::Debug for InfoRow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfoRow")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<T> InfoRow<T> {
    pub fn new<F>(label: impl Into<String>, extractor: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            extractor: Arc::new(extractor),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn value_for(&self, record: &T) -> String {
        (self.extractor)(record)
    }
}

/// Rendered label/value pair of one info row for the focused record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoRowValue {
    pub label: String,
    pub value: String,
}

/// Record currently under focus, in data space and plot-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusedPoint {
    pub index: usize,
    pub data_x: f64,
    pub data_y: f64,
    pub x: f64,
    pub y: f64,
}

/// Public focus state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FocusState {
    /// Pointer is over the plot area (between enter and leave).
    pub visible: bool,
    pub focused: Option<FocusedPoint>,
}

impl FocusState {
    /// The overlay is drawn only while visible and resolved to a record.
    #[must_use]
    pub fn overlay_point(self) -> Option<FocusedPoint> {
        if self.visible { self.focused } else { None }
    }
}

/// Hover readout tracking the record nearest to the pointer.
///
/// Every move recomputes the nearest record from scratch; nothing but the
/// latest result is kept.
#[derive(Debug)]
pub struct FocusTracker<T> {
    info_rows: Vec<InfoRow<T>>,
    state: FocusState,
    readout: SmallVec<[InfoRowValue; 4]>,
}

impl<T> Default for FocusTracker<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> FocusTracker<T> {
    #[must_use]
    pub fn new(info_rows: Vec<InfoRow<T>>) -> Self {
        Self {
            info_rows,
            state: FocusState::default(),
            readout: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn info_rows(&self) -> &[InfoRow<T>] {
        &self.info_rows
    }

    pub fn set_info_rows(&mut self, info_rows: Vec<InfoRow<T>>) {
        self.info_rows = info_rows;
        self.readout.clear();
    }

    #[must_use]
    pub fn state(&self) -> FocusState {
        self.state
    }

    #[must_use]
    pub fn readout(&self) -> &[InfoRowValue] {
        &self.readout
    }

    pub fn on_pointer_enter(&mut self) {
        self.state.visible = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.state.visible = false;
        self.clear_focus();
    }

    /// Drops the focused record, e.g. after the reference data changed.
    pub fn clear_focus(&mut self) {
        self.state.focused = None;
        self.readout.clear();
    }

    /// Index of the record in `curve` nearest to `data_x`.
    #[must_use]
    pub fn locate(curve: &Curve<T>, data_x: f64) -> Option<usize> {
        let data = curve.data();
        nearest_index(data.len(), |index| curve.x_of(&data[index]), data_x)
    }

    /// Resolves the focus for a plot-local pointer X.
    ///
    /// The pixel is inverted through the layout's X scale, the nearest record
    /// of `curve` is located, and the marker position plus info rows are
    /// refreshed from it.
    pub fn on_move(
        &mut self,
        pointer_x: f64,
        layout: &ChartLayout,
        curve: &Curve<T>,
    ) -> Option<FocusedPoint> {
        if !pointer_x.is_finite() {
            return self.state.focused;
        }

        let data_x = layout.invert_x(pointer_x);
        let Some(index) = Self::locate(curve, data_x) else {
            self.clear_focus();
            return None;
        };

        let record = &curve.data()[index];
        let point_x = curve.x_of(record);
        let point_y = curve.y_of(record);
        let (x, y) = layout.project(point_x, point_y);
        if !x.is_finite() || !y.is_finite() {
            self.clear_focus();
            return None;
        }

        let focused = FocusedPoint {
            index,
            data_x: point_x,
            data_y: point_y,
            x,
            y,
        };
        trace!(
            pointer_x,
            data_x,
            index,
            curve = curve.name(),
            "focus resolved"
        );

        self.state.focused = Some(focused);
        self.readout.clear();
        self.readout
            .extend(self.info_rows.iter().map(|row| InfoRowValue {
                label: row.label().to_owned(),
                value: row.value_for(record),
            }));
        Some(focused)
    }
}
