use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::core::Curve;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FocusState, FocusTracker, FocusedPoint, InfoRow, InfoRowValue};
use crate::render::{Color, RenderFrame, Renderer};

use super::focus_render_frame_builder::FocusOverlay;
use super::geometry::participates;
use super::render_frame_builder::build_render_frame;
use super::{ChartConfig, ChartGeometry};

/// A registered curve with its assigned color.
#[derive(Debug, Clone)]
pub struct CurveEntry<T> {
    curve: Curve<T>,
    color: Color,
    slot: usize,
}

impl<T> CurveEntry<T> {
    #[must_use]
    pub fn curve(&self) -> &Curve<T> {
        &self.curve
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Registration position, which also selects the palette color.
    #[must_use]
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// Multi-curve line chart over records of type `T`.
///
/// The chart owns the curve registry, the focus tracker and the renderer.
/// Every `draw` rebuilds domains, layout and the whole frame from the
/// current curves; nothing is diffed between passes.
pub struct Chart<T, R: Renderer> {
    renderer: R,
    config: ChartConfig,
    curves: IndexMap<String, CurveEntry<T>>,
    focus: FocusTracker<T>,
    focus_curve: Option<String>,
    geometry: Option<ChartGeometry>,
}

impl<T, R: Renderer> Chart<T, R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        debug!(
            total_width = config.total_width(),
            total_height = config.total_height(),
            "chart created"
        );
        Ok(Self {
            renderer,
            config,
            curves: IndexMap::new(),
            focus: FocusTracker::default(),
            focus_curve: None,
            geometry: None,
        })
    }

    #[must_use]
    pub fn with_info_rows(mut self, info_rows: Vec<InfoRow<T>>) -> Self {
        self.set_info_rows(info_rows);
        self
    }

    pub fn set_info_rows(&mut self, info_rows: Vec<InfoRow<T>>) {
        self.focus.set_info_rows(info_rows);
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Registers `curve` and returns its color.
    ///
    /// A new name takes the next palette slot, wrapping around the palette.
    /// Re-adding an existing name replaces its data but keeps its color and
    /// position.
    pub fn add_curve(&mut self, curve: Curve<T>) -> Color {
        if curve.is_empty() {
            warn!(curve = curve.name(), "curve has no records and will not be drawn");
        } else if !participates(&curve) {
            warn!(curve = curve.name(), "curve has no finite samples and will not be drawn");
        }

        let name = curve.name().to_owned();
        let color = if let Some(entry) = self.curves.get_mut(&name) {
            entry.curve = curve;
            debug!(curve = %name, slot = entry.slot, "curve replaced");
            entry.color
        } else {
            let slot = self.curves.len();
            if slot >= self.config.palette.len() {
                warn!(
                    curve = %name,
                    slot,
                    palette_len = self.config.palette.len(),
                    "palette exhausted, reusing colors"
                );
            }
            let color = self.config.palette_color(slot);
            debug!(curve = %name, slot, "curve added");
            self.curves
                .insert(name, CurveEntry { curve, color, slot });
            color
        };

        self.geometry = None;
        self.focus.clear_focus();
        color
    }

    #[must_use]
    pub fn curve(&self, name: &str) -> Option<&Curve<T>> {
        self.curves.get(name).map(CurveEntry::curve)
    }

    #[must_use]
    pub fn curve_color(&self, name: &str) -> Option<Color> {
        self.curves.get(name).map(CurveEntry::color)
    }

    /// Registered curves in insertion order.
    pub fn curves(&self) -> impl Iterator<Item = &CurveEntry<T>> {
        self.curves.values()
    }

    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Selects the curve the focus readout follows.
    pub fn set_focus_curve(&mut self, name: &str) -> ChartResult<()> {
        if !self.curves.contains_key(name) {
            return Err(ChartError::InvalidData(format!("unknown curve `{name}`")));
        }
        self.focus_curve = Some(name.to_owned());
        self.focus.clear_focus();
        Ok(())
    }

    /// Name of the curve the focus readout currently follows, if any.
    #[must_use]
    pub fn focus_curve_name(&self) -> Option<&str> {
        resolve_focus_curve(&self.curves, self.focus_curve.as_deref())
            .map(|entry| entry.curve.name())
    }

    /// Geometry of the last draw pass.
    #[must_use]
    pub fn geometry(&self) -> Option<&ChartGeometry> {
        self.geometry.as_ref()
    }

    pub(super) fn compute_geometry(&self) -> Option<ChartGeometry> {
        ChartGeometry::compute(
            self.curves.values().map(|entry| (&entry.curve, entry.color)),
            &self.config,
        )
    }

    /// Builds the draw instructions for the current state without rendering.
    ///
    /// Returns `None` when no curve has drawable samples.
    #[must_use]
    pub fn build_frame(&self) -> Option<RenderFrame> {
        let geometry = self.compute_geometry()?;
        Some(self.frame_for(&geometry))
    }

    fn frame_for(&self, geometry: &ChartGeometry) -> RenderFrame {
        let overlay = self.focus.state().overlay_point().and_then(|point| {
            let entry = resolve_focus_curve(&self.curves, self.focus_curve.as_deref())?;
            Some(FocusOverlay {
                point,
                color: entry.color,
                readout: self.focus.readout(),
            })
        });
        build_render_frame(geometry, &self.config, overlay)
    }

    /// Recomputes domains and layout and hands a full frame to the renderer.
    ///
    /// With no drawable curve this returns without touching the renderer.
    pub fn draw(&mut self) -> ChartResult<()> {
        let Some(geometry) = self.compute_geometry() else {
            debug!(curves = self.curves.len(), "nothing to draw");
            return Ok(());
        };
        let frame = self.frame_for(&geometry);
        debug!(
            curves = geometry.series.len(),
            x_min = geometry.x_domain.min,
            x_max = geometry.x_domain.max,
            y_min = geometry.y_domain.min,
            y_max = geometry.y_domain.max,
            primitives = frame.primitive_count(),
            "draw pass"
        );
        self.geometry = Some(geometry);
        self.renderer.render(&frame)
    }

    pub fn on_pointer_enter(&mut self) {
        trace!("pointer entered plot");
        self.focus.on_pointer_enter();
    }

    pub fn on_pointer_leave(&mut self) {
        trace!("pointer left plot");
        self.focus.on_pointer_leave();
    }

    /// Moves the focus to the record nearest to plot-local pixel `pixel_x`.
    ///
    /// Uses the layout of the last draw. The overlay reflects the new focus
    /// on the next `draw` or `build_frame`.
    pub fn on_pointer_move(&mut self, pixel_x: f64) -> Option<FocusedPoint> {
        let Some(geometry) = self.geometry.as_ref() else {
            warn!(pixel_x, "pointer move before first draw ignored");
            return None;
        };
        let Some(entry) = resolve_focus_curve(&self.curves, self.focus_curve.as_deref()) else {
            self.focus.clear_focus();
            return None;
        };
        self.focus.on_move(pixel_x, &geometry.layout, &entry.curve)
    }

    #[must_use]
    pub fn focus_state(&self) -> FocusState {
        self.focus.state()
    }

    /// Info row values for the focused record, in configured order.
    #[must_use]
    pub fn focus_rows(&self) -> &[InfoRowValue] {
        self.focus.readout()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

/// The explicitly selected curve if it is drawable, else the first drawable
/// curve in registration order.
fn resolve_focus_curve<'a, T>(
    curves: &'a IndexMap<String, CurveEntry<T>>,
    selected: Option<&str>,
) -> Option<&'a CurveEntry<T>> {
    selected
        .and_then(|name| curves.get(name))
        .filter(|entry| participates(&entry.curve))
        .or_else(|| curves.values().find(|entry| participates(&entry.curve)))
}
