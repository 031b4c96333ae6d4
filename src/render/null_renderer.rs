use crate::error::ChartResult;
use crate::render::{CanvasLayerKind, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch invalid geometry before a
/// real backend sees it, and remembers the last frame it was handed.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_primitive_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    /// Primitive count of `kind` in the last rendered frame.
    #[must_use]
    pub fn last_layer_count(&self, kind: CanvasLayerKind) -> usize {
        self.last_frame
            .as_ref()
            .and_then(|frame| frame.layer(kind))
            .map_or(0, |layer| layer.primitive_count())
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_primitive_count = frame.primitive_count();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
