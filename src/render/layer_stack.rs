use serde::{Deserialize, Serialize};

/// Drawing layer of a chart frame. Backends paint layers in [`CanvasLayerKind::DRAW_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Grid,
    Axis,
    Legend,
    Series,
    Focus,
}

impl CanvasLayerKind {
    pub const DRAW_ORDER: [Self; 5] = [
        Self::Grid,
        Self::Axis,
        Self::Legend,
        Self::Series,
        Self::Focus,
    ];

    /// Position of this layer in [`Self::DRAW_ORDER`].
    #[must_use]
    pub const fn draw_index(self) -> usize {
        self as usize
    }
}
