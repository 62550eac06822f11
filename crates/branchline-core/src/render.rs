//! Boundary between layout and whatever actually draws.
//!
//! A [`RenderAdapter`] receives one finished [`LayoutResult`] per `push`. It
//! never sees the model and never feeds anything back into layout.

use crate::error::RenderError;
use crate::layout::LayoutResult;

/// A drawing surface that consumes finished layouts.
pub trait RenderAdapter {
    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the surface could not draw the frame.
    fn render(&mut self, layout: &LayoutResult) -> Result<(), RenderError>;
}

impl<R: RenderAdapter + ?Sized> RenderAdapter for &mut R {
    fn render(&mut self, layout: &LayoutResult) -> Result<(), RenderError> {
        (**self).render(layout)
    }
}

impl<R: RenderAdapter + ?Sized> RenderAdapter for Box<R> {
    fn render(&mut self, layout: &LayoutResult) -> Result<(), RenderError> {
        (**self).render(layout)
    }
}

/// Keeps every frame it is handed, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingRenderer {
    frames: Vec<LayoutResult>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames(&self) -> &[LayoutResult] {
        &self.frames
    }

    #[must_use]
    pub fn last(&self) -> Option<&LayoutResult> {
        self.frames.last()
    }
}

impl RenderAdapter for RecordingRenderer {
    fn render(&mut self, layout: &LayoutResult) -> Result<(), RenderError> {
        self.frames.push(layout.clone());
        Ok(())
    }
}
