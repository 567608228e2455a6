//! Drawable-widget capability.
//!
//! Hosts place a widget in their layout and drive it through three hooks:
//! pointer input, render, and resize. Widgets never paint synchronously;
//! they raise a redraw request that the host's scheduler consumes before
//! its next render pass.

use crate::input::InputEvent;
use doodle_render::Painter;

/// View bounds in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A surface can only be drawn once both dimensions are non-zero.
    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

pub trait Widget {
    /// Handle a pointer event. Returns `true` if the widget consumed it.
    fn on_pointer_event(&mut self, event: &InputEvent) -> bool;

    /// Paint the widget's current state from scratch. Returns `false` when
    /// the widget has no drawable area and nothing was painted.
    fn on_render(&self, painter: &mut dyn Painter) -> bool;

    /// New view bounds from the host layout.
    fn on_resize(&mut self, width: u32, height: u32);

    /// Consume the pending redraw request, if any.
    fn take_redraw_request(&mut self) -> bool;

    /// One scheduler tick: render only if a redraw was requested.
    ///
    /// The request is consumed either way. Returns `true` only when a frame
    /// was painted.
    fn render_if_dirty(&mut self, painter: &mut dyn Painter) -> bool {
        self.take_redraw_request() && self.on_render(painter)
    }
}
