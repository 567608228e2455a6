//! Input abstraction layer.
//!
//! Normalizes mouse, touch, and stylus events into a unified `InputEvent`
//! consumed by the pen tool.

/// A normalized input event from any pointing device.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start, stylus contact).
    PointerDown {
        x: f32,
        y: f32,
        /// Pressure from 0.0 (none) to 1.0 (max). Mouse is always 1.0.
        pressure: f32,
    },

    /// Pointer moved while pressed.
    PointerMove { x: f32, y: f32, pressure: f32 },

    /// Pointer released.
    PointerUp { x: f32, y: f32 },

    /// Gesture taken over by the platform (e.g. a parent started scrolling).
    PointerCancel,
}

/// Gesture phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Begin,
    Move,
    End,
    Cancel,
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32, pressure: f32) -> Self {
        Self::PointerDown { x, y, pressure }
    }

    pub fn from_pointer_move(x: f32, y: f32, pressure: f32) -> Self {
        Self::PointerMove { x, y, pressure }
    }

    pub fn from_pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }

    pub fn phase(&self) -> Phase {
        match self {
            Self::PointerDown { .. } => Phase::Begin,
            Self::PointerMove { .. } => Phase::Move,
            Self::PointerUp { .. } => Phase::End,
            Self::PointerCancel => Phase::Cancel,
        }
    }

    /// Extract position if the event carries one.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y, .. }
            | Self::PointerMove { x, y, .. }
            | Self::PointerUp { x, y } => Some((*x, *y)),
            Self::PointerCancel => None,
        }
    }
}
