//! Tool system for canvas interactions.
//!
//! A tool translates pointer events into `CanvasMutation`s that the
//! `DoodleCanvas` applies to its live path and history.

use crate::canvas::CanvasMutation;
use crate::input::InputEvent;

/// Trait for tools that handle input and produce mutations.
pub trait Tool {
    /// Handle an input event, returning zero or more mutations.
    fn handle(&mut self, event: &InputEvent) -> Vec<CanvasMutation>;
}

// ─── Pen Tool (freehand) ─────────────────────────────────────────────────

/// Freehand pen: down starts a path, moves extend it, up commits it.
///
/// Moves and releases that arrive without a preceding press are dropped.
#[derive(Debug, Default)]
pub struct PenTool {
    drawing: bool,
}

impl PenTool {
    pub fn new() -> Self {
        Self { drawing: false }
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}

impl Tool for PenTool {
    fn handle(&mut self, event: &InputEvent) -> Vec<CanvasMutation> {
        match *event {
            InputEvent::PointerDown { x, y, .. } => {
                self.drawing = true;
                vec![CanvasMutation::BeginPath { x, y }]
            }
            InputEvent::PointerMove { x, y, .. } => {
                if self.drawing {
                    vec![CanvasMutation::ExtendPath { x, y }]
                } else {
                    vec![]
                }
            }
            // The release position is not appended; the path ends at the last move.
            InputEvent::PointerUp { .. } => {
                if std::mem::take(&mut self.drawing) {
                    vec![CanvasMutation::CommitPath]
                } else {
                    vec![]
                }
            }
            InputEvent::PointerCancel => {
                if std::mem::take(&mut self.drawing) {
                    vec![CanvasMutation::DiscardPath]
                } else {
                    vec![]
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pen_tool_full_gesture() {
        let mut tool = PenTool::new();
        assert!(!tool.is_drawing());

        let mutations = tool.handle(&InputEvent::from_pointer_down(0.0, 0.0, 1.0));
        assert_eq!(mutations, vec![CanvasMutation::BeginPath { x: 0.0, y: 0.0 }]);
        assert!(tool.is_drawing());

        let mutations = tool.handle(&InputEvent::from_pointer_move(10.0, 10.0, 1.0));
        assert_eq!(
            mutations,
            vec![CanvasMutation::ExtendPath { x: 10.0, y: 10.0 }]
        );

        let mutations = tool.handle(&InputEvent::from_pointer_up(12.0, 12.0));
        assert_eq!(mutations, vec![CanvasMutation::CommitPath]);
        assert!(!tool.is_drawing());
    }

    #[test]
    fn pen_tool_ignores_move_and_up_without_down() {
        let mut tool = PenTool::new();
        assert!(
            tool.handle(&InputEvent::from_pointer_move(5.0, 5.0, 1.0))
                .is_empty()
        );
        assert!(tool.handle(&InputEvent::from_pointer_up(5.0, 5.0)).is_empty());

        // A second release after a completed gesture is also dropped.
        tool.handle(&InputEvent::from_pointer_down(0.0, 0.0, 1.0));
        tool.handle(&InputEvent::from_pointer_up(0.0, 0.0));
        assert!(tool.handle(&InputEvent::from_pointer_up(0.0, 0.0)).is_empty());
        assert!(
            tool.handle(&InputEvent::from_pointer_move(1.0, 1.0, 1.0))
                .is_empty()
        );
    }

    #[test]
    fn pen_tool_cancel_discards() {
        let mut tool = PenTool::new();
        assert!(tool.handle(&InputEvent::PointerCancel).is_empty());

        tool.handle(&InputEvent::from_pointer_down(0.0, 0.0, 1.0));
        assert_eq!(
            tool.handle(&InputEvent::PointerCancel),
            vec![CanvasMutation::DiscardPath]
        );
        assert!(tool.handle(&InputEvent::from_pointer_up(0.0, 0.0)).is_empty());
    }

    #[test]
    fn pen_tool_redown_restarts() {
        let mut tool = PenTool::new();
        tool.handle(&InputEvent::from_pointer_down(0.0, 0.0, 1.0));
        let mutations = tool.handle(&InputEvent::from_pointer_down(9.0, 9.0, 1.0));
        assert_eq!(mutations, vec![CanvasMutation::BeginPath { x: 9.0, y: 9.0 }]);
    }
}
