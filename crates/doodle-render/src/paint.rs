//! Stroke replay → Vello drawing commands.
//!
//! `ScenePainter` encodes a frame into a Vello `Scene`. The caller owns
//! the wgpu device and presents the scene; this module never touches the
//! GPU.

use crate::painter::{Painter, Pen};
use doodle_core::model::{Color, PathCmd, Point, StrokePath};
use kurbo::{Affine, BezPath, Cap, Circle, Join, Rect, Stroke as KurboStroke};
use peniko::Fill;
use vello::Scene;

/// Encodes frames into a borrowed Vello scene.
///
/// Reset the scene before each frame; every `paint_frame` call starts with
/// a full-surface clear.
pub struct ScenePainter<'a> {
    scene: &'a mut Scene,
    width: f64,
    height: f64,
}

impl<'a> ScenePainter<'a> {
    pub fn new(scene: &'a mut Scene, width: u32, height: u32) -> Self {
        Self {
            scene,
            width: width as f64,
            height: height as f64,
        }
    }
}

impl Painter for ScenePainter<'_> {
    fn clear(&mut self, color: Color) {
        if color.a <= 0.0 {
            return;
        }
        let surface = Rect::new(0.0, 0.0, self.width, self.height);
        self.scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            to_peniko(color),
            None,
            &surface,
        );
    }

    fn stroke_path(&mut self, path: &StrokePath, pen: &Pen) {
        let bez = to_bez_path(path);
        let stroke = round_stroke(pen);
        log::trace!("STROKE {} points w={}", path.point_count(), pen.width);
        self.scene
            .stroke(&stroke, Affine::IDENTITY, to_peniko(pen.color), None, &bez);
    }

    fn fill_dot(&mut self, center: Point, pen: &Pen) {
        let dot = Circle::new((center.x as f64, center.y as f64), pen.width as f64 / 2.0);
        log::trace!("DOT at ({}, {}) w={}", center.x, center.y, pen.width);
        self.scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            to_peniko(pen.color),
            None,
            &dot,
        );
    }
}

/// Convert a stroke path to kurbo geometry.
pub fn to_bez_path(path: &StrokePath) -> BezPath {
    let mut bez = BezPath::new();
    for cmd in path.commands() {
        match *cmd {
            PathCmd::MoveTo(x, y) => bez.move_to((x as f64, y as f64)),
            PathCmd::LineTo(x, y) => bez.line_to((x as f64, y as f64)),
        }
    }
    bez
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn round_stroke(pen: &Pen) -> KurboStroke {
    KurboStroke {
        width: pen.width as f64,
        join: Join::Round,
        start_cap: Cap::Round,
        end_cap: Cap::Round,
        ..Default::default()
    }
}

fn to_peniko(color: Color) -> peniko::Color {
    let [r, g, b, a] = color.to_rgba8();
    peniko::Color::from_rgba8(r, g, b, a)
}
