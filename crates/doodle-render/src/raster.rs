//! CPU rasterization via tiny-skia.
//!
//! Produces on-demand snapshots of the canvas: the full stroke replay is
//! rendered into a fresh `Pixmap` sized to the view.

use crate::painter::{FrameInput, Painter, Pen, paint_frame};
use doodle_core::model::{Color, PathCmd, Point, StrokePath};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Draws into a borrowed tiny-skia pixmap.
pub struct RasterPainter<'a> {
    pixmap: &'a mut Pixmap,
    antialias: bool,
}

impl<'a> RasterPainter<'a> {
    pub fn new(pixmap: &'a mut Pixmap) -> Self {
        Self {
            pixmap,
            antialias: true,
        }
    }

    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    fn paint_for(&self, color: Color) -> Paint<'static> {
        let [r, g, b, a] = color.to_rgba8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = self.antialias;
        paint
    }
}

impl Painter for RasterPainter<'_> {
    fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.to_rgba8();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    fn stroke_path(&mut self, path: &StrokePath, pen: &Pen) {
        let mut pb = PathBuilder::new();
        for cmd in path.commands() {
            match *cmd {
                PathCmd::MoveTo(x, y) => pb.move_to(x, y),
                PathCmd::LineTo(x, y) => pb.line_to(x, y),
            }
        }
        let Some(skia_path) = pb.finish() else {
            return;
        };

        let paint = self.paint_for(pen.color);
        let stroke = Stroke {
            width: pen.width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&skia_path, &paint, &stroke, Transform::identity(), None);
    }

    fn fill_dot(&mut self, center: Point, pen: &Pen) {
        let Some(dot) = PathBuilder::from_circle(center.x, center.y, pen.width / 2.0) else {
            return;
        };
        let paint = self.paint_for(pen.color);
        self.pixmap
            .fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

/// Render a full frame offscreen.
///
/// Returns `None` when either dimension is zero.
pub fn render_snapshot(
    width: u32,
    height: u32,
    antialias: bool,
    frame: &FrameInput<'_>,
) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(width, height)?;
    let mut painter = RasterPainter::new(&mut pixmap).with_antialias(antialias);
    paint_frame(&mut painter, frame);
    log::debug!("snapshot rendered at {width}x{height}");
    Some(pixmap)
}
