//! Backend-neutral frame replay.
//!
//! A frame is always drawn from scratch: background, then every committed
//! stroke in history order, then the in-progress path on top. Backends
//! only need to know how to clear, stroke a polyline, and fill a dot.

use doodle_core::model::{Color, Point, Stroke, StrokePath, StrokeStyle};

/// A style resolved to physical pixels, ready to hand to a backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Pen {
    pub fn resolve(style: &StrokeStyle, density: f32) -> Self {
        Self {
            color: style.effective_color(),
            width: style.width * density,
        }
    }
}

/// Render target. Strokes are outline-only with round caps and joins.
pub trait Painter {
    fn clear(&mut self, color: Color);

    /// Stroke a path with at least two distinct vertices.
    fn stroke_path(&mut self, path: &StrokePath, pen: &Pen);

    /// Paint a degenerate stroke: a filled disc of diameter `pen.width`.
    fn fill_dot(&mut self, center: Point, pen: &Pen);
}

/// Everything one frame needs.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub strokes: &'a [Stroke],
    pub live_path: &'a StrokePath,
    pub live_style: &'a StrokeStyle,
    pub background: Color,
    pub density: f32,
}

/// Replay history and the live path onto `painter`.
pub fn paint_frame(painter: &mut dyn Painter, frame: &FrameInput<'_>) {
    painter.clear(frame.background);

    for stroke in frame.strokes {
        paint_path(painter, stroke.path(), stroke.style(), frame.density);
    }
    paint_path(painter, frame.live_path, frame.live_style, frame.density);

    log::trace!(
        "PAINT frame: {} strokes, live path {} points",
        frame.strokes.len(),
        frame.live_path.point_count()
    );
}

fn paint_path(painter: &mut dyn Painter, path: &StrokePath, style: &StrokeStyle, density: f32) {
    if path.is_empty() {
        return;
    }
    let pen = Pen::resolve(style, density);
    if path.is_point() {
        // A tap with round caps is a dot; it must not vanish.
        let center = path.commands()[0].point();
        painter.fill_dot(center, &pen);
    } else {
        painter.stroke_path(path, &pen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear(Color),
        Stroke { first: Point, points: usize, pen: Pen },
        Dot { center: Point, pen: Pen },
    }

    #[derive(Default)]
    struct RecordingPainter {
        calls: Vec<Call>,
    }

    impl Painter for RecordingPainter {
        fn clear(&mut self, color: Color) {
            self.calls.push(Call::Clear(color));
        }

        fn stroke_path(&mut self, path: &StrokePath, pen: &Pen) {
            self.calls.push(Call::Stroke {
                first: path.commands()[0].point(),
                points: path.point_count(),
                pen: *pen,
            });
        }

        fn fill_dot(&mut self, center: Point, pen: &Pen) {
            self.calls.push(Call::Dot { center, pen: *pen });
        }
    }

    fn line(x0: f32, y0: f32, x1: f32, y1: f32) -> StrokePath {
        let mut path = StrokePath::new();
        path.begin_at(x0, y0);
        path.line_to(x1, y1);
        path
    }

    #[test]
    fn replays_history_then_live_path() {
        let red = StrokeStyle {
            color: Color::from_argb(0xFFFF0000),
            width: 5.0,
            alpha: 128,
        };
        let blue = StrokeStyle {
            color: Color::from_argb(0xFF0000FF),
            ..StrokeStyle::default()
        };
        let strokes = vec![
            Stroke::new(line(0.0, 0.0, 10.0, 10.0), red),
            Stroke::new(line(20.0, 20.0, 30.0, 30.0), blue),
        ];
        let live = line(40.0, 40.0, 50.0, 50.0);
        let live_style = StrokeStyle::default();

        let mut painter = RecordingPainter::default();
        paint_frame(
            &mut painter,
            &FrameInput {
                strokes: &strokes,
                live_path: &live,
                live_style: &live_style,
                background: Color::WHITE,
                density: 2.0,
            },
        );

        assert_eq!(
            painter.calls,
            vec![
                Call::Clear(Color::WHITE),
                Call::Stroke {
                    first: Point::new(0.0, 0.0),
                    points: 2,
                    pen: Pen {
                        color: red.effective_color(),
                        width: 10.0,
                    },
                },
                Call::Stroke {
                    first: Point::new(20.0, 20.0),
                    points: 2,
                    pen: Pen {
                        color: blue.effective_color(),
                        width: 20.0,
                    },
                },
                Call::Stroke {
                    first: Point::new(40.0, 40.0),
                    points: 2,
                    pen: Pen {
                        color: Color::BLACK,
                        width: 20.0,
                    },
                },
            ]
        );
    }

    #[test]
    fn degenerate_path_paints_dot_and_empty_live_path_is_skipped() {
        let mut tap = StrokePath::new();
        tap.begin_at(7.0, 8.0);
        let strokes = vec![Stroke::new(tap, StrokeStyle::default())];
        let live = StrokePath::new();
        let style = StrokeStyle::default();

        let mut painter = RecordingPainter::default();
        paint_frame(
            &mut painter,
            &FrameInput {
                strokes: &strokes,
                live_path: &live,
                live_style: &style,
                background: Color::TRANSPARENT,
                density: 1.0,
            },
        );

        assert_eq!(
            painter.calls,
            vec![
                Call::Clear(Color::TRANSPARENT),
                Call::Dot {
                    center: Point::new(7.0, 8.0),
                    pen: Pen {
                        color: Color::BLACK,
                        width: 10.0,
                    },
                },
            ]
        );
    }
}
