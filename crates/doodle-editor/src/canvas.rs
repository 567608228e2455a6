//! The doodle canvas widget.
//!
//! `DoodleCanvas` owns the live stroke style, the in-progress path, and the
//! history of committed strokes. Pointer events flow through the pen tool
//! into `CanvasMutation`s; every event and every style change raises a
//! redraw request, and each render replays the whole history.

use crate::input::InputEvent;
use crate::tools::{PenTool, Tool};
use crate::widget::{Size, Widget};
use doodle_core::{CanvasConfig, Color, History, Stroke, StrokePath, StrokeStyle};
use doodle_render::{FrameInput, Painter, paint_frame, render_snapshot};
use tiny_skia::Pixmap;

/// A change to canvas geometry produced by a tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasMutation {
    /// Start a new in-progress path, dropping any uncommitted one.
    BeginPath { x: f32, y: f32 },
    /// Append a segment to the in-progress path.
    ExtendPath { x: f32, y: f32 },
    /// Freeze the in-progress path with the live style and push it to history.
    CommitPath,
    /// Drop the in-progress path without committing.
    DiscardPath,
}

pub struct DoodleCanvas {
    config: CanvasConfig,
    history: History,
    live_path: StrokePath,
    /// Applies to live rendering and to the next committed stroke.
    style: StrokeStyle,
    pen: PenTool,
    size: Size,
    redraw_requested: bool,
}

impl Default for DoodleCanvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl DoodleCanvas {
    /// Build a canvas from `config`. Out-of-range width and density are
    /// replaced with usable values; call `CanvasConfig::validate` first to
    /// reject them instead.
    pub fn new(mut config: CanvasConfig) -> Self {
        if !(config.density.is_finite() && config.density > 0.0) {
            log::warn!("density {} out of range, using 1", config.density);
            config.density = 1.0;
        }
        let style = StrokeStyle {
            width: StrokeStyle::clamp_width(config.default_style.width),
            ..config.default_style
        };
        Self {
            config,
            history: History::new(),
            live_path: StrokePath::new(),
            style,
            pen: PenTool::new(),
            size: Size::default(),
            redraw_requested: true,
        }
    }

    // ─── Style ───────────────────────────────────────────────────────────

    /// Set the width of future strokes, clamped to the supported range.
    pub fn set_stroke_width(&mut self, width: f32) {
        let clamped = StrokeStyle::clamp_width(width);
        if clamped != width {
            log::warn!("stroke width {width} out of range, using {clamped}");
        }
        self.style.width = clamped;
        log::debug!("stroke width → {clamped}");
        self.request_redraw();
    }

    /// Set the color of future strokes from a packed `0xAARRGGBB` int.
    pub fn set_stroke_color(&mut self, argb: u32) {
        self.set_stroke_color_rgba(Color::from_argb(argb));
    }

    pub fn set_stroke_color_rgba(&mut self, color: Color) {
        self.style.color = color;
        log::debug!("stroke color → {color}");
        self.request_redraw();
    }

    /// Set the opacity of future strokes, clamped to `0..=255`.
    pub fn set_stroke_alpha(&mut self, alpha: i32) {
        let clamped = StrokeStyle::clamp_alpha(alpha);
        if clamped as i32 != alpha {
            log::warn!("stroke alpha {alpha} out of range, using {clamped}");
        }
        self.style.alpha = clamped;
        log::debug!("stroke alpha → {clamped}");
        self.request_redraw();
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Discard every committed stroke. The in-progress path survives.
    pub fn clear_canvas(&mut self) {
        let dropped = self.history.clear();
        log::info!("cleared {dropped} strokes");
        self.request_redraw();
    }

    /// Apply a tool mutation to the live path and history.
    pub fn apply_mutation(&mut self, mutation: CanvasMutation) {
        match mutation {
            CanvasMutation::BeginPath { x, y } => self.live_path.begin_at(x, y),
            CanvasMutation::ExtendPath { x, y } => self.live_path.line_to(x, y),
            CanvasMutation::CommitPath => {
                if self.live_path.is_empty() {
                    return;
                }
                let path = std::mem::take(&mut self.live_path);
                log::debug!(
                    "commit stroke #{} ({} points, w={}, a={})",
                    self.history.len(),
                    path.point_count(),
                    self.style.width,
                    self.style.alpha
                );
                self.history.push(Stroke::new(path, self.style));
            }
            CanvasMutation::DiscardPath => {
                log::debug!("discard live path ({} points)", self.live_path.point_count());
                self.live_path.reset();
            }
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn live_path(&self) -> &StrokePath {
        &self.live_path
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Whether a redraw is pending, without consuming it.
    pub fn is_dirty(&self) -> bool {
        self.redraw_requested
    }

    pub fn frame_input(&self) -> FrameInput<'_> {
        FrameInput {
            strokes: self.history.as_slice(),
            live_path: &self.live_path,
            live_style: &self.style,
            background: self.config.background,
            density: self.config.density,
        }
    }

    /// Rasterize the current state offscreen at the view's size.
    ///
    /// Returns `None` until the host reports a non-zero size.
    pub fn snapshot(&self) -> Option<Pixmap> {
        if !self.size.is_drawable() {
            return None;
        }
        render_snapshot(
            self.size.width,
            self.size.height,
            self.config.antialias,
            &self.frame_input(),
        )
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}

impl Widget for DoodleCanvas {
    fn on_pointer_event(&mut self, event: &InputEvent) -> bool {
        log::trace!("pointer {:?} at {:?}", event.phase(), event.position());
        for mutation in self.pen.handle(event) {
            self.apply_mutation(mutation);
        }
        self.request_redraw();
        true
    }

    fn on_render(&self, painter: &mut dyn Painter) -> bool {
        if !self.size.is_drawable() {
            log::trace!("skip render at {}x{}", self.size.width, self.size.height);
            return false;
        }
        paint_frame(painter, &self.frame_input());
        true
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        log::debug!("resize {width}x{height}");
        self.size = Size::new(width, height);
        self.request_redraw();
    }

    fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
