//! Core data model for doodle strokes.
//!
//! A stroke is one pen trajectory (`StrokePath`) frozen together with the
//! `StrokeStyle` that was live when the pointer was released. Paths are
//! append-only while in progress and never change after commit.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Unpack a platform color int laid out as `0xAARRGGBB`.
    pub fn from_argb(argb: u32) -> Self {
        Self::from_rgba8(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Pack as `0xAARRGGBB`.
    pub fn to_argb(&self) -> u32 {
        let [r, g, b, a] = self.to_rgba8();
        (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            unit_to_u8(self.r),
            unit_to_u8(self.g),
            unit_to_u8(self.b),
            unit_to_u8(self.a),
        ]
    }

    /// Same color with the alpha channel replaced.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        let short = |i: usize| hex_val(bytes[i]).map(|v| v * 17);
        let long = |i: usize| Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?);

        match bytes.len() {
            3 => Some(Self::from_rgba8(short(0)?, short(1)?, short(2)?, 255)),
            4 => Some(Self::from_rgba8(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::from_rgba8(long(0)?, long(2)?, long(4)?, 255)),
            8 => Some(Self::from_rgba8(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => None,
        }
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color `{s}`")))
    }
}

// ─── Stroke style ────────────────────────────────────────────────────────

/// Smallest stroke width a style will hold. Narrower requests are floored.
pub const MIN_STROKE_WIDTH: f32 = 0.1;

/// Largest stroke width a style will hold. Keeps pen geometry finite.
pub const MAX_STROKE_WIDTH: f32 = 10_000.0;

pub const DEFAULT_STROKE_WIDTH: f32 = 10.0;

/// Paint configuration applied when stroking a path.
///
/// `width` is in device-independent units. `alpha` overrides the alpha
/// channel of `color` at paint time. Caps and joins are always round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub alpha: u8,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: DEFAULT_STROKE_WIDTH,
            alpha: u8::MAX,
        }
    }
}

impl StrokeStyle {
    /// The color actually painted: `color` with its alpha replaced by `alpha`.
    pub fn effective_color(&self) -> Color {
        self.color.with_alpha(self.alpha as f32 / 255.0)
    }

    /// Clamp a requested width into `MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH`.
    /// NaN maps to the floor.
    pub fn clamp_width(width: f32) -> f32 {
        if width.is_nan() {
            MIN_STROKE_WIDTH
        } else {
            width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
        }
    }

    pub fn clamp_alpha(alpha: i32) -> u8 {
        alpha.clamp(0, u8::MAX as i32) as u8
    }
}

// ─── Path data ───────────────────────────────────────────────────────────

/// A 2D coordinate in view-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(f32, f32),
    LineTo(f32, f32),
}

impl PathCmd {
    pub fn point(&self) -> Point {
        match *self {
            PathCmd::MoveTo(x, y) | PathCmd::LineTo(x, y) => Point::new(x, y),
        }
    }
}

/// One continuous pen trajectory: a `MoveTo` followed by zero or more `LineTo`s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrokePath {
    commands: Vec<PathCmd>,
}

impl StrokePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any existing geometry and start a new trajectory at `(x, y)`.
    pub fn begin_at(&mut self, x: f32, y: f32) {
        self.commands.clear();
        self.commands.push(PathCmd::MoveTo(x, y));
    }

    /// Extend the trajectory. Ignored until `begin_at` has been called.
    pub fn line_to(&mut self, x: f32, y: f32) {
        if self.commands.is_empty() {
            return;
        }
        self.commands.push(PathCmd::LineTo(x, y));
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.commands
    }

    pub fn point_count(&self) -> usize {
        self.commands.len()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().map(PathCmd::point)
    }

    /// True for a non-empty path that never leaves its starting point.
    /// Such a path paints as a dot.
    pub fn is_point(&self) -> bool {
        match self.commands.first() {
            Some(first) => {
                let origin = first.point();
                self.points().all(|p| p == origin)
            }
            None => false,
        }
    }
}

// ─── Stroke ──────────────────────────────────────────────────────────────

/// A committed pen trajectory with the style it was drawn with.
///
/// Strokes expose no mutable access; a committed stroke renders the same
/// way for the rest of its life.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    path: StrokePath,
    style: StrokeStyle,
}

impl Stroke {
    pub fn new(path: StrokePath, style: StrokeStyle) -> Self {
        Self { path, style }
    }

    pub fn path(&self) -> &StrokePath {
        &self.path
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}
