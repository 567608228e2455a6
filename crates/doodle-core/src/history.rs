//! Ordered history of committed strokes.
//!
//! Insertion order is render order: later strokes paint over earlier ones.
//! Strokes leave the history only through `clear`.

use crate::model::Stroke;

#[derive(Debug, Clone, Default)]
pub struct History {
    strokes: Vec<Stroke>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Discard every committed stroke. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.strokes.len();
        self.strokes.clear();
        dropped
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn last(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    pub fn as_slice(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stroke> {
        self.strokes.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Stroke;
    type IntoIter = std::slice::Iter<'a, Stroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
