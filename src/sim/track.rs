//! The sketched track and the arena it lives in
//!
//! A track is nothing more than the ordered list of line segments the
//! player has drawn so far. Segments arrive from the host as flat
//! coordinate rows, can pile up mid-run, and can be wiped in one stroke.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One drawn wall, a finite line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint
    pub a: Vec2,
    /// Second endpoint
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Build a segment from a flat `x1, y1, x2, y2` row
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }
}

/// Every segment drawn so far, in insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    pub segments: Vec<Segment>,
}

impl Track {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment to the track
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Append a segment from a flat coordinate row
    ///
    /// The first four values are `x1, y1, x2, y2`; anything after them is
    /// ignored. A row with fewer than four values is rejected and the
    /// track is left untouched.
    pub fn push_coords(&mut self, coords: &[f32]) -> bool {
        match coords {
            [x1, y1, x2, y2, ..] => {
                self.push(Segment::from_coords(*x1, *y1, *x2, *y2));
                true
            }
            _ => {
                log::warn!("discarding segment row with {} coordinates", coords.len());
                false
            }
        }
    }

    /// Erase the whole drawing
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// The rectangular play area, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a point lies inside the bounds, edges included
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}
