use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Vec2, vec2};

use crate::radar::{Quadrant, Ring};

use super::LayoutError;

/// Radial extent of one ring band, measured from the drawing center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingBand {
    pub inner: f32,
    pub outer: f32,
}

impl RingBand {
    pub fn midpoint(self) -> f32 {
        (self.inner + self.outer) * 0.5
    }

    pub fn width(self) -> f32 {
        self.outer - self.inner
    }

    pub fn contains(self, radius: f32) -> bool {
        radius >= self.inner && radius <= self.outer
    }
}

/// Angular extent of one quadrant, in screen orientation (angles grow clockwise).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    pub start: f32,
    pub width: f32,
}

impl Slice {
    pub fn bisector(self) -> f32 {
        self.start + self.width * 0.5
    }

    /// Offset of `angle` past the slice start, wrapped into `[0, TAU)`.
    pub fn offset_of(self, angle: f32) -> f32 {
        (angle - self.start).rem_euclid(TAU)
    }

    pub fn contains(self, angle: f32) -> bool {
        let offset = self.offset_of(angle);
        offset <= self.width + 1.0e-4 || offset >= TAU - 1.0e-4
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadarGeometry {
    /// Index 0 is the outermost band.
    pub ring_order: Vec<Ring>,
    /// Index 0 starts at 12 o'clock, later slices follow clockwise.
    pub quadrant_order: Vec<Quadrant>,
    pub radius: f32,
}

impl RadarGeometry {
    pub fn new(radius: f32) -> Self {
        Self {
            ring_order: Ring::ALL.to_vec(),
            quadrant_order: Quadrant::ALL.to_vec(),
            radius,
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(LayoutError::DegenerateRadius(self.radius));
        }
        if self.ring_order.is_empty() || self.quadrant_order.is_empty() {
            return Err(LayoutError::EmptyGeometry);
        }
        Ok(())
    }

    fn scale(&self, value: f32) -> f32 {
        value * self.radius / self.ring_order.len() as f32
    }

    pub fn ring_index(&self, ring: Ring) -> Option<usize> {
        self.ring_order.iter().position(|candidate| *candidate == ring)
    }

    pub fn quadrant_index(&self, quadrant: Quadrant) -> Option<usize> {
        self.quadrant_order
            .iter()
            .position(|candidate| *candidate == quadrant)
    }

    pub fn band(&self, ring_index: usize) -> RingBand {
        let count = self.ring_order.len() as f32;
        let index = ring_index as f32;
        RingBand {
            inner: self.scale(count - index - 1.0),
            outer: self.scale(count - index),
        }
    }

    pub fn band_for(&self, ring: Ring) -> Option<RingBand> {
        self.ring_index(ring).map(|index| self.band(index))
    }

    pub fn slice_width(&self) -> f32 {
        TAU / self.quadrant_order.len() as f32
    }

    pub fn slice(&self, quadrant_index: usize) -> Slice {
        let width = self.slice_width();
        Slice {
            start: quadrant_index as f32 * width - FRAC_PI_2,
            width,
        }
    }

    pub fn slice_for(&self, quadrant: Quadrant) -> Option<Slice> {
        self.quadrant_index(quadrant).map(|index| self.slice(index))
    }

    /// Ring captions sit on the 12 o'clock axis, one per band midpoint.
    pub fn ring_label_anchors(&self) -> Vec<(Ring, Vec2)> {
        self.ring_order
            .iter()
            .enumerate()
            .map(|(index, ring)| (*ring, vec2(0.0, -self.band(index).midpoint())))
            .collect()
    }
}

pub fn polar(radius: f32, angle: f32) -> Vec2 {
    vec2(radius * angle.cos(), radius * angle.sin())
}

pub fn angle_of(point: Vec2) -> f32 {
    point.y.atan2(point.x)
}
