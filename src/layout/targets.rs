use eframe::egui::Vec2;

use crate::radar::{Quadrant, RadarItem, Ring};

use super::geometry::{RadarGeometry, RingBand, Slice, polar};

/// Fraction of the slice kept free on each side of the spread.
const SLICE_MARGIN: f32 = 0.1;
/// Fraction of the slice the items are spread across.
const SLICE_SPREAD: f32 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Target {
    pub(super) quadrant: Quadrant,
    pub(super) ring: Ring,
    pub(super) band: RingBand,
    pub(super) slice: Slice,
    pub(super) radius: f32,
    pub(super) angle: f32,
    pub(super) position: Vec2,
}

/// Angle inside `slice` for the item at `index` out of `total` input items.
///
/// The index counts the whole input, not the item's own quadrant, so the
/// items of a quadrant are only spread evenly when the input interleaves them.
pub(super) fn target_angle(slice: Slice, index: usize, total: usize) -> f32 {
    let fraction = if total == 0 {
        0.0
    } else {
        index as f32 / total as f32
    };
    slice.start + SLICE_MARGIN * slice.width + fraction * SLICE_SPREAD * slice.width
}

/// One entry per input item; `None` for items the geometry cannot place.
pub(super) fn stage_targets(items: &[RadarItem], geometry: &RadarGeometry) -> Vec<Option<Target>> {
    let total = items.len();
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let quadrant = item.quadrant_kind()?;
            let ring = item.ring_kind()?;
            let band = geometry.band_for(ring)?;
            let slice = geometry.slice_for(quadrant)?;

            let radius = band.midpoint();
            let angle = target_angle(slice, index, total);
            Some(Target {
                quadrant,
                ring,
                band,
                slice,
                radius,
                angle,
                position: polar(radius, angle),
            })
        })
        .collect()
}
