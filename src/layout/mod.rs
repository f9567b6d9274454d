//! Radar placement: a deterministic target per item, then a bounded relaxation
//! that separates overlapping markers while keeping each one in its ring band
//! and quadrant slice.

mod forces;
mod geometry;
mod relax;
mod targets;

use eframe::egui::Vec2;

use crate::radar::{Quadrant, RadarItem, Ring};

pub use geometry::{RadarGeometry, polar};
use relax::{Body, relax};
use targets::stage_targets;

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("drawing radius must be positive, got {0}")]
    DegenerateRadius(f32),
    #[error("radar geometry needs at least one ring and one quadrant")]
    EmptyGeometry,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub ticks: usize,
    /// Pull towards the item's own target, relative to the collision response.
    pub target_strength: f32,
    /// Minimum distance between two marker centers, label included.
    pub min_separation: f32,
    pub collision_passes: usize,
    pub label_exclusion_radius: f32,
    pub label_nudge_strength: f32,
    pub velocity_decay: f32,
    pub alpha_decay: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            ticks: 200,
            target_strength: 0.05,
            min_separation: 24.0,
            collision_passes: 3,
            label_exclusion_radius: 40.0,
            label_nudge_strength: 1.5,
            velocity_decay: 0.4,
            alpha_decay: 1.0 - 0.001_f32.powf(1.0 / 300.0),
        }
    }
}

/// An item with its computed place on the radar, relative to the drawing center.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedItem {
    /// Index of the item in the snapshot it was laid out from.
    pub index: usize,
    pub item: RadarItem,
    pub quadrant: Quadrant,
    pub ring: Ring,
    pub position: Vec2,
    pub target: Vec2,
    pub target_radius: f32,
}

/// Runs one complete layout pass.
///
/// Items whose quadrant or ring is not part of `geometry` are left out of the
/// result; the remaining items keep their input order.
pub fn layout_radar(
    items: &[RadarItem],
    geometry: &RadarGeometry,
    config: &LayoutConfig,
) -> Result<Vec<PositionedItem>, LayoutError> {
    geometry.validate()?;
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let staged = stage_targets(items, geometry);
    let placed = staged
        .into_iter()
        .enumerate()
        .filter_map(|(index, target)| target.map(|target| (index, target)))
        .collect::<Vec<_>>();

    let excluded = items.len() - placed.len();
    if excluded > 0 {
        log::debug!("{excluded} items have an unrecognized quadrant or ring and are not placed");
    }

    let mut bodies = placed
        .iter()
        .map(|(_, target)| Body {
            position: target.position,
            velocity: Vec2::ZERO,
            target: target.position,
            band: target.band,
            slice: target.slice,
        })
        .collect::<Vec<_>>();

    let anchors = geometry
        .ring_label_anchors()
        .into_iter()
        .map(|(_, anchor)| anchor)
        .collect::<Vec<_>>();
    relax(&mut bodies, &anchors, config);

    Ok(placed
        .into_iter()
        .zip(bodies)
        .map(|((index, target), body)| PositionedItem {
            index,
            item: items[index].clone(),
            quadrant: target.quadrant,
            ring: target.ring,
            position: body.position,
            target: target.position,
            target_radius: target.radius,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::geometry::angle_of;
    use super::*;

    fn item(label: &str, quadrant: &str, ring: &str) -> RadarItem {
        RadarItem {
            label: label.to_owned(),
            quadrant: quadrant.to_owned(),
            ring: ring.to_owned(),
            ..RadarItem::default()
        }
    }

    fn sample_items() -> Vec<RadarItem> {
        let quadrants = Quadrant::ALL.map(Quadrant::label);
        let rings = Ring::ALL.map(Ring::label);
        (0..24)
            .map(|index| {
                item(
                    &format!("item-{index}"),
                    quadrants[index % quadrants.len()],
                    rings[(index / quadrants.len()) % rings.len()],
                )
            })
            .collect()
    }

    fn run(items: &[RadarItem], radius: f32) -> Vec<PositionedItem> {
        layout_radar(items, &RadarGeometry::new(radius), &LayoutConfig::default()).unwrap()
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(run(&[], 300.0).is_empty());
    }

    #[test]
    fn degenerate_radius_refuses_to_run() {
        let items = sample_items();
        for radius in [0.0, -10.0] {
            assert_eq!(
                layout_radar(&items, &RadarGeometry::new(radius), &LayoutConfig::default()),
                Err(LayoutError::DegenerateRadius(radius))
            );
        }
    }

    #[test]
    fn targets_fall_inside_their_band_and_slice() {
        let geometry = RadarGeometry::new(400.0);
        let positioned = layout_radar(&sample_items(), &geometry, &LayoutConfig::default()).unwrap();
        assert_eq!(positioned.len(), 24);

        for entry in &positioned {
            let band = geometry.band_for(entry.ring).unwrap();
            let slice = geometry.slice_for(entry.quadrant).unwrap();

            assert!(entry.target_radius > band.inner && entry.target_radius < band.outer);
            assert!((entry.target.length() - entry.target_radius).abs() < 1.0e-3);
            assert!(slice.contains(angle_of(entry.target)));
        }
    }

    #[test]
    fn relaxed_positions_stay_in_their_band_and_slice() {
        let geometry = RadarGeometry::new(400.0);
        let positioned = layout_radar(&sample_items(), &geometry, &LayoutConfig::default()).unwrap();

        for entry in &positioned {
            let band = geometry.band_for(entry.ring).unwrap();
            let slice = geometry.slice_for(entry.quadrant).unwrap();

            assert!(band.contains(entry.position.length()), "{}", entry.item.label);
            assert!(slice.contains(angle_of(entry.position)), "{}", entry.item.label);
        }
    }

    #[test]
    fn relaxed_positions_keep_clear_of_ring_labels() {
        let config = LayoutConfig::default();
        let mut items = Vec::new();
        for quadrant in ["Platforms", "Tools", "Techniques"] {
            for ring in Ring::ALL {
                items.push(item(&format!("{quadrant}/{ring}"), quadrant, ring.label()));
            }
        }

        for (radius, items) in [(300.0, items), (400.0, sample_items())] {
            let geometry = RadarGeometry::new(radius);
            let anchors = geometry.ring_label_anchors();
            let positioned = layout_radar(&items, &geometry, &config).unwrap();

            for entry in &positioned {
                for (ring, anchor) in &anchors {
                    let distance = (entry.position - *anchor).length();
                    assert!(
                        distance >= config.label_exclusion_radius - 0.5,
                        "{} is {distance} from the {ring} label at radius {radius}",
                        entry.item.label
                    );
                }
            }
        }
    }

    #[test]
    fn relaxation_separates_crowded_items() {
        let config = LayoutConfig::default();
        let mut items = (0..5)
            .map(|index| item(&format!("crowded-{index}"), "Platforms", "In Discovery"))
            .collect::<Vec<_>>();
        items.push(item("tool", "Tools", "Adopted"));
        items.push(item("language", "Languages & Frameworks", "Not Recommended"));
        items.push(item("technique", "Techniques", "In Discovery"));

        let positioned = run(&items, 200.0);
        assert_eq!(positioned.len(), 8);

        let crowded_targets = positioned[0].target - positioned[1].target;
        assert!(crowded_targets.length() < config.min_separation);

        for (i, first) in positioned.iter().enumerate() {
            for second in &positioned[i + 1..] {
                let distance = (first.position - second.position).length();
                assert!(
                    distance >= config.min_separation - 1.0,
                    "{} and {} are {distance} apart",
                    first.item.label,
                    second.item.label
                );
            }
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let items = sample_items();
        let first = run(&items, 350.0);
        let second = run(&items, 350.0);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.index, b.index);
            assert!((a.position - b.position).length() < 1.0e-4);
        }
    }

    #[test]
    fn adopted_platforms_land_in_the_outer_ring_and_first_slice() {
        let geometry = RadarGeometry::new(300.0);
        let positioned = layout_radar(
            &[item("Kubernetes", "Platforms", "Adopted")],
            &geometry,
            &LayoutConfig::default(),
        )
        .unwrap();

        let entry = &positioned[0];
        assert_eq!(entry.target_radius, 250.0);
        assert!(geometry.band(0).contains(entry.position.length()));
        assert!(geometry.slice(0).contains(angle_of(entry.position)));
        // Slice 0 is the top-right quarter in screen orientation.
        assert!(entry.target.x > 0.0 && entry.target.y < 0.0);
    }

    #[test]
    fn angular_spread_uses_the_whole_input_index() {
        let geometry = RadarGeometry::new(300.0);
        let items = vec![
            item("p0", "Platforms", "Adopted"),
            item("t0", "Tools", "Adopted"),
            item("t1", "Tools", "Adopted"),
            item("t2", "Tools", "Adopted"),
            item("p1", "Platforms", "Adopted"),
        ];
        let positioned = layout_radar(&items, &geometry, &LayoutConfig::default()).unwrap();

        let offset = |index: usize| {
            let entry = &positioned[index];
            let slice = geometry.slice_for(entry.quadrant).unwrap();
            slice.offset_of(angle_of(entry.target)) / slice.width
        };

        // Platforms items sit at 0/5 and 4/5 of the spread, not at 0/2 and 1/2.
        assert!((offset(0) - 0.1).abs() < 1.0e-4);
        assert!((offset(4) - (0.1 + 0.8 * 4.0 / 5.0)).abs() < 1.0e-4);
        // Tools items are squeezed into the first part of their slice.
        assert!((offset(1) - (0.1 + 0.8 / 5.0)).abs() < 1.0e-4);
        assert!((offset(3) - (0.1 + 0.8 * 3.0 / 5.0)).abs() < 1.0e-4);
    }

    #[test]
    fn unknown_ring_is_excluded_but_order_is_kept() {
        let items = vec![
            item("Go", "Languages & Frameworks", "Adopted"),
            item("Perl", "Languages & Frameworks", "Retired"),
            item("Zig", "Languages & Frameworks", "In Discovery"),
        ];
        let positioned = run(&items, 300.0);

        let labels = positioned
            .iter()
            .map(|entry| entry.item.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, ["Go", "Zig"]);
        assert_eq!(positioned[1].index, 2);
    }
}
