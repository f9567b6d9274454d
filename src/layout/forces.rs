use std::f32::consts::{PI, TAU};

use eframe::egui::{Vec2, vec2};

use super::geometry::{RingBand, Slice, angle_of, polar};

/// Velocity change pulling `position` towards `target`.
pub(super) fn spring_to_target(position: Vec2, target: Vec2, strength: f32, alpha: f32) -> Vec2 {
    (target - position) * (strength * alpha)
}

/// Velocity change rotating `position` around the center, away from any ring
/// label anchor closer than `exclusion_radius`.
///
/// The result is always perpendicular to `position`, so it never pushes an
/// item across a ring boundary.
pub(super) fn label_nudge(
    position: Vec2,
    anchors: &[Vec2],
    exclusion_radius: f32,
    strength: f32,
    alpha: f32,
) -> Vec2 {
    let radius = position.length();
    if radius <= 1.0e-4 || exclusion_radius <= 0.0 {
        return Vec2::ZERO;
    }

    let tangent = vec2(-position.y, position.x) / radius;
    let angle = angle_of(position);

    let mut nudge = Vec2::ZERO;
    for &anchor in anchors {
        let distance = (position - anchor).length();
        if distance >= exclusion_radius {
            continue;
        }

        let delta = signed_angle(angle - angle_of(anchor));
        let direction = if delta >= 0.0 { 1.0 } else { -1.0 };
        let falloff = 1.0 - (distance / exclusion_radius);
        nudge += tangent * (direction * strength * falloff * alpha);
    }
    nudge
}

/// Position corrections separating every pair closer than `min_separation`.
///
/// Each overlapping pair is moved apart symmetrically by half of its overlap;
/// corrections are accumulated against the unmodified positions.
pub(super) fn collision_displacements(positions: &[Vec2], min_separation: f32) -> Vec<Vec2> {
    let mut displacements = vec![Vec2::ZERO; positions.len()];
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let delta = positions[i] - positions[j];
            let distance = delta.length();
            if distance >= min_separation {
                continue;
            }

            let direction = if distance > 1.0e-4 {
                delta / distance
            } else {
                let angle = ((i as f32) * 0.618_034 + (j as f32) * 0.414_214) * TAU;
                vec2(angle.cos(), angle.sin())
            };

            let push = direction * ((min_separation - distance) * 0.5);
            displacements[i] += push;
            displacements[j] -= push;
        }
    }
    displacements
}

/// Clamps `position` into its ring band and quadrant slice, `inset` away from the edges.
pub(super) fn confine(position: Vec2, band: RingBand, slice: Slice, inset: f32) -> Vec2 {
    let radial_inset = inset.min(band.width() * 0.5);
    let radius = position
        .length()
        .clamp(band.inner + radial_inset, band.outer - radial_inset);

    let angular_inset = if radius > 1.0e-4 {
        (inset / radius).min(slice.width * 0.5)
    } else {
        slice.width * 0.5
    };

    let offset = clamp_offset(slice, slice.offset_of(angle_of(position)), angular_inset);
    polar(radius, slice.start + offset)
}

fn clamp_offset(slice: Slice, offset: f32, angular_inset: f32) -> f32 {
    if offset > slice.width {
        // Outside the slice: snap to whichever edge is angularly closer.
        if offset - slice.width < TAU - offset {
            slice.width - angular_inset
        } else {
            angular_inset
        }
    } else {
        offset.clamp(angular_inset, slice.width - angular_inset)
    }
}

/// Rotates `position` around the center until it is `exclusion_radius` away
/// from every label anchor, staying `inset` inside its slice.
///
/// The radius is preserved. When the slice is too narrow to clear an anchor
/// the item ends up at the slice edge farthest from it.
pub(super) fn clear_labels(
    position: Vec2,
    anchors: &[Vec2],
    exclusion_radius: f32,
    slice: Slice,
    inset: f32,
) -> Vec2 {
    let radius = position.length();
    if radius <= 1.0e-4 || exclusion_radius <= 0.0 {
        return position;
    }

    let angular_inset = (inset / radius).min(slice.width * 0.5);
    let mut angle = angle_of(position);
    let mut moved = false;
    for &anchor in anchors {
        let anchor_radius = anchor.length();
        if anchor_radius <= 1.0e-4 || (radius - anchor_radius).abs() >= exclusion_radius {
            continue;
        }

        // Smallest angle between item and anchor at which they are far enough apart.
        let cos_gap = (radius * radius + anchor_radius * anchor_radius
            - exclusion_radius * exclusion_radius)
            / (2.0 * radius * anchor_radius);
        let gap = cos_gap.clamp(-1.0, 1.0).acos();

        let anchor_angle = angle_of(anchor);
        let delta = signed_angle(angle - anchor_angle);
        if delta.abs() >= gap {
            continue;
        }

        let direction = if delta.abs() > 1.0e-6 {
            delta.signum()
        } else {
            signed_angle(slice.bisector() - anchor_angle).signum()
        };
        let offset = slice.offset_of(anchor_angle + direction * gap);
        angle = slice.start + clamp_offset(slice, offset, angular_inset);
        moved = true;
    }

    if moved {
        polar(radius, angle)
    } else {
        position
    }
}

/// `angle` wrapped into `[-PI, PI)`.
fn signed_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    const TOP_RIGHT: Slice = Slice {
        start: -FRAC_PI_2,
        width: FRAC_PI_2,
    };

    #[test]
    fn spring_scales_with_alpha() {
        let pull = spring_to_target(vec2(10.0, 0.0), vec2(0.0, 0.0), 0.05, 1.0);
        assert!((pull - vec2(-0.5, 0.0)).length() < 1.0e-6);

        let weaker = spring_to_target(vec2(10.0, 0.0), vec2(0.0, 0.0), 0.05, 0.5);
        assert!((weaker - vec2(-0.25, 0.0)).length() < 1.0e-6);
    }

    #[test]
    fn label_nudge_is_tangential() {
        let anchor = vec2(0.0, -100.0);
        let position = polar(100.0, -FRAC_PI_2 + 0.2);

        let nudge = label_nudge(position, &[anchor], 40.0, 2.0, 1.0);
        assert!(nudge.length() > 0.0);
        assert!(nudge.dot(position).abs() < 1.0e-3);

        // Moves clockwise, away from the anchor sitting at 12 o'clock.
        let moved = position + nudge;
        assert!(angle_of(moved) > angle_of(position));
        assert!((moved.length() - position.length()).abs() < 0.05);
    }

    #[test]
    fn label_nudge_turns_the_other_way_before_the_anchor() {
        let anchor = vec2(0.0, -100.0);
        let position = polar(100.0, -FRAC_PI_2 - 0.2);

        let moved = position + label_nudge(position, &[anchor], 40.0, 2.0, 1.0);
        assert!(angle_of(moved) < angle_of(position));
    }

    #[test]
    fn label_nudge_ignores_distant_items() {
        let anchor = vec2(0.0, -100.0);
        let position = polar(100.0, 0.3);

        assert_eq!(label_nudge(position, &[anchor], 40.0, 2.0, 1.0), Vec2::ZERO);
        assert_eq!(label_nudge(Vec2::ZERO, &[anchor], 40.0, 2.0, 1.0), Vec2::ZERO);
    }

    #[test]
    fn collisions_split_the_overlap() {
        let displacements = collision_displacements(&[vec2(0.0, 0.0), vec2(10.0, 0.0)], 24.0);

        assert!((displacements[0] - vec2(-7.0, 0.0)).length() < 1.0e-5);
        assert!((displacements[1] - vec2(7.0, 0.0)).length() < 1.0e-5);
    }

    #[test]
    fn coincident_points_still_separate() {
        let displacements = collision_displacements(&[vec2(5.0, 5.0), vec2(5.0, 5.0)], 24.0);

        assert!((displacements[0].length() - 12.0).abs() < 1.0e-4);
        assert!((displacements[0] + displacements[1]).length() < 1.0e-4);
    }

    #[test]
    fn separated_points_are_left_alone() {
        let displacements = collision_displacements(&[vec2(0.0, 0.0), vec2(30.0, 0.0)], 24.0);
        assert!(displacements.iter().all(|d| *d == Vec2::ZERO));
    }

    #[test]
    fn confine_clamps_into_band_and_slice() {
        let band = RingBand {
            inner: 100.0,
            outer: 200.0,
        };

        let inside = polar(150.0, -0.7);
        assert!((confine(inside, band, TOP_RIGHT, 12.0) - inside).length() < 1.0e-3);

        let too_far = confine(polar(260.0, -0.7), band, TOP_RIGHT, 12.0);
        assert!((too_far.length() - 188.0).abs() < 1.0e-3);

        let wrong_slice = confine(polar(150.0, 0.3), band, TOP_RIGHT, 12.0);
        let offset = TOP_RIGHT.offset_of(angle_of(wrong_slice));
        assert!(offset <= TOP_RIGHT.width);
        assert!((offset - (TOP_RIGHT.width - 12.0 / 150.0)).abs() < 1.0e-3);

        let before_start = confine(polar(150.0, -FRAC_PI_2 - 0.3), band, TOP_RIGHT, 12.0);
        let offset = TOP_RIGHT.offset_of(angle_of(before_start));
        assert!((offset - 12.0 / 150.0).abs() < 1.0e-3);
    }
    #[test]
    fn clear_labels_rotates_out_of_the_exclusion_zone() {
        let anchor = vec2(0.0, -50.0);
        let position = polar(55.0, -FRAC_PI_2 + 0.1);

        let cleared = clear_labels(position, &[anchor], 40.0, TOP_RIGHT, 12.0);
        assert!((cleared.length() - 55.0).abs() < 1.0e-3);
        assert!((cleared - anchor).length() >= 40.0 - 1.0e-2);
        assert!(angle_of(cleared) > angle_of(position));
        assert!(TOP_RIGHT.contains(angle_of(cleared)));
    }

    #[test]
    fn clear_labels_moves_back_into_the_slice_ending_at_the_anchor() {
        let top_left = Slice {
            start: PI,
            width: FRAC_PI_2,
        };
        let anchor = vec2(0.0, -150.0);
        let position = polar(150.0, -FRAC_PI_2 - 0.05);

        let cleared = clear_labels(position, &[anchor], 40.0, top_left, 12.0);
        assert!((cleared - anchor).length() >= 40.0 - 1.0e-2);
        assert!(top_left.contains(angle_of(cleared)));
        assert!(angle_of(cleared) < angle_of(position));
    }

    #[test]
    fn clear_labels_leaves_clear_items_alone() {
        let anchors = [vec2(0.0, -50.0), vec2(0.0, -150.0)];
        let position = polar(100.0, -0.7);

        assert_eq!(clear_labels(position, &anchors, 40.0, TOP_RIGHT, 12.0), position);
        assert_eq!(clear_labels(Vec2::ZERO, &anchors, 40.0, TOP_RIGHT, 12.0), Vec2::ZERO);
    }

    #[test]
    fn clear_labels_stops_at_the_slice_edge() {
        let narrow = Slice {
            start: -FRAC_PI_2,
            width: 0.2,
        };
        let anchor = vec2(0.0, -30.0);
        let position = polar(30.0, -FRAC_PI_2 + 0.05);

        let cleared = clear_labels(position, &[anchor], 40.0, narrow, 2.0);
        let offset = narrow.offset_of(angle_of(cleared));
        assert!((offset - (0.2 - 2.0 / 30.0)).abs() < 1.0e-3);
    }
}
