use eframe::egui::Vec2;

use super::LayoutConfig;
use super::forces::{
    clear_labels, collision_displacements, confine, label_nudge, spring_to_target,
};
use super::geometry::{RingBand, Slice};

pub(super) struct Body {
    pub(super) position: Vec2,
    pub(super) velocity: Vec2,
    pub(super) target: Vec2,
    pub(super) band: RingBand,
    pub(super) slice: Slice,
}

/// Runs the fixed-length relaxation over all bodies at once.
pub(super) fn relax(bodies: &mut [Body], label_anchors: &[Vec2], config: &LayoutConfig) {
    if bodies.is_empty() {
        return;
    }

    let inset = config.min_separation * 0.5;
    let damping = (1.0 - config.velocity_decay).clamp(0.0, 1.0);
    let mut alpha = 1.0_f32;
    let mut positions = Vec::with_capacity(bodies.len());

    for _ in 0..config.ticks {
        alpha *= 1.0 - config.alpha_decay;

        for body in bodies.iter_mut() {
            body.velocity += spring_to_target(
                body.position,
                body.target,
                config.target_strength,
                alpha,
            );
            body.velocity += label_nudge(
                body.position,
                label_anchors,
                config.label_exclusion_radius,
                config.label_nudge_strength,
                alpha,
            );
            body.velocity *= damping;
            body.position += body.velocity;
        }

        for _ in 0..config.collision_passes {
            positions.clear();
            positions.extend(bodies.iter().map(|body| body.position));
            let displacements = collision_displacements(&positions, config.min_separation);
            for (body, displacement) in bodies.iter_mut().zip(displacements) {
                body.position += displacement;
            }
        }

        for body in bodies.iter_mut() {
            let confined = confine(body.position, body.band, body.slice, inset);
            body.position = clear_labels(
                confined,
                label_anchors,
                config.label_exclusion_radius,
                body.slice,
                inset,
            );
        }
    }
}
