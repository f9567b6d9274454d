use eframe::egui::{Color32, Pos2, Vec2};

use crate::radar::Quadrant;

use super::state::Theme;

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

pub(super) fn world_to_screen(center: Pos2, world: Vec2) -> Pos2 {
    center + world
}

pub(super) fn screen_to_world(center: Pos2, screen: Pos2) -> Vec2 {
    screen - center
}

pub(super) struct Palette {
    pub(super) background: Color32,
    pub(super) ring_fills: [Color32; 2],
    pub(super) ring_stroke: Color32,
    pub(super) divider: Color32,
    pub(super) text: Color32,
    pub(super) muted_text: Color32,
    pub(super) node_outline: Color32,
    pub(super) selection: Color32,
}

impl Palette {
    pub(super) fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color32::from_rgb(19, 23, 29),
                ring_fills: [Color32::from_rgb(31, 37, 46), Color32::from_rgb(25, 30, 38)],
                ring_stroke: Color32::from_rgba_unmultiplied(120, 132, 148, 120),
                divider: Color32::from_rgba_unmultiplied(160, 170, 184, 150),
                text: Color32::from_gray(238),
                muted_text: Color32::from_gray(160),
                node_outline: Color32::from_rgba_unmultiplied(15, 15, 15, 190),
                selection: Color32::from_rgb(245, 206, 93),
            },
            Theme::Light => Self {
                background: Color32::from_rgb(246, 247, 249),
                ring_fills: [Color32::from_rgb(231, 234, 239), Color32::from_rgb(240, 242, 245)],
                ring_stroke: Color32::from_rgba_unmultiplied(90, 100, 116, 120),
                divider: Color32::from_rgba_unmultiplied(70, 80, 96, 150),
                text: Color32::from_gray(24),
                muted_text: Color32::from_gray(96),
                node_outline: Color32::from_rgba_unmultiplied(255, 255, 255, 210),
                selection: Color32::from_rgb(214, 150, 20),
            },
        }
    }
}

pub(super) fn quadrant_color(quadrant: Quadrant, theme: Theme) -> Color32 {
    let base = match quadrant {
        Quadrant::Platforms => Color32::from_rgb(84, 160, 222),
        Quadrant::Tools => Color32::from_rgb(104, 190, 120),
        Quadrant::LanguagesAndFrameworks => Color32::from_rgb(232, 142, 84),
        Quadrant::Techniques => Color32::from_rgb(176, 122, 214),
    };

    match theme {
        Theme::Dark => base,
        Theme::Light => blend_color(base, Color32::BLACK, 0.18),
    }
}
