use std::collections::HashSet;
use std::sync::Arc;

use eframe::egui::{self, Align, Align2, Color32, FontId, Rect, Sense, Stroke, Ui, vec2};

use crate::layout::polar;
use crate::radar::{Quadrant, Ring};
use crate::util::truncate_label;

use super::super::highlight::{Emphasis, node_emphasis, search_matches};
use super::super::render_utils::{
    Palette, blend_color, quadrant_color, with_opacity, world_to_screen,
};
use super::super::{SearchMatchCache, ViewModel};
use super::{CHART_MARGIN, NODE_RADIUS};

impl ViewModel {
    fn cached_search_matches(&mut self) -> Option<Arc<HashSet<usize>>> {
        let query = self.view.search.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(cached) = &self.search_match_cache
            && cached.query == query
        {
            return Some(Arc::clone(&cached.matches));
        }

        let matches = Arc::new(search_matches(&self.snapshot.items, query));
        self.search_match_cache = Some(SearchMatchCache {
            query: query.to_owned(),
            matches: Arc::clone(&matches),
        });
        Some(matches)
    }

    pub(in crate::app) fn draw_chart(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        let theme = self.view.theme;
        let palette = Palette::for_theme(theme);
        painter.rect_filled(rect, 0.0, palette.background);

        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.5 - CHART_MARGIN;
        self.ensure_layout(radius);

        let Some(geometry) = self.layout_cache.as_ref().map(|layout| layout.geometry.clone())
        else {
            painter.text(
                center,
                Align2::CENTER_CENTER,
                "Not enough room to draw the radar.",
                FontId::proportional(14.0),
                palette.muted_text,
            );
            return;
        };

        for index in 0..geometry.ring_order.len() {
            let band = geometry.band(index);
            painter.circle_filled(center, band.outer, palette.ring_fills[index % 2]);
        }
        for index in 0..geometry.ring_order.len() {
            painter.circle_stroke(
                center,
                geometry.band(index).outer,
                Stroke::new(1.0, palette.ring_stroke),
            );
        }

        for index in 0..geometry.quadrant_order.len() {
            let edge = polar(geometry.radius, geometry.slice(index).start);
            painter.line_segment(
                [center, world_to_screen(center, edge)],
                Stroke::new(1.2, palette.divider),
            );
        }

        let mut ring_rects: Vec<(Rect, Ring)> = Vec::with_capacity(geometry.ring_order.len());
        for (ring, anchor) in geometry.ring_label_anchors() {
            let color = if self.view.ring_filter.is_none_or(|filter| filter == ring) {
                palette.text
            } else {
                palette.muted_text
            };
            let ring_rect = painter.text(
                world_to_screen(center, anchor),
                Align2::CENTER_CENTER,
                ring.label(),
                FontId::proportional(12.0),
                color,
            );
            ring_rects.push((ring_rect, ring));
        }

        let mut title_rects: Vec<(Rect, Quadrant)> = Vec::with_capacity(geometry.quadrant_order.len());
        for (index, quadrant) in geometry.quadrant_order.iter().copied().enumerate() {
            let anchor = polar(geometry.radius + 10.0, geometry.slice(index).bisector());
            let align = Align2([
                if anchor.x >= 0.0 { Align::Min } else { Align::Max },
                if anchor.y >= 0.0 { Align::Min } else { Align::Max },
            ]);
            let color = if self.view.quadrant_filter.is_none_or(|filter| filter == quadrant) {
                quadrant_color(quadrant, theme)
            } else {
                palette.muted_text
            };
            let title_rect = painter.text(
                world_to_screen(center, anchor),
                align,
                quadrant.label(),
                FontId::proportional(15.0),
                color,
            );
            title_rects.push((title_rect, quadrant));
        }

        self.handle_node_drag(ui, &response, center);
        let hovered = self.hovered_node(ui, center);
        let pointer = ui.input(|input| input.pointer.hover_pos());
        let hovered_title = pointer.and_then(|pointer| {
            title_rects
                .iter()
                .find(|(title_rect, _)| title_rect.contains(pointer))
                .map(|(_, quadrant)| *quadrant)
        });

        let hovered_ring = pointer.and_then(|pointer| {
            ring_rects
                .iter()
                .find(|(ring_rect, _)| ring_rect.contains(pointer))
                .map(|(_, ring)| *ring)
        });

        if hovered.is_some() || hovered_title.is_some() || hovered_ring.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        let pending_click = response
            .clicked_by(egui::PointerButton::Primary)
            .then_some((hovered, hovered_title, hovered_ring));

        let matches = self.cached_search_matches();
        let Some(layout) = self.layout_cache.as_ref() else {
            return;
        };

        if layout.nodes.is_empty() {
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                "No items to place on the radar.",
                FontId::proportional(13.0),
                palette.muted_text,
            );
        }

        let mut selection_animating = false;
        for (number, node) in layout.nodes.iter().enumerate() {
            let emphasis = node_emphasis(node, &self.view, matches.as_deref());
            let opacity = emphasis.opacity();
            let position = world_to_screen(center, node.position);
            let is_hovered = hovered == Some(number);
            let is_selected = emphasis == Emphasis::Selected;

            let base_color = quadrant_color(node.quadrant, theme);
            let base_color = if is_hovered {
                blend_color(base_color, palette.selection, 0.35)
            } else {
                base_color
            };

            let selection_mix = ui.ctx().animate_bool(
                ui.make_persistent_id(("radar-node-selection", node.index)),
                is_selected,
            );
            if selection_mix > 0.0 && selection_mix < 1.0 {
                selection_animating = true;
            }

            let color = blend_color(base_color, palette.selection, selection_mix * 0.55);
            painter.circle_filled(position, NODE_RADIUS, with_opacity(color, opacity));

            if selection_mix > 0.0 {
                let halo_alpha = (60.0 + selection_mix * 150.0) as u8;
                painter.circle_stroke(
                    position,
                    NODE_RADIUS + 4.0 + ((1.0 - selection_mix) * 6.0),
                    Stroke::new(
                        1.2 + selection_mix,
                        Color32::from_rgba_unmultiplied(
                            palette.selection.r(),
                            palette.selection.g(),
                            palette.selection.b(),
                            halo_alpha,
                        ),
                    ),
                );
            }

            if node.item.moved {
                painter.circle_stroke(
                    position,
                    NODE_RADIUS + 2.5,
                    Stroke::new(1.4, with_opacity(palette.text, opacity * 0.85)),
                );
            }

            painter.circle_stroke(
                position,
                NODE_RADIUS,
                Stroke::new(1.0, with_opacity(palette.node_outline, opacity)),
            );
            painter.text(
                position,
                Align2::CENTER_CENTER,
                (number + 1).to_string(),
                FontId::proportional(10.0),
                with_opacity(Color32::from_gray(16), opacity),
            );

            let should_draw_label =
                is_hovered || is_selected || emphasis == Emphasis::SearchMatch;
            if should_draw_label {
                painter.text(
                    position + vec2(NODE_RADIUS + 5.0, 0.0),
                    Align2::LEFT_CENTER,
                    truncate_label(&node.item.label, 32),
                    FontId::proportional(12.0),
                    palette.text,
                );
            }
        }

        if selection_animating {
            ui.ctx().request_repaint();
        }

        if let Some(index) = hovered
            && let Some(node) = layout.nodes.get(index)
        {
            let status_text = format!(
                "{}  |  {}  |  {}{}",
                node.item.label,
                node.quadrant,
                node.ring,
                if node.item.moved { "  |  moved" } else { "" }
            );
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                status_text,
                FontId::proportional(13.0),
                palette.text,
            );
        }

        painter.text(
            rect.left_bottom() + vec2(10.0, -10.0),
            Align2::LEFT_BOTTOM,
            "outlined markers moved recently | click a quadrant title or ring label to filter",
            FontId::proportional(11.0),
            palette.muted_text,
        );

        if let Some((hovered, hovered_title, hovered_ring)) = pending_click {
            self.apply_chart_click(hovered, hovered_title, hovered_ring);
        }
    }
}
