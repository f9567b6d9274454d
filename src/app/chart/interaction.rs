use eframe::egui::{self, Pos2, Response, Ui};

use crate::layout::PositionedItem;
use crate::radar::{Quadrant, Ring};

use super::super::render_utils::screen_to_world;
use super::super::{DragState, ViewModel};
use super::NODE_RADIUS;

/// Index of the node closest to `pointer` within `hit_radius` screen units.
pub(super) fn nearest_node(
    nodes: &[PositionedItem],
    center: Pos2,
    pointer: Pos2,
    hit_radius: f32,
) -> Option<usize> {
    let pointer = screen_to_world(center, pointer);
    nodes
        .iter()
        .enumerate()
        .filter_map(|(index, node)| {
            let distance = (node.position - pointer).length();
            (distance <= hit_radius).then_some((index, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _distance)| index)
}

impl ViewModel {
    pub(in crate::app) fn hovered_node(&self, ui: &Ui, center: Pos2) -> Option<usize> {
        let pointer = ui.input(|input| input.pointer.hover_pos())?;
        let layout = self.layout_cache.as_ref()?;
        nearest_node(&layout.nodes, center, pointer, NODE_RADIUS + 2.0)
    }

    /// Moves the node grabbed with the primary button. The new position lasts
    /// until the next layout pass after the drag ends.
    pub(in crate::app) fn handle_node_drag(&mut self, ui: &Ui, response: &Response, center: Pos2) {
        let Some(layout) = self.layout_cache.as_mut() else {
            self.drag = None;
            return;
        };

        if response.drag_started_by(egui::PointerButton::Primary) {
            let press_origin = ui.input(|input| input.pointer.press_origin());
            self.drag = press_origin
                .and_then(|origin| nearest_node(&layout.nodes, center, origin, NODE_RADIUS + 2.0))
                .and_then(|index| layout.nodes.get(index))
                .map(|node| DragState {
                    item_index: node.index,
                    position: node.position,
                });
        }

        if let Some(drag) = self.drag.as_mut()
            && response.dragged_by(egui::PointerButton::Primary)
            && let Some(node) = layout
                .nodes
                .iter_mut()
                .find(|node| node.index == drag.item_index)
        {
            node.position += response.drag_delta();
            drag.position = node.position;
        }

        if response.drag_stopped() {
            self.drag = None;
        }
    }

    pub(in crate::app) fn apply_chart_click(
        &mut self,
        hovered: Option<usize>,
        clicked_quadrant: Option<Quadrant>,
        clicked_ring: Option<Ring>,
    ) {
        if hovered.is_none() {
            if let Some(quadrant) = clicked_quadrant {
                self.view.toggle_quadrant_filter(quadrant);
                self.mark_layout_dirty();
                return;
            }
            if let Some(ring) = clicked_ring {
                self.view.toggle_ring_filter(ring);
                self.mark_layout_dirty();
                return;
            }
        }

        let selected = hovered.and_then(|index| {
            self.layout_cache
                .as_ref()
                .and_then(|layout| layout.nodes.get(index))
                .map(|node| node.index)
        });
        self.set_selected(selected);
    }
}
