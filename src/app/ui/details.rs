use eframe::egui::{self, RichText, Ui};

use super::super::ViewModel;

fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        "(none)"
    } else {
        value
    }
}

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Item Details");
        ui.add_space(6.0);

        let Some(selected_index) = self.view.selected else {
            ui.label("Select an item on the radar or in the item list.");
            return;
        };

        let Some(item) = self.snapshot.items.get(selected_index).cloned() else {
            ui.label("Selected item no longer exists in the snapshot.");
            return;
        };

        ui.label(RichText::new(or_placeholder(&item.label)).strong());
        ui.add_space(6.0);

        ui.label(format!("Quadrant: {}", or_placeholder(&item.quadrant)));
        ui.label(format!("Ring: {}", or_placeholder(&item.ring)));
        ui.label(format!(
            "Moved recently: {}",
            if item.moved { "yes" } else { "no" }
        ));
        ui.label(format!("Owners: {}", or_placeholder(&item.owners)));

        ui.separator();
        ui.label(RichText::new("Description").strong());
        egui::ScrollArea::vertical()
            .id_salt("description_scroll")
            .max_height(220.0)
            .show(ui, |ui| {
                if item.description.trim().is_empty() {
                    ui.label("No description.");
                } else {
                    ui.label(item.description.as_str());
                }
            });

        ui.separator();
        ui.label(RichText::new("Placement").strong());
        let quadrant = item.quadrant_kind();
        match (quadrant, item.ring_kind()) {
            (Some(_), Some(_)) => {
                let node = self.layout_cache.as_ref().and_then(|layout| {
                    layout
                        .node_for_item(selected_index)
                        .and_then(|index| layout.nodes.get(index))
                });
                if let Some(node) = node {
                    ui.label(format!("Ring midpoint radius: {:.1}", node.target_radius));
                    ui.label(format!(
                        "Target: ({:.1}, {:.1})",
                        node.target.x, node.target.y
                    ));
                    ui.label(format!(
                        "Position: ({:.1}, {:.1})",
                        node.position.x, node.position.y
                    ));
                    ui.label(format!(
                        "Offset from target: {:.1}",
                        (node.position - node.target).length()
                    ));
                } else {
                    ui.label("Not part of the current layout pass.");
                }
            }
            (quadrant, ring) => {
                ui.label("Not placed on the radar.");
                if quadrant.is_none() {
                    ui.label(format!("- unrecognized quadrant {:?}", item.quadrant));
                }
                if ring.is_none() {
                    ui.label(format!("- unrecognized ring {:?}", item.ring));
                }
            }
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if let Some(quadrant) = quadrant
                && ui
                    .add_enabled(
                        self.view.quadrant_filter != Some(quadrant),
                        egui::Button::new("Filter to quadrant"),
                    )
                    .clicked()
            {
                self.view.quadrant_filter = Some(quadrant);
                self.mark_layout_dirty();
            }
            if ui.button("Clear selection").clicked() {
                self.set_selected(None);
            }
        });
    }
}
