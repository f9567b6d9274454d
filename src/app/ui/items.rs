use eframe::egui::{self, Ui};

use crate::util::truncate_label;

use super::super::ViewModel;

impl ViewModel {
    /// Lists every snapshot item, placeable or not.
    pub(in crate::app) fn draw_item_list(&mut self, ui: &mut Ui) {
        ui.heading("Items");
        ui.small("Every entry in the data file, including ones the radar cannot place.");
        ui.add_space(4.0);

        let mut pending_selection = None;
        let groups = self.snapshot.grouped_by_quadrant();

        egui::ScrollArea::vertical()
            .id_salt("item_list_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (quadrant, indices) in &groups {
                    let title = if quadrant.is_empty() {
                        "(no quadrant)"
                    } else {
                        *quadrant
                    };

                    egui::CollapsingHeader::new(format!("{title} ({})", indices.len()))
                        .id_salt(("item-group", *quadrant))
                        .default_open(true)
                        .show(ui, |ui| {
                            for &index in indices {
                                let Some(item) = self.snapshot.items.get(index) else {
                                    continue;
                                };

                                let mut text = format!(
                                    "{}  [{}]",
                                    truncate_label(&item.label, 40),
                                    item.ring
                                );
                                if item.moved {
                                    text.push_str("  moved");
                                }
                                if !item.is_placeable() {
                                    text.push_str("  (not placed)");
                                }

                                let is_selected = self.view.selected == Some(index);
                                let response = ui.selectable_label(is_selected, text);
                                let response = if item.description.is_empty() {
                                    response
                                } else {
                                    response.on_hover_text(item.description.as_str())
                                };
                                if response.clicked() {
                                    pending_selection =
                                        Some(if is_selected { None } else { Some(index) });
                                }
                            }
                        });
                }
            });

        if let Some(selected) = pending_selection {
            self.set_selected(selected);
        }
    }
}
