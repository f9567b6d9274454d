use eframe::egui::{self, Ui};

use crate::layout::LayoutConfig;
use crate::radar::{Quadrant, Ring};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Radar Controls");
        ui.separator();
        ui.add_space(4.0);

        let mut relayout = false;

        ui.label("Search")
            .on_hover_text("Fuzzy-highlight items by label without moving them.");
        ui.text_edit_singleline(&mut self.view.search);

        ui.separator();
        ui.label("Quadrant");
        ui.horizontal_wrapped(|ui| {
            relayout |= ui
                .selectable_value(&mut self.view.quadrant_filter, None, "All")
                .changed();
            for quadrant in Quadrant::ALL {
                relayout |= ui
                    .selectable_value(
                        &mut self.view.quadrant_filter,
                        Some(quadrant),
                        quadrant.label(),
                    )
                    .changed();
            }
        });

        ui.label("Ring");
        ui.horizontal_wrapped(|ui| {
            relayout |= ui
                .selectable_value(&mut self.view.ring_filter, None, "All")
                .changed();
            for ring in Ring::ALL {
                relayout |= ui
                    .selectable_value(&mut self.view.ring_filter, Some(ring), ring.label())
                    .changed();
            }
        });

        let clear_filters = ui
            .add_enabled(self.view.has_filters(), egui::Button::new("Clear filters"))
            .on_hover_text("Filters only dim items; positions stay where the layout put them.");
        if clear_filters.clicked() {
            self.view.clear_filters();
            relayout = true;
        }

        ui.separator();
        egui::CollapsingHeader::new("Layout")
            .default_open(false)
            .show(ui, |ui| {
                let config = &mut self.layout_config;
                relayout |= ui
                    .add(
                        egui::Slider::new(&mut config.min_separation, 12.0..=48.0)
                            .text("min separation"),
                    )
                    .changed();
                relayout |= ui
                    .add(
                        egui::Slider::new(&mut config.target_strength, 0.01..=0.2)
                            .text("target pull"),
                    )
                    .changed();
                relayout |= ui
                    .add(egui::Slider::new(&mut config.ticks, 50..=400).text("ticks"))
                    .changed();
                relayout |= ui
                    .add(
                        egui::Slider::new(&mut config.label_exclusion_radius, 0.0..=80.0)
                            .text("label clearance"),
                    )
                    .changed();
                relayout |= ui
                    .add(
                        egui::Slider::new(&mut config.label_nudge_strength, 0.0..=4.0)
                            .text("label nudge"),
                    )
                    .changed();
                if ui.button("Reset layout settings").clicked() {
                    *config = LayoutConfig::default();
                    relayout = true;
                }
            });

        if ui
            .button("Re-run layout")
            .on_hover_text("Discard dragged positions and place every item again.")
            .clicked()
        {
            relayout = true;
        }

        if relayout {
            self.mark_layout_dirty();
        }
    }
}
