use std::path::Path;

use eframe::egui::{self, Align, Context, Layout};

use crate::layout::LayoutConfig;
use crate::radar::RadarSnapshot;

use super::super::ViewModel;
use super::super::state::ViewState;

impl ViewModel {
    pub(in crate::app) fn new(snapshot: RadarSnapshot, view: ViewState) -> Self {
        Self {
            snapshot,
            view,
            layout_config: LayoutConfig::default(),
            layout_dirty: true,
            layout_radius: 0.0,
            layout_revision: 0,
            layout_cache: None,
            layout_error: None,
            drag: None,
            search_match_cache: None,
        }
    }

    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        data_file: &Path,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Tech Radar");
                    ui.separator();
                    if !self.snapshot.last_modified.is_empty() {
                        ui.label(format!("last modified: {}", self.snapshot.last_modified));
                    }
                    ui.label(format!("data: {}", data_file.display()));
                    ui.label(format!(
                        "items: {} ({} placed)",
                        self.snapshot.item_count(),
                        self.snapshot.placeable_count()
                    ));
                    let reload_button =
                        ui.add_enabled(!is_loading, egui::Button::new("Reload data"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }
                    let theme_button = ui
                        .button(format!("Theme: {}", self.view.theme))
                        .on_hover_text("Switch between the dark and light theme.");
                    if theme_button.clicked() {
                        self.toggle_theme();
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(layout_text) = self.layout_status_text() {
                            ui.label(layout_text);
                        }
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                self.draw_controls(ui);
                ui.separator();
                self.draw_item_list(ui);
            });

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                if is_loading {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Reloading radar data...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                } else {
                    self.draw_chart(ui);
                }
            });
    }

    pub(in crate::app) fn set_selected(&mut self, selected: Option<usize>) {
        if self.view.selected == selected {
            return;
        }

        self.view.selected = selected;
        if let Some(index) = selected
            && let Some(item) = self.snapshot.items.get(index)
        {
            log::debug!("selected {:?}", item.label);
        }
    }

    pub(in crate::app) fn toggle_theme(&mut self) {
        self.view.theme = self.view.theme.toggled();
        self.mark_layout_dirty();
    }

    fn layout_status_text(&self) -> Option<String> {
        if let Some(error) = &self.layout_error {
            return Some(format!("layout skipped: {error}"));
        }

        self.layout_cache.as_ref().map(|layout| {
            format!(
                "layout pass {}: {} nodes, radius {:.0}",
                self.layout_revision,
                layout.nodes.len(),
                layout.geometry.radius
            )
        })
    }
}
