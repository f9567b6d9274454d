use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context, Vec2};

use crate::layout::{LayoutConfig, LayoutError, PositionedItem, RadarGeometry};
use crate::radar::{RadarSnapshot, fetch_snapshot};

mod chart;
mod highlight;
mod render_utils;
mod state;
mod ui;

pub use state::Theme;
use state::ViewState;

type LoadResult = Result<RadarSnapshot, String>;

pub struct TechRadarApp {
    data_file: PathBuf,
    state: AppState,
    reload_rx: Option<Receiver<LoadResult>>,
    theme: Theme,
    applied_theme: Option<Theme>,
}

enum AppState {
    Loading { rx: Receiver<LoadResult> },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    snapshot: RadarSnapshot,
    view: ViewState,
    layout_config: LayoutConfig,
    layout_dirty: bool,
    layout_radius: f32,
    layout_revision: u64,
    layout_cache: Option<RadarLayout>,
    layout_error: Option<LayoutError>,
    drag: Option<DragState>,
    search_match_cache: Option<SearchMatchCache>,
}

/// Output of the latest layout pass.
struct RadarLayout {
    geometry: RadarGeometry,
    nodes: Vec<PositionedItem>,
}

impl RadarLayout {
    fn node_for_item(&self, item_index: usize) -> Option<usize> {
        self.nodes.iter().position(|node| node.index == item_index)
    }
}

/// A node being moved by hand; survives relayouts only while the drag lasts.
#[derive(Clone, Copy, Debug, PartialEq)]
struct DragState {
    item_index: usize,
    position: Vec2,
}

struct SearchMatchCache {
    query: String,
    matches: Arc<HashSet<usize>>,
}

impl TechRadarApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, data_file: PathBuf, theme: Theme) -> Self {
        let state = Self::start_load(data_file.clone());
        Self {
            data_file,
            state,
            reload_rx: None,
            theme,
            applied_theme: None,
        }
    }

    fn spawn_load(data_file: PathBuf) -> Receiver<LoadResult> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = fetch_snapshot(&data_file).map_err(|error| {
                let error = anyhow::Error::new(error);
                log::error!("{error:#}");
                format!("{error:#}")
            });
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(data_file: PathBuf) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(data_file),
        }
    }

    fn ready_state(&self, snapshot: RadarSnapshot) -> AppState {
        let view = match &self.state {
            AppState::Ready(model) => model
                .view
                .clone()
                .retain_for(&model.snapshot.items, &snapshot.items),
            _ => ViewState::new(self.theme),
        };
        AppState::Ready(Box::new(ViewModel::new(snapshot, view)))
    }

    fn apply_theme(&mut self, ctx: &Context) {
        if self.applied_theme != Some(self.theme) {
            ctx.set_visuals(self.theme.visuals());
            self.applied_theme = Some(self.theme);
            ctx.request_repaint();
        }
    }
}

impl eframe::App for TechRadarApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);
        let mut transition = None;
        let mut retry = false;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(result);
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading radar data...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Radar data is unavailable");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    retry = ui.button("Retry").clicked();
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(ctx, &self.data_file, &mut reload_requested, is_reloading);
                self.theme = model.view.theme;

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.data_file.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => transition = Some(result),
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                            ctx.request_repaint();
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition =
                                Some(Err("Background load worker disconnected".to_owned()));
                        }
                    }
                }
            }
        }

        if retry {
            self.state = Self::start_load(self.data_file.clone());
        }

        if matches!(self.state, AppState::Loading { .. }) {
            ctx.request_repaint();
        }

        if let Some(result) = transition {
            self.reload_rx = None;
            self.state = match result {
                Ok(snapshot) => self.ready_state(snapshot),
                Err(error) => AppState::Error(error),
            };
        }
    }
}
