use std::fmt;

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::radar::{Quadrant, RadarItem, Ring};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Self::Dark => egui::Visuals::dark(),
            Self::Light => egui::Visuals::light(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the user can change about what the radar shows.
///
/// Read at the start of a frame and handed to the drawing code, so the same
/// state always produces the same emphasis.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub quadrant_filter: Option<Quadrant>,
    pub ring_filter: Option<Ring>,
    /// Snapshot index of the selected item.
    pub selected: Option<usize>,
    pub search: String,
    pub theme: Theme,
}

impl ViewState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn toggle_quadrant_filter(&mut self, quadrant: Quadrant) {
        self.quadrant_filter = if self.quadrant_filter == Some(quadrant) {
            None
        } else {
            Some(quadrant)
        };
    }

    pub fn toggle_ring_filter(&mut self, ring: Ring) {
        self.ring_filter = if self.ring_filter == Some(ring) {
            None
        } else {
            Some(ring)
        };
    }

    pub fn has_filters(&self) -> bool {
        self.quadrant_filter.is_some() || self.ring_filter.is_some()
    }

    pub fn clear_filters(&mut self) {
        self.quadrant_filter = None;
        self.ring_filter = None;
    }

    pub fn passes_filters(&self, quadrant: Quadrant, ring: Ring) -> bool {
        self.quadrant_filter.is_none_or(|filter| filter == quadrant)
            && self.ring_filter.is_none_or(|filter| filter == ring)
    }

    /// Carries the state over from `previous` to a reloaded item list.
    ///
    /// The selection follows the item with the same label and quadrant and is
    /// dropped when no such item is left.
    pub fn retain_for(mut self, previous: &[RadarItem], current: &[RadarItem]) -> Self {
        self.selected = self
            .selected
            .and_then(|index| previous.get(index))
            .and_then(|selected| {
                current.iter().position(|item| {
                    item.label == selected.label && item.quadrant == selected.quadrant
                })
            });
        self
    }
}
