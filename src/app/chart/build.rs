use crate::layout::{RadarGeometry, layout_radar};

use super::super::{RadarLayout, ViewModel};

impl ViewModel {
    pub(in crate::app) fn mark_layout_dirty(&mut self) {
        self.layout_dirty = true;
    }

    /// Runs a layout pass when the radius changed or something asked for one.
    pub(in crate::app) fn ensure_layout(&mut self, radius: f32) {
        let radius_changed = (self.layout_radius - radius).abs() > 0.5;
        if !self.layout_dirty && !radius_changed {
            return;
        }

        self.layout_dirty = false;
        self.layout_radius = radius;
        self.layout_revision = self.layout_revision.wrapping_add(1);

        let geometry = RadarGeometry::new(radius);
        match layout_radar(&self.snapshot.items, &geometry, &self.layout_config) {
            Ok(mut nodes) => {
                if let Some(drag) = self.drag
                    && let Some(node) = nodes.iter_mut().find(|node| node.index == drag.item_index)
                {
                    node.position = drag.position;
                }

                log::debug!(
                    "layout pass {} placed {} of {} items at radius {radius:.1}",
                    self.layout_revision,
                    nodes.len(),
                    self.snapshot.item_count()
                );
                self.layout_cache = Some(RadarLayout { geometry, nodes });
                self.layout_error = None;
            }
            Err(error) => {
                log::debug!("skipping layout pass {}: {error}", self.layout_revision);
                self.layout_cache = None;
                self.layout_error = Some(error);
            }
        }
    }
}
