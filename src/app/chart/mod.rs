mod build;
mod interaction;
mod view;

/// Marker radius on screen; the layout keeps centers `min_separation` apart.
pub(super) const NODE_RADIUS: f32 = 9.0;
/// Space left around the outer ring for the quadrant titles.
pub(super) const CHART_MARGIN: f32 = 44.0;
