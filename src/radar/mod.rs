mod load;
mod model;
mod parse;

pub use load::fetch_snapshot;
pub use model::{Quadrant, RadarItem, RadarSnapshot, Ring};
