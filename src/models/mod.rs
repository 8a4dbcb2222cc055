mod tracker;

pub use tracker::{Plant, TrackerState};
