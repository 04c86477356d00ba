pub mod clamp;
pub mod grid;
pub mod pipeline;
pub mod smoothing;
