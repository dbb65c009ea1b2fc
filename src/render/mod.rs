//! Presentation layer: score banding, gauge mapping, and the rendering
//! surface seam.

pub mod surface;
pub mod visual;

pub use surface::{CliSurface, Surface};
pub use visual::{present, ScoreBand, VisualModel, SCORE_CEILING, SCORE_FLOOR};
