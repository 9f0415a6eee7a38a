//! UI Components for Seed Bloom.
//!
//! Moonlit garden aesthetic components.

mod effects;
mod flower;
mod loading_screen;
mod message_panel;
mod seed_plot;

pub use effects::{ParticleField, SparkleLayer};
pub use flower::Flower;
pub use loading_screen::LoadingScreen;
pub use message_panel::MessagePanel;
pub use seed_plot::SeedPlot;
