//! Page components for Seed Bloom.

mod entry;
mod garden;

pub use entry::EntryCard;
pub use garden::GardenScene;
