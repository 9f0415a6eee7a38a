//! Visual theme for Seed Bloom.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
