//! Color constants for inline styles.
//!
//! Moonlit garden palette. Everything static lives in the stylesheet; these
//! are the values components write per element.

// === SPARKLES ===
pub const SPARKLE: &str = "#ffffff";
pub const SPARKLE_GLOW: &str = "rgba(255, 255, 255, 0.8)";

// === MESSAGE SHADOWS ===
/// Accent applied while a fresh message glows
pub const MESSAGE_GLOW_SHADOW: &str =
    "0 0 20px rgba(255, 255, 255, 0.6), 0 2px 12px rgba(0, 0, 0, 0.3)";
/// Baseline once the glow settles
pub const MESSAGE_BASE_SHADOW: &str =
    "0 2px 12px rgba(0, 0, 0, 0.5), 0 4px 24px rgba(0, 0, 0, 0.3)";
