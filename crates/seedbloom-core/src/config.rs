//! Garden timing and effect tuning.
//!
//! Every delay in the scene sequence is cosmetic, so all of them are exposed
//! here with the values the experience was designed around. A JSON file can
//! override any subset of fields:
//!
//! ```json
//! { "grow_delay_ms": 2000, "viewport_width": 640 }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GardenError, GardenResult};

/// Tunable delays and effect sizes for a garden session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    /// Loading overlay lifetime after launch
    pub loading_ms: u64,
    /// Entry card fade + upward shift before it is hidden
    pub card_recede_ms: u64,
    /// Settle delay between seed label and planting state
    pub plant_settle_ms: u64,
    /// Delay from planting start to stem growth
    pub grow_delay_ms: u64,
    /// Shake feedback on an empty name
    pub shake_ms: u64,
    /// Prompt fade before removal
    pub prompt_fade_ms: u64,
    /// Gap between hiding the old message and showing the new one
    pub message_swap_ms: u64,
    /// Glow accent lifetime on a fresh message
    pub glow_ms: u64,
    /// Gap between dropping and re-applying the centre pulse
    pub pulse_restart_ms: u64,
    /// Stagger between easter-egg sparkle bursts
    pub bonus_stagger_ms: u64,

    /// Viewports narrower than this get the reduced particle count
    pub particle_breakpoint: f64,
    pub particles_narrow: usize,
    pub particles_wide: usize,

    /// Sparkles per burst
    pub sparkle_count: usize,
    /// Bursts fanned out by the easter egg
    pub bonus_bursts: usize,

    /// Initial viewport width, replaced by the front-end once it knows better
    pub viewport_width: f64,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            loading_ms: 500,
            card_recede_ms: 400,
            plant_settle_ms: 100,
            grow_delay_ms: 3500,
            shake_ms: 500,
            prompt_fade_ms: 300,
            message_swap_ms: 100,
            glow_ms: 600,
            pulse_restart_ms: 10,
            bonus_stagger_ms: 50,
            particle_breakpoint: 768.0,
            particles_narrow: 20,
            particles_wide: 30,
            sparkle_count: 6,
            bonus_bursts: 20,
            viewport_width: 1024.0,
        }
    }
}

impl GardenConfig {
    /// Parse a config from JSON text. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> GardenResult<Self> {
        serde_json::from_str(text).map_err(|e| GardenError::Config(e.to_string()))
    }

    /// Load a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> GardenResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded garden config");
        Ok(config)
    }

    /// Particle count for a viewport of the given width.
    pub fn particle_count(&self, viewport_width: f64) -> usize {
        if viewport_width < self.particle_breakpoint {
            self.particles_narrow
        } else {
            self.particles_wide
        }
    }

    pub fn loading(&self) -> Duration {
        Duration::from_millis(self.loading_ms)
    }

    pub fn card_recede(&self) -> Duration {
        Duration::from_millis(self.card_recede_ms)
    }

    pub fn plant_settle(&self) -> Duration {
        Duration::from_millis(self.plant_settle_ms)
    }

    pub fn grow_delay(&self) -> Duration {
        Duration::from_millis(self.grow_delay_ms)
    }

    pub fn shake(&self) -> Duration {
        Duration::from_millis(self.shake_ms)
    }

    pub fn prompt_fade(&self) -> Duration {
        Duration::from_millis(self.prompt_fade_ms)
    }

    pub fn message_swap(&self) -> Duration {
        Duration::from_millis(self.message_swap_ms)
    }

    pub fn glow(&self) -> Duration {
        Duration::from_millis(self.glow_ms)
    }

    pub fn pulse_restart(&self) -> Duration {
        Duration::from_millis(self.pulse_restart_ms)
    }

    pub fn bonus_stagger(&self) -> Duration {
        Duration::from_millis(self.bonus_stagger_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GardenConfig::from_json(r#"{ "grow_delay_ms": 2000 }"#).unwrap();
        assert_eq!(config.grow_delay(), Duration::from_millis(2000));
        assert_eq!(config.card_recede(), Duration::from_millis(400));
        assert_eq!(config.sparkle_count, 6);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = GardenConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GardenError::Config(_)));
    }

    #[test]
    fn test_particle_breakpoint() {
        let config = GardenConfig::default();
        assert_eq!(config.particle_count(375.0), 20);
        assert_eq!(config.particle_count(767.9), 20);
        assert_eq!(config.particle_count(768.0), 30);
        assert_eq!(config.particle_count(1920.0), 30);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "viewport_width": 500.0, "bonus_bursts": 5 }}"#).unwrap();

        let config = GardenConfig::load(file.path()).unwrap();
        assert_eq!(config.viewport_width, 500.0);
        assert_eq!(config.bonus_bursts, 5);
        assert_eq!(config.shake_ms, 500);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = GardenConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, GardenError::Io(_)));
    }
}
