//! Garden context provider for Seed Bloom.
//!
//! Provides the session's [`Garden`] to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let garden = use_signal(|| Garden::new(get_garden_config()));
//! use_context_provider(|| garden);
//!
//! // In child components
//! let garden = use_garden();
//! let phase = garden.read().phase();
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use seedbloom_core::{Bounds, Garden, GardenConfig};

/// Get the garden config for the application.
/// Uses the global config set from command line args.
pub fn get_garden_config() -> GardenConfig {
    crate::get_garden_config()
}

/// Hook to access the Garden from context.
///
/// All reads and writes go through this one signal; the UI loop is the
/// only writer.
pub fn use_garden() -> Signal<Garden> {
    use_context::<Signal<Garden>>()
}

/// Current logical width of the desktop window.
///
/// Read when a name is planted so the particle density follows the window
/// as it is then, not the launch size.
pub fn window_width() -> f64 {
    let window = dioxus::desktop::window();
    logical_width(window.inner_size().width, window.scale_factor())
}

fn logical_width(physical_width: u32, scale_factor: f64) -> f64 {
    if scale_factor > 0.0 {
        f64::from(physical_width) / scale_factor
    } else {
        f64::from(physical_width)
    }
}

/// Screen rectangle of a mounted element, if it can be measured.
pub async fn element_bounds(mounted: Option<Rc<MountedData>>) -> Option<Bounds> {
    let mounted = mounted?;
    match mounted.get_client_rect().await {
        Ok(rect) => Some(Bounds::new(
            rect.origin.x,
            rect.origin.y,
            rect.size.width,
            rect.size.height,
        )),
        Err(e) => {
            tracing::debug!("Could not measure element: {:?}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_width_divides_out_scale() {
        assert_eq!(logical_width(1600, 2.0), 800.0);
        assert_eq!(logical_width(700, 1.0), 700.0);
    }

    #[test]
    fn test_logical_width_ignores_bad_scale() {
        assert_eq!(logical_width(900, 0.0), 900.0);
    }
}
