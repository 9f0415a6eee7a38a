//! Seed Bloom Core Library
//!
//! Scene controller, message catalog and effects for a small interactive
//! greeting: a visitor types a name, a seed is planted and grows into a
//! flower, and each petal reveals an affirmation.
//!
//! ## Overview
//!
//! The crate has no notion of widgets or wall-clock time. A [`Garden`]
//! holds the session and a [`Surface`] describing what should be on screen;
//! a front-end forwards user actions, advances the garden's clock and
//! renders the surface.
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use seedbloom_core::{Garden, GardenConfig, ScenePhase};
//!
//! let mut garden = Garden::new(GardenConfig::default());
//! garden.submit_name("  Amy  ").unwrap();
//!
//! garden.advance(Duration::from_secs(5));
//! assert_eq!(garden.phase(), ScenePhase::Growing);
//!
//! garden.activate_petal(0, None).unwrap();
//! garden.advance(Duration::from_millis(100));
//! assert!(garden.surface().message.text.starts_with("Amy,"));
//! ```

pub mod config;
pub mod effects;
pub mod error;
pub mod garden;
pub mod logging;
pub mod messages;
pub mod name;
pub mod phase;
pub mod surface;
pub mod timeline;

// Re-exports
pub use config::GardenConfig;
pub use effects::{Bounds, Particle, Point, Sparkle};
pub use error::{GardenError, GardenResult};
pub use garden::{Garden, EASTER_EGG_CLICKS};
pub use messages::{bonus_message, personalized_message, PetalIndex, PETAL_COUNT};
pub use name::{validate, Name, MAX_NAME_CHARS};
pub use phase::ScenePhase;
pub use surface::{Backdrop, CardState, InputFeedback, PromptState, Surface};
pub use timeline::Timeline;
