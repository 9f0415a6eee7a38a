//! Visual state the front-end renders.
//!
//! The controller never touches a widget. It mutates this snapshot and the
//! renderer maps each field onto classes, styles and text.

use crate::effects::{Particle, Sparkle};

/// Entry card visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Visible,
    /// Fading out and shifting upward
    Receding,
    Hidden,
}

impl CardState {
    pub fn css_class(&self) -> &'static str {
        match self {
            CardState::Visible => "entry-card",
            CardState::Receding => "entry-card receding",
            CardState::Hidden => "entry-card hidden",
        }
    }
}

/// The "click a petal" prompt above the flower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptState {
    #[default]
    Visible,
    Fading,
    Removed,
}

/// Page backdrop palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backdrop {
    #[default]
    Dawn,
    Night,
}

impl Backdrop {
    pub fn css_class(&self) -> &'static str {
        match self {
            Backdrop::Dawn => "backdrop dawn",
            Backdrop::Night => "backdrop night",
        }
    }
}

/// Name input feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFeedback {
    pub shaking: bool,
    /// Mirrors `aria-invalid`
    pub invalid: bool,
    /// Bumped on every shake so the animation restarts
    pub generation: u64,
}

/// Message panel under the flower.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessagePanel {
    pub text: String,
    pub visible: bool,
    /// Transient glow accent on a fresh message
    pub glowing: bool,
}

/// Flower centre pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pulse {
    pub active: bool,
    /// Bumped on every re-application
    pub generation: u64,
}

/// Complete visual state of one session.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub loading_visible: bool,
    pub card: CardState,
    pub input: InputFeedback,
    pub garden_visible: bool,
    pub backdrop: Backdrop,
    pub seed_label: String,
    pub seed_planting: bool,
    pub stem_growing: bool,
    pub prompt: PromptState,
    pub message: MessagePanel,
    pub pulse: Pulse,
    pub particles: Vec<Particle>,
    pub sparkles: Vec<Sparkle>,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            loading_visible: true,
            card: CardState::default(),
            input: InputFeedback::default(),
            garden_visible: false,
            backdrop: Backdrop::default(),
            seed_label: String::new(),
            seed_planting: false,
            stem_growing: false,
            prompt: PromptState::default(),
            message: MessagePanel::default(),
            pulse: Pulse::default(),
            particles: Vec::new(),
            sparkles: Vec::new(),
        }
    }
}
