//! Garden scene - seed, flower, messages and effects.
//!
//! Mounted from the start but kept hidden until the garden is revealed, so
//! the reveal is a class change rather than a fresh mount.

use dioxus::prelude::*;
use seedbloom_core::PromptState;

use crate::components::{Flower, MessagePanel, ParticleField, SeedPlot, SparkleLayer};
use crate::context::use_garden;

/// Garden scene component.
#[component]
pub fn GardenScene() -> Element {
    let garden = use_garden();

    let visible = use_memo(move || garden.read().surface().garden_visible);
    let prompt = use_memo(move || garden.read().surface().prompt);

    let garden_class = if visible() { "garden" } else { "garden hidden" };
    let prompt_class = match prompt() {
        PromptState::Visible => Some("prompt"),
        PromptState::Fading => Some("prompt fading"),
        PromptState::Removed => None,
    };

    rsx! {
        main { class: garden_class,
            ParticleField {}

            if let Some(class) = prompt_class {
                p { class: class, "Touch a petal to hear what it has to say" }
            }

            Flower {}
            SeedPlot {}
            MessagePanel {}
        }

        SparkleLayer {}
    }
}
