//! Effect layers: ambient particles and sparkle bursts.
//!
//! Particles are rendered once and loop in CSS. Sparkles are positioned
//! every frame from the garden's sparkle list and disappear when the garden
//! drops them.

use dioxus::prelude::*;

use crate::context::use_garden;
use crate::theme::colors::{SPARKLE, SPARKLE_GLOW};

/// Ambient motes behind the garden.
#[component]
pub fn ParticleField() -> Element {
    let garden = use_garden();
    let particles = use_memo(move || garden.read().surface().particles.clone());

    rsx! {
        div { class: "particles", "aria-hidden": "true",
            for (i, particle) in particles().iter().enumerate() {
                {
                    let style = format!(
                        "left: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                        particle.left_percent, particle.delay_secs, particle.duration_secs
                    );
                    rsx! {
                        div { key: "{i}", class: "particle", style: style }
                    }
                }
            }
        }
    }
}

/// Sparkles from every live burst, in fixed screen coordinates.
#[component]
pub fn SparkleLayer() -> Element {
    let garden = use_garden();
    let sparkles = use_memo(move || garden.read().surface().sparkles.clone());

    rsx! {
        div { class: "sparkles", "aria-hidden": "true",
            for sparkle in sparkles().iter() {
                {
                    let offset = sparkle.offset();
                    let style = format!(
                        "left: {:.1}px; top: {:.1}px; background: {}; box-shadow: 0 0 8px {}; \
                         transform: translate({:.2}px, {:.2}px) scale({:.2}); opacity: {:.2};",
                        sparkle.origin.x,
                        sparkle.origin.y,
                        SPARKLE,
                        SPARKLE_GLOW,
                        offset.x,
                        offset.y,
                        sparkle.scale(),
                        sparkle.opacity(),
                    );
                    rsx! {
                        div { key: "{sparkle.id}", class: "sparkle", style: style }
                    }
                }
            }
        }
    }
}
