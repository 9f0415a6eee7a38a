//! Seed Plot Component
//!
//! The named seed going into the soil, and the stem that grows from it.

use dioxus::prelude::*;

use crate::context::use_garden;

/// Seconds between neighbouring leaves starting their sway
const LEAF_SWAY_STAGGER_SECS: usize = 2;

/// Leaf angles, left then right
const LEAF_ROTATIONS: [i32; 2] = [-35, 35];

#[component]
pub fn SeedPlot() -> Element {
    let garden = use_garden();

    let label = use_memo(move || garden.read().surface().seed_label.clone());
    let planting = use_memo(move || garden.read().surface().seed_planting);
    let growing = use_memo(move || garden.read().surface().stem_growing);

    let seed_class = if planting() { "seed planting" } else { "seed" };
    let stem_container_class = if growing() {
        "stem-container growing"
    } else {
        "stem-container"
    };
    let stem_class = if growing() { "stem grow" } else { "stem" };

    rsx! {
        div { class: "seed-container",
            div { class: stem_container_class,
                div { class: stem_class }
                for (i, rotation) in LEAF_ROTATIONS.iter().enumerate() {
                    {
                        let delay = i * LEAF_SWAY_STAGGER_SECS;
                        let side = if *rotation < 0 { "left" } else { "right" };
                        rsx! {
                            div {
                                key: "{i}",
                                class: "leaf {side}",
                                style: "--rotation: {rotation}deg; animation-delay: {delay}s;",
                            }
                        }
                    }
                }
            }

            div { class: seed_class,
                span { class: "seed-name", "{label}" }
            }
        }
    }
}
