//! Message panel under the flower.

use dioxus::prelude::*;

use crate::context::use_garden;
use crate::theme::colors::{MESSAGE_BASE_SHADOW, MESSAGE_GLOW_SHADOW};

/// Shows the current petal or easter-egg message. Announced politely to
/// screen readers.
#[component]
pub fn MessagePanel() -> Element {
    let garden = use_garden();
    let message = use_memo(move || garden.read().surface().message.clone());

    let panel = message();
    let class = if panel.visible { "message show" } else { "message" };
    let shadow = if panel.glowing {
        MESSAGE_GLOW_SHADOW
    } else {
        MESSAGE_BASE_SHADOW
    };

    rsx! {
        p {
            class: class,
            role: "status",
            "aria-live": "polite",
            style: "text-shadow: {shadow};",
            "{panel.text}"
        }
    }
}
