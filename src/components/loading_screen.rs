//! Loading overlay shown briefly at launch.

use dioxus::prelude::*;

use crate::context::use_garden;

#[component]
pub fn LoadingScreen() -> Element {
    let garden = use_garden();
    let visible = use_memo(move || garden.read().surface().loading_visible);

    let class = if visible() {
        "loading-screen"
    } else {
        "loading-screen hidden"
    };

    let hidden = if visible() { "false" } else { "true" };

    rsx! {
        div { class: class, "aria-hidden": hidden,
            div { class: "loading-seed" }
            p { class: "loading-text", "preparing the soil..." }
        }
    }
}
