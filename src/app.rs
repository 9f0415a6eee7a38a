use std::time::Duration;

use dioxus::prelude::*;
use seedbloom_core::Garden;
use tokio::time::Instant;

use crate::components::LoadingScreen;
use crate::context::get_garden_config;
use crate::pages::{EntryCard, GardenScene};
use crate::theme::GLOBAL_STYLES;

/// Frame interval for the garden clock (~60fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Root application component.
///
/// Provides global styles, the garden context and the frame driver.
#[component]
pub fn App() -> Element {
    let garden: Signal<Garden> = use_signal(|| Garden::new(get_garden_config()));

    // Provide garden context to all child components
    use_context_provider(|| garden);

    // Drive the garden clock for the lifetime of the window
    use_effect(move || {
        spawn(drive_frames(garden));
    });

    let backdrop = use_memo(move || garden.read().surface().backdrop);
    let backdrop_class = backdrop().css_class();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: backdrop_class }
        LoadingScreen {}
        EntryCard {}
        GardenScene {}
    }
}

/// Advance the garden by real elapsed time once per frame.
///
/// The signal is only written while a step or sparkle is pending, so an
/// idle garden does not re-render.
async fn drive_frames(mut garden: Signal<Garden>) {
    let mut last = Instant::now();
    loop {
        tokio::time::sleep(FRAME_INTERVAL).await;
        let now = Instant::now();
        let delta = now - last;
        last = now;

        if !garden.peek().is_animating() {
            continue;
        }

        let mut guard = garden.write();
        guard.advance(delta);
        guard.tick_frame();
    }
}
