//! Entry card - where the visitor names their seed.
//!
//! Recedes once a name is accepted; shakes on a blank one.

use dioxus::prelude::*;
use seedbloom_core::{CardState, Garden, GardenError, InputFeedback};

use crate::context::{use_garden, window_width};

/// Submit the current input to the garden.
fn plant(mut garden: Signal<Garden>, raw: &str) {
    let mut guard = garden.write();
    guard.set_viewport_width(window_width());
    match guard.submit_name(raw) {
        Ok(()) => {}
        Err(GardenError::EmptyInput) => tracing::debug!("Empty name submitted"),
        Err(e) => tracing::warn!("Name submission ignored: {}", e),
    }
}

/// Class for the name input. Consecutive shakes alternate between two
/// identical keyframes so each one replays.
fn input_class(feedback: InputFeedback) -> &'static str {
    if !feedback.shaking {
        "name-input"
    } else if feedback.generation % 2 == 0 {
        "name-input shake-a"
    } else {
        "name-input shake-b"
    }
}

/// Entry card component.
///
/// Unmounted once the card is fully hidden.
#[component]
pub fn EntryCard() -> Element {
    let garden = use_garden();
    let mut name_input = use_signal(String::new);

    let card = use_memo(move || garden.read().surface().card);
    let feedback = use_memo(move || garden.read().surface().input);

    if card() == CardState::Hidden {
        return rsx! {};
    }

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            plant(garden, &name_input.read());
        }
    };

    let card_class = card().css_class();
    let input_class = input_class(feedback());
    let invalid = if feedback().invalid { "true" } else { "false" };

    rsx! {
        section { class: card_class,
            h1 { class: "card-title", "Seed of Purity" }
            p { class: "card-subtitle", "Plant a name and watch it bloom" }

            input {
                class: input_class,
                r#type: "text",
                placeholder: "Your name",
                autocomplete: "off",
                "aria-label": "Your name",
                "aria-invalid": invalid,
                value: "{name_input}",
                oninput: move |e| name_input.set(e.value()),
                onkeydown: on_keydown,
                onmounted: move |e: MountedEvent| {
                    spawn(async move {
                        let _ = e.set_focus(true).await;
                    });
                },
            }

            button {
                class: "btn-plant",
                onclick: move |_| plant(garden, &name_input.read()),
                "Plant the Seed"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_class_at_rest() {
        assert_eq!(input_class(InputFeedback::default()), "name-input");
    }

    #[test]
    fn test_consecutive_shakes_alternate() {
        let first = InputFeedback {
            shaking: true,
            invalid: true,
            generation: 1,
        };
        let second = InputFeedback {
            generation: 2,
            ..first
        };
        assert_eq!(input_class(first), "name-input shake-b");
        assert_eq!(input_class(second), "name-input shake-a");
    }
}
