//! Flower Component
//!
//! Five petals arranged around a centre. Each petal is a focusable button:
//! click, Enter and Space all reveal its message. The centre hides the
//! triple-click easter egg.

use std::rc::Rc;

use dioxus::prelude::*;
use seedbloom_core::{Garden, PETAL_COUNT};

use crate::context::{element_bounds, use_garden};

/// Degrees between neighbouring petals
const PETAL_SPREAD_DEG: usize = 360 / PETAL_COUNT;

fn activate_petal(mut garden: Signal<Garden>, index: usize, mounted: Option<Rc<MountedData>>) {
    spawn(async move {
        let anchor = element_bounds(mounted).await;
        if let Err(e) = garden.write().activate_petal(index, anchor) {
            tracing::warn!(petal = index, "Petal activation ignored: {}", e);
        }
    });
}

fn activate_center(mut garden: Signal<Garden>, mounted: Option<Rc<MountedData>>) {
    spawn(async move {
        let anchor = element_bounds(mounted).await;
        if let Err(e) = garden.write().activate_center(anchor) {
            tracing::warn!("Center activation ignored: {}", e);
        }
    });
}

/// Whether a key counts as "activate" for a petal.
fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

/// The flower: petals plus centre.
#[component]
pub fn Flower() -> Element {
    rsx! {
        div { class: "flower",
            for index in 0..PETAL_COUNT {
                Petal { key: "{index}", index: index }
            }
            FlowerCenter {}
        }
    }
}

/// A single petal.
#[component]
fn Petal(index: usize) -> Element {
    let garden = use_garden();
    let mut mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let rotation = index * PETAL_SPREAD_DEG;
    let label = format!("Petal {}", index + 1);

    rsx! {
        div {
            class: "petal",
            style: "--rotation: {rotation}deg;",
            role: "button",
            tabindex: "0",
            "aria-label": "{label}",
            onmounted: move |e: MountedEvent| mounted.set(Some(e.data())),
            onclick: move |_| activate_petal(garden, index, mounted()),
            onkeydown: move |evt: KeyboardEvent| {
                if is_activation_key(&evt.key()) {
                    evt.prevent_default();
                    activate_petal(garden, index, mounted());
                }
            },
        }
    }
}

/// The flower centre. Pulses on every petal activation.
#[component]
fn FlowerCenter() -> Element {
    let garden = use_garden();
    let mut mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let pulse = use_memo(move || garden.read().surface().pulse);

    // Alternate between two identical keyframes so consecutive pulses restart
    let center_class = if pulse().active {
        if pulse().generation % 2 == 0 {
            "center pulse-a"
        } else {
            "center pulse-b"
        }
    } else {
        "center"
    };

    rsx! {
        div {
            class: center_class,
            onmounted: move |e: MountedEvent| mounted.set(Some(e.data())),
            onclick: move |_| activate_center(garden, mounted()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key(&Key::Enter));
        assert!(is_activation_key(&Key::Character(" ".to_string())));
        assert!(!is_activation_key(&Key::Character("a".to_string())));
        assert!(!is_activation_key(&Key::Escape));
    }

    #[test]
    fn test_petals_evenly_spread() {
        assert_eq!(PETAL_SPREAD_DEG * PETAL_COUNT, 360);
    }
}
