use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::{stagger, Reveal, RevealOptions};

/// Fires once when enough of `target` scrolls into view, then stops observing.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<bool> {
    let state = RwSignal::new(Reveal::Pending);
    let options = RevealOptions::default();

    let _ = use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let visible = entries.iter().any(|entry| entry.is_intersecting());
            state.update(|s| *s = s.observe(visible));
            if state.get_untracked().is_revealed() {
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![options.threshold]),
    );

    Signal::derive(move || state.get().is_revealed())
}

/// `base` plus `is-revealed` once the section has been seen.
pub fn reveal_class(base: &str, revealed: bool) -> String {
    if revealed {
        format!("{base} is-revealed")
    } else {
        base.to_string()
    }
}

pub fn delay_style(base_ms: u32, index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms", stagger(base_ms, index, step_ms))
}
