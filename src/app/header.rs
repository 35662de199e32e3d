use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::theme::ThemeToggle;
use crate::{
    content::portfolio,
    nav::{is_scrolled, NavState, SectionId, NAV_ITEMS},
};

/// Smoothly brings the section into view.
pub fn scroll_to(section: SectionId) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::debug!("no element for section #{section}");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn Navigation() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let (_, scroll_y) = use_window_scroll();

    // deep links such as /#contact land on their section once the page exists
    Effect::new(move |_| {
        let hash = window().location().hash().unwrap_or_default();
        if let Some(section) = SectionId::from_fragment(&hash) {
            scroll_to(section);
        }
    });

    let go = move |target: SectionId| {
        let target = nav.try_update(|s| s.select(target)).unwrap_or(target);
        scroll_to(target);
    };

    let bar_class = move || {
        if is_scrolled(scroll_y.get()) {
            "fixed top-0 left-0 right-0 z-40 transition-all duration-300 glass-card py-4"
        } else {
            "fixed top-0 left-0 right-0 z-40 transition-all duration-300 py-6"
        }
    };

    view! {
        <nav class=bar_class>
            <div class="container mx-auto px-4 flex justify-between items-center">
                <button
                    class="text-2xl font-bold text-gradient hover:scale-105 transition-transform"
                    on:click=move |_| go(SectionId::Home)
                >
                    {portfolio().initials.clone()}
                </button>

                <div class="hidden md:flex gap-8 items-center">
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let target = item.target;
                            view! {
                                <a
                                    href=target.href()
                                    class="nav-link drop-in text-foreground/80 hover:text-neon-cyan transition-colors relative group"
                                    style=format!("animation-delay: {}ms", i * 100)
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        go(target);
                                    }
                                >
                                    {item.label}
                                    <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-neon-cyan transition-all group-hover:w-full"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle />
                </div>

                <div class="md:hidden flex items-center gap-2">
                    <ThemeToggle />
                    <button
                        class="text-neon-cyan text-2xl w-8"
                        aria-label="Toggle menu"
                        aria-expanded=move || nav.get().menu_open.to_string()
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        {move || if nav.get().menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || nav.get().menu_open>
                <div class="md:hidden glass-card mt-4 mx-4 rounded-lg overflow-hidden">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let target = item.target;
                            view! {
                                <a
                                    href=target.href()
                                    class="block w-full text-left px-6 py-3 text-foreground/80 hover:text-neon-cyan hover:bg-muted/50 transition-colors"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        go(target);
                                    }
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
