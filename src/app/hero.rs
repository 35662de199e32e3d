use leptos::prelude::*;

use super::{background::SceneBackground, header::scroll_to, icon::IconGlyph};
use crate::{
    content::{portfolio, Icon},
    nav::SectionId,
};

#[component]
pub fn Hero() -> impl IntoView {
    let hero = &portfolio().hero;

    view! {
        <section
            id=SectionId::Home.id()
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <SceneBackground />

            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="glow-orb absolute top-1/4 left-1/4 w-96 h-96 bg-neon-cyan/10 rounded-full blur-3xl"></div>
                <div class="glow-orb glow-orb-delayed absolute bottom-1/4 right-1/4 w-96 h-96 bg-neon-purple/10 rounded-full blur-3xl"></div>
            </div>

            <div class="container mx-auto px-4 relative z-10 pt-20">
                <div class="max-w-4xl mx-auto text-center space-y-6">
                    <div class="intro inline-block mb-8" style="animation-delay: 200ms">
                        <span class="px-4 py-2 bg-neon-cyan/10 border border-neon-cyan/30 rounded-full text-neon-cyan text-sm font-medium">
                            {hero.badge.clone()}
                        </span>
                    </div>

                    <h1 class="intro text-5xl md:text-7xl lg:text-8xl font-bold" style="animation-delay: 300ms">
                        {hero
                            .name_lines
                            .iter()
                            .map(|line| view! { <span class="block text-gradient">{line.clone()}</span> })
                            .collect_view()}
                    </h1>

                    <p class="intro text-xl md:text-2xl text-muted-foreground max-w-2xl mx-auto" style="animation-delay: 500ms">
                        {hero.tagline.clone()}
                    </p>

                    <div class="intro flex flex-wrap gap-4 justify-center text-sm text-muted-foreground" style="animation-delay: 600ms">
                        <span class="flex items-center gap-2">
                            <IconGlyph icon=Icon::MapPin />
                            {hero.location.clone()}
                        </span>
                        <span class="flex items-center gap-2">
                            <IconGlyph icon=Icon::Phone />
                            {hero.phone.clone()}
                        </span>
                    </div>

                    <div class="flex gap-4 justify-center pt-8">
                        {hero
                            .socials
                            .iter()
                            .enumerate()
                            .map(|(i, link)| {
                                view! {
                                    <a
                                        href=link.href.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label.clone()
                                        class="intro-pop glass-card glass-hover glow-border p-3 rounded-lg text-2xl text-neon-cyan"
                                        style=format!("animation-delay: {}ms", 800 + i * 100)
                                    >
                                        <IconGlyph icon=link.icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="intro pt-8" style="animation-delay: 900ms">
                        <a
                            href=hero.resume_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="group inline-flex items-center gap-2 bg-gradient-to-r from-neon-cyan to-neon-purple hover:opacity-90 text-background font-semibold px-8 py-4 text-lg rounded-full"
                        >
                            <span class="group-hover:animate-bounce">"⬇"</span>
                            "Download Resume"
                        </a>
                    </div>
                </div>

                <a
                    href=SectionId::About.href()
                    class="scroll-indicator absolute bottom-8 left-1/2 -translate-x-1/2"
                    aria-label="Scroll to about"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to(SectionId::About);
                    }
                >
                    <div class="w-6 h-10 border-2 border-neon-cyan/50 rounded-full flex justify-center">
                        <div class="w-1.5 h-1.5 bg-neon-cyan rounded-full mt-2"></div>
                    </div>
                </a>
            </div>
        </section>
    }
}
