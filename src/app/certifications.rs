use leptos::{html, prelude::*};

use super::{
    icon::IconGlyph,
    reveal::{delay_style, reveal_class, use_reveal},
};
use crate::{
    content::{portfolio, Icon},
    nav::SectionId,
};

#[component]
pub fn Certifications() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section
            id=SectionId::Certifications.id()
            node_ref=section_ref
            class="py-20 relative overflow-hidden"
        >
            <div class="absolute top-1/4 right-0 w-96 h-96 bg-neon-purple/10 rounded-full blur-3xl"></div>
            <div class="absolute bottom-1/4 left-0 w-96 h-96 bg-neon-cyan/10 rounded-full blur-3xl"></div>

            <div class="container mx-auto px-4 relative z-10">
                <div class=move || reveal_class("reveal text-center mb-16", revealed.get())>
                    <div class="inline-flex items-center gap-3 mb-6">
                        <IconGlyph icon=Icon::Award class="text-4xl" />
                        <h2 class="text-4xl md:text-6xl font-bold text-gradient">"Certifications"</h2>
                    </div>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        "Continuous learning and professional development"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 max-w-6xl mx-auto">
                    {portfolio()
                        .certifications
                        .iter()
                        .enumerate()
                        .map(|(i, cert)| {
                            view! {
                                <div
                                    class=move || {
                                        reveal_class(
                                            "reveal-scale glass-card glass-hover p-6 rounded-2xl relative overflow-hidden group hover:scale-105 transition-transform",
                                            revealed.get(),
                                        )
                                    }
                                    style=delay_style(0, i, 100)
                                >
                                    <div class=format!(
                                        "absolute -top-1/2 -right-1/2 w-full h-full rounded-full blur-3xl opacity-10 {}",
                                        cert.color.dot_class(),
                                    )></div>
                                    <div class="relative z-10 space-y-4">
                                        <div class=format!(
                                            "inline-block p-3 rounded-lg border {}",
                                            cert.color.tint_class(),
                                        )>
                                            <span class=cert.color.text_class()>"✔"</span>
                                        </div>
                                        <div>
                                            <h3 class="text-xl font-bold text-foreground mb-2 group-hover:text-gradient transition-all">
                                                {cert.title.clone()}
                                            </h3>
                                            <p class="text-muted-foreground text-sm flex items-center gap-2">
                                                <span class=format!(
                                                    "w-2 h-2 rounded-full {}",
                                                    cert.color.dot_class(),
                                                )></span>
                                                {cert.issuer.clone()}
                                            </p>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=move || {
                    reveal_class(
                        "reveal-grow mt-12 h-1 bg-gradient-to-r from-neon-cyan via-neon-purple to-neon-pink mx-auto max-w-xs rounded-full",
                        revealed.get(),
                    )
                }></div>
            </div>
        </section>
    }
}
