use leptos::{either::Either, html, prelude::*};

use super::{
    icon::IconGlyph,
    reveal::{delay_style, reveal_class, use_reveal},
};
use crate::{
    content::{portfolio, Segment},
    nav::SectionId,
};

fn segment_view(segment: &Segment) -> impl IntoView {
    match segment.accent {
        Some(accent) => Either::Left(view! {
            <span class=format!("{} font-semibold", accent.text_class())>
                {segment.text.clone()}
            </span>
        }),
        None => Either::Right(segment.text.clone()),
    }
}

#[component]
pub fn About() -> impl IntoView {
    let about = &portfolio().about;
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section id=SectionId::About.id() node_ref=section_ref class="py-20 relative">
            <div class="container mx-auto px-4">
                <div class=move || reveal_class("reveal max-w-4xl mx-auto", revealed.get())>
                    <h2 class="text-4xl md:text-6xl font-bold text-gradient mb-12 text-center">
                        "About Me"
                    </h2>

                    <div class="glass-card p-8 md:p-12 rounded-2xl space-y-6 relative overflow-hidden">
                        <div class=move || {
                            reveal_class(
                                "reveal-scale absolute top-0 left-0 w-20 h-20 border-t-2 border-l-2 border-neon-cyan",
                                revealed.get(),
                            )
                        }></div>
                        <div class=move || {
                            reveal_class(
                                "reveal-scale absolute bottom-0 right-0 w-20 h-20 border-b-2 border-r-2 border-neon-purple",
                                revealed.get(),
                            )
                        }></div>

                        {about
                            .paragraphs
                            .iter()
                            .enumerate()
                            .map(|(i, paragraph)| {
                                view! {
                                    <p
                                        class=move || {
                                            reveal_class(
                                                "reveal-left text-lg md:text-xl text-foreground/90 leading-relaxed",
                                                revealed.get(),
                                            )
                                        }
                                        style=delay_style(200, i, 200)
                                    >
                                        {paragraph.iter().map(segment_view).collect_view()}
                                    </p>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mt-12">
                        {about
                            .highlights
                            .iter()
                            .enumerate()
                            .map(|(i, item)| {
                                view! {
                                    <div
                                        class=move || {
                                            reveal_class(
                                                "reveal-scale glass-card glass-hover p-6 rounded-xl text-center",
                                                revealed.get(),
                                            )
                                        }
                                        style=delay_style(1000, i, 100)
                                    >
                                        <IconGlyph
                                            icon=item.icon
                                            class=item.color.text_class()
                                        />
                                        <p class="mt-3 text-sm font-medium text-foreground/80">
                                            {item.text.clone()}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
