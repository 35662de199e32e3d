use leptos::{html, prelude::*};

use super::{
    icon::IconGlyph,
    reveal::{delay_style, reveal_class, use_reveal},
};
use crate::{
    content::{portfolio, Icon},
    nav::SectionId,
};

const TIMELINE: &str = "space-y-8 relative before:content-[''] before:absolute before:left-4 before:top-0 before:bottom-0 before:w-0.5 before:bg-gradient-to-b";

#[component]
fn TimelineDot(class: &'static str) -> impl IntoView {
    view! {
        <span class=format!(
            "absolute -left-[3.25rem] top-8 w-4 h-4 rounded-full border-4 border-background {class}",
        )></span>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    let content = portfolio();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    let entry_class = move || {
        reveal_class(
            "reveal-left glass-card p-6 md:p-8 rounded-2xl ml-12 relative",
            revealed.get(),
        )
    };

    view! {
        <section id=SectionId::Experience.id() node_ref=section_ref class="py-20 relative">
            <div class="container mx-auto px-4">
                <h2 class=move || {
                    reveal_class(
                        "reveal text-4xl md:text-6xl font-bold text-gradient mb-16 text-center",
                        revealed.get(),
                    )
                }>"Experience & Education"</h2>

                <div class="max-w-5xl mx-auto space-y-16">
                    <div>
                        <h3 class="text-3xl font-bold text-neon-cyan mb-8 flex items-center gap-3">
                            <IconGlyph icon=Icon::Briefcase />
                            "Work Experience"
                        </h3>
                        <div class=format!("{TIMELINE} before:from-neon-cyan before:to-neon-purple")>
                            {content
                                .experience
                                .iter()
                                .enumerate()
                                .map(|(i, exp)| {
                                    view! {
                                        <div
                                            class=entry_class
                                            style=delay_style(0, i, 200)
                                        >
                                            <TimelineDot class=exp.color.dot_class() />
                                            <div class="flex flex-col md:flex-row md:justify-between md:items-start mb-4">
                                                <div>
                                                    <h4 class="text-2xl font-bold text-foreground">
                                                        {exp.title.clone()}
                                                    </h4>
                                                    <p class=format!(
                                                        "text-xl {}",
                                                        exp.color.text_class(),
                                                    )>{exp.company.clone()}</p>
                                                </div>
                                                <div class="md:text-right">
                                                    <p class="text-muted-foreground">{exp.period.clone()}</p>
                                                    <p class="text-muted-foreground text-sm">
                                                        {exp.location.clone()}
                                                    </p>
                                                </div>
                                            </div>
                                            <ul class="space-y-2">
                                                {exp
                                                    .points
                                                    .iter()
                                                    .map(|point| {
                                                        view! {
                                                            <li class="flex items-start gap-3 text-muted-foreground">
                                                                <span class="text-neon-purple mt-1">"▸"</span>
                                                                {point.clone()}
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h3 class="text-3xl font-bold text-neon-purple mb-8 flex items-center gap-3">
                            <IconGlyph icon=Icon::GraduationCap />
                            "Education"
                        </h3>
                        <div class=format!("{TIMELINE} before:from-neon-purple before:to-neon-pink")>
                            {content
                                .education
                                .iter()
                                .enumerate()
                                .map(|(i, edu)| {
                                    view! {
                                        <div
                                            class=entry_class
                                            style=delay_style(400, i, 200)
                                        >
                                            <TimelineDot class=edu.color.dot_class() />
                                            <div class="flex flex-col md:flex-row md:justify-between md:items-start">
                                                <div>
                                                    <h4 class="text-xl font-bold text-foreground">
                                                        {edu.degree.clone()}
                                                    </h4>
                                                    <p class=edu.color.text_class()>{edu.institution.clone()}</p>
                                                </div>
                                                <div class="md:text-right mt-2 md:mt-0">
                                                    <p class="text-muted-foreground">{edu.period.clone()}</p>
                                                    <p class="text-foreground font-semibold">{edu.score.clone()}</p>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
