use leptos::{either::Either, html, prelude::*};

use super::{
    icon::IconGlyph,
    reveal::{delay_style, reveal_class, use_reveal},
};
use crate::{
    content::{portfolio, Icon, Project, ProjectAction},
    nav::SectionId,
};

#[component]
fn ProjectActions(project: &'static Project) -> impl IntoView {
    let actions = project.actions();
    // a lone source link spans the whole row
    let width = if actions.len() == 1 { "w-full" } else { "flex-1" };

    view! {
        <div class="flex gap-3 pt-4 relative z-20">
            {actions
                .into_iter()
                .map(|action| match action {
                    ProjectAction::LiveDemo(href) => {
                        Either::Left(view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class=format!(
                                    "{width} inline-flex items-center justify-center gap-2 rounded-md px-3 py-2 text-sm font-medium bg-gradient-to-r from-neon-cyan to-neon-purple text-background shadow-lg shadow-neon-cyan/20 hover:shadow-neon-cyan/40 hover:scale-105 transition-all",
                                )
                            >
                                <span aria-hidden="true">"↗"</span>
                                "Live Demo"
                            </a>
                        })
                    }
                    ProjectAction::Source(href) => {
                        Either::Right(view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class=format!(
                                    "{width} inline-flex items-center justify-center gap-2 rounded-md px-3 py-2 text-sm font-medium border border-neon-purple/50 text-neon-purple hover:bg-neon-purple/10 hover:border-neon-purple hover:scale-105 transition-all",
                                )
                            >
                                <IconGlyph icon=Icon::Github />
                                "View Code"
                            </a>
                        })
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section id=SectionId::Projects.id() node_ref=section_ref class="py-20 relative">
            <div class="container mx-auto px-4">
                <h2 class=move || {
                    reveal_class(
                        "reveal text-4xl md:text-6xl font-bold text-gradient mb-16 text-center",
                        revealed.get(),
                    )
                }>"Featured Projects"</h2>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 max-w-7xl mx-auto">
                    {portfolio()
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let (tech, more) = project.visible_tech();
                            let gradient = project.gradient.class();
                            view! {
                                <article
                                    class=move || {
                                        reveal_class(
                                            "reveal glass-card glass-hover p-6 rounded-2xl group relative overflow-hidden hover:-translate-y-3 transition-transform",
                                            revealed.get(),
                                        )
                                    }
                                    style=delay_style(0, i, 100)
                                >
                                    <div class=format!(
                                        "absolute top-0 left-0 w-full h-1 {gradient}",
                                    )></div>
                                    <div class=format!(
                                        "absolute inset-0 {gradient} opacity-0 group-hover:opacity-10 blur-xl transition-opacity duration-300",
                                    )></div>

                                    <div class="space-y-4 relative z-10">
                                        <h3 class="text-2xl font-bold text-foreground group-hover:text-gradient transition-all">
                                            {project.title.clone()}
                                        </h3>
                                        <p class="text-muted-foreground line-clamp-3">
                                            {project.description.clone()}
                                        </p>

                                        <div class="flex flex-wrap gap-2">
                                            {tech
                                                .iter()
                                                .map(|t| {
                                                    view! {
                                                        <span class="text-xs px-2 py-1 bg-muted rounded-full text-muted-foreground">
                                                            {t.clone()}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                            {more
                                                .map(|n| {
                                                    view! {
                                                        <span class="text-xs px-2 py-1 bg-muted rounded-full text-muted-foreground">
                                                            {format!("+{n}")}
                                                        </span>
                                                    }
                                                })}
                                        </div>

                                        <ul class="space-y-2">
                                            {project
                                                .visible_features()
                                                .iter()
                                                .map(|feature| {
                                                    view! {
                                                        <li class="text-sm text-muted-foreground flex items-start gap-2">
                                                            <span class="text-neon-cyan mt-1">"▸"</span>
                                                            {feature.clone()}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>

                                        <ProjectActions project />
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
