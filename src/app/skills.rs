use leptos::{html, prelude::*};

use super::reveal::{delay_style, reveal_class, use_reveal};
use crate::{content::portfolio, nav::SectionId, reveal::stagger};

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section id=SectionId::Skills.id() node_ref=section_ref class="py-20 relative">
            <div class="container mx-auto px-4">
                <h2 class=move || {
                    reveal_class(
                        "reveal text-4xl md:text-6xl font-bold text-gradient mb-16 text-center",
                        revealed.get(),
                    )
                }>"Technical Skills"</h2>

                <div class="max-w-6xl mx-auto space-y-8 relative z-10">
                    {portfolio()
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            // categories slide in from alternating sides
                            let side = if i % 2 == 0 { "reveal-left" } else { "reveal-right" };
                            let base_delay = stagger(0, i, 100);
                            view! {
                                <div
                                    class=move || {
                                        reveal_class(
                                            &format!(
                                                "{side} glass-card p-6 md:p-8 rounded-2xl relative overflow-hidden group hover:scale-[1.02] transition-transform",
                                            ),
                                            revealed.get(),
                                        )
                                    }
                                    style=delay_style(base_delay, 0, 0)
                                >
                                    <h3 class=format!(
                                        "text-2xl font-bold mb-6 {}",
                                        category.color.text_class(),
                                    )>{category.title.clone()}</h3>
                                    <div class="flex flex-wrap gap-3">
                                        {category
                                            .skills
                                            .iter()
                                            .enumerate()
                                            .map(|(j, skill)| {
                                                let tint = category.color.tint_class();
                                                view! {
                                                    <span
                                                        class=move || {
                                                            reveal_class(
                                                                &format!(
                                                                    "reveal-scale px-4 py-2 border rounded-full text-sm font-medium transition-colors cursor-default {tint}",
                                                                ),
                                                                revealed.get(),
                                                            )
                                                        }
                                                        style=delay_style(base_delay, j, 50)
                                                    >
                                                        {skill.clone()}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[600px] h-[600px] pointer-events-none opacity-20">
                    <div class="orbit absolute inset-0 border border-neon-cyan/30 rounded-full"></div>
                    <div class="orbit orbit-reverse absolute inset-8 border border-neon-purple/30 rounded-full"></div>
                    <div class="orbit absolute inset-16 border border-neon-pink/30 rounded-full"></div>
                </div>
            </div>
        </section>
    }
}
