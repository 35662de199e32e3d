use leptos::{either::Either, prelude::*};

use crate::content::Icon;

fn glyph(icon: Icon) -> Option<&'static str> {
    match icon {
        Icon::Github | Icon::Linkedin => None,
        Icon::Mail => Some("✉️"),
        Icon::Phone => Some("📞"),
        Icon::MapPin => Some("📍"),
        Icon::Code => Some("💻"),
        Icon::Trophy => Some("🏆"),
        Icon::Target => Some("🎯"),
        Icon::Dumbbell => Some("🏋️"),
        Icon::Briefcase => Some("💼"),
        Icon::GraduationCap => Some("🎓"),
        Icon::Award => Some("🏅"),
    }
}

/// Brand icons come from devicon, everything else is an emoji.
#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    match glyph(icon) {
        Some(emoji) => Either::Left(view! {
            <span class=class aria-hidden="true">
                {emoji}
            </span>
        }),
        None => {
            let brand = match icon {
                Icon::Linkedin => "devicon-linkedin-plain",
                _ => "devicon-github-original",
            };
            Either::Right(view! { <i class=format!("{brand} {class}") aria-hidden="true"></i> })
        }
    }
}
