use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::About, certifications::Certifications, contact::Contact, experience::Experience,
    header::Navigation, hero::Hero, projects::Projects, skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-background text-foreground overflow-x-hidden">
            <Navigation />
            <main>
                <Hero />
                <About />
                <Skills />
                <Projects />
                <Experience />
                <Certifications />
                <Contact />
            </main>
        </div>
    }
}
