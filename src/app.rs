mod about;
mod background;
mod certifications;
mod contact;
mod experience;
mod header;
mod hero;
mod homepage;
mod icon;
mod projects;
mod reveal;
mod skills;
mod theme;
mod toast;

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use theme::ThemeService;
use toast::{ToastViewport, Toasts};

use crate::{config::SiteConfig, content::portfolio};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // the stored preference is only known in the browser, so the first paint
    // uses the configured default
    let root_class = SiteConfig::from_env().theme.default.resolve(true).class();
    view! {
        <!DOCTYPE html>
        <html lang="en" class=root_class>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = SiteConfig::from_env();
    provide_context(ThemeService::new(&config.theme));
    provide_context(Toasts::new());
    provide_context(config);

    let owner = portfolio().owner.clone();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Meta name="description" content=portfolio().hero.tagline.clone() />

        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
        <ToastViewport />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-6">
            <h1 class="text-6xl font-bold text-gradient">"404"</h1>
            <p class="text-muted-foreground">"This page drifted out of orbit."</p>
            <a href="/" class="text-neon-cyan hover:underline">
                "Back home"
            </a>
        </main>
    }
}
