use leptos::{ev, html, prelude::*, task::spawn_local};

use super::{
    icon::IconGlyph,
    reveal::{delay_style, reveal_class, use_reveal},
    toast::Toasts,
};
use crate::{
    config::SiteConfig,
    contact::{submit, ContactError, ContactForm, EmailJsClient, Field, FormSlot, Notice},
    content::portfolio,
    nav::SectionId,
};

impl FormSlot for RwSignal<ContactForm> {
    fn modify<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

const INPUT_CLASS: &str = "w-full rounded-md px-3 py-2 bg-muted/50 border border-muted focus:border-neon-cyan focus:outline-none disabled:opacity-60";

#[component]
pub fn Contact() -> impl IntoView {
    let content = portfolio();
    let config = expect_context::<SiteConfig>();
    let toasts = expect_context::<Toasts>();
    let client = StoredValue::new_local(EmailJsClient::new(config.email));
    let form = RwSignal::new(ContactForm::default());
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    let value = move |field: Field| move || form.with(|f| f.draft.get(field).to_string());
    let edit = move |field: Field| {
        move |ev: ev::Event| form.update(|f| f.draft.set(field, event_target_value(&ev)))
    };
    let sending = move || form.with(ContactForm::is_sending);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let client = client.get_value();
        spawn_local(async move {
            match submit(&form, &client).await {
                Ok(notice) => toasts.push(notice),
                Err(ContactError::AlreadySending) => {}
                Err(e) => toasts.push(Notice::error(e.to_string())),
            }
        });
    };

    view! {
        <section id=SectionId::Contact.id() node_ref=section_ref class="py-20 relative">
            <div class="container mx-auto px-4">
                <h2 class=move || {
                    reveal_class(
                        "reveal text-4xl md:text-6xl font-bold text-gradient mb-16 text-center",
                        revealed.get(),
                    )
                }>"Let's Connect"</h2>

                <div class="max-w-5xl mx-auto grid md:grid-cols-2 gap-8">
                    <div class=move || reveal_class("reveal-left space-y-6", revealed.get())>
                        <div class="glass-card p-8 rounded-2xl space-y-6">
                            <h3 class="text-2xl font-bold text-foreground mb-6">"Get in Touch"</h3>
                            <p class="text-muted-foreground">{content.contact.intro.clone()}</p>
                            <div class="space-y-4 pt-4">
                                {content
                                    .contact
                                    .info
                                    .iter()
                                    .enumerate()
                                    .map(|(i, info)| {
                                        view! {
                                            <a
                                                href=info.href.clone()
                                                class=move || {
                                                    reveal_class(
                                                        "reveal-left flex items-center gap-4 p-4 rounded-lg hover:bg-muted/50 transition-colors group",
                                                        revealed.get(),
                                                    )
                                                }
                                                style=delay_style(0, i, 100)
                                            >
                                                <div class="p-3 bg-neon-cyan/10 rounded-lg group-hover:bg-neon-cyan/20 transition-colors text-xl">
                                                    <IconGlyph icon=info.icon />
                                                </div>
                                                <span class="text-foreground/80 group-hover:text-neon-cyan transition-colors">
                                                    {info.label.clone()}
                                                </span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class=move || reveal_class("reveal-right", revealed.get())>
                        <form on:submit=on_submit class="glass-card p-8 rounded-2xl space-y-6">
                            <input
                                type="text"
                                name="name"
                                placeholder="Your Name"
                                required
                                class=INPUT_CLASS
                                prop:value=value(Field::Name)
                                on:input=edit(Field::Name)
                            />
                            <input
                                type="email"
                                name="email"
                                placeholder="Your Email"
                                required
                                class=INPUT_CLASS
                                prop:value=value(Field::Email)
                                on:input=edit(Field::Email)
                            />
                            <textarea
                                name="message"
                                placeholder="Your Message"
                                required
                                rows="6"
                                class=format!("{INPUT_CLASS} resize-none")
                                prop:value=value(Field::Message)
                                on:input=edit(Field::Message)
                            ></textarea>
                            <button
                                type="submit"
                                disabled=sending
                                class="w-full inline-flex items-center justify-center gap-2 rounded-md px-6 py-3 bg-gradient-to-r from-neon-cyan to-neon-purple hover:opacity-90 text-background font-semibold disabled:opacity-50"
                            >
                                <span aria-hidden="true">"➤"</span>
                                {move || if sending() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>

            <footer class=move || {
                reveal_class("reveal text-center mt-20 text-muted-foreground", revealed.get())
            }>
                <p>
                    {format!(
                        "© {} {}. Built with passion and Rust.",
                        env!("BUILD_YEAR"),
                        content.owner,
                    )}
                </p>
            </footer>
        </section>
    }
}
