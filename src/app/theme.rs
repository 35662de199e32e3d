use leptos::{either::Either, prelude::*};
use leptos_use::use_preferred_dark;

use crate::{
    config::ThemeConfig,
    theme::{EffectiveTheme, PreferenceStorage, Theme, ThemeStore},
};

/// `window.localStorage`; storage errors (private mode, quota) read as absent.
#[cfg(feature = "hydrate")]
struct BrowserStorage(web_sys::Storage);

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn open() -> Option<Self> {
        window().local_storage().ok().flatten().map(Self)
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.0.set_item(key, value) {
            log::warn!("couldn't persist theme preference: {e:?}");
        }
    }
}

type Store = ThemeStore<Box<dyn PreferenceStorage>>;

/// Reactive handle on the theme preference, shared through context.
///
/// The signal mirrors the store; the store is only opened once mounted in the
/// browser so hydration starts from the same default the server rendered.
#[derive(Clone, Copy)]
pub struct ThemeService {
    theme: RwSignal<Theme>,
    store: StoredValue<Option<Store>, LocalStorage>,
}

impl ThemeService {
    pub fn new(config: &ThemeConfig) -> Self {
        let theme = RwSignal::new(config.default);
        let store = StoredValue::new_local(None::<Store>);
        let service = Self { theme, store };

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            Effect::new(move |_| {
                let storage: Box<dyn PreferenceStorage> = match BrowserStorage::open() {
                    Some(s) => Box::new(s),
                    None => Box::new(crate::theme::MemoryStorage::new()),
                };
                let mut opened = ThemeStore::new(storage, &config);
                opened.subscribe(move |t| {
                    log::debug!("theme changed to {t}");
                    theme.set(t);
                });
                theme.set(opened.get());
                store.set_value(Some(opened));
            });
        }

        let prefers_dark = use_preferred_dark();
        Effect::new(move |_| {
            apply_to_root(theme.get().resolve(prefers_dark.get()));
        });

        service
    }

    pub fn theme(&self) -> Signal<Theme> {
        self.theme.into()
    }

    pub fn set(&self, value: Theme) {
        let persisted = self.store.try_update_value(|store| match store {
            Some(store) => {
                store.set(value);
                true
            }
            None => false,
        });
        if persisted != Some(true) {
            self.theme.set(value);
        }
    }

    pub fn toggle(&self) {
        self.set(self.theme.get_untracked().toggled());
    }
}

#[cfg(feature = "hydrate")]
fn apply_to_root(effective: EffectiveTheme) {
    use wasm_bindgen::JsCast;

    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_2("light", "dark");
    let _ = classes.add_1(effective.class());
    if let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() {
        let _ = root.style().set_property("color-scheme", effective.class());
    }
}

#[cfg(not(feature = "hydrate"))]
fn apply_to_root(_: EffectiveTheme) {}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let service = expect_context::<ThemeService>();
    let theme = service.theme();

    view! {
        <button
            class="relative w-10 h-10 flex items-center justify-center rounded-md border border-neon-cyan/30 hover:border-neon-cyan overflow-hidden"
            aria-label="Toggle theme"
            on:click=move |_| service.toggle()
        >
            {move || {
                if theme.get() == Theme::Light {
                    Either::Left(view! { <span class="theme-icon text-neon-purple">"☀"</span> })
                } else {
                    Either::Right(view! { <span class="theme-icon text-neon-cyan">"☾"</span> })
                }
            }}
        </button>
    }
}
