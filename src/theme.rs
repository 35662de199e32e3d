use serde::{Deserialize, Serialize};
use std::{
    cell::RefCell,
    collections::HashMap,
    fmt,
    rc::Rc,
    str::FromStr,
};
use thiserror::Error;

use crate::config::ThemeConfig;

/// User-selected color scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    System,
}

/// The concrete scheme after resolving [`Theme::System`] against the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ThemeParseError(String);

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn resolve(self, prefers_dark: bool) -> EffectiveTheme {
        match self {
            Theme::Light => EffectiveTheme::Light,
            Theme::Dark => EffectiveTheme::Dark,
            Theme::System if prefers_dark => EffectiveTheme::Dark,
            Theme::System => EffectiveTheme::Light,
        }
    }

    /// Next value for the two-state toggle button.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light | Theme::System => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

impl EffectiveTheme {
    pub fn class(self) -> &'static str {
        match self {
            EffectiveTheme::Light => "light",
            EffectiveTheme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == EffectiveTheme::Dark
    }
}

/// String key-value persistence, e.g. the browser's `localStorage`.
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory storage; clones share the same map so a store rebuilt from a
/// clone sees earlier writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Observer = Box<dyn Fn(Theme)>;

/// Persisted theme preference with synchronous change notification.
pub struct ThemeStore<S> {
    storage: S,
    storage_key: String,
    current: Theme,
    next_id: usize,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    /// Reads the persisted preference once, falling back to the configured default.
    pub fn new(storage: S, config: &ThemeConfig) -> Self {
        let current = storage
            .get(&config.storage_key)
            .and_then(|s| s.parse::<Theme>().ok())
            .unwrap_or(config.default);
        Self {
            storage,
            storage_key: config.storage_key.clone(),
            current,
            next_id: 0,
            observers: Vec::new(),
        }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    /// Persists and broadcasts `theme`; re-selecting the current value is a no-op.
    pub fn set(&mut self, theme: Theme) {
        if theme == self.current {
            return;
        }
        self.current = theme;
        self.storage.set(&self.storage_key, theme.as_str());
        for (_, observer) in &self.observers {
            observer(theme);
        }
    }

    pub fn resolve(&self, prefers_dark: bool) -> EffectiveTheme {
        self.current.resolve(prefers_dark)
    }

    pub fn subscribe(&mut self, observer: impl Fn(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(sub, _)| *sub != id);
    }
}
