//! Deployment settings baked in at compile time.
//!
//! The hydrated client has no process environment to read from, so overrides are
//! taken from `PORTFOLIO_*` variables while building. Unset or unparsable values
//! fall back to the defaults below.

use crate::theme::Theme;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "vite-ui-theme";
pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_EMAILJS_SERVICE_ID: &str = "service_lt2y5qs";
const DEFAULT_EMAILJS_TEMPLATE_ID: &str = "template_e2wsm2g";
const DEFAULT_EMAILJS_PUBLIC_KEY: &str = "1O7oioKD4db_Ux_D2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub default: Theme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
            default: Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// EmailJS public key, sent as `user_id`.
    pub public_key: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_string(),
            service_id: DEFAULT_EMAILJS_SERVICE_ID.to_string(),
            template_id: DEFAULT_EMAILJS_TEMPLATE_ID.to_string(),
            public_key: DEFAULT_EMAILJS_PUBLIC_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub email: EmailJsConfig,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_overrides(|name| match name {
            "PORTFOLIO_THEME_STORAGE_KEY" => option_env!("PORTFOLIO_THEME_STORAGE_KEY"),
            "PORTFOLIO_DEFAULT_THEME" => option_env!("PORTFOLIO_DEFAULT_THEME"),
            "PORTFOLIO_EMAILJS_ENDPOINT" => option_env!("PORTFOLIO_EMAILJS_ENDPOINT"),
            "PORTFOLIO_EMAILJS_SERVICE_ID" => option_env!("PORTFOLIO_EMAILJS_SERVICE_ID"),
            "PORTFOLIO_EMAILJS_TEMPLATE_ID" => option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
            "PORTFOLIO_EMAILJS_PUBLIC_KEY" => option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
            _ => None,
        })
    }

    fn from_overrides<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let text = |name: &str, default: String| {
            lookup(name)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(default)
        };
        let defaults = Self::default();
        Self {
            theme: ThemeConfig {
                storage_key: text("PORTFOLIO_THEME_STORAGE_KEY", defaults.theme.storage_key),
                default: lookup("PORTFOLIO_DEFAULT_THEME")
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(defaults.theme.default),
            },
            email: EmailJsConfig {
                endpoint: text("PORTFOLIO_EMAILJS_ENDPOINT", defaults.email.endpoint),
                service_id: text("PORTFOLIO_EMAILJS_SERVICE_ID", defaults.email.service_id),
                template_id: text("PORTFOLIO_EMAILJS_TEMPLATE_ID", defaults.email.template_id),
                public_key: text("PORTFOLIO_EMAILJS_PUBLIC_KEY", defaults.email.public_key),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_overrides(|_| None);
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.theme.storage_key, "vite-ui-theme");
        assert_eq!(config.theme.default, Theme::Dark);
        assert_eq!(config.email.endpoint, DEFAULT_EMAILJS_ENDPOINT);
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_overrides(|name| match name {
            "PORTFOLIO_THEME_STORAGE_KEY" => Some("my-theme"),
            "PORTFOLIO_DEFAULT_THEME" => Some("system"),
            "PORTFOLIO_EMAILJS_SERVICE_ID" => Some(" service_x "),
            _ => None,
        });
        assert_eq!(config.theme.storage_key, "my-theme");
        assert_eq!(config.theme.default, Theme::System);
        assert_eq!(config.email.service_id, "service_x");
        assert_eq!(config.email.template_id, DEFAULT_EMAILJS_TEMPLATE_ID);
    }

    #[test]
    fn test_invalid_overrides_fall_back() {
        let config = SiteConfig::from_overrides(|name| match name {
            "PORTFOLIO_DEFAULT_THEME" => Some("neon"),
            "PORTFOLIO_THEME_STORAGE_KEY" => Some("   "),
            _ => None,
        });
        assert_eq!(config.theme, ThemeConfig::default());
    }
}
