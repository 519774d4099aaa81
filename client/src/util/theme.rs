//! Light/dark theme preference.
//!
//! The stored choice lives under the `theme` key as `"light"` or `"dark"`.
//! With nothing stored the OS `prefers-color-scheme` query decides. The
//! resolved theme is written to `data-theme` on `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Browser access is hydrate-only; SSR always renders the light theme and the
//! client corrects it after hydration.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::KeyValueStore;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Resolve the theme from storage, falling back to the system preference.
pub fn resolve(store: &dyn KeyValueStore, system_prefers_dark: bool) -> Theme {
    store
        .get(THEME_STORAGE_KEY)
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or(if system_prefers_dark { Theme::Dark } else { Theme::Light })
}

/// Whether the OS asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the explicit choice.
pub fn toggle(store: &dyn KeyValueStore, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    if let Err(e) = store.set(THEME_STORAGE_KEY, next.as_str()) {
        leptos::logging::warn!("could not persist theme: {e}");
    }
    next
}
