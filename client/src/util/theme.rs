//! Light/dark theme as an application context.
//!
//! The preference is read from `localStorage["theme"]` (falling back to the
//! system color scheme) after hydration, applied as a `data-theme` attribute
//! on `<html>`, and written back on every change. The provider removes the
//! attribute when its owner is disposed.
//!
//! TRADE-OFFS
//! ==========
//! SSR always renders the light theme; the stored preference is applied on
//! the first client effect so hydration sees identical markup.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph for the toggle button: the theme it switches to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn get(self) -> Theme {
        self.theme.get()
    }

    pub fn set(self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn toggle(self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

/// Install the theme context for the subtree rooted at the caller.
pub fn provide_theme() -> ThemeContext {
    let theme = RwSignal::new(Theme::default());
    let ctx = ThemeContext { theme };
    provide_context(ctx);

    // Effects only run in the browser; load once, then mirror every change.
    Effect::new(move || theme.set(read_preference()));
    Effect::new(move || {
        let current = theme.get();
        apply(current);
        persist(current);
    });
    on_cleanup(clear);

    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Stored preference, else the system color scheme, else light.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        use booking::cache::KeyValueStore;

        if let Some(theme) = super::storage::BrowserStore::local().get(THEME_KEY).as_deref().and_then(Theme::parse) {
            return theme;
        }
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        use booking::cache::KeyValueStore;

        super::storage::BrowserStore::local().set(THEME_KEY, theme.as_str());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.remove_attribute("data-theme");
        }
    }
}
