//! Theme management module for the site.
//!
//! Light/dark theme kept in a context signal. The preference is persisted in
//! localStorage as a single boolean ("is dark mode on").

pub mod theme_toggle;

pub use theme_toggle::ThemeToggle;

use leptos::prelude::*;
use web_sys::window;

/// CSS class set on `<body>` while the dark theme is active.
const DARK_MODE_CLASS: &str = "dark-mode";

/// Available themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name (used for the `data-theme` attribute).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Parse the stored flag. Anything but `"true"` means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("true") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Value written to localStorage.
    pub fn to_stored(&self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle button (describes the action, not the state).
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Load theme from localStorage.
fn load_theme_from_storage(key: &str) -> Theme {
    match local_storage() {
        Some(storage) => Theme::from_stored(storage.get_item(key).ok().flatten().as_deref()),
        None => {
            log::warn!("localStorage unavailable, using light theme");
            Theme::Light
        }
    }
}

/// Save theme to localStorage.
fn save_theme_to_storage(key: &str, theme: Theme) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(key, theme.to_stored()).is_err() {
                log::warn!("Failed to persist theme preference");
            }
        }
        None => log::warn!("localStorage unavailable, theme preference not saved"),
    }
}

/// Apply theme to `<body>`: `dark-mode` class plus a `data-theme` attribute.
fn apply_theme(theme: Theme) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };

    let _ = body
        .class_list()
        .toggle_with_force(DARK_MODE_CLASS, theme.is_dark());
    let _ = body.set_attribute("data-theme", theme.as_str());
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
    storage_key: StoredValue<String>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.storage_key
            .with_value(|key| save_theme_to_storage(key, theme));
        apply_theme(theme);
    }

    /// Get the current theme.
    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("Theme switched to {}", next.as_str());
        self.set_theme(next);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(
    /// localStorage key holding the dark-mode flag
    #[prop(into)]
    storage_key: String,
    children: Children,
) -> impl IntoView {
    // Load theme from storage on initial render
    let initial_theme = load_theme_from_storage(&storage_key);
    apply_theme(initial_theme);

    let context = ThemeContext {
        theme: RwSignal::new(initial_theme),
        storage_key: StoredValue::new(storage_key),
    };
    provide_context(context);

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_flag_round_trip() {
        assert_eq!(Theme::from_stored(Some(Theme::Dark.to_stored())), Theme::Dark);
        assert_eq!(Theme::from_stored(Some(Theme::Light.to_stored())), Theme::Light);
    }

    #[test]
    fn test_unknown_or_missing_flag_is_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Light);
        assert_eq!(Theme::from_stored(Some(" true ")), Theme::Dark);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
    }
}
