//! Light/dark theme toggle with a persisted preference.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use pagedom::{Event, EventKind, Surface, Tag, Target};
use serde::Deserialize;
use thiserror::Error;

use crate::config::ThemeConfig;
use crate::page::{Context, Listener};
use crate::prefs::PreferenceBackend;

/// Preference key the theme is stored under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon class shown on the toggle while this theme is active.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-moon",
            Theme::Light => "fas fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored or configured theme name that is neither `dark` nor `light`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct ThemeManager {
    theme: Theme,
    toggle_id: String,
}

impl ThemeManager {
    /// Read the stored preference, falling back to the configured default.
    pub fn new(config: ThemeConfig, prefs: &dyn PreferenceBackend) -> Self {
        let theme = match prefs.get(THEME_KEY) {
            Ok(Some(stored)) => stored.parse().unwrap_or_else(|e| {
                warn!("{e}, using {}", config.default);
                config.default
            }),
            Ok(None) => config.default,
            Err(e) => {
                warn!("could not read theme preference: {e}");
                config.default
            }
        };
        Self {
            theme,
            toggle_id: config.toggle_id,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn mount<S: Surface>(&mut self, cx: &mut Context<'_, S>, prefs: &mut dyn PreferenceBackend) {
        self.apply(cx, prefs);
        if cx.surface().exists(&self.toggle_id) {
            cx.listen(Target::element(&self.toggle_id), EventKind::Click, Listener::Theme);
        } else {
            debug!("theme toggle '{}' not found", self.toggle_id);
        }
    }

    pub fn handle_event<S: Surface>(
        &mut self,
        event: &Event,
        cx: &mut Context<'_, S>,
        prefs: &mut dyn PreferenceBackend,
    ) {
        if let Event::Click { .. } = event {
            self.toggle(cx, prefs);
        }
    }

    pub fn toggle<S: Surface>(&mut self, cx: &mut Context<'_, S>, prefs: &mut dyn PreferenceBackend) {
        self.theme = self.theme.toggled();
        debug!("theme -> {}", self.theme);
        self.apply(cx, prefs);
    }

    /// Reflect the current theme on the body and toggle icon, then persist it.
    pub fn apply<S: Surface>(&self, cx: &mut Context<'_, S>, prefs: &mut dyn PreferenceBackend) {
        let body = cx.surface().body_id();
        let icon = cx.surface().child_by_tag(&self.toggle_id, Tag::Icon);
        let surface = cx.surface_mut();

        let _ = match self.theme {
            Theme::Light => surface.set_attribute(&body, "data-theme", "light"),
            Theme::Dark => surface.remove_attribute(&body, "data-theme"),
        };
        if let Some(icon) = icon {
            let _ = surface.set_class_name(&icon, self.theme.icon_class());
        }

        if let Err(e) = prefs.set(THEME_KEY, self.theme.as_str()) {
            warn!("could not persist theme preference: {e}");
        }
    }
}
