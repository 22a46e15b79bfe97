//! Page configuration: timings and thresholds for every component.
//!
//! All fields have defaults matching the shipped page, so an empty TOML file
//! (or no file at all) yields the stock behaviour. Durations are written in
//! milliseconds.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::theme::Theme;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub form: FormConfig,
    pub theme: ThemeConfig,
    pub navigation: NavigationConfig,
    pub navbar: NavbarConfig,
    pub reveal: RevealConfig,
    pub typing: TypingConfig,
}

impl PageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Set the simulated submission delay.
    pub fn submission_delay(mut self, delay: Duration) -> Self {
        self.form.submission_delay = delay;
        self
    }

    /// Set how long the success message stays visible.
    pub fn success_display(mut self, duration: Duration) -> Self {
        self.form.success_display = duration;
        self
    }

    /// Replace the typing animation texts. An empty list disables it.
    pub fn typing_texts(mut self, texts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.typing.texts = texts.into_iter().map(Into::into).collect();
        self
    }

    /// Disable the typing animation.
    pub fn without_typing(self) -> Self {
        self.typing_texts(Vec::<String>::new())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Id of the contact form element.
    pub form_id: String,
    #[serde(rename = "submission_delay_ms", deserialize_with = "millis")]
    pub submission_delay: Duration,
    #[serde(rename = "success_display_ms", deserialize_with = "millis")]
    pub success_display: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "contact-form".to_string(),
            submission_delay: Duration::from_millis(2000),
            success_display: Duration::from_millis(5000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_id: String,
    /// Theme used when no preference is stored.
    pub default: Theme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "theme-toggle".to_string(),
            default: Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Class of the container holding in-page links.
    pub links_class: String,
    /// Distance kept between a scrolled-to section and the top of the
    /// viewport (the fixed navbar height).
    pub offset: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            links_class: "nav-links".to_string(),
            offset: 80,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub navbar_class: String,
    /// Scroll offset past which the navbar turns more opaque.
    pub threshold: u32,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            navbar_class: "nav".to_string(),
            threshold: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Elements carrying any of these classes fade in when scrolled into view.
    pub classes: Vec<String>,
    /// Pixels trimmed off the bottom of the viewport before intersecting.
    pub bottom_margin: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            classes: ["project-card", "skill-category", "education-card", "certification-card"]
                .into_iter()
                .map(String::from)
                .collect(),
            bottom_margin: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Class of the element the animation takes over.
    pub title_class: String,
    pub texts: Vec<String>,
    /// Delay between typed characters. Deleting runs at twice this speed.
    #[serde(rename = "speed_ms", deserialize_with = "millis")]
    pub speed: Duration,
    /// Pause once a text is fully typed.
    #[serde(rename = "end_pause_ms", deserialize_with = "millis")]
    pub end_pause: Duration,
    /// Pause before typing the next text.
    #[serde(rename = "start_pause_ms", deserialize_with = "millis")]
    pub start_pause: Duration,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            title_class: "hero-title".to_string(),
            texts: [
                "IT Student | Aspiring ML Engineer",
                "Problem Solver | Data Enthusiast",
                "Future AI Developer",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            speed: Duration::from_millis(100),
            end_pause: Duration::from_millis(2000),
            start_pause: Duration::from_millis(500),
        }
    }
}

fn millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(PageConfig::from_toml("").unwrap(), PageConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = PageConfig::from_toml(
            r#"
            [form]
            submission_delay_ms = 250

            [typing]
            texts = ["Hello"]
            speed_ms = 40

            [theme]
            default = "light"
            "#,
        )
        .unwrap();

        assert_eq!(config.form.submission_delay, Duration::from_millis(250));
        assert_eq!(config.form.success_display, Duration::from_millis(5000));
        assert_eq!(config.form.form_id, "contact-form");
        assert_eq!(config.typing.texts, vec!["Hello".to_string()]);
        assert_eq!(config.typing.speed, Duration::from_millis(40));
        assert_eq!(config.typing.end_pause, Duration::from_millis(2000));
        assert_eq!(config.theme.default, Theme::Light);
        assert_eq!(config.navbar.threshold, 100);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = PageConfig::from_toml("[form]\nsubmission_delay_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = PageConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
