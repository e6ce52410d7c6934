//! Event customization settings served by `GET /settings`.

use serde::{Deserialize, Serialize};

/// Theme and display text, with the built-in defaults filled in for any key
/// the server omits. Colors land in CSS custom properties; text fields are
/// substituted straight into the views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSettings {
    pub event_name: String,
    pub event_logo_url: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_description: String,
    pub chat_placeholder: String,
    pub oracle_name: String,
    pub background_image_url: Option<String>,
    pub event_window_start: Option<String>,
    pub event_window_end: Option<String>,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            event_name: "L'Archivio Maledetto".into(),
            event_logo_url: None,
            primary_color: "#8a0000".into(),
            secondary_color: "#000033".into(),
            accent_color: "#b8860b".into(),
            background_color: "#050505".into(),
            hero_title: "Svela i Segreti".into(),
            hero_subtitle: "dell'Antico Sapere".into(),
            hero_description: "Benvenuto nell'Archivio Maledetto. Qui potrai porre le tue domande \
                               e ricevere risposte dai custodi del sapere arcano."
                .into(),
            chat_placeholder: "Poni la tua domanda all'Oracolo...".into(),
            oracle_name: "L'Oracolo".into(),
            background_image_url: None,
            event_window_start: None,
            event_window_end: None,
        }
    }
}

impl EventSettings {
    /// Namespace for device-local aid values, derived from the event time
    /// window so entries from different events never collide. Missing bounds
    /// collapse to the empty string, giving one shared fallback namespace.
    #[must_use]
    pub fn window_key(&self) -> String {
        format!(
            "{}|{}",
            self.event_window_start.as_deref().unwrap_or(""),
            self.event_window_end.as_deref().unwrap_or("")
        )
    }

    /// `(custom property, value)` pairs for the document root.
    #[must_use]
    pub fn theme_properties(&self) -> [(&'static str, &str); 4] {
        [
            ("--theme-primary", self.primary_color.as_str()),
            ("--theme-secondary", self.secondary_color.as_str()),
            ("--theme-accent", self.accent_color.as_str()),
            ("--theme-background", self.background_color.as_str()),
        ]
    }
}
