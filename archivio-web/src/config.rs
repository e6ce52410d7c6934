//! Event settings cache and theme application.
//!
//! Fetched once at boot from the public `/settings` endpoint; the customize
//! panel replaces the whole value after a successful `PUT`. Theme colors
//! land as CSS custom properties on the document root so the stylesheet can
//! reference them without knowing about the settings store.

use archivio_core::settings::EventSettings;

use crate::api::{self, ApiError};

/// Push the four theme colors onto the document root.
pub fn apply_theme(settings: &EventSettings) {
    for (name, value) in settings.theme_properties() {
        crate::dom::set_root_property(name, value);
    }
}

/// Fetch the event settings and apply the theme.
///
/// Falls back to the built-in defaults on any failure so the app always has
/// a usable theme; the failure is logged, not surfaced.
#[allow(clippy::future_not_send)]
pub async fn load_settings() -> EventSettings {
    match api::settings().await {
        Ok(settings) => {
            apply_theme(&settings);
            settings
        }
        Err(e) => {
            log::warn!("settings fetch failed, using defaults: {e}");
            let defaults = EventSettings::default();
            apply_theme(&defaults);
            defaults
        }
    }
}

/// Persist edited settings and re-apply the theme.
///
/// # Errors
/// Propagates the API failure; the local cache is only replaced on success.
#[allow(clippy::future_not_send)]
pub async fn save_settings(
    token: &str,
    settings: &EventSettings,
) -> Result<EventSettings, ApiError> {
    let saved = api::save_settings(token, settings).await?;
    apply_theme(&saved);
    Ok(saved)
}
