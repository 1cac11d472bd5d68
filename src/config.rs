//! Viewer settings persisted in `localStorage`.

use serde::{Deserialize, Serialize};

pub const SETTINGS_KEY: &str = "iv_settings";
pub const LAST_IMAGE_URL_KEY: &str = "iv_last_image_url";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Zoom change per wheel notch.
    pub wheel_zoom_step: f64,
    /// Zoom change per +/- button press.
    pub button_zoom_step: f64,
    /// Canvas background colour.
    pub background: String,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            wheel_zoom_step: 0.1,
            button_zoom_step: 0.2,
            background: "#f8f9fa".into(),
        }
    }
}

impl ViewerSettings {
    /// Parses a stored JSON blob. Malformed input or non-positive steps
    /// fall back to the defaults.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<ViewerSettings>(raw) {
            Ok(s) => s.sanitized(),
            Err(err) => {
                log::warn!("ignoring stored settings: {err}");
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.wheel_zoom_step > 0.0) {
            self.wheel_zoom_step = defaults.wheel_zoom_step;
        }
        if !(self.button_zoom_step > 0.0) {
            self.button_zoom_step = defaults.button_zoom_step;
        }
        if self.background.trim().is_empty() {
            self.background = defaults.background;
        }
        self
    }

    pub fn load() -> Self {
        if let Some(store) = local_storage() {
            if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                return Self::from_json(&raw);
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(store) = local_storage() {
            if let Ok(s) = serde_json::to_string(self) {
                let _ = store.set_item(SETTINGS_KEY, &s);
            }
        }
    }
}

pub fn load_last_image_url() -> Option<String> {
    local_storage()?
        .get_item(LAST_IMAGE_URL_KEY)
        .ok()
        .flatten()
        .filter(|url| !url.trim().is_empty())
}

pub fn save_last_image_url(url: Option<&str>) {
    if let Some(store) = local_storage() {
        let _ = match url {
            Some(url) => store.set_item(LAST_IMAGE_URL_KEY, url),
            None => store.remove_item(LAST_IMAGE_URL_KEY),
        };
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
