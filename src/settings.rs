use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};

use crate::persistence::load_json_or_default;

pub const SETTINGS_FILE: &str = "settings.json";
pub const CATAAS_BASE_URL: &str = "https://cataas.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Builds randomized image URLs locally, no listing request.
    #[default]
    Generated,
    /// Lists real cat ids from the Cataas JSON API.
    CataasApi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    pub swipe_threshold: f32,
    pub badge_threshold: f32,
    pub fade_distance: f32,
    pub rotation_factor: f32,
    pub settle_secs: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            swipe_threshold: 100.0,
            badge_threshold: 50.0,
            fade_distance: 300.0,
            rotation_factor: 0.1,
            settle_secs: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeSettings {
    pub batch_size: usize,
    pub settle_delay_ms: u64,
    pub fetch_timeout_secs: u64,
    pub source: SourceKind,
    pub base_url: String,
    pub dark_mode: bool,
    pub gesture: GestureSettings,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            batch_size: 10,
            settle_delay_ms: 300,
            fetch_timeout_secs: 15,
            source: SourceKind::default(),
            base_url: CATAAS_BASE_URL.to_string(),
            dark_mode: false,
            gesture: GestureSettings::default(),
        }
    }
}

impl SwipeSettings {
    pub fn load() -> Self {
        load_json_or_default::<SwipeSettings>(SETTINGS_FILE)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_web_app() {
        let settings = SwipeSettings::default();
        assert_eq!(settings.batch_size, 10);
        assert_eq!(settings.settle_delay(), Duration::from_millis(300));
        assert_eq!(settings.gesture.swipe_threshold, 100.0);
        assert_eq!(settings.gesture.badge_threshold, 50.0);
        assert_eq!(settings.gesture.fade_distance, 300.0);
        assert_eq!(settings.source, SourceKind::Generated);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings: SwipeSettings = serde_json::from_str(
            r#"{ "batch_size": 4, "source": "cataas_api", "gesture": { "swipe_threshold": 80.0 } }"#,
        )
        .unwrap();

        assert_eq!(settings.batch_size, 4);
        assert_eq!(settings.source, SourceKind::CataasApi);
        assert_eq!(settings.gesture.swipe_threshold, 80.0);
        assert_eq!(settings.gesture.rotation_factor, 0.1);
        assert_eq!(settings.base_url, CATAAS_BASE_URL);
    }
}
