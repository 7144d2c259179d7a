use crate::flow::{NavigationPolicy, Phase, UnknownPhase, COOLDOWN_MS, DEBOUNCE_WINDOW_MS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Id of the `<script type="application/json">` element a host page can use
/// to configure the lessons.
pub const CONFIG_ELEMENT_ID: &str = "game-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Phase(#[from] UnknownPhase),

    #[error("unknown navigation mode '{0}' (expected 'guided' or 'free')")]
    Navigation(String),

    #[error("{name} must be a non-negative number of milliseconds, got {value}")]
    Timing { name: &'static str, value: f64 },
}

/// Host-supplied settings. Every field is optional in the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Resume at this phase instead of the hook.
    #[serde(default)]
    pub initial_phase: Option<Phase>,
    #[serde(default)]
    pub navigation: NavigationPolicy,
    #[serde(default = "default_debounce_window_ms")]
    pub debounce_window_ms: f64,
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: f64,
    #[serde(default = "default_true")]
    pub audio: bool,
    #[serde(default = "default_true")]
    pub haptics: bool,
}

fn default_debounce_window_ms() -> f64 {
    DEBOUNCE_WINDOW_MS
}

fn default_cooldown_ms() -> f64 {
    COOLDOWN_MS
}

fn default_true() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_phase: None,
            navigation: NavigationPolicy::Guided,
            debounce_window_ms: DEBOUNCE_WINDOW_MS,
            cooldown_ms: COOLDOWN_MS,
            audio: true,
            haptics: true,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("debounce_window_ms", self.debounce_window_ms),
            ("cooldown_ms", self.cooldown_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Timing { name, value });
            }
        }
        Ok(())
    }

    /// Apply `?phase=` and `?nav=` query overrides.
    pub fn with_overrides(mut self, phase: Option<&str>, nav: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(phase) = phase {
            self.initial_phase = Some(phase.parse()?);
        }
        if let Some(nav) = nav {
            self.navigation = match nav.trim().to_ascii_lowercase().as_str() {
                "guided" => NavigationPolicy::Guided,
                "free" => NavigationPolicy::Free,
                _ => return Err(ConfigError::Navigation(nav.to_string())),
            };
        }
        Ok(self)
    }
}

/// Read the embedded config element, if the page has one.
fn config_element_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Load the page's config.
///
/// Falls back to defaults when the element is missing (the common case, so no
/// warning) or when its JSON is malformed (logged).
pub fn load_config() -> GameConfig {
    match config_element_text() {
        Some(json) if !json.trim().is_empty() => GameConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring #{CONFIG_ELEMENT_ID} (using defaults): {e}");
            GameConfig::default()
        }),
        _ => GameConfig::default(),
    }
}
