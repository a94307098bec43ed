use crate::routes::{normalize_base_path, DEFAULT_BASE_PATH};
use serde::Deserialize;

/// Page-level overrides read from `window.ENV`.
///
/// Both `CARDS_BASE_PATH` and `cards_base_path` are accepted.
#[derive(Deserialize, Default, Debug)]
struct EnvOverrides {
    #[serde(default, rename = "CARDS_BASE_PATH", alias = "cards_base_path")]
    base_path: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub base_path: String,
}

impl PageConfig {
    pub fn new() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let Some(env) = window.get("ENV") else {
            return Self::default();
        };
        if env.is_undefined() || !env.is_object() {
            return Self::default();
        }

        match js_sys::JSON::stringify(&env)
            .ok()
            .and_then(|s| s.as_string())
        {
            Some(json) => Self::from_env_json(&json),
            None => Self::default(),
        }
    }

    /// Unknown keys are ignored; malformed JSON falls back to defaults.
    pub(crate) fn from_env_json(json: &str) -> Self {
        let overrides: EnvOverrides = serde_json::from_str(json).unwrap_or_default();
        match overrides.base_path {
            Some(p) => Self::with_base_path(&p),
            None => Self::default(),
        }
    }

    pub fn with_base_path(base_path: &str) -> Self {
        Self {
            base_path: normalize_base_path(base_path),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::with_base_path(DEFAULT_BASE_PATH)
    }
}
