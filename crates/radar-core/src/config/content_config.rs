//! Localized content configuration.

use serde::{Deserialize, Serialize};

use crate::types::Locale;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding `<locale>.toml` bundles that replace the built-in ones.
    pub dir: Option<String>,
    /// Locale used when a bundle is missing or broken. Default: "en".
    pub fallback_locale: Option<String>,
}

impl ContentConfig {
    /// Returns the fallback locale, defaulting to English for unknown codes.
    pub fn effective_fallback_locale(&self) -> Locale {
        self.fallback_locale
            .as_deref()
            .and_then(Locale::from_code)
            .unwrap_or_default()
    }
}
