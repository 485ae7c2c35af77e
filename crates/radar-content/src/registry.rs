//! Locale → bundle lookup.
//!
//! Bundles are embedded at compile time and may be replaced per locale by
//! `<content.dir>/<locale>.toml`. A locale whose bundle is missing or fails
//! validation resolves to the fallback locale instead; only a broken
//! fallback bundle is an error.

use std::path::Path;

use rustc_hash::FxHashMap;

use radar_core::config::ContentConfig;
use radar_core::errors::ContentError;
use radar_core::Locale;

use crate::bundle::ContentBundle;

/// Embedded bundle text for `locale`, with a name used in error messages.
pub(crate) fn builtin_source(locale: Locale) -> (&'static str, &'static str) {
    match locale {
        Locale::De => ("builtin:de.toml", include_str!("../content/de.toml")),
        Locale::En => ("builtin:en.toml", include_str!("../content/en.toml")),
    }
}

/// Result of a lookup: the bundle to use and, when it belongs to another
/// locale, why.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedBundle<'a> {
    pub requested: Locale,
    pub bundle: &'a ContentBundle,
    pub fallback_reason: Option<&'a str>,
}

impl ResolvedBundle<'_> {
    pub fn is_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct ContentRegistry {
    bundles: FxHashMap<Locale, ContentBundle>,
    problems: FxHashMap<Locale, String>,
    fallback: Locale,
}

impl ContentRegistry {
    /// Registry over the embedded bundles only.
    pub fn builtin() -> Self {
        Self::from_sources(
            Locale::default(),
            Locale::ALL.into_iter().map(|locale| {
                let (name, text) = builtin_source(locale);
                (locale, name.to_string(), text.to_string())
            }),
        )
    }

    /// Registry honoring `content.dir` overrides and `content.fallback_locale`.
    pub fn load(config: &ContentConfig) -> Result<Self, ContentError> {
        let fallback = config.effective_fallback_locale();
        let Some(dir) = config.dir.as_deref() else {
            let mut registry = Self::builtin();
            registry.fallback = fallback;
            return Ok(registry);
        };

        let dir = Path::new(dir);
        if !dir.is_dir() {
            return Err(ContentError::Io {
                path: dir.display().to_string(),
                message: "content directory does not exist".to_string(),
            });
        }

        let mut sources = Vec::with_capacity(Locale::ALL.len());
        let mut problems = FxHashMap::default();
        for locale in Locale::ALL {
            let path = dir.join(format!("{}.toml", locale.code()));
            if !path.exists() {
                let (name, text) = builtin_source(locale);
                sources.push((locale, name.to_string(), text.to_string()));
                continue;
            }
            match std::fs::read_to_string(&path) {
                Ok(text) => sources.push((locale, path.display().to_string(), text)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "cannot read content override");
                    problems.insert(locale, format!("cannot read {}: {e}", path.display()));
                }
            }
        }

        let mut registry = Self::from_sources(fallback, sources);
        registry.problems.extend(problems);
        Ok(registry)
    }

    /// Parse `(locale, source name, text)` triples. Sources that fail to
    /// parse or validate are recorded as problems, not errors.
    pub fn from_sources<I>(fallback: Locale, sources: I) -> Self
    where
        I: IntoIterator<Item = (Locale, String, String)>,
    {
        let mut bundles = FxHashMap::default();
        let mut problems = FxHashMap::default();
        for (locale, name, text) in sources {
            match ContentBundle::from_toml(locale, &name, &text) {
                Ok(bundle) => {
                    tracing::debug!(locale = %locale, source = %name, "content bundle loaded");
                    bundles.insert(locale, bundle);
                }
                Err(e) => {
                    tracing::warn!(locale = %locale, source = %name, error = %e, "content bundle rejected");
                    problems.insert(locale, e.to_string());
                }
            }
        }
        Self {
            bundles,
            problems,
            fallback,
        }
    }

    pub fn fallback_locale(&self) -> Locale {
        self.fallback
    }

    /// Locales with a valid bundle of their own.
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.bundles.keys().copied().collect();
        locales.sort();
        locales
    }

    /// Why `locale` has no usable bundle, if it was rejected.
    pub fn problem(&self, locale: Locale) -> Option<&str> {
        self.problems.get(&locale).map(String::as_str)
    }

    /// Look up `locale`, falling back when its bundle is unavailable.
    pub fn resolve(&self, locale: Locale) -> Result<ResolvedBundle<'_>, ContentError> {
        if let Some(bundle) = self.bundles.get(&locale) {
            return Ok(ResolvedBundle {
                requested: locale,
                bundle,
                fallback_reason: None,
            });
        }

        let reason = self.problem(locale).unwrap_or("no bundle for locale");
        match self.bundles.get(&self.fallback) {
            Some(bundle) => {
                tracing::warn!(
                    requested = %locale,
                    fallback = %self.fallback,
                    reason,
                    "content unavailable, using fallback locale"
                );
                Ok(ResolvedBundle {
                    requested: locale,
                    bundle,
                    fallback_reason: Some(reason),
                })
            }
            None => Err(ContentError::MissingBundle {
                locale: self.fallback.code().to_string(),
            }),
        }
    }

    pub fn bundle(&self, locale: Locale) -> Result<&ContentBundle, ContentError> {
        self.resolve(locale).map(|resolved| resolved.bundle)
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bundles_all_validate() {
        let registry = ContentRegistry::builtin();
        assert_eq!(registry.locales(), vec![Locale::De, Locale::En]);
        assert!(registry.problem(Locale::De).is_none());
        assert!(registry.problem(Locale::En).is_none());
    }

    #[test]
    fn broken_locale_falls_back() {
        let (name, text) = builtin_source(Locale::En);
        let registry = ContentRegistry::from_sources(
            Locale::En,
            vec![
                (Locale::En, name.to_string(), text.to_string()),
                (Locale::De, "broken.toml".to_string(), "locale = \"de\"".to_string()),
            ],
        );
        let resolved = registry.resolve(Locale::De).unwrap();
        assert!(resolved.is_fallback());
        assert_eq!(resolved.bundle.locale(), Locale::En);
    }

    #[test]
    fn broken_fallback_is_an_error() {
        let registry = ContentRegistry::from_sources(Locale::En, Vec::new());
        assert!(matches!(
            registry.bundle(Locale::De),
            Err(ContentError::MissingBundle { .. })
        ));
    }
}
