//! System locale and color-scheme detection.

/// Source of the defaults used when no preference has been stored.
pub trait SystemEnvironment {
    /// Preferred language tag, e.g. `de_DE.UTF-8`.
    fn language_tag(&self) -> Option<String>;

    /// `Some(true)` when the system asks for a dark color scheme,
    /// `None` when it expresses no preference.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Reads the process environment.
///
/// Language comes from `LC_ALL`, `LC_MESSAGES`, then `LANG` (first
/// non-empty, ignoring `C`/`POSIX`). Dark mode comes from `COLORFGBG`
/// (`fg;bg`): background colors 0-6 and 8 are dark.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl SystemEnvironment for ProcessEnvironment {
    fn language_tag(&self) -> Option<String> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .into_iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|v| !v.is_empty() && v != "C" && v != "POSIX")
    }

    fn prefers_dark(&self) -> Option<bool> {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| parse_colorfgbg(&v))
    }
}

/// Interpret a `COLORFGBG` value. The background is the last field.
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}
