//! Global font-size constraints: the default size used when a scope has no
//! explicit value, and the bounds every adjustment is clamped to.

use crate::settings::{PREFERENCES, SettingsHost};

/// Preference keys holding the constraint values.
pub const DEFAULT_FONT_SIZE: &str = "default_font_size";
pub const MIN_FONT_SIZE: &str = "min_font_size";
pub const MAX_FONT_SIZE: &str = "max_font_size";

/// Fallbacks used when a constraint key is absent from the preferences.
pub const FALLBACK_DEFAULT: u32 = 10;
pub const FALLBACK_MIN: u32 = 8;
pub const FALLBACK_MAX: u32 = 128;

/// The configured constraints on font size, in the order (default, min, max).
///
/// `min <= default <= max` is the user's responsibility; the crate does not
/// enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontConstraints {
    pub default: u32,
    pub min: u32,
    pub max: u32,
}

/// Read the current constraints from the global preferences. Recomputed on
/// every call so that preference edits take effect immediately; never cached.
pub fn resolve(host: &dyn SettingsHost) -> FontConstraints {
    let prefs = host.load_settings(PREFERENCES);
    let prefs = prefs.borrow();

    FontConstraints {
        default: prefs.get_u32(DEFAULT_FONT_SIZE, FALLBACK_DEFAULT),
        min: prefs.get_u32(MIN_FONT_SIZE, FALLBACK_MIN),
        max: prefs.get_u32(MAX_FONT_SIZE, FALLBACK_MAX),
    }
}
