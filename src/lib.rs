//! Scoped font-size adjustment for text editor integrations.
//!
//! The host editor's built-in font-size commands act on one global value.
//! This crate replaces them with commands that adjust the font size at four
//! scopes: the whole application, one window (via its project data), every
//! view sharing a syntax, or a single view. The host's services are passed
//! in as handles ([`settings::SettingsHost`], [`host::WindowStore`],
//! [`host::View`]), so the crate runs against a real host or entirely in
//! memory.
//!
//! # Structure
//!
//! - `settings` - named key-value stores and their hosts
//! - `constraints` - the (default, min, max) bounds on any adjustment
//! - `zoom` - step tables and action dispatch
//! - `scopes` - one adapter per place a font size can live
//! - `commands` - the host-facing command surface and command rewriter
//! - `host` - window and view handles
//! - `error` - error types

pub mod commands;
pub mod constraints;
pub mod error;
pub mod host;
pub mod scopes;
pub mod settings;
pub mod zoom;

// Re-exports for convenient external access
pub use commands::{FontArgs, Rewrite, rewrite_window_command};
pub use constraints::FontConstraints;
pub use error::{Result, ZoomError};
pub use host::{ProjectWindow, View, WindowStore};
pub use scopes::FontSizeScope;
pub use settings::{DiskHost, MemoryHost, Settings, SettingsHost};
pub use zoom::FontAction;

use constraints::{
    DEFAULT_FONT_SIZE, FALLBACK_DEFAULT, FALLBACK_MAX, FALLBACK_MIN, MAX_FONT_SIZE, MIN_FONT_SIZE,
};
use settings::{FONT_SIZE, PREFERENCES};

/// Load hook. Seeds the global preferences with the constraint settings the
/// rest of the crate reads, without touching any that the user already has:
/// the default font size starts from whatever the global font size is right
/// now, the bounds from the stock limits.
///
/// Saves the preferences once at the end, and only if something was added,
/// so running this on every load is harmless.
pub fn plugin_loaded(host: &dyn SettingsHost) -> Result<()> {
    let prefs = host.load_settings(PREFERENCES);
    let current = prefs.borrow().get_u32(FONT_SIZE, FALLBACK_DEFAULT);

    let defaults = [
        (DEFAULT_FONT_SIZE, current),
        (MIN_FONT_SIZE, FALLBACK_MIN),
        (MAX_FONT_SIZE, FALLBACK_MAX),
    ];

    let mut updated = false;
    {
        let mut prefs = prefs.borrow_mut();
        for (name, default) in defaults {
            if !prefs.has(name) {
                prefs.set(name, default);
                updated = true;
            }
        }
    }

    if updated {
        host.save_settings(PREFERENCES)?;
    }

    Ok(())
}
