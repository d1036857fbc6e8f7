//! Step-table arithmetic shared by every scope, and the dispatcher that maps
//! a host-supplied action string onto a scope adapter.

use crate::constraints;
use crate::error::Result;
use crate::scopes::FontSizeScope;
use crate::settings::SettingsHost;

/// The adjustments a font-size command can be asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontAction {
    Increase,
    Decrease,
    Reset,
}

impl FontAction {
    /// Parse the action argument of a host command. Unknown strings yield
    /// `None`; the caller decides how to report that.
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "increase" => Some(Self::Increase),
            "decrease" => Some(Self::Decrease),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

/// Compute the next size up from `current`, clamped to `max`.
///
/// Larger fonts step in larger increments. The tiers are deliberately not
/// mirror images of the decrease tiers; both tables are long-standing
/// behavior and must stay as they are.
pub fn compute_increase(current: u32, max: u32) -> u32 {
    let next = if current >= 36 {
        current + 4
    } else if current >= 24 {
        current + 2
    } else {
        current + 1
    };

    next.min(max)
}

/// Compute the next size down from `current`, clamped to `min`.
pub fn compute_decrease(current: u32, min: u32) -> u32 {
    let next = if current >= 40 {
        current - 4
    } else if current >= 26 {
        current - 2
    } else {
        current.saturating_sub(1)
    };

    next.max(min)
}

/// Carry out `action` against the given scope: read the current size, apply
/// the step table under the current global constraints, and write the result
/// back. A reset defers to the scope's own erase semantics.
///
/// An unrecognized action logs a diagnostic and mutates nothing.
pub fn zoom_font(scope: &mut dyn FontSizeScope, host: &dyn SettingsHost, action: &str) -> Result<()> {
    let constraints = constraints::resolve(host);

    match FontAction::parse(action) {
        Some(FontAction::Increase) => {
            let next = compute_increase(scope.get_font_size(), constraints.max);
            scope.set_font_size(next)
        }
        Some(FontAction::Decrease) => {
            let next = compute_decrease(scope.get_font_size(), constraints.min);
            scope.set_font_size(next)
        }
        Some(FontAction::Reset) => scope.erase_font_size(),
        None => {
            log::error!("unknown font action '{}' provided", action);
            Ok(())
        }
    }
}
