//! Scope adapters: one per place a font size can live. Each adapter knows
//! its scope's storage and persistence quirks and nothing else; the shared
//! arithmetic lives in [`crate::zoom`].

mod global;
mod syntax;
mod view;
mod window;

pub use global::GlobalScope;
pub use syntax::SyntaxScope;
pub use view::ViewScope;
pub use window::WindowScope;

use crate::error::Result;

/// What the zoom engine needs from any place a font size is stored.
///
/// The four scopes share this surface but not their reset behavior: the
/// global scope's erase pins the size to the resolved default, while the
/// window, syntax and view scopes remove the value entirely so it falls
/// back to a higher-priority scope.
pub trait FontSizeScope {
    /// The current font size in this scope, or the resolved default when the
    /// scope has no explicit value.
    fn get_font_size(&self) -> u32;

    /// Write a new font size into this scope, persisting it where the scope
    /// has durable backing.
    fn set_font_size(&mut self, size: u32) -> Result<()>;

    /// Remove or reset this scope's font size, per the scope's own
    /// semantics.
    fn erase_font_size(&mut self) -> Result<()>;
}
