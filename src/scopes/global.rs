use crate::constraints;
use crate::error::Result;
use crate::scopes::FontSizeScope;
use crate::settings::{FONT_SIZE, PREFERENCES, SettingsHost};

/// The application-wide font size, stored in the global preferences and
/// persisted on every change.
///
/// Unlike the other scopes, erasing here does not delete the key: the size
/// is pinned to the configured default instead, so a reset always lands on
/// a predictable value rather than whatever the host would fall back to.
pub struct GlobalScope<'a> {
    host: &'a dyn SettingsHost,
}

impl<'a> GlobalScope<'a> {
    pub fn new(host: &'a dyn SettingsHost) -> Self {
        Self { host }
    }
}

impl FontSizeScope for GlobalScope<'_> {
    fn get_font_size(&self) -> u32 {
        let default = constraints::resolve(self.host).default;
        let prefs = self.host.load_settings(PREFERENCES);
        let size = prefs.borrow().get_u32(FONT_SIZE, default);
        size
    }

    fn set_font_size(&mut self, size: u32) -> Result<()> {
        let prefs = self.host.load_settings(PREFERENCES);
        prefs.borrow_mut().set(FONT_SIZE, size);
        self.host.save_settings(PREFERENCES)
    }

    fn erase_font_size(&mut self) -> Result<()> {
        let default = constraints::resolve(self.host).default;
        self.set_font_size(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::DEFAULT_FONT_SIZE;
    use crate::settings::MemoryHost;

    #[test]
    fn test_get_falls_back_to_default() {
        let host = MemoryHost::new();
        let prefs = host.load_settings(PREFERENCES);
        prefs.borrow_mut().set(DEFAULT_FONT_SIZE, 14u32);

        let scope = GlobalScope::new(&host);
        assert_eq!(scope.get_font_size(), 14);
    }

    #[test]
    fn test_set_persists_preferences() {
        let host = MemoryHost::new();
        let mut scope = GlobalScope::new(&host);
        scope.set_font_size(20).unwrap();

        let prefs = host.load_settings(PREFERENCES);
        assert_eq!(prefs.borrow().get_u32(FONT_SIZE, 10), 20);
        assert_eq!(host.saves(), vec![PREFERENCES.to_string()]);
    }

    #[test]
    fn test_erase_pins_to_default() {
        let host = MemoryHost::new();
        let prefs = host.load_settings(PREFERENCES);
        prefs.borrow_mut().set(DEFAULT_FONT_SIZE, 12u32);
        prefs.borrow_mut().set(FONT_SIZE, 30u32);

        let mut scope = GlobalScope::new(&host);
        scope.erase_font_size().unwrap();

        // The key stays present, holding the default
        let prefs = host.load_settings(PREFERENCES);
        assert!(prefs.borrow().has(FONT_SIZE));
        assert_eq!(prefs.borrow().get_u32(FONT_SIZE, 0), 12);
    }

    #[test]
    fn test_erase_is_idempotent() {
        let host = MemoryHost::new();
        let prefs = host.load_settings(PREFERENCES);
        prefs.borrow_mut().set(FONT_SIZE, 30u32);

        let mut scope = GlobalScope::new(&host);
        scope.erase_font_size().unwrap();
        let once = scope.get_font_size();
        scope.erase_font_size().unwrap();
        assert_eq!(scope.get_font_size(), once);
    }
}
