use crate::constraints;
use crate::error::Result;
use crate::host::View;
use crate::scopes::FontSizeScope;
use crate::settings::{FONT_SIZE, SettingsHost};

/// The font size for every view sharing a syntax, stored in the settings
/// store named after the syntax active in the given view and persisted the
/// same way the global preferences are.
pub struct SyntaxScope<'a> {
    host: &'a dyn SettingsHost,
    view: &'a View,
}

impl<'a> SyntaxScope<'a> {
    pub fn new(host: &'a dyn SettingsHost, view: &'a View) -> Self {
        Self { host, view }
    }

    fn store_name(&self) -> String {
        self.view.syntax_settings_name()
    }
}

impl FontSizeScope for SyntaxScope<'_> {
    fn get_font_size(&self) -> u32 {
        let default = constraints::resolve(self.host).default;
        let store = self.host.load_settings(&self.store_name());
        let size = store.borrow().get_u32(FONT_SIZE, default);
        size
    }

    fn set_font_size(&mut self, size: u32) -> Result<()> {
        let name = self.store_name();
        let store = self.host.load_settings(&name);
        store.borrow_mut().set(FONT_SIZE, size);
        self.host.save_settings(&name)
    }

    fn erase_font_size(&mut self) -> Result<()> {
        let name = self.store_name();
        let store = self.host.load_settings(&name);
        store.borrow_mut().erase(FONT_SIZE);
        self.host.save_settings(&name)
    }
}
