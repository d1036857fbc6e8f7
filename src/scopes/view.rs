use crate::constraints;
use crate::error::Result;
use crate::host::View;
use crate::scopes::FontSizeScope;
use crate::settings::{FONT_SIZE, SettingsHost};

/// The font size of a single view, stored in the view's own settings map.
/// No explicit persistence: the host snapshots view state itself.
pub struct ViewScope<'a> {
    host: &'a dyn SettingsHost,
    view: &'a View,
}

impl<'a> ViewScope<'a> {
    pub fn new(host: &'a dyn SettingsHost, view: &'a View) -> Self {
        Self { host, view }
    }
}

impl FontSizeScope for ViewScope<'_> {
    fn get_font_size(&self) -> u32 {
        let default = constraints::resolve(self.host).default;
        let settings = self.view.settings();
        let size = settings.borrow().get_u32(FONT_SIZE, default);
        size
    }

    fn set_font_size(&mut self, size: u32) -> Result<()> {
        self.view.settings().borrow_mut().set(FONT_SIZE, size);
        Ok(())
    }

    fn erase_font_size(&mut self) -> Result<()> {
        self.view.settings().borrow_mut().erase(FONT_SIZE);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryHost;

    #[test]
    fn test_set_touches_only_the_view() {
        let host = MemoryHost::new();
        let view = View::new();
        let other = View::new();

        ViewScope::new(&host, &view).set_font_size(19).unwrap();

        assert_eq!(ViewScope::new(&host, &view).get_font_size(), 19);
        assert_eq!(ViewScope::new(&host, &other).get_font_size(), 10);
        // Nothing is saved through the host for view changes
        assert!(host.saves().is_empty());
    }

    #[test]
    fn test_erase_falls_back_to_default() {
        let host = MemoryHost::new();
        let view = View::new();
        let mut scope = ViewScope::new(&host, &view);

        scope.set_font_size(19).unwrap();
        scope.erase_font_size().unwrap();

        assert!(!view.settings().borrow().has(FONT_SIZE));
        assert_eq!(scope.get_font_size(), 10);
    }
}
