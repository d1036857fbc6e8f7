use serde_json::{Map, Value};

use crate::constraints;
use crate::error::Result;
use crate::host::WindowStore;
use crate::scopes::FontSizeScope;
use crate::settings::{FONT_SIZE, SettingsHost};

/// Key in a window's project data under which its settings object lives.
const SETTINGS: &str = "settings";

/// The font size for one window, stored in the `settings` object of the
/// window's project data and so shared by every file open in that window.
///
/// The settings object is read, modified and written back whole on every
/// call. The window handle decides durability: with a project file the data
/// survives the window, without one it is session-only.
pub struct WindowScope<'a> {
    host: &'a dyn SettingsHost,
    window: &'a dyn WindowStore,
}

impl<'a> WindowScope<'a> {
    pub fn new(host: &'a dyn SettingsHost, window: &'a dyn WindowStore) -> Self {
        Self { host, window }
    }

    /// The window's settings object; empty if the window has no project data
    /// or no settings yet.
    fn window_settings(&self) -> Map<String, Value> {
        self.window
            .project_data()
            .and_then(|data| data.get(SETTINGS).cloned())
            .and_then(|settings| match settings {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Replace the window's settings object, leaving the rest of the project
    /// data intact.
    fn set_window_settings(&self, settings: Map<String, Value>) -> Result<()> {
        let mut data = match self.window.project_data() {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        data.insert(SETTINGS.to_string(), Value::Object(settings));

        self.window.set_project_data(Value::Object(data))
    }
}

impl FontSizeScope for WindowScope<'_> {
    fn get_font_size(&self) -> u32 {
        let default = constraints::resolve(self.host).default;

        self.window_settings()
            .get(FONT_SIZE)
            .and_then(Value::as_u64)
            .map(|v| v as u32)
            .unwrap_or(default)
    }

    fn set_font_size(&mut self, size: u32) -> Result<()> {
        let mut settings = self.window_settings();
        settings.insert(FONT_SIZE.to_string(), Value::from(size));

        self.set_window_settings(settings)
    }

    fn erase_font_size(&mut self) -> Result<()> {
        let mut settings = self.window_settings();
        if settings.remove(FONT_SIZE).is_some() {
            self.set_window_settings(settings)?;
        }

        Ok(())
    }
}
