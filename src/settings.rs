//! Named key-value settings stores, modeled after the host editor's
//! preferences API: stores are loaded by name, mutated in memory, and
//! persisted with an explicit save call.

use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::Result;

/// Name of the store holding the global preferences.
pub const PREFERENCES: &str = "Preferences";

/// Key under which a font size is stored, in every scope.
pub const FONT_SIZE: &str = "font_size";

/// A single named settings store: a flat JSON object.
///
/// Reads are defensive; a missing or wrongly-typed key falls back to the
/// value the caller supplies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    values: Map<String, Value>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing JSON object as a settings store.
    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Get a numeric setting, falling back if the key is absent or not a
    /// number.
    pub fn get_u32(&self, key: &str, fallback: u32) -> u32 {
        self.values
            .get(key)
            .and_then(Value::as_u64)
            .map(|v| v as u32)
            .unwrap_or(fallback)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn erase(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// The underlying JSON object, for serialization.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

/// Access to the host's named settings stores.
///
/// Loading the same name twice returns the same shared store, so mutations
/// made through one handle are visible through every other. Saving is a
/// separate, explicit step; stores without durable backing treat it as a
/// no-op.
pub trait SettingsHost {
    fn load_settings(&self, name: &str) -> Rc<RefCell<Settings>>;

    fn save_settings(&self, name: &str) -> Result<()>;
}

/// File-backed settings host. Each named store persists as `<name>.json`
/// under the base directory.
pub struct DiskHost {
    base_dir: PathBuf,
    stores: RefCell<HashMap<String, Rc<RefCell<Settings>>>>,
}

impl DiskHost {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            stores: RefCell::new(HashMap::new()),
        }
    }

    /// Default store location (cross-platform)
    pub fn default_location() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("font-zoom");
        path
    }

    fn store_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", name))
    }

    fn read_store(&self, name: &str) -> Settings {
        let path = self.store_path(name);

        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Map<String, Value>>(&contents) {
                Ok(values) => Settings::from_map(values),
                Err(e) => {
                    log::warn!("failed to parse {}: {}, treating as empty", path.display(), e);
                    Settings::new()
                }
            },
            // File doesn't exist yet; start empty
            Err(_) => Settings::new(),
        }
    }
}

impl SettingsHost for DiskHost {
    fn load_settings(&self, name: &str) -> Rc<RefCell<Settings>> {
        if let Some(store) = self.stores.borrow().get(name) {
            return Rc::clone(store);
        }

        let store = Rc::new(RefCell::new(self.read_store(name)));
        self.stores
            .borrow_mut()
            .insert(name.to_string(), Rc::clone(&store));
        store
    }

    fn save_settings(&self, name: &str) -> Result<()> {
        let store = self.load_settings(name);
        let path = self.store_path(name);

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(store.borrow().as_map())?;
        fs::write(&path, json)?;

        Ok(())
    }
}

/// In-memory settings host for tests and hosts without their own settings
/// files. Saves are recorded but nothing is written anywhere.
#[derive(Default)]
pub struct MemoryHost {
    stores: RefCell<HashMap<String, Rc<RefCell<Settings>>>>,
    saves: RefCell<Vec<String>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names passed to `save_settings`, in call order.
    pub fn saves(&self) -> Vec<String> {
        self.saves.borrow().clone()
    }
}

impl SettingsHost for MemoryHost {
    fn load_settings(&self, name: &str) -> Rc<RefCell<Settings>> {
        Rc::clone(
            self.stores
                .borrow_mut()
                .entry(name.to_string())
                .or_default(),
        )
    }

    fn save_settings(&self, name: &str) -> Result<()> {
        self.saves.borrow_mut().push(name.to_string());
        Ok(())
    }
}
