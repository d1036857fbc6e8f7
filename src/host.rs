//! Minimal handles onto the host editor's window and view object model. The
//! real host owns these objects; this module gives the scope adapters a
//! narrow surface to call into, plus concrete implementations good enough
//! for embedding and tests.

use serde_json::Value;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::Result;
use crate::settings::Settings;

/// Settings store name used when a view has no syntax assigned. Matches the
/// syntax every host view carries by default.
pub const PLAIN_TEXT: &str = "Plain Text";

/// A window's project data: an arbitrary JSON object the host associates
/// with the window, persisted only when the window has a project file.
pub trait WindowStore {
    /// The window's project data, or `None` if the window has none yet.
    fn project_data(&self) -> Option<Value>;

    /// Replace the window's project data, persisting it if this window is
    /// backed by a project file.
    fn set_project_data(&self, data: Value) -> Result<()>;
}

/// A window handle holding project data in memory and, optionally, mirroring
/// it to a project file on every change.
pub struct ProjectWindow {
    project_file: Option<PathBuf>,
    data: RefCell<Option<Value>>,
}

impl ProjectWindow {
    /// A window with no project file; project data lives only as long as the
    /// window does.
    pub fn new() -> Self {
        Self {
            project_file: None,
            data: RefCell::new(None),
        }
    }

    /// A window backed by a project file. Existing file contents become the
    /// initial project data; an unreadable or unparseable file is treated as
    /// no data.
    pub fn with_project_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let data = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!("failed to parse {}: {}, ignoring", path.display(), e);
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            project_file: Some(path),
            data: RefCell::new(data),
        }
    }

    pub fn has_project_file(&self) -> bool {
        self.project_file.is_some()
    }
}

impl Default for ProjectWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowStore for ProjectWindow {
    fn project_data(&self) -> Option<Value> {
        self.data.borrow().clone()
    }

    fn set_project_data(&self, data: Value) -> Result<()> {
        if let Some(path) = &self.project_file {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(&data)?;
            fs::write(path, json)?;
        }

        *self.data.borrow_mut() = Some(data);
        Ok(())
    }
}

/// A view handle: per-view settings plus the syntax definition currently
/// active in the view.
pub struct View {
    settings: Rc<RefCell<Settings>>,
    syntax_path: Option<PathBuf>,
}

impl View {
    pub fn new() -> Self {
        Self {
            settings: Rc::new(RefCell::new(Settings::new())),
            syntax_path: None,
        }
    }

    /// A view whose active syntax is the definition at `path`.
    pub fn with_syntax(path: impl Into<PathBuf>) -> Self {
        Self {
            settings: Rc::new(RefCell::new(Settings::new())),
            syntax_path: Some(path.into()),
        }
    }

    /// The view's own settings map; shared, so handles stay in sync.
    pub fn settings(&self) -> Rc<RefCell<Settings>> {
        Rc::clone(&self.settings)
    }

    /// Name of the settings store for the view's active syntax: the syntax
    /// file's base name without its extension.
    pub fn syntax_settings_name(&self) -> String {
        self.syntax_path
            .as_deref()
            .and_then(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| PLAIN_TEXT.to_string())
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}
