//! The command surface the host dispatches into: one action-parameterized
//! command per scope, plus the rewriter that redirects the host's built-in
//! font-size commands onto the global one.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::host::{View, WindowStore};
use crate::scopes::{GlobalScope, SyntaxScope, ViewScope, WindowScope};
use crate::settings::SettingsHost;
use crate::zoom::zoom_font;

/// Names of this crate's commands, as registered with the host.
pub const GLOBAL_FONT_SIZE: &str = "global_font_size";
pub const WINDOW_FONT_SIZE: &str = "window_font_size";
pub const SYNTAX_FONT_SIZE: &str = "syntax_font_size";
pub const VIEW_FONT_SIZE: &str = "view_font_size";

/// The host's built-in commands that get rewritten.
pub const INCREASE_FONT_SIZE: &str = "increase_font_size";
pub const DECREASE_FONT_SIZE: &str = "decrease_font_size";
pub const RESET_FONT_SIZE: &str = "reset_font_size";

/// Arguments of every font-size command. The host hands these over as a
/// JSON object; a missing `action` means increase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontArgs {
    #[serde(default = "default_action")]
    pub action: String,
}

fn default_action() -> String {
    "increase".to_string()
}

impl Default for FontArgs {
    fn default() -> Self {
        Self {
            action: default_action(),
        }
    }
}

impl FontArgs {
    pub fn new(action: &str) -> Self {
        Self {
            action: action.to_string(),
        }
    }
}

/// A command substitution returned by the rewriter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub command: &'static str,
    pub args: FontArgs,
}

/// Intercept a window-level command. The host's three built-in font-size
/// commands are redirected to [`global_font_size`] with the matching action;
/// everything else passes through untouched.
pub fn rewrite_window_command(command: &str) -> Option<Rewrite> {
    let action = match command {
        INCREASE_FONT_SIZE => "increase",
        DECREASE_FONT_SIZE => "decrease",
        RESET_FONT_SIZE => "reset",
        _ => return None,
    };

    Some(Rewrite {
        command: GLOBAL_FONT_SIZE,
        args: FontArgs::new(action),
    })
}

/// Adjust the application-wide font size in the global preferences.
pub fn global_font_size(host: &dyn SettingsHost, args: &FontArgs) -> Result<()> {
    zoom_font(&mut GlobalScope::new(host), host, &args.action)
}

/// Adjust the font size in the project data of the given window.
pub fn window_font_size(
    host: &dyn SettingsHost,
    window: &dyn WindowStore,
    args: &FontArgs,
) -> Result<()> {
    zoom_font(&mut WindowScope::new(host, window), host, &args.action)
}

/// Adjust the font size in the settings of the syntax active in the given
/// view.
pub fn syntax_font_size(host: &dyn SettingsHost, view: &View, args: &FontArgs) -> Result<()> {
    zoom_font(&mut SyntaxScope::new(host, view), host, &args.action)
}

/// Adjust the font size of the given view alone.
pub fn view_font_size(host: &dyn SettingsHost, view: &View, args: &FontArgs) -> Result<()> {
    zoom_font(&mut ViewScope::new(host, view), host, &args.action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::MAX_FONT_SIZE;
    use crate::host::ProjectWindow;
    use crate::settings::{FONT_SIZE, MemoryHost, PREFERENCES};
    use serde_json::json;

    fn global_size(host: &MemoryHost) -> u32 {
        host.load_settings(PREFERENCES).borrow().get_u32(FONT_SIZE, 0)
    }

    #[test]
    fn test_args_action_defaults_to_increase() {
        let args: FontArgs = serde_json::from_str("{}").unwrap();
        assert_eq!(args.action, "increase");

        let args: FontArgs = serde_json::from_value(json!({"action": "reset"})).unwrap();
        assert_eq!(args.action, "reset");
    }

    #[test]
    fn test_rewrite_builtin_commands() {
        for (command, action) in [
            (INCREASE_FONT_SIZE, "increase"),
            (DECREASE_FONT_SIZE, "decrease"),
            (RESET_FONT_SIZE, "reset"),
        ] {
            let rewrite = rewrite_window_command(command).unwrap();
            assert_eq!(rewrite.command, GLOBAL_FONT_SIZE);
            assert_eq!(rewrite.args, FontArgs::new(action));
        }
    }

    #[test]
    fn test_rewrite_passes_other_commands_through() {
        assert_eq!(rewrite_window_command("save_all"), None);
        assert_eq!(rewrite_window_command(""), None);
    }

    #[test]
    fn test_global_increase_from_small_size() {
        let host = MemoryHost::new();
        host.load_settings(PREFERENCES)
            .borrow_mut()
            .set(FONT_SIZE, 20u32);

        global_font_size(&host, &FontArgs::default()).unwrap();
        assert_eq!(global_size(&host), 21);
    }

    #[test]
    fn test_global_increase_from_large_size() {
        let host = MemoryHost::new();
        host.load_settings(PREFERENCES)
            .borrow_mut()
            .set(FONT_SIZE, 36u32);

        global_font_size(&host, &FontArgs::new("increase")).unwrap();
        assert_eq!(global_size(&host), 40);
    }

    #[test]
    fn test_global_increase_clamps_at_max() {
        let host = MemoryHost::new();
        let prefs = host.load_settings(PREFERENCES);
        prefs.borrow_mut().set(FONT_SIZE, 126u32);
        prefs.borrow_mut().set(MAX_FONT_SIZE, 128u32);

        global_font_size(&host, &FontArgs::new("increase")).unwrap();
        assert_eq!(global_size(&host), 128);
    }

    #[test]
    fn test_global_reset_lands_on_default() {
        let host = MemoryHost::new();
        host.load_settings(PREFERENCES)
            .borrow_mut()
            .set(FONT_SIZE, 33u32);

        global_font_size(&host, &FontArgs::new("reset")).unwrap();
        assert_eq!(global_size(&host), 10);
    }

    #[test]
    fn test_window_increase_without_existing_settings() {
        let host = MemoryHost::new();
        let window = ProjectWindow::new();

        window_font_size(&host, &window, &FontArgs::new("increase")).unwrap();

        // Resolved default 10, one step up
        assert_eq!(
            window.project_data(),
            Some(json!({"settings": {"font_size": 11}}))
        );
    }

    #[test]
    fn test_window_reset_deletes_value() {
        let host = MemoryHost::new();
        let window = ProjectWindow::new();

        window_font_size(&host, &window, &FontArgs::new("increase")).unwrap();
        window_font_size(&host, &window, &FontArgs::new("reset")).unwrap();
        assert_eq!(window.project_data(), Some(json!({"settings": {}})));
    }

    #[test]
    fn test_syntax_decrease() {
        let host = MemoryHost::new();
        let view = View::with_syntax("Markdown.sublime-syntax");
        host.load_settings("Markdown")
            .borrow_mut()
            .set(FONT_SIZE, 26u32);

        syntax_font_size(&host, &view, &FontArgs::new("decrease")).unwrap();

        let store = host.load_settings("Markdown");
        assert_eq!(store.borrow().get_u32(FONT_SIZE, 0), 24);
    }

    #[test]
    fn test_view_adjustment_is_isolated() {
        let host = MemoryHost::new();
        let view = View::new();

        view_font_size(&host, &view, &FontArgs::new("increase")).unwrap();

        assert_eq!(view.settings().borrow().get_u32(FONT_SIZE, 0), 11);
        // The global preferences are untouched
        assert!(!host.load_settings(PREFERENCES).borrow().has(FONT_SIZE));
    }
}
