//! Hotkey system
//!
//! Centralized hotkey management for the portfolio app.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's hotkey handler

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
/// This decouples "what key was pressed" from "what should happen".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Switch between the light and dark theme.
    ToggleTheme,
    /// Cycle the UI language.
    CycleLanguage,
    /// Zoom in on the career timeline.
    TimelineZoomIn,
    /// Zoom out on the career timeline.
    TimelineZoomOut,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether the timeline is on screen (Experience page active).
    pub timeline_visible: bool,
    /// Whether an input field has focus (should suppress most hotkeys).
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
pub fn handle_hotkey(
    key: &Key,
    _shift: bool,
    ctrl: bool,
    _alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }
    // Leave chorded input alone; all bindings here are bare keys.
    if ctrl || meta {
        return HotkeyResult::NoMatch;
    }

    match key {
        Key::Character(c) if c == "t" || c == "T" => {
            return HotkeyResult::Action(HotkeyAction::ToggleTheme);
        }
        Key::Character(c) if c == "l" || c == "L" => {
            return HotkeyResult::Action(HotkeyAction::CycleLanguage);
        }
        _ => {}
    }

    if context.timeline_visible {
        match key {
            Key::Character(c) if c == "+" => {
                return HotkeyResult::Action(HotkeyAction::TimelineZoomIn);
            }
            Key::Character(c) if c == "-" => {
                return HotkeyResult::Action(HotkeyAction::TimelineZoomOut);
            }
            _ => {}
        }
    }

    HotkeyResult::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline_ctx() -> HotkeyContext {
        HotkeyContext {
            timeline_visible: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_t_toggles_theme() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("t".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::ToggleTheme)));
    }

    #[test]
    fn test_l_cycles_language() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("L".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::CycleLanguage)));
    }

    #[test]
    fn test_plus_zooms_in_when_timeline_visible() {
        let result = handle_hotkey(
            &Key::Character("+".to_string()),
            false,
            false,
            false,
            false,
            &timeline_ctx(),
        );
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::TimelineZoomIn)));
    }

    #[test]
    fn test_minus_is_ignored_off_the_timeline_page() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("-".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::NoMatch));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext {
            input_focused: true,
            ..Default::default()
        };
        let result = handle_hotkey(&Key::Character("t".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }

    #[test]
    fn test_chorded_keys_pass_through() {
        let ctx = timeline_ctx();
        let result = handle_hotkey(&Key::Character("t".to_string()), false, true, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::NoMatch));
    }
}
