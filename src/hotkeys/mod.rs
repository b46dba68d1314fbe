//! Hotkey system
//!
//! Maps key events to semantic timeline actions.
//!
//! # Architecture
//!
//! - **HotkeyAction**: every action a hotkey can trigger
//! - **HotkeyContext**: app state that affects which hotkeys are active
//! - **handle_hotkey()**: dispatch from key event to action
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
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    // ═══════════════════════════════════════════════════════════════
    // Transport
    // ═══════════════════════════════════════════════════════════════
    /// Toggle playback.
    PlayPause,
    /// Jump to the start of the timeline.
    SkipToStart,
    /// Jump to the end of the timeline.
    SkipToEnd,
    /// Increase playback speed by one step.
    SpeedUp,
    /// Decrease playback speed by one step.
    SpeedDown,

    // ═══════════════════════════════════════════════════════════════
    // Zoom
    // ═══════════════════════════════════════════════════════════════
    /// Double the zoom factor.
    ZoomIn,
    /// Halve the zoom factor.
    ZoomOut,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether an input field has focus (should suppress hotkeys)
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
///
/// Modifier-held keys are left to the webview so that system shortcuts keep working.
pub fn handle_hotkey(key: &Key, ctrl: bool, meta: bool, context: &HotkeyContext) -> HotkeyResult {
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }
    if ctrl || meta {
        return HotkeyResult::NoMatch;
    }

    let action = match key {
        Key::Character(c) if c == " " => HotkeyAction::PlayPause,
        // Numpad +/- and the unshifted "=" key all zoom.
        Key::Character(c) if c == "+" || c == "=" => HotkeyAction::ZoomIn,
        Key::Character(c) if c == "-" => HotkeyAction::ZoomOut,
        Key::Character(c) if c == "]" => HotkeyAction::SpeedUp,
        Key::Character(c) if c == "[" => HotkeyAction::SpeedDown,
        Key::Home => HotkeyAction::SkipToStart,
        Key::End => HotkeyAction::SkipToEnd,
        _ => return HotkeyResult::NoMatch,
    };
    HotkeyResult::Action(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_key(c: &str) -> Key {
        Key::Character(c.to_string())
    }

    #[test]
    fn test_space_toggles_playback() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&char_key(" "), false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::PlayPause)));
    }

    #[test]
    fn test_plus_and_minus_zoom() {
        let ctx = HotkeyContext::default();
        assert!(matches!(
            handle_hotkey(&char_key("+"), false, false, &ctx),
            HotkeyResult::Action(HotkeyAction::ZoomIn)
        ));
        assert!(matches!(
            handle_hotkey(&char_key("="), false, false, &ctx),
            HotkeyResult::Action(HotkeyAction::ZoomIn)
        ));
        assert!(matches!(
            handle_hotkey(&char_key("-"), false, false, &ctx),
            HotkeyResult::Action(HotkeyAction::ZoomOut)
        ));
    }

    #[test]
    fn test_home_end_skip() {
        let ctx = HotkeyContext::default();
        assert!(matches!(
            handle_hotkey(&Key::Home, false, false, &ctx),
            HotkeyResult::Action(HotkeyAction::SkipToStart)
        ));
        assert!(matches!(
            handle_hotkey(&Key::End, false, false, &ctx),
            HotkeyResult::Action(HotkeyAction::SkipToEnd)
        ));
    }

    #[test]
    fn test_brackets_change_speed() {
        let ctx = HotkeyContext::default();
        assert!(matches!(
            handle_hotkey(&char_key("]"), false, false, &ctx),
            HotkeyResult::Action(HotkeyAction::SpeedUp)
        ));
        assert!(matches!(
            handle_hotkey(&char_key("["), false, false, &ctx),
            HotkeyResult::Action(HotkeyAction::SpeedDown)
        ));
    }

    #[test]
    fn test_modifiers_pass_through() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&char_key("-"), true, false, &ctx);
        assert!(matches!(result, HotkeyResult::NoMatch));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext { input_focused: true };
        let result = handle_hotkey(&char_key("+"), false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }
}
