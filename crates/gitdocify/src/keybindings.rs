//! Keybinding system
//!
//! Maps key presses to [`CommandId`]s.
//!
//! - `KeyBinding`: a textual key pattern, a display hint and a command
//! - `Keymap`: the parsed bindings with matching logic
//!
//! Patterns are textual (`"ctrl+o"`, `"G"`, `"space"`) and serializable.

use crate::command_id::CommandId;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key, e.g. "ctrl+o", "shift+tab", "G"
    pub keys: String,
    /// Display hint for the UI, e.g. "Ctrl+O"
    pub hint: String,
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Parse a textual key pattern
///
/// Supported formats:
/// - Single char: "q", "G" (case-sensitive; uppercase implies SHIFT)
/// - With modifiers: "ctrl+o", "shift+tab"
/// - Special keys: "tab", "enter", "esc", "space", "up", "down", "home", "end", ...
pub fn parse_key_pattern(pattern: &str) -> Option<KeyPattern> {
    let pattern = pattern.trim();

    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(KeyPattern {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
        key_part = rest;
    }

    Some(KeyPattern {
        code: parse_key_code(key_part)?,
        modifiers,
    })
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
        _ => None,
    }
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, KeyPattern)>,
}

impl Keymap {
    /// Bindings with an unparseable pattern are dropped with a warning
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let bindings = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings }
    }

    /// All commands bound to `key`, in binding order
    pub fn match_key(&self, key: &KeyEvent) -> Vec<CommandId> {
        self.bindings
            .iter()
            .filter(|(_, pattern)| {
                // BackTab arrives with or without SHIFT depending on the terminal
                if pattern.code == KeyCode::BackTab {
                    key.code == KeyCode::BackTab
                } else {
                    key.code == pattern.code && key.modifiers == pattern.modifiers
                }
            })
            .map(|(binding, _)| binding.command)
            .collect()
    }

    /// Deduplicated hints for `command` joined with "/", e.g. "j/↓"
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut hints: Vec<&str> = Vec::new();
        for (binding, _) in &self.bindings {
            if binding.command == command && !hints.contains(&binding.hint.as_str()) {
                hints.push(binding.hint.as_str());
            }
        }

        if hints.is_empty() {
            None
        } else {
            Some(hints.join("/"))
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        default_keymap()
    }
}

pub fn default_keymap() -> Keymap {
    use CommandId::*;
    Keymap::new(vec![
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("g", "g", NavigateToTop),
        KeyBinding::new("home", "Home", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        KeyBinding::new("end", "End", NavigateToBottom),
        KeyBinding::new("enter", "Enter", CommitToggle),
        KeyBinding::new("space", "Space", CommitToggle),
        KeyBinding::new("o", "o", CommitExpandAll),
        KeyBinding::new("c", "c", CommitCollapseAll),
        KeyBinding::new("n", "n", RepositoryOpen),
        KeyBinding::new("ctrl+o", "Ctrl+O", RepositoryOpen),
        KeyBinding::new("r", "r", DocsRefresh),
        KeyBinding::new("e", "e", DocsExport),
        KeyBinding::new("q", "q", GlobalQuit),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_single_chars_keep_case() {
        assert_eq!(
            parse_key_pattern("G"),
            Some(KeyPattern {
                code: KeyCode::Char('G'),
                modifiers: KeyModifiers::SHIFT
            })
        );
        assert_eq!(
            parse_key_pattern("g"),
            Some(KeyPattern {
                code: KeyCode::Char('g'),
                modifiers: KeyModifiers::NONE
            })
        );
    }

    #[test]
    fn test_parse_modifiers_and_special_keys() {
        assert_eq!(
            parse_key_pattern("Ctrl+O"),
            Some(KeyPattern {
                code: KeyCode::Char('o'),
                modifiers: KeyModifiers::CONTROL
            })
        );
        assert_eq!(
            parse_key_pattern("space").map(|p| p.code),
            Some(KeyCode::Char(' '))
        );
        assert_eq!(parse_key_pattern("hyper+x"), None);
        assert_eq!(parse_key_pattern("nonsense"), None);
    }

    #[test]
    fn test_match_key() {
        let keymap = default_keymap();
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            vec![CommandId::NavigateToBottom]
        );
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('o'), KeyModifiers::CONTROL)),
            vec![CommandId::RepositoryOpen]
        );
        assert!(keymap
            .match_key(&key(KeyCode::Char('x'), KeyModifiers::NONE))
            .is_empty());
    }

    #[test]
    fn test_backtab_matches_loosely() {
        let keymap = Keymap::new(vec![KeyBinding::new(
            "backtab",
            "Shift+Tab",
            CommandId::NavigatePrevious,
        )]);
        for modifiers in [KeyModifiers::NONE, KeyModifiers::SHIFT] {
            assert_eq!(
                keymap.match_key(&key(KeyCode::BackTab, modifiers)),
                vec![CommandId::NavigatePrevious]
            );
        }
    }

    #[test]
    fn test_compact_hint() {
        let keymap = default_keymap();
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::NavigateNext),
            Some("j/↓".to_string())
        );
        assert_eq!(
            Keymap::new(Vec::new()).compact_hint_for_command(CommandId::GlobalQuit),
            None
        );

        let keymap = Keymap::new(vec![
            KeyBinding::new("shift+tab", "Shift+Tab", CommandId::NavigatePrevious),
            KeyBinding::new("backtab", "Shift+Tab", CommandId::NavigatePrevious),
        ]);
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::NavigatePrevious),
            Some("Shift+Tab".to_string())
        );
    }
}
