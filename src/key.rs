//! Key bindings and the one-line help shown under each view.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss::{AdaptiveColor, Style};

/// A key code plus the modifiers that must be held with it.
pub type KeyPress = (KeyCode, KeyModifiers);

/// A set of key presses triggering one action, with help text.
#[derive(Debug, Clone)]
pub struct Binding {
    pub keys: Vec<KeyPress>,
    pub help: String,
    pub description: String,
}

impl Binding {
    /// Binds plain keys, without modifiers.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().map(|k| (k, KeyModifiers::NONE)).collect(),
            help: String::new(),
            description: String::new(),
        }
    }

    /// Binds key/modifier combinations.
    pub fn with_modifiers(keys: Vec<KeyPress>) -> Self {
        Self {
            keys,
            help: String::new(),
            description: String::new(),
        }
    }

    /// Sets the key name shown in help.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Sets the action description shown in help.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Shift is ignored for character keys since it is already folded into
    /// the character itself.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.keys.iter().any(|(code, modifiers)| {
            let held = match key_msg.key {
                KeyCode::Char(_) => key_msg.modifiers.difference(KeyModifiers::SHIFT),
                _ => key_msg.modifiers,
            };
            *code == key_msg.key && *modifiers == held
        })
    }
}

/// Styles for the help line.
#[derive(Debug, Clone)]
pub struct HelpStyles {
    pub key: Style,
    pub desc: Style,
    pub separator: Style,
}

impl Default for HelpStyles {
    fn default() -> Self {
        Self {
            key: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            desc: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
            separator: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
        }
    }
}

/// Renders `key desc • key desc` for every binding that has help text.
pub fn short_help_view<'a>(
    bindings: impl IntoIterator<Item = &'a Binding>,
    styles: &HelpStyles,
) -> String {
    let separator = styles.separator.render(" • ");
    bindings
        .into_iter()
        .filter(|b| !b.help.is_empty())
        .map(|b| {
            format!(
                "{} {}",
                styles.key.render(&b.help),
                styles.desc.render(&b.description)
            )
        })
        .collect::<Vec<_>>()
        .join(&separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_plain_binding_matches() {
        let binding = Binding::new(vec![KeyCode::Char(' ')]);
        assert!(binding.matches(&key(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(!binding.matches(&key(KeyCode::Char('r'), KeyModifiers::NONE)));
        assert!(!binding.matches(&key(KeyCode::Char(' '), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_shift_folded_into_chars() {
        let binding = Binding::new(vec![KeyCode::Char('R')]);
        assert!(binding.matches(&key(KeyCode::Char('R'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_modifier_binding() {
        let binding = Binding::with_modifiers(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        assert!(binding.matches(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&key(KeyCode::Char('c'), KeyModifiers::NONE)));

        let back_tab = Binding::with_modifiers(vec![(KeyCode::BackTab, KeyModifiers::SHIFT)]);
        assert!(back_tab.matches(&key(KeyCode::BackTab, KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_short_help_view() {
        let bindings = [
            Binding::new(vec![KeyCode::Char(' ')])
                .with_help("space")
                .with_description("start/stop"),
            Binding::new(vec![KeyCode::Null]),
            Binding::new(vec![KeyCode::Char('r')])
                .with_help("r")
                .with_description("reset"),
        ];
        let view = short_help_view(&bindings, &HelpStyles::default());
        let plain = strip_ansi_escapes::strip_str(view);
        assert!(plain.contains("space start/stop"));
        assert!(plain.contains("•"));
        assert!(plain.ends_with("r reset"));
    }
}
