//! Integer text field used by the duration editor.
//!
//! A trimmed-down single-line input: characters are appended at the end and
//! removed from the end, and only text that could still become an integer is
//! accepted (digits, with an optional leading `-`). That matches what an
//! integer validator on a GUI line edit lets through, so a field can hold
//! `-5` or a lone `-` and the editor has to reject those on submit.
//!
//! ```rust
//! use bubbletea_clock::field::Field;
//! use bubbletea_clock::Component;
//!
//! let mut field = Field::new("HH");
//! field.focus();
//! field.set_value("07");
//! assert_eq!(field.value(), "07");
//! ```

use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss::{AdaptiveColor, Style};
use unicode_width::UnicodeWidthStr;

/// Default character limit; room for a sign and three digits.
pub const DEFAULT_CHAR_LIMIT: usize = 4;

/// A focusable single-line field holding integer text.
#[derive(Debug, Clone)]
pub struct Field {
    value: Vec<char>,
    focus: bool,

    /// Caption rendered under the value.
    pub caption: String,
    /// Maximum number of characters. 0 means no limit.
    pub char_limit: usize,
    /// Display width of the value cell.
    pub width: usize,

    pub text_style: Style,
    pub focused_style: Style,
    pub caption_style: Style,
}

impl Field {
    /// Creates an empty, blurred field with the given caption.
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            value: Vec::new(),
            focus: false,
            caption: caption.into(),
            char_limit: DEFAULT_CHAR_LIMIT,
            width: DEFAULT_CHAR_LIMIT,
            text_style: Style::new(),
            focused_style: Style::new().underline(true).bold(true),
            caption_style: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }

    /// Current text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the value, keeping only the accepted prefix within the
    /// character limit.
    pub fn set_value(&mut self, s: &str) {
        self.value.clear();
        for ch in s.chars() {
            if !self.push(ch) {
                break;
            }
        }
    }

    fn accepts(&self, ch: char) -> bool {
        if self.char_limit > 0 && self.value.len() >= self.char_limit {
            return false;
        }
        ch.is_ascii_digit() || (ch == '-' && self.value.is_empty())
    }

    fn push(&mut self, ch: char) -> bool {
        if !self.accepts(ch) {
            return false;
        }
        self.value.push(ch);
        true
    }

    /// Handles editing keys while focused. Returns `None`; the field never
    /// needs a follow-up command.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }
        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) {
        match key_msg.key {
            KeyCode::Backspace => {
                self.value.pop();
            }
            KeyCode::Char('u') if key_msg.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.clear();
            }
            KeyCode::Char(ch)
                if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                    && !key_msg.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.push(ch);
            }
            _ => {}
        }
    }

    /// Renders the value cell, centred in `width` columns.
    pub fn view(&self) -> String {
        let value = self.value();
        let cell = center(&value, self.width);
        if self.focus {
            self.focused_style.render(&cell)
        } else {
            self.text_style.render(&cell)
        }
    }

    /// Renders the caption, centred like the value.
    pub fn caption_view(&self) -> String {
        self.caption_style.render(&center(&self.caption, self.width))
    }
}

pub(crate) fn center(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        return s.to_string();
    }
    let left = (width - w) / 2;
    let right = width - w - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

impl Component for Field {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn focused() -> Field {
        let mut field = Field::new("MM");
        field.focus();
        field
    }

    #[test]
    fn test_new_default_values() {
        let field = Field::new("SS");
        assert_eq!(field.value(), "");
        assert_eq!(field.caption, "SS");
        assert_eq!(field.char_limit, DEFAULT_CHAR_LIMIT);
        assert!(!field.focused());
    }

    #[test]
    fn test_typing_digits() {
        let mut field = focused();
        field.update(&key(KeyCode::Char('4')));
        field.update(&key(KeyCode::Char('2')));
        assert_eq!(field.value(), "42");
    }

    #[test]
    fn test_blurred_ignores_input() {
        let mut field = Field::new("MM");
        field.update(&key(KeyCode::Char('4')));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_non_digits_filtered() {
        let mut field = focused();
        for ch in ['a', '1', ' ', '.', '2'] {
            field.update(&key(KeyCode::Char(ch)));
        }
        assert_eq!(field.value(), "12");
    }

    #[test]
    fn test_minus_only_leading() {
        let mut field = focused();
        field.update(&key(KeyCode::Char('-')));
        field.update(&key(KeyCode::Char('5')));
        field.update(&key(KeyCode::Char('-')));
        assert_eq!(field.value(), "-5");
    }

    #[test]
    fn test_char_limit() {
        let mut field = focused();
        for ch in "123456".chars() {
            field.update(&key(KeyCode::Char(ch)));
        }
        assert_eq!(field.value(), "1234");

        field.char_limit = 0;
        field.update(&key(KeyCode::Char('5')));
        assert_eq!(field.value(), "12345");
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut field = focused();
        field.set_value("59");
        field.update(&key(KeyCode::Backspace));
        assert_eq!(field.value(), "5");
        field.update(&key(KeyCode::Backspace));
        field.update(&key(KeyCode::Backspace));
        assert_eq!(field.value(), "");

        field.set_value("12");
        let clear: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('u'),
            modifiers: KeyModifiers::CONTROL,
        });
        field.update(&clear);
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_set_value_filters() {
        let mut field = Field::new("HH");
        field.set_value("0x5");
        assert_eq!(field.value(), "0");
    }

    #[test]
    fn test_focus_cycle() {
        let mut field = Field::new("HH");
        assert!(Component::focus(&mut field).is_none());
        assert!(field.focused());
        field.blur();
        assert!(!field.focused());
    }

    #[test]
    fn test_center() {
        assert_eq!(center("05", 4), " 05 ");
        assert_eq!(center("5", 4), " 5  ");
        assert_eq!(center("12345", 4), "12345");
    }

    #[test]
    fn test_view_shows_value_and_caption() {
        let mut field = focused();
        field.set_value("07");
        assert!(strip_ansi_escapes::strip_str(field.view()).contains("07"));
        assert!(strip_ansi_escapes::strip_str(field.caption_view()).contains("MM"));
    }
}
