//! Buttons: a label plus enabled and visual state.
//!
//! The clock has no mouse input; a button is the on-screen affordance for a
//! key binding. A disabled button renders faint, and the attention visual is
//! used for input-validation feedback (see [`FlashRevertMsg`]).

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use lipgloss_extras::lipgloss::{Color, Style};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// How long a button stays in [`Visual::Attention`] after a flash.
pub const FLASH_DURATION: Duration = Duration::from_millis(500);

/// Presentation state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visual {
    #[default]
    Normal,
    Attention,
}

/// Sent once, [`FLASH_DURATION`] after [`Button::flash`], to restore the
/// normal visual.
#[derive(Debug, Clone)]
pub struct FlashRevertMsg {
    /// Id of the flashed button.
    pub id: i64,
}

/// Styles for the three button appearances.
#[derive(Debug, Clone)]
pub struct Styles {
    pub normal: Style,
    pub disabled: Style,
    pub attention: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            normal: Style::new()
                .foreground(Color::from("#1A1A1A"))
                .background(Color::from("#D3D3D3")),
            disabled: Style::new().faint(true),
            attention: Style::new()
                .foreground(Color::from("#FFFFFF"))
                .background(Color::from("#FF0000"))
                .bold(true),
        }
    }
}

/// An on-screen action: key hint, label, enabled flag and visual.
#[derive(Debug, Clone)]
pub struct Button {
    id: i64,
    label: String,
    key_hint: String,
    enabled: bool,
    visual: Visual,
    pub styles: Styles,
}

impl Button {
    /// Creates an enabled button in the normal visual.
    pub fn new(label: impl Into<String>, key_hint: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            label: label.into(),
            key_hint: key_hint.into(),
            enabled: true,
            visual: Visual::Normal,
            styles: Styles::default(),
        }
    }

    /// Unique id, used to address [`FlashRevertMsg`]s.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Current label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the label text.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Whether the button's action is available.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the button.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Current presentation state.
    pub fn visual(&self) -> Visual {
        self.visual
    }

    /// Sets the presentation state directly.
    pub fn set_visual(&mut self, visual: Visual) {
        self.visual = visual;
    }

    /// Switches to the attention visual and schedules the single revert
    /// message. The revert is not cancellable; a second flash schedules a
    /// second revert.
    pub fn flash(&mut self) -> Cmd {
        self.visual = Visual::Attention;
        let id = self.id;
        bubbletea_tick(FLASH_DURATION, move |_| Box::new(FlashRevertMsg { id }) as Msg)
    }

    /// Applies a revert addressed to this button. Returns whether it was ours.
    pub fn handle_revert(&mut self, msg: &FlashRevertMsg) -> bool {
        if msg.id != self.id {
            return false;
        }
        self.visual = Visual::Normal;
        true
    }

    /// Renders ` [hint] label ` in the style for the current state.
    pub fn view(&self) -> String {
        let text = format!(" [{}] {} ", self.key_hint, self.label);
        let style = match (self.visual, self.enabled) {
            (Visual::Attention, _) => &self.styles.attention,
            (Visual::Normal, false) => &self.styles.disabled,
            (Visual::Normal, true) => &self.styles.normal,
        };
        style.render(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let button = Button::new("Set Time", "enter");
        assert_eq!(button.label(), "Set Time");
        assert!(button.enabled());
        assert_eq!(button.visual(), Visual::Normal);
    }

    #[test]
    fn test_flash_lasts_half_a_second() {
        assert_eq!(FLASH_DURATION, Duration::from_millis(500));
    }

    #[test]
    fn test_flash_then_revert() {
        let mut button = Button::new("Set Time", "enter");
        let _cmd = button.flash();
        assert_eq!(button.visual(), Visual::Attention);

        assert!(button.handle_revert(&FlashRevertMsg { id: button.id() }));
        assert_eq!(button.visual(), Visual::Normal);
    }

    #[test]
    fn test_revert_for_other_button_ignored() {
        let mut button = Button::new("Set Time", "enter");
        let other = Button::new("Reset", "r");
        let _cmd = button.flash();

        assert!(!button.handle_revert(&FlashRevertMsg { id: other.id() }));
        assert_eq!(button.visual(), Visual::Attention);
    }

    #[test]
    fn test_view_contains_label_and_hint() {
        let mut button = Button::new("start", "space");
        let plain = strip_ansi_escapes::strip_str(button.view());
        assert!(plain.contains("[space] start"));

        button.set_enabled(false);
        let plain = strip_ansi_escapes::strip_str(button.view());
        assert!(plain.contains("[space] start"));
    }
}
