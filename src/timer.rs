//! Countdown timer tab.
//!
//! The timer has two panes. The countdown pane shows the remaining time with
//! start/pause, reset and change-time buttons; the editor pane shows three
//! integer fields (hours, minutes, seconds) and a "Set Time" button.
//!
//! ```text
//!   ShowingCountdown ──request_duration_edit()──▶ ShowingDurationEditor
//!          ▲                                              │
//!          └──────────── submit_duration() ok ────────────┘
//! ```
//!
//! The countdown ticks once per second. When it reaches zero the tick source
//! stops, the run button is disabled and the alarm plays. Invalid input in
//! the editor flashes the "Set Time" button for half a second.
//!
//! # Usage
//!
//! ```rust
//! use bubbletea_clock::clock_time::ClockTime;
//! use bubbletea_clock::sound::SilentPlayer;
//! use bubbletea_clock::timer::{Model, ViewMode};
//!
//! let mut timer = Model::new(
//!     ClockTime::new(0, 0, 2).unwrap(),
//!     "alarm.wav",
//!     Box::new(SilentPlayer),
//! );
//! let _tick = timer.toggle_run();
//! timer.on_tick();
//! timer.on_tick();
//! assert!(timer.remaining().is_zero());
//! assert!(!timer.running());
//!
//! timer.request_duration_edit();
//! assert_eq!(timer.mode(), ViewMode::ShowingDurationEditor);
//! let _ = timer.submit_duration("", "1", "30");
//! assert_eq!(timer.label(), "00:01:30");
//! ```

use crate::button::{Button, FlashRevertMsg};
use crate::clock_time::{parse_fields, ClockTime};
use crate::field::{self, Field};
use crate::key::{short_help_view, Binding, HelpStyles};
use crate::sound::AlarmPlayer;
use crate::ticker::{TickMsg, Ticker};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::lipgloss::Style;
use std::path::PathBuf;
use std::time::Duration;

/// Countdown tick period.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

const FIELD_COUNT: usize = 3;

/// Which pane of the timer is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    ShowingCountdown,
    ShowingDurationEditor,
}

/// Countdown state. `remaining` only decreases while `running`, and
/// `running` is false whenever `remaining` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    /// Duration the countdown resets to.
    pub configured: ClockTime,
    /// Time left on the clock.
    pub remaining: ClockTime,
    /// Whether the countdown is ticking.
    pub running: bool,
}

impl TimerState {
    /// A stopped countdown with the full duration remaining.
    pub fn new(configured: ClockTime) -> Self {
        Self {
            configured,
            remaining: configured,
            running: false,
        }
    }
}

/// Timer key bindings, for both panes.
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub toggle: Binding,
    pub reset: Binding,
    pub edit: Binding,
    pub submit: Binding,
    pub next_field: Binding,
    pub prev_field: Binding,
}

/// space, r and e on the countdown; arrows and enter in the editor.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        toggle: Binding::new(vec![KeyCode::Char(' ')])
            .with_help("space")
            .with_description("start/pause"),
        reset: Binding::new(vec![KeyCode::Char('r')])
            .with_help("r")
            .with_description("reset"),
        edit: Binding::new(vec![KeyCode::Char('e')])
            .with_help("e")
            .with_description("change time"),
        submit: Binding::new(vec![KeyCode::Enter])
            .with_help("enter")
            .with_description("set time"),
        next_field: Binding::new(vec![KeyCode::Right])
            .with_help("→")
            .with_description("next field"),
        prev_field: Binding::new(vec![KeyCode::Left])
            .with_help("←")
            .with_description("previous field"),
    }
}

/// The timer tab.
pub struct Model {
    state: TimerState,
    mode: ViewMode,
    label: String,
    ticker: Ticker,

    run_button: Button,
    reset_button: Button,
    edit_button: Button,
    submit_button: Button,

    fields: [Field; FIELD_COUNT],
    focused_field: usize,

    alarm_sound: PathBuf,
    player: Box<dyn AlarmPlayer>,

    pub key_map: KeyMap,
    pub help_styles: HelpStyles,
    pub label_style: Style,
}

impl Model {
    /// A stopped timer showing `configured`, alarming through `player`.
    pub fn new(
        configured: ClockTime,
        alarm_sound: impl Into<PathBuf>,
        player: Box<dyn AlarmPlayer>,
    ) -> Self {
        let mut model = Self {
            state: TimerState::new(configured),
            mode: ViewMode::ShowingCountdown,
            label: String::new(),
            ticker: Ticker::new(TICK_INTERVAL),
            run_button: Button::new("start", "space"),
            reset_button: Button::new("reset", "r"),
            edit_button: Button::new("change time", "e"),
            submit_button: Button::new("set time", "enter"),
            fields: [Field::new("HH"), Field::new("MM"), Field::new("SS")],
            focused_field: 0,
            alarm_sound: alarm_sound.into(),
            player,
            key_map: default_key_map(),
            help_styles: HelpStyles::default(),
            label_style: Style::new().bold(true),
        };
        model.run_button.set_enabled(!configured.is_zero());
        model.display_time();
        model
    }

    /// Snapshot of the countdown state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Duration the countdown resets to.
    pub fn configured(&self) -> ClockTime {
        self.state.configured
    }

    /// Time left on the clock.
    pub fn remaining(&self) -> ClockTime {
        self.state.remaining
    }

    /// Whether the countdown is ticking.
    pub fn running(&self) -> bool {
        self.state.running
    }

    /// The visible pane.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The time label as last rendered.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The tick source driving the countdown.
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// The start/pause button.
    pub fn run_button(&self) -> &Button {
        &self.run_button
    }

    /// The editor's "set time" button.
    pub fn submit_button(&self) -> &Button {
        &self.submit_button
    }

    /// Current text of the hours, minutes and seconds fields.
    pub fn field_values(&self) -> [String; FIELD_COUNT] {
        [
            self.fields[0].value(),
            self.fields[1].value(),
            self.fields[2].value(),
        ]
    }

    fn display_time(&mut self) {
        self.label = self.state.remaining.format_hms();
    }

    /// Re-renders the countdown label.
    pub fn refresh(&mut self) {
        if self.mode == ViewMode::ShowingCountdown {
            self.display_time();
        }
    }

    fn stop_ticking(&mut self) {
        self.ticker.stop();
        self.state.running = false;
        self.run_button.set_label("start");
    }

    /// Starts or pauses the countdown. Does nothing once the countdown is at
    /// zero; reset or set a new time first.
    pub fn toggle_run(&mut self) -> Option<Cmd> {
        if self.state.running {
            self.stop_ticking();
            tracing::debug!(remaining = %self.state.remaining, "timer paused");
            return None;
        }
        if self.state.remaining.is_zero() {
            return None;
        }
        self.state.running = true;
        self.run_button.set_label("pause");
        tracing::debug!(remaining = %self.state.remaining, "timer started");
        Some(self.ticker.start())
    }

    /// Counts down one second. Ticks arriving after the timer stopped are
    /// ignored.
    pub fn on_tick(&mut self) {
        if !self.state.running {
            return;
        }
        self.state.remaining = self.state.remaining.sub_secs(1);

        if self.state.remaining.is_zero() {
            self.stop_ticking();
            self.run_button.set_enabled(false);
            tracing::info!(alarm = %self.alarm_sound.display(), "timer finished");
            self.player.play(&self.alarm_sound);
        }

        self.display_time();
    }

    /// Puts the configured duration back on the clock. A running countdown
    /// keeps running.
    pub fn reset(&mut self) {
        self.state.remaining = self.state.configured;
        self.display_time();
        self.run_button.set_enabled(!self.state.configured.is_zero());
    }

    /// Opens the duration editor, stopping the countdown.
    pub fn request_duration_edit(&mut self) {
        self.stop_ticking();
        self.mode = ViewMode::ShowingDurationEditor;

        let configured = self.state.configured;
        self.fields[0].set_value(&format!("{:02}", configured.hours()));
        self.fields[1].set_value(&format!("{:02}", configured.minutes()));
        self.fields[2].set_value(&format!("{:02}", configured.seconds()));
        self.focus_field(0);
    }

    /// Validates the three field texts and, if they form a valid time, makes
    /// it the new configured and remaining duration and returns to the
    /// countdown. Otherwise flashes the "Set Time" button and stays put.
    pub fn submit_duration(&mut self, hours: &str, minutes: &str, seconds: &str) -> Option<Cmd> {
        match parse_fields(hours, minutes, seconds) {
            Ok(duration) => {
                self.stop_ticking();
                self.state.configured = duration;
                self.state.remaining = duration;
                self.run_button.set_enabled(!duration.is_zero());
                for field in &mut self.fields {
                    field.blur();
                }
                self.mode = ViewMode::ShowingCountdown;
                self.display_time();
                tracing::debug!(%duration, "timer duration set");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "duration rejected");
                Some(self.submit_button.flash())
            }
        }
    }

    fn submit_fields(&mut self) -> Option<Cmd> {
        let [hours, minutes, seconds] = self.field_values();
        self.submit_duration(&hours, &minutes, &seconds)
    }

    fn focus_field(&mut self, index: usize) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            if i == index {
                field.focus();
            } else {
                field.blur();
            }
        }
        self.focused_field = index;
    }

    /// Index of the editor field with focus.
    pub fn focused_field(&self) -> usize {
        self.focused_field
    }

    /// Handles key, tick and flash-revert messages addressed to this timer.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            if !self.ticker.accepts(tick) {
                return None;
            }
            self.on_tick();
            return self.ticker.is_running().then(|| self.ticker.tick());
        }

        if let Some(revert) = msg.downcast_ref::<FlashRevertMsg>() {
            self.submit_button.handle_revert(revert);
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return match self.mode {
                ViewMode::ShowingCountdown => self.handle_countdown_key(key_msg),
                ViewMode::ShowingDurationEditor => self.handle_editor_key(key_msg, msg),
            };
        }

        None
    }

    fn handle_countdown_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.key_map.toggle.matches(key_msg) {
            if self.run_button.enabled() {
                return self.toggle_run();
            }
        } else if self.key_map.reset.matches(key_msg) {
            self.reset();
        } else if self.key_map.edit.matches(key_msg) {
            self.request_duration_edit();
        }
        None
    }

    fn handle_editor_key(&mut self, key_msg: &KeyMsg, msg: &Msg) -> Option<Cmd> {
        if self.key_map.submit.matches(key_msg) {
            return self.submit_fields();
        }
        if self.key_map.next_field.matches(key_msg) {
            self.focus_field((self.focused_field + 1) % FIELD_COUNT);
            return None;
        }
        if self.key_map.prev_field.matches(key_msg) {
            self.focus_field((self.focused_field + FIELD_COUNT - 1) % FIELD_COUNT);
            return None;
        }
        self.fields[self.focused_field].update(msg)
    }

    /// One-line key help for the visible pane.
    pub fn help_view(&self) -> String {
        let km = &self.key_map;
        match self.mode {
            ViewMode::ShowingCountdown => {
                short_help_view([&km.toggle, &km.reset, &km.edit], &self.help_styles)
            }
            ViewMode::ShowingDurationEditor => short_help_view(
                [&km.prev_field, &km.next_field, &km.submit],
                &self.help_styles,
            ),
        }
    }

    /// Renders the visible pane.
    pub fn view(&self) -> String {
        match self.mode {
            ViewMode::ShowingCountdown => self.countdown_view(),
            ViewMode::ShowingDurationEditor => self.editor_view(),
        }
    }

    fn countdown_view(&self) -> String {
        [
            self.label_style.render(&field::center(&self.label, 12)),
            String::new(),
            self.edit_button.view(),
            self.reset_button.view(),
            self.run_button.view(),
        ]
        .join("\n")
    }

    fn editor_view(&self) -> String {
        let values: Vec<String> = self.fields.iter().map(Field::view).collect();
        let captions: Vec<String> = self.fields.iter().map(Field::caption_view).collect();
        [
            values.join(" : "),
            captions.join("   "),
            String::new(),
            self.submit_button.view(),
        ]
        .join("\n")
    }
}
