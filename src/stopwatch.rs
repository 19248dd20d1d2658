//! Stopwatch tab.
//!
//! Counts up in 10 ms steps, one step per tick, and shows hundredths of a
//! second truncated. Elapsed time follows the tick count rather than a wall
//! clock, so a slow runtime makes the stopwatch run slow.

use crate::button::Button;
use crate::clock_time::ClockTime;
use crate::field;
use crate::key::{short_help_view, Binding, HelpStyles};
use crate::ticker::{TickMsg, Ticker};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::lipgloss::Style;
use std::time::Duration;

/// Tick period, and the amount added to the elapsed time per tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Stopwatch key bindings.
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub toggle: Binding,
    pub reset: Binding,
}

/// space to start or pause, r to reset.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        toggle: Binding::new(vec![KeyCode::Char(' ')])
            .with_help("space")
            .with_description("start/pause"),
        reset: Binding::new(vec![KeyCode::Char('r')])
            .with_help("r")
            .with_description("reset"),
    }
}

/// The stopwatch tab.
#[derive(Debug, Clone)]
pub struct Model {
    elapsed: ClockTime,
    running: bool,
    label: String,
    ticker: Ticker,
    run_button: Button,
    reset_button: Button,
    pub key_map: KeyMap,
    pub help_styles: HelpStyles,
    pub label_style: Style,
}

impl Default for Model {
    fn default() -> Self {
        let mut model = Self {
            elapsed: ClockTime::ZERO,
            running: false,
            label: String::new(),
            ticker: Ticker::new(TICK_INTERVAL),
            run_button: Button::new("start", "space"),
            reset_button: Button::new("reset", "r"),
            key_map: default_key_map(),
            help_styles: HelpStyles::default(),
            label_style: Style::new().bold(true),
        };
        model.display_time();
        model
    }
}

impl Model {
    /// A stopped stopwatch at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time counted so far.
    pub fn elapsed(&self) -> ClockTime {
        self.elapsed
    }

    /// Whether the stopwatch is counting.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The `hh:mm:ss.cc` label as last rendered.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The tick source driving the stopwatch.
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// The start/pause button.
    pub fn run_button(&self) -> &Button {
        &self.run_button
    }

    fn display_time(&mut self) {
        self.label = self.elapsed.format_hundredths();
    }

    /// Starts or pauses counting. Returns the first tick when starting.
    pub fn toggle_run(&mut self) -> Option<Cmd> {
        if self.running {
            self.running = false;
            self.ticker.stop();
            self.run_button.set_label("start");
            tracing::debug!(elapsed = %self.label, "stopwatch paused");
            None
        } else {
            self.running = true;
            self.run_button.set_label("pause");
            tracing::debug!(elapsed = %self.label, "stopwatch started");
            Some(self.ticker.start())
        }
    }

    /// Adds one tick interval while running.
    pub fn on_tick(&mut self) {
        if !self.running {
            return;
        }
        self.elapsed = self.elapsed.add_millis(TICK_INTERVAL.as_millis() as u64);
        self.display_time();
    }

    /// Zeroes the elapsed time. A running stopwatch keeps running.
    pub fn reset(&mut self) {
        self.elapsed = ClockTime::ZERO;
        self.display_time();
    }

    /// Handles this stopwatch's ticks and its keys.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            if !self.ticker.accepts(tick) {
                return None;
            }
            self.on_tick();
            return Some(self.ticker.tick());
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.key_map.toggle.matches(key_msg) {
                return self.toggle_run();
            }
            if self.key_map.reset.matches(key_msg) {
                self.reset();
            }
        }

        None
    }

    /// One-line key help.
    pub fn help_view(&self) -> String {
        short_help_view(
            [&self.key_map.toggle, &self.key_map.reset],
            &self.help_styles,
        )
    }

    /// Renders the label and buttons.
    pub fn view(&self) -> String {
        [
            self.label_style.render(&field::center(&self.label, 15)),
            String::new(),
            self.reset_button.view(),
            self.run_button.view(),
        ]
        .join("\n")
    }
}
