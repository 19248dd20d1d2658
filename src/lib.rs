//! # bubbletea-clock
//!
//! A terminal timer and stopwatch built on [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The program has two tabs. The **Timer** tab counts a configured duration
//! down one second per tick and plays an alarm when it reaches zero; its
//! duration is changed through an inline editor with hours, minutes and
//! seconds fields. The **Stopwatch** tab counts up in hundredths of a second.
//! Both keep running while the other tab is shown.
//!
//! Each tab is an Elm-style model with `update()` and `view()`; the
//! [`shell::App`] model owns both, routes messages and implements
//! [`bubbletea_rs::Model`].
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`clock_time`] | Bounded `hh:mm:ss.zzz` time values and duration parsing |
//! | [`ticker`] | Restartable periodic tick source |
//! | [`button`] | Labelled action with enabled state and a flash effect |
//! | [`field`] | Integer text field for the duration editor |
//! | [`timer`] | Countdown controller |
//! | [`stopwatch`] | Count-up controller |
//! | [`shell`] | Tabbed top-level model |
//! | [`sound`] | Alarm playback |
//! | [`config`] | Command line and process configuration |
//! | [`logging`] | File-backed tracing subscriber |
//!
//! ## Driving a controller directly
//!
//! Controllers don't need a running program, which is how the tests use them:
//!
//! ```rust
//! use bubbletea_clock::clock_time::ClockTime;
//! use bubbletea_clock::sound::SilentPlayer;
//! use bubbletea_clock::timer;
//!
//! let five = ClockTime::new(0, 0, 5).unwrap();
//! let mut countdown = timer::Model::new(five, "alarm.wav", Box::new(SilentPlayer));
//! let _start = countdown.toggle_run();
//! countdown.on_tick();
//! assert_eq!(countdown.label(), "00:00:04");
//! ```

pub mod button;
pub mod clock_time;
pub mod config;
pub mod error;
pub mod field;
pub mod key;
pub mod logging;
pub mod shell;
pub mod sound;
pub mod stopwatch;
pub mod ticker;
pub mod timer;

use bubbletea_rs::Cmd;

/// Components that take keyboard focus.
///
/// Only the focused component reacts to key messages. The duration editor
/// moves focus between its fields through this trait.
pub trait Component {
    /// Gives the component focus. May return a command to run on focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use button::Button;
pub use clock_time::ClockTime;
pub use config::{Cli, Config};
pub use error::{DurationError, Error, Result};
pub use field::Field as IntField;
pub use key::{Binding, KeyPress};
pub use shell::{App, Tab};
pub use stopwatch::Model as Stopwatch;
pub use ticker::{TickMsg, Ticker};
pub use timer::{Model as Timer, TimerState, ViewMode};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_clock::prelude::*;
///
/// let app = App::with_player(&Config::default(), Box::new(SilentPlayer));
/// assert_eq!(app.tab(), Tab::Timer);
/// ```
pub mod prelude {
    pub use crate::button::Button;
    pub use crate::clock_time::ClockTime;
    pub use crate::config::{Cli, Config};
    pub use crate::field::Field as IntField;
    pub use crate::key::{Binding, KeyPress};
    pub use crate::shell::{App, Tab};
    pub use crate::sound::{AlarmPlayer, BellPlayer, SilentPlayer, SoundMode};
    pub use crate::stopwatch::Model as Stopwatch;
    pub use crate::timer::{Model as Timer, TimerState, ViewMode};
    pub use crate::Component;
}
