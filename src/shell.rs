//! Top-level program model hosting the timer and stopwatch tabs.
//!
//! The tabs share nothing. Key messages go to the visible tab only; tick and
//! flash-revert messages go to both, since a countdown keeps running while
//! the stopwatch tab is shown and vice versa. Each tab ignores messages that
//! aren't its own.

use crate::config::{self, Config};
use crate::key::{short_help_view, Binding, HelpStyles};
use crate::sound::AlarmPlayer;
use crate::ticker::TickMsg;
use crate::{stopwatch, timer};
use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss::{AdaptiveColor, Color, Style};

/// Window title shown above the tab bar.
pub const TITLE: &str = "Clock";

/// The two tabs of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Timer,
    Stopwatch,
}

impl Tab {
    /// Tabs in display order.
    pub const ALL: [Tab; 2] = [Tab::Timer, Tab::Stopwatch];

    /// Title shown in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Timer => "Timer",
            Tab::Stopwatch => "Stopwatch",
        }
    }

    fn next(self) -> Self {
        match self {
            Tab::Timer => Tab::Stopwatch,
            Tab::Stopwatch => Tab::Timer,
        }
    }
}

/// Keys handled by the shell before a tab sees them.
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub next_tab: Binding,
    pub prev_tab: Binding,
    pub quit: Binding,
}

/// tab / shift+tab to switch, q or ctrl+c to quit.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        next_tab: Binding::new(vec![KeyCode::Tab])
            .with_help("tab")
            .with_description("switch"),
        prev_tab: Binding::with_modifiers(vec![
            (KeyCode::BackTab, KeyModifiers::SHIFT),
            (KeyCode::BackTab, KeyModifiers::NONE),
        ]),
        quit: Binding::with_modifiers(vec![
            (KeyCode::Char('q'), KeyModifiers::NONE),
            (KeyCode::Char('c'), KeyModifiers::CONTROL),
        ])
        .with_help("q")
        .with_description("quit"),
    }
}

/// Styles for the title and tab bar.
#[derive(Debug, Clone)]
pub struct Styles {
    pub title: Style,
    pub active_tab: Style,
    pub inactive_tab: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            title: Style::new().bold(true),
            active_tab: Style::new()
                .bold(true)
                .foreground(Color::from("230"))
                .background(Color::from("62")),
            inactive_tab: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}

/// The program model: a timer tab and a stopwatch tab.
pub struct App {
    tab: Tab,
    timer: timer::Model,
    stopwatch: stopwatch::Model,
    pub key_map: KeyMap,
    pub styles: Styles,
    pub help_styles: HelpStyles,
}

impl App {
    /// Builds the app with the alarm player selected in `config`.
    pub fn new(config: &Config) -> Self {
        Self::with_player(config, config.sound.player())
    }

    /// Builds the app with an explicit alarm player.
    pub fn with_player(config: &Config, player: Box<dyn AlarmPlayer>) -> Self {
        Self {
            tab: Tab::Timer,
            timer: timer::Model::new(
                config.timer_duration,
                config.alarm_sound.clone(),
                player,
            ),
            stopwatch: stopwatch::Model::new(),
            key_map: default_key_map(),
            styles: Styles::default(),
            help_styles: HelpStyles::default(),
        }
    }

    /// The visible tab.
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// The timer tab.
    pub fn timer(&self) -> &timer::Model {
        &self.timer
    }

    /// Mutable access to the timer tab.
    pub fn timer_mut(&mut self) -> &mut timer::Model {
        &mut self.timer
    }

    /// The stopwatch tab.
    pub fn stopwatch(&self) -> &stopwatch::Model {
        &self.stopwatch
    }

    /// Mutable access to the stopwatch tab.
    pub fn stopwatch_mut(&mut self) -> &mut stopwatch::Model {
        &mut self.stopwatch
    }

    /// Shows `tab`. Showing the timer redraws its countdown label.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        if tab == Tab::Timer {
            self.timer.refresh();
        }
        tracing::debug!(tab = tab.title(), "tab selected");
    }

    fn handle(&mut self, msg: Msg) -> Option<Cmd> {
        if msg.is::<TickMsg>() {
            return self
                .timer
                .update(&msg)
                .or_else(|| self.stopwatch.update(&msg));
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.key_map.quit.matches(key_msg) {
                tracing::info!("quit requested");
                return Some(quit());
            }
            if self.key_map.next_tab.matches(key_msg) || self.key_map.prev_tab.matches(key_msg) {
                self.select_tab(self.tab.next());
                return None;
            }
            return match self.tab {
                Tab::Timer => self.timer.update(&msg),
                Tab::Stopwatch => self.stopwatch.update(&msg),
            };
        }

        // Flash reverts always belong to the timer.
        self.timer.update(&msg)
    }

    fn tab_bar_view(&self) -> String {
        Tab::ALL
            .iter()
            .map(|&tab| {
                let title = format!(" {} ", tab.title());
                if tab == self.tab {
                    self.styles.active_tab.render(&title)
                } else {
                    self.styles.inactive_tab.render(&title)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn help_view(&self) -> String {
        let tab_help = match self.tab {
            Tab::Timer => self.timer.help_view(),
            Tab::Stopwatch => self.stopwatch.help_view(),
        };
        let shell_help = short_help_view(
            [&self.key_map.next_tab, &self.key_map.quit],
            &self.help_styles,
        );
        format!("{}\n{}", tab_help, shell_help)
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let config = config::current();
        tracing::info!(
            duration = %config.timer_duration,
            alarm = %config.alarm_sound.display(),
            "clock starting"
        );
        (App::new(&config), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.handle(msg)
    }

    fn view(&self) -> String {
        let body = match self.tab {
            Tab::Timer => self.timer.view(),
            Tab::Stopwatch => self.stopwatch.view(),
        };
        format!(
            "{}\n\n{}\n\n{}\n\n{}\n",
            self.styles.title.render(TITLE),
            self.tab_bar_view(),
            body,
            self.help_view()
        )
    }
}
