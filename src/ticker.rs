//! Periodic tick source built on `bubbletea_rs::tick`.
//!
//! A bubbletea tick fires once, so a running [`Ticker`] is re-armed by handing
//! the command from [`Ticker::tick`] back to the runtime after each accepted
//! [`TickMsg`]. Every ticker has a unique id, and a tag that changes on each
//! start and stop; a message is only accepted while the ticker runs and when
//! both match. Ticks still in flight when the ticker was stopped, or from an
//! earlier start, are therefore dropped.
//!
//! ```rust
//! use bubbletea_clock::ticker::Ticker;
//! use std::time::Duration;
//!
//! let mut ticker = Ticker::new(Duration::from_secs(1));
//! let _cmd = ticker.start();
//! assert!(ticker.is_running());
//! ticker.stop();
//! ticker.stop(); // stopping twice is fine
//! assert!(!ticker.is_running());
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Delivered by the runtime when a tick interval elapses.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the ticker that scheduled this tick.
    pub id: i64,
    tag: i64,
}

/// Start/stop control over a periodic tick chain.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    id: i64,
    tag: i64,
    running: bool,
}

impl Ticker {
    /// Creates a stopped ticker firing every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            id: next_id(),
            tag: 0,
            running: false,
        }
    }

    /// Unique id carried by this ticker's messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether ticks are currently accepted.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts a fresh tick chain and returns its first tick.
    pub fn start(&mut self) -> Cmd {
        self.running = true;
        self.tag += 1;
        self.tick()
    }

    /// Stops the chain. Pending ticks are ignored once they arrive.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.tag += 1;
        }
    }

    /// Whether `msg` belongs to the live chain of this ticker.
    pub fn accepts(&self, msg: &TickMsg) -> bool {
        self.running && msg.id == self.id && msg.tag == self.tag
    }

    /// Schedules the next tick of the current chain.
    pub fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    #[cfg(test)]
    pub(crate) fn current_tick(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_stopped() {
        let ticker = Ticker::new(Duration::from_millis(10));
        assert!(!ticker.is_running());
        assert_eq!(ticker.interval(), Duration::from_millis(10));
        assert!(ticker.id() > 0);
    }

    #[test]
    fn test_unique_ids() {
        let a = Ticker::new(Duration::from_secs(1));
        let b = Ticker::new(Duration::from_secs(1));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_accepts_live_chain_only() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        let _ = ticker.start();
        let live = ticker.current_tick();
        assert!(ticker.accepts(&live));

        ticker.stop();
        assert!(!ticker.accepts(&live));

        // Restarting opens a new chain; the old tick stays stale.
        let _ = ticker.start();
        assert!(!ticker.accepts(&live));
        assert!(ticker.accepts(&ticker.current_tick()));
    }

    #[test]
    fn test_rejects_other_ticker() {
        let mut a = Ticker::new(Duration::from_secs(1));
        let mut b = Ticker::new(Duration::from_secs(1));
        let _ = a.start();
        let _ = b.start();
        assert!(!a.accepts(&b.current_tick()));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        ticker.stop();
        assert!(!ticker.is_running());
        let _ = ticker.start();
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
    }
}
