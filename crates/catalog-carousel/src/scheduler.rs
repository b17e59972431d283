//! Auto-advance timing.
//!
//! The timer is an explicit, cancellable tokio task that delivers
//! [`CarouselEvent::Tick`] over an unbounded channel at a fixed period. The
//! consuming view drains the receiver in its update loop and feeds each
//! event back through [`CarouselScheduler::handle`], which keeps the whole
//! engine single-threaded: the timer task never touches the state itself.
//!
//! Lifetime rules:
//! - a timer exists exactly while the state is `Active`;
//! - replacing the sequence cancels the old timer and starts a fresh one,
//!   so a late tick can never move an index belonging to another sequence;
//! - manual navigation changes the index only — the running timer keeps its
//!   original schedule.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::state::{CarouselPhase, CarouselState};

/// Fixed auto-advance period.
pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_millis(4000);

/// Events delivered to the consuming view's update loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Tick,
}

/// Owns a [`CarouselState`] together with the timer driving it.
///
/// Must live on a tokio runtime; the timer task is spawned lazily when the
/// state first becomes `Active` and aborted when it leaves that phase, on
/// [`Self::shutdown`], and on drop.
#[derive(Debug)]
pub struct CarouselScheduler {
    state: CarouselState,
    period: Duration,
    events: mpsc::UnboundedSender<CarouselEvent>,
    timer: Option<JoinHandle<()>>,
}

impl CarouselScheduler {
    /// Create an idle scheduler and the receiver the consuming view drains.
    pub fn new(viewport_width: f32) -> (Self, mpsc::UnboundedReceiver<CarouselEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        (
            Self {
                state: CarouselState::new(0, viewport_width),
                period: AUTO_ADVANCE_PERIOD,
                events,
                timer: None,
            },
            receiver,
        )
    }

    /// Override the advance period (tests shorten it).
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Point the carousel at a new ordered sequence.
    ///
    /// Sequence identity changed, so the old schedule is void: the previous
    /// timer is cancelled unconditionally and the window starts over at the
    /// front. A fresh timer starts only if the new sequence is `Active`.
    pub fn attach(&mut self, item_count: usize) {
        self.cancel_timer();
        self.state.replace_sequence(item_count);
        self.sync_timer();
    }

    /// Length change within the same sequence: index clamped, and a running
    /// timer is kept rather than restarted.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.state.set_item_count(item_count);
        self.sync_timer();
    }

    /// Manual step forward; the running timer keeps its original schedule.
    pub fn next(&mut self) {
        self.state.advance();
    }

    /// Manual step backward; the running timer keeps its original schedule.
    pub fn prev(&mut self) {
        self.state.retreat();
    }

    /// Manual jump, clamped into bounds.
    pub fn go_to(&mut self, index: usize) {
        self.state.go_to(index);
    }

    /// Apply one delivered event to the state.
    pub fn handle(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::Tick => self.state.tick(),
        }
    }

    /// Viewport change: recompute the window, clamp the index, reconcile
    /// the timer with the possibly changed phase. A timer that survives the
    /// phase check is not restarted.
    pub fn resize(&mut self, viewport_width: f32) {
        self.state.set_viewport(viewport_width);
        self.sync_timer();
    }

    /// Tear down on unmount; symmetric with [`Self::attach`].
    pub fn shutdown(&mut self) {
        self.cancel_timer();
        self.state.replace_sequence(0);
    }

    fn sync_timer(&mut self) {
        if self.state.phase() == CarouselPhase::Active {
            if self.timer.is_none() {
                self.spawn_timer();
            }
        } else {
            self.cancel_timer();
        }
    }

    fn spawn_timer(&mut self) {
        let events = self.events.clone();
        let period = self.period;
        debug!(?period, "carousel timer started");
        self.timer = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of a tokio interval completes immediately;
            // consume it so the first delivered tick lands one full period
            // after the timer starts.
            interval.tick().await;
            loop {
                interval.tick().await;
                if events.send(CarouselEvent::Tick).is_err() {
                    break;
                }
            }
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
            debug!("carousel timer cancelled");
        }
    }
}

impl Drop for CarouselScheduler {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
