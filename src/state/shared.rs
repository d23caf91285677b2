//! Host-side handles.
//!
//! Ticks usually come from a simulation loop while commands arrive on network
//! threads. [`SharedGame`] puts both behind one lock so a word selection can
//! never land in a phase that a concurrent tick has already replaced.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Mutex, MutexGuard};

use super::command::CommandError;
use super::machine::Game;
use super::notify::{Notification, Notifier, Outbox};
use super::session::PlayerId;
use super::snapshot::SessionSnapshot;
use super::words::{WordList, WordSource};

/// Cloneable, thread-safe handle to a single game.
#[derive(Debug)]
pub struct SharedGame<W = WordList, N = Outbox> {
    inner: Arc<Mutex<Game<W, N>>>,
}

impl<W, N> Clone for SharedGame<W, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: WordSource, N: Notifier> SharedGame<W, N> {
    pub fn new(game: Game<W, N>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    pub fn tick(&self, dt: Duration) {
        self.inner.lock().tick(dt);
    }

    pub fn select_word(&self, caller: PlayerId, word: &str) -> Result<(), CommandError> {
        self.inner.lock().select_word(caller, word)
    }

    pub fn player_joined(&self, player_id: PlayerId) -> bool {
        self.inner.lock().player_joined(player_id)
    }

    pub fn player_left(&self, player_id: PlayerId) -> bool {
        self.inner.lock().player_left(player_id)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.lock().snapshot()
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game<W, N>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn lock(&self) -> MutexGuard<'_, Game<W, N>> {
        self.inner.lock()
    }
}

impl<W: WordSource> SharedGame<W, Outbox> {
    /// Take the queued outbound notifications.
    pub fn drain_notifications(&self) -> Vec<Notification> {
        self.inner.lock().notifier_mut().drain()
    }
}

/// Turns frame instants into tick deltas.
///
/// The host owns the loop and its rate; the driver only measures wall-clock
/// time so phase durations do not depend on the tick rate.
#[derive(Debug, Clone, Copy)]
pub struct TickDriver {
    last: Instant,
}

impl TickDriver {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Elapsed time since the previous step. Instants earlier than the last
    /// one yield zero.
    pub fn step(&mut self, now: Instant) -> Duration {
        let dt = now.saturating_duration_since(self.last);
        self.last = self.last.max(now);
        dt
    }

    /// Measure and tick in one call.
    pub fn drive<W: WordSource, N: Notifier>(
        &mut self,
        game: &SharedGame<W, N>,
        now: Instant,
    ) -> Duration {
        let dt = self.step(now);
        game.tick(dt);
        dt
    }
}
