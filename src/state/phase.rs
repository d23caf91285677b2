//! Round lifecycle phases.
//!
//! # State Diagram
//!
//! ```text
//! ┌───────────────────┐  >1 player   ┌───────────────┐  timer   ┌─────────┐
//! │ WaitingForPlayers │─────────────▶│ SelectingWord │─────────▶│ Playing │
//! └───────────────────┘              └───────────────┘          └────┬────┘
//!          ▲                            ▲         ▲                  │ timer
//!          │                            │         │ next drawer      ▼
//!          │                            │         │            ┌─────────────┐
//!          │                 next round │         └────────────│ PostPlaying │
//!          │                            │                      └──────┬──────┘
//!          │                      ┌───────────┐    last drawer        │
//!          │                      │ PostRound │◀──────────────────────┘
//!          │                      └─────┬─────┘
//!          │ kick all   ┌──────────┐    │ last round
//!          └────────────│ PostGame │◀───┘
//!                       └──────────┘
//! ```
//!
//! A transition always replaces the whole [`Phase`] value. Phase-local data is
//! fixed at construction; only the timers move.

use std::fmt;
use std::time::Duration;

/// A timer counting down toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: Duration,
}

impl Countdown {
    pub fn new(duration: Duration) -> Self {
        Self {
            remaining: duration,
        }
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Subtract elapsed time, stopping at zero.
    pub fn advance(&mut self, dt: Duration) {
        self.remaining = self.remaining.saturating_sub(dt);
    }

    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    pub fn reset(&mut self, duration: Duration) {
        self.remaining = duration;
    }
}

/// Phase discriminant without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    WaitingForPlayers,
    SelectingWord,
    Playing,
    PostPlaying,
    PostRound,
    PostGame,
}

impl PhaseKind {
    /// Human-readable name shown to players.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WaitingForPlayers => "Waiting for Players",
            Self::SelectingWord => "Selecting Word",
            Self::Playing => "Playing",
            Self::PostPlaying => "Post-Drawing",
            Self::PostRound => "Post-Round",
            Self::PostGame => "Post-Game",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WaitingForPlayers => "waiting_for_players",
            Self::SelectingWord => "selecting_word",
            Self::Playing => "playing",
            Self::PostPlaying => "post_playing",
            Self::PostRound => "post_round",
            Self::PostGame => "post_game",
        }
    }

    /// Phases that belong to a game in progress and need a drawer rotation.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Self::SelectingWord | Self::Playing | Self::PostPlaying | Self::PostRound
        )
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The drawer is choosing from an offered pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectingWord {
    pool: Vec<String>,
    countdown: Countdown,
}

impl SelectingWord {
    pub fn new(pool: Vec<String>, duration: Duration) -> Self {
        Self {
            pool,
            countdown: Countdown::new(duration),
        }
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    pub fn offers(&self, word: &str) -> bool {
        self.pool.iter().any(|w| w == word)
    }
}

/// Drawing and guessing, with periodic letter reveals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playing {
    countdown: Countdown,
    next_letter: Countdown,
    reveal_interval: Duration,
}

impl Playing {
    /// The first reveal comes after `duration / word_len`; later reveals use
    /// `reveal_interval`, capped at that first spacing so short rounds still
    /// uncover every letter.
    pub fn new(duration: Duration, word_len: usize, reveal_interval: Duration) -> Self {
        let first = match u32::try_from(word_len) {
            Ok(len) if len > 0 => duration / len,
            _ => duration,
        };
        Self {
            countdown: Countdown::new(duration),
            next_letter: Countdown::new(first),
            reveal_interval: reveal_interval.min(first),
        }
    }

    pub fn reveal_interval(&self) -> Duration {
        self.reveal_interval
    }

    pub fn until_next_letter(&self) -> Duration {
        self.next_letter.remaining()
    }

    /// True when the reveal timer fired; the timer is rearmed.
    pub(crate) fn take_reveal(&mut self) -> bool {
        if self.next_letter.is_expired() {
            self.next_letter.reset(self.reveal_interval);
            true
        } else {
            false
        }
    }
}

/// Active phase and its phase-local data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    WaitingForPlayers { waited: Duration },
    SelectingWord(SelectingWord),
    Playing(Playing),
    PostPlaying(Countdown),
    PostRound(Countdown),
    PostGame(Countdown),
}

impl Default for Phase {
    fn default() -> Self {
        Self::waiting()
    }
}

impl Phase {
    pub fn waiting() -> Self {
        Self::WaitingForPlayers {
            waited: Duration::ZERO,
        }
    }

    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::WaitingForPlayers { .. } => PhaseKind::WaitingForPlayers,
            Self::SelectingWord(_) => PhaseKind::SelectingWord,
            Self::Playing(_) => PhaseKind::Playing,
            Self::PostPlaying(_) => PhaseKind::PostPlaying,
            Self::PostRound(_) => PhaseKind::PostRound,
            Self::PostGame(_) => PhaseKind::PostGame,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Time shown on the clock: elapsed while waiting, remaining otherwise.
    pub fn clock(&self) -> Duration {
        match self {
            Self::WaitingForPlayers { waited } => *waited,
            Self::SelectingWord(s) => s.countdown.remaining(),
            Self::Playing(p) => p.countdown.remaining(),
            Self::PostPlaying(c) | Self::PostRound(c) | Self::PostGame(c) => c.remaining(),
        }
    }

    /// Move every timer of this phase forward by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        match self {
            Self::WaitingForPlayers { waited } => *waited = waited.saturating_add(dt),
            Self::SelectingWord(s) => s.countdown.advance(dt),
            Self::Playing(p) => {
                p.countdown.advance(dt);
                p.next_letter.advance(dt);
            }
            Self::PostPlaying(c) | Self::PostRound(c) | Self::PostGame(c) => c.advance(dt),
        }
    }

    /// Whether the phase's main timer has run out. Waiting has none.
    pub fn is_expired(&self) -> bool {
        match self {
            Self::WaitingForPlayers { .. } => false,
            Self::SelectingWord(s) => s.countdown.is_expired(),
            Self::Playing(p) => p.countdown.is_expired(),
            Self::PostPlaying(c) | Self::PostRound(c) | Self::PostGame(c) => c.is_expired(),
        }
    }

    /// The offered pool, if the drawer is currently choosing.
    pub fn word_pool(&self) -> Option<&[String]> {
        match self {
            Self::SelectingWord(s) => Some(s.pool()),
            _ => None,
        }
    }
}
