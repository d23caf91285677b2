//! Sketch State Library
//!
//! Authoritative round lifecycle for a turn-based drawing and guessing game.
//!
//! # Overview
//!
//! One player per turn, the drawer, picks a word from a small pool and draws it
//! while the others guess. Letters of the word are revealed over time. Every
//! player draws once per round, and the game ends after a configured number of
//! rounds.
//!
//! - **Phases** - Six mutually exclusive phases, each with its own timer and
//!   exit condition, advanced by a single `tick`.
//!
//! - **Session** - Round and drawer counters, the secret word and the revealed
//!   letters, shared by the machine, the command gateway and observers.
//!
//! - **Commands** - The drawer's word selection, validated against the live
//!   phase.
//!
//! # Design Principles
//!
//! 1. **No networking** - Outbound messages go through a `Notifier`; who is
//!    connected is reported by the host.
//!
//! 2. **Time is an input** - Ticks carry the elapsed wall-clock time, so tests
//!    feed synthetic time and the tick rate never changes phase lengths.
//!
//! 3. **One writer at a time** - Ticks and commands both need `&mut Game`;
//!    `SharedGame` serializes them across threads.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use sketch_state::{Game, GameConfig, Notification, Outbox, PhaseKind, WordList};
//!
//! let words = WordList::seeded(["cat", "dog", "bird"], 7);
//! let mut game = Game::seeded(GameConfig::default(), words, Outbox::new(), 7);
//!
//! game.player_joined(1);
//! game.player_joined(2);
//! game.tick(Duration::from_millis(16));
//! assert_eq!(game.session().phase_kind(), PhaseKind::SelectingWord);
//!
//! // The drawer was sent their pool
//! let pool = match &game.notifier_mut().drain()[0] {
//!     Notification::WordPool { to: 1, words } => words.clone(),
//!     other => panic!("unexpected {:?}", other),
//! };
//! game.select_word(1, &pool[0]).unwrap();
//! assert_eq!(game.session().current_word(), Some(pool[0].as_str()));
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
