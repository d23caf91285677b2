//! Round lifecycle state for the drawing game.
//!
//! - `config` - host settings and the console-style setting surface
//! - `words` - word sources for the drawer's pool
//! - `phase` - the six phases and their timers
//! - `session` - shared counters, drawer rotation, secret word, revealed letters
//! - `machine` - the per-tick transition logic
//! - `command` - the drawer's word selection
//! - `notify` - drawer-only, caller-only and host messages
//! - `snapshot` - what every player may see
//! - `shared` - lock-guarded handle and tick driver for the host
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                          SharedGame (Mutex)                          │
//! │                                                                      │
//! │   tick(dt) ──────────┐                  ┌────────── select_word()    │
//! │                      ▼                  ▼                            │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │                           Game                               │    │
//! │  │                                                              │    │
//! │  │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐   │    │
//! │  │  │   Session    │  │  WordSource  │  │     Notifier     │   │    │
//! │  │  │              │  │              │  │                  │   │    │
//! │  │  │ phase        │  │ random_words │  │ word_pool        │   │    │
//! │  │  │ round        │  │              │  │ secret_word      │   │    │
//! │  │  │ drawer       │  │              │  │ command_error    │   │    │
//! │  │  │ word/letters │  │              │  │ kick_all         │   │    │
//! │  │  │ players      │  │              │  │                  │   │    │
//! │  │  └──────────────┘  └──────────────┘  └──────────────────┘   │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```

pub mod command;
pub mod config;
pub mod machine;
pub mod notify;
pub mod phase;
pub mod session;
pub mod shared;
pub mod snapshot;
pub mod words;

// Re-export commonly used types
pub use command::CommandError;
pub use config::{ConfigError, GameConfig};
pub use machine::{Game, MIN_PLAYERS};
pub use notify::{Notification, Notifier, Outbox};
pub use phase::{Countdown, Phase, PhaseKind, Playing, SelectingWord};
pub use session::{PlayerId, Session, PLACEHOLDER};
pub use shared::{SharedGame, TickDriver};
pub use snapshot::{format_clock, SessionSnapshot};
pub use words::{WordList, WordSource};
