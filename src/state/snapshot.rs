//! Broadcast view of a session.
//!
//! Everything here may be sent to every player. The secret word and the word
//! pool are deliberately absent.

use std::time::Duration;

use serde::Serialize;

use super::session::{PlayerId, Session};

/// Fields shown to all players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Human-readable phase name
    pub phase: &'static str,
    /// Phase clock as `MM:SS`
    pub clock: String,
    pub round: u32,
    pub max_rounds: u32,
    /// Revealed letters, placeholders for hidden ones
    pub letters: String,
    pub drawer: Option<PlayerId>,
    pub player_count: usize,
}

impl SessionSnapshot {
    pub fn capture(session: &Session) -> Self {
        Self {
            phase: session.phase().name(),
            clock: format_clock(session.phase().clock()),
            round: session.round(),
            max_rounds: session.max_rounds(),
            letters: session.revealed_string(),
            drawer: session.drawer(),
            player_count: session.player_count(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "phase": self.phase,
            "clock": self.clock,
            "round": self.round,
            "max_rounds": self.max_rounds,
            "letters": self.letters,
            "drawer": self.drawer,
            "player_count": self.player_count
        })
    }
}

/// Format as `MM:SS`, dropping fractional seconds.
pub fn format_clock(time: Duration) -> String {
    let secs = time.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
