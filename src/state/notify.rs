//! Outbound messages.
//!
//! The round machine never talks to the network. It hands addressed messages
//! to a [`Notifier`] supplied by the host.

use serde::Serialize;

use super::session::PlayerId;

/// Receiver for messages addressed to a single player, or to the host.
pub trait Notifier {
    /// Offered words, drawer only. Sent once per word selection phase.
    fn word_pool(&mut self, drawer: PlayerId, pool: &[String]);

    /// The secret word, drawer only. Sent once per playing phase.
    fn secret_word(&mut self, drawer: PlayerId, word: &str);

    /// A rejected command, caller only.
    fn command_error(&mut self, caller: PlayerId, message: &str);

    /// The game is over and every listed player should be disconnected.
    fn kick_all(&mut self, players: &[PlayerId]);
}

/// A single outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    WordPool { to: PlayerId, words: Vec<String> },
    SecretWord { to: PlayerId, word: String },
    CommandError { to: PlayerId, message: String },
    KickAll { players: Vec<PlayerId> },
}

impl Notification {
    /// Recipient, or `None` when addressed to the host.
    pub fn recipient(&self) -> Option<PlayerId> {
        match self {
            Self::WordPool { to, .. }
            | Self::SecretWord { to, .. }
            | Self::CommandError { to, .. } => Some(*to),
            Self::KickAll { .. } => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Queue of notifications for the host to drain after each tick or command.
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    pending: Vec<Notification>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything queued so far.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Messages addressed to one player.
    pub fn for_player(&self, player_id: PlayerId) -> impl Iterator<Item = &Notification> {
        self.pending
            .iter()
            .filter(move |n| n.recipient() == Some(player_id))
    }
}

impl Notifier for Outbox {
    fn word_pool(&mut self, drawer: PlayerId, pool: &[String]) {
        self.pending.push(Notification::WordPool {
            to: drawer,
            words: pool.to_vec(),
        });
    }

    fn secret_word(&mut self, drawer: PlayerId, word: &str) {
        self.pending.push(Notification::SecretWord {
            to: drawer,
            word: word.to_string(),
        });
    }

    fn command_error(&mut self, caller: PlayerId, message: &str) {
        self.pending.push(Notification::CommandError {
            to: caller,
            message: message.to_string(),
        });
    }

    fn kick_all(&mut self, players: &[PlayerId]) {
        self.pending.push(Notification::KickAll {
            players: players.to_vec(),
        });
    }
}
