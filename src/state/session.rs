//! Shared session context.
//!
//! One [`Session`] exists per running game. The round machine, the word
//! selection command and outside observers all read it; only the machine and
//! the command gateway write it, and never at the same time.

use std::collections::HashSet;

use super::config::GameConfig;
use super::phase::{Phase, PhaseKind};

/// Participant identifier supplied by the host.
pub type PlayerId = i64;

/// Symbol shown for letters that are still hidden.
pub const PLACEHOLDER: char = '_';

/// Round lifecycle state for a single game.
#[derive(Debug, Clone)]
pub struct Session {
    /// Host settings, read at each phase entry
    pub(crate) config: GameConfig,

    /// Active phase
    phase: Phase,

    /// Current round (1-indexed)
    round: u32,

    /// Round limit of the running game, never below `round`
    max_rounds: u32,

    /// Position in the roster whose turn it is, or whose turn just ended
    turn_cursor: usize,

    /// Drawer captured when the turn began; cleared if they leave
    drawer: Option<PlayerId>,

    /// Players who already had a turn this round
    drawn: HashSet<PlayerId>,

    /// Secret word of the current turn
    current_word: Option<String>,

    /// Letters visible to guessers
    revealed: Vec<char>,

    /// Which positions of `revealed` have been uncovered
    uncovered: Vec<bool>,

    /// Connected participants in join order
    players: Vec<PlayerId>,

    /// When the session was created
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Session {
    /// Create a session waiting for players.
    pub fn new(config: GameConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid game config");
        let config = config.clamped();
        Self {
            max_rounds: config.max_rounds,
            config,
            phase: Phase::waiting(),
            round: 1,
            turn_cursor: 0,
            drawer: None,
            drawn: HashSet::new(),
            current_word: None,
            revealed: Vec::new(),
            uncovered: Vec::new(),
            players: Vec::new(),
            created_at: chrono::Utc::now(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub(crate) fn phase_mut(&mut self) -> &mut Phase {
        &mut self.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Round limit of the running game. Changes to the configured limit are
    /// picked up when a round starts, and never drop it below the current
    /// round.
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn is_last_round(&self) -> bool {
        self.round >= self.max_rounds
    }

    /// Take the configured round limit for the round that is starting.
    pub(crate) fn start_round(&mut self) {
        self.max_rounds = self.config.max_rounds.max(self.round).max(1);
    }

    /// Move to the next round and hand the pen back to the first player.
    pub(crate) fn advance_round(&mut self) {
        debug_assert!(self.round < self.max_rounds, "round past max_rounds");
        self.round = (self.round + 1).min(self.max_rounds);
        self.turn_cursor = 0;
        self.drawn.clear();
        self.start_round();
    }

    // Participants

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.players.contains(&player_id)
    }

    /// Record a connected participant. Returns false if already present.
    pub fn player_joined(&mut self, player_id: PlayerId) -> bool {
        if self.has_player(player_id) {
            return false;
        }
        self.players.push(player_id);
        true
    }

    /// Record a disconnect and re-validate the turn cursor.
    ///
    /// Players before the cursor shift it down so the rotation order is kept.
    /// When the drawer leaves, their turn is over even if they reconnect, and
    /// the cursor stays put so it now points at their successor, who draws
    /// next.
    pub fn player_left(&mut self, player_id: PlayerId) -> bool {
        let Some(pos) = self.players.iter().position(|&p| p == player_id) else {
            return false;
        };
        self.players.remove(pos);

        if pos < self.turn_cursor {
            self.turn_cursor -= 1;
        }
        if self.drawer == Some(player_id) {
            self.drawer = None;
        }
        true
    }

    // Drawer rotation

    /// The drawer, if they are still connected.
    pub fn drawer(&self) -> Option<PlayerId> {
        self.drawer.filter(|id| self.has_player(*id))
    }

    /// Position of the drawer in the live roster.
    pub fn drawer_index(&self) -> Option<usize> {
        let drawer = self.drawer?;
        self.players.iter().position(|&p| p == drawer)
    }

    pub fn is_drawer(&self, player_id: PlayerId) -> bool {
        self.drawer() == Some(player_id)
    }

    /// Who may issue drawer commands: the pinned drawer, or whoever sits at
    /// the turn cursor when no turn is running.
    pub fn acting_drawer(&self) -> Option<PlayerId> {
        self.drawer()
            .or_else(|| self.players.get(self.turn_cursor).copied())
    }

    /// Roster position of the next drawer this round. Players who already
    /// drew this round are skipped, including ones who left and came back.
    /// Equal to `player_count()` when everyone has had a turn.
    pub fn next_turn_index(&self) -> usize {
        (self.turn_cursor..self.players.len())
            .find(|&i| !self.drawn.contains(&self.players[i]))
            .unwrap_or(self.players.len())
    }

    /// Move the cursor to `index` for the upcoming turn.
    pub(crate) fn set_turn_cursor(&mut self, index: usize) {
        self.turn_cursor = index;
    }

    /// Pin the drawer at the cursor for a new turn. Returns `None` when the
    /// roster is empty.
    pub(crate) fn begin_turn(&mut self) -> Option<PlayerId> {
        if self.players.is_empty() {
            self.drawer = None;
            return None;
        }
        if self.turn_cursor >= self.players.len() {
            self.turn_cursor = self.players.len() - 1;
        }
        let drawer = self.players[self.turn_cursor];
        self.drawn.insert(drawer);
        self.drawer = Some(drawer);
        self.drawer
    }

    // Word and letters

    /// The secret word. Only the drawer may ever be shown this.
    pub fn current_word(&self) -> Option<&str> {
        self.current_word.as_deref()
    }

    pub(crate) fn set_current_word(&mut self, word: String) {
        self.current_word = Some(word);
    }

    /// Letters visible to guessers, one per character of the word.
    pub fn revealed_letters(&self) -> &[char] {
        &self.revealed
    }

    pub fn revealed_string(&self) -> String {
        self.revealed.iter().collect()
    }

    pub fn revealed_count(&self) -> usize {
        self.uncovered.iter().filter(|shown| **shown).count()
    }

    /// Positions not uncovered yet.
    pub fn hidden_positions(&self) -> Vec<usize> {
        self.uncovered
            .iter()
            .enumerate()
            .filter(|(_, shown)| !**shown)
            .map(|(i, _)| i)
            .collect()
    }

    /// Hide every letter of the current word.
    pub(crate) fn reset_letters(&mut self) {
        let len = self.current_word.as_deref().map_or(0, |w| w.chars().count());
        self.revealed = vec![PLACEHOLDER; len];
        self.uncovered = vec![false; len];
    }

    pub(crate) fn clear_letters(&mut self) {
        self.revealed.clear();
        self.uncovered.clear();
    }

    /// Uncover one position. Out-of-range indices are ignored.
    pub(crate) fn reveal(&mut self, index: usize) -> Option<char> {
        let letter = self.current_word.as_deref()?.chars().nth(index)?;
        let slot = self.revealed.get_mut(index)?;
        *slot = letter;
        if let Some(shown) = self.uncovered.get_mut(index) {
            *shown = true;
        }
        Some(letter)
    }

    /// Return to a fresh game waiting for players. The roster is kept.
    pub(crate) fn reset(&mut self) {
        self.phase = Phase::waiting();
        self.round = 1;
        self.turn_cursor = 0;
        self.drawer = None;
        self.drawn.clear();
        self.current_word = None;
        self.clear_letters();
        self.start_round();
    }
}
