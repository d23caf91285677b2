//! Round machine.
//!
//! [`Game::tick`] is called once per simulation step with the wall-clock time
//! elapsed since the previous step. Each call moves the active phase's timers,
//! checks its exit condition, and performs at most one transition. A phase
//! entered during a tick is first evaluated on the following tick.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::config::{ConfigError, GameConfig};
use super::notify::{Notifier, Outbox};
use super::phase::{Countdown, Phase, PhaseKind, Playing, SelectingWord};
use super::session::{PlayerId, Session};
use super::snapshot::SessionSnapshot;
use super::words::{WordList, WordSource};

/// Participants needed before a game can run.
pub const MIN_PLAYERS: usize = 2;

/// A game: the session plus the collaborators the machine calls out to.
#[derive(Debug)]
pub struct Game<W = WordList, N = Outbox> {
    pub(crate) session: Session,
    pub(crate) words: W,
    pub(crate) notifier: N,
    rng: SmallRng,
}

impl<W: WordSource, N: Notifier> Game<W, N> {
    pub fn new(config: GameConfig, words: W, notifier: N) -> Self {
        Self::with_rng(config, words, notifier, SmallRng::from_os_rng())
    }

    /// Deterministic fallback picks and letter reveals.
    pub fn seeded(config: GameConfig, words: W, notifier: N, seed: u64) -> Self {
        Self::with_rng(config, words, notifier, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, words: W, notifier: N, rng: SmallRng) -> Self {
        Self {
            session: Session::new(config),
            words,
            notifier,
            rng,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Apply a console-style setting such as `sketch_playtime 90`.
    ///
    /// Settings take effect at the next phase entry; a new round limit at the
    /// next round start.
    pub fn apply_setting(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        self.session.config.apply_setting(name, value)
    }

    /// Replace the whole configuration. Rejected if any field is out of range.
    pub fn set_config(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.session.config = config;
        Ok(())
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn words_mut(&mut self) -> &mut W {
        &mut self.words
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.session)
    }

    pub fn player_joined(&mut self, player_id: PlayerId) -> bool {
        let added = self.session.player_joined(player_id);
        if added {
            log::info!(
                "player {} joined ({} connected)",
                player_id,
                self.session.player_count()
            );
        }
        added
    }

    pub fn player_left(&mut self, player_id: PlayerId) -> bool {
        let was_drawer = self.session.is_drawer(player_id);
        let removed = self.session.player_left(player_id);
        if removed {
            log::info!(
                "player {} left ({} connected)",
                player_id,
                self.session.player_count()
            );
            if was_drawer && self.session.phase_kind().is_active() {
                log::warn!("drawer {} left during {}", player_id, self.session.phase_kind());
            }
        }
        removed
    }

    /// Advance the game by one step.
    pub fn tick(&mut self, dt: Duration) {
        self.session.phase_mut().advance(dt);
        let kind = self.session.phase_kind();

        if kind.is_active() && self.session.player_count() < MIN_PLAYERS {
            log::warn!(
                "only {} participant(s) during {}; waiting for players",
                self.session.player_count(),
                kind
            );
            self.session.reset();
            return;
        }

        match kind {
            PhaseKind::WaitingForPlayers => {
                if self.session.player_count() >= MIN_PLAYERS {
                    self.session.start_round();
                    self.enter_selecting_word();
                }
            }
            PhaseKind::SelectingWord => {
                if self.session.drawer().is_none() {
                    self.enter_post_playing();
                } else if self.session.phase().is_expired() {
                    self.enter_playing();
                }
            }
            PhaseKind::Playing => {
                if self.session.drawer().is_none() {
                    self.enter_post_playing();
                    return;
                }
                let reveal_due = match self.session.phase_mut() {
                    Phase::Playing(playing) => playing.take_reveal(),
                    _ => false,
                };
                if reveal_due {
                    self.reveal_random_letter();
                }
                if self.session.phase().is_expired() {
                    self.enter_post_playing();
                }
            }
            PhaseKind::PostPlaying => {
                if self.session.phase().is_expired() {
                    let next = self.session.next_turn_index();
                    if next < self.session.player_count() {
                        self.session.set_turn_cursor(next);
                        self.enter_selecting_word();
                    } else {
                        self.enter_post_round();
                    }
                }
            }
            PhaseKind::PostRound => {
                if self.session.phase().is_expired() {
                    if self.session.is_last_round() {
                        self.enter_post_game();
                    } else {
                        self.session.advance_round();
                        self.enter_selecting_word();
                    }
                }
            }
            PhaseKind::PostGame => {
                if self.session.phase().is_expired() {
                    log::info!("game over; disconnecting {} players", self.session.player_count());
                    self.notifier.kick_all(self.session.players());
                    self.session.reset();
                }
            }
        }
    }

    fn enter_selecting_word(&mut self) {
        let Some(drawer) = self.session.begin_turn() else {
            self.session.reset();
            return;
        };

        let pool = self.words.random_words(self.session.config.word_pool_size);
        // Picked now so an idle drawer still gets a word when time runs out
        let Some(fallback) = pool.choose(&mut self.rng).cloned() else {
            log::warn!("word source returned no words; waiting for players");
            self.session.reset();
            return;
        };

        self.session.set_current_word(fallback);
        self.session.clear_letters();
        self.notifier.word_pool(drawer, &pool);

        let duration = self.session.config.select_word_duration();
        self.session
            .set_phase(Phase::SelectingWord(SelectingWord::new(pool, duration)));

        log::info!(
            "round {}/{}: player {} is selecting a word",
            self.session.round(),
            self.session.max_rounds(),
            drawer
        );
    }

    fn enter_playing(&mut self) {
        let (Some(drawer), Some(word)) = (
            self.session.drawer(),
            self.session.current_word().map(str::to_string),
        ) else {
            debug_assert!(false, "entered playing without a drawer and word");
            self.enter_post_playing();
            return;
        };

        self.session.reset_letters();
        let config = &self.session.config;
        let playing = Playing::new(
            config.play_duration(),
            word.chars().count(),
            config.reveal_interval(),
        );

        log::debug!("sending secret word to drawer {}", drawer);
        self.notifier.secret_word(drawer, &word);
        self.session.set_phase(Phase::Playing(playing));

        log::info!("player {} is drawing", drawer);
    }

    fn enter_post_playing(&mut self) {
        let duration = self.session.config.post_playing_duration();
        self.session
            .set_phase(Phase::PostPlaying(Countdown::new(duration)));
        log::info!("turn over");
    }

    fn enter_post_round(&mut self) {
        let duration = self.session.config.post_round_duration();
        self.session.set_phase(Phase::PostRound(Countdown::new(duration)));
        log::info!(
            "round {}/{} over",
            self.session.round(),
            self.session.max_rounds()
        );
    }

    fn enter_post_game(&mut self) {
        let duration = self.session.config.post_game_duration();
        self.session.set_phase(Phase::PostGame(Countdown::new(duration)));
        log::info!("game over after {} rounds", self.session.round());
    }

    /// Uncover one still-hidden position, if any remain.
    fn reveal_random_letter(&mut self) {
        let hidden = self.session.hidden_positions();
        let Some(&index) = hidden.choose(&mut self.rng) else {
            return;
        };
        if self.session.reveal(index).is_some() {
            log::debug!(
                "revealed position {} ({}/{})",
                index,
                self.session.revealed_count(),
                self.session.revealed_letters().len()
            );
        }
    }
}
