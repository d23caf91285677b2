//! Player commands.
//!
//! The only state change a player can trigger directly is the drawer picking a
//! word. Rejections go back to the caller alone.

use super::machine::Game;
use super::notify::Notifier;
use super::phase::Phase;
use super::session::PlayerId;
use super::words::WordSource;

/// Reasons a command was refused. The messages are shown to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("You're not the drawer!")]
    NotDrawer,

    #[error("Game is not in proper state!")]
    WrongPhase,

    #[error("Selected word is not in word pool.")]
    WordNotOffered,
}

impl<W: WordSource, N: Notifier> Game<W, N> {
    /// The drawer picks a word from the offered pool.
    ///
    /// Checks run in order: caller is the drawer, the drawer is choosing, the
    /// word was offered. On success the choice replaces the fallback; the phase
    /// still runs out its own timer. On failure nothing changes and the error
    /// is also sent to the caller.
    pub fn select_word(&mut self, caller: PlayerId, word: &str) -> Result<(), CommandError> {
        let result = self.try_select_word(caller, word);
        match &result {
            Ok(()) => log::info!("drawer {} selected a word", caller),
            Err(err) => {
                log::debug!("rejected word selection from {}: {:?}", caller, err);
                self.notifier.command_error(caller, &err.to_string());
            }
        }
        result
    }

    fn try_select_word(&mut self, caller: PlayerId, word: &str) -> Result<(), CommandError> {
        if self.session.acting_drawer() != Some(caller) {
            return Err(CommandError::NotDrawer);
        }

        let Phase::SelectingWord(selecting) = self.session.phase() else {
            return Err(CommandError::WrongPhase);
        };
        if !selecting.offers(word) {
            return Err(CommandError::WordNotOffered);
        }

        self.session.set_current_word(word.to_string());
        Ok(())
    }
}
