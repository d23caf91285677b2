//! End-to-end round lifecycle scenarios driven with synthetic time.

use std::time::Duration;

use pretty_assertions::assert_eq;
use sketch_state::{
    CommandError, Game, GameConfig, Notification, Outbox, PhaseKind, PlayerId, WordList,
    WordSource,
};

const SEC: Duration = Duration::from_secs(1);

/// Always offers the same words, in order.
struct FixedWords(Vec<&'static str>);

impl WordSource for FixedWords {
    fn random_words(&mut self, n: usize) -> Vec<String> {
        self.0.iter().take(n).map(|w| w.to_string()).collect()
    }
}

fn quick_config(max_rounds: u32) -> GameConfig {
    GameConfig {
        max_rounds,
        word_pool_size: 3,
        select_word_secs: 3,
        play_secs: 6,
        reveal_secs: 2,
        post_playing_secs: 2,
        post_round_secs: 2,
        post_game_secs: 2,
    }
}

fn join_all<W: WordSource>(game: &mut Game<W, Outbox>, players: &[PlayerId]) {
    for p in players {
        game.player_joined(*p);
    }
}

/// Tick until the game reaches post-game, recording each phase entered.
fn run_to_post_game<W: WordSource>(
    game: &mut Game<W, Outbox>,
) -> Vec<(PhaseKind, u32, Option<PlayerId>)> {
    let mut entered = Vec::new();
    let mut last = game.session().phase_kind();

    for _ in 0..10_000 {
        game.tick(SEC);
        let session = game.session();
        let kind = session.phase_kind();
        if kind != last {
            entered.push((kind, session.round(), session.drawer()));
            last = kind;
        }
        if kind == PhaseKind::PostGame {
            return entered;
        }
    }
    panic!("game never finished");
}

#[test]
fn test_every_drawer_once_per_round() {
    for players in 2..=4i64 {
        for rounds in 1..=3u32 {
            let ids: Vec<PlayerId> = (1..=players).collect();
            let words = WordList::seeded(["cat", "dog", "bird", "fish"], 11);
            let mut game = Game::seeded(quick_config(rounds), words, Outbox::new(), 3);
            join_all(&mut game, &ids);

            let entered = run_to_post_game(&mut game);
            let count = |kind| entered.iter().filter(|(k, _, _)| *k == kind).count();

            let turns = ids.len() * rounds as usize;
            assert_eq!(count(PhaseKind::SelectingWord), turns);
            assert_eq!(count(PhaseKind::Playing), turns);
            assert_eq!(count(PhaseKind::PostPlaying), turns);
            assert_eq!(count(PhaseKind::PostRound), rounds as usize);
            assert_eq!(count(PhaseKind::PostGame), 1);

            let drawers: Vec<(u32, PlayerId)> = entered
                .iter()
                .filter(|(k, _, _)| *k == PhaseKind::SelectingWord)
                .map(|(_, round, drawer)| (*round, drawer.unwrap()))
                .collect();
            let expected: Vec<(u32, PlayerId)> = (1..=rounds)
                .flat_map(|r| ids.iter().map(move |p| (r, *p)))
                .collect();
            assert_eq!(drawers, expected);
            assert_eq!(game.session().round(), rounds);
        }
    }
}

#[test]
fn test_selected_word_is_played() {
    let words = FixedWords(vec!["cat", "dog", "owl"]);
    let mut game = Game::seeded(quick_config(1), words, Outbox::new(), 21);
    join_all(&mut game, &[1, 2]);

    game.tick(SEC);
    assert_eq!(game.session().phase_kind(), PhaseKind::SelectingWord);

    let fallback = game.session().current_word().unwrap().to_string();
    let choice = ["cat", "dog", "owl"]
        .into_iter()
        .find(|w| *w != fallback)
        .unwrap();
    game.select_word(1, choice).unwrap();

    while game.session().phase_kind() == PhaseKind::SelectingWord {
        game.tick(SEC);
    }
    assert_eq!(game.session().phase_kind(), PhaseKind::Playing);
    assert_eq!(game.session().current_word(), Some(choice));

    let secret: Vec<_> = game
        .notifier()
        .pending()
        .iter()
        .filter(|n| matches!(n, Notification::SecretWord { .. }))
        .cloned()
        .collect();
    assert_eq!(
        secret,
        vec![Notification::SecretWord {
            to: 1,
            word: choice.to_string()
        }]
    );
}

#[test]
fn test_fallback_word_when_drawer_idle() {
    for seed in 0..10 {
        let words = WordList::seeded(["cat", "dog", "bird", "fish", "frog"], seed);
        let mut game = Game::seeded(quick_config(1), words, Outbox::new(), seed);
        join_all(&mut game, &[1, 2]);

        game.tick(SEC);
        let fallback = game.session().current_word().unwrap().to_string();
        assert!(!fallback.is_empty());

        while game.session().phase_kind() == PhaseKind::SelectingWord {
            game.tick(SEC);
        }
        assert_eq!(game.session().current_word(), Some(fallback.as_str()));
    }
}

#[test]
fn test_zero_select_time_uses_fallback_immediately() {
    let mut config = quick_config(1);
    config.select_word_secs = 0;
    let mut game = Game::seeded(config, FixedWords(vec!["cat"]), Outbox::new(), 1);
    join_all(&mut game, &[1, 2]);

    game.tick(SEC);
    game.tick(Duration::ZERO);
    assert_eq!(game.session().phase_kind(), PhaseKind::Playing);
    assert_eq!(game.session().current_word(), Some("cat"));
}

#[test]
fn test_cat_scenario() {
    let config = GameConfig {
        max_rounds: 1,
        word_pool_size: 3,
        select_word_secs: 20,
        play_secs: 9,
        ..GameConfig::default()
    };
    let words = FixedWords(vec!["cat", "dog", "owl", "yak"]);
    let mut game = Game::seeded(config, words, Outbox::new(), 8);
    join_all(&mut game, &[1, 2]);

    // t = 0: selection starts with a three word pool
    game.tick(Duration::ZERO);
    assert_eq!(game.session().phase_kind(), PhaseKind::SelectingWord);
    assert_eq!(game.session().phase().word_pool().unwrap().len(), 3);

    // t = 5: drawer picks "cat"
    for _ in 0..5 {
        game.tick(SEC);
    }
    game.select_word(1, "cat").unwrap();
    assert_eq!(game.session().current_word(), Some("cat"));
    assert_eq!(game.snapshot().clock, "00:15");

    // t = 20: playing with every letter hidden
    for _ in 0..15 {
        game.tick(SEC);
    }
    assert_eq!(game.session().phase_kind(), PhaseKind::Playing);
    assert_eq!(game.session().revealed_letters(), &['_', '_', '_']);
    assert_eq!(game.snapshot().letters, "___");
    assert_eq!(game.snapshot().clock, "00:09");

    // One letter every 3s
    let mut counts = Vec::new();
    for _ in 0..9 {
        game.tick(SEC);
        counts.push(game.session().revealed_count());
    }
    assert_eq!(counts, vec![0, 0, 1, 1, 1, 2, 2, 2, 3]);

    // t = 29: turn over, word fully shown
    assert_eq!(game.session().phase_kind(), PhaseKind::PostPlaying);
    assert_eq!(game.session().revealed_string(), "cat");
}

#[test]
fn test_rejections_do_not_disturb_the_game() {
    let words = FixedWords(vec!["cat", "dog", "owl"]);
    let mut game = Game::seeded(quick_config(1), words, Outbox::new(), 2);
    join_all(&mut game, &[1, 2, 3]);
    game.tick(SEC);
    let word = game.session().current_word().unwrap().to_string();
    game.notifier_mut().drain();

    assert_eq!(game.select_word(2, "cat"), Err(CommandError::NotDrawer));
    assert_eq!(game.select_word(1, "emu"), Err(CommandError::WordNotOffered));

    let sent = game.notifier_mut().drain();
    let recipients: Vec<_> = sent.iter().map(|n| n.recipient()).collect();
    assert_eq!(recipients, vec![Some(2), Some(1)]);
    assert_eq!(game.session().current_word(), Some(word.as_str()));

    game.tick(SEC);
    assert_eq!(game.session().phase_kind(), PhaseKind::SelectingWord);
}

#[test]
fn test_late_joiner_draws_this_round() {
    let words = WordList::seeded(["cat", "dog", "bird"], 4);
    let mut game = Game::seeded(quick_config(1), words, Outbox::new(), 4);
    join_all(&mut game, &[1, 2]);
    game.tick(SEC);

    game.player_joined(3);
    let entered = run_to_post_game(&mut game);
    let drawers: Vec<_> = entered
        .iter()
        .filter(|(k, _, _)| *k == PhaseKind::SelectingWord)
        .map(|(_, _, d)| d.unwrap())
        .collect();
    assert_eq!(drawers, vec![2, 3]);
}

#[test]
fn test_game_restarts_after_post_game() {
    let words = WordList::seeded(["cat", "dog", "bird"], 4);
    let mut game = Game::seeded(quick_config(1), words, Outbox::new(), 4);
    join_all(&mut game, &[1, 2]);
    run_to_post_game(&mut game);
    game.notifier_mut().drain();

    while game.session().phase_kind() == PhaseKind::PostGame {
        game.tick(SEC);
    }
    assert_eq!(game.session().phase_kind(), PhaseKind::WaitingForPlayers);
    assert_eq!(
        game.notifier_mut().drain(),
        vec![Notification::KickAll {
            players: vec![1, 2]
        }]
    );

    // Host disconnects everyone
    game.player_left(1);
    game.player_left(2);
    game.tick(SEC);
    assert_eq!(game.session().phase_kind(), PhaseKind::WaitingForPlayers);
}
