//! End-to-end games driven through `Game::dispatch` with in-process services.

use std::sync::Mutex;
use std::sync::mpsc::Receiver;

use rustc_hash::FxHashSet;
use wordle_game::core::{Verdict, Word};
use wordle_game::game::{Command, Game, GameEvent, GameState, Rejection, Severity};
use wordle_game::services::{
    AnswerSource, Enricher, FailurePolicy, ServiceError, Services, Validation, Validator,
    WordListValidator,
};

/// Hands out answers in order, repeating the last one
struct Script(Mutex<Vec<&'static str>>);

impl AnswerSource for Script {
    fn next(&self, _excluded: &FxHashSet<String>) -> Word {
        let mut words = self.0.lock().unwrap();
        let text = if words.len() > 1 { words.remove(0) } else { words[0] };
        Word::new(text).unwrap()
    }
}

struct Glossary;

impl Enricher for Glossary {
    fn describe(&self, word: &Word) -> Option<String> {
        (word.text() == "APPLE").then(|| "a round fruit".to_string())
    }
}

struct Unreachable;

impl Validator for Unreachable {
    fn check(&self, _word: &Word) -> Result<bool, ServiceError> {
        Err(ServiceError::Malformed("offline".to_string()))
    }
}

fn services(answers: &[&'static str]) -> Services {
    Services::new(
        Script(Mutex::new(answers.to_vec())),
        Validation::new(WordListValidator::embedded(), FailurePolicy::Reject),
        Glossary,
    )
}

fn guess(game: &mut Game, services: &Services, text: &str) -> Result<(), Rejection> {
    for ch in text.chars() {
        game.dispatch(Command::EnterLetter(ch), services)?;
    }
    game.dispatch(Command::Submit, services).map(|_| ())
}

fn messages(events: &Receiver<GameEvent>) -> Vec<(String, Severity)> {
    events
        .try_iter()
        .filter_map(|event| match event {
            GameEvent::Message { text, severity, .. } => Some((text, severity)),
            _ => None,
        })
        .collect()
}

#[test]
fn apple_in_two_guesses() {
    let services = services(&["apple"]);
    let mut game = Game::new(6);
    let events = game.subscribe();

    game.dispatch(Command::Restart, &services).unwrap();
    assert_eq!(game.session().state(), GameState::InProgress);

    guess(&mut game, &services, "grape").unwrap();
    assert_eq!(
        game.session().rows()[0].feedback().unwrap().verdicts(),
        &[
            Verdict::Absent,
            Verdict::Absent,
            Verdict::Present,
            Verdict::Present,
            Verdict::Correct
        ]
    );
    assert_eq!(game.session().row(), 1);

    guess(&mut game, &services, "apple").unwrap();
    assert_eq!(game.session().state(), GameState::Won);
    assert!(game.session().rows()[1].feedback().unwrap().is_perfect());

    let history: Vec<_> = game.history().newest_first().collect();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].word.text(), "APPLE");
    assert_eq!(history[0].meaning.as_deref(), Some("a round fruit"));

    let messages = messages(&events);
    assert_eq!(
        messages.last(),
        Some(&("Correct! 🎉".to_string(), Severity::Success))
    );
    assert_eq!(game.stats().guess_distribution[1], 1);
}

#[test]
fn invalid_word_keeps_letters() {
    let services = services(&["apple"]);
    let mut game = Game::default();
    let events = game.subscribe();
    game.dispatch(Command::Restart, &services).unwrap();

    let rejection = guess(&mut game, &services, "xxxxx").unwrap_err();
    assert!(matches!(rejection, Rejection::NotAWord(_)));
    assert_eq!(game.session().row(), 0);
    assert_eq!(game.session().col(), 5);
    assert!(
        messages(&events)
            .iter()
            .any(|(text, severity)| text.contains("XXXXX") && *severity == Severity::Error)
    );

    // Fix the row and carry on
    for _ in 0..5 {
        game.dispatch(Command::Delete, &services).unwrap();
    }
    guess(&mut game, &services, "grape").unwrap();
    assert_eq!(game.session().row(), 1);
}

#[test]
fn losing_reveals_answer_and_locks_board() {
    let services = services(&["apple"]);
    let mut game = Game::new(3);
    let events = game.subscribe();
    game.dispatch(Command::Restart, &services).unwrap();

    for word in ["grape", "lemon", "tiger"] {
        guess(&mut game, &services, word).unwrap();
    }
    assert_eq!(game.session().state(), GameState::Lost);
    assert_eq!(
        game.dispatch(Command::EnterLetter('a'), &services),
        Err(Rejection::GameOver)
    );
    assert!(
        messages(&events)
            .iter()
            .any(|(text, _)| text == "Answer: APPLE")
    );
    assert_eq!(game.stats().total_games, 1);
    assert_eq!(game.stats().games_won, 0);
}

#[test]
fn history_holds_each_answer_once() {
    let services = services(&["apple", "apple", "grape"]);
    let mut game = Game::default();

    for answer in ["apple", "apple", "grape"] {
        game.dispatch(Command::Restart, &services).unwrap();
        guess(&mut game, &services, answer).unwrap();
        assert_eq!(game.session().state(), GameState::Won);
    }

    let words: Vec<&str> = game
        .history()
        .newest_first()
        .map(|entry| entry.word.text())
        .collect();
    assert_eq!(words, ["GRAPE", "APPLE"]);
    assert_eq!(game.stats().current_streak, 3);
}

#[test]
fn outage_follows_failure_policy() {
    for (policy, accepted) in [(FailurePolicy::Accept, true), (FailurePolicy::Reject, false)] {
        let services = Services::new(
            Script(Mutex::new(vec!["apple"])),
            Validation::new(Unreachable, policy),
            Glossary,
        );
        let mut game = Game::default();
        game.dispatch(Command::Restart, &services).unwrap();

        assert_eq!(guess(&mut game, &services, "grape").is_ok(), accepted);
        // The answer itself never needs the validator
        game.dispatch(Command::Restart, &services).unwrap();
        guess(&mut game, &services, "apple").unwrap();
        assert_eq!(game.session().state(), GameState::Won);
    }
}

#[test]
fn offline_services_play_a_game() {
    let services = Services::offline();
    let mut game = Game::default();
    game.dispatch(Command::Restart, &services).unwrap();

    let answer = game.session().answer().unwrap().clone();
    assert!(game.used_answers().contains(answer.text()));

    guess(&mut game, &services, answer.text()).unwrap();
    assert_eq!(game.session().state(), GameState::Won);
    assert!(game.history().contains(&answer));
    // No enrichment offline
    assert!(game.history().newest_first().all(|entry| entry.meaning.is_none()));
}
