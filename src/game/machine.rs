//! The game state machine
//!
//! `Game` owns the current session, the set of answers already used in this
//! run, the answer history and the statistics. Collaborator lookups are split
//! into request/complete pairs so a front end can run them off its event loop;
//! every request carries the session (and row) it was issued for, and results
//! for anything no longer current are rejected as [`Rejection::Stale`].

use super::{
    Command, GameEvent, GameState, History, Rejection, Session, SessionId, Severity, Statistics,
};
use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::services::Services;
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::sync::mpsc::{self, Receiver, Sender};

/// Default number of guesses per game
pub const DEFAULT_MAX_TRIES: usize = 6;

/// Ask an answer source for a word for `session`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRequest {
    pub session: SessionId,
    /// Answers already used in this run
    pub excluded: FxHashSet<String>,
}

/// Ask a validator whether `guess` is a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    pub session: SessionId,
    pub row: usize,
    pub guess: Word,
    /// The guess is the answer itself; no lookup is needed
    pub pre_approved: bool,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub feedback: Feedback,
    pub state: GameState,
    /// Word newly added to the history whose meaning should be looked up
    pub enrich: Option<Word>,
}

pub struct Game {
    max_tries: usize,
    next_session: u64,
    session: Session,
    used_answers: FxHashSet<String>,
    history: History,
    stats: Statistics,
    subscribers: Vec<Sender<GameEvent>>,
}

impl Game {
    /// Create a game with `max_tries` rows per session
    ///
    /// The first session is created by [`Game::start_game`].
    #[must_use]
    pub fn new(max_tries: usize) -> Self {
        let max_tries = max_tries.max(1);
        Self {
            max_tries,
            next_session: 1,
            session: Session::new(SessionId(0), max_tries),
            used_answers: FxHashSet::default(),
            history: History::new(),
            stats: Statistics::new(max_tries),
            subscribers: Vec::new(),
        }
    }

    /// Receive every event published from now on
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.max_tries
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn used_answers(&self) -> &FxHashSet<String> {
        &self.used_answers
    }

    /// Throw away the current session and start a new one
    ///
    /// The returned request must be resolved with [`Game::resolve_answer`].
    pub fn start_game(&mut self) -> AnswerRequest {
        let id = SessionId(self.next_session);
        self.next_session += 1;
        self.session = Session::new(id, self.max_tries);

        info!("session {id}: started, waiting for answer");
        self.emit(GameEvent::SessionStarted { session: id });
        self.emit(GameEvent::StateChanged(GameState::AwaitingAnswer));
        self.emit(GameEvent::transient(
            "Starting a new game. Loading the word...",
            Severity::Info,
        ));

        AnswerRequest {
            session: id,
            excluded: self.used_answers.clone(),
        }
    }

    /// Install the answer for `session`
    ///
    /// # Errors
    /// [`Rejection::Stale`] if `session` is not current or already has an answer.
    pub fn resolve_answer(&mut self, session: SessionId, answer: Word) -> Result<(), Rejection> {
        if session != self.session.id || self.session.state != GameState::AwaitingAnswer {
            debug!("discarding answer for {session}, current is {}", self.session.id);
            return Err(Rejection::Stale);
        }

        debug!("session {session}: answer resolved");
        self.used_answers.insert(answer.text().to_string());
        self.session.answer = Some(answer);
        self.session.state = GameState::InProgress;

        self.emit(GameEvent::AnswerReady { session });
        self.emit(GameEvent::StateChanged(GameState::InProgress));
        self.emit(GameEvent::transient("Guess the word!", Severity::Info));
        Ok(())
    }

    /// Type a letter into the next free tile of the current row
    ///
    /// # Errors
    /// Rejected when the session is not accepting input, the row is full or
    /// `ch` is not an ASCII letter.
    pub fn enter_letter(&mut self, ch: char) -> Result<(), Rejection> {
        self.ensure_accepting_input().map_err(|r| self.reject(r))?;
        if !ch.is_ascii_alphabetic() {
            return Err(self.reject(Rejection::InvalidLetter(ch)));
        }
        if self.session.col >= WORD_LENGTH {
            return Err(self.reject(Rejection::RowFull));
        }

        let (row, col) = (self.session.row, self.session.col);
        let letter = ch.to_ascii_uppercase();
        self.session.set_letter(row, col, Some(letter as u8));
        self.session.col += 1;

        self.emit(GameEvent::TileChanged {
            row,
            col,
            letter: Some(letter),
        });
        Ok(())
    }

    /// Remove the last letter of the current row
    ///
    /// # Errors
    /// Rejected when the session is not accepting input or the row is empty.
    pub fn delete_letter(&mut self) -> Result<(), Rejection> {
        self.ensure_accepting_input().map_err(|r| self.reject(r))?;
        if self.session.col == 0 {
            return Err(self.reject(Rejection::NothingToDelete));
        }

        self.session.col -= 1;
        let (row, col) = (self.session.row, self.session.col);
        self.session.set_letter(row, col, None);

        self.emit(GameEvent::TileChanged {
            row,
            col,
            letter: None,
        });
        Ok(())
    }

    /// First half of a submission: lock the row and ask for a validity check
    ///
    /// No other input is accepted until [`Game::complete_submit`] is called
    /// with the returned request or the session is replaced.
    ///
    /// # Errors
    /// [`Rejection::Incomplete`] when the row is not full, or any rejection
    /// from a session that is not accepting input.
    pub fn begin_submit(&mut self) -> Result<ValidationRequest, Rejection> {
        self.ensure_accepting_input().map_err(|r| self.reject(r))?;

        let guess = match self.session.current_word() {
            Some(word) if self.session.col == WORD_LENGTH => word,
            _ => return Err(self.reject(Rejection::Incomplete)),
        };

        let pre_approved = self.session.answer.as_ref() == Some(&guess);
        self.session.pending = Some(self.session.row);

        debug!(
            "session {}: validating {guess} (row {})",
            self.session.id, self.session.row
        );
        Ok(ValidationRequest {
            session: self.session.id,
            row: self.session.row,
            guess,
            pre_approved,
        })
    }

    /// Second half of a submission: apply the validity result
    ///
    /// # Errors
    /// - [`Rejection::Stale`] if the request is not the outstanding one
    /// - [`Rejection::NotAWord`] if the guess was not valid; letters stay in place
    pub fn complete_submit(
        &mut self,
        request: &ValidationRequest,
        valid: bool,
    ) -> Result<Submitted, Rejection> {
        if request.session != self.session.id || self.session.pending != Some(request.row) {
            debug!(
                "discarding validation of {} for {} row {}",
                request.guess, request.session, request.row
            );
            return Err(Rejection::Stale);
        }
        self.session.pending = None;

        if !valid && !request.pre_approved {
            return Err(self.reject(Rejection::NotAWord(request.guess.clone())));
        }

        let Some(answer) = self.session.answer.clone() else {
            return Err(self.reject(Rejection::AnswerPending));
        };

        let row = self.session.row;
        let guess = request.guess.clone();
        let feedback = Feedback::evaluate(&guess, &answer);

        self.session.set_feedback(row, feedback);
        let changed = self.session.keyboard.merge(&guess, &feedback);

        self.emit(GameEvent::RowEvaluated {
            row,
            guess: guess.clone(),
            feedback,
        });
        for (letter, verdict) in changed {
            self.emit(GameEvent::KeyUpdated {
                letter: char::from(letter),
                verdict,
            });
        }

        if feedback.is_perfect() {
            self.session.state = GameState::Won;
            self.stats.record_win(row + 1);
            info!("session {}: won in {} guesses", self.session.id, row + 1);

            self.emit(GameEvent::sticky("Correct! 🎉", Severity::Success));
            let enrich = self.finish(&answer);
            return Ok(Submitted {
                feedback,
                state: GameState::Won,
                enrich,
            });
        }

        self.session.row += 1;
        self.session.col = 0;

        if self.session.row >= self.max_tries {
            self.session.state = GameState::Lost;
            self.stats.record_loss();
            info!("session {}: lost, answer was {answer}", self.session.id);

            self.emit(GameEvent::sticky(format!("Answer: {answer}"), Severity::Info));
            let enrich = self.finish(&answer);
            return Ok(Submitted {
                feedback,
                state: GameState::Lost,
                enrich,
            });
        }

        Ok(Submitted {
            feedback,
            state: GameState::InProgress,
            enrich: None,
        })
    }

    /// Attach a looked-up meaning to a history entry
    ///
    /// History entries outlive sessions, so this applies whenever it arrives.
    pub fn apply_enrichment(&mut self, word: &Word, meaning: Option<String>) -> bool {
        let Some(meaning) = meaning else {
            debug!("no meaning found for {word}");
            return false;
        };
        let applied = self.history.annotate(word, meaning);
        if applied {
            self.emit(GameEvent::HistoryChanged);
        }
        applied
    }

    /// Run a command to completion, calling collaborators inline
    ///
    /// Returns the submission result for an accepted [`Command::Submit`].
    ///
    /// # Errors
    /// Any rejection raised by the underlying operation.
    pub fn dispatch(
        &mut self,
        command: Command,
        services: &Services,
    ) -> Result<Option<Submitted>, Rejection> {
        match command {
            Command::EnterLetter(ch) => self.enter_letter(ch).map(|()| None),
            Command::Delete => self.delete_letter().map(|()| None),
            Command::Submit => {
                let request = self.begin_submit()?;
                let valid = request.pre_approved || services.validation.is_valid(&request.guess);
                let submitted = self.complete_submit(&request, valid)?;

                if let Some(word) = &submitted.enrich {
                    let meaning = services.enricher.describe(word);
                    self.apply_enrichment(word, meaning);
                }
                Ok(Some(submitted))
            }
            Command::Restart => {
                let request = self.start_game();
                let answer = services.answers.next(&request.excluded);
                self.resolve_answer(request.session, answer).map(|()| None)
            }
        }
    }

    fn ensure_accepting_input(&self) -> Result<(), Rejection> {
        match self.session.state {
            GameState::AwaitingAnswer => Err(Rejection::AnswerPending),
            GameState::Won | GameState::Lost => Err(Rejection::GameOver),
            GameState::InProgress if self.session.pending.is_some() => {
                Err(Rejection::ValidationPending)
            }
            GameState::InProgress => Ok(()),
        }
    }

    /// Publish the history entry for a finished game
    fn finish(&mut self, answer: &Word) -> Option<Word> {
        self.emit(GameEvent::StateChanged(self.session.state));
        if self.history.add(answer) {
            self.emit(GameEvent::HistoryChanged);
            Some(answer.clone())
        } else {
            None
        }
    }

    fn reject(&mut self, rejection: Rejection) -> Rejection {
        if let Some(severity) = rejection.severity() {
            self.emit(GameEvent::transient(rejection.to_string(), severity));
        }
        rejection
    }

    fn emit(&mut self, event: GameEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TRIES)
    }
}
