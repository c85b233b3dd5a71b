//! Background lookups for the TUI
//!
//! Each lookup runs on its own short-lived thread and reports back over a
//! channel drained by the event loop. Results carry the request they answer so
//! the game can discard anything that is no longer current.

use crate::core::Word;
use crate::game::{AnswerRequest, SessionId, ValidationRequest};
use crate::services::Services;
use log::debug;
use std::sync::mpsc::{self, Receiver, Sender, TryIter};
use std::thread;

/// A finished lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Answer {
        session: SessionId,
        word: Word,
    },
    Validity {
        request: ValidationRequest,
        valid: bool,
    },
    Meaning {
        word: Word,
        meaning: Option<String>,
    },
}

pub struct Workers {
    services: Services,
    tx: Sender<LookupResult>,
    rx: Receiver<LookupResult>,
}

impl Workers {
    #[must_use]
    pub fn new(services: Services) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { services, tx, rx }
    }

    pub fn fetch_answer(&self, request: AnswerRequest) {
        self.spawn(move |services| {
            let word = services.answers.next(&request.excluded);
            LookupResult::Answer {
                session: request.session,
                word,
            }
        });
    }

    /// Check a guess; the answer itself never goes to the validator
    pub fn validate(&self, request: ValidationRequest) {
        if request.pre_approved {
            deliver(
                &self.tx,
                LookupResult::Validity {
                    request,
                    valid: true,
                },
            );
            return;
        }

        self.spawn(move |services| {
            let valid = services.validation.is_valid(&request.guess);
            LookupResult::Validity { request, valid }
        });
    }

    pub fn describe(&self, word: Word) {
        self.spawn(move |services| {
            let meaning = services.enricher.describe(&word);
            LookupResult::Meaning { word, meaning }
        });
    }

    /// Lookups that have finished since the last call
    pub fn results(&self) -> TryIter<'_, LookupResult> {
        self.rx.try_iter()
    }

    fn spawn(&self, lookup: impl FnOnce(&Services) -> LookupResult + Send + 'static) {
        let services = self.services.clone();
        let tx = self.tx.clone();
        thread::spawn(move || deliver(&tx, lookup(&services)));
    }
}

fn deliver(tx: &Sender<LookupResult>, result: LookupResult) {
    if tx.send(result).is_err() {
        debug!("lookup finished after the app closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{
        FailurePolicy, FallbackPool, NoEnrichment, Validation, WordListValidator,
    };
    use rustc_hash::FxHashSet;
    use std::time::Duration;

    fn workers() -> Workers {
        let pool = FallbackPool::new(vec![Word::new("apple").unwrap()]).unwrap();
        Workers::new(Services::new(
            pool,
            Validation::new(WordListValidator::embedded(), FailurePolicy::Reject),
            NoEnrichment,
        ))
    }

    fn next(workers: &Workers) -> LookupResult {
        workers.rx.recv_timeout(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn answer_lookup_reports_its_session() {
        let workers = workers();
        workers.fetch_answer(AnswerRequest {
            session: SessionId(7),
            excluded: FxHashSet::default(),
        });

        assert_eq!(
            next(&workers),
            LookupResult::Answer {
                session: SessionId(7),
                word: Word::new("apple").unwrap(),
            }
        );
    }

    #[test]
    fn validation_uses_the_validator() {
        let workers = workers();
        let request = ValidationRequest {
            session: SessionId(1),
            row: 0,
            guess: Word::new("zzzzz").unwrap(),
            pre_approved: false,
        };
        workers.validate(request.clone());

        assert_eq!(
            next(&workers),
            LookupResult::Validity {
                request,
                valid: false
            }
        );
    }

    #[test]
    fn pre_approved_guess_skips_lookup() {
        let workers = workers();
        let request = ValidationRequest {
            session: SessionId(1),
            row: 2,
            guess: Word::new("zzzzz").unwrap(),
            pre_approved: true,
        };
        workers.validate(request.clone());

        // Sent inline, so it is already queued
        assert_eq!(
            workers.results().next(),
            Some(LookupResult::Validity {
                request,
                valid: true
            })
        );
    }

    #[test]
    fn delivery_after_close_is_dropped() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        deliver(
            &tx,
            LookupResult::Meaning {
                word: Word::new("apple").unwrap(),
                meaning: None,
            },
        );
    }

    #[test]
    fn meaning_lookup_carries_the_word() {
        let workers = workers();
        workers.describe(Word::new("apple").unwrap());

        assert_eq!(
            next(&workers),
            LookupResult::Meaning {
                word: Word::new("apple").unwrap(),
                meaning: None,
            }
        );
    }
}
