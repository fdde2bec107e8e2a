//! Daily game engine
//!
//! Ties the state machine to a [`Clock`] and a [`KeyValueStore`]: decides at
//! start-up whether today is still playable, persists the finished game and
//! statistics, and resets the board at midnight.

use super::daily::DailyWords;
use super::records::{PersistedRecord, Statistics};
use super::rollover::Rollover;
use super::state::{GameState, GuessResult, Outcome};
use crate::clock::Clock;
use crate::storage::{KeyValueStore, StoreError, keys};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info, warn};

/// Format of the completion marker
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read-only view of a day that was already finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedView {
    pub date: NaiveDate,
    pub record: PersistedRecord,
}

/// What the player sees today
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Playing(GameState),
    Locked(LockedView),
}

impl Session {
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self {
            Self::Playing(state) => state.outcome(),
            Self::Locked(view) => view.record.outcome,
        }
    }

    #[must_use]
    pub fn lives_remaining(&self) -> u8 {
        match self {
            Self::Playing(state) => state.lives_remaining(),
            Self::Locked(view) => view.record.lives_remaining,
        }
    }

    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        match self {
            Self::Playing(state) => state.guessed_letters(),
            Self::Locked(view) => &view.record.guessed_letters,
        }
    }

    #[must_use]
    pub fn masked_word(&self) -> String {
        match self {
            Self::Playing(state) => state.masked_word(),
            Self::Locked(view) => view.record.masked_word.clone(),
        }
    }

    /// True when today's game was finished in an earlier run
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self, Self::Locked(_))
    }

    /// Whether a guess of `letter` would be accepted
    #[must_use]
    pub fn accepts(&self, letter: char) -> bool {
        match self {
            Self::Playing(state) => {
                !state.is_over() && letter.is_ascii_alphabetic() && !state.has_guessed(letter)
            }
            Self::Locked(_) => false,
        }
    }
}

/// Decide today's session from the store
///
/// A completion marker for today means the day is over: the stored record is
/// returned as a [`LockedView`]. Anything else, including a marker whose
/// record cannot be read, starts a fresh game with today's word.
pub fn initialize<C, S>(clock: &C, store: &S, words: &DailyWords) -> Session
where
    C: Clock + ?Sized,
    S: KeyValueStore + ?Sized,
{
    session_for(clock.today(), store, words)
}

fn session_for<S>(today: NaiveDate, store: &S, words: &DailyWords) -> Session
where
    S: KeyValueStore + ?Sized,
{
    match completed_date(store) {
        Some(date) if date == today => match PersistedRecord::read_from(store) {
            Ok(Some(record)) => {
                debug!(%today, outcome = %record.outcome, "today already played");
                return Session::Locked(LockedView {
                    date: today,
                    record,
                });
            }
            Ok(None) => warn!(%today, "completion marker without a daily snapshot"),
            Err(e) => warn!(%today, error = %e, "daily snapshot unreadable"),
        },
        _ => {}
    }

    Session::Playing(GameState::new(words.word_for(today).clone()))
}

fn completed_date<S: KeyValueStore + ?Sized>(store: &S) -> Option<NaiveDate> {
    match store.get(keys::COMPLETED_DATE) {
        Ok(Some(raw)) => NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok(),
        Ok(None) => None,
        Err(e) => {
            warn!(error = %e, "completion marker unreadable");
            None
        }
    }
}

/// Owns today's session, the statistics and the rollover timer
pub struct DailyGame<C: Clock, S: KeyValueStore> {
    clock: C,
    store: S,
    words: DailyWords,
    date: NaiveDate,
    session: Session,
    stats: Statistics,
    rollover: Option<Rollover>,
}

impl<C: Clock, S: KeyValueStore> DailyGame<C, S> {
    /// Load today's session and the statistics
    pub fn new(clock: C, store: S, words: DailyWords) -> Self {
        let date = clock.today();
        let session = session_for(date, &store, &words);
        let stats = Statistics::load(&store).unwrap_or_else(|e| {
            warn!(error = %e, "statistics unreadable, starting from zero");
            Statistics::default()
        });

        info!(
            %date,
            locked = session.is_locked(),
            played = stats.days_played,
            "daily game ready"
        );

        Self {
            clock,
            store,
            words,
            date,
            session,
            stats,
            rollover: None,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Calendar date the current session belongs to
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn masked_word(&self) -> String {
        self.session.masked_word()
    }

    /// Today's word, only once the game ended in this run
    #[must_use]
    pub fn revealed_word(&self) -> Option<&str> {
        match &self.session {
            Session::Playing(state) if state.is_over() => Some(state.word().text()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Play one letter
    ///
    /// Persists the record, completion marker and statistics when this guess
    /// finishes the game. An overdue rollover runs first and the guess is
    /// dropped, so a letter typed after midnight never reaches yesterday's game.
    pub fn submit_guess(&mut self, letter: char) -> GuessResult {
        if self.tick() {
            debug!(letter = %letter, "guess dropped by rollover");
            return GuessResult::Ignored;
        }

        let Session::Playing(state) = &mut self.session else {
            return GuessResult::Ignored;
        };

        let result = state.submit_guess(letter);
        if result == GuessResult::Ignored {
            return result;
        }

        debug!(
            letter = %letter.to_ascii_uppercase(),
            ?result,
            lives = state.lives_remaining(),
            "guess"
        );

        if state.is_over() {
            let record = PersistedRecord {
                lives_remaining: state.lives_remaining(),
                outcome: state.outcome(),
                guessed_letters: state.guessed_letters().to_vec(),
                masked_word: state.masked_word(),
            };
            self.finish(&record);
        }

        result
    }

    fn finish(&mut self, record: &PersistedRecord) {
        info!(
            date = %self.date,
            outcome = %record.outcome,
            guesses = record.guessed_letters.len(),
            lives = record.lives_remaining,
            "game finished"
        );

        log_store_failure(
            "daily record",
            record.write_to(&mut self.store).and_then(|()| {
                self.store.set(
                    keys::COMPLETED_DATE,
                    &self.date.format(DATE_FORMAT).to_string(),
                )
            }),
        );

        self.stats.record(record.outcome);
        log_store_failure("statistics", self.stats.save(&mut self.store));
    }

    /// Arm the midnight timer, replacing any previous one
    pub fn schedule_rollover(&mut self) {
        let timer = Rollover::schedule(&self.clock);
        debug!(deadline = ?timer.deadline(), "rollover scheduled");
        self.rollover = Some(timer);
    }

    /// Disarm the midnight timer without firing it
    pub fn cancel_rollover(&mut self) {
        if let Some(timer) = self.rollover.as_mut() {
            timer.cancel();
        }
        self.rollover = None;
    }

    #[must_use]
    pub fn rollover_deadline(&self) -> Option<NaiveDateTime> {
        self.rollover.as_ref().and_then(Rollover::deadline)
    }

    /// Time until the armed rollover fires
    #[must_use]
    pub fn time_to_rollover(&self) -> Option<std::time::Duration> {
        self.rollover
            .as_ref()
            .and_then(|timer| timer.remaining(self.clock.now()))
    }

    /// Poll the rollover timer; returns true if a new day was started
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let fired = self
            .rollover
            .as_mut()
            .is_some_and(|timer| timer.poll(now));

        if fired {
            self.start_new_day();
        }
        fired
    }

    /// Discard the current session and start a fresh game for the clock's date
    pub fn start_new_day(&mut self) {
        log_store_failure("daily record", PersistedRecord::clear(&mut self.store));

        self.date = self.clock.today();
        let word = self.words.word_for(self.date).clone();
        info!(date = %self.date, letters = word.len(), "new day");
        self.session = Session::Playing(GameState::new(word));
    }
}

fn log_store_failure(what: &str, result: Result<(), StoreError>) {
    if let Err(e) = result {
        warn!(what, error = %e, "store write failed, continuing in memory");
    }
}
