//! Session registry keyed by (adapter, channel)
//!
//! The registry lock only guards lookups, inserts and removals. Each session
//! sits behind its own mutex together with its random source, so guesses in
//! different channels never wait on each other.

use super::outcome::{GameView, GuessOutcome};
use super::session::GameSession;
use crate::config::GameConfig;
use crate::error::SessionError;
use crate::wordlists::Corpus;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Identifies one game: the chat adapter plus the channel within it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    adapter: String,
    channel: String,
}

impl SessionKey {
    #[must_use]
    pub fn new(adapter: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            adapter: adapter.into(),
            channel: channel.into(),
        }
    }

    #[must_use]
    pub fn adapter(&self) -> &str {
        &self.adapter
    }

    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.adapter, self.channel)
    }
}

#[derive(Debug)]
struct Slot {
    session: GameSession,
    rng: StdRng,
}

type SharedSlot = Arc<Mutex<Slot>>;

/// All running games, sharing one immutable corpus
///
/// The registry lock is never held while waiting on a slot, and a slot lock
/// is always released before the registry is locked again.
#[derive(Debug)]
pub struct SessionStore {
    corpus: Arc<Corpus>,
    config: GameConfig,
    seeder: Mutex<StdRng>,
    sessions: Mutex<FxHashMap<SessionKey, SharedSlot>>,
}

impl SessionStore {
    /// Create a store whose sessions draw from OS entropy
    #[must_use]
    pub fn new(corpus: Arc<Corpus>, config: GameConfig) -> Self {
        Self::with_rng(corpus, config, StdRng::from_os_rng())
    }

    /// Create a store whose games are reproducible for a given seed
    #[must_use]
    pub fn with_seed(corpus: Arc<Corpus>, config: GameConfig, seed: u64) -> Self {
        Self::with_rng(corpus, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(corpus: Arc<Corpus>, config: GameConfig, seeder: StdRng) -> Self {
        Self {
            corpus,
            config,
            seeder: Mutex::new(seeder),
            sessions: Mutex::new(FxHashMap::default()),
        }
    }

    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// Start a game for `key`
    ///
    /// A finished session still present under the key is replaced.
    ///
    /// # Errors
    /// Returns `SessionError::AlreadyActive` if a game is running for `key`.
    pub fn start_game(&self, key: &SessionKey) -> Result<GameView, SessionError> {
        loop {
            // Slot locks are taken with the registry released
            let seen = lock(&self.sessions).get(key).cloned();
            if seen.as_ref().is_some_and(|existing| lock(existing).session.is_active()) {
                return Err(SessionError::AlreadyActive);
            }

            let mut rng = StdRng::from_rng(&mut *lock(&self.seeder));
            let session = GameSession::start(&self.corpus, self.config, &mut rng);
            let view = session.view();

            let mut sessions = lock(&self.sessions);
            let unchanged = match (sessions.get(key), &seen) {
                (None, None) => true,
                (Some(current), Some(seen)) => Arc::ptr_eq(current, seen),
                _ => false,
            };
            if !unchanged {
                log::debug!("{key}: registry changed while starting, retrying");
                continue;
            }

            sessions.insert(key.clone(), Arc::new(Mutex::new(Slot { session, rng })));
            log::info!("{key}: started game, {} letters", view.word_length);

            return Ok(view);
        }
    }

    /// Apply a guess to the game for `key`
    ///
    /// A terminal outcome removes the session before returning.
    ///
    /// # Errors
    /// Returns `SessionError::NoActiveSession` if no game is running for `key`.
    pub fn guess_letter(&self, key: &SessionKey, input: &str) -> Result<GuessOutcome, SessionError> {
        let slot = self.slot(key)?;

        let outcome = {
            let mut guard = lock(&slot);
            let Slot { session, rng } = &mut *guard;
            session
                .guess(input, &self.corpus, rng)
                .map_err(|_| SessionError::NoActiveSession)?
        };

        if outcome.status.is_terminal() {
            let mut sessions = lock(&self.sessions);
            if sessions.get(key).is_some_and(|current| Arc::ptr_eq(current, &slot)) {
                sessions.remove(key);
            }
            log::info!("{key}: game over ({:?}) at {}", outcome.status, outcome.pattern);
        }

        Ok(outcome)
    }

    /// Current state of the game for `key`
    ///
    /// # Errors
    /// Returns `SessionError::NoActiveSession` if no game is running for `key`.
    pub fn status(&self, key: &SessionKey) -> Result<GameView, SessionError> {
        let slot = self.slot(key)?;
        let guard = lock(&slot);
        if guard.session.is_active() {
            Ok(guard.session.view())
        } else {
            Err(SessionError::NoActiveSession)
        }
    }

    /// Drop the game for `key` without disclosing anything
    ///
    /// Returns `false` if there was nothing to drop.
    pub fn end_game(&self, key: &SessionKey) -> bool {
        let removed = lock(&self.sessions).remove(key).is_some();
        if removed {
            log::info!("{key}: game ended");
        }
        removed
    }

    /// Number of games currently registered
    #[must_use]
    pub fn active_sessions(&self) -> usize {
        lock(&self.sessions).len()
    }

    fn slot(&self, key: &SessionKey) -> Result<SharedSlot, SessionError> {
        lock(&self.sessions)
            .get(key)
            .cloned()
            .ok_or(SessionError::NoActiveSession)
    }
}

/// Every mutation leaves state valid, so a poisoned lock is still usable
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
