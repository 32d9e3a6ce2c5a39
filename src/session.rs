// 🗂️ View State + Session Store
// The render function is pure; this is where the per-browser state lives between requests.

use crate::contact::{ContactState, ContactSubmission};
use crate::nav::NavSelection;
use crate::theme::Theme;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;
use uuid::Uuid;

// ============================================================================
// VIEW STATE
// ============================================================================

/// Everything a render pass reads besides the static content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub theme: Theme,
    pub nav: NavSelection,
    pub contact: ContactState,
}

impl ViewState {
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.contact.reset();
    }

    pub fn select(&mut self, nav: NavSelection) {
        self.nav = nav;
        self.contact.reset();
    }

    /// Submitting also moves to the contact page, where the outcome is shown
    pub fn submit_contact(&mut self, submission: ContactSubmission, recipient: &str) {
        self.nav = NavSelection::Contact;
        self.contact = ContactState::submit(submission, recipient);
    }
}

// ============================================================================
// SESSION STORE
// ============================================================================

/// Sessions kept before the least recently used one is evicted
pub const DEFAULT_CAPACITY: usize = 10_000;

#[derive(Debug, Clone)]
struct SessionEntry {
    state: ViewState,
    last_seen: u64,
}

#[derive(Debug)]
struct Sessions {
    entries: HashMap<Uuid, SessionEntry>,
    clock: u64,
    capacity: usize,
}

impl Sessions {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Insert, evicting the stalest entries so the map never exceeds capacity
    fn insert(&mut self, id: Uuid, state: ViewState) {
        while self.entries.len() >= self.capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(key, _)| *key);
            match oldest {
                Some(evicted) => {
                    self.entries.remove(&evicted);
                    debug!(session = %evicted, "session evicted");
                }
                None => break,
            }
        }
        let last_seen = self.tick();
        self.entries.insert(id, SessionEntry { state, last_seen });
    }
}

/// In-memory, bounded map of session id -> view state. Lost on restart.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<Sessions>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding at most `capacity` sessions (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        SessionStore {
            sessions: Arc::new(RwLock::new(Sessions {
                entries: HashMap::new(),
                clock: 0,
                capacity: capacity.max(1),
            })),
        }
    }

    /// Parse a cookie value and return it if it names a live session
    pub fn resolve(&self, raw_id: Option<&str>) -> Option<Uuid> {
        let id = Uuid::parse_str(raw_id?).ok()?;
        let sessions = self.sessions.read().unwrap_or_else(|e| e.into_inner());
        sessions.entries.contains_key(&id).then_some(id)
    }

    /// Start a fresh session with default state
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        sessions.insert(id, ViewState::default());
        debug!(session = %id, "session created");
        id
    }

    /// Existing session if the id is known, otherwise a new one. The bool is true when created.
    /// Only call this for interactions that change state; reads go through `peek`.
    pub fn get_or_create(&self, raw_id: Option<&str>) -> (Uuid, bool) {
        match self.resolve(raw_id) {
            Some(id) => (id, false),
            None => (self.create(), true),
        }
    }

    /// State for a cookie value without allocating anything (default if unknown)
    pub fn peek(&self, raw_id: Option<&str>) -> ViewState {
        match self.resolve(raw_id) {
            Some(id) => self.state(id),
            None => ViewState::default(),
        }
    }

    /// Snapshot of a session's state (default if unknown)
    pub fn state(&self, id: Uuid) -> ViewState {
        let sessions = self.sessions.read().unwrap_or_else(|e| e.into_inner());
        sessions
            .entries
            .get(&id)
            .map(|entry| entry.state.clone())
            .unwrap_or_default()
    }

    /// Apply a transition and return the resulting state. Marks the session as recently used.
    pub fn update<F>(&self, id: Uuid, f: F) -> ViewState
    where
        F: FnOnce(&mut ViewState),
    {
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        let now = sessions.tick();
        if let Some(entry) = sessions.entries.get_mut(&id) {
            entry.last_seen = now;
            f(&mut entry.state);
            return entry.state.clone();
        }

        // Evicted since it was resolved: start over from defaults
        let mut state = ViewState::default();
        f(&mut state);
        sessions.insert(id, state.clone());
        state
    }

    pub fn capacity(&self) -> usize {
        self.sessions.read().unwrap_or_else(|e| e.into_inner()).capacity
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// TESTS
// ============================================================================
