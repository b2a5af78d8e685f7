use chrono::{DateTime, Utc};
use cuzdanim_common::store::memory::MemoryStore;
use cuzdanim_common::store::Store;

/// Storage keys for the persisted credential pair.
///
/// Access and refresh tokens live under independent keys so that a host
/// store can map them to separate secure-storage entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Access,
    Refresh,
}

/// The credential pair held by an authenticated agent.
///
/// Only the tokens themselves are persisted; `expires_at` is known right
/// after a login and `None` for sessions read back from a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Any [`Store`] keyed by [`TokenKind`] can persist a session.
pub trait SessionStore: Store<TokenKind, String> {}

impl<S> SessionStore for S where S: Store<TokenKind, String> {}

/// In-memory session store for tests and ephemeral agents.
pub type MemorySessionStore = MemoryStore<TokenKind, String>;
