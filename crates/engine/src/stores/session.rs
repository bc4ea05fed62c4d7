//! Live case session storage.
//!
//! Sessions are touched on every read or mutation. Sessions left idle past
//! the TTL are swept by [`SessionStore::cleanup_expired`], which `main` runs
//! on an interval.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use impostor_domain::{GameSession, SessionId};

struct StoredSession {
    session: GameSession,
    touched: Instant,
}

/// In-memory map of open game sessions.
///
/// Mutations run inside [`SessionStore::update`] and never span an `.await`,
/// so a shard guard is only ever held for one synchronous transition.
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<SessionId, StoredSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, session: GameSession) {
        self.sessions.insert(
            session.id(),
            StoredSession {
                session,
                touched: Instant::now(),
            },
        );
    }

    /// Snapshot of a session.
    pub fn get(&self, id: SessionId) -> Option<GameSession> {
        self.sessions.get_mut(&id).map(|mut entry| {
            entry.touched = Instant::now();
            entry.session.clone()
        })
    }

    /// Apply a synchronous mutation. `None` if the session is unknown.
    pub fn update<R>(&self, id: SessionId, f: impl FnOnce(&mut GameSession) -> R) -> Option<R> {
        self.sessions.get_mut(&id).map(|mut entry| {
            entry.touched = Instant::now();
            f(&mut entry.session)
        })
    }

    pub fn remove(&self, id: SessionId) -> Option<GameSession> {
        self.sessions.remove(&id).map(|(_, entry)| entry.session)
    }

    /// Drop sessions idle for longer than `ttl` and return how many went.
    pub fn cleanup_expired(&self, ttl: Duration) -> usize {
        self.cleanup_expired_at(Instant::now(), ttl)
    }

    fn cleanup_expired_at(&self, now: Instant, ttl: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| now.saturating_duration_since(entry.touched) <= ttl);
        before.saturating_sub(self.sessions.len())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use impostor_domain::GamePhase;

    #[test]
    fn update_mutates_in_place() {
        let store = SessionStore::new();
        let session = GameSession::new(SessionId::new());
        let id = session.id();
        store.insert(session);

        let phase = store.update(id, |s| {
            s.reset();
            s.phase()
        });
        assert_eq!(phase, Some(GamePhase::Menu));
        assert_eq!(store.len(), 1);

        assert!(store.update(SessionId::new(), |s| s.phase()).is_none());
        assert!(store.remove(id).is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn idle_sessions_are_swept() {
        let store = SessionStore::new();
        let idle = GameSession::new(SessionId::new());
        let idle_id = idle.id();
        store.insert(idle);
        let ttl = Duration::from_secs(60);

        assert_eq!(store.cleanup_expired(ttl), 0);
        assert_eq!(store.len(), 1);

        let later = Instant::now() + ttl + Duration::from_secs(1);
        assert_eq!(store.cleanup_expired_at(later, ttl), 1);
        assert!(store.get(idle_id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn touching_a_session_keeps_it_alive() {
        let store = SessionStore::new();
        let session = GameSession::new(SessionId::new());
        let id = session.id();
        store.insert(session);
        let ttl = Duration::from_secs(60);

        // Touched "now": still inside the window measured from its touch.
        assert!(store.get(id).is_some());
        let soon = Instant::now() + Duration::from_secs(30);
        assert_eq!(store.cleanup_expired_at(soon, ttl), 0);
        assert_eq!(store.len(), 1);
    }
}
