//! In-memory session store. One session owns one profile plus the last set of
//! recommendations shown for it. Nothing here outlives the process.
//!
//! A session idle for longer than the configured TTL is treated as ended: lookups
//! report it as not found and the sweeper drops it. The number of live sessions is
//! capped; creating one past the cap evicts the least recently used.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::advisor::models::CareerRecommendation;
use crate::errors::AppError;
use crate::profile::models::{ProfilePatch, StudentProfile};

pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub profile: StudentProfile,
    pub recommendations: Vec<CareerRecommendation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            profile: StudentProfile::default(),
            recommendations: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

struct Entry {
    session: Session,
    last_seen: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
    idle_ttl: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_IDLE_TTL, DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn with_limits(idle_ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    pub async fn create(&self) -> Session {
        let session = Session::new();
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.idle_ttl);
        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id)
            else {
                break;
            };
            sessions.remove(&oldest);
            info!("Session limit reached, evicted least recently used session {oldest}");
        }

        sessions.insert(
            session.id,
            Entry {
                session: session.clone(),
                last_seen: now,
            },
        );
        session
    }

    /// Returns a snapshot of the session. Callers work on the copy so no lock is
    /// held across an outbound AI call.
    pub async fn get(&self, id: Uuid) -> Result<Session, AppError> {
        let mut sessions = self.sessions.write().await;
        let entry = self.live_entry(&mut sessions, id)?;
        Ok(entry.session.clone())
    }

    pub async fn update_profile(&self, id: Uuid, patch: ProfilePatch) -> Result<Session, AppError> {
        let mut sessions = self.sessions.write().await;
        let entry = self.live_entry(&mut sessions, id)?;

        entry.session.profile.apply(patch)?;
        entry.session.updated_at = Utc::now();
        Ok(entry.session.clone())
    }

    pub async fn store_recommendations(
        &self,
        id: Uuid,
        recommendations: Vec<CareerRecommendation>,
    ) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().await;
        let entry = self.live_entry(&mut sessions, id)?;

        entry.session.recommendations = recommendations;
        entry.session.updated_at = Utc::now();
        Ok(())
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every session idle for at least the TTL. Returns how many went.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.idle_ttl);
        before - sessions.len()
    }

    /// Runs [`purge_expired`](Self::purge_expired) every `period` until the task is aborted.
    pub fn spawn_sweeper(&self, period: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let purged = store.purge_expired().await;
                if purged > 0 {
                    debug!("Purged {purged} idle sessions");
                }
            }
        })
    }

    /// Looks up a session, expiring it if idle too long, and marks it as seen.
    fn live_entry<'a>(
        &self,
        sessions: &'a mut HashMap<Uuid, Entry>,
        id: Uuid,
    ) -> Result<&'a mut Entry, AppError> {
        let now = Instant::now();
        let expired = sessions
            .get(&id)
            .is_some_and(|entry| now.duration_since(entry.last_seen) >= self.idle_ttl);
        if expired {
            sessions.remove(&id);
            debug!("Session {id} expired");
        }

        let entry = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        entry.last_seen = now;
        Ok(entry)
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_session_has_empty_profile() {
        let store = SessionStore::default();
        let session = store.create().await;
        assert_eq!(session.profile, StudentProfile::default());
        assert_eq!(session.profile.completion_percentage(), 0.0);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_update_profile_is_visible_to_later_reads() {
        let store = SessionStore::default();
        let id = store.create().await.id;

        store
            .update_profile(
                id,
                ProfilePatch {
                    current_skills: Some(vec!["Python".into(), "SQL".into()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let session = store.get(id).await.unwrap();
        assert_eq!(session.profile.current_skills, vec!["Python", "SQL"]);
        assert!(session.updated_at >= session.created_at);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::default();
        let a = store.create().await.id;
        let b = store.create().await.id;

        store
            .update_profile(
                a,
                ProfilePatch {
                    name: Some("Kiran".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(store.get(b).await.unwrap().profile.name.is_none());
    }

    #[tokio::test]
    async fn test_invalid_patch_leaves_profile_untouched() {
        let store = SessionStore::default();
        let id = store.create().await.id;

        let result = store
            .update_profile(
                id,
                ProfilePatch {
                    age: Some(3),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(store.get(id).await.unwrap().profile.age.is_none());
    }

    #[tokio::test]
    async fn test_removed_session_is_gone() {
        let store = SessionStore::default();
        let id = store.create().await.id;

        store.remove(id).await.unwrap();
        assert!(matches!(store.get(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.remove(id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let store = SessionStore::default();
        let result = store.store_recommendations(Uuid::new_v4(), vec![]).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_session_expires() {
        let store = SessionStore::with_limits(Duration::from_secs(60), 10);
        let id = store.create().await.id;

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(store.get(id).await.is_ok());

        // The read above refreshed the idle clock.
        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(store.get(id).await.is_ok());

        tokio::time::advance(Duration::from_secs(60)).await;
        assert!(matches!(store.get(id).await, Err(AppError::NotFound(_))));
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_purge_drops_only_idle_sessions() {
        let store = SessionStore::with_limits(Duration::from_secs(60), 10);
        let stale = store.create().await.id;
        tokio::time::advance(Duration::from_secs(30)).await;
        let fresh = store.create().await.id;

        tokio::time::advance(Duration::from_secs(30)).await;
        assert_eq!(store.purge_expired().await, 1);
        assert!(store.get(fresh).await.is_ok());
        assert!(store.get(stale).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_runs_periodically() {
        let store = SessionStore::with_limits(Duration::from_secs(60), 10);
        store.create().await;
        let sweeper = store.spawn_sweeper(Duration::from_secs(10));

        tokio::time::sleep(Duration::from_secs(75)).await;
        assert_eq!(store.count().await, 0);
        sweeper.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cap_evicts_least_recently_used() {
        let store = SessionStore::with_limits(Duration::from_secs(600), 2);
        let first = store.create().await.id;
        tokio::time::advance(Duration::from_secs(1)).await;
        let second = store.create().await.id;
        tokio::time::advance(Duration::from_secs(1)).await;
        store.get(first).await.unwrap();
        tokio::time::advance(Duration::from_secs(1)).await;

        let third = store.create().await.id;
        assert_eq!(store.count().await, 2);
        assert!(store.get(first).await.is_ok());
        assert!(store.get(third).await.is_ok());
        assert!(matches!(store.get(second).await, Err(AppError::NotFound(_))));
    }
}
