use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::address_sessions::dtos::AddressSessionResponseDto;
use crate::features::address_sessions::models::{AddressSession, PostalJob, SessionEffects};
use crate::features::postal_codes::services::PostalCodeResolver;
use crate::features::regions::clients::RegionDataSource;
use crate::features::regions::models::RegionLevel;
use crate::features::regions::services::FetchKey;

type SessionHandle = Arc<Mutex<AddressSession>>;

/// Runs the fetches and lookups a session transition asks for.
///
/// Every task locks its session only to feed the result back, then starts
/// whatever that completion made necessary.
#[derive(Clone)]
struct EffectRunner {
    regions: Arc<dyn RegionDataSource>,
    postal: Arc<PostalCodeResolver>,
}

impl EffectRunner {
    fn dispatch(&self, session: &SessionHandle, effects: SessionEffects) {
        for key in effects.fetches {
            self.spawn_fetch(Arc::clone(session), key);
        }
        if let Some(job) = effects.postal {
            self.spawn_postal(Arc::clone(session), job);
        }
    }

    fn spawn_fetch(&self, session: SessionHandle, key: FetchKey) {
        let runner = self.clone();
        tokio::spawn(async move {
            let result = runner
                .regions
                .fetch_regions(key.level, key.parent_id.as_deref())
                .await;

            let effects = session.lock().await.complete_fetch(&key, result);
            runner.dispatch(&session, effects);
        });
    }

    fn spawn_postal(&self, session: SessionHandle, job: PostalJob) {
        let resolver = Arc::clone(&self.postal);
        tokio::spawn(async move {
            let result = resolver.resolve(&job.names).await;
            session.lock().await.complete_postal(&job.key, result);
        });
    }
}

/// In-memory registry of address sessions
pub struct AddressSessionService {
    sessions: RwLock<HashMap<Uuid, SessionHandle>>,
    runner: EffectRunner,
}

impl AddressSessionService {
    pub fn new(regions: Arc<dyn RegionDataSource>, postal: Arc<PostalCodeResolver>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            runner: EffectRunner { regions, postal },
        }
    }

    /// Start a session; the province list begins loading right away
    pub async fn create(&self) -> AddressSessionResponseDto {
        let (session, effects) = AddressSession::new();
        let id = session.id();
        let snapshot = AddressSessionResponseDto::from(&session);

        let handle = Arc::new(Mutex::new(session));
        self.sessions.write().await.insert(id, Arc::clone(&handle));
        self.runner.dispatch(&handle, effects);

        tracing::info!("Address session {} created", id);
        snapshot
    }

    async fn handle(&self, id: Uuid) -> Result<SessionHandle> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Address session {} not found", id)))
    }

    pub async fn get(&self, id: Uuid) -> Result<AddressSessionResponseDto> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        session.touch();
        Ok(AddressSessionResponseDto::from(&*session))
    }

    pub async fn select(
        &self,
        id: Uuid,
        level: RegionLevel,
        region_id: Option<String>,
    ) -> Result<AddressSessionResponseDto> {
        let handle = self.handle(id).await?;
        let (effects, snapshot) = {
            let mut session = handle.lock().await;
            session.touch();
            let effects = session.select(level, region_id)?;
            (effects, AddressSessionResponseDto::from(&*session))
        };

        if !effects.is_empty() {
            tracing::debug!(
                "Session {}: {} selection scheduled {} fetch(es), postal lookup: {}",
                id,
                level,
                effects.fetches.len(),
                effects.postal.is_some()
            );
        }
        self.runner.dispatch(&handle, effects);
        Ok(snapshot)
    }

    pub async fn retry(&self, id: Uuid, level: RegionLevel) -> Result<AddressSessionResponseDto> {
        let handle = self.handle(id).await?;
        let (effects, snapshot) = {
            let mut session = handle.lock().await;
            session.touch();
            let effects = session.retry(level).ok_or_else(|| {
                AppError::Conflict(format!("The {} list has not failed to load", level))
            })?;
            (effects, AddressSessionResponseDto::from(&*session))
        };

        tracing::info!("Session {}: retrying {} list", id, level);
        self.runner.dispatch(&handle, effects);
        Ok(snapshot)
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| tracing::info!("Address session {} removed", id))
            .ok_or_else(|| AppError::NotFound(format!("Address session {} not found", id)))
    }

    /// Drop sessions idle for longer than `ttl`. Sessions locked right now are in use and kept.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(session) => session.idle_for() <= ttl,
            Err(_) => true,
        });

        before - sessions.len()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
