//! Queue service: owns the in-memory waiting list and its persisted mirror.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::WritePolicy;
use crate::domain::PlayerQueue;
use crate::error::ServiceError;
use crate::persistence::Store;

/// Orchestration layer for all queue operations.
///
/// The in-memory queue is the single source of truth during the process
/// lifetime; the persisted record is a best-effort mirror. Every mutation
/// method follows the pattern: lock the queue → mutate → persist while
/// still holding the lock → return. Holding the lock across the
/// persistence await serializes mutation + persistence exactly like the
/// original single-threaded request handling did.
#[derive(Debug)]
pub struct QueueService {
    queue: Mutex<PlayerQueue>,
    store: Arc<dyn Store>,
    policy: WritePolicy,
}

impl QueueService {
    /// Creates a new `QueueService` starting from an empty queue.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, policy: WritePolicy) -> Self {
        Self {
            queue: Mutex::new(PlayerQueue::new()),
            store,
            policy,
        }
    }

    /// One-shot startup load of the persisted queue for `place`.
    ///
    /// On failure logs and leaves the queue empty — a missing or
    /// unreachable record is never fatal. The queue is never reloaded
    /// after this point.
    pub async fn load_initial(&self, place: &str) {
        match self.store.load_queue(place).await {
            Ok(players) => {
                let count = players.len();
                let mut queue = self.queue.lock().await;
                *queue = PlayerQueue::from_players(players);
                tracing::info!(place, count, "queue initialized from persisted record");
            }
            Err(error) => {
                tracing::error!(%error, place, "failed to load persisted queue; starting empty");
            }
        }
    }

    /// Returns a snapshot of the current ordered player names.
    pub async fn list(&self) -> Vec<String> {
        self.queue.lock().await.snapshot()
    }

    /// Appends a player to the end of the queue and persists the full
    /// sequence under `place`.
    ///
    /// The mutation is never rolled back on persistence failure.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingPlayerName`] when `name` is absent
    /// or empty.
    pub async fn add_player(&self, place: &str, name: Option<String>) -> Result<(), ServiceError> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or(ServiceError::MissingPlayerName)?;

        let mut queue = self.queue.lock().await;
        queue.push(name.clone());
        self.persist_locked(place, &queue).await;

        tracing::info!(place, player = %name, len = queue.len(), "player added");
        Ok(())
    }

    /// Removes the player at `index`, preserving the order of the rest,
    /// and persists.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PlayerNotFound`] when `index` is outside
    /// the queue bounds; the queue is left unchanged.
    pub async fn remove_player(&self, place: &str, index: usize) -> Result<(), ServiceError> {
        let mut queue = self.queue.lock().await;
        let removed = queue.remove_at(index)?;
        self.persist_locked(place, &queue).await;

        tracing::info!(place, index, player = %removed, "player removed");
        Ok(())
    }

    /// Replaces the player name at `index` with the trimmed `new_name`
    /// and persists.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRename`] when `index` is out of
    /// range or `new_name` trims to empty; the queue is left unchanged.
    pub async fn rename_player(
        &self,
        place: &str,
        index: usize,
        new_name: &str,
    ) -> Result<(), ServiceError> {
        let mut queue = self.queue.lock().await;
        queue.rename_at(index, new_name)?;
        self.persist_locked(place, &queue).await;

        tracing::info!(place, index, "player renamed");
        Ok(())
    }

    /// Ends the current game: removes the first two players (the pair
    /// currently on the court) and persists.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InsufficientPlayers`] when fewer than two
    /// players are queued; the queue is left unchanged.
    pub async fn end_current_game(&self, place: &str) -> Result<(), ServiceError> {
        let mut queue = self.queue.lock().await;
        let (player1, player2) = queue.take_current_pair()?;
        self.persist_locked(place, &queue).await;

        tracing::info!(place, %player1, %player2, "current game ended");
        Ok(())
    }

    /// Mirrors the queue to the store while the caller still holds the
    /// queue lock. Persistence failures are logged and absorbed under both
    /// policies — they never propagate to the response path.
    async fn persist_locked(&self, place: &str, queue: &PlayerQueue) {
        match self.policy {
            WritePolicy::Awaited => {
                if let Err(error) = self.store.save_queue(place, queue.players()).await {
                    tracing::error!(%error, place, "queue persistence failed");
                }
            }
            WritePolicy::Detached => {
                let store = Arc::clone(&self.store);
                let place = place.to_string();
                let players = queue.snapshot();
                tokio::spawn(async move {
                    if let Err(error) = store.save_queue(&place, &players).await {
                        tracing::error!(%error, %place, "queue persistence failed");
                    }
                });
            }
        }
    }
}
