//! Ordered waiting list of player names for a venue.
//!
//! [`PlayerQueue`] is the pure in-memory model: plain list operations with
//! bounds and blank-name checks, no persistence. Players have no identity
//! beyond their name string and position, so duplicate names are
//! indistinguishable by design.

use crate::error::ServiceError;

/// Ordered waiting list of player names.
///
/// The first two positions are "the current match's two players"; the rest
/// are waiting. Exclusively owned by the queue service behind a mutex for
/// the process lifetime.
#[derive(Debug, Default)]
pub struct PlayerQueue {
    players: Vec<String>,
}

impl PlayerQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue from an already-ordered list of names (startup load).
    #[must_use]
    pub fn from_players(players: Vec<String>) -> Self {
        Self { players }
    }

    /// Returns the ordered player names.
    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Returns an owned copy of the ordered player names.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.players.clone()
    }

    /// Returns the number of queued players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns `true` if nobody is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Appends a player at the tail of the queue.
    pub fn push(&mut self, name: String) {
        self.players.push(name);
    }

    /// Removes and returns the player at `index`, preserving the order of
    /// the remaining players.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PlayerNotFound`] when `index` is outside
    /// `[0, len)`.
    pub fn remove_at(&mut self, index: usize) -> Result<String, ServiceError> {
        if index >= self.players.len() {
            return Err(ServiceError::PlayerNotFound { index });
        }
        Ok(self.players.remove(index))
    }

    /// Replaces the name at `index` with the trimmed `new_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRename`] when `index` is out of range
    /// or `new_name` trims to an empty string.
    pub fn rename_at(&mut self, index: usize, new_name: &str) -> Result<(), ServiceError> {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(ServiceError::InvalidRename);
        }
        let slot = self
            .players
            .get_mut(index)
            .ok_or(ServiceError::InvalidRename)?;
        *slot = trimmed.to_string();
        Ok(())
    }

    /// Removes the first two players (the current match) and returns them
    /// in order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InsufficientPlayers`] when fewer than two
    /// players are queued; the queue is left unchanged.
    pub fn take_current_pair(&mut self) -> Result<(String, String), ServiceError> {
        if self.players.len() < 2 {
            return Err(ServiceError::InsufficientPlayers);
        }
        let mut drained = self.players.drain(..2);
        match (drained.next(), drained.next()) {
            (Some(first), Some(second)) => {
                drop(drained);
                Ok((first, second))
            }
            // Unreachable: the length check above guarantees two elements.
            _ => Err(ServiceError::InsufficientPlayers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(names: &[&str]) -> PlayerQueue {
        PlayerQueue::from_players(names.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn push_appends_at_tail() {
        let mut queue = queue_of(&["민수"]);
        queue.push("Alice".to_string());
        assert_eq!(queue.players(), ["민수", "Alice"]);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn remove_at_preserves_order() {
        let mut queue = queue_of(&["a", "b", "c"]);
        let removed = queue.remove_at(1);
        assert_eq!(removed.ok().as_deref(), Some("b"));
        assert_eq!(queue.players(), ["a", "c"]);
    }

    #[test]
    fn remove_at_out_of_range_leaves_queue_unchanged() {
        let mut queue = queue_of(&["a", "b"]);
        let result = queue.remove_at(2);
        assert!(matches!(
            result,
            Err(ServiceError::PlayerNotFound { index: 2 })
        ));
        assert_eq!(queue.players(), ["a", "b"]);
    }

    #[test]
    fn rename_trims_whitespace() {
        let mut queue = queue_of(&["a"]);
        assert!(queue.rename_at(0, "  Bob  ").is_ok());
        assert_eq!(queue.players(), ["Bob"]);
    }

    #[test]
    fn rename_blank_after_trim_is_rejected() {
        let mut queue = queue_of(&["a"]);
        let result = queue.rename_at(0, "   ");
        assert!(matches!(result, Err(ServiceError::InvalidRename)));
        assert_eq!(queue.players(), ["a"]);
    }

    #[test]
    fn rename_out_of_range_is_rejected() {
        let mut queue = queue_of(&["a"]);
        let result = queue.rename_at(1, "Bob");
        assert!(matches!(result, Err(ServiceError::InvalidRename)));
        assert_eq!(queue.players(), ["a"]);
    }

    #[test]
    fn take_current_pair_removes_first_two_in_order() {
        let mut queue = queue_of(&["a", "b", "c", "d"]);
        let pair = queue.take_current_pair();
        assert_eq!(pair.ok(), Some(("a".to_string(), "b".to_string())));
        assert_eq!(queue.players(), ["c", "d"]);
    }

    #[test]
    fn take_current_pair_needs_at_least_two() {
        let mut queue = queue_of(&["a"]);
        let result = queue.take_current_pair();
        assert!(matches!(result, Err(ServiceError::InsufficientPlayers)));
        assert_eq!(queue.players(), ["a"]);

        let mut empty = PlayerQueue::new();
        assert!(empty.take_current_pair().is_err());
        assert!(empty.is_empty());
    }
}
