//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Exactly two players exist in every supported game. `PlayerId` is a
//! two-value enum rather than an index so the "exactly one side to move"
//! invariant is enforced by the type system.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a fixed `[T; 2]` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
///
/// `First` moves first in every variant's initial layout. Variant-specific
/// color names (red/black, black/white) are a host concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// Get the player index (First = 0, Second = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// Iterate over both players, `First` before `Second`.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::First, PlayerId::Second].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::First => write!(f, "Player 1"),
            PlayerId::Second => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_boardgame::core::{PlayerId, PlayerMap};
///
/// let mut pieces: PlayerMap<u32> = PlayerMap::with_value(12);
///
/// assert_eq!(pieces[PlayerId::First], 12);
///
/// pieces[PlayerId::Second] -= 1;
/// assert_eq!(pieces[PlayerId::Second], 11);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::First), factory(PlayerId::Second)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
