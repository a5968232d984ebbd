//! Piece identification.
//!
//! ## Piece
//!
//! A closed set of mover identities: exactly one fugitive plus a small
//! number of seekers. Pieces compare by value, never by reference, so two
//! states can talk about "seeker 2" without sharing an object.
//!
//! ## SeekerId
//!
//! Type-safe seeker index supporting up to 255 seekers.

use serde::{Deserialize, Serialize};

/// Seeker identifier.
///
/// Seeker indices are 0-based: the first seeker is `SeekerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeekerId(pub u8);

impl SeekerId {
    /// Create a new seeker ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seeker index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seeker IDs for a game with `seeker_count` seekers.
    ///
    /// ```
    /// use rust_pursuit::core::SeekerId;
    ///
    /// let seekers: Vec<_> = SeekerId::all(3).collect();
    /// assert_eq!(seekers.len(), 3);
    /// assert_eq!(seekers[0], SeekerId::new(0));
    /// assert_eq!(seekers[2], SeekerId::new(2));
    /// ```
    pub fn all(seeker_count: usize) -> impl Iterator<Item = SeekerId> {
        (0..seeker_count as u8).map(SeekerId)
    }
}

impl std::fmt::Display for SeekerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seeker {}", self.0)
    }
}

/// A mover identity: the fugitive or one of the seekers.
///
/// ```
/// use rust_pursuit::core::{Piece, SeekerId};
///
/// let fugitive = Piece::Fugitive;
/// let seeker = Piece::Seeker(SeekerId::new(0));
///
/// assert!(fugitive.is_fugitive());
/// assert!(seeker.is_seeker());
/// assert_ne!(fugitive, seeker);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Piece {
    /// The hidden-movement player.
    Fugitive,
    /// An openly moving pursuer.
    Seeker(SeekerId),
}

impl Piece {
    /// Check if this piece is the fugitive.
    #[must_use]
    pub const fn is_fugitive(self) -> bool {
        matches!(self, Piece::Fugitive)
    }

    /// Check if this piece is a seeker.
    #[must_use]
    pub const fn is_seeker(self) -> bool {
        matches!(self, Piece::Seeker(_))
    }

    /// Get the seeker ID if this piece is a seeker.
    #[must_use]
    pub const fn seeker_id(self) -> Option<SeekerId> {
        match self {
            Piece::Fugitive => None,
            Piece::Seeker(id) => Some(id),
        }
    }
}

impl From<SeekerId> for Piece {
    fn from(id: SeekerId) -> Self {
        Piece::Seeker(id)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Fugitive => write!(f, "Fugitive"),
            Piece::Seeker(id) => write!(f, "{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeker_id_basics() {
        let s0 = SeekerId::new(0);
        let s1 = SeekerId::new(1);

        assert_eq!(s0.index(), 0);
        assert_eq!(s1.index(), 1);
        assert_eq!(format!("{}", s0), "Seeker 0");
    }

    #[test]
    fn test_seeker_id_all() {
        let seekers: Vec<_> = SeekerId::all(4).collect();
        assert_eq!(seekers.len(), 4);
        assert_eq!(seekers[0], SeekerId::new(0));
        assert_eq!(seekers[3], SeekerId::new(3));
    }

    #[test]
    fn test_piece_kinds() {
        let fugitive = Piece::Fugitive;
        let seeker = Piece::Seeker(SeekerId::new(2));

        assert!(fugitive.is_fugitive());
        assert!(!fugitive.is_seeker());
        assert_eq!(fugitive.seeker_id(), None);

        assert!(seeker.is_seeker());
        assert!(!seeker.is_fugitive());
        assert_eq!(seeker.seeker_id(), Some(SeekerId::new(2)));
    }

    #[test]
    fn test_piece_value_equality() {
        assert_eq!(Piece::Seeker(SeekerId::new(1)), Piece::Seeker(SeekerId::new(1)));
        assert_ne!(Piece::Seeker(SeekerId::new(1)), Piece::Seeker(SeekerId::new(2)));
        assert_ne!(Piece::Fugitive, Piece::Seeker(SeekerId::new(0)));
    }

    #[test]
    fn test_piece_display() {
        assert_eq!(format!("{}", Piece::Fugitive), "Fugitive");
        assert_eq!(format!("{}", Piece::Seeker(SeekerId::new(3))), "Seeker 3");
    }

    #[test]
    fn test_piece_serialization() {
        let piece = Piece::Seeker(SeekerId::new(1));
        let json = serde_json::to_string(&piece).unwrap();
        let deserialized: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(piece, deserialized);
    }
}
