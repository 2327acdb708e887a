//! Error types for card and deck operations.

use alloc::string::String;

use thiserror::Error;

/// A game tag that is not one of the supported games.
///
/// This is a configuration error: the tag is reported back verbatim and the
/// operation that received it does not proceed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("unsupported game: {tag:?}")]
pub struct UnsupportedGameError {
    /// The offending tag, as given.
    pub tag: String,
}

/// Label text that is not one of the 13 card labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("invalid card label: {label:?}")]
pub struct InvalidLabelError {
    /// The offending label text, as given.
    pub label: String,
}

/// Suit text that is not one of the four suit names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("invalid suit: {suit:?}")]
pub struct InvalidSuitError {
    /// The offending suit text, as given.
    pub suit: String,
}

/// Errors that can occur when resolving a card value from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The game tag is not supported.
    #[error(transparent)]
    UnsupportedGame(#[from] UnsupportedGameError),
    /// The label is not a card label.
    #[error(transparent)]
    InvalidLabel(#[from] InvalidLabelError),
}

/// Errors that can occur when converting a lite token into a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LiteTokenError {
    /// Token is not exactly two characters.
    #[error("lite token must be two characters")]
    BadLength,
    /// Unknown rank character.
    #[error("unknown rank character {0:?}")]
    UnknownRank(char),
    /// Unknown suit character.
    #[error("unknown suit character {0:?}")]
    UnknownSuit(char),
}
