//! Game contexts that select a valuation table.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::UnsupportedGameError;

/// The game whose rules decide what face cards are worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Game {
    /// Poker: J=11, Q=12, K=13, A=14.
    #[default]
    Poker,
    /// Blackjack: J, Q and K are 10, A is 1 or 11.
    Blackjack,
}

impl Game {
    /// Supported games. The first entry is the default.
    pub const SUPPORTED: [Self; 2] = [Self::Poker, Self::Blackjack];

    /// Returns the lowercase tag for this game.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Poker => "poker",
            Self::Blackjack => "blackjack",
        }
    }

    /// Resolves an optional tag, falling back to the default game when absent.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedGameError`] if a tag is given and is not supported.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Game;
    ///
    /// assert_eq!(Game::from_tag(None), Ok(Game::Poker));
    /// assert_eq!(Game::from_tag(Some("BlackJack")), Ok(Game::Blackjack));
    /// assert!(Game::from_tag(Some("chess")).is_err());
    /// ```
    pub fn from_tag(tag: Option<&str>) -> Result<Self, UnsupportedGameError> {
        tag.map_or(Ok(Self::default()), str::parse::<Self>)
    }
}

impl FromStr for Game {
    type Err = UnsupportedGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::SUPPORTED
            .into_iter()
            .find(|game| game.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnsupportedGameError { tag: s.to_string() })
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
