//! Deck configuration options.

use crate::game::Game;

/// How a poker ace is valued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AceRule {
    /// The ace is high only (14).
    #[default]
    High,
    /// The ace counts as 1 or 14, for wheel straights.
    Dual,
}

/// Configuration options for building a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{AceRule, DeckOptions, Game};
///
/// let options = DeckOptions::default()
///     .with_game(Game::Poker)
///     .with_poker_ace(AceRule::Dual);
/// ```
///
/// Options are also the key of a [`DeckCache`](crate::DeckCache): two requests
/// with equal options share one deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeckOptions {
    /// Game whose valuation table applies to face cards.
    pub game: Game,
    /// Poker ace valuation. Ignored for other games.
    pub poker_ace: AceRule,
}

impl DeckOptions {
    /// Creates options for the given game with every other option defaulted.
    #[must_use]
    pub const fn for_game(game: Game) -> Self {
        Self {
            game,
            poker_ace: AceRule::High,
        }
    }

    /// Sets the game.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, Game};
    ///
    /// let options = DeckOptions::default().with_game(Game::Blackjack);
    /// assert_eq!(options.game, Game::Blackjack);
    /// ```
    #[must_use]
    pub const fn with_game(mut self, game: Game) -> Self {
        self.game = game;
        self
    }

    /// Sets how poker aces are valued.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{AceRule, DeckOptions};
    ///
    /// let options = DeckOptions::default().with_poker_ace(AceRule::Dual);
    /// assert_eq!(options.poker_ace, AceRule::Dual);
    /// ```
    #[must_use]
    pub const fn with_poker_ace(mut self, rule: AceRule) -> Self {
        self.poker_ace = rule;
        self
    }
}

impl From<Game> for DeckOptions {
    fn from(game: Game) -> Self {
        Self::for_game(game)
    }
}
