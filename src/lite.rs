//! Unchecked token deck.
//!
//! A [`LiteDeck`] is 52 two-character tokens such as `"Ah"` or `"Td"`. It
//! carries no values and no game. Callers own the interpretation of every
//! token; [`Card::from_lite_token`] is the way back into the checked model.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Label, Suit};
use crate::error::LiteTokenError;

/// Suit codes in lite enumeration order.
const LITE_SUITS: [Suit; 4] = [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];

/// A deck of raw card tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteDeck {
    cards: Vec<String>,
}

impl LiteDeck {
    /// Builds the 52 tokens, rank-major over `23456789TJQKA` and `dhsc`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::LiteDeck;
    ///
    /// let deck = LiteDeck::new();
    /// assert_eq!(deck.cards().len(), 52);
    /// assert_eq!(deck.cards()[0], "2d");
    /// assert_eq!(deck.cards()[51], "Ac");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for label in Label::ALL {
            for suit in LITE_SUITS {
                cards.push(Card::new(label, suit).lite_token());
            }
        }
        log::debug!("built lite deck of {} tokens", cards.len());
        Self { cards }
    }

    /// Returns the tokens.
    #[must_use]
    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    /// Converts every token into a checked card.
    ///
    /// # Errors
    ///
    /// Returns the first token error encountered.
    pub fn to_cards(&self) -> Result<Vec<Card>, LiteTokenError> {
        self.cards
            .iter()
            .map(|token| Card::from_lite_token(token.as_str()))
            .collect()
    }
}

impl Default for LiteDeck {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds an unchecked token deck.
#[must_use]
pub fn build_lite_deck() -> LiteDeck {
    LiteDeck::new()
}
