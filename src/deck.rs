//! A fully valued 52-card deck.

use core::fmt;
use core::ops::Index;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, DECK_SIZE, Label, Suit};
use crate::error::UnsupportedGameError;
use crate::game::Game;
use crate::options::DeckOptions;
use crate::value::{CardValue, ValuationTable};

/// A deck with every card valued under one game.
///
/// The deck holds exactly one entry per (label, suit) pair. Values are
/// resolved once, at construction, and never change.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Options the deck was built with.
    options: DeckOptions,
    /// Cards and their values in enumeration order.
    entries: Vec<(Card, CardValue)>,
    /// Position of each card in `entries`.
    index: HashMap<Card, usize>,
}

impl Deck {
    /// Builds a deck for the given game with default options.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{CardValue, Deck, Game, Label, Suit};
    ///
    /// let deck = Deck::new(Game::Poker);
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck[(Label::Jack, Suit::Hearts)], CardValue::Single(11));
    /// ```
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self::with_options(DeckOptions::for_game(game))
    }

    /// Builds a deck from options.
    ///
    /// Cards are enumerated label-major: every suit of `2`, then every suit of
    /// `3`, and so on up to `A`.
    #[must_use]
    pub fn with_options(options: DeckOptions) -> Self {
        let table = ValuationTable::for_options(&options);
        let mut entries = Vec::with_capacity(DECK_SIZE);
        let mut index = HashMap::with_capacity(DECK_SIZE);

        for label in Label::ALL {
            for suit in Suit::ALL {
                let card = Card::new(label, suit);
                index.insert(card, entries.len());
                entries.push((card, table.resolve(label)));
            }
        }

        log::debug!(
            "built {} card deck for {} (poker ace {:?})",
            entries.len(),
            options.game,
            options.poker_ace
        );

        Self {
            options,
            entries,
            index,
        }
    }

    /// Returns the game this deck was valued for.
    #[must_use]
    pub const fn game(&self) -> Game {
        self.options.game
    }

    /// Returns the options this deck was built with.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Returns the value of a card.
    #[must_use]
    pub fn get(&self, card: &Card) -> Option<CardValue> {
        self.index.get(card).map(|&i| self.entries[i].1)
    }

    /// Returns the value of the card with the given label and suit.
    #[must_use]
    pub fn value(&self, label: Label, suit: Suit) -> Option<CardValue> {
        self.get(&Card::new(label, suit))
    }

    /// Returns whether the deck holds the card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.index.contains_key(card)
    }

    /// Iterates cards and values in enumeration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Card, CardValue)> + '_ {
        self.entries.iter().copied()
    }

    /// Iterates cards in enumeration order.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = Card> + '_ {
        self.entries.iter().map(|&(card, _)| card)
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.options == other.options && self.entries == other.entries
    }
}

impl Eq for Deck {}

impl Index<&Card> for Deck {
    type Output = CardValue;

    fn index(&self, card: &Card) -> &CardValue {
        &self.entries[self.index[card]].1
    }
}

impl Index<(Label, Suit)> for Deck {
    type Output = CardValue;

    fn index(&self, (label, suit): (Label, Suit)) -> &CardValue {
        &self[&Card::new(label, suit)]
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck of cards for {}", self.options.game)
    }
}

/// Builds a deck for the given game.
#[must_use]
pub fn build_deck(game: Game) -> Deck {
    Deck::new(game)
}

/// Builds a deck for a game given by tag.
///
/// The tag is checked before any card is valued.
///
/// # Errors
///
/// Returns [`UnsupportedGameError`] if the tag is not a supported game.
///
/// # Example
///
/// ```
/// use deckrs::{build_deck_str, CardValue, Label, Suit};
///
/// let deck = build_deck_str("blackjack").unwrap();
/// assert_eq!(deck[(Label::Ace, Suit::Spades)], CardValue::SoftHard(1, 11));
/// assert!(build_deck_str("chess").is_err());
/// ```
pub fn build_deck_str(tag: &str) -> Result<Deck, UnsupportedGameError> {
    let game: Game = tag.parse()?;
    Ok(Deck::new(game))
}
