//! A standard 52-card deck with per-game card valuation and optional `no_std`
//! support.
//!
//! Numeric cards are worth their face number in every game. Face cards are
//! valued by the game's table: in poker J=11, Q=12, K=13, A=14; in blackjack
//! J, Q and K are 10 and the ace counts as 1 or 11.
//!
//! # Example
//!
//! ```
//! use deckrs::{CardValue, Deck, Game, Label, Suit};
//!
//! let deck = Deck::new(Game::Blackjack);
//! assert_eq!(deck[(Label::Ace, Suit::Spades)], CardValue::SoftHard(1, 11));
//! assert_eq!(deck[(Label::King, Suit::Hearts)], CardValue::Single(10));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod cache;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod lite;
pub mod options;
mod sync;
pub mod value;

// Re-export main types
pub use cache::{DeckCache, get_singleton_deck};
pub use card::{Card, DECK_SIZE, Label, Suit};
pub use deck::{Deck, build_deck, build_deck_str};
pub use error::{
    InvalidLabelError, InvalidSuitError, LiteTokenError, UnsupportedGameError, ValueError,
};
pub use game::Game;
pub use lite::{LiteDeck, build_lite_deck};
pub use options::{AceRule, DeckOptions};
pub use value::{CardValue, ValuationTable, resolve_value, resolve_value_str, resolve_value_with};
