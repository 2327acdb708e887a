//! Shared deck instances.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::UnsupportedGameError;
use crate::game::Game;
use crate::options::DeckOptions;
use crate::sync::Mutex;

/// A cache that hands out one shared [`Deck`] per distinct [`DeckOptions`].
///
/// Decks are built lazily on first request. The lock is held while a missing
/// deck is built, so concurrent first requests for the same options still
/// produce a single instance.
///
/// ```
/// use std::sync::Arc;
///
/// use deckrs::{DeckCache, DeckOptions, Game};
///
/// let cache = DeckCache::new();
/// let a = cache.get(DeckOptions::for_game(Game::Poker));
/// let b = cache.get(DeckOptions::for_game(Game::Poker));
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Default)]
pub struct DeckCache {
    decks: Mutex<Vec<(DeckOptions, Arc<Deck>)>>,
}

impl DeckCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            decks: Mutex::new(Vec::new()),
        }
    }

    /// Returns the shared deck for `options`, building it if needed.
    pub fn get(&self, options: DeckOptions) -> Arc<Deck> {
        let mut decks = self.decks.lock();

        if let Some((_, deck)) = decks.iter().find(|(key, _)| *key == options) {
            log::trace!("deck cache hit for {}", options.game);
            return Arc::clone(deck);
        }

        let deck = Arc::new(Deck::with_options(options));
        decks.push((options, Arc::clone(&deck)));
        log::debug!("deck cache now holds {} deck(s)", decks.len());
        deck
    }

    /// Returns the shared deck for a game with default options.
    pub fn get_game(&self, game: Game) -> Arc<Deck> {
        self.get(DeckOptions::for_game(game))
    }

    /// Returns the number of decks built so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.lock().len()
    }

    /// Returns whether no deck has been built yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.lock().is_empty()
    }
}

static SHARED: DeckCache = DeckCache::new();

/// Returns the process-wide shared deck for a game tag.
///
/// Repeated calls with the same game return the same instance. Callers that
/// want isolation, such as tests, should hold their own [`DeckCache`].
///
/// # Errors
///
/// Returns [`UnsupportedGameError`] if the tag is not a supported game. No
/// deck is cached in that case.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// let a = deckrs::get_singleton_deck("poker").unwrap();
/// let b = deckrs::get_singleton_deck("POKER").unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub fn get_singleton_deck(tag: &str) -> Result<Arc<Deck>, UnsupportedGameError> {
    let game: Game = tag.parse()?;
    Ok(SHARED.get_game(game))
}
