//! Deck integration tests.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use deckrs::{
    AceRule, Card, CardValue, DECK_SIZE, Deck, DeckCache, DeckOptions, Game, Label, LiteDeck,
    LiteTokenError, Suit, build_deck, build_deck_str, build_lite_deck, get_singleton_deck,
};

const fn card(label: Label, suit: Suit) -> Card {
    Card::new(label, suit)
}

#[test]
fn deck_has_every_label_and_suit_once() {
    let deck = build_deck(Game::Poker);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(DECK_SIZE, 52);

    let unique: HashSet<Card> = deck.cards().collect();
    assert_eq!(unique.len(), 52);

    for label in Label::ALL {
        for suit in Suit::ALL {
            assert!(deck.contains(&card(label, suit)), "{label} of {suit}");
        }
    }
}

#[test]
fn enumeration_is_label_major() {
    let deck = Deck::new(Game::Blackjack);
    let cards: Vec<Card> = deck.cards().collect();

    assert_eq!(cards[0], card(Label::Two, Suit::Hearts));
    assert_eq!(cards[1], card(Label::Two, Suit::Diamonds));
    assert_eq!(cards[3], card(Label::Two, Suit::Spades));
    assert_eq!(cards[4], card(Label::Three, Suit::Hearts));
    assert_eq!(cards[51], card(Label::Ace, Suit::Spades));

    let mut sorted = cards.clone();
    sorted.sort();
    assert_eq!(cards, sorted);
}

#[test]
fn end_to_end_lookups() {
    let blackjack = build_deck_str("blackjack").unwrap();
    assert_eq!(
        blackjack[(Label::Ace, Suit::Spades)],
        CardValue::SoftHard(1, 11)
    );
    assert_eq!(
        blackjack.value(Label::Queen, Suit::Clubs),
        Some(CardValue::Single(10))
    );

    let poker = build_deck_str("poker").unwrap();
    assert_eq!(poker[(Label::Jack, Suit::Hearts)], CardValue::Single(11));
    assert_eq!(
        poker.get(&card(Label::Ace, Suit::Diamonds)),
        Some(CardValue::Single(14))
    );
    assert_eq!(poker[&card(Label::Seven, Suit::Clubs)], CardValue::Single(7));
}

#[test]
fn numeric_cards_match_across_games() {
    let poker = Deck::new(Game::Poker);
    let blackjack = Deck::new(Game::Blackjack);

    for ((card, a), (_, b)) in poker.iter().zip(blackjack.iter()) {
        if let Some(n) = card.label.pip_value() {
            assert_eq!(a, CardValue::Single(n));
            assert_eq!(a, b);
        }
    }
}

#[test]
fn unsupported_game_builds_nothing() {
    let err = build_deck_str("chess").unwrap_err();
    assert_eq!(err.tag, "chess");
    assert!(get_singleton_deck("chess").is_err());
}

#[test]
fn tag_is_case_insensitive() {
    let deck = build_deck_str("BlackJack").unwrap();
    assert_eq!(deck.game(), Game::Blackjack);
    assert_eq!(deck.to_string(), "Deck of cards for blackjack");
}

#[test]
fn rebuilt_decks_are_equal() {
    let a = build_deck(Game::Poker);
    let b = build_deck(Game::Poker);
    assert_eq!(a, b);
    assert_ne!(a, build_deck(Game::Blackjack));
}

#[test]
fn dual_ace_deck() {
    let options = DeckOptions::default().with_poker_ace(AceRule::Dual);
    let deck = Deck::with_options(options);
    assert_eq!(deck.options(), &options);
    for suit in Suit::ALL {
        assert_eq!(deck[(Label::Ace, suit)], CardValue::SoftHard(1, 14));
    }
    assert_ne!(deck, Deck::new(Game::Poker));
}

#[test]
fn singleton_deck_keeps_identity() {
    let a = get_singleton_deck("poker").unwrap();
    let b = get_singleton_deck("poker").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(*a, build_deck(Game::Poker));

    let c = get_singleton_deck("blackjack").unwrap();
    assert!(!Arc::ptr_eq(&a, &c));
}

#[test]
fn cache_is_keyed_by_options() {
    let cache = DeckCache::new();
    assert!(cache.is_empty());

    let poker = cache.get_game(Game::Poker);
    let again = cache.get(DeckOptions::default());
    assert!(Arc::ptr_eq(&poker, &again));
    assert_eq!(cache.len(), 1);

    let dual = cache.get(DeckOptions::default().with_poker_ace(AceRule::Dual));
    assert!(!Arc::ptr_eq(&poker, &dual));
    assert_eq!(cache.len(), 2);
}

#[test]
fn separate_caches_do_not_share() {
    let first = DeckCache::new();
    let second = DeckCache::new();
    let a = first.get_game(Game::Blackjack);
    let b = second.get_game(Game::Blackjack);
    assert_eq!(a, b);
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn concurrent_first_access_builds_one_deck() {
    let cache = Arc::new(DeckCache::new());

    let decks: Vec<Arc<Deck>> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || cache.get_game(Game::Blackjack))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(cache.len(), 1);
    for deck in &decks[1..] {
        assert!(Arc::ptr_eq(&decks[0], deck));
    }
}

#[test]
fn lite_deck_tokens() {
    let deck = build_lite_deck();
    let tokens = deck.cards();
    assert_eq!(tokens.len(), 52);
    assert_eq!(&tokens[..4], ["2d", "2h", "2s", "2c"]);
    assert!(tokens.contains(&"Th".to_string()));
    assert_eq!(tokens[51], "Ac");

    let unique: HashSet<&String> = tokens.iter().collect();
    assert_eq!(unique.len(), 52);
    assert_eq!(deck, LiteDeck::default());
}

#[test]
fn lite_deck_converts_to_checked_cards() {
    let cards = build_lite_deck().to_cards().unwrap();
    let unique: HashSet<Card> = cards.iter().copied().collect();
    let full: HashSet<Card> = Deck::new(Game::Poker).cards().collect();
    assert_eq!(unique, full);

    for card in cards {
        assert_eq!(Card::from_lite_token(&card.lite_token()), Ok(card));
    }
}

#[test]
fn bad_lite_tokens() {
    assert_eq!(Card::from_lite_token("A"), Err(LiteTokenError::BadLength));
    assert_eq!(Card::from_lite_token("10h"), Err(LiteTokenError::BadLength));
    assert_eq!(
        Card::from_lite_token("1h"),
        Err(LiteTokenError::UnknownRank('1'))
    );
    assert_eq!(
        Card::from_lite_token("Ax"),
        Err(LiteTokenError::UnknownSuit('x'))
    );
    assert_eq!(
        Card::from_lite_token("qS"),
        Ok(card(Label::Queen, Suit::Spades))
    );
}

#[test]
fn text_forms() {
    assert_eq!(card(Label::Ace, Suit::Spades).to_string(), "A of Spades");
    assert_eq!(card(Label::Ten, Suit::Hearts).to_string(), "10 of Hearts");
    assert_eq!("diamonds".parse::<Suit>(), Ok(Suit::Diamonds));
    assert!("Stars".parse::<Suit>().is_err());
    assert_eq!("j".parse::<Label>(), Ok(Label::Jack));
    assert_eq!(Game::Poker.to_string(), "poker");
}
