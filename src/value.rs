//! Card valuation.
//!
//! Numeric labels are worth their face number in every game. Only the four
//! face labels consult a per-game [`ValuationTable`].

use core::fmt;

use crate::card::Label;
use crate::error::ValueError;
use crate::game::Game;
use crate::options::{AceRule, DeckOptions};

/// The value of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardValue {
    /// A card with one value.
    Single(u8),
    /// A card that counts either way, low first (e.g. a blackjack ace).
    SoftHard(u8, u8),
}

impl CardValue {
    /// Returns the lowest value this card can take.
    #[must_use]
    pub const fn low(self) -> u8 {
        match self {
            Self::Single(n) | Self::SoftHard(n, _) => n,
        }
    }

    /// Returns the highest value this card can take.
    #[must_use]
    pub const fn high(self) -> u8 {
        match self {
            Self::Single(n) | Self::SoftHard(_, n) => n,
        }
    }

    /// Returns whether the card has two alternative values.
    #[must_use]
    pub const fn is_soft_hard(self) -> bool {
        matches!(self, Self::SoftHard(..))
    }
}

impl From<u8> for CardValue {
    fn from(n: u8) -> Self {
        Self::Single(n)
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(n) => write!(f, "{n}"),
            Self::SoftHard(low, high) => write!(f, "{low}/{high}"),
        }
    }
}

/// Face card values for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValuationTable {
    /// Jack.
    pub jack: CardValue,
    /// Queen.
    pub queen: CardValue,
    /// King.
    pub king: CardValue,
    /// Ace.
    pub ace: CardValue,
}

impl ValuationTable {
    /// Poker, ace high.
    pub const POKER: Self = Self {
        jack: CardValue::Single(11),
        queen: CardValue::Single(12),
        king: CardValue::Single(13),
        ace: CardValue::Single(14),
    };

    /// Poker with the ace also playing low.
    pub const POKER_DUAL_ACE: Self = Self {
        ace: CardValue::SoftHard(1, 14),
        ..Self::POKER
    };

    /// Blackjack.
    pub const BLACKJACK: Self = Self {
        jack: CardValue::Single(10),
        queen: CardValue::Single(10),
        king: CardValue::Single(10),
        ace: CardValue::SoftHard(1, 11),
    };

    /// Returns the table for a game with default options.
    #[must_use]
    pub const fn for_game(game: Game) -> Self {
        Self::for_options(&DeckOptions::for_game(game))
    }

    /// Returns the table selected by the given options.
    #[must_use]
    pub const fn for_options(options: &DeckOptions) -> Self {
        match (options.game, options.poker_ace) {
            (Game::Poker, AceRule::High) => Self::POKER,
            (Game::Poker, AceRule::Dual) => Self::POKER_DUAL_ACE,
            (Game::Blackjack, _) => Self::BLACKJACK,
        }
    }

    /// Returns the table entry for a face label, or `None` for a numeric label.
    #[must_use]
    pub const fn face_value(&self, label: Label) -> Option<CardValue> {
        if label.is_face() {
            Some(self.resolve(label))
        } else {
            None
        }
    }

    /// Resolves any label against this table.
    ///
    /// Numeric labels resolve to their face number and never read the table.
    #[must_use]
    pub const fn resolve(&self, label: Label) -> CardValue {
        match label {
            Label::Jack => self.jack,
            Label::Queen => self.queen,
            Label::King => self.king,
            Label::Ace => self.ace,
            pip => CardValue::Single(pip.pip()),
        }
    }
}

/// Resolves the value of a label, defaulting to poker when no game is given.
///
/// # Example
///
/// ```
/// use deckrs::{resolve_value, CardValue, Game, Label};
///
/// assert_eq!(resolve_value(Label::Ace, Some(Game::Blackjack)), CardValue::SoftHard(1, 11));
/// assert_eq!(resolve_value(Label::King, None), CardValue::Single(13));
/// ```
#[must_use]
pub const fn resolve_value(label: Label, game: Option<Game>) -> CardValue {
    let game = match game {
        Some(game) => game,
        None => Game::SUPPORTED[0],
    };
    ValuationTable::for_game(game).resolve(label)
}

/// Resolves the value of a label under the given deck options.
#[must_use]
pub const fn resolve_value_with(label: Label, options: &DeckOptions) -> CardValue {
    ValuationTable::for_options(options).resolve(label)
}

/// Resolves the value of a label given as text.
///
/// The label is matched case-insensitively. The game tag is validated before
/// the label is looked at, so an unsupported game is reported even for a
/// numeric label.
///
/// # Errors
///
/// Returns [`ValueError::UnsupportedGame`] for an unknown game tag and
/// [`ValueError::InvalidLabel`] for an unknown label.
///
/// # Example
///
/// ```
/// use deckrs::{resolve_value_str, CardValue};
///
/// assert_eq!(resolve_value_str("q", Some("poker")), Ok(CardValue::Single(12)));
/// assert!(resolve_value_str("7", Some("chess")).is_err());
/// ```
pub fn resolve_value_str(label: &str, game: Option<&str>) -> Result<CardValue, ValueError> {
    let game = Game::from_tag(game)?;
    let label: Label = label.parse()?;
    Ok(resolve_value(label, Some(game)))
}
