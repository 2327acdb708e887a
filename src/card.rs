//! Card types: labels, suits and cards.

use core::fmt;
use core::str::FromStr;

use alloc::string::{String, ToString};

use crate::error::{InvalidLabelError, InvalidSuitError, LiteTokenError};

/// Card face label.
///
/// Variants are declared in deck enumeration order, see [`Label::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Label {
    /// All labels, numeric labels first, then `J`, `Q`, `K`, `A`.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the literal value of a numeric label, or `None` for a face label.
    ///
    /// ```
    /// use deckrs::Label;
    ///
    /// assert_eq!(Label::Seven.pip_value(), Some(7));
    /// assert_eq!(Label::Queen.pip_value(), None);
    /// ```
    #[must_use]
    pub const fn pip_value(self) -> Option<u8> {
        if self.is_face() {
            None
        } else {
            Some(self.pip())
        }
    }

    /// Returns whether this is one of `J`, `Q`, `K`, `A`.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King | Self::Ace)
    }

    /// Face number of a numeric label. Two is discriminant 0.
    pub(crate) const fn pip(self) -> u8 {
        self as u8 + 2
    }

    /// Returns the label text, e.g. `"10"` or `"J"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns the single-character rank code used by lite tokens.
    #[must_use]
    pub const fn lite_char(self) -> char {
        match self {
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
            // Every other label is a single digit.
            pip => (b'0' + pip.pip()) as char,
        }
    }

    const fn from_lite_char(c: char) -> Option<Self> {
        let label = match c.to_ascii_uppercase() {
            '2' => Self::Two,
            '3' => Self::Three,
            '4' => Self::Four,
            '5' => Self::Five,
            '6' => Self::Six,
            '7' => Self::Seven,
            '8' => Self::Eight,
            '9' => Self::Nine,
            'T' => Self::Ten,
            'J' => Self::Jack,
            'Q' => Self::Queen,
            'K' => Self::King,
            'A' => Self::Ace,
            _ => return None,
        };
        Some(label)
    }
}

impl FromStr for Label {
    type Err = InvalidLabelError;

    /// Parses a label, ignoring ASCII case for the face letters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidLabelError {
                label: s.to_string(),
            })
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck enumeration order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit name, e.g. `"Hearts"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }

    /// Returns the lowercase suit code used by lite tokens.
    #[must_use]
    pub const fn lite_char(self) -> char {
        match self {
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
            Self::Spades => 's',
        }
    }

    const fn from_lite_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'h' => Some(Self::Hearts),
            'd' => Some(Self::Diamonds),
            'c' => Some(Self::Clubs),
            's' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl FromStr for Suit {
    type Err = InvalidSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidSuitError {
                suit: s.to_string(),
            })
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards order by label first and suit second, which is the order a
/// [`Deck`](crate::Deck) enumerates them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// The face label of the card.
    pub label: Label,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(label: Label, suit: Suit) -> Self {
        Self { label, suit }
    }

    /// Returns the two-character lite token for this card, e.g. `"Td"`.
    #[must_use]
    pub fn lite_token(&self) -> String {
        let mut token = String::with_capacity(2);
        token.push(self.label.lite_char());
        token.push(self.suit.lite_char());
        token
    }

    /// Converts a lite token back into a card.
    ///
    /// Both characters are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not two characters long or either
    /// character is not a known code.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Label, Suit};
    ///
    /// let card = Card::from_lite_token("Ts").unwrap();
    /// assert_eq!(card, Card::new(Label::Ten, Suit::Spades));
    /// ```
    pub fn from_lite_token(token: &str) -> Result<Self, LiteTokenError> {
        let mut chars = token.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(LiteTokenError::BadLength);
        };

        let label = Label::from_lite_char(rank).ok_or(LiteTokenError::UnknownRank(rank))?;
        let suit = Suit::from_lite_char(suit).ok_or(LiteTokenError::UnknownSuit(suit))?;
        Ok(Self::new(label, suit))
    }
}

impl From<(Label, Suit)> for Card {
    fn from((label, suit): (Label, Suit)) -> Self {
        Self::new(label, suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.label, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Label::ALL.len() * Suit::ALL.len();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pip_values_match_labels() {
        for label in Label::ALL {
            match label.pip_value() {
                Some(n) => assert_eq!(label.as_str(), n.to_string()),
                None => assert!(label.is_face()),
            }
        }
    }

    #[test]
    fn lite_chars_are_single_ascii() {
        let ranks: String = Label::ALL.iter().map(|l| l.lite_char()).collect();
        assert_eq!(ranks, "23456789TJQKA");
    }
}
