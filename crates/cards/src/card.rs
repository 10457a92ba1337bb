// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::Error;

/// A Poker card.
///
/// A card is a rank and a suit, two cards are equal when both match. Cards can
/// be parsed from their text form, a rank followed by a suit:
///
/// ```
/// # use redraw_cards::{Card, Rank, Suit};
/// let card = "TH".parse::<Card>().unwrap();
/// assert_eq!(card, Card::new(Rank::Ten, Suit::Hearts));
/// assert_eq!("10♥".parse::<Card>().unwrap(), card);
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Create a card from a suit symbol and a rank value in 2..=14.
    ///
    /// Fails with [Error::InvalidCard] if the suit or the value is out of range.
    pub fn from_parts(suit: char, value: u8) -> Result<Card, Error> {
        let suit = Suit::from_char(suit)
            .ok_or_else(|| Error::InvalidCard(format!("invalid suit {suit:?}")))?;
        let rank = Rank::from_value(value)
            .ok_or_else(|| Error::InvalidCard(format!("invalid rank value {value}")))?;
        Ok(Card::new(rank, suit))
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The card index in a sorted deck, suits first and then ranks.
    pub fn index(&self) -> usize {
        self.suit as usize * 13 + (self.rank.value() as usize - 2)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Suit symbols may carry an emoji variation selector.
        let s = s.trim().trim_end_matches('\u{fe0f}');
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .ok_or_else(|| Error::InvalidCard("empty card".to_string()))?;
        let rank = chars.as_str();

        let value = match rank.to_ascii_uppercase().as_str() {
            "T" => 10,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            "A" => 14,
            n => n
                .parse::<u8>()
                .map_err(|_| Error::InvalidCard(format!("invalid rank {rank:?} in {s:?}")))?,
        };

        Card::from_parts(suit, value)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the rank with the given value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ranks().find(|r| r.value() == value)
    }

    /// The rank name, numeric up to ten and the face name above.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Returns the suit for a letter or a suit symbol.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'C' | 'c' | '♣' | '♧' => Some(Suit::Clubs),
            'D' | 'd' | '♦' | '♢' => Some(Suit::Diamonds),
            'H' | 'h' | '♥' | '♡' => Some(Suit::Hearts),
            'S' | 's' | '♠' | '♤' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Checks if all the cards have the same suit, true for zero or one card.
pub fn is_same_suit(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].suit() == w[1].suit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_index() {
        let mut indices = HashSet::default();
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.rank(), rank);
                assert_eq!(card.suit(), suit);
                assert!(card.index() < 52);
                indices.insert(card.index());
            }
        }

        assert_eq!(indices.len(), 52);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_parse() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!("AH".parse::<Card>().unwrap(), ah);
        assert_eq!("ah".parse::<Card>().unwrap(), ah);
        assert_eq!("A♥".parse::<Card>().unwrap(), ah);
        assert_eq!("14h".parse::<Card>().unwrap(), ah);

        let td = Card::new(Rank::Ten, Suit::Diamonds);
        assert_eq!("TD".parse::<Card>().unwrap(), td);
        assert_eq!("10D".parse::<Card>().unwrap(), td);
        assert_eq!(" 10♦ ".parse::<Card>().unwrap(), td);
        assert_eq!("10♦\u{fe0f}".parse::<Card>().unwrap(), td);

        // Display output parses back.
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
            }
        }
    }

    #[test]
    fn invalid_cards() {
        for s in ["", "A", "1H", "15S", "ZH", "AX", "AHH", "0C"] {
            assert!(
                matches!(s.parse::<Card>(), Err(Error::InvalidCard(_))),
                "{s:?} should not parse"
            );
        }

        assert!(matches!(Card::from_parts('S', 1), Err(Error::InvalidCard(_))));
        assert!(matches!(Card::from_parts('S', 15), Err(Error::InvalidCard(_))));
        assert!(matches!(Card::from_parts('X', 10), Err(Error::InvalidCard(_))));
        assert_eq!(
            Card::from_parts('♠', 2).unwrap(),
            Card::new(Rank::Deuce, Suit::Spades)
        );
    }

    #[test]
    fn rank_names() {
        let names = Rank::ranks().map(|r| r.name()).collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King", "Ace"
            ]
        );
        assert_eq!(Rank::from_value(11), Some(Rank::Jack));
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::Ace.value(), 14);
    }

    #[test]
    fn same_suit() {
        let cards = ["2S", "9S", "KS"]
            .iter()
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        assert!(is_same_suit(&cards));
        assert!(is_same_suit(&cards[..1]));
        assert!(is_same_suit(&[]));

        let mixed = [cards[0], "9H".parse().unwrap()];
        assert!(!is_same_suit(&mixed));
    }
}
