//! Blackjack hand scoring helpers.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::error::{ExerciseError, Result};

/// A single playing card, suit ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    /// Pip card `2..=10`.
    Number(u8),
    Jack,
    Queen,
    King,
    Ace,
}

impl Card {
    /// Scoring value: faces count 10, an ace counts 1.
    pub fn value(self) -> u8 {
        match self {
            Card::Number(pips) => pips,
            Card::Jack | Card::Queen | Card::King => 10,
            Card::Ace => 1,
        }
    }

    /// True for cards worth ten (`10`, `J`, `Q`, `K`).
    pub fn is_ten_card(self) -> bool {
        matches!(self, Card::Number(10) | Card::Jack | Card::Queen | Card::King)
    }
}

impl FromStr for Card {
    type Err = ExerciseError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "J" => Ok(Card::Jack),
            "Q" => Ok(Card::Queen),
            "K" => Ok(Card::King),
            "A" => Ok(Card::Ace),
            _ => match raw.parse::<u8>() {
                Ok(pips @ 2..=10) if !raw.starts_with('+') => Ok(Card::Number(pips)),
                _ => Err(ExerciseError::InvalidCard(raw.to_string())),
            },
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Number(pips) => write!(f, "{pips}"),
            Card::Jack => f.write_str("J"),
            Card::Queen => f.write_str("Q"),
            Card::King => f.write_str("K"),
            Card::Ace => f.write_str("A"),
        }
    }
}

impl Serialize for Card {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of comparing two cards by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Higher {
    One(Card),
    /// Both cards share the same value.
    Both(Card, Card),
}

/// Parse `raw` and return its scoring value.
pub fn value_of_card(raw: &str) -> Result<u8> {
    raw.parse::<Card>().map(Card::value)
}

pub fn higher_card(first: Card, second: Card) -> Higher {
    match first.value().cmp(&second.value()) {
        std::cmp::Ordering::Equal => Higher::Both(first, second),
        std::cmp::Ordering::Greater => Higher::One(first),
        std::cmp::Ordering::Less => Higher::One(second),
    }
}

/// Value an incoming ace should take given the two cards already in hand.
///
/// An ace already in hand forces the new one to count 1.
pub fn value_of_ace(first: Card, second: Card) -> u8 {
    if first == Card::Ace || second == Card::Ace {
        return 1;
    }
    if first.value() + second.value() <= 10 {
        11
    } else {
        1
    }
}

/// An ace plus a ten-card.
pub fn is_blackjack(first: Card, second: Card) -> bool {
    (first == Card::Ace && second.is_ten_card()) || (second == Card::Ace && first.is_ten_card())
}

pub fn can_split_pairs(first: Card, second: Card) -> bool {
    first.value() == second.value()
}

/// Hands totalling 9, 10 or 11 may double down.
pub fn can_double_down(first: Card, second: Card) -> bool {
    (9..=11).contains(&(first.value() + second.value()))
}
