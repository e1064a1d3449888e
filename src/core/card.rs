use std::fmt;
use std::str::FromStr;

use super::RSTrucoError;

/// Card number in the 40 card Spanish deck.
/// There are no eights or nines; the figures are 10, 11 and 12.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 1 (as)
    One = 1,
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 10 (sota)
    Ten = 10,
    /// 11 (caballo)
    Eleven = 11,
    /// 12 (rey)
    Twelve = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 10] = [
    Value::One,
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Ten,
    Value::Eleven,
    Value::Twelve,
];

impl Value {
    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub fn values() -> [Value; 10] {
        VALUES
    }

    /// Convert a card number into a value.
    /// Returns `None` for numbers that are not in the deck.
    pub fn from_number(n: u8) -> Option<Value> {
        match n {
            1 => Some(Value::One),
            2 => Some(Value::Two),
            3 => Some(Value::Three),
            4 => Some(Value::Four),
            5 => Some(Value::Five),
            6 => Some(Value::Six),
            7 => Some(Value::Seven),
            10 => Some(Value::Ten),
            11 => Some(Value::Eleven),
            12 => Some(Value::Twelve),
            _ => None,
        }
    }

    /// The printed number of the card.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// 10, 11 and 12 are figures. They count zero for envido.
    pub fn is_figure(self) -> bool {
        self.number() >= 10
    }
}

/// Enum for the four Spanish suits.
/// The ordering is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Espadas
    Espada = 0,
    /// Bastos
    Basto = 1,
    /// Oros
    Oro = 2,
    /// Copas
    Copa = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Espada, Suit::Basto, Suit::Oro, Suit::Copa];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Parse the single letter suit code. Upper case is accepted.
    pub fn from_char(s: char) -> Option<Suit> {
        match s.to_ascii_lowercase() {
            'e' => Some(Suit::Espada),
            'b' => Some(Suit::Basto),
            'o' => Some(Suit::Oro),
            'c' => Some(Suit::Copa),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Espada => 'e',
            Suit::Basto => 'b',
            Suit::Oro => 'o',
            Suit::Copa => 'c',
        }
    }
}

/// A carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Relative strength of the card when playing truco.
    /// If `a.truco_rank() > b.truco_rank()` then `a` beats `b`;
    /// equal ranks tie.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_truco::core::{Card, Suit, Value};
    ///
    /// let ancho = Card::new(Value::One, Suit::Espada);
    /// let tres = Card::new(Value::Three, Suit::Copa);
    /// assert!(ancho.truco_rank() > tres.truco_rank());
    /// ```
    pub fn truco_rank(&self) -> u8 {
        match (self.value, self.suit) {
            (Value::One, Suit::Espada) => 14,
            (Value::One, Suit::Basto) => 13,
            (Value::Seven, Suit::Espada) => 12,
            (Value::Seven, Suit::Oro) => 11,
            (Value::Three, _) => 10,
            (Value::Two, _) => 9,
            (Value::One, _) => 8,
            (Value::Twelve, _) => 7,
            (Value::Eleven, _) => 6,
            (Value::Ten, _) => 5,
            (Value::Seven, _) => 4,
            (Value::Six, _) => 3,
            (Value::Five, _) => 2,
            (Value::Four, _) => 1,
        }
    }

    /// Points the card is worth for envido.
    pub fn envido_value(&self) -> u8 {
        if self.value.is_figure() {
            0
        } else {
            self.value.number()
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.number(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = RSTrucoError;

    /// Parse a card code such as `1e`, `7o` or `12c`.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let mut chars = code.chars();
        let first = chars.next().ok_or(RSTrucoError::TooFewChars)?;
        let mut number = first
            .to_digit(10)
            .ok_or(RSTrucoError::UnexpectedValueChar)?;

        let mut next = chars.next().ok_or(RSTrucoError::TooFewChars)?;
        // Two digit figures: 10, 11, 12
        if let Some(d) = next.to_digit(10) {
            number = number * 10 + d;
            next = chars.next().ok_or(RSTrucoError::TooFewChars)?;
        }

        let value = u8::try_from(number)
            .ok()
            .and_then(Value::from_number)
            .ok_or(RSTrucoError::UnexpectedValueChar)?;
        let suit = Suit::from_char(next).ok_or(RSTrucoError::UnexpectedSuitChar)?;

        if chars.next().is_some() {
            return Err(RSTrucoError::UnparsedCharsRemaining);
        }
        Ok(Card { value, suit })
    }
}
