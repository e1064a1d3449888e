use std::fmt;
use std::ops::Index;

use super::{Card, RSTrucoError};

/// Highest envido a hand can reach: 7 + 6 + 20.
pub const MAX_ENVIDO: u8 = 33;

/// An ordered list of cards.
///
/// Order matters for truco since cards are played in the
/// order they are held. Cards are unique within a hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Hand(Vec<Card>);

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_truco::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self(Vec::with_capacity(3))
    }

    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    /// Parse space separated card codes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_truco::core::{Card, Hand, Suit, Value};
    ///
    /// let hand = Hand::new_from_str("1e 1b 12c").unwrap();
    /// assert_eq!(3, hand.len());
    /// assert_eq!(Card::new(Value::Twelve, Suit::Copa), hand[2]);
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, RSTrucoError> {
        let mut hand = Hand::new();
        for code in hand_string.split_whitespace() {
            let card: Card = code.parse()?;
            if hand.contains(&card) {
                return Err(RSTrucoError::DuplicateCardInHand(card));
            }
            hand.0.push(card);
        }
        Ok(hand)
    }

    /// Given a card, is it in the current hand?
    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(c)
    }

    /// Add a card to the end of the hand.
    /// Returns false if the card was already there.
    pub fn push(&mut self, c: Card) -> bool {
        if self.contains(&c) {
            false
        } else {
            self.0.push(c);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// Sort so that the strongest truco card is first.
    /// Ties keep their current order.
    pub fn sort_for_truco(&mut self) {
        self.0.sort_by(|a, b| b.truco_rank().cmp(&a.truco_rank()));
    }

    /// Envido of the hand.
    ///
    /// Two or more cards of a suit score 20 plus the two best
    /// of them. Otherwise the best single card counts alone.
    /// Figures are worth zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_truco::core::Hand;
    ///
    /// let hand = Hand::new_from_str("7e 6e 1b").unwrap();
    /// assert_eq!(33, hand.envido());
    /// ```
    pub fn envido(&self) -> u8 {
        let mut cards = self.0.clone();
        cards.sort_by(|a, b| b.envido_value().cmp(&a.envido_value()));

        let mut best = cards.first().map(Card::envido_value).unwrap_or(0);
        for (i, first) in cards.iter().enumerate() {
            // Sorted, so the first partner found is the best one.
            if let Some(second) = cards[i + 1..].iter().find(|c| c.suit == first.suit) {
                best = best.max(20 + first.envido_value() + second.envido_value());
            }
        }
        best
    }
}

impl Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.0[index]
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.push(card);
        }
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
